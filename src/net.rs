//! Speaker proposal submission.
//!
//! One POST to the Discord webhook bridge per form submit; only the
//! response status class is inspected. Every failure path collapses into
//! a [`SubmitOutcome`] so the form never sees an error type, only a value
//! it maps to a notice.

use serde::Serialize;

/// Relative endpoint that forwards proposals to the event Discord channel.
pub const PROPOSAL_ENDPOINT: &str = "/api/discord-webhook";

/// One speaker proposal as entered in the form. Serialized with the
/// webhook's camelCase field names; empty strings are forwarded as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalSubmission {
    pub name: String,
    pub email: String,
    pub talk_title: String,
    pub description: String,
}

/// Terminal state of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The webhook bridge answered with a 2xx status.
    Sent,
    /// An HTTP response arrived with a non-success status.
    Rejected(u16),
    /// The request failed before any response arrived.
    TransportFailed,
}

impl SubmitOutcome {
    pub fn is_sent(self) -> bool {
        matches!(self, Self::Sent)
    }

    /// Notice rendered under the form. Server rejections and transport
    /// failures read the same to the user; the distinction only survives
    /// in the variant and the console log.
    pub fn notice(self) -> &'static str {
        match self {
            Self::Sent => "Your submission has been sent successfully!",
            Self::Rejected(_) | Self::TransportFailed => "Failed to submit. Please try again.",
        }
    }
}

fn classify_status(status: u16) -> SubmitOutcome {
    if (200..300).contains(&status) {
        SubmitOutcome::Sent
    } else {
        SubmitOutcome::Rejected(status)
    }
}

/// Send one proposal to [`PROPOSAL_ENDPOINT`].
///
/// Exactly one request per call: no retries, no queuing, no timeout beyond
/// the browser's own. A duplicate click upstream produces a second,
/// fully independent call.
pub async fn submit_proposal(proposal: &ProposalSubmission) -> SubmitOutcome {
    let request = match gloo_net::http::Request::post(PROPOSAL_ENDPOINT).json(proposal) {
        Ok(request) => request,
        Err(err) => {
            log::error!("proposal payload could not be encoded: {err}");
            return SubmitOutcome::TransportFailed;
        }
    };
    match request.send().await {
        Ok(resp) => classify_status(resp.status()),
        Err(err) => {
            log::error!("proposal request failed before a response: {err}");
            SubmitOutcome::TransportFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProposalSubmission {
        ProposalSubmission {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            talk_title: "Programs as Data".into(),
            description: "Notes on the Analytical Engine.".into(),
        }
    }

    #[test]
    fn proposal_serializes_with_webhook_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "talkTitle": "Programs as Data",
                "description": "Notes on the Analytical Engine.",
            })
        );
    }

    #[test]
    fn empty_description_is_forwarded_as_empty_string() {
        let proposal = ProposalSubmission {
            description: String::new(),
            ..sample()
        };
        let json = serde_json::to_value(proposal).unwrap();
        assert_eq!(json["description"], serde_json::json!(""));
    }

    #[test]
    fn success_statuses_classify_as_sent() {
        assert_eq!(classify_status(200), SubmitOutcome::Sent);
        assert_eq!(classify_status(204), SubmitOutcome::Sent);
        assert!(classify_status(200).is_sent());
    }

    #[test]
    fn error_statuses_classify_as_rejected_with_status() {
        assert_eq!(classify_status(404), SubmitOutcome::Rejected(404));
        assert_eq!(classify_status(500), SubmitOutcome::Rejected(500));
        assert!(!classify_status(500).is_sent());
    }

    #[test]
    fn redirects_are_not_success() {
        assert_eq!(classify_status(301), SubmitOutcome::Rejected(301));
    }

    #[test]
    fn rejection_and_transport_failure_read_the_same_to_users() {
        assert_eq!(
            SubmitOutcome::Rejected(500).notice(),
            SubmitOutcome::TransportFailed.notice()
        );
        assert_ne!(
            SubmitOutcome::Sent.notice(),
            SubmitOutcome::TransportFailed.notice()
        );
    }

    #[test]
    fn rapid_submissions_build_independent_payloads() {
        let first = sample();
        let second = ProposalSubmission {
            talk_title: "Engines, Revisited".into(),
            ..sample()
        };
        let first_json = serde_json::to_value(&first).unwrap();
        let second_json = serde_json::to_value(&second).unwrap();
        assert_eq!(first_json["talkTitle"], serde_json::json!("Programs as Data"));
        assert_eq!(second_json["talkTitle"], serde_json::json!("Engines, Revisited"));
    }
}
