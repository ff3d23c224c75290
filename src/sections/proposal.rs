use leptos::prelude::*;

use super::window::RetroWindow;
use crate::net::{self, ProposalSubmission, SubmitOutcome};

/// Speaker proposal form. Submitting fires one webhook POST; the outcome
/// lands in a one-slot signal the notice line renders from. The button is
/// deliberately not locked while a request is in flight, so a second click
/// is a second independent submission.
#[component]
pub fn Proposal() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let talk_title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let outcome = RwSignal::new(None::<SubmitOutcome>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Snapshot the fields now; edits made while the request is in
        // flight must not leak into this payload.
        let proposal = ProposalSubmission {
            name: name.get(),
            email: email.get(),
            talk_title: talk_title.get(),
            description: description.get(),
        };
        outcome.set(None);
        leptos::task::spawn_local(async move {
            outcome.set(Some(net::submit_proposal(&proposal).await));
        });
    };

    view! {
        <RetroWindow title="Want to Share Your Knowledge?">
            <form class="retro-form" on:submit=submit>
                <input
                    class="retro-input"
                    type="text"
                    name="name"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="retro-input"
                    type="email"
                    name="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="retro-input"
                    type="text"
                    name="talkTitle"
                    placeholder="Talk Title"
                    prop:value=move || talk_title.get()
                    on:input=move |ev| talk_title.set(event_target_value(&ev))
                />
                <textarea
                    class="retro-input retro-textarea"
                    name="description"
                    placeholder="Brief description of your talk"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="btn btn-block hover-lift">
                    "Submit Speaker Proposal"
                </button>
            </form>
            {move || {
                outcome.get().map(|o| {
                    let class = if o.is_sent() { "form-notice sent" } else { "form-notice failed" };
                    view! { <p class=class>{o.notice()}</p> }
                })
            }}
        </RetroWindow>
    }
}
