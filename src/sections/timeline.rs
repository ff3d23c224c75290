use leptos::prelude::*;

use super::window::RetroWindow;

struct Milestone {
    date: &'static str,
    label: &'static str,
    glyph: &'static str,
}

/// Road to the event, oldest first.
const MILESTONES: &[Milestone] = &[
    Milestone { date: "Dec 12, 2024", label: "Speaker Registration Opens", glyph: "[~]" },
    Milestone { date: "Dec 31, 2024", label: "Speaker Registration Closes", glyph: "[>]" },
    Milestone { date: "Jan 1, 2025", label: "Participant Registration Opens", glyph: "</>" },
    Milestone { date: "Jan 19, 2025", label: "Dev-o-lution Event", glyph: "[*]" },
];

#[component]
pub fn Timeline() -> impl IntoView {
    view! {
        <RetroWindow title="Event Timeline" id="timeline" accent=true>
            <div class="timeline-row">
                {MILESTONES
                    .iter()
                    .map(|m| {
                        view! {
                            <div class="milestone float">
                                <div class="milestone-badge">{m.glyph}</div>
                                <p class="milestone-date">{m.date}</p>
                                <p>{m.label}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </RetroWindow>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_has_four_distinct_milestones() {
        let mut labels: Vec<&str> = MILESTONES.iter().map(|m| m.label).collect();
        assert_eq!(labels.len(), 4);
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 4);
    }

    #[test]
    fn timeline_ends_on_event_day() {
        let last = MILESTONES.last().unwrap();
        assert_eq!(last.label, "Dev-o-lution Event");
        assert_eq!(last.date, "Jan 19, 2025");
    }
}
