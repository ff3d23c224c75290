use leptos::prelude::*;

use super::window::RetroWindow;

const TEAM_GROUPS: &[(&str, &[&str])] = &[
    (
        "Core Team",
        &[
            "Abhishek Abbi",
            "Parth Vadodaria",
            "Jash Shah",
            "Harsh Gajjar",
            "Dhruv Jain",
            "Pranshu Patel",
        ],
    ),
    (
        "Website Design & Development",
        &[
            "Aditya Dave",
            "Atik",
            "Tirth Patel",
            "Param Savjani",
            "Kalp Chaniyara",
            "Agrim Sharma",
        ],
    ),
    (
        "PR & Sponsorship",
        &["Neel Khatri", "Nisarg", "Anushree", "Anandita", "Prakriti Pandey"],
    ),
];

#[component]
pub fn Team() -> impl IntoView {
    view! {
        <RetroWindow title="Our Team" id="team" accent=true>
            <div class="team-grid">
                {TEAM_GROUPS
                    .iter()
                    .map(|&(group, members)| {
                        view! {
                            <div class="team-column">
                                <h3 class="team-heading">{group}</h3>
                                <ul class="team-list">
                                    {members.iter().map(|&m| view! { <li>{m}</li> }).collect_view()}
                                </ul>
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
    fn every_team_group_has_members() {
        assert_eq!(TEAM_GROUPS.len(), 3);
        for &(group, members) in TEAM_GROUPS {
            assert!(!members.is_empty(), "empty group: {group}");
        }
    }
}
