use leptos::prelude::*;

use super::window::RetroWindow;
use crate::config::{EVENT_DATE, EVENT_VENUE};

/// Marker glyph + label for the info chip grid under the about copy.
const INFO_CHIPS: &[(&str, &str)] = &[
    ("</>", "Cutting-edge Tech"),
    ("[ai]", "AI & Machine Learning"),
    ("[@]", EVENT_DATE),
    ("[#]", EVENT_VENUE),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <RetroWindow title="About Dev-o-lution" id="about">
            <p class="window-copy">
                "Dev-o-lution is where coding meets creativity, and innovation breaks free "
                "from convention. Join us for workshops, talks, and mind-expanding sessions "
                "that will revolutionize your dev skills!"
            </p>
            <div class="chip-grid">
                {INFO_CHIPS
                    .iter()
                    .map(|&(glyph, label)| {
                        view! {
                            <div class="info-chip">
                                <span class="chip-glyph">{glyph}</span>
                                <span>{label}</span>
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
    fn chip_grid_names_date_and_venue() {
        let labels: Vec<&str> = INFO_CHIPS.iter().map(|&(_, l)| l).collect();
        assert!(labels.contains(&EVENT_DATE));
        assert!(labels.contains(&EVENT_VENUE));
        assert_eq!(labels.len(), 4);
    }
}
