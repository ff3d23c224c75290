use leptos::prelude::*;

use super::window::RetroWindow;

// Placeholder tiles until the sponsor roster is signed.
const SPONSORS: &[&str] = &["Sponsor1", "Sponsor2", "Sponsor3", "Sponsor4"];

#[component]
pub fn Sponsors() -> impl IntoView {
    view! {
        <RetroWindow title="Our Sponsors" id="sponsors">
            <div class="sponsor-grid">
                {SPONSORS
                    .iter()
                    .map(|&sponsor| {
                        view! {
                            <div class="sponsor-tile float">
                                <span class="sponsor-name">{sponsor}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </RetroWindow>
    }
}
