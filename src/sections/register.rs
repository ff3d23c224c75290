use leptos::prelude::*;

use super::window::RetroWindow;
use crate::config::REGISTRATION_OPEN;

/// Participant registration window. The form only renders once
/// [`REGISTRATION_OPEN`] flips; until then visitors get the teaser notice.
#[component]
pub fn Register() -> impl IntoView {
    view! {
        <RetroWindow title="Ready to Evolve?" id="register">
            <Show
                when=|| REGISTRATION_OPEN
                fallback=|| {
                    view! {
                        <div class="register-teaser">
                            <p class="register-lead">"Registration for Dev-o-lution are coming soon!"</p>
                            <p class="register-strong">"See you at the event!"</p>
                        </div>
                    }
                }
            >
                <form class="retro-form">
                    <input class="retro-input" type="text" name="name" placeholder="Name" />
                    <input class="retro-input" type="email" name="email" placeholder="Email" />
                    <button type="submit" class="btn btn-block">
                        "Register for Dev-o-lution"
                    </button>
                </form>
            </Show>
        </RetroWindow>
    }
}
