use leptos::prelude::*;

use super::window::RetroWindow;
use crate::config::HASHTAG;

#[component]
pub fn Hashtag() -> impl IntoView {
    view! {
        <RetroWindow title="Join the Conversation">
            <div class="hashtag-block">
                <p class="hashtag-lead">"Use our hashtag and win prizes!"</p>
                <p class="hashtag-tag">{HASHTAG}</p>
                <p>
                    "Share your excitement, ideas, or projects on Twitter using our hashtag "
                    "for a chance to win amazing prizes!"
                </p>
            </div>
        </RetroWindow>
    }
}
