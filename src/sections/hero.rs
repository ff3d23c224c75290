use leptos::prelude::*;

use super::scroll_to_section;
use crate::config::{EVENT_NAME, EVENT_TAGLINE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero-title glitch" data-text=EVENT_NAME>
                {EVENT_NAME}
            </h1>
            <p class="hero-tagline typewriter">{EVENT_TAGLINE}</p>
            <button
                class="btn btn-primary pulse"
                on:click=move |_| scroll_to_section("register")
            >
                "Join the Evolution"
            </button>
        </section>
    }
}
