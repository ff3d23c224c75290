use leptos::prelude::*;

use super::window::RetroWindow;
use crate::config::{CONTACT_EMAIL, CONTACT_PHONE};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <RetroWindow title="Contact Us" id="contact">
            <div class="contact-block">
                <p>"For any queries, please contact us:"</p>
                <p class="contact-strong">"Phone: " {CONTACT_PHONE}</p>
                <p class="contact-strong">"Email: " {CONTACT_EMAIL}</p>
            </div>
        </RetroWindow>
    }
}
