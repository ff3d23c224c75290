// Landing page sections, in page order.

mod about;
mod console_art;
mod contact;
mod faq;
mod footer;
mod hashtag;
mod hero;
mod nav;
mod proposal;
mod register;
mod sponsors;
mod team;
mod timeline;
mod tracks;
mod window;

pub use about::About;
pub use console_art::ConsoleArt;
pub use contact::Contact;
pub use faq::Faq;
pub use footer::Footer;
pub use hashtag::Hashtag;
pub use hero::Hero;
pub use nav::Nav;
pub use proposal::Proposal;
pub use register::Register;
pub use sponsors::Sponsors;
pub use team::Team;
pub use timeline::Timeline;
pub use tracks::Tracks;

/// Smooth-scroll the viewport to the section with the given id.
/// Silently does nothing if the id is not on the page.
pub(crate) fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(section) = document.get_element_by_id(id) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}
