//! Event facts shared across sections (single source of truth).

pub const EVENT_NAME: &str = "Dev-o-lution";
pub const EVENT_TAGLINE: &str = "Where Code Evolves and Innovation Thrives";
pub const EVENT_DATE: &str = "January 19, 2025";
pub const EVENT_VENUE: &str = "DAIICT Campus";

/// Participant registration is announced but not yet open. The speaker
/// proposal form goes live first; flip this once sign-ups start.
pub const REGISTRATION_OPEN: bool = false;

pub const HASHTAG: &str = "#dev-o-lution";
pub const CONTACT_PHONE: &str = "7041180305";
pub const CONTACT_EMAIL: &str = "dsc@daiict.ac.in";
