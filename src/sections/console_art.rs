//! Console greeting for visitors who open devtools.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::config::{EVENT_DATE, EVENT_NAME, HASHTAG};

fn ascii_logo() -> String {
    format!(
        r#"
     ___                          _       _   _
    /   \_____   __   ___        | |_   _| |_(_) ___  _ __
   / /\ / _ \ \ / /__/ _ \ _____ | | | | | __| |/ _ \| '_ \
  / /_//  __/\ V /__| (_) |_____|| | |_| | |_| | (_) | | | |
 /___,' \___| \_/    \___/       |_|\__,_|\__|_|\___/|_| |_|

  {EVENT_NAME} | {EVENT_DATE}
"#
    )
}

/// Prints the boot banner once on mount. Renders nothing.
#[component]
pub fn ConsoleArt() -> impl IntoView {
    Effect::new(move || {
        print_banner();
    });

    view! {}
}

fn print_banner() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", ascii_logo())),
        &JsValue::from_str("color: #ff6b6b; font-family: monospace; font-size: 11px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str(&format!(
            "%c(^_^) Tweet with {HASHTAG} for a chance to win prizes"
        )),
        &JsValue::from_str("color: #4ecdc4;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%c(o_o) Speaking slots are open — scroll to the proposal form"),
        &JsValue::from_str("color: #ffcc00;"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_names_the_event() {
        let logo = ascii_logo();
        assert!(logo.contains(EVENT_NAME));
        assert!(logo.contains(EVENT_DATE));
    }
}
