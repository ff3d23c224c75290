use leptos::prelude::*;

use super::scroll_to_section;
use crate::config::EVENT_NAME;

/// Nav label and target section id, in display order.
const NAV_SECTIONS: &[(&str, &str)] = &[
    ("About", "about"),
    ("Timeline", "timeline"),
    ("Tracks", "tracks"),
    ("Team", "team"),
    ("Sponsors", "sponsors"),
    ("FAQs", "faqs"),
    ("Contact", "contact"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (drawer_open, set_drawer_open) = signal(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <div class="nav-logo spin-slow">
                        <span class="nav-logo-letter">"D"</span>
                    </div>
                    <span class="nav-title">{EVENT_NAME}</span>
                </a>
                <div class="nav-links">
                    {NAV_SECTIONS
                        .iter()
                        .map(|&(label, target)| {
                            view! {
                                <button
                                    class="nav-link hover-lift"
                                    on:click=move |_| scroll_to_section(target)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        class="nav-cta"
                        on:click=move |_| scroll_to_section("register")
                    >
                        "Register Now"
                    </button>
                </div>
                <button
                    class="nav-menu-btn"
                    on:click=move |_| set_drawer_open.update(|o| *o = !*o)
                >
                    {move || if drawer_open.get() { "Close" } else { "Menu" }}
                </button>
            </div>

            // Mobile drawer; navigating closes it, like the desktop links never need to.
            <Show when=move || drawer_open.get()>
                <div class="nav-drawer">
                    {NAV_SECTIONS
                        .iter()
                        .map(|&(label, target)| {
                            view! {
                                <button
                                    class="drawer-link"
                                    on:click=move |_| {
                                        scroll_to_section(target);
                                        set_drawer_open.set(false);
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        class="nav-cta drawer-cta"
                        on:click=move |_| {
                            scroll_to_section("register");
                            set_drawer_open.set(false);
                        }
                    >
                        "Register Now"
                    </button>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_targets_are_unique() {
        let mut targets: Vec<&str> = NAV_SECTIONS.iter().map(|&(_, t)| t).collect();
        targets.sort_unstable();
        targets.dedup();
        assert_eq!(targets.len(), NAV_SECTIONS.len());
    }

    #[test]
    fn nav_targets_are_lowercase_ids() {
        for &(_, target) in NAV_SECTIONS {
            assert!(target.chars().all(|c| c.is_ascii_lowercase()), "bad id: {target}");
        }
    }
}
