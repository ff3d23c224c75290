use leptos::prelude::*;

/// Retro PC-window frame wrapping most content sections.
///
/// `accent` flips to the alternate title-bar color so adjacent windows
/// don't blur together on the page.
#[component]
pub fn RetroWindow(
    title: &'static str,
    #[prop(into, optional)] id: Option<&'static str>,
    #[prop(optional)] accent: bool,
    children: Children,
) -> impl IntoView {
    let class = if accent { "retro-window accent" } else { "retro-window" };
    view! {
        <section id=id class=class>
            <div class="window-titlebar">
                <div class="window-dot red"></div>
                <div class="window-dot yellow"></div>
                <div class="window-dot green"></div>
                <span class="window-title">{title}</span>
            </div>
            <div class="window-body">{children()}</div>
        </section>
    }
}
