// Dev-o-lution Landing Page — Leptos 0.8 Edition

mod config;
mod net;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <ConsoleArt />
        <Nav />
        <main>
            <Hero />
            <About />
            <Timeline />
            <Tracks />
            <Hashtag />
            <Team />
            <Sponsors />
            <Faq />
            <Register />
            <Proposal />
            <Contact />
        </main>
        <Footer />
    }
}
