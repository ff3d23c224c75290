use leptos::prelude::*;

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("OSS GitHub", "https://github.com/ossdaiict"),
    ("GDG GitHub", "https://github.com/gdg-da"),
    ("LinkedIn", "https://www.linkedin.com/company/gdg-on-campus-daiict/"),
    ("Instagram", "https://www.instagram.com/gdg.daiict/"),
    ("X (Twitter)", "https://x.com/gdgdaiict"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer-copyright">
                "© 2025 Dev-o-lution | Organized by GDG on DAIICT campus"
            </p>
            <div class="footer-links">
                {SOCIAL_LINKS
                    .iter()
                    .map(|&(label, href)| {
                        view! {
                            <a href=href target="_blank" class="footer-link hover-lift">
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_links_are_absolute_urls() {
        for &(label, href) in SOCIAL_LINKS {
            assert!(href.starts_with("https://"), "relative link for {label}");
        }
    }
}
