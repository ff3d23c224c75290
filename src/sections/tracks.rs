use leptos::prelude::*;

struct Track {
    key: &'static str,
    tab: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const TRACKS: &[Track] = &[
    Track {
        key: "web3",
        tab: "Web3",
        title: "Web3 & Blockchain",
        blurb: "Explore decentralized applications and the future of the web.",
    },
    Track {
        key: "ai",
        tab: "AI/ML",
        title: "Artificial Intelligence & Machine Learning",
        blurb: "Dive into intelligent systems and algorithms to solve complex problems.",
    },
    Track {
        key: "mobile",
        tab: "Mobile",
        title: "Mobile Development",
        blurb: "Create innovative mobile applications for iOS and Android platforms.",
    },
    Track {
        key: "iot",
        tab: "IoT",
        title: "Internet of Things",
        blurb: "Connect devices and build smart systems for the interconnected world.",
    },
];

const DEFAULT_TRACK: &str = "web3";

fn find_track(key: &str) -> Option<&'static Track> {
    TRACKS.iter().find(|t| t.key == key)
}

#[component]
pub fn Tracks() -> impl IntoView {
    let (active_track, set_active_track) = signal(DEFAULT_TRACK);

    view! {
        <section id="tracks" class="tracks">
            <h2 class="section-title">"Dev-o-lution Tracks"</h2>
            <div class="track-tabs">
                {TRACKS
                    .iter()
                    .map(|t| {
                        let key = t.key;
                        view! {
                            <button
                                class=move || {
                                    if active_track.get() == key { "track-tab active" } else { "track-tab" }
                                }
                                on:click=move |_| set_active_track.set(key)
                            >
                                {t.tab}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="track-panel slide-in">
                {move || {
                    find_track(active_track.get()).map(|t| {
                        view! {
                            <h3 class="track-title">{t.title}</h3>
                            <p>{t.blurb}</p>
                        }
                    })
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_track_exists() {
        assert!(find_track(DEFAULT_TRACK).is_some());
    }

    #[test]
    fn track_keys_are_unique() {
        let mut keys: Vec<&str> = TRACKS.iter().map(|t| t.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), TRACKS.len());
    }

    #[test]
    fn unknown_track_renders_nothing() {
        assert!(find_track("quantum").is_none());
    }
}
