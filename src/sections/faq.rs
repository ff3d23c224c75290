use leptos::prelude::*;

use super::window::RetroWindow;

const FAQS: &[(&str, &str)] = &[
    (
        "Who can participate?",
        "Dev-o-lution is open to all students and recent graduates passionate about \
         technology and innovation.",
    ),
    ("Is there a participation fee?", "Yes, There is!"),
    (
        "What should I bring?",
        "Bring your laptop, charger, and any other devices you need for development. \
         We'll provide food, drinks, and a great coding atmosphere!",
    ),
    (
        "Can I join as a speaker?",
        "We welcome speakers to share their knowledge. Check our timeline for speaker \
         registration dates.",
    ),
];

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <RetroWindow title="Frequently Asked Questions" id="faqs" accent=true>
            <div class="faq-list">
                {FAQS
                    .iter()
                    .map(|&(question, answer)| {
                        view! {
                            <div class="faq-box">
                                <h3 class="faq-question">{question}</h3>
                                <p>{answer}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </RetroWindow>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_question_has_an_answer() {
        assert_eq!(FAQS.len(), 4);
        for &(question, answer) in FAQS {
            assert!(question.ends_with('?'), "not a question: {question}");
            assert!(!answer.is_empty());
        }
    }
}
