use buildlabs_model::content::FaqSection;
use leptos::prelude::*;

use super::SectionHeader;

#[component]
pub fn Faq(section: FaqSection) -> impl IntoView {
    view! {
        <section class="section" id="faq">
            <div class="container">
                <SectionHeader
                    badge=None
                    title=section.title
                    subtitle=section.subtitle
                />
                <div class="faq-list">
                    {section.entries.into_iter().map(|entry| {
                        // Each item carries its own open state.
                        let (open, set_open) = signal(false);
                        view! {
                            <div class=move || if open.get() { "faq-item open" } else { "faq-item" }>
                                <button
                                    class="faq-question"
                                    aria-expanded=move || if open.get() { "true" } else { "false" }
                                    on:click=move |_| set_open.update(|o| *o = !*o)
                                >
                                    <span>{entry.question}</span>
                                    <span class="faq-chevron">"▾"</span>
                                </button>
                                <div class="faq-answer">
                                    <p>{entry.answer}</p>
                                </div>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
