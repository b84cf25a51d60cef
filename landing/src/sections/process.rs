use buildlabs_model::content::ProcessSection;
use leptos::prelude::*;

use super::SectionHeader;

#[component]
pub fn Process(section: ProcessSection) -> impl IntoView {
    view! {
        <section class="section" id="process">
            <div class="container">
                <SectionHeader
                    badge=Some(section.badge)
                    title=section.title
                    subtitle=section.subtitle
                />
                <div class="process-grid">
                    {section.steps.into_iter().map(|step| view! {
                        <div class="process-card">
                            <div class="process-icon">{step.icon}</div>
                            <div class="process-step">{step.step}</div>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
