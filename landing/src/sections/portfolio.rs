use buildlabs_model::content::PortfolioSection;
use leptos::prelude::*;

use super::SectionHeader;

#[component]
pub fn Portfolio(section: PortfolioSection) -> impl IntoView {
    view! {
        <section class="section" id="portfolio">
            <div class="container">
                <SectionHeader
                    badge=None
                    title=section.title
                    subtitle=section.subtitle
                />
                <div class="portfolio-grid">
                    {section.projects.into_iter().map(|project| view! {
                        <div class="project-card">
                            <div class="project-media">
                                <img src=project.image alt=project.name.clone() loading="lazy" />
                            </div>
                            <div class="project-body">
                                <div class="project-name-row">
                                    <h3>{project.name}</h3>
                                    <span class="badge badge-soft">{project.category}</span>
                                </div>
                                <p>{project.description}</p>
                            </div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
                {section.more_label.map(|label| view! {
                    <div class="portfolio-more">
                        <button class="btn btn-arrow">
                            <span class="btn-arrow-label">{label}</span>
                            <span class="btn-arrow-icon">"→"</span>
                        </button>
                    </div>
                })}
            </div>
        </section>
    }
}
