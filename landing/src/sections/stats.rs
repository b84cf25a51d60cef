use buildlabs_model::content::StatsSection;
use leptos::prelude::*;

use crate::widgets::AnimatedCounter;

#[component]
pub fn Stats(section: StatsSection) -> impl IntoView {
    let duration = section.duration_ms;
    view! {
        <section class="section">
            <div class="container">
                <div class="stats-band">
                    {section.stats.into_iter().map(|stat| view! {
                        <div>
                            <div class="stat-value">
                                <AnimatedCounter end=stat.value duration_ms=duration />
                                <span>{stat.suffix}</span>
                            </div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
