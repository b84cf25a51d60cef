use buildlabs_model::content::{PricingPlan, PricingSection};
use leptos::prelude::*;

use super::SectionHeader;
use crate::widgets::scroll_to_section;

#[component]
pub fn Pricing(section: PricingSection) -> impl IntoView {
    view! {
        <section class="section" id="pricing">
            <div class="container">
                <SectionHeader
                    badge=Some(section.badge)
                    title=section.title
                    subtitle=section.subtitle
                />
                {section.availability.map(|text| view! {
                    <div class="pricing-availability">
                        <span class="badge badge-alert">
                            <span class="pulse-dot"></span>
                            {text}
                        </span>
                    </div>
                })}
                <div class="pricing-grid">
                    {section.plans.into_iter().map(|plan| view! {
                        <PlanCard plan=plan />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: PricingPlan) -> impl IntoView {
    let popular = plan.popular;
    let card_class = if popular { "plan-card popular" } else { "plan-card" };
    let cta_class = if popular {
        "btn btn-primary plan-cta"
    } else {
        "btn btn-outline plan-cta"
    };
    view! {
        <div class=card_class>
            {popular.then(|| view! {
                <span class="plan-badge badge badge-accent">"Most Popular"</span>
            })}
            <h3>{plan.name}</h3>
            <div class="plan-price-row">
                <span class="plan-price">{plan.price}</span>
                <span class="plan-period">{plan.period}</span>
            </div>
            <p class="plan-summary">{plan.summary}</p>
            <ul class="plan-features">
                {plan.features.into_iter().map(|feature| {
                    let item_class = if feature.included {
                        "plan-feature"
                    } else {
                        "plan-feature excluded"
                    };
                    let mark_class = if feature.included {
                        "feature-mark"
                    } else {
                        "feature-mark excluded"
                    };
                    let mark = if feature.included { "✓" } else { "✕" };
                    view! {
                        <li class=item_class>
                            <span class=mark_class>{mark}</span>
                            <span>{feature.text}</span>
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>
            <button class=cta_class on:click=|_| scroll_to_section("contact")>
                {plan.cta_label}
            </button>
        </div>
    }
}
