use buildlabs_model::content::{Testimonial, TestimonialSection};
use buildlabs_model::marquee::MarqueeTiming;
use leptos::prelude::*;

use super::SectionHeader;
use crate::widgets::InfiniteSlider;

#[component]
pub fn Testimonials(section: TestimonialSection) -> impl IntoView {
    let timing = MarqueeTiming::new(section.speed_on_hover);
    view! {
        <section class="section">
            <div class="container">
                <SectionHeader
                    badge=None
                    title=section.title
                    subtitle=section.subtitle
                />
            </div>
            <InfiniteSlider
                items=section.quotes
                timing=timing
                render=|quote: Testimonial| view! { <TestimonialCard quote=quote /> }
            />
        </section>
    }
}

#[component]
fn TestimonialCard(quote: Testimonial) -> impl IntoView {
    view! {
        <div class="testimonial-card">
            <p class="testimonial-quote">{quote.quote}</p>
            <div class="testimonial-author">{quote.author}</div>
            <div class="testimonial-role">{quote.role}</div>
        </div>
    }
}
