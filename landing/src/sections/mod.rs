// Landing page sections

use leptos::prelude::*;

mod faq;
mod footer;
mod hero;
mod nav;
mod portfolio;
mod pricing;
mod process;
mod stats;
mod testimonials;

pub use faq::Faq;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use portfolio::Portfolio;
pub use pricing::Pricing;
pub use process::Process;
pub use stats::Stats;
pub use testimonials::Testimonials;

/// Badge, title and subtitle stack opening a section.
#[component]
fn SectionHeader(
    /// Optional badge shown above the title.
    badge: Option<String>,
    title: String,
    subtitle: String,
) -> impl IntoView {
    view! {
        <div class="section-header">
            {badge.map(|text| view! { <span class="badge badge-soft">{text}</span> })}
            <h2 class="section-title">{title}</h2>
            <p class="section-subtitle">{subtitle}</p>
        </div>
    }
}
