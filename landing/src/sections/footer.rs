use buildlabs_model::content::{Brand, FooterSection};
use leptos::prelude::*;

use crate::widgets::CtaButton;

#[component]
pub fn Footer(brand: Brand, footer: FooterSection) -> impl IntoView {
    view! {
        <footer class="site-footer" id="contact">
            <div class="container">
                {footer.show_globe.then(|| view! { <Globe /> })}
                <div class="footer-brand">
                    <span class="nav-logo">{brand.logo_letter}</span>
                    <span>{brand.name}</span>
                </div>
                <p class="footer-blurb">{footer.blurb}</p>
                <CtaButton cta=footer.cta class="btn btn-primary btn-shimmer btn-lg" />
                <div class="footer-legal">{footer.copyright}</div>
            </div>
        </footer>
    }
}

/// Decorative wireframe globe with two animated connection arcs.
#[component]
fn Globe() -> impl IntoView {
    view! {
        <div class="footer-globe">
            <svg
                width="180"
                height="180"
                viewBox="0 0 200 200"
                xmlns="http://www.w3.org/2000/svg"
                role="img"
                aria-label="Stylized globe"
            >
                <circle class="globe-sphere" cx="100" cy="100" r="80" stroke-width="1.5"></circle>
                <ellipse class="globe-grid" cx="100" cy="100" rx="80" ry="28" stroke-width="1"></ellipse>
                <ellipse class="globe-grid" cx="100" cy="100" rx="80" ry="56" stroke-width="1"></ellipse>
                <ellipse class="globe-grid" cx="100" cy="100" rx="28" ry="80" stroke-width="1"></ellipse>
                <ellipse class="globe-grid" cx="100" cy="100" rx="56" ry="80" stroke-width="1"></ellipse>
                <line class="globe-grid" x1="20" y1="100" x2="180" y2="100" stroke-width="1"></line>
                <path class="globe-arc" d="M 30 120 Q 100 40 170 110" stroke-width="2"></path>
                <path
                    class="globe-arc"
                    d="M 40 70 Q 110 150 165 80"
                    stroke-width="2"
                    style="animation-delay: 1.6s;"
                ></path>
            </svg>
        </div>
    }
}
