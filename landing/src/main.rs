// BuildLabs Landing - Leptos 0.8 Edition

mod sections;
mod widgets;

use buildlabs_model::styles::SITE_CSS;
use buildlabs_model::{variants, SiteConfig};
use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Picks the site config from the `?variant=` query, falling back to the
/// flagship. Unknown slugs fall back too.
fn active_config() -> SiteConfig {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| variants::slug_from_query(&search))
        .and_then(|slug| variants::find(&slug))
        .unwrap_or_else(variants::mvp_labs)
}

#[component]
fn App() -> impl IntoView {
    let config = active_config();
    let theme_vars = config.theme.css_vars();
    let body_class = config.theme.mode.as_class();

    // The app mounts into <body>, so the theme class goes on via the DOM
    Effect::new(move || {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            body.set_class_name(body_class);
        }
    });

    let SiteConfig {
        brand,
        nav,
        nav_cta,
        hero,
        process,
        portfolio,
        pricing,
        faq,
        testimonials,
        stats,
        footer,
        ..
    } = config;

    view! {
        <style>{theme_vars}</style>
        <style>{SITE_CSS}</style>
        <Nav brand=brand.clone() links=nav cta=nav_cta />
        <main>
            <Hero hero=hero />
            <Stats section=stats />
            <Process section=process />
            <Portfolio section=portfolio />
            <Pricing section=pricing />
            <Testimonials section=testimonials />
            <Faq section=faq />
        </main>
        <Footer brand=brand footer=footer />
    }
}
