use buildlabs_model::content::{FloatCard, HeroContent, HeroStyle};
use leptos::prelude::*;

use crate::widgets::CtaButton;

/// Corner placements for the floating cards, reused in order.
const FLOAT_SPOTS: [&str; 4] = [
    "top: 16%; left: 4%;",
    "top: 24%; right: 5%;",
    "bottom: 20%; left: 8%;",
    "bottom: 12%; right: 7%;",
];

/// The five gradient bars behind the geometric hero:
/// width, height, rotation, entry delay, tint, position.
const SHAPES: [(u32, u32, i32, f64, &str, &str); 5] = [
    (600, 140, 12, 0.3, "rgba(99, 102, 241, 0.15)", "left: -5%; top: 20%;"),
    (500, 120, -15, 0.5, "rgba(244, 63, 94, 0.15)", "right: 0%; top: 75%;"),
    (300, 80, -8, 0.4, "rgba(139, 92, 246, 0.15)", "left: 10%; bottom: 10%;"),
    (200, 60, 20, 0.6, "rgba(245, 158, 11, 0.15)", "right: 20%; top: 15%;"),
    (150, 40, -25, 0.7, "rgba(6, 182, 212, 0.15)", "left: 25%; top: 10%;"),
];

#[component]
pub fn Hero(hero: HeroContent) -> impl IntoView {
    match hero.style {
        HeroStyle::Classic => view! { <ClassicHero hero=hero /> }.into_any(),
        HeroStyle::Geometric => view! { <GeometricHero hero=hero /> }.into_any(),
    }
}

#[component]
fn ClassicHero(hero: HeroContent) -> impl IntoView {
    let tagline = hero.tagline.clone();
    view! {
        <header class="hero" id="home">
            <FloatLayer cards=hero.float_cards />
            <div class="container hero-inner">
                <div class="hero-badge">
                    <span class="badge badge-accent">{hero.badge}</span>
                </div>
                <h1 class="hero-title">
                    {hero.title}
                    " "
                    <span class="accent">{hero.title_accent}</span>
                </h1>
                <p class="hero-subtitle">{hero.subtitle}</p>
                <div class="hero-actions">
                    <CtaButton cta=hero.primary_cta class="btn btn-primary btn-lg" />
                    {hero.secondary_cta.map(|cta| view! {
                        <CtaButton cta=cta class="btn btn-outline btn-lg" />
                    })}
                </div>
                {(!tagline.is_empty()).then(move || view! {
                    <p class="hero-tagline">{tagline}</p>
                })}
            </div>
        </header>
    }
}

#[component]
fn GeometricHero(hero: HeroContent) -> impl IntoView {
    let tagline = hero.tagline.clone();
    view! {
        <header class="hero geometric" id="home">
            <ShapeLayer />
            <div class="container hero-inner">
                <div class="hero-badge">
                    <span class="badge badge-alert">
                        <span class="pulse-dot"></span>
                        {hero.badge}
                    </span>
                </div>
                <h1 class="hero-title">
                    {hero.title}
                    <br />
                    <span class="accent">{hero.title_accent}</span>
                </h1>
                <p class="hero-subtitle">{hero.subtitle}</p>
                <div class="hero-actions">
                    <CtaButton cta=hero.primary_cta class="btn btn-primary btn-lg" />
                    {hero.secondary_cta.map(|cta| view! {
                        <CtaButton cta=cta class="btn btn-outline btn-lg" />
                    })}
                </div>
                {(!tagline.is_empty()).then(move || view! {
                    <p class="hero-tagline">{tagline}</p>
                })}
            </div>
            <div class="hero-wash"></div>
        </header>
    }
}

/// The blurred gradient bars behind the dark hero.
#[component]
fn ShapeLayer() -> impl IntoView {
    view! {
        <div class="shape-layer">
            {SHAPES.iter().map(|(width, height, rotate, delay, tint, position)| {
                let style = format!(
                    "width: {}px; height: {}px; {} --shape-rotate: {}deg; --shape-tint: {}; animation-delay: {}s;",
                    width, height, position, rotate, tint, delay,
                );
                view! {
                    <div class="elegant-shape" style=style>
                        <div class="shape-core"></div>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Absolutely positioned proof-point cards plus two soft accent circles.
#[component]
fn FloatLayer(cards: Vec<FloatCard>) -> impl IntoView {
    (!cards.is_empty()).then(|| view! {
        <div class="float-layer">
            {cards.into_iter().enumerate().map(|(idx, card)| {
                let style = format!(
                    "{} animation-delay: {:.1}s;",
                    FLOAT_SPOTS[idx % FLOAT_SPOTS.len()],
                    idx as f64 * 0.6,
                );
                view! {
                    <div class="float-card" style=style>
                        <span>{card.icon}</span>
                        <span>{card.label}</span>
                    </div>
                }
            }).collect::<Vec<_>>()}
            <div class="float-circle" style="width: 48px; height: 48px; top: 30%; right: 16%;"></div>
            <div class="float-circle" style="width: 28px; height: 28px; bottom: 28%; left: 18%; animation-delay: 1.2s;"></div>
        </div>
    })
}
