use buildlabs_model::content::{Brand, Cta, NavLink};
use leptos::prelude::*;

use crate::widgets::{scroll_to_section, use_scroll_y, CtaButton};

#[component]
pub fn Nav(brand: Brand, links: Vec<NavLink>, cta: Cta) -> impl IntoView {
    let (drawer_open, set_drawer_open) = signal(false);
    let scroll_y = use_scroll_y();
    let drawer_links = links.clone();

    view! {
        <nav class={move || if scroll_y.get() > 8.0 { "site-nav scrolled" } else { "site-nav" }}>
            <div class="container nav-inner">
                <button class="nav-brand" on:click=move |_| scroll_to_section("home")>
                    <span class="nav-logo">{brand.logo_letter}</span>
                    <span>{brand.name}</span>
                </button>
                <div class="nav-links">
                    {links.into_iter().map(|link| {
                        let anchor = link.target.anchor();
                        view! {
                            <button class="nav-link" on:click=move |_| scroll_to_section(anchor)>
                                {link.label}
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>
                <div class="nav-cta">
                    <CtaButton cta=cta class="btn btn-primary btn-sm" />
                </div>
                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_drawer_open.update(|o| *o = !*o)
                >
                    {move || if drawer_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            // Mobile drawer
            <Show when=move || drawer_open.get()>
                <div class="nav-drawer open">
                    {drawer_links.clone().into_iter().map(|link| {
                        let anchor = link.target.anchor();
                        view! {
                            <button
                                class="nav-link"
                                on:click=move |_| {
                                    set_drawer_open.set(false);
                                    scroll_to_section(anchor);
                                }
                            >
                                {link.label}
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </Show>
        </nav>
    }
}
