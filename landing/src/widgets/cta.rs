//! Call-to-action rendering shared by every section.

use buildlabs_model::content::{Cta, CtaAction};
use leptos::prelude::*;

use super::scroll_to_section;

/// Anchor actions become scroll buttons; external actions become links
/// opening a new tab.
#[component]
pub fn CtaButton(
    cta: Cta,
    /// Full class string, including the `btn` base class.
    #[prop(default = "btn btn-primary")]
    class: &'static str,
) -> impl IntoView {
    match cta.action {
        CtaAction::Anchor(target) => {
            let anchor = target.anchor();
            view! {
                <button class=class on:click=move |_| scroll_to_section(anchor)>
                    {cta.label}
                </button>
            }
            .into_any()
        }
        CtaAction::External(url) => view! {
            <a class=class href=url target="_blank" rel="noopener noreferrer">{cta.label}</a>
        }
        .into_any(),
    }
}
