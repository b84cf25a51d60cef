//! Endless horizontal strip.
//!
//! The item sequence renders exactly twice back-to-back and the CSS
//! animation shifts the track by one sequence-width per cycle, so the
//! wrap is seamless. Hovering swaps the cycle duration for the
//! configured per-instance value via an inline override.

use buildlabs_model::marquee::{self, MarqueeTiming, DEFAULT_GAP_PX};
use leptos::prelude::*;

#[component]
pub fn InfiniteSlider<T, V, F>(
    /// One copy of the sequence; the slider handles the duplication.
    items: Vec<T>,
    /// Renders a single item.
    render: F,
    #[prop(default = MarqueeTiming::default())] timing: MarqueeTiming,
) -> impl IntoView
where
    T: Clone + 'static,
    V: IntoView + 'static,
    F: Fn(T) -> V + 'static,
{
    let (hovered, set_hovered) = signal(false);
    let track = marquee::loop_sequence(&items);
    let track_style = move || {
        format!(
            "--marquee-gap: {}px; animation-duration: {}s;",
            DEFAULT_GAP_PX,
            timing.cycle_secs(hovered.get()),
        )
    };

    view! {
        <div
            class="marquee"
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div class="marquee-track" style=track_style>
                {track.into_iter().map(render).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
