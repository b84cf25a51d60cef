//! Window scroll helpers.
//!
//! Smoothness comes from the stylesheet's `scroll-behavior: smooth`;
//! these helpers only pick targets and read the current offset.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Scrolls the section with this id into view. A missing id is a no-op,
/// so links can outlive the sections they point at.
pub fn scroll_to_section(anchor: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document.get_element_by_id(anchor) {
        el.scroll_into_view();
    }
}

/// Read-only signal tracking the vertical scroll offset in pixels.
///
/// The backing listener stays registered for the page lifetime.
pub fn use_scroll_y() -> ReadSignal<f64> {
    let (y, set_y) = signal(0.0_f64);

    Effect::new(move || {
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        set_y.set(window.scroll_y().unwrap_or(0.0));

        let closure = Closure::wrap(Box::new(move || {
            if let Some(window) = web_sys::window() {
                set_y.set(window.scroll_y().unwrap_or(0.0));
            }
        }) as Box<dyn FnMut()>);

        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());

        closure.forget(); // Keep the closure alive
    });

    y
}
