//! Count-up number driven by the viewport.
//!
//! The counter renders 0 until its element first becomes visible, then
//! animates to the target over the configured duration. The trigger is
//! a one-shot: scrolling away and back never replays it. Once the
//! element leaves the document the frame loop stops scheduling.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use buildlabs_model::counter::{CountUp, OnceTrigger};
use leptos::html::Span;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// State shared between the observer callback and the frame loop.
struct CounterRun {
    counter: CountUp,
    trigger: OnceTrigger,
    started_at: Option<f64>,
    el: web_sys::HtmlSpanElement,
}

/// Monotonic-ish timestamp in milliseconds.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

#[component]
pub fn AnimatedCounter(end: u32, duration_ms: f64) -> impl IntoView {
    let node = NodeRef::<Span>::new();
    let (shown, set_shown) = signal(0_u32);
    let armed = Cell::new(false);

    Effect::new(move || {
        use wasm_bindgen::closure::Closure;

        let Some(el) = node.get() else {
            return;
        };
        if armed.replace(true) {
            return;
        }

        let run = Rc::new(RefCell::new(CounterRun {
            counter: CountUp::new(end, duration_ms),
            trigger: OnceTrigger::new(),
            started_at: None,
            el: el.clone(),
        }));

        let observer_cb = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<web_sys::IntersectionObserverEntry>()
                        .map(|e| e.is_intersecting())
                        .unwrap_or(false)
                });
                if run.borrow_mut().trigger.on_visibility(visible) {
                    observer.disconnect();
                    run.borrow_mut().started_at = Some(now_ms());
                    schedule_frame(run.clone(), set_shown);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        match web_sys::IntersectionObserver::new(observer_cb.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&el);
                observer_cb.forget(); // Keep the callback alive
            }
            Err(_) => {
                // No observer support: skip the animation, show the target
                set_shown.set(end);
            }
        }
    });

    view! {
        <span node_ref=node>{move || shown.get().to_string()}</span>
    }
}

/// Advances the count by one frame, rescheduling until complete. Stops
/// without touching the signal once the element is out of the document.
fn schedule_frame(run: Rc<RefCell<CounterRun>>, set_shown: WriteSignal<u32>) {
    request_animation_frame(move || {
        let (value, done) = {
            let run = run.borrow();
            if !run.el.is_connected() {
                return;
            }
            let Some(started_at) = run.started_at else {
                return;
            };
            let elapsed = now_ms() - started_at;
            (
                run.counter.value_at(elapsed),
                run.counter.is_complete_at(elapsed),
            )
        };
        set_shown.set(value);
        if !done {
            schedule_frame(run, set_shown);
        }
    });
}
