//! Interactive building blocks shared by the page sections.

mod animated_counter;
mod cta;
mod infinite_slider;
mod scroll;

pub use animated_counter::AnimatedCounter;
pub use cta::CtaButton;
pub use infinite_slider::InfiniteSlider;
pub use scroll::{scroll_to_section, use_scroll_y};
