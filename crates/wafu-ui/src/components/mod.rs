//! Reusable wafu UI components.
//!
//! All components are stateless renderers except [`WafuFadeIn`], which owns
//! a one-shot reveal state tied to host visibility observation. Styling is
//! expressed as `wafu-*` classes defined in [`crate::theme::GLOBAL_STYLES`].

mod button;
mod card;
mod divider;
mod fade_in;
mod season_section;

pub use button::*;
pub use card::*;
pub use divider::*;
pub use fade_in::*;
pub use season_section::*;
