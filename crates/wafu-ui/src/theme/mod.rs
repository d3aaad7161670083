//! Wafu design system theme: palette constants and the global stylesheet
//! backing the `wafu-*` classes.

mod colors;
mod styles;

pub use colors::*;
pub use styles::GLOBAL_STYLES;
