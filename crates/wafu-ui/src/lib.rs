//! Wafu Design System UI Components
//!
//! This crate provides Dioxus UI components with a Japanese-inspired
//! ("wafu") aesthetic: indigo, vermilion maple, amber, and bamboo tones
//! over warm paper backgrounds.
//!
//! ## Components
//!
//! - [`WafuButton`] - variant/size driven action button
//! - [`RyokanCard`] - titled, priced content block with CTA
//! - [`SeasonSection`] - themed container keyed by season
//! - [`WafuFadeIn`] - scroll-triggered one-shot reveal wrapper
//! - [`WafuDivider`] - line / dots / wave separators
//! - [`WafuI18nProvider`] - tree-scoped locale context (ja / en)
//!
//! All components are presentational: a small prop set maps to markup and
//! `wafu-*` style classes. The stylesheet backing those classes lives in
//! [`theme::GLOBAL_STYLES`].

pub mod components;
pub mod i18n;
pub mod theme;

pub use components::*;
pub use i18n::{
    use_wafu_locale, use_wafu_translations, WafuI18nProvider, WafuI18nProviderProps, WafuLocale,
    WafuTranslations,
};
