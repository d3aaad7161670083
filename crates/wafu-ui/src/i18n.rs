//! Locale context for the wafu components.
//!
//! A two-locale (ja / en) translation layer: one [`WafuTranslations`] bundle
//! per locale, resolved through a tree-scoped context. Components read the
//! nearest provided locale; without any provider the primary locale (ja)
//! applies.
//!
//! Every key exists in both bundles, so lookup is a plain exhaustive match
//! with no missing-key path.

use dioxus::prelude::*;

/// Supported display locales. Japanese is the primary locale.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum WafuLocale {
    /// Japanese (primary)
    #[default]
    Ja,
    /// English
    En,
}

/// The complete set of localized display strings for one locale.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WafuTranslations {
    /// CTA label for booking actions
    pub booking: &'static str,
    /// Price suffix ("per night")
    pub per_night: &'static str,
    /// "Recommended" badge label
    pub recommended: &'static str,
    /// Availability-check label
    pub check_availability: &'static str,
    pub season_spring: &'static str,
    pub season_summer: &'static str,
    pub season_autumn: &'static str,
    pub season_winter: &'static str,
}

const JA: WafuTranslations = WafuTranslations {
    booking: "予約する",
    per_night: "/ 一泊",
    recommended: "おすすめ",
    check_availability: "空室を確認",
    season_spring: "春 — Spring",
    season_summer: "夏 — Summer",
    season_autumn: "秋 — Autumn",
    season_winter: "冬 — Winter",
};

const EN: WafuTranslations = WafuTranslations {
    booking: "Book Now",
    per_night: "/ night",
    recommended: "Recommended",
    check_availability: "Check Availability",
    season_spring: "Spring — 春",
    season_summer: "Summer — 夏",
    season_autumn: "Autumn — 秋",
    season_winter: "Winter — 冬",
};

impl WafuLocale {
    /// Returns the translation bundle for this locale.
    pub fn bundle(&self) -> &'static WafuTranslations {
        match self {
            WafuLocale::Ja => &JA,
            WafuLocale::En => &EN,
        }
    }

    /// Short language tag ("ja" / "en").
    pub fn as_str(&self) -> &'static str {
        match self {
            WafuLocale::Ja => "ja",
            WafuLocale::En => "en",
        }
    }

    /// Parses a language tag. Anything other than "ja" / "en" is `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ja" => Some(WafuLocale::Ja),
            "en" => Some(WafuLocale::En),
            _ => None,
        }
    }
}

/// Properties for the WafuI18nProvider component
#[derive(Clone, PartialEq, Props)]
pub struct WafuI18nProviderProps {
    /// The locale to install for the wrapped subtree
    pub locale: WafuLocale,
    /// Subtree that reads the ambient locale
    pub children: Element,
}

/// Installs `locale` as the ambient value for the wrapped subtree.
///
/// Providers nest: descendants inside a closer provider see the closer
/// value. Re-rendering a provider with a different `locale` prop updates
/// every descendant that resolves translations.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     WafuI18nProvider {
///         locale: WafuLocale::En,
///         RyokanCard { room_name: "紅葉の間".to_string(), /* ... */ }
///     }
/// }
/// ```
#[component]
pub fn WafuI18nProvider(props: WafuI18nProviderProps) -> Element {
    let mut current = use_context_provider(|| Signal::new(props.locale));

    // The context signal is created once per provider instance; when the
    // caller re-renders with a new locale prop, push it into the signal so
    // descendants re-resolve. `peek` keeps the provider itself unsubscribed.
    if *current.peek() != props.locale {
        current.set(props.locale);
    }

    rsx! {
        {props.children}
    }
}

/// Hook returning the nearest ambient locale, or [`WafuLocale::Ja`] when no
/// provider ancestor exists.
pub fn use_wafu_locale() -> WafuLocale {
    match try_consume_context::<Signal<WafuLocale>>() {
        Some(locale) => locale(),
        None => WafuLocale::default(),
    }
}

/// Hook returning the translation bundle for the nearest ambient locale.
pub fn use_wafu_translations() -> &'static WafuTranslations {
    use_wafu_locale().bundle()
}
