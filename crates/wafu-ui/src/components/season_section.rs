//! Season Section Component
//!
//! A themed container keyed by one of the four seasons. Each season carries
//! a fixed background, accent, border, and icon glyph; the season label
//! itself comes from the active locale bundle.

use dioxus::prelude::*;

use crate::i18n::{use_wafu_translations, WafuTranslations};

/// The four season keys
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Static per-season styling
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SeasonTheme {
    /// Background class
    pub bg: &'static str,
    /// Accent text class for the season label
    pub accent: &'static str,
    /// Icon glyph
    pub icon: &'static str,
    /// Border class
    pub border: &'static str,
}

impl Season {
    /// Lowercase season token, used as the icon's accessible label
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    /// Returns the fixed styling for this season
    pub fn theme(&self) -> SeasonTheme {
        match self {
            Season::Spring => SeasonTheme {
                bg: "wafu-season-bg-spring",
                accent: "wafu-season-accent-spring",
                icon: "🌸",
                border: "wafu-season-border-spring",
            },
            Season::Summer => SeasonTheme {
                bg: "wafu-season-bg-summer",
                accent: "wafu-season-accent-summer",
                icon: "🎋",
                border: "wafu-season-border-summer",
            },
            Season::Autumn => SeasonTheme {
                bg: "wafu-season-bg-autumn",
                accent: "wafu-season-accent-autumn",
                icon: "🍁",
                border: "wafu-season-border-autumn",
            },
            Season::Winter => SeasonTheme {
                bg: "wafu-season-bg-winter",
                accent: "wafu-season-accent-winter",
                icon: "❄️",
                border: "wafu-season-border-winter",
            },
        }
    }

    /// Localized display label from the given bundle
    pub fn label(&self, t: &WafuTranslations) -> &'static str {
        match self {
            Season::Spring => t.season_spring,
            Season::Summer => t.season_summer,
            Season::Autumn => t.season_autumn,
            Season::Winter => t.season_winter,
        }
    }
}

/// Properties for the SeasonSection component
#[derive(Clone, PartialEq, Props)]
pub struct SeasonSectionProps {
    /// Which season's theme to apply
    pub season: Season,
    /// Section title; also the section's accessible label
    pub title: String,
    /// Optional subtitle below the title
    #[props(default)]
    pub subtitle: Option<String>,
    /// Optional nested content; when absent no content wrapper renders
    #[props(default)]
    pub children: Option<Element>,
    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Themed section container for seasonal content
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SeasonSection {
///         season: Season::Autumn,
///         title: "紅葉シーズン".to_string(),
///         subtitle: "庭園の紅葉が見頃を迎えます".to_string(),
///         p { "プラン詳細" }
///     }
/// }
/// ```
#[component]
pub fn SeasonSection(props: SeasonSectionProps) -> Element {
    let t = use_wafu_translations();
    let theme = props.season.theme();
    let season_label = props.season.label(t);
    let season_token = props.season.as_str();

    let extra_class = props.class.as_deref().unwrap_or("");
    let section_class = if extra_class.is_empty() {
        format!("wafu-season {} {}", theme.bg, theme.border)
    } else {
        format!("wafu-season {} {} {}", theme.bg, theme.border, extra_class)
    };
    let accent_class = format!("wafu-season-label {}", theme.accent);
    let has_subtitle = props.subtitle.is_some();
    let subtitle = props.subtitle.clone().unwrap_or_default();
    let has_children = props.children.is_some();
    let children = props.children.clone().unwrap_or_else(|| rsx! {});

    rsx! {
        section {
            class: "{section_class}",
            "aria-label": "{props.title}",
            div { class: "wafu-season-header",
                span {
                    class: "wafu-season-icon",
                    role: "img",
                    "aria-label": "{season_token}",
                    "{theme.icon}"
                }
                span { class: "{accent_class}", "{season_label}" }
            }
            h2 { class: "wafu-season-title", "{props.title}" }
            if has_subtitle {
                p { class: "wafu-season-subtitle", "{subtitle}" }
            }
            if has_children {
                div { class: "wafu-season-content", {children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::WafuLocale;

    #[test]
    fn season_tokens() {
        assert_eq!(Season::Spring.as_str(), "spring");
        assert_eq!(Season::Summer.as_str(), "summer");
        assert_eq!(Season::Autumn.as_str(), "autumn");
        assert_eq!(Season::Winter.as_str(), "winter");
    }

    #[test]
    fn themes_are_distinct_per_season() {
        let themes = [
            Season::Spring.theme(),
            Season::Summer.theme(),
            Season::Autumn.theme(),
            Season::Winter.theme(),
        ];
        for (i, a) in themes.iter().enumerate() {
            for b in &themes[i + 1..] {
                assert_ne!(a.bg, b.bg);
                assert_ne!(a.border, b.border);
                assert_ne!(a.icon, b.icon);
            }
        }
    }

    #[test]
    fn labels_follow_bundle() {
        let ja = WafuLocale::Ja.bundle();
        let en = WafuLocale::En.bundle();
        assert_eq!(Season::Autumn.label(ja), "秋 — Autumn");
        assert_eq!(Season::Autumn.label(en), "Autumn — 秋");
    }
}
