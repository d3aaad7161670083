//! Wafu Divider Component
//!
//! Three separator presentations: a native horizontal rule, three dot
//! markers, or a repeated wave glyph line. The native rule already carries
//! the separator role implicitly; only the other two annotate it.

use dioxus::prelude::*;

/// Divider presentation variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum WafuDividerVariant {
    /// Native horizontal rule
    #[default]
    Line,
    /// Three fixed-size dot markers
    Dots,
    /// Decorative wave glyph line
    Wave,
}

/// Properties for the WafuDivider component
#[derive(Clone, PartialEq, Props)]
pub struct WafuDividerProps {
    /// Presentation variant
    #[props(default)]
    pub variant: WafuDividerVariant,
    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Section separator in one of three wafu presentations
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     WafuDivider { variant: WafuDividerVariant::Wave }
/// }
/// ```
#[component]
pub fn WafuDivider(props: WafuDividerProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");

    match props.variant {
        WafuDividerVariant::Dots => {
            let class = if extra_class.is_empty() {
                "wafu-divider-dots".to_string()
            } else {
                format!("wafu-divider-dots {}", extra_class)
            };
            rsx! {
                div {
                    class: "{class}",
                    role: "separator",
                    span { class: "wafu-divider-dot" }
                    span { class: "wafu-divider-dot wafu-divider-dot-accent" }
                    span { class: "wafu-divider-dot" }
                }
            }
        }
        WafuDividerVariant::Wave => {
            let class = if extra_class.is_empty() {
                "wafu-divider-wave".to_string()
            } else {
                format!("wafu-divider-wave {}", extra_class)
            };
            rsx! {
                div {
                    class: "{class}",
                    role: "separator",
                    span { class: "wafu-divider-wave-glyphs", "〜〜〜" }
                }
            }
        }
        WafuDividerVariant::Line => {
            let class = if extra_class.is_empty() {
                "wafu-divider-line".to_string()
            } else {
                format!("wafu-divider-line {}", extra_class)
            };
            // hr is a separator by itself; no explicit role here
            rsx! {
                hr { class: "{class}" }
            }
        }
    }
}
