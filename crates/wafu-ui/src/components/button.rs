//! Wafu Button Component
//!
//! Six visual variants drawn from the wafu palette:
//! - Ai: indigo, the default action color
//! - Momiji: maple vermilion
//! - Kohaku: amber
//! - Take: bamboo green
//! - Ghost: transparent, warms on hover
//! - Outline: bordered transparent

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum WafuButtonVariant {
    /// Indigo filled button - the primary action style
    #[default]
    Ai,
    /// Maple vermilion filled button
    Momiji,
    /// Amber filled button
    Kohaku,
    /// Bamboo green filled button
    Take,
    /// Transparent, background warms on hover
    Ghost,
    /// Transparent with border
    Outline,
}

impl WafuButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            WafuButtonVariant::Ai => "wafu-btn-ai",
            WafuButtonVariant::Momiji => "wafu-btn-momiji",
            WafuButtonVariant::Kohaku => "wafu-btn-kohaku",
            WafuButtonVariant::Take => "wafu-btn-take",
            WafuButtonVariant::Ghost => "wafu-btn-ghost",
            WafuButtonVariant::Outline => "wafu-btn-outline",
        }
    }
}

/// Button sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum WafuButtonSize {
    /// Compact padding, small text
    Sm,
    /// Standard padding
    #[default]
    Md,
    /// Generous padding, base text
    Lg,
}

impl WafuButtonSize {
    /// Returns the CSS class for this size
    pub fn class(&self) -> &'static str {
        match self {
            WafuButtonSize::Sm => "wafu-btn-sm",
            WafuButtonSize::Md => "wafu-btn-md",
            WafuButtonSize::Lg => "wafu-btn-lg",
        }
    }
}

/// Properties for the WafuButton component
#[derive(Clone, PartialEq, Props)]
pub struct WafuButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: WafuButtonVariant,
    /// Button size
    #[props(default)]
    pub size: WafuButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled (native semantics: assistive tech
    /// announces it and the platform suppresses activation)
    #[props(default = false)]
    pub disabled: bool,
    /// Type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Accessible label forwarded to the element
    #[props(default)]
    pub aria_label: Option<String>,
    /// Test identifier forwarded to the element
    #[props(default)]
    pub data_testid: Option<String>,
    /// Additional CSS classes, merged after the computed ones
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button following the wafu design system
///
/// # Design Notes
///
/// - Variant and size each contribute one `wafu-btn-*` class
/// - Disabled buttons drop to half opacity and ignore pointer feedback
/// - Focus shows a visible indigo outline
/// - Caller classes are appended, never replacing the computed ones
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     WafuButton {
///         variant: WafuButtonVariant::Momiji,
///         size: WafuButtonSize::Lg,
///         onclick: move |_| book_room(),
///         "予約する"
///     }
/// }
/// ```
#[component]
pub fn WafuButton(props: WafuButtonProps) -> Element {
    let variant_class = props.variant.class();
    let size_class = props.size.class();
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        format!("wafu-btn {} {}", variant_class, size_class)
    } else {
        format!("wafu-btn {} {} {}", variant_class, size_class, extra_class)
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            "aria-label": props.aria_label,
            "data-testid": props.data_testid,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
