//! Ryokan Card Component
//!
//! A titled, priced content block with an embedded CTA button. Price is an
//! opaque display string throughout; nothing here parses or validates it.

use dioxus::prelude::*;

use crate::components::{WafuButton, WafuButtonSize};
use crate::i18n::use_wafu_translations;

/// Card emphasis variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RyokanCardVariant {
    /// Standard bordered card
    #[default]
    Default,
    /// Amber-bordered card with a localized "recommended" badge
    Featured,
}

impl RyokanCardVariant {
    /// Returns the CSS class for this variant's border treatment
    pub fn class(&self) -> &'static str {
        match self {
            RyokanCardVariant::Default => "wafu-card-default",
            RyokanCardVariant::Featured => "wafu-card-featured",
        }
    }
}

/// Properties for the RyokanCard component
#[derive(Clone, PartialEq, Props)]
pub struct RyokanCardProps {
    /// Room name; also the card's accessible label and the image alt text
    pub room_name: String,
    /// Room category shown above the name
    #[props(default = "客室".to_string())]
    pub room_type: String,
    /// Room description (may be empty)
    pub description: String,
    /// Display price, rendered literally with no parsing
    pub price: String,
    /// Price suffix; falls back to the active locale's default
    #[props(default)]
    pub price_unit: Option<String>,
    /// CTA label; falls back to the active locale's booking label
    #[props(default)]
    pub cta_label: Option<String>,
    /// Image source; absent or empty renders a text placeholder instead
    #[props(default)]
    pub image_src: Option<String>,
    /// Emphasis variant
    #[props(default)]
    pub variant: RyokanCardVariant,
    /// CTA click handler; without one the button simply renders inert
    #[props(default)]
    pub on_cta_click: Option<EventHandler<()>>,
    /// Optional content rendered between description and the price row
    #[props(default = VNode::empty())]
    pub children: Element,
}

/// Room card composing image, description, price, and a booking CTA
///
/// # Design Notes
///
/// - Explicit `price_unit` / `cta_label` props win over the locale bundle
/// - An empty-string `image_src` counts as absent
/// - The placeholder area repeats the room name when no image is given
/// - All text props render as literal text, markup included
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     RyokanCard {
///         room_name: "紅葉の間".to_string(),
///         description: "静かな庭園を望む客室。".to_string(),
///         price: "¥48,000".to_string(),
///         variant: RyokanCardVariant::Featured,
///         on_cta_click: move |_| open_booking(),
///     }
/// }
/// ```
#[component]
pub fn RyokanCard(props: RyokanCardProps) -> Element {
    let t = use_wafu_translations();

    let cta_label = props.cta_label.clone().unwrap_or_else(|| t.booking.to_string());
    let price_unit = props
        .price_unit
        .clone()
        .unwrap_or_else(|| t.per_night.to_string());
    let is_featured = props.variant == RyokanCardVariant::Featured;
    let card_class = format!("wafu-card {}", props.variant.class());
    // Empty-string sources count as absent.
    let image_src = props.image_src.clone().filter(|src| !src.is_empty());
    let has_image = image_src.is_some();
    let image_src = image_src.unwrap_or_default();

    rsx! {
        article {
            class: "{card_class}",
            "aria-label": "{props.room_name}",
            div { class: "wafu-card-media",
                if has_image {
                    img {
                        class: "wafu-card-image",
                        src: "{image_src}",
                        alt: "{props.room_name}",
                    }
                } else {
                    div { class: "wafu-card-placeholder", "{props.room_name}" }
                }
                if is_featured {
                    span { class: "wafu-card-badge", "{t.recommended}" }
                }
            }
            div { class: "wafu-card-body",
                span { class: "wafu-card-room-type", "{props.room_type}" }
                h3 { class: "wafu-card-room-name", "{props.room_name}" }
                p { class: "wafu-card-description", "{props.description}" }

                {props.children}

                div { class: "wafu-card-footer",
                    div {
                        span { class: "wafu-card-price", "{props.price}" }
                        span { class: "wafu-card-price-unit", "{price_unit}" }
                    }
                    WafuButton {
                        size: WafuButtonSize::Sm,
                        onclick: move |_| {
                            if let Some(handler) = &props.on_cta_click {
                                handler.call(());
                            }
                        },
                        "{cta_label}"
                    }
                }
            }
        }
    }
}
