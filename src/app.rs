//! Showcase page mounting every wafu component with representative
//! configurations, the visual catalog for the design system.

use dioxus::prelude::*;

use wafu_ui::theme::GLOBAL_STYLES;
use wafu_ui::{
    FadeDirection, RyokanCard, RyokanCardVariant, Season, SeasonSection, WafuButton,
    WafuButtonSize, WafuButtonVariant, WafuDivider, WafuDividerVariant, WafuFadeIn,
    WafuI18nProvider, WafuLocale,
};

use crate::start_locale;

const SHOWCASE_STYLES: &str = r#"
body { margin: 0; background: #faf6f0; }
.showcase { max-width: 48rem; margin: 0 auto; padding: 3rem 1.5rem; display: flex; flex-direction: column; gap: 3rem; }
.showcase-title { font-family: 'Noto Serif JP', Georgia, serif; font-size: 2rem; margin: 0; color: #2b2b2b; }
.showcase-tagline { color: #5a544a; margin: 0.5rem 0 0 0; }
.showcase-section-title { font-family: 'Noto Serif JP', Georgia, serif; font-size: 1.25rem; color: #2b2b2b; border-bottom: 1px solid #e0d8ca; padding-bottom: 0.5rem; }
.showcase-row { display: flex; flex-wrap: wrap; align-items: center; gap: 0.75rem; }
.showcase-cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.5rem; }
"#;

/// Root showcase component.
///
/// A locale toggle re-provides the i18n context so every localized string
/// in the catalog swaps in place.
#[component]
pub fn App() -> Element {
    let mut locale = use_signal(start_locale);

    rsx! {
        style { "{GLOBAL_STYLES}" }
        style { "{SHOWCASE_STYLES}" }

        WafuI18nProvider {
            locale: locale(),
            div { class: "showcase",
                header {
                    h1 { class: "showcase-title", "和風デザインシステム" }
                    p { class: "showcase-tagline", "Wafu Design System — Japanese-style UI components" }
                    div { class: "showcase-row", style: "margin-top: 1rem;",
                        WafuButton {
                            variant: WafuButtonVariant::Outline,
                            size: WafuButtonSize::Sm,
                            onclick: move |_| locale.set(WafuLocale::Ja),
                            "日本語"
                        }
                        WafuButton {
                            variant: WafuButtonVariant::Outline,
                            size: WafuButtonSize::Sm,
                            onclick: move |_| locale.set(WafuLocale::En),
                            "English"
                        }
                    }
                }

                section {
                    h2 { class: "showcase-section-title", "WafuButton — バリアント" }
                    div { class: "showcase-row",
                        WafuButton { variant: WafuButtonVariant::Ai, "藍 (Ai)" }
                        WafuButton { variant: WafuButtonVariant::Momiji, "紅葉 (Momiji)" }
                        WafuButton { variant: WafuButtonVariant::Kohaku, "琥珀 (Kohaku)" }
                        WafuButton { variant: WafuButtonVariant::Take, "竹 (Take)" }
                        WafuButton { variant: WafuButtonVariant::Ghost, "Ghost" }
                        WafuButton { variant: WafuButtonVariant::Outline, "Outline" }
                    }
                }

                section {
                    h2 { class: "showcase-section-title", "WafuButton — サイズ・無効状態" }
                    div { class: "showcase-row",
                        WafuButton { size: WafuButtonSize::Sm, "Small" }
                        WafuButton { size: WafuButtonSize::Md, "Medium" }
                        WafuButton { size: WafuButtonSize::Lg, "Large" }
                        WafuButton { disabled: true, "Disabled" }
                        WafuButton { variant: WafuButtonVariant::Momiji, disabled: true, "Disabled" }
                    }
                }

                WafuDivider { variant: WafuDividerVariant::Dots }

                section {
                    h2 { class: "showcase-section-title", "RyokanCard" }
                    div { class: "showcase-cards",
                        RyokanCard {
                            room_name: "紅葉の間".to_string(),
                            room_type: "特別室".to_string(),
                            description: "四季折々の庭園を望む特別室。檜風呂付きの贅沢な空間。".to_string(),
                            price: "¥48,000".to_string(),
                            variant: RyokanCardVariant::Featured,
                            on_cta_click: move |_| tracing::info!("booking CTA activated"),
                        }
                        RyokanCard {
                            room_name: "竹の間".to_string(),
                            description: "竹林に面した静かな和室。".to_string(),
                            price: "¥28,000".to_string(),
                        }
                    }
                }

                WafuDivider { variant: WafuDividerVariant::Wave }

                section {
                    h2 { class: "showcase-section-title", "SeasonSection + WafuFadeIn" }
                    WafuFadeIn {
                        direction: FadeDirection::Up,
                        SeasonSection {
                            season: Season::Spring,
                            title: "桜の季節".to_string(),
                            subtitle: "庭園の枝垂れ桜が見頃を迎えます。".to_string(),
                            p { "花見台での朝食プランをご用意しています。" }
                        }
                    }
                    WafuFadeIn {
                        direction: FadeDirection::Left,
                        delay: 150,
                        SeasonSection {
                            season: Season::Autumn,
                            title: "紅葉シーズン".to_string(),
                            subtitle: "山々が錦に染まる特別な季節。".to_string(),
                        }
                    }
                }

                WafuDivider {}
            }
        }
    }
}
