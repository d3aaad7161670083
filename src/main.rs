#![allow(non_snake_case)]

mod app;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use wafu_ui::WafuLocale;

/// Locale the showcase starts in, set from the command line
static START_LOCALE: OnceLock<WafuLocale> = OnceLock::new();

/// Get the start-up locale (defaults to Japanese)
pub fn start_locale() -> WafuLocale {
    START_LOCALE.get().copied().unwrap_or_default()
}

/// Wafu Design System - component showcase
#[derive(Parser, Debug)]
#[command(name = "wafu-showcase")]
#[command(about = "Wafu Design System - Japanese-style UI component showcase")]
struct Args {
    /// Display locale: "ja" or "en"
    #[arg(short, long, default_value = "ja")]
    locale: String,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let locale = WafuLocale::from_tag(&args.locale).unwrap_or_else(|| {
        tracing::warn!("unknown locale tag '{}', falling back to ja", args.locale);
        WafuLocale::Ja
    });
    let _ = START_LOCALE.set(locale);

    tracing::info!("Starting wafu showcase with locale '{}'", locale.as_str());

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("和風デザインシステム - Wafu Design System")
            .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 1000.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
