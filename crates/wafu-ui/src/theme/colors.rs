//! Color constants for the wafu palette.
//!
//! Traditional Japanese color names over warm paper backgrounds.

#![allow(dead_code)]

// === AI (Indigo - primary actions) ===
pub const AI: &str = "#2a4073";
pub const AI_DARK: &str = "#1f3055";

// === MOMIJI (Maple vermilion) ===
pub const MOMIJI: &str = "#b7282e";
pub const MOMIJI_BRIGHT: &str = "#d7383f";

// === KOHAKU (Amber) ===
pub const KOHAKU: &str = "#ca7a2c";
pub const KOHAKU_BRIGHT: &str = "#e08f3e";

// === TAKE (Bamboo green) ===
pub const TAKE: &str = "#4f6f46";
pub const TAKE_LIGHT: &str = "#6a8a5f";

// === BACKGROUNDS (Paper) ===
pub const BG: &str = "#faf6f0";
pub const BG_WARM: &str = "#f3ece1";
pub const BG_CARD: &str = "#fffdf9";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#2b2b2b";
pub const TEXT_SECONDARY: &str = "#5a544a";
pub const TEXT_MUTED: &str = "#8a8378";
pub const TEXT_INVERSE: &str = "#faf6f0";

// === BORDERS ===
pub const BORDER: &str = "#e0d8ca";
pub const BORDER_STRONG: &str = "#c4b8a4";
