//! Global CSS for the wafu components.
//!
//! Every `wafu-*` class emitted by the components is defined here. Hosts
//! inject this once, typically in a `style` element at the app root.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* AI (Indigo - primary actions) */
  --wafu-ai: #2a4073;
  --wafu-ai-dark: #1f3055;

  /* MOMIJI (Maple vermilion) */
  --wafu-momiji: #b7282e;
  --wafu-momiji-bright: #d7383f;

  /* KOHAKU (Amber) */
  --wafu-kohaku: #ca7a2c;
  --wafu-kohaku-bright: #e08f3e;

  /* TAKE (Bamboo green) */
  --wafu-take: #4f6f46;
  --wafu-take-light: #6a8a5f;

  /* Paper backgrounds */
  --wafu-bg: #faf6f0;
  --wafu-bg-warm: #f3ece1;
  --wafu-bg-card: #fffdf9;

  /* Text */
  --wafu-text-primary: #2b2b2b;
  --wafu-text-secondary: #5a544a;
  --wafu-text-muted: #8a8378;
  --wafu-text-inverse: #faf6f0;

  /* Borders */
  --wafu-border: #e0d8ca;
  --wafu-border-strong: #c4b8a4;

  --wafu-font-serif: 'Noto Serif JP', 'Yu Mincho', Georgia, serif;
  --wafu-font-sans: 'Noto Sans JP', 'Hiragino Sans', sans-serif;
}

/* === Button === */
.wafu-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  font-family: var(--wafu-font-sans);
  font-weight: 500;
  border: none;
  border-radius: 2px;
  cursor: pointer;
  transition: background-color 0.2s ease, border-color 0.2s ease;
}
.wafu-btn:focus-visible {
  outline: 2px solid var(--wafu-ai);
  outline-offset: 2px;
}
.wafu-btn:disabled {
  opacity: 0.5;
  pointer-events: none;
}

.wafu-btn-ai { background: var(--wafu-ai); color: var(--wafu-text-inverse); }
.wafu-btn-ai:hover { background: var(--wafu-ai-dark); }
.wafu-btn-momiji { background: var(--wafu-momiji); color: var(--wafu-text-inverse); }
.wafu-btn-momiji:hover { background: var(--wafu-momiji-bright); }
.wafu-btn-kohaku { background: var(--wafu-kohaku); color: var(--wafu-text-inverse); }
.wafu-btn-kohaku:hover { background: var(--wafu-kohaku-bright); }
.wafu-btn-take { background: var(--wafu-take); color: var(--wafu-text-inverse); }
.wafu-btn-take:hover { background: var(--wafu-take-light); }
.wafu-btn-ghost { background: transparent; color: var(--wafu-text-primary); }
.wafu-btn-ghost:hover { background: var(--wafu-bg-warm); }
.wafu-btn-outline {
  background: transparent;
  color: var(--wafu-text-primary);
  border: 1px solid var(--wafu-border);
}
.wafu-btn-outline:hover {
  border-color: var(--wafu-border-strong);
  background: var(--wafu-bg-warm);
}

.wafu-btn-sm { padding: 0.375rem 0.75rem; font-size: 0.875rem; }
.wafu-btn-md { padding: 0.625rem 1.25rem; font-size: 0.875rem; }
.wafu-btn-lg { padding: 0.75rem 1.75rem; font-size: 1rem; }

/* === Fade-In === */
.wafu-fade {
  transition-property: opacity, transform;
  transition-timing-function: ease-out;
}
.wafu-fade-hidden { opacity: 0; }
.wafu-fade-visible { opacity: 1; transform: translate(0, 0); }
.wafu-fade-up { transform: translateY(1.5rem); }
.wafu-fade-down { transform: translateY(-1.5rem); }
.wafu-fade-left { transform: translateX(1.5rem); }
.wafu-fade-right { transform: translateX(-1.5rem); }

/* === Ryokan Card === */
.wafu-card {
  border-radius: 2px;
  border: 1px solid var(--wafu-border);
  overflow: hidden;
  background: var(--wafu-bg-card);
  transition: box-shadow 0.3s ease;
}
.wafu-card-default:hover { box-shadow: 0 1px 4px rgba(43, 43, 43, 0.12); }
.wafu-card-featured {
  border-color: var(--wafu-kohaku);
  box-shadow: 0 2px 8px rgba(43, 43, 43, 0.16);
}
.wafu-card-media {
  position: relative;
  height: 12rem;
  background: var(--wafu-bg-warm);
  overflow: hidden;
}
.wafu-card-image { width: 100%; height: 100%; object-fit: cover; }
.wafu-card-placeholder {
  width: 100%;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--wafu-text-muted);
  font-size: 0.875rem;
}
.wafu-card-badge {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  background: var(--wafu-kohaku);
  color: #fff;
  font-size: 0.75rem;
  font-weight: 600;
  padding: 0.25rem 0.5rem;
  border-radius: 2px;
}
.wafu-card-body { padding: 1.25rem; display: flex; flex-direction: column; gap: 0.75rem; }
.wafu-card-room-type {
  font-size: 0.75rem;
  font-weight: 600;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--wafu-momiji);
}
.wafu-card-room-name {
  font-family: var(--wafu-font-serif);
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--wafu-text-primary);
  margin: 0;
}
.wafu-card-description {
  font-size: 0.875rem;
  color: var(--wafu-text-secondary);
  line-height: 1.7;
  margin: 0;
}
.wafu-card-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding-top: 0.75rem;
  border-top: 1px solid var(--wafu-border);
}
.wafu-card-price {
  font-family: var(--wafu-font-serif);
  font-size: 1.125rem;
  font-weight: 600;
  color: var(--wafu-text-primary);
}
.wafu-card-price-unit {
  font-size: 0.75rem;
  color: var(--wafu-text-muted);
  margin-left: 0.25rem;
}

/* === Season Section === */
.wafu-season { border-radius: 2px; border: 1px solid; padding: 2rem; }
.wafu-season-header { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 1rem; }
.wafu-season-icon { font-size: 1.5rem; }
.wafu-season-label {
  font-size: 0.75rem;
  font-weight: 600;
  letter-spacing: 0.2em;
  text-transform: uppercase;
}
.wafu-season-title {
  font-family: var(--wafu-font-serif);
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--wafu-text-primary);
  margin: 0 0 0.5rem 0;
}
.wafu-season-subtitle {
  font-size: 0.875rem;
  color: var(--wafu-text-secondary);
  line-height: 1.7;
  margin: 0;
}
.wafu-season-content { margin-top: 1.5rem; }

.wafu-season-bg-spring { background: #fdf2f6; }
.wafu-season-border-spring { border-color: #f9c9dd; }
.wafu-season-accent-spring { color: #d4588e; }
.wafu-season-bg-summer { background: #edf7ef; }
.wafu-season-border-summer { border-color: #bfe3c8; }
.wafu-season-accent-summer { color: var(--wafu-take); }
.wafu-season-bg-autumn { background: #fdf3ea; }
.wafu-season-border-autumn { border-color: #f4cfae; }
.wafu-season-accent-autumn { color: var(--wafu-momiji); }
.wafu-season-bg-winter { background: #f2f5f8; }
.wafu-season-border-winter { border-color: #ccd7e0; }
.wafu-season-accent-winter { color: var(--wafu-ai); }

/* === Divider === */
.wafu-divider-line { border: none; border-top: 1px solid var(--wafu-border); margin: 2rem 0; }
.wafu-divider-dots {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  padding: 1.5rem 0;
}
.wafu-divider-dot {
  width: 0.375rem;
  height: 0.375rem;
  border-radius: 9999px;
  background: var(--wafu-border-strong);
}
.wafu-divider-dot-accent {
  width: 0.5rem;
  height: 0.5rem;
  background: var(--wafu-momiji);
}
.wafu-divider-wave {
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem 0;
}
.wafu-divider-wave-glyphs {
  color: var(--wafu-text-muted);
  font-size: 1.25rem;
  letter-spacing: 0.5em;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    // Guards against a component class being renamed without its stylesheet
    // entry following along.
    #[test]
    fn stylesheet_covers_component_classes() {
        for class in [
            ".wafu-btn",
            ".wafu-btn-ai",
            ".wafu-btn-momiji",
            ".wafu-btn-kohaku",
            ".wafu-btn-take",
            ".wafu-btn-ghost",
            ".wafu-btn-outline",
            ".wafu-btn-sm",
            ".wafu-btn-md",
            ".wafu-btn-lg",
            ".wafu-fade-hidden",
            ".wafu-fade-visible",
            ".wafu-fade-up",
            ".wafu-fade-down",
            ".wafu-fade-left",
            ".wafu-fade-right",
            ".wafu-card-featured",
            ".wafu-card-placeholder",
            ".wafu-card-badge",
            ".wafu-season-bg-spring",
            ".wafu-season-border-winter",
            ".wafu-divider-line",
            ".wafu-divider-dots",
            ".wafu-divider-wave",
        ] {
            assert!(GLOBAL_STYLES.contains(class), "missing {class}");
        }
    }
}
