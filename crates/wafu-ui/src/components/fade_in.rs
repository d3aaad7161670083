//! Wafu Fade-In Component
//!
//! Wraps arbitrary content and reveals it the first time the wrapper
//! scrolls into view. The reveal is one-shot: once visible, the wrapper
//! stays visible for the rest of its lifetime.
//!
//! Hosts without visibility observation never deliver the event; the
//! wrapper then simply stays hidden, without erroring.

use dioxus::prelude::*;

/// Directional offset applied while hidden
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FadeDirection {
    /// Slide up into place
    #[default]
    Up,
    /// Slide down into place
    Down,
    /// Slide left into place
    Left,
    /// Slide right into place
    Right,
    /// Opacity only, no positional offset
    None,
}

impl FadeDirection {
    /// Returns the CSS class for the hidden-state offset, or "" for `None`
    pub fn offset_class(&self) -> &'static str {
        match self {
            FadeDirection::Up => "wafu-fade-up",
            FadeDirection::Down => "wafu-fade-down",
            FadeDirection::Left => "wafu-fade-left",
            FadeDirection::Right => "wafu-fade-right",
            FadeDirection::None => "",
        }
    }
}

/// One-shot reveal state machine: `Hidden` -> `Revealed`, no way back.
///
/// Owned by a single [`WafuFadeIn`] instance. Intersection reports after
/// the first revealing one are ignored, so repeated delivery cannot
/// re-trigger the transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    /// Whether the reveal has fired.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether a report would flip the state, without mutating it.
    pub fn wants_transition(&self, intersecting: bool) -> bool {
        !self.revealed && intersecting
    }

    /// Feeds one intersection report. Returns true only for the single
    /// report that flips the state.
    pub fn on_intersection(&mut self, intersecting: bool) -> bool {
        if !self.wants_transition(intersecting) {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Phase classes for one render: the visible token alone after the reveal,
/// otherwise the hidden token plus the direction's offset.
fn phase_class(direction: FadeDirection, revealed: bool) -> String {
    if revealed {
        return "wafu-fade-visible".to_string();
    }
    let offset = direction.offset_class();
    if offset.is_empty() {
        "wafu-fade-hidden".to_string()
    } else {
        format!("wafu-fade-hidden {}", offset)
    }
}

/// Properties for the WafuFadeIn component
#[derive(Clone, PartialEq, Props)]
pub struct WafuFadeInProps {
    /// Content to reveal
    pub children: Element,
    /// Offset direction while hidden
    #[props(default)]
    pub direction: FadeDirection,
    /// Transition delay in milliseconds, forwarded verbatim
    #[props(default = 0)]
    pub delay: i64,
    /// Transition duration in milliseconds, forwarded verbatim
    #[props(default = 700)]
    pub duration: i64,
    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Reveals its children the first time they become visible
///
/// # Design Notes
///
/// - Visibility observation uses the renderer's intersection reporting
///   with a low threshold; the first intersecting report wins
/// - Hidden: zero opacity plus the direction's offset class
/// - Revealed: full opacity, no offset class remains
/// - Delay and duration are not validated or clamped; the caller's values
///   land unchanged in the transition timing
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     WafuFadeIn {
///         direction: FadeDirection::Left,
///         delay: 150,
///         RyokanCard { /* ... */ }
///     }
/// }
/// ```
#[component]
pub fn WafuFadeIn(props: WafuFadeInProps) -> Element {
    let mut state = use_signal(RevealState::default);

    let extra_class = props.class.as_deref().unwrap_or("");
    let phase = phase_class(props.direction, state().is_revealed());
    let full_class = if extra_class.is_empty() {
        format!("wafu-fade {}", phase)
    } else {
        format!("wafu-fade {} {}", phase, extra_class)
    };

    let timing = format!(
        "transition-duration: {}ms; transition-delay: {}ms;",
        props.duration, props.delay
    );

    rsx! {
        div {
            class: "{full_class}",
            style: "{timing}",
            onvisible: move |evt| {
                let intersecting = evt.data().is_intersecting().unwrap_or(false);
                // peek first: reports that cannot flip the state must not
                // dirty the signal
                let wants = state.peek().wants_transition(intersecting);
                if wants {
                    state.write().on_intersection(intersecting);
                    tracing::trace!("wafu-fade-in revealed");
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_classes() {
        assert_eq!(FadeDirection::Up.offset_class(), "wafu-fade-up");
        assert_eq!(FadeDirection::Down.offset_class(), "wafu-fade-down");
        assert_eq!(FadeDirection::Left.offset_class(), "wafu-fade-left");
        assert_eq!(FadeDirection::Right.offset_class(), "wafu-fade-right");
        assert_eq!(FadeDirection::None.offset_class(), "");
    }

    #[test]
    fn default_direction_is_up() {
        assert_eq!(FadeDirection::default(), FadeDirection::Up);
    }

    #[test]
    fn reveal_fires_exactly_once() {
        let mut state = RevealState::default();
        assert!(!state.is_revealed());
        assert!(state.on_intersection(true));
        assert!(state.is_revealed());
        // Later reports, intersecting or not, are no-ops.
        assert!(!state.on_intersection(true));
        assert!(!state.on_intersection(false));
        assert!(state.is_revealed());
    }

    #[test]
    fn non_intersecting_reports_do_not_reveal() {
        let mut state = RevealState::default();
        assert!(!state.on_intersection(false));
        assert!(!state.on_intersection(false));
        assert!(!state.is_revealed());
        assert!(state.on_intersection(true));
    }

    #[test]
    fn write_guard_only_passes_revealing_reports() {
        let mut state = RevealState::default();
        assert!(!state.wants_transition(false));
        assert!(state.wants_transition(true));
        state.on_intersection(true);
        // Once revealed, no report warrants touching the state again.
        assert!(!state.wants_transition(true));
        assert!(!state.wants_transition(false));
    }

    #[test]
    fn revealed_phase_has_full_opacity_and_no_offset() {
        let directions = [
            FadeDirection::Up,
            FadeDirection::Down,
            FadeDirection::Left,
            FadeDirection::Right,
            FadeDirection::None,
        ];
        for direction in directions {
            let class = phase_class(direction, true);
            assert_eq!(class, "wafu-fade-visible", "{direction:?}");
            for offset in ["wafu-fade-up", "wafu-fade-down", "wafu-fade-left", "wafu-fade-right"] {
                assert!(!class.contains(offset), "{direction:?} kept {offset}");
            }
        }
    }

    #[test]
    fn hidden_phase_has_zero_opacity_and_matching_offset() {
        for direction in [
            FadeDirection::Up,
            FadeDirection::Down,
            FadeDirection::Left,
            FadeDirection::Right,
        ] {
            let class = phase_class(direction, false);
            assert!(class.contains("wafu-fade-hidden"), "{direction:?}");
            assert!(class.contains(direction.offset_class()), "{direction:?}");
            assert!(!class.contains("wafu-fade-visible"));
        }
        assert_eq!(phase_class(FadeDirection::None, false), "wafu-fade-hidden");
    }

    #[test]
    fn instances_are_independent() {
        let mut a = RevealState::default();
        let b = RevealState::default();
        a.on_intersection(true);
        assert!(a.is_revealed());
        assert!(!b.is_revealed());
    }
}
