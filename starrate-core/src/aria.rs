//! Accessibility attribute projection
//!
//! The widget exposes slider semantics: a value range of `0..=size` with
//! the committed rating as the current value. Frontends read a snapshot and
//! write the fields onto whatever UI primitive they render.

use crate::state::RatingState;

/// Pure projection of a [`RatingState`] onto the slider accessibility
/// attribute surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AriaSnapshot {
    /// Always `"slider"`.
    pub role: &'static str,
    /// Lower bound of the value range; zero means "no rating".
    pub value_min: u32,
    /// Upper bound of the value range, equal to the slot count.
    pub value_max: u32,
    /// Current 1-based rating, zero when nothing is selected.
    pub value_now: u32,
    /// Human-readable value, e.g. `"4 out of 6"`.
    pub value_text: String,
    pub disabled: bool,
    pub readonly: bool,
    /// Number of slots in the set.
    pub set_size: u32,
    /// `-1` while disabled so the widget leaves the tab order.
    pub tab_index: i32,
    /// Whether the widget should be reachable by pointer and keyboard.
    pub interactive: bool,
}

impl AriaSnapshot {
    #[must_use]
    pub fn of(state: &RatingState) -> Self {
        let size = u32::try_from(state.size()).unwrap_or(u32::MAX);
        let value_now = state.value();
        Self {
            role: "slider",
            value_min: 0,
            value_max: size,
            value_now,
            value_text: format!("{value_now} out of {size}"),
            disabled: state.disabled(),
            readonly: state.readonly(),
            set_size: size,
            tab_index: if state.disabled() { -1 } else { 0 },
            interactive: !state.disabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AriaSnapshot;
    use crate::state::RatingState;

    #[test]
    fn snapshot_reflects_committed_selection() {
        let mut state = RatingState::new(6).expect("valid size");
        let _ = state.commit_selection(3);
        let aria = AriaSnapshot::of(&state);
        assert_eq!(aria.role, "slider");
        assert_eq!(aria.value_min, 0);
        assert_eq!(aria.value_max, 6);
        assert_eq!(aria.value_now, 4);
        assert_eq!(aria.value_text, "4 out of 6");
        assert_eq!(aria.set_size, 6);
        assert_eq!(aria.tab_index, 0);
        assert!(aria.interactive);
    }

    #[test]
    fn disabled_widget_leaves_tab_order() {
        let mut state = RatingState::new(5).expect("valid size");
        state.set_disabled(true);
        let aria = AriaSnapshot::of(&state);
        assert_eq!(aria.tab_index, -1);
        assert!(aria.disabled);
        assert!(!aria.interactive);
    }

    #[test]
    fn empty_selection_reports_zero_value() {
        let state = RatingState::new(3).expect("valid size");
        let aria = AriaSnapshot::of(&state);
        assert_eq!(aria.value_now, 0);
        assert_eq!(aria.value_text, "0 out of 3");
    }
}
