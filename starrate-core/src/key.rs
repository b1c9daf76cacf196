//! Keyboard navigation keys
use serde::{Deserialize, Serialize};

/// Keys the rating widget reacts to while focused.
///
/// Parsed from DOM `KeyboardEvent::code` values. Anything else is not a
/// navigation key and must be left unconsumed so it propagates to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    Home,
    End,
}

impl Key {
    /// Parse a DOM key code. Returns `None` for codes the widget ignores.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowUp" => Some(Self::ArrowUp),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn navigation_codes_parse() {
        assert_eq!(Key::from_code("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_code("ArrowRight"), Some(Key::ArrowRight));
        assert_eq!(Key::from_code("ArrowUp"), Some(Key::ArrowUp));
        assert_eq!(Key::from_code("ArrowDown"), Some(Key::ArrowDown));
        assert_eq!(Key::from_code("Home"), Some(Key::Home));
        assert_eq!(Key::from_code("End"), Some(Key::End));
    }

    #[test]
    fn other_codes_are_ignored() {
        assert_eq!(Key::from_code("Enter"), None);
        assert_eq!(Key::from_code("KeyA"), None);
        assert_eq!(Key::from_code(""), None);
    }
}
