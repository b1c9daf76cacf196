//! Starrate core
//!
//! Platform-agnostic state machine for a star-rating selection widget.
//! This crate provides the selection, hover-preview and keyboard navigation
//! logic without any UI or platform-specific dependencies; frontends project
//! the state (and its [`aria::AriaSnapshot`]) onto whatever rendering
//! primitive they use.

pub mod accessor;
pub mod aria;
pub mod error;
pub mod key;
pub mod state;

// Re-export commonly used types
pub use accessor::RatingAccessor;
pub use aria::AriaSnapshot;
pub use error::RatingError;
pub use key::Key;
pub use state::{DEFAULT_SIZE, Events, KeyResponse, RatingEvent, RatingItem, RatingState};
