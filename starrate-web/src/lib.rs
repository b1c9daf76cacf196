#![forbid(unsafe_code)]
//! Yew star-rating selection component.
//!
//! The interaction logic lives in `starrate-core`; this crate binds it to
//! Yew rendering, DOM events and the slider accessibility attribute
//! surface.

pub mod components;

pub use components::rating::{Msg, Rating, RatingProps, StarContext};
