pub mod foundation;
pub mod rating;

pub use rating::{Rating, RatingProps, StarContext};
