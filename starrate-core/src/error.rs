use thiserror::Error;

/// Errors raised when rating input invariants are violated.
///
/// Both variants are fatal to the triggering call: the machine rejects the
/// input and leaves its prior state untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RatingError {
    /// A non-positive slot count was supplied.
    #[error("Rating size must be greater than zero.")]
    InvalidSize,
    /// A zero rating was pushed through the controlled-value channel.
    #[error("Rate definition must be greater than zero.")]
    InvalidRating,
}
