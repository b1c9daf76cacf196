//! Controlled-value-accessor contract
//!
//! The protocol by which a host form framework pushes values into the
//! widget and receives change/touched notifications out of it. The
//! accessor wraps the state machine and owns the registered callbacks;
//! every operation mutates state first and dispatches notifications after,
//! so callbacks always observe consistent state.

use core::fmt;

use crate::error::RatingError;
use crate::key::Key;
use crate::state::{RatingEvent, RatingState};

type ChangeFn = Box<dyn Fn(u32)>;
type NotifyFn = Box<dyn Fn()>;

/// [`RatingState`] plus host-registered callbacks.
#[derive(Default)]
pub struct RatingAccessor {
    state: RatingState,
    on_change: Option<ChangeFn>,
    on_touched: Option<NotifyFn>,
    on_rate_change: Option<ChangeFn>,
    on_rate_cancel: Option<NotifyFn>,
}

impl RatingAccessor {
    #[must_use]
    pub fn new(state: RatingState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn state(&self) -> &RatingState {
        &self.state
    }

    /// Register the form-framework change callback.
    pub fn register_on_change<F: Fn(u32) + 'static>(&mut self, callback: F) {
        self.on_change = Some(Box::new(callback));
    }

    /// Register the form-framework touched callback.
    pub fn register_on_touched<F: Fn() + 'static>(&mut self, callback: F) {
        self.on_touched = Some(Box::new(callback));
    }

    /// Register the observer for committed selections (1-based value).
    pub fn register_rate_change<F: Fn(u32) + 'static>(&mut self, callback: F) {
        self.on_rate_change = Some(Box::new(callback));
    }

    /// Register the observer for cancellations.
    pub fn register_rate_cancel<F: Fn() + 'static>(&mut self, callback: F) {
        self.on_rate_cancel = Some(Box::new(callback));
    }

    /// Push an external value in. Zero values are ignored rather than
    /// rejected, matching the falsy-value contract of the accessor
    /// protocol; the registered change callback receives the echoed value
    /// before the state updates are visible to later reads.
    pub fn write_value(&mut self, rating: u32) {
        if rating == 0 {
            return;
        }
        if let Some(callback) = &self.on_change {
            callback(rating);
        }
        // rating is non-zero, so set_rating cannot fail
        let _ = self.state.set_rating(rating);
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.state.set_disabled(disabled);
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        self.state.set_readonly(readonly);
    }

    pub fn set_show_cancel_icon(&mut self, show: bool) {
        self.state.set_show_cancel_icon(show);
    }

    /// See [`RatingState::set_size`].
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::InvalidSize`] when `size` is zero.
    pub fn set_size(&mut self, size: usize) -> Result<(), RatingError> {
        self.state.set_size(size)
    }

    /// See [`RatingState::set_rating`].
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::InvalidRating`] when `rating` is zero.
    pub fn set_rating(&mut self, rating: u32) -> Result<(), RatingError> {
        self.state.set_rating(rating)
    }

    pub fn preview_hover(&mut self, index: usize) {
        self.state.preview_hover(index);
    }

    pub fn mouse_leave(&mut self) {
        self.state.mouse_leave();
    }

    pub fn commit_selection(&mut self, index: usize) {
        let events = self.state.commit_selection(index);
        self.dispatch(&events);
    }

    pub fn cancel_selection(&mut self) {
        let events = self.state.cancel_selection();
        self.dispatch(&events);
    }

    pub fn blur(&mut self) {
        let events = self.state.blur();
        self.dispatch(&events);
    }

    /// Feed a key press through the machine and dispatch the resulting
    /// notifications. Returns whether the press was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        let response = self.state.handle_key(key);
        self.dispatch(&response.events);
        response.consumed
    }

    fn dispatch(&self, events: &[RatingEvent]) {
        for event in events {
            match event {
                RatingEvent::Changed(value) => {
                    if let Some(callback) = &self.on_rate_change {
                        callback(*value);
                    }
                    if let Some(callback) = &self.on_change {
                        callback(*value);
                    }
                }
                RatingEvent::Canceled => {
                    if let Some(callback) = &self.on_rate_cancel {
                        callback();
                    }
                }
                RatingEvent::Touched => {
                    if let Some(callback) = &self.on_touched {
                        callback();
                    }
                }
            }
        }
    }
}

impl fmt::Debug for RatingAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingAccessor")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
