//! Rating selection state machine
//!
//! Owns the fixed-size slot sequence, the committed selection and the
//! transient hover preview. All transitions are synchronous; operations
//! mutate state first and hand any resulting notifications back to the
//! caller, so observers always see consistent state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::RatingError;
use crate::key::Key;

/// Slot count used when the host does not configure one.
pub const DEFAULT_SIZE: usize = 5;

/// One selectable slot (visually, a star).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RatingItem {
    /// Whether the slot renders highlighted. True for every slot at or
    /// before the hovered/selected index.
    pub hovered: bool,
}

/// Notification produced by a state transition, emitted after the mutation
/// it describes has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingEvent {
    /// A selection was committed; carries the 1-based rating value.
    /// A value of zero means keyboard navigation stepped below the first
    /// slot and cleared the selection.
    Changed(u32),
    /// The selection was cleared through the cancel affordance.
    Canceled,
    /// The widget was touched (committed or blurred); form hosts use this
    /// to mark the control dirty.
    Touched,
}

/// Event buffer returned by mutating operations. A commit produces exactly
/// two entries, so the inline capacity covers the common case.
pub type Events = SmallVec<[RatingEvent; 2]>;

/// Outcome of feeding a key press into the machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyResponse {
    /// Whether the press was handled and the caller must suppress the
    /// default browser behavior.
    pub consumed: bool,
    /// Notifications raised by the transition, in emission order.
    pub events: Events,
}

impl KeyResponse {
    fn consumed(events: Events) -> Self {
        Self {
            consumed: true,
            events,
        }
    }

    fn ignored() -> Self {
        Self::default()
    }
}

/// The rating selection state machine.
///
/// `selected == None` is the "nothing selected" state. Whenever a selection
/// is committed, every slot at or before it is hovered and every later slot
/// is not, except while a transient pointer preview is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingState {
    size: usize,
    items: Vec<RatingItem>,
    selected: Option<usize>,
    readonly: bool,
    disabled: bool,
    show_cancel_icon: bool,
}

impl Default for RatingState {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            items: vec![RatingItem::default(); DEFAULT_SIZE],
            selected: None,
            readonly: false,
            disabled: false,
            show_cancel_icon: false,
        }
    }
}

impl RatingState {
    /// Create a machine with `size` slots, none selected.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::InvalidSize`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self, RatingError> {
        let mut state = Self::default();
        state.set_size(size)?;
        Ok(state)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn items(&self) -> &[RatingItem] {
        &self.items
    }

    /// Zero-based committed selection, `None` when nothing is selected.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// One-based rating value, zero when nothing is selected.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.selected.map_or(0, |index| as_u32(index + 1))
    }

    #[must_use]
    pub fn readonly(&self) -> bool {
        self.readonly
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    #[must_use]
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    #[must_use]
    pub fn show_cancel_icon(&self) -> bool {
        self.show_cancel_icon
    }

    pub fn set_show_cancel_icon(&mut self, show: bool) {
        self.show_cancel_icon = show;
    }

    /// Rebuild the slot sequence to exactly `size` elements.
    ///
    /// A still-in-range selection is retained and its highlight re-applied;
    /// a selection beyond the new size is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::InvalidSize`] when `size` is zero; prior
    /// state is left untouched.
    pub fn set_size(&mut self, size: usize) -> Result<(), RatingError> {
        if size == 0 {
            return Err(RatingError::InvalidSize);
        }
        self.size = size;
        self.items = vec![RatingItem::default(); size];
        match self.selected {
            Some(index) if index < size => self.apply_hover(Some(index)),
            Some(_) => self.selected = None,
            None => {}
        }
        Ok(())
    }

    /// Apply an externally supplied 1-based rating.
    ///
    /// Values beyond the slot count select the last slot, keeping the
    /// selection index in range.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::InvalidRating`] when `rating` is zero; prior
    /// state is left untouched.
    pub fn set_rating(&mut self, rating: u32) -> Result<(), RatingError> {
        if rating == 0 {
            return Err(RatingError::InvalidRating);
        }
        let index = (rating as usize).min(self.size) - 1;
        self.selected = Some(index);
        self.apply_hover(Some(index));
        Ok(())
    }

    /// Transient pointer preview: highlight every slot up to `index`
    /// without touching the committed selection. No-op while readonly or
    /// disabled.
    pub fn preview_hover(&mut self, index: usize) {
        if self.input_blocked() {
            return;
        }
        self.apply_hover(Some(index));
    }

    /// Commit a selection (click or keyboard activation). No-op while
    /// readonly or disabled.
    ///
    /// Returns the touched notification followed by the 1-based change
    /// notification.
    pub fn commit_selection(&mut self, index: usize) -> Events {
        if self.input_blocked() {
            return Events::new();
        }
        let index = index.min(self.size - 1);
        self.selected = Some(index);
        self.apply_hover(Some(index));
        let mut events = Events::new();
        events.push(RatingEvent::Touched);
        events.push(RatingEvent::Changed(as_u32(index + 1)));
        events
    }

    /// Clear the selection via the cancel affordance. Always permitted:
    /// like [`Self::set_rating`], this is an external channel rather than a
    /// pointer/keyboard input.
    pub fn cancel_selection(&mut self) -> Events {
        self.selected = None;
        self.apply_hover(None);
        let mut events = Events::new();
        events.push(RatingEvent::Canceled);
        events
    }

    /// Revert any transient preview back to the committed selection.
    /// No-op while readonly or disabled.
    pub fn mouse_leave(&mut self) {
        if self.input_blocked() {
            return;
        }
        self.apply_hover(self.selected);
    }

    /// Focus left the widget: report touched, change nothing.
    pub fn blur(&mut self) -> Events {
        let mut events = Events::new();
        events.push(RatingEvent::Touched);
        events
    }

    /// Keyboard navigation. Arrow keys step the selection, Home/End jump
    /// to the first/last slot. Every handled branch reports `consumed` so
    /// the caller suppresses the default browser behavior; readonly and
    /// disabled widgets ignore keys entirely.
    pub fn handle_key(&mut self, key: Key) -> KeyResponse {
        if self.input_blocked() {
            return KeyResponse::ignored();
        }
        match key {
            Key::ArrowLeft | Key::ArrowDown => match self.selected {
                None => KeyResponse::consumed(Events::new()),
                Some(0) => {
                    // Stepping below the first slot clears the selection
                    // and commits the cleared value.
                    self.selected = None;
                    self.apply_hover(None);
                    let mut events = Events::new();
                    events.push(RatingEvent::Touched);
                    events.push(RatingEvent::Changed(0));
                    KeyResponse::consumed(events)
                }
                Some(index) => KeyResponse::consumed(self.commit_selection(index - 1)),
            },
            Key::ArrowRight | Key::ArrowUp => {
                let next = match self.selected {
                    None => 0,
                    Some(index) if index + 1 < self.size => index + 1,
                    Some(_) => return KeyResponse::consumed(Events::new()),
                };
                KeyResponse::consumed(self.commit_selection(next))
            }
            Key::Home => KeyResponse::consumed(self.commit_selection(0)),
            Key::End => KeyResponse::consumed(self.commit_selection(self.size - 1)),
        }
    }

    fn input_blocked(&self) -> bool {
        self.readonly || self.disabled
    }

    fn apply_hover(&mut self, up_to: Option<usize>) {
        for (i, item) in self.items.iter_mut().enumerate() {
            item.hovered = up_to.is_some_and(|index| i <= index);
        }
    }
}

fn as_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
