//! Navigation - Focus traversal and typeahead for menu lists.
//!
//! Pure functions over a snapshot of the list's entries. The menu list
//! rebuilds the snapshot from its registered items on every key event, so
//! nothing here holds component identity.
//!
//! - [`traversal`]: next/previous stepping with a wrap policy
//! - [`typeahead`]: the typed-character buffer and its matching rules

pub mod traversal;
pub mod typeahead;

pub use traversal::{move_focus, step};
pub use typeahead::{Typeahead, TypeaheadOutcome, TYPEAHEAD_RESET};

/// One focusable list entry, as seen by navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// Entry rejects interaction (disabled or aria-disabled).
    pub disabled: bool,
    /// Entry carries a focus marker (a tab index).
    pub focusable: bool,
    /// Rendered text, used for typeahead matching.
    pub text: String,
}

impl Entry {
    /// A focusable, enabled entry with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            disabled: false,
            focusable: true,
            text: text.into(),
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn unfocusable(mut self) -> Self {
        self.focusable = false;
        self
    }
}

/// Where traversal starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The list container itself has focus.
    List,
    /// The entry at this position has focus.
    Item(usize),
    /// Nothing in the list has focus (Home/End start here).
    Nothing,
}

/// Traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}
