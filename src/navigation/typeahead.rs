//! Typeahead - jump to list entries by typing their leading characters.
//!
//! Keys typed within [`TYPEAHEAD_RESET`] of each other accumulate into one
//! buffer. While every buffered key is the same character the buffer is
//! "repeating" and each press cycles through entries starting with that
//! character; otherwise entries must start with the whole buffer.

use std::time::{Duration, Instant};

use super::traversal::move_focus;
use super::{Direction, Entry, Origin};

/// Idle time after which the next key starts a fresh buffer.
pub const TYPEAHEAD_RESET: Duration = Duration::from_millis(500);

/// What a typed key did to focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeaheadOutcome {
    /// The focused entry still matches; focus stays.
    Keep,
    /// Focus should move to this entry.
    Move(usize),
    /// Nothing matched; focus is unchanged.
    Unmatched,
}

impl TypeaheadOutcome {
    /// Whether the key was used (and should not reach other handlers).
    pub fn consumed(&self) -> bool {
        !matches!(self, Self::Unmatched)
    }
}

/// Typeahead buffer for one list.
#[derive(Debug, Clone)]
pub struct Typeahead {
    keys: Vec<String>,
    repeating: bool,
    previous_key_matched: bool,
    last_time: Option<Instant>,
}

impl Default for Typeahead {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            repeating: true,
            previous_key_matched: true,
            last_time: None,
        }
    }
}

impl Typeahead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffered keys, lowercased.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn is_repeating(&self) -> bool {
        self.repeating
    }

    pub fn previous_key_matched(&self) -> bool {
        self.previous_key_matched
    }

    /// Record a typed key at `now`.
    pub fn push_key(&mut self, key: char, now: Instant) {
        let lower: String = key.to_lowercase().collect();

        if let (Some(first), Some(last)) = (self.keys.first(), self.last_time) {
            if now.saturating_duration_since(last) > TYPEAHEAD_RESET {
                self.keys.clear();
                self.repeating = true;
                self.previous_key_matched = true;
            } else if self.repeating && lower != *first {
                self.repeating = false;
            }
        }

        self.last_time = Some(now);
        self.keys.push(lower);
    }

    /// Whether an entry's text matches the buffer.
    ///
    /// Text is trimmed and lowercased; empty text never matches.
    pub fn matches(&self, text: &str) -> bool {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return false;
        }
        if self.repeating {
            self.keys.first().is_some_and(|key| text.starts_with(key.as_str()))
        } else {
            text.starts_with(&self.keys.concat())
        }
    }

    /// Handle a typed key and decide where focus goes.
    pub fn handle_key(
        &mut self,
        entries: &[Entry],
        from: Origin,
        key: char,
        now: Instant,
        disabled_items_focusable: bool,
    ) -> TypeaheadOutcome {
        self.push_key(key, now);

        if self.previous_key_matched {
            let keep_current = match from {
                Origin::Item(i) => !self.repeating && entries.get(i).is_some_and(|e| self.matches(&e.text)),
                _ => false,
            };
            if keep_current {
                return TypeaheadOutcome::Keep;
            }

            let target = move_focus(entries, from, Direction::Next, false, disabled_items_focusable, Some(&*self));
            if let Some(target) = target {
                return TypeaheadOutcome::Move(target);
            }
        }

        self.previous_key_matched = false;
        TypeaheadOutcome::Unmatched
    }
}
