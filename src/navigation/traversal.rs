//! Focus traversal over list entries.

use super::typeahead::Typeahead;
use super::{Direction, Entry, Origin};

/// One raw step through the list, ignoring entry state.
///
/// - next: list → first; item i → i+1, else first when wrapping, else stop;
///   nothing → first when wrapping.
/// - previous: list → last (first when wrap is disabled); item i → i-1,
///   else last when wrapping, else stop; nothing → last when wrapping.
pub fn step(len: usize, from: Origin, direction: Direction, disable_list_wrap: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let first = 0;
    let last = len - 1;

    match (direction, from) {
        (Direction::Next, Origin::List) => Some(first),
        (Direction::Next, Origin::Item(i)) if i < last => Some(i + 1),
        (Direction::Next, _) => (!disable_list_wrap).then_some(first),

        (Direction::Previous, Origin::List) => Some(if disable_list_wrap { first } else { last }),
        (Direction::Previous, Origin::Item(i)) if i > first && i <= last => Some(i - 1),
        (Direction::Previous, _) => (!disable_list_wrap).then_some(last),
    }
}

/// Find the entry that should receive focus.
///
/// Skips entries without a focus marker, entries whose text fails
/// `criteria`, and disabled entries (unless `disabled_items_focusable`).
/// Starting from [`Origin::Nothing`] always allows wrapping so Home/End
/// reach the boundary. Stops once the first entry is reached a second time.
pub fn move_focus(
    entries: &[Entry],
    from: Origin,
    direction: Direction,
    disable_list_wrap: bool,
    disabled_items_focusable: bool,
    criteria: Option<&Typeahead>,
) -> Option<usize> {
    let first_wrap = if from == Origin::Nothing { false } else { disable_list_wrap };
    let mut next = step(entries.len(), from, direction, first_wrap);
    let mut wrapped_once = false;

    while let Some(candidate) = next {
        if candidate == 0 {
            if wrapped_once {
                return None;
            }
            wrapped_once = true;
        }

        let entry = &entries[candidate];
        let blocked = entry.disabled && !disabled_items_focusable;
        let matches = criteria.is_none_or(|c| c.matches(&entry.text));

        if entry.focusable && matches && !blocked {
            return Some(candidate);
        }
        next = step(entries.len(), Origin::Item(candidate), direction, disable_list_wrap);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(texts: &[&str]) -> Vec<Entry> {
        texts.iter().map(|t| Entry::new(*t)).collect()
    }

    #[test]
    fn test_step_next() {
        assert_eq!(step(3, Origin::List, Direction::Next, true), Some(0));
        assert_eq!(step(3, Origin::Item(0), Direction::Next, true), Some(1));
        assert_eq!(step(3, Origin::Item(2), Direction::Next, false), Some(0));
        assert_eq!(step(3, Origin::Item(2), Direction::Next, true), None);
        assert_eq!(step(3, Origin::Nothing, Direction::Next, false), Some(0));
        assert_eq!(step(3, Origin::Nothing, Direction::Next, true), None);
        assert_eq!(step(0, Origin::List, Direction::Next, false), None);
    }

    #[test]
    fn test_step_previous() {
        assert_eq!(step(3, Origin::List, Direction::Previous, false), Some(2));
        assert_eq!(step(3, Origin::List, Direction::Previous, true), Some(0));
        assert_eq!(step(3, Origin::Item(1), Direction::Previous, true), Some(0));
        assert_eq!(step(3, Origin::Item(0), Direction::Previous, false), Some(2));
        assert_eq!(step(3, Origin::Item(0), Direction::Previous, true), None);
        assert_eq!(step(3, Origin::Nothing, Direction::Previous, false), Some(2));
    }

    #[test]
    fn test_wrapping_cycle_returns_after_n_steps() {
        let list = vec![
            Entry::new("a"),
            Entry::new("b").disabled(),
            Entry::new("c"),
            Entry::new("d").unfocusable(),
            Entry::new("e"),
        ];
        // a, c, e are reachable
        let mut at = Origin::Item(0);
        let mut visited = Vec::new();
        for _ in 0..3 {
            let next = move_focus(&list, at, Direction::Next, false, false, None);
            let Some(next) = next else { panic!("traversal stopped") };
            visited.push(next);
            at = Origin::Item(next);
        }
        assert_eq!(visited, vec![2, 4, 0]);
    }

    #[test]
    fn test_no_wrap_stops_at_boundary() {
        let list = entries(&["a", "b"]);
        assert_eq!(move_focus(&list, Origin::Item(1), Direction::Next, true, false, None), None);
        assert_eq!(move_focus(&list, Origin::Item(0), Direction::Previous, true, false, None), None);
        assert_eq!(move_focus(&list, Origin::Item(1), Direction::Next, false, false, None), Some(0));
    }

    #[test]
    fn test_home_end_wrap_even_when_disabled() {
        let list = entries(&["a", "b", "c"]);
        assert_eq!(move_focus(&list, Origin::Nothing, Direction::Next, true, false, None), Some(0));
        assert_eq!(move_focus(&list, Origin::Nothing, Direction::Previous, true, false, None), Some(2));
    }

    #[test]
    fn test_home_skips_disabled_first() {
        let list = vec![Entry::new("a").disabled(), Entry::new("b"), Entry::new("c")];
        assert_eq!(move_focus(&list, Origin::Nothing, Direction::Next, true, false, None), Some(1));
        assert_eq!(move_focus(&list, Origin::Nothing, Direction::Next, true, true, None), Some(0));
    }

    #[test]
    fn test_all_skipped_terminates() {
        let list = vec![Entry::new("a").disabled(), Entry::new("b").unfocusable()];
        assert_eq!(move_focus(&list, Origin::Item(1), Direction::Next, false, false, None), None);
        assert_eq!(move_focus(&list, Origin::List, Direction::Previous, false, false, None), None);
        assert_eq!(move_focus(&[], Origin::List, Direction::Next, false, false, None), None);
    }

    #[test]
    fn test_list_origin_previous_without_wrap_lands_on_first() {
        let list = entries(&["a", "b", "c"]);
        assert_eq!(move_focus(&list, Origin::List, Direction::Previous, true, false, None), Some(0));
        assert_eq!(move_focus(&list, Origin::List, Direction::Previous, false, false, None), Some(2));
    }
}
