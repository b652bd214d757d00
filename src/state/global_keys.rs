//! Global Keys Module - Keyboard routing and global shortcuts
//!
//! Every key event goes through [`route_keyboard_event`]:
//! 1. The last-event signal is updated.
//! 2. The focused component and its ancestors get the event (bubbling).
//! 3. Key-specific handlers, then global handlers.
//!
//! Global handlers registered by [`setup_global_keys`]:
//! - Ctrl+C: Graceful shutdown
//! - Tab: Focus next component
//! - Shift+Tab: Focus previous component
//!
//! Because focused handlers run first, an open menu can claim Tab to close
//! itself before focus cycling happens.
//!
//! # Example
//!
//! ```ignore
//! use sui_tui::state::global_keys;
//! use std::sync::Arc;
//! use std::sync::atomic::AtomicBool;
//!
//! let running = Arc::new(AtomicBool::new(true));
//! let handle = global_keys::setup_global_keys(running.clone());
//!
//! // Later, on cleanup:
//! handle.cleanup();
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::focus;
use super::keyboard::{self, KeyboardEvent};

// =============================================================================
// ROUTING
// =============================================================================

/// Route a keyboard event through the priority chain.
/// Returns true if a handler consumed it.
pub fn route_keyboard_event(event: KeyboardEvent) -> bool {
    if !event.is_press() {
        return false;
    }

    if keyboard::dispatch_focused(focus::get_focused_index(), &event) {
        return true;
    }

    keyboard::dispatch_to_handlers(&event)
}

// =============================================================================
// GLOBAL KEYS HANDLE
// =============================================================================

/// Cleanup handle for global key handlers
pub struct GlobalKeysHandle {
    cleanups: Vec<Box<dyn FnOnce()>>,
}

impl GlobalKeysHandle {
    /// Clean up all global key handlers
    pub fn cleanup(self) {
        for cleanup in self.cleanups {
            cleanup();
        }
    }
}

// =============================================================================
// SETUP FUNCTIONS
// =============================================================================

/// Set up global key handlers.
/// Returns a handle for cleanup.
///
/// # Arguments
/// * `running` - Atomic bool to set to false on Ctrl+C
pub fn setup_global_keys(running: Arc<AtomicBool>) -> GlobalKeysHandle {
    // Ctrl+C - Graceful shutdown
    let ctrl_c_cleanup = keyboard::on(move |event| {
        if event.modifiers.ctrl && event.key == "c" {
            running.store(false, Ordering::SeqCst);
            true
        } else {
            false
        }
    });

    // Tab / Shift+Tab - cycle focus
    let tab_cleanup = keyboard::on(move |event| {
        if event.key != "Tab" {
            return false;
        }
        if event.modifiers.shift {
            focus::focus_previous();
        } else {
            focus::focus_next();
        }
        true
    });

    GlobalKeysHandle {
        cleanups: vec![Box::new(ctrl_c_cleanup), Box::new(tab_cleanup)],
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reset_registry;
    use crate::primitives::{box_primitive, BoxProps};
    use crate::state::focus::reset_focus_state;
    use crate::state::keyboard::{reset_keyboard_state, KeyState, Modifiers};
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_registry();
        reset_focus_state();
        reset_keyboard_state();
    }

    fn tabbable() -> BoxProps {
        BoxProps {
            tab_index: Some(0.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_ctrl_c_sets_running_false() {
        setup();

        let running = Arc::new(AtomicBool::new(true));
        let handle = setup_global_keys(running.clone());

        route_keyboard_event(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()));
        assert!(!running.load(Ordering::SeqCst));

        handle.cleanup();
    }

    #[test]
    fn test_regular_c_does_not_stop() {
        setup();

        let running = Arc::new(AtomicBool::new(true));
        let handle = setup_global_keys(running.clone());

        route_keyboard_event(KeyboardEvent::new("c"));
        assert!(running.load(Ordering::SeqCst));

        handle.cleanup();
    }

    #[test]
    fn test_cleanup_removes_handlers() {
        setup();

        let running = Arc::new(AtomicBool::new(true));
        setup_global_keys(running.clone()).cleanup();

        route_keyboard_event(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()));
        assert!(running.load(Ordering::SeqCst));
    }

    #[test]
    fn test_tab_and_shift_tab() {
        setup();

        let _c1 = box_primitive(tabbable());
        let _c2 = box_primitive(tabbable());
        focus::focus(0);

        let handle = setup_global_keys(Arc::new(AtomicBool::new(true)));

        route_keyboard_event(KeyboardEvent::new("Tab"));
        assert_eq!(focus::get_focused_index(), 1);

        route_keyboard_event(KeyboardEvent::with_modifiers("Tab", Modifiers::shift()));
        assert_eq!(focus::get_focused_index(), 0);

        handle.cleanup();
    }

    #[test]
    fn test_focused_handler_runs_before_globals() {
        setup();

        let _c1 = box_primitive(tabbable());
        let _c2 = box_primitive(tabbable());
        focus::focus(0);

        let claimed = Rc::new(Cell::new(0));
        let claimed_clone = claimed.clone();
        let _tab_claim = keyboard::on_focused(0, move |event| {
            claimed_clone.set(claimed_clone.get() + 1);
            event.key == "Tab"
        });
        let handle = setup_global_keys(Arc::new(AtomicBool::new(true)));

        assert!(route_keyboard_event(KeyboardEvent::new("Tab")));
        assert_eq!(claimed.get(), 1);
        // Consumed before the Tab cycler ran
        assert_eq!(focus::get_focused_index(), 0);

        handle.cleanup();
    }

    #[test]
    fn test_release_not_routed() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let _c = keyboard::on(move |_| {
            count_clone.set(count_clone.get() + 1);
            true
        });

        let release = KeyboardEvent {
            state: KeyState::Release,
            ..KeyboardEvent::new("a")
        };
        assert!(!route_keyboard_event(release));
        assert_eq!(count.get(), 0);
    }
}
