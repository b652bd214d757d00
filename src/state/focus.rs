//! Focus System - Keyboard navigation and focus state
//!
//! Manages focus state and navigation:
//! - `focused_index` signal (currently focused component)
//! - Focus cycling (Tab/Shift+Tab) in tab order
//! - Focus trapping for open menus
//! - Focus history for restoration when a menu closes
//! - Focus callbacks (onFocus/onBlur)
//!
//! A component can receive focus when it is rendered (it and every ancestor
//! visible) and carries a focus marker (a tab index). Only non-negative tab
//! indices of enabled components take part in Tab cycling; negative ones are
//! reachable programmatically, which is how menu items are focused.
//!
//! # Example
//!
//! ```ignore
//! use sui_tui::state::focus;
//!
//! focus::focus_next();
//! focus::focus(component_index);
//!
//! let cleanup = focus::register_callbacks(index, FocusCallbacks {
//!     on_focus: Some(Box::new(|| tracing::debug!("focused"))),
//!     on_blur: None,
//! });
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use spark_signals::{signal, Signal};

use crate::engine::arrays::{core, interaction};
use crate::engine::{get_id, get_root_indices};

// =============================================================================
// FOCUSED INDEX SIGNAL
// =============================================================================

thread_local! {
    static FOCUSED_INDEX: Signal<i32> = signal(-1);
}

/// Get the currently focused component index (-1 if none)
pub fn get_focused_index() -> i32 {
    FOCUSED_INDEX.with(|s| s.get())
}

/// The focused component, if any.
pub fn focused() -> Option<usize> {
    usize::try_from(get_focused_index()).ok()
}

/// Check if any component is focused
pub fn has_focus() -> bool {
    get_focused_index() >= 0
}

/// Check if specific component is focused
pub fn is_focused(index: usize) -> bool {
    get_focused_index() == index as i32
}

/// Check if focus is on `index` or one of its descendants.
pub fn contains_focus(index: usize) -> bool {
    focused().is_some_and(|f| core::is_within(f, index))
}

// =============================================================================
// FOCUS CALLBACKS
// =============================================================================

/// Callbacks fired when focus changes
#[derive(Default)]
pub struct FocusCallbacks {
    pub on_focus: Option<Box<dyn Fn()>>,
    pub on_blur: Option<Box<dyn Fn()>>,
}

thread_local! {
    // Several callbacks per index (component internals + user callback)
    static FOCUS_CALLBACK_REGISTRY: RefCell<HashMap<usize, Vec<(usize, FocusCallbacks)>>> = RefCell::new(HashMap::new());
    static NEXT_CALLBACK_ID: RefCell<usize> = const { RefCell::new(0) };
}

/// Register focus callbacks for a component.
/// Returns cleanup function to unregister.
pub fn register_callbacks(index: usize, callbacks: FocusCallbacks) -> impl FnOnce() {
    let callback_id = NEXT_CALLBACK_ID.with(|next| {
        let mut next = next.borrow_mut();
        *next += 1;
        *next
    });
    FOCUS_CALLBACK_REGISTRY.with(|reg| {
        reg.borrow_mut()
            .entry(index)
            .or_default()
            .push((callback_id, callbacks));
    });

    move || {
        FOCUS_CALLBACK_REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(list) = reg.get_mut(&index) {
                list.retain(|(id, _)| *id != callback_id);
                if list.is_empty() {
                    reg.remove(&index);
                }
            }
        });
    }
}

/// Run the callbacks of `index`. Callbacks are taken out of the registry
/// while they run so they may focus other components.
fn fire(index: usize, pick: impl Fn(&FocusCallbacks) -> Option<&Box<dyn Fn()>>) {
    let callbacks = FOCUS_CALLBACK_REGISTRY.with(|reg| reg.borrow_mut().remove(&index));
    let Some(callbacks) = callbacks else { return };

    for (_, cb) in &callbacks {
        if let Some(callback) = pick(cb) {
            callback();
        }
    }

    FOCUS_CALLBACK_REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let entry = reg.entry(index).or_default();
        // Registered while firing: keep them after the restored ones
        let added = std::mem::take(entry);
        *entry = callbacks;
        entry.extend(added);
    });
}

/// Internal: Set focus and fire callbacks at the source
fn set_focus_with_callbacks(new_index: i32) {
    let old_index = get_focused_index();

    // No change, no callbacks
    if old_index == new_index {
        return;
    }

    tracing::debug!(from = old_index, to = new_index, "focus moved");

    // Update reactive state first so blur handlers observe the new focus
    FOCUSED_INDEX.with(|s| s.set(new_index));

    if old_index >= 0 {
        fire(old_index as usize, |cb| cb.on_blur.as_ref());
    }
    if new_index >= 0 && get_focused_index() == new_index {
        fire(new_index as usize, |cb| cb.on_focus.as_ref());
    }
}

// =============================================================================
// FOCUS TRAP (for open menus)
// =============================================================================

thread_local! {
    static FOCUS_TRAP_STACK: RefCell<Vec<usize>> = RefCell::new(Vec::new());
}

/// Push a focus trap - Tab cycling stays within this component's subtree
pub fn push_focus_trap(container_index: usize) {
    FOCUS_TRAP_STACK.with(|stack| {
        stack.borrow_mut().push(container_index);
    });
}

/// Remove a specific trap wherever it sits in the stack.
pub fn remove_focus_trap(container_index: usize) {
    FOCUS_TRAP_STACK.with(|stack| stack.borrow_mut().retain(|&i| i != container_index));
}

/// Check if focus is currently trapped
pub fn is_focus_trapped() -> bool {
    FOCUS_TRAP_STACK.with(|stack| !stack.borrow().is_empty())
}

/// Get the current focus trap container
pub fn get_focus_trap_container() -> Option<usize> {
    FOCUS_TRAP_STACK.with(|stack| stack.borrow().last().copied())
}

// =============================================================================
// FOCUS HISTORY (for restoration)
// =============================================================================

#[derive(Clone)]
struct FocusHistoryEntry {
    index: usize,
    id: Option<String>,
}

thread_local! {
    static FOCUS_HISTORY: RefCell<Vec<FocusHistoryEntry>> = RefCell::new(Vec::new());
}

const MAX_HISTORY: usize = 10;

/// Save current focus to history
pub fn save_focus_to_history() {
    let Some(index) = focused() else { return };
    let id = get_id(index);
    FOCUS_HISTORY.with(|history| {
        let mut history = history.borrow_mut();
        history.push(FocusHistoryEntry { index, id });
        if history.len() > MAX_HISTORY {
            history.remove(0);
        }
    });
}

/// Restore focus from history
pub fn restore_focus_from_history() -> bool {
    loop {
        let entry = FOCUS_HISTORY.with(|history| history.borrow_mut().pop());

        match entry {
            None => return false,
            Some(entry) => {
                // Verify the index hasn't been recycled for a different component
                if get_id(entry.index) != entry.id {
                    continue;
                }
                if can_focus(entry.index) {
                    set_focus_with_callbacks(entry.index as i32);
                    return true;
                }
            }
        }
    }
}

// =============================================================================
// FOCUSABLE QUERIES
// =============================================================================

/// Rendered and carrying a focus marker.
pub fn can_focus(index: usize) -> bool {
    interaction::get_focusable(index) && core::is_rendered(index)
}

/// All allocated components in document order (depth-first, creation order).
pub fn document_order() -> Vec<usize> {
    fn walk(index: usize, out: &mut Vec<usize>) {
        out.push(index);
        for child in core::get_children(index) {
            walk(child, out);
        }
    }

    let mut out = Vec::new();
    for root in get_root_indices() {
        walk(root, &mut out);
    }
    out
}

/// Get all tabbable component indices in tab order.
///
/// Positive tab indices come first in ascending order, then tab index 0,
/// each group in document order. Disabled components and negative tab
/// indices are skipped. Inside a focus trap only the trap's subtree counts.
pub fn get_focusable_indices() -> Vec<usize> {
    let trap = get_focus_trap_container();

    let mut result: Vec<(i32, usize)> = document_order()
        .into_iter()
        .filter(|&i| can_focus(i) && !interaction::get_disabled(i))
        .filter(|&i| trap.is_none_or(|container| core::is_within(i, container)))
        .filter_map(|i| match interaction::get_tab_index(i) {
            Some(tab) if tab >= 0 => Some((tab, i)),
            _ => None,
        })
        .collect();

    // Stable: equal keys keep document order
    result.sort_by_key(|&(tab, _)| if tab == 0 { i32::MAX } else { tab });
    result.into_iter().map(|(_, i)| i).collect()
}

// =============================================================================
// FOCUS NAVIGATION
// =============================================================================

/// Find next tabbable component
fn find_next_focusable(from_index: i32, direction: i32) -> Option<usize> {
    let focusables = get_focusable_indices();
    if focusables.is_empty() {
        return None;
    }

    let current_pos = usize::try_from(from_index)
        .ok()
        .and_then(|from| focusables.iter().position(|&i| i == from));

    match current_pos {
        None => {
            // Not currently focused on a tabbable
            if direction == 1 {
                focusables.first().copied()
            } else {
                focusables.last().copied()
            }
        }
        Some(pos) => {
            // Move in direction with wrap
            let len = focusables.len() as i32;
            let next_pos = ((pos as i32 + direction) % len + len) % len;
            focusables.get(next_pos as usize).copied()
        }
    }
}

/// Move focus to next tabbable component
pub fn focus_next() -> bool {
    let current = get_focused_index();
    match find_next_focusable(current, 1) {
        Some(next) if next as i32 != current => {
            save_focus_to_history();
            set_focus_with_callbacks(next as i32);
            true
        }
        _ => false,
    }
}

/// Move focus to previous tabbable component
pub fn focus_previous() -> bool {
    let current = get_focused_index();
    match find_next_focusable(current, -1) {
        Some(prev) if prev as i32 != current => {
            save_focus_to_history();
            set_focus_with_callbacks(prev as i32);
            true
        }
        _ => false,
    }
}

/// Focus a specific component by index
pub fn focus(index: usize) -> bool {
    if !can_focus(index) {
        return false;
    }
    if !is_focused(index) {
        save_focus_to_history();
        set_focus_with_callbacks(index as i32);
    }
    true
}

/// Clear focus (no component focused)
pub fn blur() {
    if has_focus() {
        save_focus_to_history();
        set_focus_with_callbacks(-1);
    }
}

/// Focus the first tabbable component
pub fn focus_first() -> bool {
    get_focusable_indices().first().is_some_and(|&i| focus(i))
}

/// Focus the last tabbable component
pub fn focus_last() -> bool {
    get_focusable_indices().last().is_some_and(|&i| focus(i))
}

// =============================================================================
// CLEANUP
// =============================================================================

/// Drop focus state tied to a destroyed component.
pub fn cleanup_index(index: usize) {
    if is_focused(index) {
        FOCUSED_INDEX.with(|s| s.set(-1));
    }
    FOCUS_CALLBACK_REGISTRY.with(|reg| {
        reg.borrow_mut().remove(&index);
    });
    remove_focus_trap(index);
}

// =============================================================================
// RESET (for testing)
// =============================================================================

/// Reset all focus state (for testing)
pub fn reset_focus_state() {
    FOCUS_CALLBACK_REGISTRY.with(|reg| reg.borrow_mut().clear());
    FOCUSED_INDEX.with(|s| s.set(-1));
    FOCUS_TRAP_STACK.with(|stack| stack.borrow_mut().clear());
    FOCUS_HISTORY.with(|history| history.borrow_mut().clear());
}

// =============================================================================
// TESTS
// =============================================================================
