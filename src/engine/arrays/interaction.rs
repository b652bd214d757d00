//! Interaction Arrays
//!
//! User interaction state:
//! - tabIndex: Focus marker and tab order. `None` = not focusable,
//!   negative = focusable programmatically but skipped by Tab.
//! - disabled: Component rejects interaction
//! - selected: Highlighted as the current choice (menu items, tabs)

use super::SlotArray;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    static TAB_INDEX: SlotArray<Option<i32>> = SlotArray::new(None);

    static DISABLED: SlotArray<bool> = SlotArray::new(false);

    static SELECTED: SlotArray<bool> = SlotArray::new(false);
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    TAB_INDEX.with(|arr| arr.ensure_capacity(index));
    DISABLED.with(|arr| arr.ensure_capacity(index));
    SELECTED.with(|arr| arr.ensure_capacity(index));
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    TAB_INDEX.with(|arr| arr.clear(index));
    DISABLED.with(|arr| arr.clear(index));
    SELECTED.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    TAB_INDEX.with(|arr| arr.clear_all());
    DISABLED.with(|arr| arr.clear_all());
    SELECTED.with(|arr| arr.clear_all());
}

// =============================================================================
// Tab Index
// =============================================================================

/// Get tab index at index.
pub fn get_tab_index(index: usize) -> Option<i32> {
    TAB_INDEX.with(|arr| arr.get(index))
}

/// Set tab index at index.
pub fn set_tab_index(index: usize, tab_index: Option<i32>) {
    TAB_INDEX.with(|arr| arr.set_value(index, tab_index));
}

/// Set tab index from a getter function.
pub fn set_tab_index_getter<F>(index: usize, getter: F)
where
    F: Fn() -> Option<i32> + 'static,
{
    TAB_INDEX.with(|arr| arr.set_getter(index, getter));
}

/// Has a focus marker (any tab index).
pub fn get_focusable(index: usize) -> bool {
    get_tab_index(index).is_some()
}

// =============================================================================
// Disabled
// =============================================================================

/// Get disabled at index.
pub fn get_disabled(index: usize) -> bool {
    DISABLED.with(|arr| arr.get(index))
}

/// Set disabled at index.
pub fn set_disabled(index: usize, disabled: bool) {
    DISABLED.with(|arr| arr.set_value(index, disabled));
}

/// Set disabled from a getter function.
pub fn set_disabled_getter<F>(index: usize, getter: F)
where
    F: Fn() -> bool + 'static,
{
    DISABLED.with(|arr| arr.set_getter(index, getter));
}

// =============================================================================
// Selected
// =============================================================================

/// Get selected at index.
pub fn get_selected(index: usize) -> bool {
    SELECTED.with(|arr| arr.get(index))
}

/// Set selected at index.
pub fn set_selected(index: usize, selected: bool) {
    SELECTED.with(|arr| arr.set_value(index, selected));
}

/// Set selected from a getter function.
pub fn set_selected_getter<F>(index: usize, getter: F)
where
    F: Fn() -> bool + 'static,
{
    SELECTED.with(|arr| arr.set_getter(index, getter));
}
