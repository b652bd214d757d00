//! Parallel Arrays
//!
//! All component state lives in these parallel arrays.
//! Each array index corresponds to one component.
//!
//! Each cell is either a static value or a getter. Getters are evaluated on
//! every read, so a cell bound to a signal-reading closure stays live without
//! the component having to push updates.
//!
//! Every write bumps the revision signal; the render pipeline depends on it.
//!
//! # Array Categories
//!
//! - **core**: Component type, parent, visibility
//! - **text**: Text content and attributes
//! - **interaction**: Tab index, disabled, selected
//! - **style**: Class names and element attributes

pub mod core;
pub mod interaction;
pub mod style;
pub mod text;

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use self::core as core_arrays;
use self::interaction as interaction_arrays;
use self::style as style_arrays;
use self::text as text_arrays;

// =============================================================================
// Revision
// =============================================================================

thread_local! {
    static REVISION: Signal<u64> = signal(0);
}

/// Current array revision (reactive).
pub fn revision() -> u64 {
    REVISION.with(|s| s.get())
}

/// Mark the arrays as changed.
pub fn bump_revision() {
    REVISION.with(|s| s.set(s.get().wrapping_add(1)));
}

// =============================================================================
// SlotArray
// =============================================================================

enum Slot<T> {
    Value(T),
    Getter(Rc<dyn Fn() -> T>),
}

/// A growable column of cells with a default value.
pub struct SlotArray<T: Clone + 'static> {
    default: T,
    cells: RefCell<Vec<Slot<T>>>,
}

impl<T: Clone + 'static> SlotArray<T> {
    pub fn new(default: T) -> Self {
        Self {
            default,
            cells: RefCell::new(Vec::new()),
        }
    }

    /// Grow the column so `index` is addressable.
    pub fn ensure_capacity(&self, index: usize) {
        let mut cells = self.cells.borrow_mut();
        while cells.len() <= index {
            cells.push(Slot::Value(self.default.clone()));
        }
    }

    /// Read the cell (evaluates getters).
    pub fn get(&self, index: usize) -> T {
        let getter = {
            let cells = self.cells.borrow();
            match cells.get(index) {
                None => return self.default.clone(),
                Some(Slot::Value(v)) => return v.clone(),
                Some(Slot::Getter(g)) => g.clone(),
            }
        };
        // Borrow released: the getter may read other cells of this array.
        getter()
    }

    pub fn set_value(&self, index: usize, value: T) {
        self.ensure_capacity(index);
        self.cells.borrow_mut()[index] = Slot::Value(value);
        bump_revision();
    }

    pub fn set_getter<F>(&self, index: usize, getter: F)
    where
        F: Fn() -> T + 'static,
    {
        self.ensure_capacity(index);
        self.cells.borrow_mut()[index] = Slot::Getter(Rc::new(getter));
        bump_revision();
    }

    /// Update a static cell in place. Getter cells are replaced by the result.
    pub fn update(&self, index: usize, f: impl FnOnce(&mut T)) {
        let mut value = self.get(index);
        f(&mut value);
        self.set_value(index, value);
    }

    pub fn clear(&self, index: usize) {
        let mut cells = self.cells.borrow_mut();
        if let Some(cell) = cells.get_mut(index) {
            *cell = Slot::Value(self.default.clone());
        }
    }

    pub fn clear_all(&self) {
        self.cells.borrow_mut().clear();
    }
}

// =============================================================================
// Whole-array operations
// =============================================================================

/// Ensure all arrays have capacity for the given index.
///
/// Called by registry when allocating.
pub fn ensure_all_capacity(index: usize) {
    core_arrays::ensure_capacity(index);
    text_arrays::ensure_capacity(index);
    interaction_arrays::ensure_capacity(index);
    style_arrays::ensure_capacity(index);
}

/// Clear all array values at an index.
///
/// Called by registry when releasing.
pub fn clear_all_at_index(index: usize) {
    core_arrays::clear_at_index(index);
    text_arrays::clear_at_index(index);
    interaction_arrays::clear_at_index(index);
    style_arrays::clear_at_index(index);
    bump_revision();
}

/// Reset all parallel arrays to release memory.
///
/// Called automatically when all components are destroyed.
pub fn reset_all_arrays() {
    core_arrays::reset();
    text_arrays::reset();
    interaction_arrays::reset();
    style_arrays::reset();
    bump_revision();
}
