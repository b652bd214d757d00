//! Core Arrays
//!
//! Essential component properties:
//! - componentType: What kind of component (button, list, input, etc.)
//! - parentIndex: Parent component index (None for root)
//! - visible: Whether component is rendered
//!
//! The ordered child list of every parent is kept next to the parent column
//! so traversal does not depend on index allocation order.

use std::cell::RefCell;
use std::collections::HashMap;

use super::SlotArray;
use crate::types::ComponentType;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    static COMPONENT_TYPE: SlotArray<ComponentType> = SlotArray::new(ComponentType::None);

    static PARENT_INDEX: SlotArray<Option<usize>> = SlotArray::new(None);

    static VISIBLE: SlotArray<bool> = SlotArray::new(true);

    /// Children of each parent in creation order.
    static CHILDREN: RefCell<HashMap<usize, Vec<usize>>> = RefCell::new(HashMap::new());
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    COMPONENT_TYPE.with(|arr| arr.ensure_capacity(index));
    PARENT_INDEX.with(|arr| arr.ensure_capacity(index));
    VISIBLE.with(|arr| arr.ensure_capacity(index));
}

/// Clear values at index. Also unlinks the index from its parent.
pub fn clear_at_index(index: usize) {
    if let Some(parent) = get_parent_index(index) {
        CHILDREN.with(|map| {
            if let Some(children) = map.borrow_mut().get_mut(&parent) {
                children.retain(|&child| child != index);
            }
        });
    }
    CHILDREN.with(|map| {
        map.borrow_mut().remove(&index);
    });
    COMPONENT_TYPE.with(|arr| arr.clear(index));
    PARENT_INDEX.with(|arr| arr.clear(index));
    VISIBLE.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    COMPONENT_TYPE.with(|arr| arr.clear_all());
    PARENT_INDEX.with(|arr| arr.clear_all());
    VISIBLE.with(|arr| arr.clear_all());
    CHILDREN.with(|map| map.borrow_mut().clear());
}

// =============================================================================
// Component Type
// =============================================================================

/// Get component type at index.
pub fn get_component_type(index: usize) -> ComponentType {
    COMPONENT_TYPE.with(|arr| arr.get(index))
}

/// Set component type at index.
pub fn set_component_type(index: usize, component_type: ComponentType) {
    COMPONENT_TYPE.with(|arr| arr.set_value(index, component_type));
}

// =============================================================================
// Parent Index
// =============================================================================

/// Get parent index at index.
pub fn get_parent_index(index: usize) -> Option<usize> {
    PARENT_INDEX.with(|arr| arr.get(index))
}

/// Set parent index at index and append to the parent's child list.
pub fn set_parent_index(index: usize, parent: Option<usize>) {
    if let Some(old) = get_parent_index(index) {
        CHILDREN.with(|map| {
            if let Some(children) = map.borrow_mut().get_mut(&old) {
                children.retain(|&child| child != index);
            }
        });
    }
    PARENT_INDEX.with(|arr| arr.set_value(index, parent));
    if let Some(parent) = parent {
        CHILDREN.with(|map| {
            map.borrow_mut().entry(parent).or_default().push(index);
        });
    }
}

/// Children of `index` in creation order.
pub fn get_children(index: usize) -> Vec<usize> {
    CHILDREN.with(|map| map.borrow().get(&index).cloned().unwrap_or_default())
}

/// Walk up from `index` (inclusive) to the root.
pub fn ancestors(index: usize) -> Vec<usize> {
    let mut chain = vec![index];
    let mut current = index;
    while let Some(parent) = get_parent_index(current) {
        if chain.contains(&parent) {
            break;
        }
        chain.push(parent);
        current = parent;
    }
    chain
}

/// Whether `ancestor` is `index` or one of its ancestors.
pub fn is_within(index: usize, ancestor: usize) -> bool {
    ancestors(index).contains(&ancestor)
}

// =============================================================================
// Visible
// =============================================================================

/// Get visibility at index.
pub fn get_visible(index: usize) -> bool {
    VISIBLE.with(|arr| arr.get(index))
}

/// Set visibility at index.
pub fn set_visible(index: usize, visible: bool) {
    VISIBLE.with(|arr| arr.set_value(index, visible));
}

/// Set visibility from a getter function.
pub fn set_visible_getter<F>(index: usize, getter: F)
where
    F: Fn() -> bool + 'static,
{
    VISIBLE.with(|arr| arr.set_getter(index, getter));
}

/// Visible and every ancestor visible.
pub fn is_rendered(index: usize) -> bool {
    ancestors(index).into_iter().all(get_visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset();
    }

    #[test]
    fn test_component_type() {
        setup();

        assert_eq!(get_component_type(0), ComponentType::None);
        set_component_type(0, ComponentType::Button);
        assert_eq!(get_component_type(0), ComponentType::Button);
    }

    #[test]
    fn test_parent_and_children() {
        setup();

        set_parent_index(1, Some(0));
        set_parent_index(2, Some(0));
        set_parent_index(3, Some(2));

        assert_eq!(get_children(0), vec![1, 2]);
        assert_eq!(ancestors(3), vec![3, 2, 0]);
        assert!(is_within(3, 0));
        assert!(!is_within(1, 2));

        clear_at_index(1);
        assert_eq!(get_children(0), vec![2]);
    }

    #[test]
    fn test_rendered_follows_ancestors() {
        setup();

        set_parent_index(1, Some(0));
        assert!(is_rendered(1));

        set_visible(0, false);
        assert!(get_visible(1));
        assert!(!is_rendered(1));
    }
}
