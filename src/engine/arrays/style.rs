//! Style Arrays
//!
//! Presentation data that ends up on the rendered node:
//! - classes: Composed class names (`SuiButton-root Sui-disabled ...`)
//! - attributes: Element attributes (`role`, `aria-*`, `data-*`)

use std::collections::BTreeMap;

use super::SlotArray;

/// Element attributes, ordered for stable markup.
pub type Attributes = BTreeMap<String, String>;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    static CLASSES: SlotArray<Vec<String>> = SlotArray::new(Vec::new());

    static ATTRIBUTES: SlotArray<Attributes> = SlotArray::new(BTreeMap::new());
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    CLASSES.with(|arr| arr.ensure_capacity(index));
    ATTRIBUTES.with(|arr| arr.ensure_capacity(index));
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    CLASSES.with(|arr| arr.clear(index));
    ATTRIBUTES.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    CLASSES.with(|arr| arr.clear_all());
    ATTRIBUTES.with(|arr| arr.clear_all());
}

// =============================================================================
// Classes
// =============================================================================

/// Get class names at index.
pub fn get_classes(index: usize) -> Vec<String> {
    CLASSES.with(|arr| arr.get(index))
}

/// Set class names at index.
pub fn set_classes(index: usize, classes: Vec<String>) {
    CLASSES.with(|arr| arr.set_value(index, classes));
}

/// Set class names from a getter function.
pub fn set_classes_getter<F>(index: usize, getter: F)
where
    F: Fn() -> Vec<String> + 'static,
{
    CLASSES.with(|arr| arr.set_getter(index, getter));
}

/// Whether the component currently carries `class`.
pub fn has_class(index: usize, class: &str) -> bool {
    get_classes(index).iter().any(|c| c == class)
}

// =============================================================================
// Attributes
// =============================================================================

/// Get all attributes at index.
pub fn get_attributes(index: usize) -> Attributes {
    ATTRIBUTES.with(|arr| arr.get(index))
}

/// Get one attribute at index.
pub fn get_attribute(index: usize, name: &str) -> Option<String> {
    get_attributes(index).get(name).cloned()
}

/// Set (or with `None`, remove) one static attribute.
pub fn set_attribute(index: usize, name: &str, value: Option<String>) {
    ATTRIBUTES.with(|arr| {
        arr.update(index, |attrs| match value {
            Some(value) => {
                attrs.insert(name.to_string(), value);
            }
            None => {
                attrs.remove(name);
            }
        })
    });
}

/// Set all attributes from a getter function.
pub fn set_attributes_getter<F>(index: usize, getter: F)
where
    F: Fn() -> Attributes + 'static,
{
    ATTRIBUTES.with(|arr| arr.set_getter(index, getter));
}
