//! Text Arrays
//!
//! Text-related properties:
//! - textContent: The text string to display
//! - textAttrs: Text attributes (bold, underline, etc.)

use super::SlotArray;
use crate::types::Attr;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Text content string.
    static TEXT_CONTENT: SlotArray<String> = SlotArray::new(String::new());

    /// Text attributes (bold, italic, etc.).
    static TEXT_ATTRS: SlotArray<Attr> = SlotArray::new(Attr::NONE);
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    TEXT_CONTENT.with(|arr| arr.ensure_capacity(index));
    TEXT_ATTRS.with(|arr| arr.ensure_capacity(index));
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    TEXT_CONTENT.with(|arr| arr.clear(index));
    TEXT_ATTRS.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    TEXT_CONTENT.with(|arr| arr.clear_all());
    TEXT_ATTRS.with(|arr| arr.clear_all());
}

// =============================================================================
// Text Content
// =============================================================================

/// Get text content at index.
pub fn get_text_content(index: usize) -> String {
    TEXT_CONTENT.with(|arr| arr.get(index))
}

/// Set text content at index.
pub fn set_text_content(index: usize, content: String) {
    TEXT_CONTENT.with(|arr| arr.set_value(index, content));
}

/// Set text content from a getter function.
pub fn set_text_content_getter<F>(index: usize, getter: F)
where
    F: Fn() -> String + 'static,
{
    TEXT_CONTENT.with(|arr| arr.set_getter(index, getter));
}

// =============================================================================
// Text Attributes
// =============================================================================

/// Get text attributes at index.
pub fn get_text_attrs(index: usize) -> Attr {
    TEXT_ATTRS.with(|arr| arr.get(index))
}

/// Set text attributes at index.
pub fn set_text_attrs(index: usize, attrs: Attr) {
    TEXT_ATTRS.with(|arr| arr.set_value(index, attrs));
}

/// Set text attributes from a getter function.
pub fn set_text_attrs_getter<F>(index: usize, getter: F)
where
    F: Fn() -> Attr + 'static,
{
    TEXT_ATTRS.with(|arr| arr.set_getter(index, getter));
}

// =============================================================================
// Subtree text
// =============================================================================

/// Text of `index` followed by the text of its rendered descendants.
///
/// This is what typeahead matches against, the terminal counterpart of an
/// element's inner text.
pub fn collect_text(index: usize) -> String {
    let mut out = get_text_content(index);
    for child in super::core::get_children(index) {
        if !super::core::get_visible(child) {
            continue;
        }
        out.push_str(&collect_text(child));
    }
    out
}
