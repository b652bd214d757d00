//! Text Primitive - Display text with attributes.
//!
//! A pure display component for text content. Cannot have children.
//!
//! # Reactivity
//!
//! Content can be a static string, signal, or getter. When the content
//! source changes, the next render shows the new text.
//!
//! # Example
//!
//! ```ignore
//! use sui_tui::primitives::{text, PropValue, TextProps};
//! use spark_signals::signal;
//!
//! // Static text
//! text(TextProps {
//!     content: "Hello, World!".into(),
//!     ..Default::default()
//! });
//!
//! // Reactive text
//! let count = signal(0);
//! let count_clone = count.clone();
//! text(TextProps {
//!     content: PropValue::getter(move || format!("Count: {}", count_clone.get())),
//!     ..Default::default()
//! });
//! count.set(42);
//! ```

use crate::engine::allocate_index;
use crate::engine::arrays::{core, style, text as text_arrays};
use crate::types::ComponentType;

use super::box_primitive::{component_cleanup, register_state_cleanup};
use super::types::{bind_prop, Cleanup, PropValue, TextProps};

// =============================================================================
// Text Component
// =============================================================================

/// Create a text display component.
///
/// Returns a cleanup function that releases the component when called.
pub fn text(props: TextProps) -> Cleanup {
    let index = create_text(props);
    component_cleanup(index)
}

/// Create a text component and return its index.
pub(crate) fn create_text(props: TextProps) -> usize {
    let index = allocate_index(props.id.as_deref());

    core::set_component_type(index, ComponentType::Text);
    register_state_cleanup(index);

    bind_prop!(
        props.content,
        text_arrays::set_text_content,
        text_arrays::set_text_content_getter,
        index
    );

    if let Some(visible) = props.visible {
        bind_prop!(visible, core::set_visible, core::set_visible_getter, index);
    }
    if let Some(attrs) = props.attrs {
        bind_prop!(attrs, text_arrays::set_text_attrs, text_arrays::set_text_attrs_getter, index);
    }
    if let Some(classes) = props.classes {
        bind_prop!(classes, style::set_classes, style::set_classes_getter, index);
    }

    index
}

/// Shorthand for a static text child.
pub(crate) fn static_text(content: impl Into<String>) -> usize {
    create_text(TextProps {
        content: PropValue::Static(content.into()),
        ..Default::default()
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{is_allocated, reset_registry};
    use crate::types::Attr;
    use spark_signals::signal;

    fn setup() {
        reset_registry();
    }

    #[test]
    fn test_text_creation() {
        setup();

        let cleanup = text(TextProps {
            content: "Hello".into(),
            ..Default::default()
        });

        assert_eq!(core::get_component_type(0), ComponentType::Text);
        assert_eq!(text_arrays::get_text_content(0), "Hello");

        cleanup();
        assert!(!is_allocated(0));
    }

    #[test]
    fn test_text_reactive_content() {
        setup();

        let content = signal("one".to_string());
        let _cleanup = text(TextProps {
            content: PropValue::Signal(content.clone()),
            attrs: Some(Attr::BOLD.into()),
            ..Default::default()
        });

        assert_eq!(text_arrays::get_text_content(0), "one");
        content.set("two".to_string());
        assert_eq!(text_arrays::get_text_content(0), "two");
        assert_eq!(text_arrays::get_text_attrs(0), Attr::BOLD);
    }

    #[test]
    fn test_static_text_helper() {
        setup();

        let index = static_text("Label");
        assert_eq!(text_arrays::get_text_content(index), "Label");
    }
}
