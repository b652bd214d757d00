//! Box Primitive - Container component.
//!
//! The fundamental container component. Every component in the library is a
//! box with its own kind, classes and attributes: the box records them in the
//! engine arrays, wires focus and keyboard handlers, and runs its children
//! inside its parent context.
//!
//! # Reactivity
//!
//! Props are bound directly to array slots, preserving reactive connections.
//! When a signal changes, the next render reads the new value.
//!
//! # Example
//!
//! ```ignore
//! use sui_tui::primitives::{box_primitive, text, BoxProps, TextProps};
//!
//! let cleanup = box_primitive(BoxProps {
//!     tab_index: Some(0.into()),
//!     children: Some(Box::new(|| {
//!         text(TextProps {
//!             content: "Hello!".into(),
//!             ..Default::default()
//!         });
//!     })),
//!     ..Default::default()
//! });
//! ```

use crate::engine::arrays::{core, interaction, style};
use crate::engine::{allocate_index, on_destroy, release_index, with_parent};
use crate::state::{focus, keyboard};
use crate::types::ComponentType;

use super::types::{bind_prop, BoxProps, Cleanup};

// =============================================================================
// Box Component
// =============================================================================

/// Create a box container component.
///
/// Returns a cleanup function that releases the box and its subtree.
pub fn box_primitive(props: BoxProps) -> Cleanup {
    let index = create_box(props);
    component_cleanup(index)
}

/// Create a box and return its index.
///
/// Components build on this and then attach their own state.
pub(crate) fn create_box(props: BoxProps) -> usize {
    // 1. ALLOCATE INDEX (links to the current parent)
    let index = allocate_index(props.id.as_deref());

    // 2. CORE SETUP
    core::set_component_type(index, props.component_type.unwrap_or(ComponentType::Box));
    register_state_cleanup(index);

    // 3. BIND PROPS
    if let Some(visible) = props.visible {
        bind_prop!(visible, core::set_visible, core::set_visible_getter, index);
    }
    if let Some(classes) = props.classes {
        bind_prop!(classes, style::set_classes, style::set_classes_getter, index);
    }
    if let Some(attributes) = props.attributes {
        bind_prop!(attributes, set_attributes, style::set_attributes_getter, index);
    }
    if let Some(tab_index) = props.tab_index {
        bind_prop!(tab_index, interaction::set_tab_index, interaction::set_tab_index_getter, index);
    }
    if let Some(disabled) = props.disabled {
        bind_prop!(disabled, interaction::set_disabled, interaction::set_disabled_getter, index);
    }
    if let Some(selected) = props.selected {
        bind_prop!(selected, interaction::set_selected, interaction::set_selected_getter, index);
    }

    // 4. REGISTER HANDLERS (removed when the index is released)
    if let Some(on_key) = props.on_key {
        let cleanup = keyboard::on_focused(index, move |event| on_key(event));
        on_destroy(index, cleanup);
    }
    if props.on_focus.is_some() || props.on_blur.is_some() {
        let on_focus = props.on_focus;
        let on_blur = props.on_blur;
        let cleanup = focus::register_callbacks(
            index,
            focus::FocusCallbacks {
                on_focus: on_focus.map(|f| Box::new(move || f()) as Box<dyn Fn()>),
                on_blur: on_blur.map(|f| Box::new(move || f()) as Box<dyn Fn()>),
            },
        );
        on_destroy(index, cleanup);
    }

    // 5. RENDER CHILDREN
    if let Some(children) = props.children {
        with_parent(index, children);
    }

    // 6. AUTO FOCUS (children exist now)
    if props.auto_focus && !focus::focus(index) {
        tracing::debug!(index, "auto focus skipped: component cannot take focus");
    }

    index
}

fn set_attributes(index: usize, attributes: style::Attributes) {
    style::set_attributes_getter(index, move || attributes.clone());
}

/// Drop focus and keyboard state when `index` is released.
pub(crate) fn register_state_cleanup(index: usize) {
    on_destroy(index, move || {
        keyboard::cleanup_index(index);
        focus::cleanup_index(index);
    });
}

/// Cleanup that releases `index` and everything below it.
pub fn component_cleanup(index: usize) -> Cleanup {
    Box::new(move || release_index(index))
}

// =============================================================================
// Tests
// =============================================================================
