//! Primitive types - Props and cleanup.
//!
//! These types define the interface for component props.
//! Props support static values, signals, and getters for reactivity.

use std::rc::Rc;

use spark_signals::Signal;

use crate::engine::arrays::style::Attributes;
use crate::state::keyboard::KeyboardEvent;
use crate::types::{Attr, ComponentType};

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by components.
///
/// Call this to unmount the component and release resources.
pub type Cleanup = Box<dyn FnOnce()>;

/// Children closure: runs once, inside the parent context.
pub type Children = Box<dyn FnOnce()>;

// =============================================================================
// Callback Types
// =============================================================================

/// Keyboard event callback.
///
/// Return true to indicate the event was consumed and should not
/// propagate to other handlers.
pub type KeyCallback = Rc<dyn Fn(&KeyboardEvent) -> bool>;

/// Activation callback (Enter/Space on a button, clicking an item).
pub type ClickCallback = Rc<dyn Fn()>;

/// Focus callback (called when component gains focus).
pub type FocusCallback = Rc<dyn Fn()>;

/// Blur callback (called when component loses focus).
pub type BlurCallback = Rc<dyn Fn()>;

/// Value change callback.
pub type ChangeCallback<T> = Rc<dyn Fn(&T)>;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// This enables reactive props while maintaining type safety.
/// When binding to arrays, the reactive connection is preserved.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Wrap a closure as a getter prop.
    pub fn getter(f: impl Fn() -> T + 'static) -> Self {
        PropValue::Getter(Rc::new(f))
    }

    /// Get the current value (for immediate reads).
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }

    /// Turn the prop into a shared getter, keeping the reactive source.
    pub fn into_getter(self) -> Rc<dyn Fn() -> T> {
        match self {
            PropValue::Static(v) => Rc::new(move || v.clone()),
            PropValue::Signal(s) => Rc::new(move || s.get()),
            PropValue::Getter(f) => f,
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<&str> for PropValue<String> {
    fn from(value: &str) -> Self {
        PropValue::Static(value.to_string())
    }
}

/// A bare tab index is a present focus marker.
impl From<i32> for PropValue<Option<i32>> {
    fn from(value: i32) -> Self {
        PropValue::Static(Some(value))
    }
}

/// Bind a PropValue to an engine array.
///
/// Static values are set directly; signals and getters stay connected
/// through the array's getter slot.
macro_rules! bind_prop {
    ($prop:expr, $set:path, $set_getter:path, $index:expr) => {
        match $prop {
            $crate::primitives::PropValue::Static(v) => $set($index, v),
            $crate::primitives::PropValue::Signal(s) => $set_getter($index, move || s.get()),
            $crate::primitives::PropValue::Getter(g) => $set_getter($index, move || g()),
        }
    };
}
pub(crate) use bind_prop;

// =============================================================================
// Box Props
// =============================================================================

/// Properties for the Box component.
///
/// Box is the fundamental container. Every component is a box with a
/// different kind, classes and attributes.
///
/// # Example
///
/// ```ignore
/// use sui_tui::primitives::{box_primitive, BoxProps};
///
/// let cleanup = box_primitive(BoxProps {
///     tab_index: Some(0.into()),
///     classes: Some(vec!["card".to_string()].into()),
///     children: Some(Box::new(|| {
///         // Child components here
///     })),
///     ..Default::default()
/// });
/// ```
#[derive(Default)]
pub struct BoxProps {
    /// Optional component ID for lookup.
    pub id: Option<String>,

    /// Component kind recorded in the engine (default: Box).
    pub component_type: Option<ComponentType>,

    /// Whether the component is visible (default: true).
    pub visible: Option<PropValue<bool>>,

    /// Class names.
    pub classes: Option<PropValue<Vec<String>>>,

    /// Element attributes (role, aria-*, ...).
    pub attributes: Option<PropValue<Attributes>>,

    /// Focus marker. `None` means not focusable.
    pub tab_index: Option<PropValue<Option<i32>>>,

    /// Whether the component rejects interaction.
    pub disabled: Option<PropValue<bool>>,

    /// Whether the component is the current choice.
    pub selected: Option<PropValue<bool>>,

    /// Focus the component once its children are mounted.
    pub auto_focus: bool,

    /// Keyboard callback (while this component or a descendant has focus).
    pub on_key: Option<KeyCallback>,

    /// Focus callback (fires when component gains focus).
    pub on_focus: Option<FocusCallback>,

    /// Blur callback (fires when component loses focus).
    pub on_blur: Option<BlurCallback>,

    /// Child components.
    pub children: Option<Children>,
}

// =============================================================================
// Text Props
// =============================================================================

/// Properties for the Text component.
///
/// # Example
///
/// ```ignore
/// use sui_tui::primitives::{text, TextProps};
/// use spark_signals::signal;
///
/// let message = signal("Hello".to_string());
/// text(TextProps {
///     content: message.clone().into(),
///     attrs: Some(Attr::BOLD.into()),
///     ..Default::default()
/// });
///
/// // Later: update text reactively
/// message.set("Updated!".to_string());
/// ```
pub struct TextProps {
    /// Optional component ID for lookup.
    pub id: Option<String>,

    /// The text content to display.
    pub content: PropValue<String>,

    /// Whether the component is visible (default: true).
    pub visible: Option<PropValue<bool>>,

    /// Text attributes (bold, italic, etc.).
    pub attrs: Option<PropValue<Attr>>,

    /// Class names.
    pub classes: Option<PropValue<Vec<String>>>,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            id: None,
            content: PropValue::Static(String::new()),
            visible: None,
            attrs: None,
            classes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    #[test]
    fn test_prop_value_sources() {
        let s = signal(3);
        let from_signal: PropValue<i32> = s.clone().into();
        let from_static: PropValue<i32> = 7.into();
        let from_getter = PropValue::getter(|| 11);

        assert_eq!(from_signal.get(), 3);
        s.set(4);
        assert_eq!(from_signal.get(), 4);
        assert_eq!(from_static.get(), 7);
        assert_eq!(from_getter.get(), 11);
    }

    #[test]
    fn test_into_getter_stays_live() {
        let s = signal("a".to_string());
        let getter = PropValue::from(s.clone()).into_getter();
        s.set("b".to_string());
        assert_eq!(getter(), "b");
    }

    #[test]
    fn test_tab_index_conversion() {
        let marker: PropValue<Option<i32>> = 0.into();
        assert_eq!(marker.get(), Some(0));
    }
}
