//! Components - Styled UI primitives.
//!
//! Every component follows the engine pattern: allocate an index, record
//! its kind and parent, bind props, run children inside its parent context,
//! and return a [`Cleanup`](crate::primitives::Cleanup).
//!
//! Components never introspect their children. Containers that need to know
//! about their children (menu lists, tabs) keep a registry keyed by their
//! index, and children register themselves at construction by looking up the
//! nearest enclosing container.

use std::rc::Rc;

use crate::engine::arrays::{core, style};
use crate::engine::{get_current_parent_index, on_destroy};
use crate::form_control::Flag;
use crate::primitives::PropValue;
use crate::state::keyboard::{self, KeyboardEvent};
use crate::state::focus;
use crate::styles::ClassNames;

pub mod button;
pub mod button_base;
pub mod form_control;
pub mod form_control_label;
pub mod form_label;
pub mod input;
pub mod list;
pub mod menu;
pub mod menu_item;
pub mod menu_list;
pub mod select;
pub mod switch_base;
pub mod tabs;
pub mod text_field;

pub use button::{button, ButtonProps};
pub use button_base::{button_base, ButtonBaseProps};
pub use form_control::{form_control, form_group, FormControlProps, FormGroupProps};
pub use form_control_label::{form_control_label, FormControlLabelProps, LabelPlacement};
pub use form_label::{
    form_helper_text, form_label, input_label, FormHelperTextProps, FormLabelProps, InputLabelProps,
};
pub use input::{input, input_base, InputProps, InputState, InputType};
pub use list::{list, list_item, ListItemProps, ListProps};
pub use menu::{menu, CloseCallback, CloseReason, MenuProps};
pub use menu_item::{menu_item, MenuItemProps};
pub use menu_list::{menu_list, ItemHook, ItemSettings, MenuListProps, MenuListVariant, ValuePredicate};
pub use select::{select, SelectProps};
pub use switch_base::{checkbox, switch_base, CheckboxProps, SwitchBaseProps};
pub use tabs::{button_tab, button_tabs, ButtonTabProps, ButtonTabsProps, TabChange, TabsVariant};
pub use text_field::{text_field, TextFieldProps};

/// Clear the container registries of menu lists and tabs (for testing).
pub fn reset_component_registries() {
    menu_list::reset_menu_lists();
    tabs::reset_tabs();
}

// =============================================================================
// Shared helpers
// =============================================================================

/// Getter for an optional boolean prop (absent = false).
pub(crate) fn flag(prop: Option<PropValue<bool>>) -> Flag {
    prop.map(PropValue::into_getter).unwrap_or_else(|| Rc::new(|| false))
}

/// Getter for an optional boolean prop, `None` when absent.
pub(crate) fn optional_flag(prop: Option<PropValue<bool>>) -> Rc<dyn Fn() -> Option<bool>> {
    match prop.map(PropValue::into_getter) {
        Some(getter) => Rc::new(move || Some(getter())),
        None => Rc::new(|| None),
    }
}

/// Bind a reactive class list to `index`.
pub(crate) fn bind_class_names(index: usize, classes: impl Fn() -> ClassNames + 'static) {
    style::set_classes_getter(index, move || classes().build());
}

/// Bind reactive attributes to `index`.
pub(crate) fn bind_attributes(index: usize, fill: impl Fn(&mut style::Attributes) + 'static) {
    style::set_attributes_getter(index, move || {
        let mut attributes = style::Attributes::new();
        fill(&mut attributes);
        attributes
    });
}

/// Insert `name` when `value` is set.
pub(crate) fn insert_attr(attributes: &mut style::Attributes, name: &str, value: Option<impl Into<String>>) {
    if let Some(value) = value {
        attributes.insert(name.to_string(), value.into());
    }
}

/// Keyboard handler on `index`, removed when the component is released.
pub(crate) fn on_key_at(index: usize, handler: impl Fn(&KeyboardEvent) -> bool + 'static) {
    let cleanup = keyboard::on_focused(index, handler);
    on_destroy(index, cleanup);
}

/// Focus callbacks on `index`, removed when the component is released.
pub(crate) fn on_focus_change(index: usize, on_focus: impl Fn() + 'static, on_blur: impl Fn() + 'static) {
    let cleanup = focus::register_callbacks(
        index,
        focus::FocusCallbacks {
            on_focus: Some(Box::new(on_focus)),
            on_blur: Some(Box::new(on_blur)),
        },
    );
    on_destroy(index, cleanup);
}

/// Nearest enclosing component (starting at the current parent) accepted by
/// `is_container`.
pub(crate) fn enclosing(is_container: impl Fn(usize) -> bool) -> Option<usize> {
    let parent = get_current_parent_index()?;
    core::ancestors(parent).into_iter().find(|&index| is_container(index))
}
