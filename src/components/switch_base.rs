//! SwitchBase and Checkbox.
//!
//! A switch is a button whose `checked` state is either controlled (the
//! `checked` prop) or kept internally (seeded by `default_checked`). Space
//! toggles it and fires `on_change` with the new state. Disabled defaults to
//! the form control's disabled state.

use std::rc::Rc;

use spark_signals::signal;

use crate::form_control::FormControlHandle;
use crate::primitives::{component_cleanup, create_text, BlurCallback, Cleanup, FocusCallback, KeyCallback, PropValue, TextProps};
use crate::state::keyboard::KeyboardEvent;
use crate::styles::{self, capitalize, ClassNames, Classes};
use crate::types::{ColorRole, ComponentType};

use super::button_base::{create_button_base, ButtonBaseProps};
use super::{bind_attributes, insert_attr};

/// Properties for [`switch_base`].
#[derive(Default)]
pub struct SwitchBaseProps {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub classes: Classes,
    /// Controlled state.
    pub checked: Option<PropValue<bool>>,
    pub default_checked: bool,
    /// `None` defers to the form control.
    pub disabled: Option<bool>,
    pub read_only: bool,
    pub required: bool,
    pub auto_focus: bool,
    pub name: Option<String>,
    pub value: Option<String>,
    /// Icon shown while unchecked (default `[ ]`).
    pub icon: Option<String>,
    /// Icon shown while checked (default `[x]`).
    pub checked_icon: Option<String>,
    pub form_control: Option<FormControlHandle>,
    pub on_change: Option<Rc<dyn Fn(bool)>>,
    pub on_focus: Option<FocusCallback>,
    pub on_blur: Option<BlurCallback>,
}

/// Create a switch base and return its index. `extra` adds classes of the
/// wrapping component; `role` and `mixed` come from it too.
pub(crate) fn create_switch_base(
    props: SwitchBaseProps,
    role: &str,
    extra: Option<Rc<dyn Fn(bool) -> ClassNames>>,
    mixed: bool,
) -> usize {
    let internal = signal(props.default_checked);
    let controlled = props.checked.is_some();
    let checked: Rc<dyn Fn() -> bool> = match props.checked {
        Some(checked) => checked.into_getter(),
        None => {
            let internal = internal.clone();
            Rc::new(move || internal.get())
        }
    };

    let control = props.form_control;
    let explicit_disabled = props.disabled;
    let control_for_disabled = control.clone();
    let disabled: Rc<dyn Fn() -> bool> = Rc::new(move || {
        explicit_disabled.unwrap_or_else(|| control_for_disabled.as_ref().is_some_and(FormControlHandle::disabled))
    });

    let icon = props.icon.unwrap_or_else(|| "[ ]".to_string());
    let checked_icon = props.checked_icon.unwrap_or_else(|| "[x]".to_string());
    let checked_for_icon = checked.clone();

    let overrides = props.classes;
    let checked_for_classes = checked.clone();
    let extra_classes: Rc<dyn Fn() -> ClassNames> = Rc::new(move || {
        let is_checked = checked_for_classes();
        let names = ClassNames::new()
            .slot(&overrides, "SwitchBase", "root")
            .slot_if(is_checked, &overrides, "SwitchBase", "checked")
            .add_if(is_checked, styles::CHECKED);
        match &extra {
            Some(extra) => names.add(extra(is_checked).to_string()),
            None => names,
        }
    });

    // Toggle
    let read_only = props.read_only;
    let on_change = props.on_change;
    let checked_for_toggle = checked.clone();
    let disabled_for_toggle = disabled.clone();
    let on_key: KeyCallback = Rc::new(move |event: &KeyboardEvent| {
        if event.key != " " || disabled_for_toggle() {
            return false;
        }
        if !read_only {
            let next = !checked_for_toggle();
            if !controlled {
                internal.set(next);
            }
            if let Some(on_change) = &on_change {
                on_change(next);
            }
        }
        true
    });

    // Focus is reported to the form control
    let (user_focus, user_blur) = (props.on_focus, props.on_blur);
    let control_for_focus = control.clone();
    let on_focus: FocusCallback = Rc::new(move || {
        if let Some(on_focus) = &user_focus {
            on_focus();
        }
        if let Some(control) = &control_for_focus {
            control.on_focus();
        }
    });
    let on_blur: BlurCallback = Rc::new(move || {
        if let Some(on_blur) = &user_blur {
            on_blur();
        }
        if let Some(control) = &control {
            control.on_blur();
        }
    });

    let disabled_prop = PropValue::getter({
        let disabled = disabled.clone();
        move || disabled()
    });
    let index = create_button_base(ButtonBaseProps {
        id: props.id,
        class_name: props.class_name,
        extra_classes: Some(extra_classes),
        component_type: Some(ComponentType::Checkbox),
        disabled: Some(disabled_prop),
        auto_focus: props.auto_focus,
        on_key: Some(on_key),
        on_focus: Some(on_focus),
        on_blur: Some(on_blur),
        children: Some(Box::new(move || {
            create_text(TextProps {
                content: PropValue::getter(move || {
                    if mixed {
                        "[-]".to_string()
                    } else if checked_for_icon() {
                        checked_icon.clone()
                    } else {
                        icon.clone()
                    }
                }),
                ..Default::default()
            });
        })),
        ..Default::default()
    });

    let role = role.to_string();
    let (name, value, required) = (props.name, props.value, props.required);
    bind_attributes(index, move |attrs| {
        attrs.insert("role".into(), role.clone());
        let aria_checked = if mixed { "mixed".to_string() } else { checked().to_string() };
        attrs.insert("aria-checked".into(), aria_checked);
        insert_attr(attrs, "name", name.clone());
        insert_attr(attrs, "value", value.clone());
        if required {
            attrs.insert("required".into(), String::new());
        }
        if disabled() {
            attrs.insert("disabled".into(), String::new());
        }
    });

    index
}

/// Create a switch base.
pub fn switch_base(props: SwitchBaseProps) -> Cleanup {
    component_cleanup(create_switch_base(props, "checkbox", None, false))
}

// =============================================================================
// Checkbox
// =============================================================================

/// Properties for [`checkbox`].
#[derive(Default)]
pub struct CheckboxProps {
    pub base: SwitchBaseProps,
    /// Checked color (default: secondary).
    pub color: Option<ColorRole>,
    /// Show the mixed state regardless of `checked`.
    pub indeterminate: bool,
}

/// Create a checkbox and return its index.
pub(crate) fn create_checkbox(props: CheckboxProps) -> usize {
    let color = props.color.unwrap_or(ColorRole::Secondary);
    let overrides = props.base.classes.clone();
    let indeterminate = props.indeterminate;
    let extra: Rc<dyn Fn(bool) -> ClassNames> = Rc::new(move |_checked| {
        ClassNames::new()
            .slot(&overrides, "Checkbox", "root")
            .slot_if(indeterminate, &overrides, "Checkbox", "indeterminate")
            .slot_if(
                color != ColorRole::Default,
                &overrides,
                "Checkbox",
                &format!("color{}", capitalize(color.as_str())),
            )
    });
    create_switch_base(props.base, "checkbox", Some(extra), indeterminate)
}

/// Create a checkbox.
pub fn checkbox(props: CheckboxProps) -> Cleanup {
    component_cleanup(create_checkbox(props))
}
