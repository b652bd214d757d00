//! InputBase and Input - single-line text fields.
//!
//! The root `div` carries the state classes; the focusable `input` child
//! holds the text. Editing keys:
//!
//! - printable characters insert at the cursor
//! - Backspace / Delete remove around the cursor
//! - ArrowLeft / ArrowRight / Home / End move the cursor
//! - Enter fires `on_submit`
//!
//! A controlled input (`value` set) only changes when its owner writes the
//! new value back; an uncontrolled one keeps its own text.

use std::rc::Rc;

use spark_signals::{effect, signal, Signal};

use crate::engine::arrays::{interaction, text as text_arrays};
use crate::engine::on_destroy;
use crate::error::{Result, SuiError};
use crate::form_control::{form_control_state, is_filled, FieldValue, FormControlHandle, FormControlState, StateProps};
use crate::primitives::{
    component_cleanup, create_box, BlurCallback, BoxProps, ChangeCallback, Cleanup, FocusCallback,
    KeyCallback, PropValue,
};
use crate::state::focus;
use crate::state::keyboard::KeyboardEvent;
use crate::styles::{self, ClassNames, Classes};
use crate::types::{ComponentType, Size};

use super::{bind_attributes, bind_class_names, insert_attr, on_focus_change, on_key_at};

/// Kind of text the input holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    /// Rendered masked.
    Password,
}

const MASK: char = '•';

// =============================================================================
// InputState
// =============================================================================

struct Inner {
    controlled: Option<Rc<dyn Fn() -> String>>,
    internal: Signal<String>,
    cursor: Signal<usize>,
    focused: Signal<bool>,
    filled: Signal<bool>,
    form_control: Option<FormControlHandle>,
    on_change: Option<ChangeCallback<String>>,
}

/// Value, cursor and change handling of a mounted input.
#[derive(Clone)]
pub struct InputState(Rc<Inner>);

impl InputState {
    fn new(
        controlled: Option<Rc<dyn Fn() -> String>>,
        default_value: String,
        form_control: Option<FormControlHandle>,
        on_change: Option<ChangeCallback<String>>,
    ) -> Self {
        Self(Rc::new(Inner {
            controlled,
            internal: signal(default_value),
            cursor: signal(usize::MAX),
            focused: signal(false),
            filled: signal(false),
            form_control,
            on_change,
        }))
    }

    /// Current text (reactive).
    pub fn value(&self) -> String {
        match &self.0.controlled {
            Some(value) => value(),
            None => self.0.internal.get(),
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.0.controlled.is_some()
    }

    /// Cursor position in characters, clamped to the text.
    pub fn cursor(&self) -> usize {
        self.0.cursor.get().min(self.value().chars().count())
    }

    pub fn set_cursor(&self, cursor: usize) {
        self.0.cursor.set(cursor);
    }

    /// Whether the input holds a value, as reported to the form control.
    pub fn filled(&self) -> bool {
        match &self.0.form_control {
            Some(control) => control.filled(),
            None => self.0.filled.get(),
        }
    }

    /// Apply a change coming from the input element.
    ///
    /// `target` is the element's new text. An uncontrolled input without a
    /// target cannot know its value and fails.
    pub fn handle_change(&self, target: Option<&str>) -> Result<()> {
        if !self.is_controlled() {
            let Some(target) = target else {
                return Err(SuiError::MissingInputTarget);
            };
            self.0.internal.set(target.to_string());
            self.check_dirty(target);
        }
        if let (Some(on_change), Some(target)) = (&self.0.on_change, target) {
            on_change(&target.to_string());
        }
        Ok(())
    }

    /// Report filled / empty to the form control (or local state).
    fn check_dirty(&self, value: &str) {
        let value = FieldValue::from(value);
        match &self.0.form_control {
            Some(control) => control.check_dirty(Some(&value)),
            None => {
                self.0.filled.set(is_filled(Some(&value)));
            }
        }
    }

    fn focus_changed(&self, focused: bool) {
        match (&self.0.form_control, focused) {
            (Some(control), true) => control.on_focus(),
            (Some(control), false) => control.on_blur(),
            (None, focused) => {
                self.0.focused.set(focused);
            }
        }
    }

    fn local_focused(&self) -> bool {
        self.0.focused.get()
    }

    /// Replace the text and place the cursor.
    fn edit(&self, value: String, cursor: usize) {
        self.set_cursor(cursor);
        if let Err(err) = self.handle_change(Some(&value)) {
            tracing::warn!(%err, "input change rejected");
        }
    }

    /// Built-in editing. Returns true when the key was used.
    fn handle_key(&self, event: &KeyboardEvent, read_only: bool) -> bool {
        let value = self.value();
        let len = value.chars().count();
        let cursor = self.cursor();

        match event.key.as_str() {
            "ArrowLeft" => self.set_cursor(cursor.saturating_sub(1)),
            "ArrowRight" => self.set_cursor((cursor + 1).min(len)),
            "Home" => self.set_cursor(0),
            "End" => self.set_cursor(len),
            _ if read_only => return false,
            "Backspace" if cursor > 0 => {
                self.edit(remove_char(&value, cursor - 1), cursor - 1);
            }
            "Delete" if cursor < len => {
                self.edit(remove_char(&value, cursor), cursor);
            }
            "Backspace" | "Delete" => {}
            _ => match event.char() {
                Some(c) if !c.is_control() => self.edit(insert_char(&value, cursor, c), cursor + 1),
                _ => return false,
            },
        }
        true
    }
}

impl std::fmt::Debug for InputState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputState")
            .field("value", &self.value())
            .field("controlled", &self.is_controlled())
            .finish()
    }
}

fn insert_char(value: &str, at: usize, c: char) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    chars.insert(at.min(chars.len()), c);
    chars.into_iter().collect()
}

fn remove_char(value: &str, at: usize) -> String {
    value
        .chars()
        .enumerate()
        .filter_map(|(i, c)| (i != at).then_some(c))
        .collect()
}

// =============================================================================
// Component
// =============================================================================

/// Properties for [`input_base`] and [`input`].
#[derive(Default)]
pub struct InputProps {
    /// Id of the `input` element.
    pub id: Option<String>,
    pub class_name: Option<String>,
    /// Slot overrides: `root`, `input`.
    pub classes: Classes,
    pub name: Option<String>,
    /// Controlled text.
    pub value: Option<PropValue<String>>,
    /// Initial text of an uncontrolled input.
    pub default_value: Option<String>,
    pub placeholder: Option<String>,
    pub input_type: InputType,
    pub auto_focus: bool,
    pub read_only: bool,
    pub full_width: bool,
    /// Input only: drop the underline.
    pub disable_underline: bool,
    /// Explicit state; `None` defers to the form control.
    pub state: StateProps,
    pub form_control: Option<FormControlHandle>,
    /// Extra attributes for the `input` element (`aria-describedby`, ...).
    pub attributes: Vec<(String, String)>,
    pub on_change: Option<ChangeCallback<String>>,
    pub on_submit: Option<Rc<dyn Fn(&str)>>,
    pub on_key: Option<KeyCallback>,
    pub on_focus: Option<FocusCallback>,
    pub on_blur: Option<BlurCallback>,
}

/// Indices of a created input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InputParts {
    pub root: usize,
    pub input: usize,
}

/// Create an input. `component` adds `Sui<component>-*` classes next to the
/// InputBase ones.
pub(crate) fn create_input(props: InputProps, component: Option<&'static str>) -> (InputParts, InputState) {
    let state = InputState::new(
        props.value.map(PropValue::into_getter),
        props.default_value.unwrap_or_default(),
        props.form_control.clone(),
        props.on_change,
    );

    let explicit = props.state;
    let control = props.form_control;
    let local_state = state.clone();
    let merged: Rc<dyn Fn() -> FormControlState> = Rc::new(move || {
        let mut current = form_control_state(&explicit, control.as_ref());
        if control.is_none() {
            current.focused = local_state.local_focused();
            current.filled = local_state.filled();
        }
        current
    });

    // Root
    let root = create_box(BoxProps::default());

    let overrides = props.classes;
    let class_name = props.class_name;
    let in_control = state.0.form_control.is_some();
    let full_width = props.full_width;
    let underline = component == Some("Input") && !props.disable_underline;
    let merged_for_root = merged.clone();
    let root_overrides = overrides.clone();
    bind_class_names(root, move || {
        let current = merged_for_root();
        let names = ClassNames::new().slot(&root_overrides, "InputBase", "root");
        let names = match component {
            Some(component) => names
                .slot(&root_overrides, component, "root")
                .slot_if(in_control, &root_overrides, component, "formControl")
                .slot_if(underline, &root_overrides, component, "underline"),
            None => names,
        };
        names
            .slot_if(in_control, &root_overrides, "InputBase", "formControl")
            .slot_if(full_width || current.full_width, &root_overrides, "InputBase", "fullWidth")
            .slot_if(current.size == Size::Small, &root_overrides, "InputBase", "marginDense")
            .add_if(current.focused, styles::FOCUSED)
            .add_if(current.disabled, styles::DISABLED)
            .add_if(current.error, styles::ERROR)
            .add_opt(class_name.as_deref())
    });

    // Input element
    let input = crate::engine::with_parent(root, || {
        create_box(BoxProps {
            id: props.id,
            component_type: Some(ComponentType::Input),
            ..Default::default()
        })
    });

    let input_overrides = overrides;
    let merged_for_input = merged.clone();
    bind_class_names(input, move || {
        let current = merged_for_input();
        let names = ClassNames::new().slot(&input_overrides, "InputBase", "input");
        let names = match component {
            Some(component) => names.slot(&input_overrides, component, "input"),
            None => names,
        };
        names.slot_if(current.size == Size::Small, &input_overrides, "InputBase", "inputMarginDense")
    });

    let merged_for_disabled = merged.clone();
    interaction::set_disabled_getter(input, move || merged_for_disabled().disabled);
    let merged_for_tab = merged.clone();
    interaction::set_tab_index_getter(input, move || (!merged_for_tab().disabled).then_some(0));

    let input_type = props.input_type;
    let state_for_text = state.clone();
    text_arrays::set_text_content_getter(input, move || {
        let value = state_for_text.value();
        match input_type {
            InputType::Text => value,
            InputType::Password => value.chars().map(|_| MASK).collect(),
        }
    });

    let (name, placeholder, read_only) = (props.name, props.placeholder, props.read_only);
    let extra = props.attributes;
    let state_for_attrs = state.clone();
    let merged_for_attrs = merged.clone();
    bind_attributes(input, move |attrs| {
        let current = merged_for_attrs();
        insert_attr(attrs, "name", name.clone());
        insert_attr(attrs, "placeholder", placeholder.clone());
        if input_type == InputType::Password {
            attrs.insert("type".into(), "password".into());
        }
        if read_only {
            attrs.insert("readonly".into(), String::new());
        }
        if current.disabled {
            attrs.insert("disabled".into(), String::new());
        }
        if current.error {
            attrs.insert("aria-invalid".into(), "true".into());
        }
        if current.required {
            attrs.insert("required".into(), String::new());
        }
        if focus::is_focused(input) {
            attrs.insert("data-cursor".into(), state_for_attrs.cursor().to_string());
        }
        attrs.extend(extra.iter().cloned());
    });

    // Focus
    let (user_focus, user_blur) = (props.on_focus, props.on_blur);
    let state_for_focus = state.clone();
    let state_for_blur = state.clone();
    let merged_for_focus = merged;
    on_focus_change(
        input,
        move || {
            if merged_for_focus().disabled {
                return;
            }
            if let Some(on_focus) = &user_focus {
                on_focus();
            }
            state_for_focus.focus_changed(true);
        },
        move || {
            if let Some(on_blur) = &user_blur {
                on_blur();
            }
            state_for_blur.focus_changed(false);
        },
    );

    // Keys
    let state_for_keys = state.clone();
    let (user_key, on_submit) = (props.on_key, props.on_submit);
    on_key_at(input, move |event| {
        if user_key.as_ref().is_some_and(|handler| handler(event)) {
            return true;
        }
        if interaction::get_disabled(input) {
            return false;
        }
        if event.key == "Enter" {
            return match &on_submit {
                Some(on_submit) => {
                    on_submit(&state_for_keys.value());
                    true
                }
                None => false,
            };
        }
        state_for_keys.handle_key(event, read_only)
    });

    // Dirty checks: once at mount, then on every controlled value change
    if state.is_controlled() {
        let state_for_effect = state.clone();
        let stop = effect(move || {
            let value = state_for_effect.value();
            state_for_effect.check_dirty(&value);
        });
        on_destroy(root, stop);
    } else {
        state.check_dirty(&state.value());
    }

    if props.auto_focus && !focus::focus(input) {
        tracing::debug!(input, "auto focus skipped: input cannot take focus");
    }

    (InputParts { root, input }, state)
}

/// Create a bare input base.
pub fn input_base(props: InputProps) -> (Cleanup, InputState) {
    let (parts, state) = create_input(props, None);
    (component_cleanup(parts.root), state)
}

/// Create an underlined input.
pub fn input(props: InputProps) -> (Cleanup, InputState) {
    let (parts, state) = create_input(props, Some("Input"));
    (component_cleanup(parts.root), state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::style;
    use crate::engine::reset_registry;
    use crate::form_control::FormControlConfig;
    use crate::state::focus::reset_focus_state;
    use crate::state::keyboard::{dispatch_focused, reset_keyboard_state};
    use std::cell::RefCell;

    fn setup() {
        reset_registry();
        reset_focus_state();
        reset_keyboard_state();
    }

    fn type_keys(keys: &[&str]) {
        for key in keys {
            dispatch_focused(focus::get_focused_index(), &KeyboardEvent::new(*key));
        }
    }

    #[test]
    fn test_uncontrolled_editing() {
        setup();

        let (parts, state) = create_input(
            InputProps {
                default_value: Some("ac".into()),
                auto_focus: true,
                ..Default::default()
            },
            Some("Input"),
        );

        assert!(focus::is_focused(parts.input));
        assert_eq!(state.cursor(), 2);

        type_keys(&["ArrowLeft", "b", "End", "d"]);
        assert_eq!(state.value(), "abcd");
        assert_eq!(text_arrays::get_text_content(parts.input), "abcd");

        type_keys(&["Home", "Delete", "End", "Backspace"]);
        assert_eq!(state.value(), "bc");
        assert_eq!(style::get_attribute(parts.input, "data-cursor").as_deref(), Some("2"));
        assert!(style::has_class(parts.root, "SuiInput-underline"));
        assert!(style::has_class(parts.root, "Sui-focused"));
    }

    #[test]
    fn test_controlled_value_waits_for_owner() {
        setup();

        let value = signal("x".to_string());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let (_, state) = create_input(
            InputProps {
                value: Some(value.clone().into()),
                auto_focus: true,
                on_change: Some(Rc::new(move |v: &String| seen_clone.borrow_mut().push(v.clone()))),
                ..Default::default()
            },
            None,
        );

        type_keys(&["y"]);
        assert_eq!(*seen.borrow(), vec!["xy".to_string()]);
        assert_eq!(state.value(), "x");

        value.set("xy".into());
        assert_eq!(state.value(), "xy");
    }

    #[test]
    fn test_missing_target_is_fatal_when_uncontrolled() {
        setup();

        let (_, uncontrolled) = create_input(InputProps::default(), None);
        assert!(matches!(uncontrolled.handle_change(None), Err(SuiError::MissingInputTarget)));

        let (_, controlled) = create_input(
            InputProps {
                value: Some("fixed".into()),
                ..Default::default()
            },
            None,
        );
        assert!(controlled.handle_change(None).is_ok());
    }

    #[test]
    fn test_reports_filled_to_form_control() {
        setup();

        let control = FormControlHandle::new(FormControlConfig::default());
        let (_, state) = create_input(
            InputProps {
                default_value: Some("hi".into()),
                form_control: Some(control.clone()),
                auto_focus: true,
                ..Default::default()
            },
            Some("Input"),
        );

        assert!(control.filled());
        assert!(control.focused());

        type_keys(&["Backspace", "Backspace"]);
        assert_eq!(state.value(), "");
        assert!(!control.filled());

        focus::blur();
        assert!(!control.focused());
    }

    #[test]
    fn test_controlled_dirty_check_follows_value() {
        setup();

        let control = FormControlHandle::new(FormControlConfig::default());
        let value = signal(String::new());
        create_input(
            InputProps {
                value: Some(value.clone().into()),
                form_control: Some(control.clone()),
                ..Default::default()
            },
            None,
        );

        assert!(!control.filled());
        value.set("set".into());
        assert!(control.filled());
    }

    #[test]
    fn test_disabled_from_form_control() {
        setup();

        let control = FormControlHandle::new(FormControlConfig {
            disabled: Rc::new(|| true),
            ..Default::default()
        });
        let (parts, _) = create_input(
            InputProps {
                form_control: Some(control),
                ..Default::default()
            },
            None,
        );

        assert_eq!(interaction::get_tab_index(parts.input), None);
        assert!(!focus::focus(parts.input));
        assert!(style::has_class(parts.root, "Sui-disabled"));
        assert_eq!(style::get_attribute(parts.input, "disabled").as_deref(), Some(""));
    }

    #[test]
    fn test_password_is_masked_and_submit() {
        setup();

        let submitted = Rc::new(RefCell::new(String::new()));
        let submitted_clone = submitted.clone();
        let (parts, _) = create_input(
            InputProps {
                default_value: Some("pw".into()),
                input_type: InputType::Password,
                auto_focus: true,
                on_submit: Some(Rc::new(move |v: &str| *submitted_clone.borrow_mut() = v.to_string())),
                ..Default::default()
            },
            None,
        );

        assert_eq!(text_arrays::get_text_content(parts.input), "••");
        type_keys(&["Enter"]);
        assert_eq!(*submitted.borrow(), "pw");
    }
}
