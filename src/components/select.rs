//! Select - a display button plus a listbox menu of options.
//!
//! Options are [`MenuItem`](super::menu_item)s with a `value`. The display
//! shows `render_value(value)` or the labels of the selected options joined
//! by `", "`. Space, Enter, ArrowUp and ArrowDown open the menu. Choosing an
//! option sets the value and fires `on_change`; a single select closes, a
//! multiple select toggles membership and stays open.

use std::rc::Rc;

use spark_signals::{effect, signal, Signal};

use crate::engine::arrays::{interaction, style, text::collect_text};
use crate::engine::{on_destroy, with_parent};
use crate::error::{warn_misuse, Result, SuiError};
use crate::form_control::{form_control_state, FieldValue, FormControlHandle, FormControlState, StateProps};
use crate::primitives::{
    component_cleanup, create_box, create_text, BlurCallback, BoxProps, ChangeCallback, Children, Cleanup,
    FocusCallback, PropValue, TextProps,
};
use crate::state::focus;
use crate::styles::{self, ClassNames, Classes};
use crate::types::{ComponentType, Size};

use super::menu::{create_menu, MenuParts, MenuProps};
use super::menu_list::{self, ItemSettings};
use super::{bind_attributes, bind_class_names, insert_attr, on_focus_change, on_key_at};

/// Keys that open a closed select.
const OPEN_KEYS: [&str; 4] = [" ", "ArrowUp", "ArrowDown", "Enter"];

/// Properties for [`select`].
#[derive(Default)]
pub struct SelectProps {
    /// Id of the display button.
    pub id: Option<String>,
    pub class_name: Option<String>,
    /// Slot overrides: `root`, `select`, `icon`, `placeholder`.
    pub classes: Classes,
    pub name: Option<String>,
    /// Controlled value.
    pub value: Option<PropValue<FieldValue>>,
    /// Initial value of an uncontrolled select.
    pub default_value: Option<FieldValue>,
    pub multiple: bool,
    /// Render the display even when the value is empty.
    pub display_empty: bool,
    pub render_value: Option<Rc<dyn Fn(&FieldValue) -> String>>,
    /// Shown while the display is empty.
    pub placeholder: Option<String>,
    /// Controlled open state.
    pub open: Option<PropValue<bool>>,
    pub on_open: Option<Rc<dyn Fn()>>,
    pub on_close: Option<Rc<dyn Fn()>>,
    pub on_change: Option<ChangeCallback<FieldValue>>,
    pub read_only: bool,
    pub auto_focus: bool,
    /// Id of the label naming this select.
    pub label_id: Option<String>,
    /// Classes for the menu paper.
    pub menu_classes: Classes,
    pub state: StateProps,
    pub form_control: Option<FormControlHandle>,
    pub on_focus: Option<FocusCallback>,
    pub on_blur: Option<BlurCallback>,
    /// The options (menu items).
    pub children: Option<Children>,
}

/// Indices of a created select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SelectParts {
    pub root: usize,
    pub display: usize,
    pub menu: MenuParts,
}

struct SelectState {
    controlled_value: Option<Rc<dyn Fn() -> FieldValue>>,
    value: Signal<FieldValue>,
    controlled_open: Option<Rc<dyn Fn() -> bool>>,
    open: Signal<bool>,
    focused: Signal<bool>,
    filled: Signal<bool>,
    multiple: bool,
    form_control: Option<FormControlHandle>,
    on_open: Option<Rc<dyn Fn()>>,
    on_close: Option<Rc<dyn Fn()>>,
    on_change: Option<ChangeCallback<FieldValue>>,
}

impl SelectState {
    fn value(&self) -> FieldValue {
        match &self.controlled_value {
            Some(value) => value(),
            None => self.value.get(),
        }
    }

    fn is_open(&self) -> bool {
        match &self.controlled_open {
            Some(open) => open(),
            None => self.open.get(),
        }
    }

    fn set_open(&self, open: bool) {
        tracing::debug!(open, "select open state requested");
        if self.controlled_open.is_none() {
            self.open.set(open);
        }
        let callback = if open { &self.on_open } else { &self.on_close };
        if let Some(callback) = callback {
            callback();
        }
    }

    fn check_dirty(&self, value: &FieldValue) {
        match &self.form_control {
            Some(control) => control.check_dirty(Some(value)),
            None => {
                self.filled.set(!value.is_empty());
            }
        }
    }

    fn filled(&self) -> bool {
        match &self.form_control {
            Some(control) => control.filled(),
            None => self.filled.get(),
        }
    }

    /// An option was activated.
    fn choose(&self, item_value: String) {
        let current = self.value();
        let next = if self.multiple {
            let mut values = current.as_many().map(<[String]>::to_vec).unwrap_or_default();
            match values.iter().position(|v| *v == item_value) {
                Some(position) => {
                    values.remove(position);
                }
                None => values.push(item_value),
            }
            FieldValue::Many(values)
        } else {
            FieldValue::Text(item_value)
        };

        if !self.multiple {
            self.set_open(false);
        }
        if next == current {
            return;
        }
        if self.controlled_value.is_none() {
            self.value.set(next.clone());
            self.check_dirty(&next);
        }
        if let Some(on_change) = &self.on_change {
            on_change(&next);
        }
    }
}

/// Options of a menu list as (index, value) pairs.
fn options(list: usize) -> Vec<(usize, String)> {
    menu_list::items(list)
        .into_iter()
        .filter_map(|item| style::get_attribute(item, "data-value").map(|value| (item, value)))
        .collect()
}

/// Starting value of a select.
fn initial_value(props: &SelectProps) -> FieldValue {
    match &props.value {
        Some(value) => value.get(),
        None => props.default_value.clone().unwrap_or_else(|| {
            if props.multiple { FieldValue::Many(Vec::new()) } else { FieldValue::default() }
        }),
    }
}

/// Reject a multiple select whose value is not a collection.
pub(crate) fn validate(props: &SelectProps) -> Result<()> {
    if props.multiple && initial_value(props).as_many().is_none() {
        return Err(SuiError::MultipleValueNotArray { name: props.name.clone() });
    }
    Ok(())
}

/// Create a select.
pub(crate) fn create_select(props: SelectProps) -> Result<SelectParts> {
    validate(&props)?;
    let initial = initial_value(&props);

    let state = Rc::new(SelectState {
        controlled_value: props.value.map(PropValue::into_getter),
        value: signal(initial),
        controlled_open: props.open.map(PropValue::into_getter),
        open: signal(false),
        focused: signal(false),
        filled: signal(false),
        multiple: props.multiple,
        form_control: props.form_control.clone(),
        on_open: props.on_open,
        on_close: props.on_close,
        on_change: props.on_change,
    });

    let explicit = props.state;
    let control = props.form_control;
    let state_for_merge = state.clone();
    let merged: Rc<dyn Fn() -> FormControlState> = Rc::new(move || {
        let mut current = form_control_state(&explicit, control.as_ref());
        if control.is_none() {
            current.focused = state_for_merge.focused.get();
            current.filled = state_for_merge.filled();
        }
        current
    });

    // Root (an Input-styled wrapper)
    let root = create_box(BoxProps::default());
    let overrides = props.classes;
    let in_control = state.form_control.is_some();
    let root_overrides = overrides.clone();
    let merged_for_root = merged.clone();
    let class_name = props.class_name;
    bind_class_names(root, move || {
        let current = merged_for_root();
        ClassNames::new()
            .slot(&root_overrides, "InputBase", "root")
            .slot(&root_overrides, "Input", "root")
            .slot(&root_overrides, "Input", "underline")
            .slot_if(in_control, &root_overrides, "Input", "formControl")
            .slot_if(current.full_width, &root_overrides, "InputBase", "fullWidth")
            .slot_if(current.size == Size::Small, &root_overrides, "InputBase", "marginDense")
            .add_if(current.focused, styles::FOCUSED)
            .add_if(current.disabled, styles::DISABLED)
            .add_if(current.error, styles::ERROR)
            .add_opt(class_name.as_deref())
    });

    let list_slot: Rc<std::cell::Cell<Option<usize>>> = Rc::new(std::cell::Cell::new(None));
    let render_value = props.render_value;
    let display_empty = props.display_empty;
    let placeholder = props.placeholder;
    let multiple = props.multiple;

    // Display text: rendered value or the chosen labels
    let state_for_display = state.clone();
    let list_for_display = list_slot.clone();
    let display_text: Rc<dyn Fn() -> String> = Rc::new(move || {
        let value = state_for_display.value();
        if value.is_empty() && !display_empty {
            return String::new();
        }
        if let Some(render_value) = &render_value {
            return render_value(&value);
        }
        let Some(list) = list_for_display.get() else {
            return String::new();
        };
        let labels: Vec<String> = options(list)
            .into_iter()
            .filter(|(_, option)| value.contains(option))
            .map(|(item, _)| collect_text(item))
            .collect();
        if multiple {
            labels.join(", ")
        } else {
            labels.into_iter().last().unwrap_or_default()
        }
    });

    let (display, parts) = with_parent(root, || {
        let display_text_for_child = display_text.clone();
        let placeholder_for_child = placeholder.clone();
        let placeholder_classes = ClassNames::new().slot(&overrides, "Select", "placeholder").build();
        let display = create_box(BoxProps {
            id: props.id,
            component_type: Some(ComponentType::Select),
            children: Some(Box::new(move || {
                create_text(TextProps {
                    content: PropValue::getter(move || {
                        let text = display_text_for_child();
                        match (&placeholder_for_child, text.is_empty()) {
                            (Some(placeholder), true) => placeholder.clone(),
                            _ => text,
                        }
                    }),
                    classes: Some(PropValue::getter({
                        let display_text = display_text.clone();
                        let has_placeholder = placeholder.is_some();
                        move || {
                            if has_placeholder && display_text().is_empty() {
                                placeholder_classes.clone()
                            } else {
                                Vec::new()
                            }
                        }
                    })),
                    ..Default::default()
                });
            })),
            ..Default::default()
        });

        let state_for_icon = state.clone();
        let icon_overrides = overrides.clone();
        create_text(TextProps {
            content: PropValue::getter({
                let state = state.clone();
                move || if state.is_open() { " ▴".to_string() } else { " ▾".to_string() }
            }),
            classes: Some(PropValue::getter(move || {
                ClassNames::new()
                    .slot(&icon_overrides, "Select", "icon")
                    .slot_if(state_for_icon.is_open(), &icon_overrides, "Select", "iconOpen")
                    .build()
            })),
            ..Default::default()
        });

        let state_for_predicate = state.clone();
        let state_for_click = state.clone();
        let state_for_menu = state.clone();
        let state_for_close = state.clone();
        let mut list_attributes = Vec::new();
        if let Some(label_id) = &props.label_id {
            list_attributes.push(("aria-labelledby".to_string(), label_id.clone()));
        }
        let parts = create_menu(MenuProps {
            classes: props.menu_classes,
            open: PropValue::getter(move || state_for_menu.is_open()),
            on_close: Some(Rc::new(move |_| state_for_close.set_open(false))),
            disable_list_wrap: true,
            list_role: Some("listbox".into()),
            list_attributes,
            item_settings: ItemSettings {
                role: Some("option".into()),
                is_value_selected: Some(Rc::new(move |value: &str| state_for_predicate.value().contains(value))),
                on_item_click: Some(Rc::new(move |item| {
                    if let Some(value) = style::get_attribute(item, "data-value") {
                        state_for_click.choose(value);
                    }
                })),
            },
            children: props.children,
            ..Default::default()
        });
        (display, parts)
    });
    list_slot.set(Some(parts.list));

    // Display state
    let merged_for_classes = merged.clone();
    let select_overrides = overrides;
    bind_class_names(display, move || {
        let current = merged_for_classes();
        ClassNames::new()
            .slot(&select_overrides, "Select", "root")
            .slot(&select_overrides, "Select", "select")
            .slot(&select_overrides, "Select", "selectMenu")
            .add("SuiInputBase-input SuiInput-input")
            .add_if(current.disabled, styles::DISABLED)
            .add_if(focus::is_focused(display), styles::FOCUS_VISIBLE)
    });
    let merged_for_disabled = merged.clone();
    interaction::set_disabled_getter(display, move || merged_for_disabled().disabled);
    let merged_for_tab = merged.clone();
    interaction::set_tab_index_getter(display, move || (!merged_for_tab().disabled).then_some(0));

    let state_for_attrs = state.clone();
    let merged_for_attrs = merged.clone();
    let label_id = props.label_id;
    let display_id = crate::engine::get_id(display);
    let name = props.name.clone();
    bind_attributes(display, move |attrs| {
        attrs.insert("role".into(), "button".into());
        attrs.insert("aria-haspopup".into(), "listbox".into());
        if state_for_attrs.is_open() {
            attrs.insert("aria-expanded".into(), "true".into());
        }
        if merged_for_attrs().disabled {
            attrs.insert("aria-disabled".into(), "true".into());
        }
        let labelled_by: Vec<&str> = [label_id.as_deref(), display_id.as_deref()].into_iter().flatten().collect();
        if !labelled_by.is_empty() {
            attrs.insert("aria-labelledby".into(), labelled_by.join(" "));
        }
        insert_attr(attrs, "name", name.clone());
        let value = state_for_attrs.value();
        let value = match &value {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Many(values) => values.join(","),
        };
        attrs.insert("data-value".into(), value);
    });

    // Keys
    let read_only = props.read_only;
    let state_for_keys = state.clone();
    on_key_at(display, move |event| {
        if read_only || interaction::get_disabled(display) || state_for_keys.is_open() {
            return false;
        }
        if OPEN_KEYS.contains(&event.key.as_str()) {
            state_for_keys.set_open(true);
            return true;
        }
        false
    });

    // Focus
    let (user_focus, user_blur) = (props.on_focus, props.on_blur);
    let state_for_focus = state.clone();
    let state_for_blur = state.clone();
    on_focus_change(
        display,
        move || {
            if let Some(on_focus) = &user_focus {
                on_focus();
            }
            match &state_for_focus.form_control {
                Some(control) => control.on_focus(),
                None => {
                    state_for_focus.focused.set(true);
                }
            }
        },
        move || {
            // Focus moving into the open menu keeps the field focused
            if state_for_blur.is_open() {
                return;
            }
            if let Some(on_blur) = &user_blur {
                on_blur();
            }
            match &state_for_blur.form_control {
                Some(control) => control.on_blur(),
                None => {
                    state_for_blur.focused.set(false);
                }
            }
        },
    );

    // Dirty check at mount, then on controlled value changes
    if state.controlled_value.is_some() {
        let state_for_effect = state.clone();
        let stop = effect(move || {
            let value = state_for_effect.value();
            state_for_effect.check_dirty(&value);
        });
        on_destroy(root, stop);
    } else {
        state.check_dirty(&state.value());
    }

    warn_out_of_range(&state.value(), parts.list, props.name.as_deref(), multiple);

    if props.auto_focus && !focus::focus(display) {
        let display_id = display;
        tracing::debug!(display = display_id, "auto focus skipped: select cannot take focus");
    }

    Ok(SelectParts { root, display, menu: parts })
}

fn warn_out_of_range(value: &FieldValue, list: usize, name: Option<&str>, multiple: bool) {
    let FieldValue::Text(text) = value else { return };
    if multiple || text.is_empty() {
        return;
    }
    let available: Vec<String> = options(list).into_iter().map(|(_, value)| value).collect();
    if available.iter().any(|v| v == text) {
        return;
    }
    let name = name.map(|n| format!(" (name=\"{n}\")")).unwrap_or_default();
    let available = if available.is_empty() { "none".to_string() } else { available.join(", ") };
    warn_misuse(
        "Select",
        &format!(
            "out-of-range value `{text}` for the select{name}; provide a value matching one of the options or ''. Available values: {available}"
        ),
    );
}

/// Create a select.
///
/// Fails when `multiple` is set and the value is not a collection.
pub fn select(props: SelectProps) -> Result<Cleanup> {
    let parts = create_select(props)?;
    Ok(component_cleanup(parts.root))
}
