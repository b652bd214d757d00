//! TextField - FormControl + InputLabel + Input (or Select) + FormHelperText.
//!
//! With an `id`, the label gets `{id}-label` and the helper text
//! `{id}-helper-text`; the input is described by the helper text and a
//! select is labelled by the label.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;
use crate::primitives::{
    component_cleanup, BlurCallback, ChangeCallback, Cleanup, FocusCallback, PropValue,
};
use crate::styles::{ClassNames, Classes};
use crate::types::{FieldVariant, Size};

use super::form_control::{create_form_control, FormControlProps};
use super::form_label::{create_form_helper_text, create_input_label, FormHelperTextProps, FormLabelProps, InputLabelProps};
use super::input::{create_input, InputProps, InputState, InputType};
use super::select::{self, create_select, SelectProps};

/// Properties for [`text_field`].
#[derive(Default)]
pub struct TextFieldProps {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub classes: Classes,
    pub label: Option<String>,
    pub helper_text: Option<String>,
    pub placeholder: Option<String>,
    pub name: Option<String>,
    pub value: Option<PropValue<String>>,
    pub default_value: Option<String>,
    pub input_type: InputType,
    pub disabled: Option<PropValue<bool>>,
    pub error: Option<PropValue<bool>>,
    pub required: Option<PropValue<bool>>,
    pub full_width: bool,
    pub size: Size,
    pub variant: FieldVariant,
    pub auto_focus: bool,
    pub read_only: bool,
    pub on_change: Option<ChangeCallback<String>>,
    pub on_submit: Option<Rc<dyn Fn(&str)>>,
    pub on_focus: Option<FocusCallback>,
    pub on_blur: Option<BlurCallback>,
    /// Render a select with these props instead of a text input.
    pub select: Option<SelectProps>,
}

/// Indices and state of a created text field.
pub(crate) struct TextFieldParts {
    pub root: usize,
    pub input: Option<InputState>,
}

pub(crate) fn create_text_field(props: TextFieldProps) -> Result<TextFieldParts> {
    if let Some(select_props) = &props.select {
        select::validate(select_props)?;
    }

    let id = props.id;
    let label_id = id.as_ref().map(|id| format!("{id}-label"));
    let helper_id = props.helper_text.as_ref().and(id.as_ref()).map(|id| format!("{id}-helper-text"));

    let input_state: Rc<RefCell<Option<InputState>>> = Rc::new(RefCell::new(None));
    let input_slot = input_state.clone();

    let label = props.label;
    let helper_text = props.helper_text;
    let select_props = props.select;
    let input_props = InputProps {
        id: id.clone(),
        name: props.name,
        value: props.value,
        default_value: props.default_value,
        placeholder: props.placeholder,
        input_type: props.input_type,
        auto_focus: props.auto_focus,
        read_only: props.read_only,
        full_width: props.full_width,
        attributes: helper_id
            .iter()
            .map(|helper| ("aria-describedby".to_string(), helper.clone()))
            .collect(),
        on_change: props.on_change,
        on_submit: props.on_submit,
        on_focus: props.on_focus,
        on_blur: props.on_blur,
        ..Default::default()
    };

    let class_name = ClassNames::new()
        .slot(&props.classes, "TextField", "root")
        .add_opt(props.class_name.as_deref())
        .to_string();

    let (root, _) = create_form_control(FormControlProps {
        class_name: Some(class_name),
        disabled: props.disabled,
        error: props.error,
        required: props.required,
        full_width: props.full_width,
        size: props.size,
        variant: props.variant,
        children: Some(Box::new(move |handle| {
            if let Some(label) = label {
                create_input_label(InputLabelProps {
                    label: FormLabelProps {
                        id: label_id.clone(),
                        label,
                        html_for: id.clone(),
                        form_control: Some(handle.clone()),
                        ..Default::default()
                    },
                    ..Default::default()
                });
            }

            match select_props {
                Some(select_props) => {
                    let select_props = SelectProps {
                        id: select_props.id.or_else(|| id.clone()),
                        label_id: select_props.label_id.or(label_id),
                        form_control: Some(handle.clone()),
                        auto_focus: select_props.auto_focus || input_props.auto_focus,
                        ..select_props
                    };
                    if let Err(err) = create_select(select_props) {
                        tracing::error!(%err, "text field select");
                    }
                }
                None => {
                    let (_, state) = create_input(
                        InputProps {
                            form_control: Some(handle.clone()),
                            ..input_props
                        },
                        Some("Input"),
                    );
                    *input_slot.borrow_mut() = Some(state);
                }
            }

            if let Some(text) = helper_text {
                create_form_helper_text(FormHelperTextProps {
                    id: helper_id,
                    text,
                    form_control: Some(handle.clone()),
                    ..Default::default()
                });
            }
        })),
        ..Default::default()
    });

    let input = input_state.borrow_mut().take();
    Ok(TextFieldParts { root, input })
}

/// Create a text field.
///
/// Returns the input state for text inputs (none for selects).
pub fn text_field(props: TextFieldProps) -> Result<(Cleanup, Option<InputState>)> {
    let parts = create_text_field(props)?;
    Ok((component_cleanup(parts.root), parts.input))
}
