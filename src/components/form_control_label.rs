//! FormControlLabel - a checkbox with a clickable label.
//!
//! Props the label carries (`checked`, `name`, `value`, `on_change`) are
//! forwarded to the control when the control does not set them itself.
//! Disabled resolves from the label prop, then the control prop, then the
//! form control.

use std::rc::Rc;

use crate::form_control::FormControlHandle;
use crate::primitives::{component_cleanup, create_box, create_text, BoxProps, Cleanup, PropValue, TextProps};
use crate::styles::{self, ClassNames, Classes};
use crate::types::ComponentType;

use super::bind_class_names;
use super::switch_base::{create_checkbox, CheckboxProps};

/// Where the label sits relative to the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPlacement {
    #[default]
    End,
    Start,
    Top,
    Bottom,
}

impl LabelPlacement {
    fn class_key(&self) -> Option<&'static str> {
        match self {
            Self::End => None,
            Self::Start => Some("labelPlacementStart"),
            Self::Top => Some("labelPlacementTop"),
            Self::Bottom => Some("labelPlacementBottom"),
        }
    }

    fn label_first(&self) -> bool {
        matches!(self, Self::Start | Self::Top)
    }
}

/// Properties for [`form_control_label`].
#[derive(Default)]
pub struct FormControlLabelProps {
    pub id: Option<String>,
    pub class_name: Option<String>,
    /// Slot overrides: `root`, `label`.
    pub classes: Classes,
    pub control: CheckboxProps,
    pub label: String,
    pub label_placement: LabelPlacement,
    pub disabled: Option<bool>,
    pub checked: Option<PropValue<bool>>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub on_change: Option<Rc<dyn Fn(bool)>>,
    pub form_control: Option<FormControlHandle>,
}

/// Create a labelled control and return the label's index.
pub(crate) fn create_form_control_label(props: FormControlLabelProps) -> usize {
    let mut control = props.control;
    let control_disabled = control.base.disabled;
    let form_control = props.form_control.or_else(|| control.base.form_control.clone());
    let form_control_for_disabled = form_control.clone();
    let explicit = props.disabled.or(control_disabled);
    let disabled: Rc<dyn Fn() -> bool> = Rc::new(move || {
        explicit.unwrap_or_else(|| form_control_for_disabled.as_ref().is_some_and(FormControlHandle::disabled))
    });

    // Forward what the control leaves unset
    let base = &mut control.base;
    if base.checked.is_none() {
        base.checked = props.checked;
    }
    if base.name.is_none() {
        base.name = props.name;
    }
    if base.value.is_none() {
        base.value = props.value;
    }
    if base.on_change.is_none() {
        base.on_change = props.on_change;
    }
    base.disabled = explicit;
    if base.form_control.is_none() {
        base.form_control = form_control;
    }

    let placement = props.label_placement;
    let overrides = props.classes;
    let label_text = props.label;
    let label_classes_overrides = overrides.clone();
    let disabled_for_label = disabled.clone();
    let index = create_box(BoxProps {
        id: props.id,
        component_type: Some(ComponentType::Label),
        children: Some(Box::new(move || {
            let label = move || {
                let disabled = disabled_for_label.clone();
                let overrides = label_classes_overrides.clone();
                create_text(TextProps {
                    content: label_text.into(),
                    classes: Some(PropValue::getter(move || {
                        ClassNames::new()
                            .slot(&overrides, "FormControlLabel", "label")
                            .add_if(disabled(), styles::DISABLED)
                            .build()
                    })),
                    ..Default::default()
                });
            };
            if placement.label_first() {
                label();
                create_checkbox(control);
            } else {
                create_checkbox(control);
                label();
            }
        })),
        ..Default::default()
    });

    let class_name = props.class_name;
    bind_class_names(index, move || {
        let names = ClassNames::new().slot(&overrides, "FormControlLabel", "root");
        let names = match placement.class_key() {
            Some(key) => names.slot(&overrides, "FormControlLabel", key),
            None => names,
        };
        names.add_if(disabled(), styles::DISABLED).add_opt(class_name.as_deref())
    });

    index
}

/// Create a labelled control.
pub fn form_control_label(props: FormControlLabelProps) -> Cleanup {
    component_cleanup(create_form_control_label(props))
}
