//! FormControl and FormGroup.
//!
//! FormControl owns a [`FormControlHandle`] and hands it to its children
//! closure; descendants receive it through their `form_control` prop.

use crate::form_control::{FormControlConfig, FormControlHandle};
use crate::primitives::{component_cleanup, create_box, BoxProps, Children, Cleanup, PropValue};
use crate::styles::{self, ClassNames, Classes};
use crate::types::{ComponentType, FieldVariant, Size};

use super::{bind_attributes, bind_class_names, flag};

/// Properties for [`form_control`].
#[derive(Default)]
pub struct FormControlProps {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub classes: Classes,
    pub disabled: Option<PropValue<bool>>,
    pub error: Option<PropValue<bool>>,
    pub required: Option<PropValue<bool>>,
    /// Overrides focus reported by descendants.
    pub focused: Option<PropValue<bool>>,
    pub full_width: bool,
    pub size: Size,
    pub variant: FieldVariant,
    /// Vertical spacing: `none`, `dense` or `normal`.
    pub margin: Option<String>,
    pub children: Option<Box<dyn FnOnce(&FormControlHandle)>>,
}

/// Create a form control. Returns its index and the shared handle.
pub(crate) fn create_form_control(props: FormControlProps) -> (usize, FormControlHandle) {
    let handle = FormControlHandle::new(FormControlConfig {
        focused: props.focused.map(PropValue::into_getter),
        disabled: flag(props.disabled),
        error: flag(props.error),
        required: flag(props.required),
        full_width: props.full_width,
        size: props.size,
        variant: props.variant,
    });

    let children = props.children;
    let handle_for_children = handle.clone();
    let index = create_box(BoxProps {
        id: props.id,
        component_type: Some(ComponentType::FormControl),
        children: Some(Box::new(move || {
            if let Some(children) = children {
                children(&handle_for_children);
            }
        })),
        ..Default::default()
    });

    let overrides = props.classes;
    let class_name = props.class_name;
    let margin = props.margin.filter(|m| m != "none");
    let full_width = props.full_width;
    let state = handle.clone();
    bind_class_names(index, move || {
        let current = state.state();
        ClassNames::new()
            .slot(&overrides, "FormControl", "root")
            .add_opt(margin.as_ref().map(|m| format!("SuiFormControl-margin{}", styles::capitalize(m))).as_deref())
            .slot_if(full_width, &overrides, "FormControl", "fullWidth")
            .add_if(current.focused, styles::FOCUSED)
            .add_if(current.disabled, styles::DISABLED)
            .add_if(current.error, styles::ERROR)
            .add_if(current.filled, styles::FILLED)
            .add_opt(class_name.as_deref())
    });

    (index, handle)
}

/// Create a form control.
pub fn form_control(props: FormControlProps) -> Cleanup {
    component_cleanup(create_form_control(props).0)
}

// =============================================================================
// FormGroup
// =============================================================================

/// Properties for [`form_group`].
#[derive(Default)]
pub struct FormGroupProps {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub classes: Classes,
    /// Lay the children out in a row instead of a column.
    pub row: bool,
    pub children: Option<Children>,
}

/// Create a form group and return its index.
pub(crate) fn create_form_group(props: FormGroupProps) -> usize {
    let class_names = ClassNames::new()
        .slot(&props.classes, "FormGroup", "root")
        .slot_if(props.row, &props.classes, "FormGroup", "row")
        .add_opt(props.class_name.as_deref());

    let index = create_box(BoxProps {
        id: props.id,
        classes: Some(class_names.build().into()),
        children: props.children,
        ..Default::default()
    });

    let direction = if props.row { "row" } else { "column" };
    bind_attributes(index, move |attrs| {
        attrs.insert("data-direction".into(), direction.into());
    });

    index
}

/// Create a form group.
pub fn form_group(props: FormGroupProps) -> Cleanup {
    component_cleanup(create_form_group(props))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::style;
    use crate::engine::reset_registry;
    use crate::form_control::FieldValue;
    use crate::state::focus::reset_focus_state;
    use spark_signals::signal;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup() {
        reset_registry();
        reset_focus_state();
    }

    #[test]
    fn test_children_receive_handle() {
        setup();

        let captured: Rc<RefCell<Option<FormControlHandle>>> = Rc::new(RefCell::new(None));
        let captured_clone = captured.clone();
        let (index, handle) = create_form_control(FormControlProps {
            required: Some(true.into()),
            full_width: true,
            children: Some(Box::new(move |handle| {
                *captured_clone.borrow_mut() = Some(handle.clone());
            })),
            ..Default::default()
        });

        assert!(captured.borrow().as_ref().is_some_and(|h| h.state().required));
        assert!(style::has_class(index, "SuiFormControl-root"));
        assert!(style::has_class(index, "SuiFormControl-fullWidth"));

        handle.check_dirty(Some(&FieldValue::from("x")));
        assert!(style::has_class(index, "Sui-filled"));
        handle.on_focus();
        assert!(style::has_class(index, "Sui-focused"));
    }

    #[test]
    fn test_reactive_disabled() {
        setup();

        let disabled = signal(false);
        let (index, handle) = create_form_control(FormControlProps {
            disabled: Some(disabled.clone().into()),
            margin: Some("dense".into()),
            ..Default::default()
        });

        assert!(style::has_class(index, "SuiFormControl-marginDense"));
        handle.on_focus();
        assert!(handle.focused());

        disabled.set(true);
        assert!(!handle.focused());
        assert!(style::has_class(index, "Sui-disabled"));
        assert!(!style::has_class(index, "Sui-focused"));
    }

    #[test]
    fn test_form_group_direction() {
        setup();

        let row = create_form_group(FormGroupProps {
            row: true,
            ..Default::default()
        });
        let column = create_form_group(FormGroupProps::default());

        assert!(style::has_class(row, "SuiFormGroup-row"));
        assert_eq!(style::get_attribute(row, "data-direction").as_deref(), Some("row"));
        assert_eq!(style::get_attribute(column, "data-direction").as_deref(), Some("column"));
    }
}
