//! FormLabel, InputLabel and FormHelperText.
//!
//! Their classes follow the merged form control state: explicit props
//! first, then the state of the `form_control` handle.

use std::rc::Rc;

use crate::form_control::{form_control_state, FormControlHandle, FormControlState, StateProps};
use crate::primitives::{component_cleanup, create_box, create_text, BoxProps, Cleanup, PropValue, TextProps};
use crate::styles::{self, ClassNames, Classes};
use crate::types::{ComponentType, Size};

use super::{bind_attributes, bind_class_names, insert_attr};

type StateGetter = Rc<dyn Fn() -> FormControlState>;

fn merged_state(props: StateProps, control: Option<FormControlHandle>) -> StateGetter {
    Rc::new(move || form_control_state(&props, control.as_ref()))
}

fn state_classes(names: ClassNames, state: &FormControlState) -> ClassNames {
    names
        .add_if(state.focused, styles::FOCUSED)
        .add_if(state.disabled, styles::DISABLED)
        .add_if(state.error, styles::ERROR)
        .add_if(state.filled, styles::FILLED)
        .add_if(state.required, styles::REQUIRED)
}

// =============================================================================
// FormLabel
// =============================================================================

/// Properties for [`form_label`].
#[derive(Default)]
pub struct FormLabelProps {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub classes: Classes,
    pub label: String,
    /// Id of the labelled control.
    pub html_for: Option<String>,
    /// Explicit state; `None` defers to the form control.
    pub state: StateProps,
    pub form_control: Option<FormControlHandle>,
}

/// Label body shared by FormLabel and InputLabel.
fn create_label(
    props: FormLabelProps,
    extra_classes: impl Fn(&FormControlState) -> ClassNames + 'static,
    extra_attributes: impl Fn(&FormControlState, &mut crate::engine::arrays::style::Attributes) + 'static,
) -> usize {
    let state = merged_state(props.state, props.form_control);
    let label = props.label;
    let overrides = props.classes.clone();

    let state_for_asterisk = state.clone();
    let asterisk_classes = ClassNames::new().slot(&overrides, "FormLabel", "asterisk");
    let index = create_box(BoxProps {
        id: props.id,
        component_type: Some(ComponentType::Label),
        children: Some(Box::new(move || {
            create_text(TextProps {
                content: label.into(),
                ..Default::default()
            });
            let state = state_for_asterisk.clone();
            let state_for_visible = state.clone();
            let classes = asterisk_classes.clone();
            create_text(TextProps {
                content: " *".into(),
                visible: Some(PropValue::getter(move || state_for_visible().required)),
                classes: Some(PropValue::getter(move || {
                    classes.clone().add_if(state().error, styles::ERROR).build()
                })),
                ..Default::default()
            });
        })),
        ..Default::default()
    });

    let class_name = props.class_name;
    let state_for_classes = state.clone();
    bind_class_names(index, move || {
        let current = state_for_classes();
        let names = state_classes(ClassNames::new().slot(&overrides, "FormLabel", "root"), &current);
        names
            .add(extra_classes(&current).to_string())
            .add_opt(class_name.as_deref())
    });

    let html_for = props.html_for;
    bind_attributes(index, move |attrs| {
        insert_attr(attrs, "for", html_for.clone());
        extra_attributes(&state(), attrs);
    });

    index
}

/// Create a form label.
pub fn form_label(props: FormLabelProps) -> Cleanup {
    component_cleanup(create_label(props, |_| ClassNames::new(), |_, _| {}))
}

// =============================================================================
// InputLabel
// =============================================================================

/// Properties for [`input_label`].
#[derive(Default)]
pub struct InputLabelProps {
    pub label: FormLabelProps,
    /// Shrink the label above the input. Defaults to filled or focused.
    pub shrink: Option<bool>,
    pub disable_animation: bool,
}

/// Create an input label and return its index.
pub(crate) fn create_input_label(props: InputLabelProps) -> usize {
    let in_control = props.label.form_control.is_some();
    let overrides = props.label.classes.clone();
    let shrink_prop = props.shrink;
    let animated = !props.disable_animation;
    let shrink = move |state: &FormControlState| shrink_prop.unwrap_or(state.filled || state.focused);

    create_label(
        props.label,
        move |state| {
            ClassNames::new()
                .slot(&overrides, "InputLabel", "root")
                .slot_if(in_control, &overrides, "InputLabel", "formControl")
                .slot_if(animated, &overrides, "InputLabel", "animated")
                .slot_if(shrink(state), &overrides, "InputLabel", "shrink")
                .slot_if(state.size == Size::Small, &overrides, "InputLabel", "marginDense")
                .add(styles::component_class("InputLabel", state.variant.as_str()))
        },
        move |state, attrs| {
            attrs.insert("data-shrink".into(), shrink(state).to_string());
        },
    )
}

/// Create an input label.
pub fn input_label(props: InputLabelProps) -> Cleanup {
    component_cleanup(create_input_label(props))
}

// =============================================================================
// FormHelperText
// =============================================================================

/// Properties for [`form_helper_text`].
#[derive(Default)]
pub struct FormHelperTextProps {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub classes: Classes,
    pub text: String,
    pub state: StateProps,
    pub form_control: Option<FormControlHandle>,
}

/// Create helper text and return its index.
pub(crate) fn create_form_helper_text(props: FormHelperTextProps) -> usize {
    let state = merged_state(props.state, props.form_control);
    let content = props.text;

    let index = create_box(BoxProps {
        id: props.id,
        component_type: Some(ComponentType::HelperText),
        children: Some(Box::new(move || {
            create_text(TextProps {
                content: content.into(),
                ..Default::default()
            });
        })),
        ..Default::default()
    });

    let overrides = props.classes;
    let class_name = props.class_name;
    bind_class_names(index, move || {
        let current = state();
        state_classes(ClassNames::new().slot(&overrides, "FormHelperText", "root"), &current)
            .slot_if(current.size == Size::Small, &overrides, "FormHelperText", "marginDense")
            .slot_if(current.size == Size::Large, &overrides, "FormHelperText", "large")
            .add_opt(class_name.as_deref())
    });

    index
}

/// Create helper text.
pub fn form_helper_text(props: FormHelperTextProps) -> Cleanup {
    component_cleanup(create_form_helper_text(props))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::{core, style, text::collect_text};
    use crate::engine::reset_registry;
    use crate::form_control::{FieldValue, FormControlConfig};
    use crate::state::focus::reset_focus_state;

    fn setup() {
        reset_registry();
        reset_focus_state();
    }

    fn required_control() -> FormControlHandle {
        FormControlHandle::new(FormControlConfig {
            required: Rc::new(|| true),
            ..Default::default()
        })
    }

    #[test]
    fn test_label_follows_form_control() {
        setup();

        let control = required_control();
        let label = create_label(
            FormLabelProps {
                label: "Name".into(),
                form_control: Some(control.clone()),
                ..Default::default()
            },
            |_| ClassNames::new(),
            |_, _| {},
        );

        assert!(style::has_class(label, "SuiFormLabel-root"));
        assert!(style::has_class(label, "Sui-required"));
        assert_eq!(collect_text(label), "Name *");
        assert!(!style::has_class(label, "Sui-focused"));

        control.on_focus();
        assert!(style::has_class(label, "Sui-focused"));
    }

    #[test]
    fn test_explicit_state_wins() {
        setup();

        let label = create_label(
            FormLabelProps {
                label: "Name".into(),
                state: StateProps {
                    required: Some(false),
                    error: Some(true),
                    ..Default::default()
                },
                form_control: Some(required_control()),
                ..Default::default()
            },
            |_| ClassNames::new(),
            |_, _| {},
        );

        assert!(!style::has_class(label, "Sui-required"));
        assert!(style::has_class(label, "Sui-error"));
        let asterisk = core::get_children(label)[1];
        assert!(!core::get_visible(asterisk));
    }

    #[test]
    fn test_input_label_shrinks_when_filled() {
        setup();

        let control = FormControlHandle::new(FormControlConfig::default());
        let label = create_input_label(InputLabelProps {
            label: FormLabelProps {
                label: "Age".into(),
                form_control: Some(control.clone()),
                ..Default::default()
            },
            ..Default::default()
        });

        assert!(style::has_class(label, "SuiInputLabel-formControl"));
        assert!(style::has_class(label, "SuiInputLabel-standard"));
        assert_eq!(style::get_attribute(label, "data-shrink").as_deref(), Some("false"));

        control.check_dirty(Some(&FieldValue::from("10")));
        assert_eq!(style::get_attribute(label, "data-shrink").as_deref(), Some("true"));
        assert!(style::has_class(label, "SuiInputLabel-shrink"));
    }

    #[test]
    fn test_helper_text_error() {
        setup();

        let helper = create_form_helper_text(FormHelperTextProps {
            text: "Required".into(),
            state: StateProps {
                error: Some(true),
                ..Default::default()
            },
            ..Default::default()
        });

        assert_eq!(core::get_component_type(helper), ComponentType::HelperText);
        assert!(style::has_class(helper, "SuiFormHelperText-root"));
        assert!(style::has_class(helper, "Sui-error"));
        assert_eq!(collect_text(helper), "Required");
    }
}
