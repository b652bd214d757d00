//! Button - a styled ButtonBase.
//!
//! Classes: `SuiButton-root`, `SuiButton-<variant>`, `SuiButton-<variant><Color>`
//! for non-default colors, `SuiButton-fullWidth`, `SuiButton-size<Size>` for
//! non-medium sizes.

use std::rc::Rc;

use crate::primitives::{component_cleanup, BlurCallback, Children, ClickCallback, Cleanup, FocusCallback, PropValue};
use crate::styles::{capitalize, ClassNames, Classes};
use crate::types::{ButtonVariant, ColorRole, Size};

use super::button_base::{create_button_base, ButtonBaseProps};

const NAME: &str = "Button";

/// Properties for [`button`].
#[derive(Default)]
pub struct ButtonProps {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub classes: Classes,
    pub variant: ButtonVariant,
    pub color: ColorRole,
    pub size: Size,
    pub full_width: bool,
    pub disabled: Option<PropValue<bool>>,
    pub auto_focus: bool,
    pub label: Option<String>,
    pub on_click: Option<ClickCallback>,
    pub on_focus: Option<FocusCallback>,
    pub on_blur: Option<BlurCallback>,
    pub children: Option<Children>,
}

/// Class list of a button root.
pub(crate) fn button_classes(props: &ButtonProps) -> ClassNames {
    let variant = props.variant.as_str();
    ClassNames::new()
        .slot(&props.classes, NAME, "root")
        .slot(&props.classes, NAME, variant)
        .slot_if(
            props.color != ColorRole::Default,
            &props.classes,
            NAME,
            &format!("{variant}{}", capitalize(props.color.as_str())),
        )
        .slot_if(props.full_width, &props.classes, NAME, "fullWidth")
        .slot_if(
            props.size != Size::Medium,
            &props.classes,
            NAME,
            &format!("size{}", capitalize(props.size.as_str())),
        )
        .add_opt(props.class_name.as_deref())
}

/// Create a button.
pub fn button(props: ButtonProps) -> Cleanup {
    let classes = button_classes(&props);
    let index = create_button_base(ButtonBaseProps {
        id: props.id,
        extra_classes: Some(Rc::new(move || classes.clone())),
        disabled: props.disabled,
        auto_focus: props.auto_focus,
        label: props.label,
        on_click: props.on_click,
        on_focus: props.on_focus,
        on_blur: props.on_blur,
        children: props.children,
        ..Default::default()
    });
    component_cleanup(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::{core, style};
    use crate::engine::reset_registry;
    use crate::state::focus::reset_focus_state;
    use crate::state::keyboard::reset_keyboard_state;
    use crate::types::ComponentType;

    fn setup() {
        reset_registry();
        reset_focus_state();
        reset_keyboard_state();
    }

    #[test]
    fn test_default_classes() {
        let names = button_classes(&ButtonProps::default()).build();
        assert_eq!(names, vec!["SuiButton-root", "SuiButton-contained"]);
    }

    #[test]
    fn test_variant_color_size_classes() {
        let names = button_classes(&ButtonProps {
            variant: ButtonVariant::Outlined,
            color: ColorRole::Primary,
            size: Size::Small,
            full_width: true,
            class_name: Some("mine".into()),
            classes: Classes::new().with("root", "extra"),
            ..Default::default()
        })
        .build();
        assert_eq!(
            names,
            vec![
                "SuiButton-root",
                "extra",
                "SuiButton-outlined",
                "SuiButton-outlinedPrimary",
                "SuiButton-fullWidth",
                "SuiButton-sizeSmall",
                "mine",
            ]
        );
    }

    #[test]
    fn test_button_renders_as_button() {
        setup();

        let cleanup = button(ButtonProps {
            label: Some("Save".into()),
            disabled: Some(true.into()),
            ..Default::default()
        });

        assert_eq!(core::get_component_type(0), ComponentType::Button);
        assert!(style::has_class(0, "SuiButtonBase-root"));
        assert!(style::has_class(0, "SuiButton-root"));
        assert!(style::has_class(0, "Sui-disabled"));
        cleanup();
    }
}
