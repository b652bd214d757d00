//! ButtonBase - focusable, activatable container.
//!
//! Enter and Space fire `on_click`. Buttons, list item buttons, tabs and
//! switches are built on it.

use std::rc::Rc;

use crate::engine::arrays::interaction;
use crate::primitives::{
    component_cleanup, create_box, static_text, BoxProps, Children, ClickCallback, Cleanup,
    FocusCallback, BlurCallback, KeyCallback, PropValue,
};
use crate::state::focus;
use crate::styles::{self, ClassNames};
use crate::types::ComponentType;

use super::{bind_attributes, bind_class_names, flag, insert_attr, on_key_at};

/// Properties for [`button_base`].
#[derive(Default)]
pub struct ButtonBaseProps {
    pub id: Option<String>,
    /// Extra class names.
    pub class_name: Option<String>,
    /// Reactive extra class names (composed by wrapping components).
    pub extra_classes: Option<Rc<dyn Fn() -> ClassNames>>,
    /// Element kind (default: Button).
    pub component_type: Option<ComponentType>,
    pub role: Option<String>,
    pub disabled: Option<PropValue<bool>>,
    pub selected: Option<PropValue<bool>>,
    /// Focus marker. Defaults to 0, or none while disabled.
    pub tab_index: Option<PropValue<Option<i32>>>,
    pub auto_focus: bool,
    /// Text rendered before the children.
    pub label: Option<String>,
    pub on_click: Option<ClickCallback>,
    /// Runs before activation; return true to suppress it.
    pub on_key: Option<KeyCallback>,
    pub on_focus: Option<FocusCallback>,
    pub on_blur: Option<BlurCallback>,
    pub children: Option<Children>,
}

/// Create a button base and return its index.
pub(crate) fn create_button_base(props: ButtonBaseProps) -> usize {
    let disabled = flag(props.disabled);
    let label = props.label;
    let children = props.children;

    let index = create_box(BoxProps {
        id: props.id,
        component_type: Some(props.component_type.unwrap_or(ComponentType::Button)),
        selected: props.selected,
        on_focus: props.on_focus,
        on_blur: props.on_blur,
        children: Some(Box::new(move || {
            if let Some(label) = label {
                static_text(label);
            }
            if let Some(children) = children {
                children();
            }
        })),
        ..Default::default()
    });

    // State
    let disabled_for_state = disabled.clone();
    interaction::set_disabled_getter(index, move || disabled_for_state());
    match props.tab_index {
        Some(tab_index) => {
            let tab_index = tab_index.into_getter();
            interaction::set_tab_index_getter(index, move || tab_index());
        }
        None => {
            let disabled = disabled.clone();
            interaction::set_tab_index_getter(index, move || if disabled() { None } else { Some(0) });
        }
    }

    // Presentation
    let class_name = props.class_name;
    let extra = props.extra_classes;
    let disabled_for_classes = disabled.clone();
    bind_class_names(index, move || {
        let base = ClassNames::new().add("SuiButtonBase-root");
        let base = match &extra {
            Some(extra) => base.add(extra().to_string()),
            None => base,
        };
        base.add_opt(class_name.as_deref())
            .add_if(disabled_for_classes(), styles::DISABLED)
            .add_if(focus::is_focused(index), styles::FOCUS_VISIBLE)
    });

    let role = props.role;
    let disabled_for_attrs = disabled.clone();
    bind_attributes(index, move |attrs| {
        insert_attr(attrs, "role", role.clone());
        if disabled_for_attrs() {
            attrs.insert("disabled".into(), String::new());
        }
    });

    // Activation
    let on_key = props.on_key;
    let on_click = props.on_click;
    on_key_at(index, move |event| {
        if on_key.as_ref().is_some_and(|handler| handler(event)) {
            return true;
        }
        if disabled() {
            return false;
        }
        match (event.key.as_str(), &on_click) {
            ("Enter" | " ", Some(on_click)) => {
                on_click();
                true
            }
            _ => false,
        }
    });

    if props.auto_focus && !focus::focus(index) {
        tracing::debug!(index, "auto focus skipped: button cannot take focus");
    }

    index
}

/// Create a button base.
pub fn button_base(props: ButtonBaseProps) -> Cleanup {
    component_cleanup(create_button_base(props))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::style;
    use crate::engine::arrays::text::collect_text;
    use crate::engine::reset_registry;
    use crate::state::focus::reset_focus_state;
    use crate::state::keyboard::{dispatch_focused, reset_keyboard_state, KeyboardEvent};
    use std::cell::Cell;

    fn setup() {
        reset_registry();
        reset_focus_state();
        reset_keyboard_state();
    }

    fn press(key: &str) -> bool {
        dispatch_focused(focus::get_focused_index(), &KeyboardEvent::new(key))
    }

    #[test]
    fn test_enter_and_space_click() {
        setup();

        let clicks = Rc::new(Cell::new(0));
        let clicks_clone = clicks.clone();
        let index = create_button_base(ButtonBaseProps {
            label: Some("Go".into()),
            on_click: Some(Rc::new(move || clicks_clone.set(clicks_clone.get() + 1))),
            auto_focus: true,
            ..Default::default()
        });

        assert!(focus::is_focused(index));
        assert!(press("Enter"));
        assert!(press(" "));
        assert!(!press("x"));
        assert_eq!(clicks.get(), 2);
        assert_eq!(collect_text(index), "Go");
    }

    #[test]
    fn test_disabled_has_no_focus_marker() {
        setup();

        let index = create_button_base(ButtonBaseProps {
            disabled: Some(true.into()),
            ..Default::default()
        });

        assert_eq!(interaction::get_tab_index(index), None);
        assert!(!focus::focus(index));
        assert!(style::has_class(index, styles::DISABLED));
        assert_eq!(style::get_attribute(index, "disabled").as_deref(), Some(""));
    }

    #[test]
    fn test_focus_visible_class_follows_focus() {
        setup();

        let index = create_button_base(ButtonBaseProps::default());
        assert!(!style::has_class(index, styles::FOCUS_VISIBLE));
        focus::focus(index);
        assert!(style::has_class(index, styles::FOCUS_VISIBLE));
    }

    #[test]
    fn test_on_key_can_suppress_activation() {
        setup();

        let clicks = Rc::new(Cell::new(0));
        let clicks_clone = clicks.clone();
        create_button_base(ButtonBaseProps {
            on_click: Some(Rc::new(move || clicks_clone.set(clicks_clone.get() + 1))),
            on_key: Some(Rc::new(|event: &KeyboardEvent| event.key == "Enter")),
            auto_focus: true,
            ..Default::default()
        });

        assert!(press("Enter"));
        assert_eq!(clicks.get(), 0);
        assert!(press(" "));
        assert_eq!(clicks.get(), 1);
    }
}
