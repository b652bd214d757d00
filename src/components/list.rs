//! List and ListItem - `ul` / `li` containers.

use std::rc::Rc;

use crate::engine::arrays::interaction;
use crate::primitives::{
    bind_prop, component_cleanup, create_box, static_text, BlurCallback, BoxProps, Children,
    ClickCallback, Cleanup, FocusCallback, KeyCallback, PropValue,
};
use crate::state::focus;
use crate::styles::{self, ClassNames, Classes};
use crate::types::ComponentType;

use super::button_base::{create_button_base, ButtonBaseProps};
use super::{bind_attributes, bind_class_names, flag, insert_attr};

// =============================================================================
// List
// =============================================================================

/// Properties for [`list`].
#[derive(Default)]
pub struct ListProps {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub classes: Classes,
    /// Heading rendered before the items.
    pub subheader: Option<String>,
    pub role: Option<String>,
    pub tab_index: Option<PropValue<Option<i32>>>,
    pub visible: Option<PropValue<bool>>,
    /// Extra attributes (`aria-labelledby`, ...).
    pub attributes: Vec<(String, String)>,
    pub on_key: Option<KeyCallback>,
    pub children: Option<Children>,
}

/// Create a list and return its index.
pub(crate) fn create_list(props: ListProps) -> usize {
    let subheader = props.subheader;
    let children = props.children;
    let class_names = ClassNames::new()
        .slot(&props.classes, "List", "root")
        .slot_if(subheader.is_some(), &props.classes, "List", "subheader")
        .add_opt(props.class_name.as_deref());

    let index = create_box(BoxProps {
        id: props.id,
        component_type: Some(ComponentType::List),
        visible: props.visible,
        classes: Some(class_names.build().into()),
        tab_index: props.tab_index,
        on_key: props.on_key,
        children: Some(Box::new(move || {
            if let Some(subheader) = subheader {
                static_text(subheader);
            }
            if let Some(children) = children {
                children();
            }
        })),
        ..Default::default()
    });

    let role = props.role;
    let attributes = props.attributes;
    bind_attributes(index, move |attrs| {
        insert_attr(attrs, "role", role.clone());
        attrs.extend(attributes.iter().cloned());
    });

    index
}

/// Create a list.
pub fn list(props: ListProps) -> Cleanup {
    component_cleanup(create_list(props))
}

// =============================================================================
// ListItem
// =============================================================================

/// Properties for [`list_item`].
#[derive(Default)]
pub struct ListItemProps {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub classes: Classes,
    pub auto_focus: bool,
    /// Render as a ButtonBase (focusable, activatable).
    pub button: bool,
    pub dense: bool,
    pub disabled: Option<PropValue<bool>>,
    pub disable_gutters: bool,
    pub divider: bool,
    pub align_items_flex_start: bool,
    pub selected: Option<PropValue<bool>>,
    pub role: Option<String>,
    pub tab_index: Option<PropValue<Option<i32>>>,
    /// Extra attributes (`data-value`, `aria-selected`, ...).
    pub attributes: Option<Rc<dyn Fn() -> Vec<(String, String)>>>,
    pub label: Option<String>,
    pub on_click: Option<ClickCallback>,
    pub on_key: Option<KeyCallback>,
    pub on_focus: Option<FocusCallback>,
    pub on_blur: Option<BlurCallback>,
    pub children: Option<Children>,
}

/// Create a list item and return its index.
pub(crate) fn create_list_item(props: ListItemProps) -> usize {
    let disabled = flag(props.disabled);
    let selected = flag(props.selected);
    let overrides = props.classes;
    let class_name = props.class_name;
    let (button, dense, disable_gutters, divider, flex_start) = (
        props.button,
        props.dense,
        props.disable_gutters,
        props.divider,
        props.align_items_flex_start,
    );

    let disabled_for_classes = disabled.clone();
    let selected_for_classes = selected.clone();
    let class_names = move || {
        ClassNames::new()
            .slot(&overrides, "ListItem", "root")
            .slot_if(!disable_gutters, &overrides, "ListItem", "gutters")
            .slot_if(divider, &overrides, "ListItem", "divider")
            .slot_if(button, &overrides, "ListItem", "button")
            .slot_if(dense, &overrides, "ListItem", "dense")
            .slot_if(flex_start, &overrides, "ListItem", "alignItemsFlexStart")
            .add_if(disabled_for_classes(), styles::DISABLED)
            .add_if(selected_for_classes(), styles::SELECTED)
            .add_opt(class_name.as_deref())
    };

    let label = props.label;
    let children = props.children;
    let body: Children = Box::new(move || {
        if let Some(label) = label {
            static_text(label);
        }
        if let Some(children) = children {
            children();
        }
    });

    let disabled_prop = PropValue::getter({
        let disabled = disabled.clone();
        move || disabled()
    });
    let selected_prop = PropValue::getter(move || selected());

    let index = if button {
        create_button_base(ButtonBaseProps {
            id: props.id,
            component_type: Some(ComponentType::ListItem),
            extra_classes: Some(Rc::new(class_names)),
            disabled: Some(disabled_prop),
            selected: Some(selected_prop),
            tab_index: props.tab_index,
            on_click: props.on_click,
            on_key: props.on_key,
            on_focus: props.on_focus,
            on_blur: props.on_blur,
            children: Some(body),
            ..Default::default()
        })
    } else {
        let index = create_box(BoxProps {
            id: props.id,
            component_type: Some(ComponentType::ListItem),
            disabled: Some(disabled_prop),
            selected: Some(selected_prop),
            on_key: props.on_key,
            on_focus: props.on_focus,
            on_blur: props.on_blur,
            children: Some(body),
            ..Default::default()
        });
        if let Some(tab_index) = props.tab_index {
            bind_prop!(tab_index, interaction::set_tab_index, interaction::set_tab_index_getter, index);
        }
        bind_class_names(index, move || class_names().add_if(focus::is_focused(index), styles::FOCUS_VISIBLE));
        index
    };

    // Role and extra attributes (the button base only knows about `disabled`)
    let role = props.role;
    let extra = props.attributes;
    let disabled_for_attrs = disabled.clone();
    bind_attributes(index, move |attrs| {
        insert_attr(attrs, "role", role.clone());
        if button && disabled_for_attrs() {
            attrs.insert("disabled".into(), String::new());
        }
        if let Some(extra) = &extra {
            attrs.extend(extra());
        }
    });

    // After the children so nested content exists when focus lands
    if props.auto_focus && !focus::focus(index) {
        tracing::warn!(index, "unable to focus a list item that cannot take focus");
    }

    index
}

/// Create a list item.
pub fn list_item(props: ListItemProps) -> Cleanup {
    component_cleanup(create_list_item(props))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::{core, style, text::collect_text};
    use crate::engine::reset_registry;
    use crate::state::focus::reset_focus_state;
    use crate::state::keyboard::reset_keyboard_state;
    use spark_signals::signal;

    fn setup() {
        reset_registry();
        reset_focus_state();
        reset_keyboard_state();
    }

    #[test]
    fn test_list_with_items() {
        setup();

        let _cleanup = list(ListProps {
            subheader: Some("Fruit".into()),
            role: Some("menu".into()),
            children: Some(Box::new(|| {
                list_item(ListItemProps {
                    label: Some("Apple".into()),
                    ..Default::default()
                });
                list_item(ListItemProps {
                    label: Some("Banana".into()),
                    divider: true,
                    ..Default::default()
                });
            })),
            ..Default::default()
        });

        assert_eq!(core::get_component_type(0), ComponentType::List);
        assert!(style::has_class(0, "SuiList-subheader"));
        assert_eq!(style::get_attribute(0, "role").as_deref(), Some("menu"));

        // 0 list, 1 subheader text, 2 item, 3 text, 4 item, 5 text
        assert_eq!(core::get_children(0), vec![1, 2, 4]);
        assert_eq!(collect_text(2), "Apple");
        assert!(style::has_class(4, "SuiListItem-divider"));
        assert!(style::has_class(4, "SuiListItem-gutters"));
    }

    #[test]
    fn test_item_selected_is_reactive() {
        setup();

        let selected = signal(false);
        let _cleanup = list_item(ListItemProps {
            selected: Some(selected.clone().into()),
            ..Default::default()
        });

        assert!(!style::has_class(0, styles::SELECTED));
        selected.set(true);
        assert!(style::has_class(0, styles::SELECTED));
        assert!(interaction::get_selected(0));
    }

    #[test]
    fn test_button_item_is_focusable() {
        setup();

        let _cleanup = list_item(ListItemProps {
            button: true,
            auto_focus: true,
            role: Some("option".into()),
            ..Default::default()
        });

        assert_eq!(core::get_component_type(0), ComponentType::ListItem);
        assert!(focus::is_focused(0));
        assert!(style::has_class(0, "SuiListItem-button"));
        assert!(style::has_class(0, styles::FOCUS_VISIBLE));
        assert_eq!(style::get_attribute(0, "role").as_deref(), Some("option"));
    }

    #[test]
    fn test_plain_item_without_marker_cannot_auto_focus() {
        setup();

        let _cleanup = list_item(ListItemProps {
            auto_focus: true,
            ..Default::default()
        });
        assert!(!focus::has_focus());
    }
}
