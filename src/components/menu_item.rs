//! MenuItem - a button list item that registers with its menu list.
//!
//! Disabled items carry no focus marker unless one is given explicitly.
//! Enabled items default to `-1`, except the active item of a
//! selected-menu list which gets `0` so it is reachable with Tab.

use std::rc::Rc;

use crate::engine::arrays::interaction;
use crate::primitives::{
    component_cleanup, BlurCallback, Children, ClickCallback, Cleanup, FocusCallback, KeyCallback, PropValue,
};
use crate::state::focus;
use crate::styles::{ClassNames, Classes};

use super::flag;
use super::list::{create_list_item, ListItemProps};
use super::menu_list::{self, enclosing_menu_list, MenuListVariant};

/// Properties for [`menu_item`].
#[derive(Default)]
pub struct MenuItemProps {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub classes: Classes,
    /// Value reported to a Select when this item is chosen.
    pub value: Option<String>,
    pub label: Option<String>,
    pub disabled: Option<PropValue<bool>>,
    pub selected: Option<PropValue<bool>>,
    pub dense: bool,
    pub disable_gutters: bool,
    pub divider: bool,
    /// Role override (default: `menuitem`, or the list's item role).
    pub role: Option<String>,
    /// Explicit focus marker.
    pub tab_index: Option<i32>,
    pub auto_focus: bool,
    pub on_click: Option<ClickCallback>,
    pub on_key: Option<KeyCallback>,
    pub on_focus: Option<FocusCallback>,
    pub on_blur: Option<BlurCallback>,
    pub children: Option<Children>,
}

/// Create a menu item and return its index.
pub(crate) fn create_menu_item(props: MenuItemProps) -> usize {
    let list = enclosing_menu_list();
    let settings = list.map(menu_list::item_settings).unwrap_or_default();

    let role = props
        .role
        .or(settings.role.clone())
        .unwrap_or_else(|| "menuitem".to_string());
    let value = props.value;

    let explicit_selected = flag(props.selected);
    let is_value_selected = settings.is_value_selected.clone();
    let value_for_selected = value.clone();
    let selected = move || {
        explicit_selected()
            || match (&is_value_selected, &value_for_selected) {
                (Some(predicate), Some(value)) => predicate(value),
                _ => false,
            }
    };
    let selected = Rc::new(selected);

    let class_name = ClassNames::new()
        .slot(&props.classes, "MenuItem", "root")
        .slot_if(!props.disable_gutters, &props.classes, "MenuItem", "gutters")
        .slot_if(props.dense, &props.classes, "MenuItem", "dense")
        .add_opt(props.class_name.as_deref())
        .to_string();

    let selected_for_attrs = selected.clone();
    let is_option = role == "option";
    let value_for_attrs = value.clone();
    let attributes: Rc<dyn Fn() -> Vec<(String, String)>> = Rc::new(move || {
        let mut attrs = Vec::new();
        if let Some(value) = &value_for_attrs {
            attrs.push(("data-value".to_string(), value.clone()));
        }
        if is_option {
            attrs.push(("aria-selected".to_string(), selected_for_attrs().to_string()));
        }
        attrs
    });

    let item_slot = Rc::new(std::cell::Cell::new(None::<usize>));
    let user_click = props.on_click;
    let click_slot = item_slot.clone();
    let on_click: ClickCallback = Rc::new(move || {
        if let Some(on_click) = &user_click {
            on_click();
        }
        if let (Some(list), Some(item)) = (list, click_slot.get()) {
            menu_list::item_clicked(list, item);
        }
    });

    let disabled = flag(props.disabled);
    let selected_prop = PropValue::getter({
        let selected = selected.clone();
        move || selected()
    });
    let disabled_prop = PropValue::getter({
        let disabled = disabled.clone();
        move || disabled()
    });

    let index = create_list_item(ListItemProps {
        id: props.id,
        class_name: Some(class_name),
        button: true,
        dense: props.dense,
        disabled: Some(disabled_prop),
        disable_gutters: props.disable_gutters,
        divider: props.divider,
        selected: Some(selected_prop),
        role: Some(role),
        attributes: Some(attributes),
        label: props.label,
        on_click: Some(on_click),
        on_key: props.on_key,
        on_focus: props.on_focus,
        on_blur: props.on_blur,
        children: props.children,
        ..Default::default()
    });
    item_slot.set(Some(index));

    if let Some(list) = list {
        menu_list::register_item(list, index);
    }

    let explicit_tab_index = props.tab_index;
    interaction::set_tab_index_getter(index, move || {
        if disabled() {
            return explicit_tab_index;
        }
        explicit_tab_index.or_else(|| {
            let active = list.is_some_and(|list| {
                menu_list::variant(list) == MenuListVariant::SelectedMenu
                    && menu_list::active_item(list) == Some(index)
            });
            Some(if active { 0 } else { -1 })
        })
    });

    if props.auto_focus && !focus::focus(index) {
        tracing::warn!(index, "unable to focus a menu item that cannot take focus");
    }

    index
}

/// Create a menu item.
pub fn menu_item(props: MenuItemProps) -> Cleanup {
    component_cleanup(create_menu_item(props))
}
