//! Menu - popup wrapper around a MenuList.
//!
//! The menu paper is visible only while `open`. Opening traps focus inside
//! the list and moves focus to the active item (or the list itself);
//! closing releases the trap and restores the previous focus.

use std::cell::Cell;
use std::rc::Rc;

use spark_signals::effect;

use crate::engine::on_destroy;
use crate::primitives::{component_cleanup, create_box, BoxProps, Children, Cleanup, KeyCallback, PropValue};
use crate::state::focus;
use crate::state::keyboard::KeyboardEvent;
use crate::styles::{ClassNames, Classes};
use crate::types::ComponentType;

use super::flag;
use super::menu_list::{self, create_menu_list, ItemSettings, MenuListProps, MenuListVariant};

/// Why a menu asked to be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    TabKeyDown,
    EscapeKeyDown,
}

/// Close request callback.
pub type CloseCallback = Rc<dyn Fn(CloseReason)>;

/// Properties for [`menu`].
pub struct MenuProps {
    pub id: Option<String>,
    pub class_name: Option<String>,
    /// Slot overrides: `paper`, `list`.
    pub classes: Classes,
    pub open: PropValue<bool>,
    pub on_close: Option<CloseCallback>,
    /// Move focus into the menu when it opens (default: true).
    pub auto_focus: bool,
    /// Focus the list instead of the active item.
    pub disable_auto_focus_item: bool,
    pub variant: MenuListVariant,
    pub disabled_items_focusable: bool,
    pub disable_list_wrap: bool,
    /// Role of the inner list (default: `menu`).
    pub list_role: Option<String>,
    /// Extra attributes for the inner list.
    pub list_attributes: Vec<(String, String)>,
    pub on_key_down: Option<KeyCallback>,
    pub item_settings: ItemSettings,
    pub children: Option<Children>,
}

impl Default for MenuProps {
    fn default() -> Self {
        Self {
            id: None,
            class_name: None,
            classes: Classes::default(),
            open: PropValue::Static(false),
            on_close: None,
            auto_focus: true,
            disable_auto_focus_item: false,
            variant: MenuListVariant::default(),
            disabled_items_focusable: false,
            disable_list_wrap: false,
            list_role: None,
            list_attributes: Vec::new(),
            on_key_down: None,
            item_settings: ItemSettings::default(),
            children: None,
        }
    }
}

/// Indices of a created menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MenuParts {
    pub paper: usize,
    pub list: usize,
}

/// Create a menu and return its paper and list indices.
pub(crate) fn create_menu(props: MenuProps) -> MenuParts {
    let open = flag(Some(props.open));
    let on_close = props.on_close;
    let on_key_down = props.on_key_down;

    let list_key: KeyCallback = Rc::new(move |event: &KeyboardEvent| {
        let reason = match event.key.as_str() {
            "Tab" => Some(CloseReason::TabKeyDown),
            "Escape" => Some(CloseReason::EscapeKeyDown),
            _ => None,
        };
        if let Some(reason) = reason {
            tracing::debug!(?reason, "menu close requested");
            if let Some(on_close) = &on_close {
                on_close(reason);
            }
            return true;
        }
        on_key_down.as_ref().is_some_and(|handler| handler(event))
    });

    let paper_classes = ClassNames::new()
        .slot(&props.classes, "Menu", "paper")
        .add_opt(props.class_name.as_deref())
        .build();
    let list_class = ClassNames::new().slot(&props.classes, "Menu", "list").to_string();

    let list_index = Rc::new(Cell::new(None::<usize>));
    let list_slot = list_index.clone();
    let list_props = MenuListProps {
        class_name: Some(list_class),
        variant: props.variant,
        disabled_items_focusable: props.disabled_items_focusable,
        disable_list_wrap: props.disable_list_wrap,
        role: props.list_role,
        attributes: props.list_attributes,
        on_key_down: Some(list_key),
        item_settings: props.item_settings,
        children: props.children,
        ..Default::default()
    };

    let open_for_visible = open.clone();
    let paper = create_box(BoxProps {
        id: props.id,
        component_type: Some(ComponentType::Menu),
        classes: Some(paper_classes.into()),
        visible: Some(PropValue::getter(move || open_for_visible())),
        children: Some(Box::new(move || {
            list_slot.set(Some(create_menu_list(list_props)));
        })),
        ..Default::default()
    });

    let Some(list) = list_index.get() else {
        return MenuParts { paper, list: paper };
    };

    let auto_focus = props.auto_focus;
    let auto_focus_item = !props.disable_auto_focus_item;
    let was_open: Rc<Cell<Option<bool>>> = Rc::new(Cell::new(None));
    let stop = effect(move || {
        let now = open();
        let before = was_open.replace(Some(now));
        if before == Some(now) {
            return;
        }
        if now {
            tracing::debug!(list, "menu opened");
            focus::save_focus_to_history();
            focus::push_focus_trap(list);
            if auto_focus {
                let target = auto_focus_item.then(|| menu_list::active_item(list)).flatten();
                focus::focus(target.unwrap_or(list));
            }
        } else if before == Some(true) {
            tracing::debug!(list, "menu closed");
            focus::remove_focus_trap(list);
            if !focus::restore_focus_from_history() && focus::contains_focus(list) {
                focus::blur();
            }
        }
    });
    on_destroy(paper, stop);

    MenuParts { paper, list }
}

/// Create a menu.
pub fn menu(props: MenuProps) -> Cleanup {
    component_cleanup(create_menu(props).paper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::button::{button, ButtonProps};
    use crate::components::menu_item::{create_menu_item, MenuItemProps};
    use crate::components::menu_list::reset_menu_lists;
    use crate::engine::arrays::{core, style, text::collect_text};
    use crate::engine::reset_registry;
    use crate::state::focus::reset_focus_state;
    use crate::state::keyboard::{dispatch_focused, reset_keyboard_state};
    use spark_signals::signal;
    use std::cell::RefCell;

    fn setup() {
        reset_registry();
        reset_focus_state();
        reset_keyboard_state();
        reset_menu_lists();
    }

    fn press(key: &str) -> bool {
        dispatch_focused(focus::get_focused_index(), &KeyboardEvent::new(key))
    }

    fn items(labels: &'static [&'static str]) -> Children {
        Box::new(move || {
            for label in labels {
                create_menu_item(MenuItemProps {
                    label: Some((*label).into()),
                    ..Default::default()
                });
            }
        })
    }

    #[test]
    fn test_open_focuses_first_item_and_close_restores() {
        setup();

        let _opener = button(ButtonProps {
            label: Some("Open".into()),
            auto_focus: true,
            ..Default::default()
        });
        let opener = focus::focused();
        assert!(opener.is_some());

        let open = signal(false);
        let parts = create_menu(MenuProps {
            open: open.clone().into(),
            children: Some(items(&["Profile", "Logout"])),
            ..Default::default()
        });

        assert!(!core::is_rendered(parts.list));
        assert!(style::has_class(parts.paper, "SuiMenu-paper"));
        assert!(style::has_class(parts.list, "SuiMenu-list"));

        open.set(true);
        assert!(core::is_rendered(parts.list));
        assert_eq!(focus::focused().map(collect_text).as_deref(), Some("Profile"));
        assert_eq!(focus::get_focus_trap_container(), Some(parts.list));

        press("ArrowDown");
        assert_eq!(focus::focused().map(collect_text).as_deref(), Some("Logout"));

        open.set(false);
        assert_eq!(focus::focused(), opener);
        assert!(!focus::is_focus_trapped());
    }

    #[test]
    fn test_tab_and_escape_request_close() {
        setup();

        let reasons = Rc::new(RefCell::new(Vec::new()));
        let reasons_clone = reasons.clone();
        create_menu(MenuProps {
            open: true.into(),
            on_close: Some(Rc::new(move |reason| reasons_clone.borrow_mut().push(reason))),
            children: Some(items(&["One"])),
            ..Default::default()
        });

        assert!(press("Tab"));
        assert!(press("Escape"));
        assert_eq!(*reasons.borrow(), vec![CloseReason::TabKeyDown, CloseReason::EscapeKeyDown]);
    }

    #[test]
    fn test_disable_auto_focus_item_focuses_list() {
        setup();

        let parts = create_menu(MenuProps {
            open: true.into(),
            disable_auto_focus_item: true,
            children: Some(items(&["One", "Two"])),
            ..Default::default()
        });

        assert!(focus::is_focused(parts.list));
        press("ArrowUp");
        assert_eq!(focus::focused().map(collect_text).as_deref(), Some("Two"));
    }

    #[test]
    fn test_auto_focus_off_leaves_focus() {
        setup();

        create_menu(MenuProps {
            open: true.into(),
            auto_focus: false,
            children: Some(items(&["One"])),
            ..Default::default()
        });

        assert_eq!(focus::focused(), None);
    }
}
