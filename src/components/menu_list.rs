//! MenuList - keyboard navigable list of menu items.
//!
//! Items register themselves with their nearest enclosing menu list when
//! they are created. On every key event the list snapshots its items into
//! navigation entries (disabled, focus marker, text) and lets
//! [`navigation`](crate::navigation) decide where focus goes:
//!
//! - ArrowDown / ArrowUp: next / previous item (wrapping unless
//!   `disable_list_wrap`)
//! - Home / End: first / last item
//! - Printable characters: typeahead
//!
//! The caller's `on_key_down` runs after the built-in handling.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Instant;

use crate::engine::arrays::{core, interaction, style, text::collect_text};
use crate::engine::{get_current_parent_index, on_destroy};
use crate::error::warn_misuse;
use crate::navigation::{move_focus, Direction, Entry, Origin, Typeahead, TypeaheadOutcome};
use crate::primitives::{component_cleanup, Children, Cleanup, KeyCallback, PropValue};
use crate::state::focus;
use crate::state::keyboard::KeyboardEvent;
use crate::styles::Classes;
use crate::types::ComponentType;

use super::enclosing;
use super::list::{create_list, ListProps};

/// Which item a menu list treats as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuListVariant {
    /// The first enabled item.
    Menu,
    /// The last selected enabled item, else the first enabled item.
    #[default]
    SelectedMenu,
}

/// Called with the item index when an item is activated.
pub type ItemHook = Rc<dyn Fn(usize)>;

/// Whether an item value is currently chosen.
pub type ValuePredicate = Rc<dyn Fn(&str) -> bool>;

/// Settings a list imposes on its items (used by Select).
#[derive(Clone, Default)]
pub struct ItemSettings {
    pub role: Option<String>,
    pub is_value_selected: Option<ValuePredicate>,
    pub on_item_click: Option<ItemHook>,
}

struct ListState {
    items: Vec<usize>,
    variant: MenuListVariant,
    settings: ItemSettings,
}

thread_local! {
    static LISTS: RefCell<HashMap<usize, ListState>> = RefCell::new(HashMap::new());
}

// =============================================================================
// Item registry
// =============================================================================

/// Whether `index` is a menu list.
pub fn is_menu_list(index: usize) -> bool {
    LISTS.with(|lists| lists.borrow().contains_key(&index))
}

/// The menu list enclosing the component being created.
pub(crate) fn enclosing_menu_list() -> Option<usize> {
    enclosing(is_menu_list)
}

/// Register `item` with `list`. The item is dropped from the list when it
/// is released.
pub(crate) fn register_item(list: usize, item: usize) {
    LISTS.with(|lists| {
        if let Some(state) = lists.borrow_mut().get_mut(&list) {
            state.items.push(item);
        }
    });
    on_destroy(item, move || {
        LISTS.with(|lists| {
            if let Some(state) = lists.borrow_mut().get_mut(&list) {
                state.items.retain(|&i| i != item);
            }
        });
    });
}

/// Registered items in order.
pub fn items(list: usize) -> Vec<usize> {
    LISTS.with(|lists| lists.borrow().get(&list).map(|s| s.items.clone()).unwrap_or_default())
}

pub(crate) fn variant(list: usize) -> MenuListVariant {
    LISTS.with(|lists| lists.borrow().get(&list).map(|s| s.variant).unwrap_or_default())
}

pub(crate) fn item_settings(list: usize) -> ItemSettings {
    LISTS.with(|lists| lists.borrow().get(&list).map(|s| s.settings.clone()).unwrap_or_default())
}

/// Run the list's item hook (Select uses it to pick values).
pub(crate) fn item_clicked(list: usize, item: usize) {
    if let Some(hook) = item_settings(list).on_item_click {
        hook(item);
    }
}

/// The item that receives the initial focus marker.
pub fn active_item(list: usize) -> Option<usize> {
    let variant = variant(list);
    let mut active = None;
    for item in items(list) {
        if interaction::get_disabled(item) {
            continue;
        }
        if variant == MenuListVariant::SelectedMenu && interaction::get_selected(item) {
            active = Some(item);
        } else if active.is_none() {
            active = Some(item);
        }
    }
    active
}

/// Clear all list registries (for testing).
pub fn reset_menu_lists() {
    LISTS.with(|lists| lists.borrow_mut().clear());
}

// =============================================================================
// Navigation
// =============================================================================

fn is_disabled(item: usize) -> bool {
    interaction::get_disabled(item) || style::get_attribute(item, "aria-disabled").as_deref() == Some("true")
}

/// Snapshot `items` as navigation entries.
pub(crate) fn entries(items: &[usize]) -> Vec<Entry> {
    items
        .iter()
        .map(|&item| Entry {
            disabled: is_disabled(item),
            focusable: interaction::get_focusable(item) && core::is_rendered(item),
            text: collect_text(item),
        })
        .collect()
}

/// Where focus currently is, relative to `list`.
fn origin(list: usize, items: &[usize]) -> Origin {
    let Some(current) = focus::focused() else {
        return Origin::Nothing;
    };
    if current == list {
        return Origin::List;
    }
    items
        .iter()
        .position(|&item| core::is_within(current, item))
        .map_or(Origin::Nothing, Origin::Item)
}

struct Navigation {
    disable_list_wrap: bool,
    disabled_items_focusable: bool,
    typeahead: RefCell<Typeahead>,
}

impl Navigation {
    fn focus_item(items: &[usize], target: Option<usize>) {
        if let Some(&item) = target.and_then(|t| items.get(t)) {
            tracing::debug!(item, "menu list focus");
            focus::focus(item);
        }
    }

    /// Built-in key handling. Returns true when the key was consumed.
    fn handle_key(&self, list: usize, event: &KeyboardEvent) -> bool {
        let items = items(list);
        let entries = entries(&items);
        let current = origin(list, &items);
        let step = |from: Origin, direction: Direction| {
            move_focus(&entries, from, direction, self.disable_list_wrap, self.disabled_items_focusable, None)
        };

        match event.key.as_str() {
            "ArrowDown" => Self::focus_item(&items, step(current, Direction::Next)),
            "ArrowUp" => Self::focus_item(&items, step(current, Direction::Previous)),
            "Home" => Self::focus_item(&items, step(Origin::Nothing, Direction::Next)),
            "End" => Self::focus_item(&items, step(Origin::Nothing, Direction::Previous)),
            _ => {
                let Some(key) = event.char() else {
                    return false;
                };
                let outcome = self.typeahead.borrow_mut().handle_key(
                    &entries,
                    current,
                    key,
                    Instant::now(),
                    self.disabled_items_focusable,
                );
                if let TypeaheadOutcome::Move(target) = outcome {
                    Self::focus_item(&items, Some(target));
                }
                return outcome.consumed();
            }
        }
        true
    }
}

// =============================================================================
// Component
// =============================================================================

/// Properties for [`menu_list`].
#[derive(Default)]
pub struct MenuListProps {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub classes: Classes,
    /// Focus the list itself once mounted (and give it tab index 0).
    pub auto_focus: bool,
    /// Focus the active item once mounted.
    pub auto_focus_item: bool,
    pub disabled_items_focusable: bool,
    pub disable_list_wrap: bool,
    pub variant: MenuListVariant,
    /// Role of the list (default: `menu`).
    pub role: Option<String>,
    /// Extra attributes (`aria-labelledby`, ...).
    pub attributes: Vec<(String, String)>,
    pub visible: Option<PropValue<bool>>,
    /// Runs after the built-in key handling.
    pub on_key_down: Option<KeyCallback>,
    /// Role, selection predicate and click hook shared with the items.
    pub item_settings: ItemSettings,
    pub children: Option<Children>,
}

/// Create a menu list and return its index.
pub(crate) fn create_menu_list(props: MenuListProps) -> usize {
    let navigation = Rc::new(Navigation {
        disable_list_wrap: props.disable_list_wrap,
        disabled_items_focusable: props.disabled_items_focusable,
        typeahead: RefCell::new(Typeahead::new()),
    });
    let on_key_down = props.on_key_down;
    let list_index: Rc<RefCell<Option<usize>>> = Rc::new(RefCell::new(None));

    // The list registers itself before its children run so items find it.
    let variant = props.variant;
    let settings = props.item_settings;
    let children = props.children;
    let register_slot = list_index.clone();
    let children: Children = Box::new(move || {
        if let Some(list) = get_current_parent_index() {
            *register_slot.borrow_mut() = Some(list);
            LISTS.with(|lists| {
                lists.borrow_mut().insert(
                    list,
                    ListState {
                        items: Vec::new(),
                        variant,
                        settings,
                    },
                );
            });
        }
        if let Some(children) = children {
            children();
        }
    });

    let handler_slot = list_index.clone();
    let on_key: KeyCallback = Rc::new(move |event: &KeyboardEvent| {
        let Some(list) = *handler_slot.borrow() else {
            return false;
        };
        let consumed = navigation.handle_key(list, event);
        let user = on_key_down.as_ref().is_some_and(|handler| handler(event));
        consumed || user
    });

    let index = create_list(ListProps {
        id: props.id,
        class_name: props.class_name,
        classes: props.classes,
        role: Some(props.role.unwrap_or_else(|| "menu".to_string())),
        tab_index: Some(PropValue::Static(Some(if props.auto_focus { 0 } else { -1 }))),
        visible: props.visible,
        attributes: props.attributes,
        on_key: Some(on_key),
        children: Some(children),
        ..Default::default()
    });

    on_destroy(index, move || {
        LISTS.with(|lists| {
            lists.borrow_mut().remove(&index);
        });
    });

    warn_foreign_children(index);

    if props.auto_focus_item {
        if let Some(item) = active_item(index) {
            focus::focus(item);
        }
    } else if props.auto_focus {
        focus::focus(index);
    }

    index
}

/// Direct children must be menu items (text is allowed for subheaders).
fn warn_foreign_children(list: usize) {
    let registered = items(list);
    for child in core::get_children(list) {
        let kind = core::get_component_type(child);
        if kind != ComponentType::Text && !registered.contains(&child) {
            warn_misuse("MenuList", "children should be menu items; other components are skipped by keyboard navigation");
        }
    }
}

/// Create a menu list.
pub fn menu_list(props: MenuListProps) -> Cleanup {
    component_cleanup(create_menu_list(props))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::menu_item::{create_menu_item, MenuItemProps};
    use crate::engine::reset_registry;
    use crate::error::capture_warnings;
    use crate::primitives::{create_box, static_text, BoxProps};
    use crate::state::focus::reset_focus_state;
    use crate::state::keyboard::{dispatch_focused, reset_keyboard_state};
    use std::cell::Cell;

    fn setup() {
        reset_registry();
        reset_focus_state();
        reset_keyboard_state();
        reset_menu_lists();
    }

    fn item(label: &str) -> MenuItemProps {
        MenuItemProps {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    fn press(key: &str) -> bool {
        dispatch_focused(focus::get_focused_index(), &KeyboardEvent::new(key))
    }

    fn focused_text() -> String {
        focus::focused().map(collect_text).unwrap_or_default()
    }

    fn fruit_list(props: MenuListProps) -> usize {
        create_menu_list(MenuListProps {
            children: Some(Box::new(|| {
                for label in ["Apple", "Apricot", "Banana"] {
                    create_menu_item(item(label));
                }
            })),
            ..props
        })
    }

    #[test]
    fn test_items_register_in_order() {
        setup();

        let list = fruit_list(MenuListProps::default());
        let texts: Vec<String> = items(list).into_iter().map(collect_text).collect();
        assert_eq!(texts, vec!["Apple", "Apricot", "Banana"]);
        assert_eq!(style::get_attribute(list, "role").as_deref(), Some("menu"));
        assert_eq!(interaction::get_tab_index(list), Some(-1));
    }

    #[test]
    fn test_arrow_navigation_wraps() {
        setup();

        fruit_list(MenuListProps {
            auto_focus_item: true,
            ..Default::default()
        });
        assert_eq!(focused_text(), "Apple");

        assert!(press("ArrowDown"));
        assert_eq!(focused_text(), "Apricot");
        assert!(press("ArrowDown"));
        assert!(press("ArrowDown"));
        assert_eq!(focused_text(), "Apple");
        assert!(press("ArrowUp"));
        assert_eq!(focused_text(), "Banana");
    }

    #[test]
    fn test_disable_list_wrap_stops_at_edges() {
        setup();

        fruit_list(MenuListProps {
            auto_focus_item: true,
            disable_list_wrap: true,
            ..Default::default()
        });

        assert!(press("ArrowUp"));
        assert_eq!(focused_text(), "Apple");
        assert!(press("End"));
        assert_eq!(focused_text(), "Banana");
        assert!(press("ArrowDown"));
        assert_eq!(focused_text(), "Banana");
        assert!(press("Home"));
        assert_eq!(focused_text(), "Apple");
    }

    #[test]
    fn test_typeahead_moves_focus() {
        setup();

        fruit_list(MenuListProps {
            auto_focus_item: true,
            ..Default::default()
        });

        assert!(press("b"));
        assert_eq!(focused_text(), "Banana");
        assert!(!press("z"));
        assert_eq!(focused_text(), "Banana");
    }

    #[test]
    fn test_list_auto_focus() {
        setup();

        let list = fruit_list(MenuListProps {
            auto_focus: true,
            ..Default::default()
        });
        assert!(focus::is_focused(list));
        assert_eq!(interaction::get_tab_index(list), Some(0));

        assert!(press("ArrowDown"));
        assert_eq!(focused_text(), "Apple");
    }

    #[test]
    fn test_active_item_selected_menu() {
        setup();

        let list = create_menu_list(MenuListProps {
            children: Some(Box::new(|| {
                create_menu_item(item("One"));
                create_menu_item(MenuItemProps {
                    selected: Some(true.into()),
                    ..item("Two")
                });
                create_menu_item(MenuItemProps {
                    selected: Some(true.into()),
                    disabled: Some(true.into()),
                    ..item("Three")
                });
            })),
            ..Default::default()
        });

        let active = active_item(list);
        assert_eq!(active.map(collect_text).as_deref(), Some("Two"));
        let tab_indices: Vec<Option<i32>> = items(list).into_iter().map(interaction::get_tab_index).collect();
        assert_eq!(tab_indices, vec![Some(-1), Some(0), None]);
    }

    #[test]
    fn test_active_item_menu_variant() {
        setup();

        let list = create_menu_list(MenuListProps {
            variant: MenuListVariant::Menu,
            children: Some(Box::new(|| {
                create_menu_item(MenuItemProps {
                    disabled: Some(true.into()),
                    ..item("Zero")
                });
                create_menu_item(item("One"));
                create_menu_item(MenuItemProps {
                    selected: Some(true.into()),
                    ..item("Two")
                });
            })),
            ..Default::default()
        });

        assert_eq!(active_item(list).map(collect_text).as_deref(), Some("One"));
        // Only the selected-menu variant hands out tab index 0
        let tab_indices: Vec<Option<i32>> = items(list).into_iter().map(interaction::get_tab_index).collect();
        assert_eq!(tab_indices, vec![None, Some(-1), Some(-1)]);
    }

    #[test]
    fn test_user_key_handler_runs_after() {
        setup();

        let seen = Rc::new(Cell::new(0));
        let seen_clone = seen.clone();
        fruit_list(MenuListProps {
            auto_focus_item: true,
            on_key_down: Some(Rc::new(move |_: &KeyboardEvent| {
                seen_clone.set(seen_clone.get() + 1);
                false
            })),
            ..Default::default()
        });

        assert!(press("ArrowDown"));
        assert!(!press("F5"));
        assert_eq!(seen.get(), 2);
        assert_eq!(focused_text(), "Apricot");
    }

    #[test]
    fn test_foreign_children_warn() {
        setup();

        let (list, logged) = capture_warnings(|| {
            create_menu_list(MenuListProps {
                children: Some(Box::new(|| {
                    static_text("Fruit");
                    create_menu_item(item("Apple"));
                    create_box(BoxProps::default());
                })),
                ..Default::default()
            })
        });

        assert_eq!(logged.matches("children should be menu items").count(), 1);
        assert!(logged.contains("MenuList"));
        assert_eq!(items(list).len(), 1);

        setup();
        let (_, quiet) = capture_warnings(|| fruit_list(MenuListProps::default()));
        assert!(quiet.is_empty());
    }
}
