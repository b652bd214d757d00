//! ButtonTabs and ButtonTab - a row (or column) of tab buttons.
//!
//! A tab without a `value` takes its position among its siblings. The tab
//! whose value equals the tabs value is selected; activating a tab fires the
//! tabs' `on_change` with the tab value, then the tab's own `on_click`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::engine::on_destroy;
use crate::primitives::{component_cleanup, create_box, BoxProps, Children, ClickCallback, Cleanup, PropValue};
use crate::styles::{ClassNames, Classes};
use crate::types::{ComponentType, Orientation};

use super::button_base::{create_button_base, ButtonBaseProps};
use super::{bind_attributes, enclosing, flag};

/// Tab sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabsVariant {
    #[default]
    Standard,
    /// Tabs share the available width.
    FullWidth,
}

/// Tab value change callback.
pub type TabChange = Rc<dyn Fn(&str)>;

struct TabsState {
    value: Rc<dyn Fn() -> Option<String>>,
    on_change: Option<TabChange>,
    variant: TabsVariant,
    orientation: Orientation,
    next_position: usize,
}

thread_local! {
    static TABS: RefCell<HashMap<usize, TabsState>> = RefCell::new(HashMap::new());
}

fn is_tabs(index: usize) -> bool {
    TABS.with(|tabs| tabs.borrow().contains_key(&index))
}

/// Clear the tabs registry (for testing).
pub fn reset_tabs() {
    TABS.with(|tabs| tabs.borrow_mut().clear());
}

/// What a tab inherits from its tabs container.
struct TabContext {
    value: Rc<dyn Fn() -> Option<String>>,
    on_change: Option<TabChange>,
    variant: TabsVariant,
    orientation: Orientation,
    position: usize,
}

fn claim_position(tabs: usize) -> Option<TabContext> {
    TABS.with(|registry| {
        let mut registry = registry.borrow_mut();
        let state = registry.get_mut(&tabs)?;
        let position = state.next_position;
        state.next_position += 1;
        Some(TabContext {
            value: state.value.clone(),
            on_change: state.on_change.clone(),
            variant: state.variant,
            orientation: state.orientation,
            position,
        })
    })
}

// =============================================================================
// ButtonTabs
// =============================================================================

/// Properties for [`button_tabs`].
#[derive(Default)]
pub struct ButtonTabsProps {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub classes: Classes,
    /// Value of the selected tab.
    pub value: Option<PropValue<String>>,
    pub centered: bool,
    pub variant: TabsVariant,
    pub orientation: Orientation,
    pub on_change: Option<TabChange>,
    pub children: Option<Children>,
}

/// Create a tabs container and return its index.
pub(crate) fn create_button_tabs(props: ButtonTabsProps) -> usize {
    let value: Rc<dyn Fn() -> Option<String>> = match props.value.map(PropValue::into_getter) {
        Some(value) => Rc::new(move || Some(value())),
        None => Rc::new(|| None),
    };
    let vertical = props.orientation == Orientation::Vertical;
    let class_names = ClassNames::new()
        .slot(&props.classes, "ButtonTabs", "root")
        .slot_if(vertical, &props.classes, "ButtonTabs", "vertical")
        .slot_if(props.centered, &props.classes, "ButtonTabs", "centered")
        .add_opt(props.class_name.as_deref());

    let state = TabsState {
        value,
        on_change: props.on_change,
        variant: props.variant,
        orientation: props.orientation,
        next_position: 0,
    };
    let children = props.children;
    let index = create_box(BoxProps {
        id: props.id,
        component_type: Some(ComponentType::Tabs),
        classes: Some(class_names.build().into()),
        children: Some(Box::new(move || {
            if let Some(tabs) = crate::engine::get_current_parent_index() {
                TABS.with(|registry| registry.borrow_mut().insert(tabs, state));
            }
            if let Some(children) = children {
                children();
            }
        })),
        ..Default::default()
    });

    on_destroy(index, move || {
        TABS.with(|registry| {
            registry.borrow_mut().remove(&index);
        });
    });

    let direction = if vertical { "column" } else { "row" };
    bind_attributes(index, move |attrs| {
        attrs.insert("role".into(), "tablist".into());
        attrs.insert("data-direction".into(), direction.into());
    });

    index
}

/// Create a tabs container.
pub fn button_tabs(props: ButtonTabsProps) -> Cleanup {
    component_cleanup(create_button_tabs(props))
}

// =============================================================================
// ButtonTab
// =============================================================================

/// Properties for [`button_tab`].
#[derive(Default)]
pub struct ButtonTabProps {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub classes: Classes,
    /// Defaults to the tab's position.
    pub value: Option<String>,
    pub label: String,
    pub disabled: Option<PropValue<bool>>,
    /// Selection outside a tabs container.
    pub selected: Option<PropValue<bool>>,
    pub full_width: bool,
    pub on_click: Option<ClickCallback>,
    pub on_change: Option<TabChange>,
}

/// Create a tab and return its index.
pub(crate) fn create_button_tab(props: ButtonTabProps) -> usize {
    let context = enclosing(is_tabs).and_then(claim_position);

    let value = props
        .value
        .or_else(|| context.as_ref().map(|c| c.position.to_string()))
        .unwrap_or_default();
    let full_width = props.full_width || context.as_ref().is_some_and(|c| c.variant == TabsVariant::FullWidth);
    let vertical = context.as_ref().is_some_and(|c| c.orientation == Orientation::Vertical);

    let explicit_selected = props.selected.map(PropValue::into_getter);
    let tabs_value = context.as_ref().map(|c| c.value.clone());
    let value_for_selected = value.clone();
    let selected: Rc<dyn Fn() -> bool> = Rc::new(move || match (&explicit_selected, &tabs_value) {
        (Some(selected), _) => selected(),
        (None, Some(tabs_value)) => tabs_value().as_deref() == Some(value_for_selected.as_str()),
        (None, None) => false,
    });

    let on_change = context.and_then(|c| c.on_change).or(props.on_change);
    let user_click = props.on_click;
    let value_for_click = value.clone();
    let on_click: ClickCallback = Rc::new(move || {
        if let Some(on_change) = &on_change {
            on_change(&value_for_click);
        }
        if let Some(on_click) = &user_click {
            on_click();
        }
    });

    let overrides = props.classes;
    let class_name = props.class_name;
    let selected_for_classes = selected.clone();
    let extra_classes: Rc<dyn Fn() -> ClassNames> = Rc::new(move || {
        ClassNames::new()
            .slot(&overrides, "ButtonTab", "root")
            .slot_if(selected_for_classes(), &overrides, "ButtonTab", "selected")
            .add_if(selected_for_classes(), crate::styles::SELECTED)
            .slot_if(full_width, &overrides, "ButtonTab", "fullWidth")
            .slot_if(vertical, &overrides, "ButtonTab", "vertical")
            .add_opt(class_name.as_deref())
    });

    let selected_prop = PropValue::getter({
        let selected = selected.clone();
        move || selected()
    });
    let disabled = flag(props.disabled);
    let disabled_for_prop = disabled.clone();
    let index = create_button_base(ButtonBaseProps {
        id: props.id,
        extra_classes: Some(extra_classes),
        role: Some("tab".into()),
        disabled: Some(PropValue::getter(move || disabled_for_prop())),
        selected: Some(selected_prop),
        label: Some(props.label),
        on_click: Some(on_click),
        ..Default::default()
    });

    bind_attributes(index, move |attrs| {
        attrs.insert("role".into(), "tab".into());
        attrs.insert("aria-selected".into(), selected().to_string());
        attrs.insert("data-value".into(), value.clone());
        if disabled() {
            attrs.insert("disabled".into(), String::new());
        }
    });

    index
}

/// Create a tab.
pub fn button_tab(props: ButtonTabProps) -> Cleanup {
    component_cleanup(create_button_tab(props))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::{core, interaction, style};
    use crate::engine::reset_registry;
    use crate::state::focus::{self, reset_focus_state};
    use crate::state::keyboard::{dispatch_focused, reset_keyboard_state, KeyboardEvent};
    use spark_signals::signal;

    fn setup() {
        reset_registry();
        reset_focus_state();
        reset_keyboard_state();
        reset_tabs();
    }

    fn tab(label: &str) -> ButtonTabProps {
        ButtonTabProps {
            label: label.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_positions_and_selection() {
        setup();

        let value = signal("1".to_string());
        let value_for_change = value.clone();
        let tabs = create_button_tabs(ButtonTabsProps {
            value: Some(value.clone().into()),
            on_change: Some(Rc::new(move |next: &str| { value_for_change.set(next.to_string()); })),
            children: Some(Box::new(|| {
                create_button_tab(tab("Inbox"));
                create_button_tab(tab("Sent"));
                create_button_tab(ButtonTabProps {
                    value: Some("drafts".into()),
                    ..tab("Drafts")
                });
            })),
            ..Default::default()
        });

        let children = core::get_children(tabs);
        let values: Vec<Option<String>> = children
            .iter()
            .map(|&child| style::get_attribute(child, "data-value"))
            .collect();
        assert_eq!(values, vec![Some("0".into()), Some("1".into()), Some("drafts".into())]);
        assert!(interaction::get_selected(children[1]));
        assert!(style::has_class(children[1], "SuiButtonTab-selected"));
        assert_eq!(style::get_attribute(tabs, "role").as_deref(), Some("tablist"));

        focus::focus(children[2]);
        dispatch_focused(focus::get_focused_index(), &KeyboardEvent::new("Enter"));
        assert_eq!(value.get(), "drafts");
        assert!(interaction::get_selected(children[2]));
        assert!(!interaction::get_selected(children[1]));
    }

    #[test]
    fn test_change_runs_before_click() {
        setup();

        let order = Rc::new(RefCell::new(Vec::new()));
        let order_change = order.clone();
        let order_click = order.clone();
        create_button_tabs(ButtonTabsProps {
            on_change: Some(Rc::new(move |value: &str| order_change.borrow_mut().push(format!("change {value}")))),
            children: Some(Box::new(move || {
                create_button_tab(ButtonTabProps {
                    on_click: Some(Rc::new(move || order_click.borrow_mut().push("click".to_string()))),
                    ..tab("Only")
                });
            })),
            ..Default::default()
        });

        let only = focus::get_focusable_indices()[0];
        focus::focus(only);
        dispatch_focused(focus::get_focused_index(), &KeyboardEvent::new(" "));
        assert_eq!(*order.borrow(), vec!["change 0".to_string(), "click".to_string()]);
    }

    #[test]
    fn test_full_width_and_vertical() {
        setup();

        let tabs = create_button_tabs(ButtonTabsProps {
            variant: TabsVariant::FullWidth,
            orientation: Orientation::Vertical,
            children: Some(Box::new(|| {
                create_button_tab(tab("A"));
            })),
            ..Default::default()
        });

        let only = core::get_children(tabs)[0];
        assert!(style::has_class(tabs, "SuiButtonTabs-vertical"));
        assert!(style::has_class(only, "SuiButtonTab-fullWidth"));
        assert!(style::has_class(only, "SuiButtonTab-vertical"));
        assert_eq!(style::get_attribute(tabs, "data-direction").as_deref(), Some("column"));
    }
}
