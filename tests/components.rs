//! End-to-end component behaviour through the public API: keyboard events
//! are routed the way the event loop routes them, and results are read back
//! from the rendered node tree.

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::signal;
use sui_tui::components::{
    button, button_tab, button_tabs, form_control_label, form_group, menu, menu_item,
    text_field, ButtonProps, ButtonTabProps, ButtonTabsProps, CheckboxProps, CloseReason,
    FormControlLabelProps, FormGroupProps, MenuItemProps, MenuProps, SelectProps, SwitchBaseProps,
    TextFieldProps,
};
use sui_tui::engine::arrays::text::collect_text;
use sui_tui::render::{layout_lines, line_text, render_roots, Node};
use sui_tui::state::global_keys::route_keyboard_event;
use sui_tui::theme::terminal;
use sui_tui::{
    focused, get_index, reset_component_registries, reset_focus_state, reset_keyboard_state,
    reset_registry, FieldValue, KeyboardEvent, PropValue,
};

fn setup() {
    reset_registry();
    reset_focus_state();
    reset_keyboard_state();
    reset_component_registries();
}

fn press(key: &str) {
    route_keyboard_event(KeyboardEvent::new(key));
}

fn focused_text() -> Option<String> {
    focused().map(collect_text)
}

fn find_by_id<'a>(roots: &'a [Node], id: &str) -> Option<&'a Node> {
    roots
        .iter()
        .find_map(|root| root.find(&|node| node.id.as_deref() == Some(id)))
}

fn fruit_items() -> Box<dyn FnOnce()> {
    Box::new(|| {
        for (value, label) in [("apple", "Apple"), ("banana", "Banana"), ("cherry", "Cherry")] {
            menu_item(MenuItemProps {
                value: Some(value.into()),
                label: Some(label.into()),
                ..Default::default()
            });
        }
    })
}

#[test]
fn select_text_field_keyboard_flow() {
    setup();

    let changes = Rc::new(RefCell::new(Vec::new()));
    let changes_clone = changes.clone();
    let (_cleanup, input) = text_field(TextFieldProps {
        id: Some("fruit".into()),
        label: Some("Fruit".into()),
        helper_text: Some("Pick one".into()),
        select: Some(SelectProps {
            auto_focus: true,
            on_change: Some(Rc::new(move |value: &FieldValue| {
                changes_clone.borrow_mut().push(value.clone())
            })),
            children: Some(fruit_items()),
            ..Default::default()
        }),
        ..Default::default()
    })
    .expect("valid select");
    assert!(input.is_none());

    let display = get_index("fruit").expect("display registered");
    assert_eq!(focused(), Some(display));

    // Closed: the options are not rendered
    let roots = render_roots();
    assert!(!roots[0].text_content().contains("Cherry"));

    press("ArrowDown");
    assert_eq!(focused_text().as_deref(), Some("Apple"));
    let roots = render_roots();
    let markup = roots[0].to_markup();
    assert!(markup.contains("role=\"listbox\""));
    assert!(markup.contains("Cherry"));

    press("c");
    assert_eq!(focused_text().as_deref(), Some("Cherry"));
    press("Enter");

    assert_eq!(*changes.borrow(), vec![FieldValue::from("cherry")]);
    assert_eq!(focused(), Some(display));

    let roots = render_roots();
    let display_node = find_by_id(&roots, "fruit").expect("display rendered");
    assert_eq!(display_node.text_content().trim_end_matches([' ', '▾']), "Cherry");
    assert_eq!(display_node.attribute("aria-expanded"), Some("false"));
    let label = find_by_id(&roots, "fruit-label").expect("label rendered");
    assert_eq!(label.attribute("data-shrink"), Some("true"));
}

#[test]
fn invalid_multiple_select_is_rejected() {
    setup();

    let result = text_field(TextFieldProps {
        select: Some(SelectProps {
            name: Some("fruit".into()),
            multiple: true,
            default_value: Some("apple".into()),
            ..Default::default()
        }),
        ..Default::default()
    });
    let err = result.err().expect("single value for a multiple select");
    assert!(err.to_string().contains("name=\"fruit\""));
}

#[test]
fn menu_opens_traps_focus_and_restores_it() {
    setup();

    let open = signal(false);
    let reasons = Rc::new(RefCell::new(Vec::new()));

    let open_for_button = open.clone();
    let _button = button(ButtonProps {
        id: Some("trigger".into()),
        label: Some("Actions".into()),
        auto_focus: true,
        on_click: Some(Rc::new(move || {
            open_for_button.set(true);
        })),
        ..Default::default()
    });

    let open_for_close = open.clone();
    let reasons_clone = reasons.clone();
    let _menu = menu(MenuProps {
        open: PropValue::Signal(open.clone()),
        on_close: Some(Rc::new(move |reason: CloseReason| {
            reasons_clone.borrow_mut().push(reason);
            open_for_close.set(false);
        })),
        children: Some(Box::new(|| {
            for label in ["Copy", "Cut", "Paste"] {
                menu_item(MenuItemProps {
                    label: Some(label.into()),
                    ..Default::default()
                });
            }
        })),
        ..Default::default()
    });

    let trigger = get_index("trigger").expect("trigger registered");
    assert_eq!(focused(), Some(trigger));

    press("Enter");
    assert!(open.get());
    assert_eq!(focused_text().as_deref(), Some("Copy"));

    press("ArrowUp");
    assert_eq!(focused_text().as_deref(), Some("Paste"));
    press("ArrowDown");
    assert_eq!(focused_text().as_deref(), Some("Copy"));

    press("Escape");
    assert!(!open.get());
    assert_eq!(*reasons.borrow(), vec![CloseReason::EscapeKeyDown]);
    assert_eq!(focused(), Some(trigger));
}

#[test]
fn checkbox_group_toggles_and_paints() {
    setup();

    let checked = Rc::new(RefCell::new(Vec::new()));
    let checked_clone = checked.clone();
    let _group = form_group(FormGroupProps {
        children: Some(Box::new(move || {
            for (name, auto_focus) in [("wifi", true), ("bluetooth", false)] {
                let checked = checked_clone.clone();
                form_control_label(FormControlLabelProps {
                    label: name.into(),
                    control: CheckboxProps {
                        base: SwitchBaseProps {
                            name: Some(name.into()),
                            auto_focus,
                            on_change: Some(Rc::new(move |value: bool| {
                                checked.borrow_mut().push((name, value))
                            })),
                            ..Default::default()
                        },
                        ..Default::default()
                    },
                    ..Default::default()
                });
            }
        })),
        ..Default::default()
    });

    press(" ");
    assert_eq!(*checked.borrow(), vec![("wifi", true)]);

    let lines = layout_lines(&render_roots(), &terminal());
    let text: Vec<String> = lines.iter().map(line_text).collect();
    assert_eq!(text, vec!["[x]wifi", "[ ]bluetooth"]);
}

#[test]
fn tabs_report_changes() {
    setup();

    let value = signal("one".to_string());
    let value_for_change = value.clone();
    let _tabs = button_tabs(ButtonTabsProps {
        value: Some(PropValue::Signal(value.clone())),
        on_change: Some(Rc::new(move |next: &str| {
            value_for_change.set(next.to_string());
        })),
        children: Some(Box::new(|| {
            for (id, label) in [("one", "One"), ("two", "Two")] {
                button_tab(ButtonTabProps {
                    id: Some(format!("tab-{id}")),
                    value: Some(id.into()),
                    label: label.into(),
                    ..Default::default()
                });
            }
        })),
        ..Default::default()
    });

    let selected = |id: &str| {
        let roots = render_roots();
        find_by_id(&roots, id).and_then(|node| node.attribute("aria-selected").map(str::to_string))
    };
    assert_eq!(selected("tab-one").as_deref(), Some("true"));
    assert_eq!(selected("tab-two").as_deref(), Some("false"));

    sui_tui::focus(get_index("tab-two").expect("tab registered"));
    press("Enter");
    assert_eq!(value.get(), "two");
    assert_eq!(selected("tab-two").as_deref(), Some("true"));
}
