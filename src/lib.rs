//! # sui-tui
//!
//! Styled UI primitives for reactive terminal interfaces: buttons, lists,
//! menus, text inputs, selects, checkboxes, tabs and the form controls that
//! tie them together.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! Components are indices into parallel arrays (ECS style) rather than
//! objects. Each array cell is a static value or a getter, so props bound to
//! signals stay live. The render pipeline is derived-based:
//!
//! ```text
//! Component Tree → engine arrays → Node tree → paint effect → terminal
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Colors, text attributes, component kinds, size/variant enums
//! - [`engine`] - Component registry, parent context, parallel arrays
//! - [`state`] - Focus, keyboard dispatch, input polling, global keys
//! - [`navigation`] - Menu focus traversal and typeahead
//! - [`form_control`] - Shared form control state
//! - [`styles`] - Class-name composition and overrides
//! - [`theme`] - Palette, presets, class-to-style rules
//! - [`primitives`] - Box and text building blocks
//! - [`components`] - The styled components
//! - [`render`] - Node tree snapshots, markup, terminal painter
//! - [`pipeline`] - Mount/run/unmount lifecycle

pub mod components;
pub mod engine;
pub mod error;
pub mod form_control;
pub mod navigation;
pub mod pipeline;
pub mod primitives;
pub mod render;
pub mod state;
pub mod styles;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{Result, SuiError};

pub use engine::{
    get_allocated_count, get_current_parent_index, get_id, get_index, on_destroy,
    release_index, reset_registry, with_parent,
};

pub use form_control::{is_filled, FieldValue, FormControlHandle, FormControlState, StateProps};

pub use styles::{ClassNames, Classes};

pub use pipeline::{mount, mount_to, run, tick, unmount, MountHandle};

pub use primitives::{box_primitive, text, BoxProps, Cleanup, PropValue, TextProps};

pub use render::{render_roots, render_tree, Node};

pub use state::{
    // Focus
    blur, focus, focus_first, focus_last, focus_next, focus_previous, focused,
    get_focused_index, has_focus, is_focused, reset_focus_state, FocusCallbacks,
    // Keyboard
    reset_keyboard_state, KeyHandler, KeyState, KeyboardEvent, Modifiers,
};

pub use theme::{active_theme, set_theme, set_theme_by_name, Theme, ThemeColor};

pub use components::reset_component_registries;
