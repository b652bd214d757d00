//! State Module - Runtime state management systems
//!
//! The reactive state systems that power interactivity:
//!
//! - **Focus** - Tab cycling, focus trap, callbacks, history
//! - **Keyboard** - Event types, bubbling dispatch, handler registry
//! - **Input** - crossterm event conversion and polling
//! - **Global keys** - Routing priority chain, Tab and Ctrl+C

pub mod focus;
pub mod global_keys;
pub mod input;
pub mod keyboard;

pub use focus::{
    blur, focus, focus_first, focus_last, focus_next, focus_previous, focused,
    get_focused_index, has_focus, is_focused, reset_focus_state, FocusCallbacks,
};
pub use keyboard::{
    reset_keyboard_state, KeyHandler, KeyState, KeyboardEvent, Modifiers,
};
