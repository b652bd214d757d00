//! Form control state.
//!
//! A form control owns the state shared by a label, an input and a helper
//! text: focused, filled, error, required, disabled, size, variant and
//! full-width. It hands a [`FormControlHandle`] to its children closure;
//! descendants take the handle through their props and merge their own
//! explicit props over it with [`form_control_state`].
//!
//! `filled` starts false and follows the descendant's reports: an input calls
//! [`FormControlHandle::on_filled`] / [`FormControlHandle::on_empty`] at mount
//! and whenever its value crosses between empty and non-empty.

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{effect, signal, Signal};

use crate::types::{FieldVariant, Size};

// =============================================================================
// Field values
// =============================================================================

/// Value of an input or select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Single value (text input, single select).
    Text(String),
    /// Collection (multi-select).
    Many(Vec<String>),
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Many(values) => values.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Many(_) => None,
        }
    }

    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::Many(values) => Some(values),
        }
    }

    /// Whether `candidate` is this value (single) or one of its members.
    pub fn contains(&self, candidate: &str) -> bool {
        match self {
            Self::Text(text) => text == candidate,
            Self::Many(values) => values.iter().any(|v| v == candidate),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// A value is filled when it is present and non-empty.
///
/// For a multi-select the collection must hold at least one entry.
pub fn is_filled(value: Option<&FieldValue>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

// =============================================================================
// State
// =============================================================================

/// Snapshot of the shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormControlState {
    pub focused: bool,
    pub error: bool,
    pub required: bool,
    pub disabled: bool,
    pub filled: bool,
    pub full_width: bool,
    pub size: Size,
    pub variant: FieldVariant,
}

/// Shared boolean getter.
pub type Flag = Rc<dyn Fn() -> bool>;

struct Inner {
    focused: Signal<bool>,
    filled: Signal<bool>,
    focused_prop: Option<Flag>,
    disabled: Flag,
    error: Flag,
    required: Flag,
    full_width: bool,
    size: Size,
    variant: FieldVariant,
    stop_disabled_watch: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(stop) = self.stop_disabled_watch.get_mut().take() {
            stop();
        }
    }
}

/// Shared form control state, passed explicitly to descendants.
#[derive(Clone)]
pub struct FormControlHandle(Rc<Inner>);

/// Inputs for [`FormControlHandle::new`].
pub struct FormControlConfig {
    /// Overrides internal focus tracking when set.
    pub focused: Option<Flag>,
    pub disabled: Flag,
    pub error: Flag,
    pub required: Flag,
    pub full_width: bool,
    pub size: Size,
    pub variant: FieldVariant,
}

impl Default for FormControlConfig {
    fn default() -> Self {
        Self {
            focused: None,
            disabled: Rc::new(|| false),
            error: Rc::new(|| false),
            required: Rc::new(|| false),
            full_width: false,
            size: Size::default(),
            variant: FieldVariant::default(),
        }
    }
}

impl FormControlHandle {
    pub fn new(config: FormControlConfig) -> Self {
        let focused = signal(false);

        // Tracked focus does not survive disabling
        let focused_for_watch = focused.clone();
        let disabled = config.disabled.clone();
        let stop = effect(move || {
            if disabled() {
                focused_for_watch.set(false);
            }
        });

        Self(Rc::new(Inner {
            focused,
            filled: signal(false),
            focused_prop: config.focused,
            disabled: config.disabled,
            error: config.error,
            required: config.required,
            full_width: config.full_width,
            size: config.size,
            variant: config.variant,
            stop_disabled_watch: RefCell::new(Some(Box::new(stop))),
        }))
    }

    /// Current state (reactive).
    pub fn state(&self) -> FormControlState {
        FormControlState {
            focused: self.focused(),
            error: (self.0.error)(),
            required: (self.0.required)(),
            disabled: self.disabled(),
            filled: self.0.filled.get(),
            full_width: self.0.full_width,
            size: self.0.size,
            variant: self.0.variant,
        }
    }

    /// An explicit `focused` prop wins over tracked focus. Tracked focus is
    /// never reported while disabled.
    pub fn focused(&self) -> bool {
        match &self.0.focused_prop {
            Some(focused) => focused(),
            None => !self.disabled() && self.0.focused.get(),
        }
    }

    pub fn disabled(&self) -> bool {
        (self.0.disabled)()
    }

    pub fn filled(&self) -> bool {
        self.0.filled.get()
    }

    /// A descendant gained focus.
    pub fn on_focus(&self) {
        if !self.disabled() {
            self.0.focused.set(true);
        }
    }

    /// A descendant lost focus.
    pub fn on_blur(&self) {
        self.0.focused.set(false);
    }

    /// A descendant now holds a non-empty value.
    pub fn on_filled(&self) {
        self.0.filled.set(true);
    }

    /// A descendant's value became empty.
    pub fn on_empty(&self) {
        self.0.filled.set(false);
    }

    /// Report `value` through `on_filled` / `on_empty`.
    pub fn check_dirty(&self, value: Option<&FieldValue>) {
        if is_filled(value) {
            self.on_filled();
        } else {
            self.on_empty();
        }
    }
}

impl std::fmt::Debug for FormControlHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FormControlHandle").field(&self.state()).finish()
    }
}

// =============================================================================
// Merge
// =============================================================================

/// A descendant's explicit state props. `None` defers to the form control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateProps {
    pub focused: Option<bool>,
    pub error: Option<bool>,
    pub required: Option<bool>,
    pub disabled: Option<bool>,
    pub filled: Option<bool>,
    pub full_width: Option<bool>,
    pub size: Option<Size>,
    pub variant: Option<FieldVariant>,
}

/// Merge explicit props over the inherited state. Explicit props win.
pub fn form_control_state(props: &StateProps, control: Option<&FormControlHandle>) -> FormControlState {
    let inherited = control.map(FormControlHandle::state).unwrap_or_default();
    FormControlState {
        focused: props.focused.unwrap_or(inherited.focused),
        error: props.error.unwrap_or(inherited.error),
        required: props.required.unwrap_or(inherited.required),
        disabled: props.disabled.unwrap_or(inherited.disabled),
        filled: props.filled.unwrap_or(inherited.filled),
        full_width: props.full_width.unwrap_or(inherited.full_width),
        size: props.size.unwrap_or(inherited.size),
        variant: props.variant.unwrap_or(inherited.variant),
    }
}

// =============================================================================
// Tests
// =============================================================================
