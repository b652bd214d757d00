//! Class-name composition.
//!
//! Every component renders a root class `Sui<Component>-root`, per-slot and
//! per-prop classes (`SuiButton-outlined`, `SuiListItem-dense`) and the shared
//! state classes below. Callers extend any slot through a [`Classes`] map.
//!
//! ```ignore
//! let classes = Classes::new().with("root", "wide");
//! let names = ClassNames::new()
//!     .slot(&classes, "Button", "root")
//!     .add_if(disabled, DISABLED)
//!     .build();
//! // ["SuiButton-root", "wide", "Sui-disabled"]
//! ```

use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// State classes
// =============================================================================

pub const DISABLED: &str = "Sui-disabled";
pub const FOCUSED: &str = "Sui-focused";
/// Keyboard focus is on this component.
pub const FOCUS_VISIBLE: &str = "Sui-focusVisible";
pub const SELECTED: &str = "Sui-selected";
pub const ERROR: &str = "Sui-error";
pub const REQUIRED: &str = "Sui-required";
pub const CHECKED: &str = "Sui-checked";
pub const FILLED: &str = "Sui-filled";
pub const EXPANDED: &str = "Sui-expanded";

/// `Sui<component>-<key>`.
pub fn component_class(component: &str, key: &str) -> String {
    format!("Sui{component}-{key}")
}

/// `primary` -> `Primary`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Classes - caller overrides per slot
// =============================================================================

/// Extra class names per slot key (`root`, `label`, `input`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classes(BTreeMap<String, String>);

impl Classes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add classes for a slot. Repeated keys accumulate.
    pub fn with(mut self, key: &str, classes: &str) -> Self {
        self.0
            .entry(key.to_string())
            .and_modify(|existing| {
                existing.push(' ');
                existing.push_str(classes);
            })
            .or_insert_with(|| classes.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Combine two maps. Classes for the same key are concatenated.
    pub fn merge(&self, other: &Classes) -> Classes {
        other
            .0
            .iter()
            .fold(self.clone(), |acc, (key, classes)| acc.with(key, classes))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// ClassNames - builder
// =============================================================================

/// Ordered, de-duplicated class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames(Vec<String>);

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add whitespace-separated class names, skipping duplicates.
    pub fn add(mut self, classes: impl AsRef<str>) -> Self {
        for class in classes.as_ref().split_whitespace() {
            if !self.0.iter().any(|c| c == class) {
                self.0.push(class.to_string());
            }
        }
        self
    }

    pub fn add_if(self, condition: bool, classes: impl AsRef<str>) -> Self {
        if condition { self.add(classes) } else { self }
    }

    /// Add an optional caller class (`class_name` props).
    pub fn add_opt(self, classes: Option<&str>) -> Self {
        match classes {
            Some(classes) => self.add(classes),
            None => self,
        }
    }

    /// Add the component class for `key` plus caller overrides for it.
    pub fn slot(self, overrides: &Classes, component: &str, key: &str) -> Self {
        self.add(component_class(component, key)).add_opt(overrides.get(key))
    }

    pub fn slot_if(self, condition: bool, overrides: &Classes, component: &str, key: &str) -> Self {
        if condition { self.slot(overrides, component, key) } else { self }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn build(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for ClassNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}
