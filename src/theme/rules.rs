//! Class-to-style rules.
//!
//! The terminal counterpart of a stylesheet: a component's classes pick
//! colors from the theme palette and text attributes. Rules apply in a fixed
//! order so state classes win over variant classes, and `Sui-disabled` wins
//! over everything.

use super::Theme;
use crate::styles;
use crate::types::{Attr, Rgba};

/// Resolved style of one rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

impl CellStyle {
    /// Fill unset colors from the parent; attributes accumulate.
    pub fn inherit(self, parent: &CellStyle) -> CellStyle {
        CellStyle {
            fg: if self.fg.is_terminal_default() { parent.fg } else { self.fg },
            bg: if self.bg.is_terminal_default() { parent.bg } else { self.bg },
            attrs: self.attrs | parent.attrs,
        }
    }
}

/// Compute the style for a class list under `theme`.
pub fn style_for_classes(theme: &Theme, classes: &[String]) -> CellStyle {
    let has = |class: &str| classes.iter().any(|c| c == class);
    let has_prefix = |prefix: &str| classes.iter().any(|c| c.starts_with(prefix));
    let mut style = CellStyle::default();

    // Surfaces
    if has("SuiMenu-paper") {
        style.bg = theme.surface.resolve();
    }
    if has("SuiFormHelperText-root") || has("SuiSelect-placeholder") {
        style.fg = theme.text_muted.resolve();
    }
    if has("SuiInputBase-input") {
        style.attrs |= Attr::UNDERLINE;
    }

    // Button variants
    if has("SuiButton-containedPrimary") {
        style.bg = theme.primary.resolve();
        style.fg = theme.primary_contrast.resolve();
    } else if has("SuiButton-containedSecondary") {
        style.bg = theme.secondary.resolve();
        style.fg = theme.primary_contrast.resolve();
    } else if has("SuiButton-contained") {
        style.attrs |= Attr::INVERSE;
    }
    if has("SuiButton-outlinedPrimary") || has("SuiButton-textPrimary") {
        style.fg = theme.primary.resolve();
    }
    if has("SuiButton-outlinedSecondary") || has("SuiButton-textSecondary") {
        style.fg = theme.secondary.resolve();
    }
    if has("SuiButton-outlined") {
        style.attrs |= Attr::BOLD;
    }

    // Checked controls
    if has(styles::CHECKED) {
        style.fg = if has("SuiCheckbox-colorPrimary") {
            theme.primary.resolve()
        } else {
            theme.secondary.resolve()
        };
    }

    // Selection and focus
    if has(styles::SELECTED) {
        if has_prefix("SuiButtonTab-") {
            style.fg = theme.primary.resolve();
            style.attrs |= Attr::UNDERLINE | Attr::BOLD;
        } else {
            style.bg = theme.selected.resolve();
        }
    }
    if has(styles::FOCUSED) && (has("SuiFormLabel-root") || has("SuiInputBase-root")) {
        style.fg = theme.primary.resolve();
    }
    if has(styles::FOCUS_VISIBLE) {
        style.attrs |= Attr::INVERSE;
    }

    // Error, then disabled
    if has(styles::ERROR) {
        style.fg = theme.error.resolve();
    }
    if has(styles::DISABLED) {
        style.fg = theme.text_disabled.resolve();
        style.attrs |= Attr::DIM;
        style.attrs.remove(Attr::INVERSE);
    }

    style
}
