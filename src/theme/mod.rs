//! Theme System for sui-tui.
//!
//! Semantic palette colors, a handful of presets, and the rules that turn a
//! component's class list into a terminal cell style.
//!
//! The active theme lives in a signal, so anything rendered through
//! [`active_theme`] inside a reactive scope repaints when the theme changes.
//!
//! # Color Types
//!
//! - `ThemeColor::Default` - Uses terminal's default color
//! - `ThemeColor::Ansi(n)` - ANSI palette index (0-255)
//! - `ThemeColor::Rgb(rgba)` - Explicit RGB color
//! - `ThemeColor::Hex(s)` - `#rrggbb` string, parsed on resolve
//!
//! # Example
//!
//! ```ignore
//! use sui_tui::theme::{set_theme_by_name, active_theme};
//!
//! set_theme_by_name("dark");
//! let primary = active_theme().primary.resolve();
//! ```

use spark_signals::{signal, Signal};

use crate::types::Rgba;

pub mod presets;
pub mod rules;

pub use presets::{dark, get_preset, light, preset_names, terminal};
pub use rules::{style_for_classes, CellStyle};

// =============================================================================
// ThemeColor - A color that can be ANSI, RGB, or hex string
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThemeColor {
    /// Use terminal's default color.
    #[default]
    Default,
    /// ANSI palette index (0-255).
    Ansi(u8),
    /// Explicit RGB color.
    Rgb(Rgba),
    /// Hex string (`#rgb` or `#rrggbb`).
    Hex(String),
}

impl ThemeColor {
    /// Resolve to Rgba.
    ///
    /// Unparseable hex strings resolve to magenta so they stand out.
    pub fn resolve(&self) -> Rgba {
        match self {
            Self::Default => Rgba::TERMINAL_DEFAULT,
            Self::Ansi(i) => Rgba::ansi(*i),
            Self::Rgb(c) => *c,
            Self::Hex(s) => Rgba::parse(s).unwrap_or(Rgba::MAGENTA),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

/// `u8` is an ANSI index.
impl From<u8> for ThemeColor {
    fn from(index: u8) -> Self {
        Self::Ansi(index)
    }
}

impl From<Rgba> for ThemeColor {
    fn from(color: Rgba) -> Self {
        Self::Rgb(color)
    }
}

/// `&str` is a hex string.
impl From<&str> for ThemeColor {
    fn from(s: &str) -> Self {
        Self::Hex(s.to_string())
    }
}

// =============================================================================
// Theme - Semantic palette
// =============================================================================

/// Theme definition with the semantic colors components draw with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name (e.g., "light", "dark").
    pub name: String,
    pub description: String,

    // Palette
    pub primary: ThemeColor,
    /// Text drawn on a primary background.
    pub primary_contrast: ThemeColor,
    pub secondary: ThemeColor,
    pub error: ThemeColor,

    // Text
    pub text: ThemeColor,
    pub text_muted: ThemeColor,
    pub text_disabled: ThemeColor,

    // Surfaces
    pub background: ThemeColor,
    /// Popups (open menus, select lists).
    pub surface: ThemeColor,
    /// Selected list items.
    pub selected: ThemeColor,

    // Borders
    pub border: ThemeColor,
    pub border_focus: ThemeColor,
}

impl Default for Theme {
    fn default() -> Self {
        light()
    }
}

impl Theme {
    /// Create a new theme with all default colors.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            primary: ThemeColor::Default,
            primary_contrast: ThemeColor::Default,
            secondary: ThemeColor::Default,
            error: ThemeColor::Default,
            text: ThemeColor::Default,
            text_muted: ThemeColor::Default,
            text_disabled: ThemeColor::Default,
            background: ThemeColor::Default,
            surface: ThemeColor::Default,
            selected: ThemeColor::Default,
            border: ThemeColor::Default,
            border_focus: ThemeColor::Default,
        }
    }
}

// =============================================================================
// Active theme
// =============================================================================

thread_local! {
    static ACTIVE_THEME: Signal<Theme> = signal(Theme::default());
}

/// The active theme (reactive).
pub fn active_theme() -> Theme {
    ACTIVE_THEME.with(|s| s.get())
}

/// Replace the active theme.
pub fn set_theme(theme: Theme) {
    tracing::debug!(theme = %theme.name, "theme changed");
    ACTIVE_THEME.with(|s| s.set(theme));
}

/// Switch to a preset by name. Returns false for unknown names.
pub fn set_theme_by_name(name: &str) -> bool {
    match get_preset(name) {
        Some(theme) => {
            set_theme(theme);
            true
        }
        None => {
            tracing::warn!(name, "unknown theme preset");
            false
        }
    }
}

/// Restore the default theme (for testing).
pub fn reset_theme() {
    ACTIVE_THEME.with(|s| s.set(Theme::default()));
}

// =============================================================================
// Tests
// =============================================================================
