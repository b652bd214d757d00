//! Theme presets.
//!
//! - light (default - green / indigo / red palette)
//! - dark
//! - terminal (ANSI colors, respects the user's terminal scheme)

use super::{Theme, ThemeColor};

/// Light theme: green primary, indigo secondary, red error.
pub fn light() -> Theme {
    Theme {
        name: "light".to_string(),
        description: "Green and indigo on the terminal background".to_string(),
        primary: ThemeColor::from("#4caf50"),          // green 500
        primary_contrast: ThemeColor::from("#ffffff"),
        secondary: ThemeColor::from("#3f51b5"),        // indigo 500
        error: ThemeColor::from("#f44336"),            // red 500
        text: ThemeColor::Default,
        text_muted: ThemeColor::from("#757575"),
        text_disabled: ThemeColor::from("#bdbdbd"),
        background: ThemeColor::Default,
        surface: ThemeColor::from("#fafafa"),
        selected: ThemeColor::from("#c8e6c9"),         // green 100
        border: ThemeColor::from("#9e9e9e"),
        border_focus: ThemeColor::from("#388e3c"),     // green 700
    }
}

/// Dark theme: lighter shades of the same palette.
pub fn dark() -> Theme {
    Theme {
        name: "dark".to_string(),
        description: "Light green and indigo on a dark surface".to_string(),
        primary: ThemeColor::from("#81c784"),          // green 300
        primary_contrast: ThemeColor::from("#1b1b1b"),
        secondary: ThemeColor::from("#7986cb"),        // indigo 300
        error: ThemeColor::from("#e57373"),            // red 300
        text: ThemeColor::from("#eeeeee"),
        text_muted: ThemeColor::from("#9e9e9e"),
        text_disabled: ThemeColor::from("#616161"),
        background: ThemeColor::from("#212121"),
        surface: ThemeColor::from("#303030"),
        selected: ThemeColor::from("#2e4a30"),
        border: ThemeColor::from("#616161"),
        border_focus: ThemeColor::from("#81c784"),
    }
}

/// Terminal theme: ANSI colors only.
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        description: "Uses terminal palette colors".to_string(),
        primary: ThemeColor::Ansi(2),   // green
        primary_contrast: ThemeColor::Ansi(0),
        secondary: ThemeColor::Ansi(4), // blue
        error: ThemeColor::Ansi(1),     // red
        text: ThemeColor::Default,
        text_muted: ThemeColor::Ansi(8),
        text_disabled: ThemeColor::Ansi(8),
        background: ThemeColor::Default,
        surface: ThemeColor::Default,
        selected: ThemeColor::Ansi(10),
        border: ThemeColor::Ansi(7),
        border_focus: ThemeColor::Ansi(10),
    }
}

/// Get a preset by name.
pub fn get_preset(name: &str) -> Option<Theme> {
    match name {
        "light" => Some(light()),
        "dark" => Some(dark()),
        "terminal" => Some(terminal()),
        _ => None,
    }
}

/// Names of all presets.
pub fn preset_names() -> &'static [&'static str] {
    &["light", "dark", "terminal"]
}
