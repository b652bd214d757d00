//! Core types for sui-tui.
//!
//! Colors, text attributes and the small enums that flow through the
//! component props, the engine arrays and the renderer.

use crossterm::style::{Attribute, Color as TermColor};

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Special values: r=-1 means "terminal default", r=-2 marks an ANSI palette
/// index stored in `g`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);

    /// Create an ANSI palette color (0-255).
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
            a: 255,
        }
    }

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Check if this is an ANSI palette color.
    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// Get ANSI palette index (only valid if is_ansi() returns true).
    #[inline]
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }

    /// Parse a `#rgb` / `#rrggbb` hex string.
    pub fn parse(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        match hex.len() {
            3 => {
                let expand = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Some(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            _ => None,
        }
    }

    /// Convert to a crossterm color. `None` means "leave the terminal default".
    pub fn to_term_color(&self) -> Option<TermColor> {
        if self.is_terminal_default() {
            None
        } else if self.is_ansi() {
            Some(TermColor::AnsiValue(self.ansi_index()))
        } else {
            Some(TermColor::Rgb {
                r: self.r as u8,
                g: self.g as u8,
                b: self.b as u8,
            })
        }
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 5;
        const STRIKETHROUGH = 1 << 7;
    }
}

impl Attr {
    /// crossterm attributes for every flag that is set.
    pub fn to_term_attributes(self) -> Vec<Attribute> {
        let mut out = Vec::new();
        if self.contains(Attr::BOLD) {
            out.push(Attribute::Bold);
        }
        if self.contains(Attr::DIM) {
            out.push(Attribute::Dim);
        }
        if self.contains(Attr::ITALIC) {
            out.push(Attribute::Italic);
        }
        if self.contains(Attr::UNDERLINE) {
            out.push(Attribute::Underlined);
        }
        if self.contains(Attr::INVERSE) {
            out.push(Attribute::Reverse);
        }
        if self.contains(Attr::STRIKETHROUGH) {
            out.push(Attribute::CrossedOut);
        }
        out
    }
}

// =============================================================================
// Component Types - For parallel arrays
// =============================================================================

/// Component kinds recorded in the core array.
///
/// The kind decides the tag used when a component is rendered to a node tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ComponentType {
    #[default]
    None = 0,
    Box = 1,
    Text = 2,
    Button = 3,
    List = 4,
    ListItem = 5,
    Menu = 6,
    FormControl = 7,
    Label = 8,
    HelperText = 9,
    Input = 10,
    Select = 11,
    Checkbox = 12,
    Tabs = 13,
}

impl ComponentType {
    /// Element tag used by the node tree.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::None | Self::Box | Self::FormControl | Self::Menu | Self::Tabs | Self::Select => "div",
            Self::Text => "span",
            Self::Button => "button",
            Self::List => "ul",
            Self::ListItem => "li",
            Self::Label => "label",
            Self::HelperText => "p",
            Self::Input => "input",
            Self::Checkbox => "span",
        }
    }

    /// Whether the tag lays out on its own line when painted.
    pub const fn is_block(&self) -> bool {
        matches!(
            self,
            Self::Box
                | Self::List
                | Self::ListItem
                | Self::Menu
                | Self::FormControl
                | Self::HelperText
                | Self::Tabs
        )
    }
}

// =============================================================================
// Component Enums
// =============================================================================

/// Component size shared by form controls and their children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Visual variant of text fields, selects and form controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldVariant {
    #[default]
    Standard,
    Outlined,
}

impl FieldVariant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Outlined => "outlined",
        }
    }
}

/// Button fill variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Contained,
    Outlined,
    Text,
}

impl ButtonVariant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Contained => "contained",
            Self::Outlined => "outlined",
            Self::Text => "text",
        }
    }
}

/// Semantic palette color a component is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorRole {
    #[default]
    Default,
    Primary,
    Secondary,
}

impl ColorRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

/// Layout direction of grouped components (tabs, form groups).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

// =============================================================================
// Tests
// =============================================================================
