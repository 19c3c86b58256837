//! Segment stream types.
//!
//! A segment is the unit the formatting layer hands to a renderer: a run of
//! text, an optional style, and optional control operations. Segments are
//! consumed once and never mutated.

use serde::Deserialize;

use crate::color::Color;

/// Foreground and background colors of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Style {
    #[serde(default)]
    pub fg: Option<Color>,
    #[serde(default)]
    pub bg: Option<Color>,
}

impl Style {
    pub fn new(fg: Option<Color>, bg: Option<Color>) -> Self {
        Self { fg, bg }
    }

    pub fn fg(color: Color) -> Self {
        Self::new(Some(color), None)
    }

    /// True if at least one color is set explicitly.
    pub fn has_color(&self) -> bool {
        self.fg.is_some() || self.bg.is_some()
    }
}

/// Erase-in-line modes (CSI K).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseMode {
    /// Cursor to end of line
    ToEnd,
    /// Start of line to cursor (inclusive)
    ToStart,
    /// Whole line
    Whole,
}

impl EraseMode {
    /// Mode for a raw erase-in-line parameter; `None` for anything but 0, 1, 2.
    pub fn from_code(mode: i64) -> Option<Self> {
        match mode {
            0 => Some(Self::ToEnd),
            1 => Some(Self::ToStart),
            2 => Some(Self::Whole),
            _ => None,
        }
    }
}

/// Cursor and erase instructions embedded in a segment.
///
/// Positions are 1-based with the origin at the top-left of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlCode {
    Bell,
    CarriageReturn,
    Home,
    CursorUp,
    CursorDown,
    CursorForward,
    CursorBackward,
    CursorMoveToColumn { column: u16 },
    CursorMoveTo { column: u16, row: u16 },
    EraseInLine { mode: i64 },
    /// Any control the renderer does not know about.
    #[serde(other)]
    Unknown,
}

/// A run of text with optional style and control operations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub style: Option<Style>,
    #[serde(default)]
    pub control: Option<Vec<ControlCode>>,
}

impl Segment {
    /// Unstyled text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Styled text.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
            control: None,
        }
    }

    /// A segment carrying only control operations.
    pub fn control(codes: impl Into<Vec<ControlCode>>) -> Self {
        Self {
            control: Some(codes.into()),
            ..Self::default()
        }
    }
}
