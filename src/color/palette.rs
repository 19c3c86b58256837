//! Legacy console palette mapping and packed attribute words.
//!
//! The host palette orders its first eight entries by bit (blue = 1,
//! green = 2, red = 4), while ANSI orders them red = 1, green = 2, blue = 4.
//! Red and blue swap places; everything else follows from that.

use super::{Color, ColorTier};
use crate::segment::Style;

/// ANSI color number (index) to host palette number (value).
pub const ANSI_TO_NATIVE: [u8; 8] = [0, 4, 2, 6, 1, 5, 3, 7];

/// Map an ANSI color number onto the host palette.
///
/// Returns `None` for numbers outside 0..8.
pub fn ansi_to_native(ansi: u8) -> Option<u8> {
    ANSI_TO_NATIVE.get(ansi as usize).copied()
}

/// Packed host text attribute: low nibble foreground, next nibble background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attribute(pub u16);

impl Attribute {
    /// White on black, the host's factory default.
    pub const FALLBACK: Attribute = Attribute(0x07);

    /// Pack a foreground and background palette index.
    pub const fn pack(fore: u8, back: u8) -> Self {
        Attribute(fore as u16 + back as u16 * 16)
    }

    /// Foreground palette index (intensity bit dropped).
    pub const fn foreground(self) -> u8 {
        (self.0 & 7) as u8
    }

    /// Background palette index (intensity bit dropped).
    pub const fn background(self) -> u8 {
        ((self.0 >> 4) & 7) as u8
    }
}

/// Which half of the attribute a color fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Foreground,
    Background,
}

/// Resolves style colors to host palette indices.
///
/// Every color resolves to something: absent colors and colors without a
/// number fall back to the host default captured at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteMapper {
    default_fore: u8,
    default_back: u8,
}

impl PaletteMapper {
    /// Capture default foreground/background from the host's default attribute.
    pub fn from_default(default: Attribute) -> Self {
        Self {
            default_fore: default.foreground(),
            default_back: default.background(),
        }
    }

    pub fn default_fore(&self) -> u8 {
        self.default_fore
    }

    pub fn default_back(&self) -> u8 {
        self.default_back
    }

    /// Resolve an optional color for `role` to a host palette index in 0..8.
    pub fn resolve(&self, color: Option<&Color>, role: Role) -> u8 {
        let default = match role {
            Role::Foreground => self.default_fore,
            Role::Background => self.default_back,
        };
        color
            .and_then(|c| c.downgrade(ColorTier::Legacy).number())
            .and_then(ansi_to_native)
            .unwrap_or(default)
    }

    /// Packed attribute for a style's foreground and background.
    pub fn attribute_for(&self, style: &Style) -> Attribute {
        let fore = self.resolve(style.fg.as_ref(), Role::Foreground);
        let back = self.resolve(style.bg.as_ref(), Role::Background);
        Attribute::pack(fore, back)
    }
}
