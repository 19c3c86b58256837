//! Color model and downgrade.
//!
//! Contains the color representations the formatting layer hands us:
//! - Color: default, 16 named ANSI colors, 256-color palette, RGB
//! - ColorTier: the capability tier a color is reduced to before output
//!
//! The legacy console palette mapping lives in [`palette`].

mod palette;

pub use palette::{ansi_to_native, Attribute, PaletteMapper, Role, ANSI_TO_NATIVE};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// ANSI color codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Color {
    /// Inherit the host default
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 256-color palette index
    Indexed(u8),
    /// RGB color
    Rgb(u8, u8, u8),
}

/// Capability tier a color is downgraded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTier {
    /// 8-color legacy console attribute palette
    Legacy,
    /// 16 standard ANSI colors
    Standard,
    /// xterm 256-color palette
    EightBit,
    TrueColor,
}

impl ColorTier {
    /// Choose the best tier from detection flags.
    pub const fn from_flags(true_color: bool, colors_256: bool) -> Self {
        if true_color {
            Self::TrueColor
        } else if colors_256 {
            Self::EightBit
        } else {
            Self::Standard
        }
    }
}

const NAMED: [Color; 16] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
    Color::BrightBlack,
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightYellow,
    Color::BrightBlue,
    Color::BrightMagenta,
    Color::BrightCyan,
    Color::BrightWhite,
];

const NAMES: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "bright_black",
    "bright_red",
    "bright_green",
    "bright_yellow",
    "bright_blue",
    "bright_magenta",
    "bright_cyan",
    "bright_white",
];

/// xterm default values for the 16 standard colors.
const STANDARD_PALETTE: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// Legacy console palette, in ANSI order.
const LEGACY_PALETTE: [(u8, u8, u8); 8] = [
    (12, 12, 12),
    (197, 15, 31),
    (19, 161, 14),
    (193, 156, 0),
    (0, 55, 218),
    (136, 23, 152),
    (58, 150, 221),
    (204, 204, 204),
];

impl Color {
    /// Named color for an ANSI number in 0..16.
    pub fn from_ansi(number: u8) -> Option<Self> {
        NAMED.get(number as usize).copied()
    }

    /// The ANSI number of this color, if it has one.
    ///
    /// `Default` and `Rgb` colors have no number.
    pub fn number(self) -> Option<u8> {
        match self {
            Self::Default | Self::Rgb(..) => None,
            Self::Indexed(n) => Some(n),
            named => NAMED.iter().position(|c| *c == named).map(|i| i as u8),
        }
    }

    /// Reduce this color to the nearest color representable in `tier`.
    pub fn downgrade(self, tier: ColorTier) -> Self {
        match (tier, self) {
            (_, Self::Default) | (ColorTier::TrueColor, _) => self,
            (ColorTier::EightBit, Self::Rgb(r, g, b)) => Self::Indexed(rgb_to_256(r, g, b)),
            (ColorTier::EightBit, _) => self,
            (ColorTier::Standard, Self::Indexed(n)) if n < 16 => NAMED[n as usize],
            (ColorTier::Standard, Self::Indexed(n)) => {
                let (r, g, b) = ansi256_to_rgb(n);
                NAMED[nearest(&STANDARD_PALETTE, (r, g, b))]
            }
            (ColorTier::Standard, Self::Rgb(r, g, b)) => NAMED[nearest(&STANDARD_PALETTE, (r, g, b))],
            (ColorTier::Standard, _) => self,
            (ColorTier::Legacy, Self::Indexed(n)) if n < 16 => NAMED[(n & 7) as usize],
            (ColorTier::Legacy, Self::Indexed(n)) => {
                NAMED[nearest(&LEGACY_PALETTE, ansi256_to_rgb(n))]
            }
            (ColorTier::Legacy, Self::Rgb(r, g, b)) => NAMED[nearest(&LEGACY_PALETTE, (r, g, b))],
            // Bright variants fold onto their base color
            (ColorTier::Legacy, named) => match named.number() {
                Some(n) => NAMED[(n & 7) as usize],
                None => named,
            },
        }
    }
}

/// Nearest xterm 256-color index for an RGB triplet.
pub fn rgb_to_256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return 232 + ((r - 8) / 10).min(23);
    }

    let r6 = (r as u16 * 6 / 256) as u8;
    let g6 = (g as u16 * 6 / 256) as u8;
    let b6 = (b as u16 * 6 / 256) as u8;
    16 + 36 * r6 + 6 * g6 + b6
}

/// RGB value of an xterm 256-color index.
pub fn ansi256_to_rgb(index: u8) -> (u8, u8, u8) {
    const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
    if index < 16 {
        return STANDARD_PALETTE[index as usize];
    }
    if index >= 232 {
        let gray = 8 + 10 * (index - 232);
        return (gray, gray, gray);
    }
    let idx = index - 16;
    (
        LEVELS[(idx / 36) as usize],
        LEVELS[((idx / 6) % 6) as usize],
        LEVELS[(idx % 6) as usize],
    )
}

fn nearest(palette: &[(u8, u8, u8)], target: (u8, u8, u8)) -> usize {
    palette
        .iter()
        .enumerate()
        .min_by_key(|(_, candidate)| weighted_distance(target, **candidate))
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

// ITU-R BT.709 luma weights
fn weighted_distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> u64 {
    let dr = (a.0 as i64 - b.0 as i64).pow(2) as u64;
    let dg = (a.1 as i64 - b.1 as i64).pow(2) as u64;
    let db = (a.2 as i64 - b.2 as i64).pow(2) as u64;
    2126 * dr + 7152 * dg + 722 * db
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid color: {0:?}")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse `default`, a color name (`red`, `bright_blue`), `color(N)` or `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let err = || ColorParseError(s.to_string());

        if normalized == "default" {
            return Ok(Self::Default);
        }
        if let Some(idx) = NAMES.iter().position(|name| *name == normalized) {
            return Ok(NAMED[idx]);
        }
        if let Some(inner) = normalized
            .strip_prefix("color(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return inner.parse::<u8>().map(Self::Indexed).map_err(|_| err());
        }
        if let Some(hex) = normalized.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(err());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
            return Ok(Self::Rgb(channel(0)?, channel(2)?, channel(4)?));
        }
        Err(err())
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Indexed(n) => write!(f, "color({})", n),
            Self::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            named => {
                let idx = named.number().unwrap_or(0) as usize;
                write!(f, "{}", NAMES[idx])
            }
        }
    }
}
