//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::capabilities::{BackendChoice, TierChoice};
use crate::color::Attribute;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub legacy: LegacyConfig,
}

/// Backend and color selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Which renderer to use; `auto` probes the console
    #[serde(default)]
    pub backend: BackendChoice,
    /// Color tier for ANSI output; `auto` reads COLORTERM/TERM
    #[serde(default)]
    pub color_tier: TierChoice,
}

/// Legacy console settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyConfig {
    /// Attribute assumed when the console cannot report its own
    #[serde(default = "default_fallback_attribute")]
    pub fallback_attribute: u16,
}

pub fn default_fallback_attribute() -> u16 {
    Attribute::FALLBACK.0
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            fallback_attribute: default_fallback_attribute(),
        }
    }
}

impl LegacyConfig {
    /// Only the low byte (foreground and background nibbles) is meaningful.
    pub fn validate(&self) -> Result<(), String> {
        if self.fallback_attribute > 0xFF {
            return Err(format!(
                "legacy.fallback_attribute {:#x} exceeds maximum (0xff)",
                self.fallback_attribute
            ));
        }
        Ok(())
    }

    pub fn fallback(&self) -> Attribute {
        Attribute(self.fallback_attribute)
    }
}
