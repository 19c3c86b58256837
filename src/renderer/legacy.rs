//! Legacy console renderer.
//!
//! Turns segments into attribute writes and cursor/fill primitives against a
//! [`ConsoleHost`]. Every primitive failure is logged and skipped: a partly
//! rendered frame beats an aborted one.

use tracing::debug;

use super::handlers::{log_ignored_control, swallow};
use super::SegmentRenderer;
use crate::color::{Attribute, PaletteMapper};
use crate::console::{ConsoleHost, ScreenPos};
use crate::segment::{ControlCode, EraseMode, Segment, Style};

/// Renders segments onto a legacy console host.
///
/// The host's default attribute is captured once at construction and
/// restored after every styled write, so no color leaks into later output.
#[derive(Debug)]
pub struct LegacyRenderer<H: ConsoleHost> {
    pub(crate) host: H,
    pub(crate) default_attribute: Attribute,
    palette: PaletteMapper,
}

impl<H: ConsoleHost> LegacyRenderer<H> {
    /// Create a renderer, capturing the host's current default attribute.
    pub fn new(host: H) -> Self {
        Self::with_fallback(host, Attribute::FALLBACK)
    }

    /// Like [`LegacyRenderer::new`], using `fallback` if the host cannot
    /// report its default attribute.
    pub fn with_fallback(mut host: H, fallback: Attribute) -> Self {
        let default_attribute = match host.default_attribute() {
            Ok(attribute) => attribute,
            Err(err) => {
                debug!(error = %err, fallback = fallback.0, "Using fallback console attribute");
                fallback
            }
        };
        debug!(
            attribute = default_attribute.0,
            "Captured default console attribute"
        );
        Self {
            host,
            default_attribute,
            palette: PaletteMapper::from_default(default_attribute),
        }
    }

    pub fn default_attribute(&self) -> Attribute {
        self.default_attribute
    }

    pub fn palette(&self) -> &PaletteMapper {
        &self.palette
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Write text verbatim with no attribute change.
    pub fn write_text(&mut self, text: &str) {
        swallow("write_raw", self.host.write_raw(text));
        swallow("flush", self.host.flush());
    }

    /// Set the style's attribute, write the text, restore the default.
    pub fn write_styled(&mut self, text: &str, style: &Style) {
        let attribute = self.palette.attribute_for(style);
        swallow("set_attribute", self.host.set_attribute(attribute));
        self.write_text(text);
        swallow("set_attribute", self.host.set_attribute(self.default_attribute));
    }

    /// Execute a single control operation.
    pub fn apply_control(&mut self, code: ControlCode) {
        match code {
            ControlCode::Bell => self.write_text("\x07"),
            ControlCode::CarriageReturn => self.write_text("\r"),
            ControlCode::Home => self.handle_home(),
            ControlCode::CursorUp => self.handle_cursor_up(),
            ControlCode::CursorDown => self.handle_cursor_down(),
            ControlCode::CursorForward => self.handle_cursor_forward(),
            ControlCode::CursorBackward => self.handle_cursor_backward(),
            ControlCode::CursorMoveToColumn { column } => self.handle_move_to_column(column),
            ControlCode::CursorMoveTo { column, row } => {
                self.handle_move_to(ScreenPos::new(row, column))
            }
            ControlCode::EraseInLine { mode } => match EraseMode::from_code(mode) {
                Some(mode) => self.handle_erase_line(mode),
                None => log_ignored_control(&code),
            },
            ControlCode::Unknown => log_ignored_control(&code),
        }
    }
}

impl<H: ConsoleHost> SegmentRenderer for LegacyRenderer<H> {
    fn render_segment(&mut self, segment: &Segment) {
        if !segment.text.is_empty() {
            match segment.style.as_ref().filter(|style| style.has_color()) {
                Some(style) => self.write_styled(&segment.text, style),
                None => self.write_text(&segment.text),
            }
        }

        if let Some(codes) = &segment.control {
            for code in codes {
                self.apply_control(*code);
            }
        }
    }
}
