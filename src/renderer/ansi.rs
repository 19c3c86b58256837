//! ANSI passthrough renderer.
//!
//! For hosts that interpret VT sequences: styles become SGR sequences and
//! control codes become the matching CSI sequences.

use std::io::{self, Write};

use crossterm::cursor::{MoveDown, MoveLeft, MoveRight, MoveTo, MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use tracing::trace;

use super::handlers::log_ignored_control;
use super::SegmentRenderer;
use crate::color::{Color, ColorTier};
use crate::segment::{ControlCode, EraseMode, Segment, Style};

/// Erase from start of line to cursor; crossterm has no `ClearType` for it.
const ERASE_TO_LINE_START: &str = "\x1b[1K";

/// Renders segments as VT escape sequences.
#[derive(Debug)]
pub struct AnsiRenderer<W: Write> {
    out: W,
    tier: ColorTier,
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(out: W, tier: ColorTier) -> Self {
        Self { out, tier }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_styled(&mut self, text: &str, style: &Style) -> io::Result<()> {
        if let Some(fg) = style.fg {
            queue!(self.out, SetForegroundColor(to_crossterm(fg, self.tier)))?;
        }
        if let Some(bg) = style.bg {
            queue!(self.out, SetBackgroundColor(to_crossterm(bg, self.tier)))?;
        }
        queue!(self.out, Print(text), ResetColor)
    }

    fn apply_control(&mut self, code: ControlCode) -> io::Result<()> {
        match code {
            ControlCode::Bell => queue!(self.out, Print("\x07")),
            ControlCode::CarriageReturn => queue!(self.out, Print("\r")),
            ControlCode::Home => queue!(self.out, MoveTo(0, 0)),
            ControlCode::CursorUp => queue!(self.out, MoveUp(1)),
            ControlCode::CursorDown => queue!(self.out, MoveDown(1)),
            ControlCode::CursorForward => queue!(self.out, MoveRight(1)),
            ControlCode::CursorBackward => queue!(self.out, MoveLeft(1)),
            ControlCode::CursorMoveToColumn { column } => {
                queue!(self.out, MoveToColumn(column.saturating_sub(1)))
            }
            ControlCode::CursorMoveTo { column, row } => queue!(
                self.out,
                MoveTo(column.saturating_sub(1), row.saturating_sub(1))
            ),
            ControlCode::EraseInLine { mode } => match EraseMode::from_code(mode) {
                Some(EraseMode::ToEnd) => queue!(self.out, Clear(ClearType::UntilNewLine)),
                Some(EraseMode::ToStart) => queue!(self.out, Print(ERASE_TO_LINE_START)),
                Some(EraseMode::Whole) => queue!(self.out, Clear(ClearType::CurrentLine)),
                None => {
                    log_ignored_control(&code);
                    Ok(())
                }
            },
            ControlCode::Unknown => {
                log_ignored_control(&code);
                Ok(())
            }
        }
    }

    fn try_render(&mut self, segment: &Segment) -> io::Result<()> {
        if !segment.text.is_empty() {
            match segment.style.as_ref().filter(|style| style.has_color()) {
                Some(style) => self.write_styled(&segment.text, style)?,
                None => queue!(self.out, Print(&segment.text))?,
            }
        }
        for code in segment.control.iter().flatten() {
            self.apply_control(*code)?;
        }
        self.out.flush()
    }
}

/// Downgrade to `tier` and convert to a crossterm color.
fn to_crossterm(color: Color, tier: ColorTier) -> style::Color {
    match color.downgrade(tier) {
        Color::Rgb(r, g, b) => style::Color::Rgb { r, g, b },
        other => other
            .number()
            .map(style::Color::AnsiValue)
            .unwrap_or(style::Color::Reset),
    }
}

impl<W: Write> SegmentRenderer for AnsiRenderer<W> {
    fn render_segment(&mut self, segment: &Segment) {
        if let Err(err) = self.try_render(segment) {
            trace!(error = %err, "ANSI write failed");
        }
    }
}
