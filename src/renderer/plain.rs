//! No-op backend: text only.
//!
//! Used when output is not a terminal. Styles and cursor controls are
//! dropped; carriage returns and bells are kept because they are plain
//! characters.

use std::io::{self, Write};

use tracing::trace;

use super::SegmentRenderer;
use crate::segment::{ControlCode, Segment};

/// Writes segment text and nothing else.
#[derive(Debug)]
pub struct PlainRenderer<W: Write> {
    out: W,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn try_render(&mut self, segment: &Segment) -> io::Result<()> {
        self.out.write_all(segment.text.as_bytes())?;
        for code in segment.control.iter().flatten() {
            match code {
                ControlCode::CarriageReturn => self.out.write_all(b"\r")?,
                ControlCode::Bell => self.out.write_all(b"\x07")?,
                _ => {}
            }
        }
        self.out.flush()
    }
}

impl<W: Write> SegmentRenderer for PlainRenderer<W> {
    fn render_segment(&mut self, segment: &Segment) {
        if let Err(err) = self.try_render(segment) {
            trace!(error = %err, "Plain write failed");
        }
    }
}
