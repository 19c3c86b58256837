//! Segment renderers.
//!
//! Three backends share the [`SegmentRenderer`] interface:
//! - [`LegacyRenderer`]: attribute + cursor primitives on a legacy console
//! - [`AnsiRenderer`]: VT escape sequences for modern terminals
//! - [`PlainRenderer`]: text only, for redirected output
//!
//! The backend is chosen once at startup (see [`crate::capabilities`]),
//! never inside the render loop.

mod ansi;
mod handlers;
mod legacy;
mod plain;

#[cfg(test)]
mod tests;

pub use ansi::AnsiRenderer;
pub use legacy::LegacyRenderer;
pub use plain::PlainRenderer;

use std::io;

use crate::capabilities::BackendKind;
use crate::color::{Attribute, ColorTier};
use crate::console::ConsoleError;
use crate::segment::Segment;

/// Consumes segments in order, issuing output immediately.
pub trait SegmentRenderer {
    /// Render one segment: its text, then its control codes.
    fn render_segment(&mut self, segment: &Segment);

    /// Render every segment in order.
    fn render<'a, I>(&mut self, segments: I)
    where
        I: IntoIterator<Item = &'a Segment>,
        Self: Sized,
    {
        for segment in segments {
            self.render_segment(segment);
        }
    }
}

impl<R: SegmentRenderer + ?Sized> SegmentRenderer for Box<R> {
    fn render_segment(&mut self, segment: &Segment) {
        (**self).render_segment(segment);
    }
}

/// Open a renderer for stdout using the given backend.
///
/// `fallback` is the attribute assumed if a legacy console cannot report
/// its default.
///
/// # Errors
/// - `ConsoleError::Unsupported` - legacy backend requested where no legacy console exists
pub fn open_renderer(
    kind: BackendKind,
    tier: ColorTier,
    fallback: Attribute,
) -> Result<Box<dyn SegmentRenderer>, ConsoleError> {
    match kind {
        BackendKind::Legacy => open_legacy(fallback),
        BackendKind::Ansi => Ok(Box::new(AnsiRenderer::new(io::stdout(), tier))),
        BackendKind::Plain => Ok(Box::new(PlainRenderer::new(io::stdout()))),
    }
}

#[cfg(windows)]
fn open_legacy(fallback: Attribute) -> Result<Box<dyn SegmentRenderer>, ConsoleError> {
    let console = crate::console::WinConsole::stdout()?;
    Ok(Box::new(LegacyRenderer::with_fallback(console, fallback)))
}

#[cfg(not(windows))]
fn open_legacy(_fallback: Attribute) -> Result<Box<dyn SegmentRenderer>, ConsoleError> {
    Err(ConsoleError::Unsupported)
}
