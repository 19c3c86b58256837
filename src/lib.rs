//! legacy-term Library
//!
//! Renders a stream of styled text segments and control codes on consoles
//! that predate VT sequence support, using console attribute and cursor
//! primitives. VT-capable terminals and redirected output get their own
//! backends behind the same [`renderer::SegmentRenderer`] interface.

pub mod capabilities;
pub mod color;
pub mod config;
pub mod console;
pub mod renderer;
pub mod segment;

pub use capabilities::{BackendKind, Capabilities};
pub use color::{Attribute, Color, ColorTier};
pub use config::Config;
pub use console::{ConsoleError, ConsoleHost, MemoryConsole};
pub use renderer::{AnsiRenderer, LegacyRenderer, PlainRenderer, SegmentRenderer};
pub use segment::{ControlCode, EraseMode, Segment, Style};
