//! Console host primitives.
//!
//! A legacy console host exposes a "current text attribute" register and
//! explicit cursor/fill calls instead of an escape-sequence interpreter.
//! [`ConsoleHost`] is that primitive set; the renderer only talks to it.
//!
//! Hosts:
//! - [`MemoryConsole`]: in-memory screen buffer, used by tests and previews
//! - `WinConsole`: the real Windows console (Windows only)

mod coords;
mod error;
mod memory;
#[cfg(windows)]
mod windows;

pub use coords::{NativeCoord, ScreenPos, ScreenSize, ViewportOffset};
pub use error::ConsoleError;
pub use memory::{ConsoleCall, MemoryCell, MemoryConsole};
#[cfg(windows)]
pub use windows::WinConsole;

use crate::color::Attribute;

/// Result type for console primitives.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Primitive operations of a legacy console.
///
/// The host owns its handle; every call is synchronous and blocking.
pub trait ConsoleHost {
    /// The attribute the console uses for unstyled text.
    fn default_attribute(&mut self) -> ConsoleResult<Attribute>;

    /// Set the attribute used for subsequently written text.
    fn set_attribute(&mut self, attribute: Attribute) -> ConsoleResult<()>;

    fn cursor_position(&mut self) -> ConsoleResult<NativeCoord>;

    /// Move the cursor. Fails if either axis is negative.
    fn set_cursor_position(&mut self, position: NativeCoord) -> ConsoleResult<()>;

    /// Size of the screen buffer.
    fn screen_size(&mut self) -> ConsoleResult<ScreenSize>;

    /// Top-left of the visible window within the screen buffer.
    fn viewport_offset(&mut self) -> ConsoleResult<ViewportOffset>;

    /// Write `ch` into `count` cells starting at `start`. Returns cells written.
    fn fill_characters(&mut self, ch: char, count: u32, start: NativeCoord) -> ConsoleResult<u32>;

    /// Set the attribute of `count` cells starting at `start`. Returns cells written.
    fn fill_attributes(
        &mut self,
        attribute: Attribute,
        count: u32,
        start: NativeCoord,
    ) -> ConsoleResult<u32>;

    /// Write text verbatim at the cursor.
    fn write_raw(&mut self, text: &str) -> ConsoleResult<()>;

    fn flush(&mut self) -> ConsoleResult<()>;
}

impl<H: ConsoleHost + ?Sized> ConsoleHost for &mut H {
    fn default_attribute(&mut self) -> ConsoleResult<Attribute> {
        (**self).default_attribute()
    }

    fn set_attribute(&mut self, attribute: Attribute) -> ConsoleResult<()> {
        (**self).set_attribute(attribute)
    }

    fn cursor_position(&mut self) -> ConsoleResult<NativeCoord> {
        (**self).cursor_position()
    }

    fn set_cursor_position(&mut self, position: NativeCoord) -> ConsoleResult<()> {
        (**self).set_cursor_position(position)
    }

    fn screen_size(&mut self) -> ConsoleResult<ScreenSize> {
        (**self).screen_size()
    }

    fn viewport_offset(&mut self) -> ConsoleResult<ViewportOffset> {
        (**self).viewport_offset()
    }

    fn fill_characters(&mut self, ch: char, count: u32, start: NativeCoord) -> ConsoleResult<u32> {
        (**self).fill_characters(ch, count, start)
    }

    fn fill_attributes(
        &mut self,
        attribute: Attribute,
        count: u32,
        start: NativeCoord,
    ) -> ConsoleResult<u32> {
        (**self).fill_attributes(attribute, count, start)
    }

    fn write_raw(&mut self, text: &str) -> ConsoleResult<()> {
        (**self).write_raw(text)
    }

    fn flush(&mut self) -> ConsoleResult<()> {
        (**self).flush()
    }
}
