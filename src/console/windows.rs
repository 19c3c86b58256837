//! Windows console host.
//!
//! Coordinates in the Windows console API are (x, y), i.e. column before row.
//! `to_coord` is the only place a `NativeCoord` becomes an API `Coord`.

use std::io::{self, Stdout, Write};

use crossterm_winapi::{result, Console, Coord, Handle, HandleType, ScreenBuffer};
use winapi::um::wincon::SetConsoleCursorPosition;

use super::{ConsoleError, ConsoleHost, ConsoleResult, NativeCoord, ScreenSize, ViewportOffset};
use crate::color::Attribute;

/// The process's active console screen buffer.
pub struct WinConsole {
    screen_buffer: ScreenBuffer,
    console: Console,
    out: Stdout,
}

impl WinConsole {
    /// Open the process's stdout handle.
    ///
    /// Fails with `ConsoleError::Unsupported` when stdout is not a console
    /// (redirected to a file or pipe).
    pub fn stdout() -> ConsoleResult<Self> {
        // The std handle, not CONOUT$: attribute and cursor calls must act on
        // the same target that `write_raw` writes to.
        let handle = Handle::new(HandleType::OutputHandle)?;
        let screen_buffer = ScreenBuffer::from(handle.clone());
        // A redirected stdout is a file or pipe and has no screen buffer info
        screen_buffer
            .info()
            .map_err(|_| ConsoleError::Unsupported)?;
        Ok(Self {
            screen_buffer,
            console: Console::from(handle),
            out: io::stdout(),
        })
    }
}

fn to_coord(position: NativeCoord) -> ConsoleResult<Coord> {
    let col = i16::try_from(position.col).map_err(|_| ConsoleError::OutOfBounds {
        row: position.row,
        col: position.col,
    })?;
    let row = i16::try_from(position.row).map_err(|_| ConsoleError::OutOfBounds {
        row: position.row,
        col: position.col,
    })?;
    Ok(Coord::new(col, row))
}

impl ConsoleHost for WinConsole {
    fn default_attribute(&mut self) -> ConsoleResult<Attribute> {
        Ok(Attribute(self.screen_buffer.info()?.attributes()))
    }

    fn set_attribute(&mut self, attribute: Attribute) -> ConsoleResult<()> {
        self.console.set_text_attribute(attribute.0)?;
        Ok(())
    }

    fn cursor_position(&mut self) -> ConsoleResult<NativeCoord> {
        let pos = self.screen_buffer.info()?.cursor_pos();
        Ok(NativeCoord::new(i32::from(pos.y), i32::from(pos.x)))
    }

    fn set_cursor_position(&mut self, position: NativeCoord) -> ConsoleResult<()> {
        if position.is_negative() {
            return Err(ConsoleError::NegativeCoordinate {
                row: position.row,
                col: position.col,
            });
        }
        let coord = to_coord(position)?;
        // SAFETY: the handle is a live console output handle owned by `screen_buffer`.
        let ok = unsafe { SetConsoleCursorPosition(**self.screen_buffer.handle(), coord.into()) };
        result(ok)?;
        Ok(())
    }

    fn screen_size(&mut self) -> ConsoleResult<ScreenSize> {
        let size = self.screen_buffer.info()?.buffer_size();
        Ok(ScreenSize::new(i32::from(size.height), i32::from(size.width)))
    }

    fn viewport_offset(&mut self) -> ConsoleResult<ViewportOffset> {
        let window = self.screen_buffer.info()?.terminal_window();
        Ok(ViewportOffset::new(
            i32::from(window.top),
            i32::from(window.left),
        ))
    }

    fn fill_characters(&mut self, ch: char, count: u32, start: NativeCoord) -> ConsoleResult<u32> {
        Ok(self
            .console
            .fill_whit_character(to_coord(start)?, count, ch)?)
    }

    fn fill_attributes(
        &mut self,
        attribute: Attribute,
        count: u32,
        start: NativeCoord,
    ) -> ConsoleResult<u32> {
        Ok(self
            .console
            .fill_whit_attribute(to_coord(start)?, count, attribute.0)?)
    }

    fn write_raw(&mut self, text: &str) -> ConsoleResult<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> ConsoleResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
