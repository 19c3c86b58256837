//! In-memory legacy console.
//!
//! Simulates a legacy console screen buffer: a grid of cells, each holding a
//! character and an attribute word, plus a cursor, an attribute register, and
//! a viewport offset. Every mutating primitive is recorded in a call log so
//! tests can assert on the exact sequence a renderer issued.
//!
//! Written text goes through a VTE parser the same way a real host would see
//! it: printable characters land at the cursor, C0 controls (CR, LF, BS, TAB,
//! BEL) are executed, and escape sequences are dropped because a legacy host
//! has no VT interpreter. Each write starts from a fresh parser; the host
//! keeps no escape state between writes.
//!
//! Output is processed the way a legacy console does by default: LF returns
//! to column 0 as well as moving down.

use std::fmt;

use tracing::trace;
use unicode_width::UnicodeWidthChar;
use vte::{Parser, Perform};

use super::{ConsoleError, ConsoleHost, ConsoleResult, NativeCoord, ScreenSize, ViewportOffset};
use crate::color::Attribute;

/// A single cell of the screen buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryCell {
    pub ch: char,
    pub attribute: Attribute,
}

impl MemoryCell {
    fn blank(attribute: Attribute) -> Self {
        Self { ch: ' ', attribute }
    }
}

/// A recorded mutating primitive call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCall {
    SetAttribute(Attribute),
    SetCursorPosition(NativeCoord),
    FillCharacters {
        ch: char,
        count: u32,
        start: NativeCoord,
    },
    FillAttributes {
        attribute: Attribute,
        count: u32,
        start: NativeCoord,
    },
    Write(String),
}

/// An in-memory console screen buffer.
pub struct MemoryConsole {
    /// Buffer width in columns
    width: usize,
    /// Buffer height in rows
    height: usize,
    buffer: Vec<Vec<MemoryCell>>,
    /// Current cursor row (0-indexed)
    cursor_row: usize,
    /// Current cursor column (0-indexed)
    cursor_col: usize,
    /// Active attribute register
    attribute: Attribute,
    /// Attribute for cells uncovered by scrolling
    blank_attribute: Attribute,
    viewport: ViewportOffset,
    calls: Vec<ConsoleCall>,
    flushes: usize,
    bells: usize,
    /// Primitives that fail with `ConsoleError::Rejected`
    rejected: Vec<&'static str>,
}

impl MemoryConsole {
    /// Create a console buffer with the given dimensions, white on black.
    pub fn new(width: usize, height: usize) -> Self {
        let attribute = Attribute::FALLBACK;
        Self {
            width,
            height,
            buffer: vec![vec![MemoryCell::blank(attribute); width]; height],
            cursor_row: 0,
            cursor_col: 0,
            attribute,
            blank_attribute: attribute,
            viewport: ViewportOffset::default(),
            calls: Vec::new(),
            flushes: 0,
            bells: 0,
            rejected: Vec::new(),
        }
    }

    /// Use `attribute` as the console's starting attribute.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attribute = attribute;
        self.blank_attribute = attribute;
        for cell in self.buffer.iter_mut().flatten() {
            cell.attribute = attribute;
        }
        self
    }

    pub fn with_viewport_offset(mut self, offset: ViewportOffset) -> Self {
        self.viewport = offset;
        self
    }

    /// Scroll the visible window to a new origin.
    pub fn set_viewport_offset(&mut self, offset: ViewportOffset) {
        self.viewport = offset;
    }

    /// Place the cursor without recording a call (for test setup).
    ///
    /// Positions outside the buffer are clamped.
    pub fn place_cursor(&mut self, row: usize, col: usize) {
        self.cursor_row = row.min(self.height.saturating_sub(1));
        self.cursor_col = col.min(self.width.saturating_sub(1));
    }

    /// Make a primitive fail from now on, e.g. `"set_attribute"`.
    pub fn reject(&mut self, operation: &'static str) {
        self.rejected.push(operation);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cursor(&self) -> NativeCoord {
        NativeCoord::new(self.cursor_row as i32, self.cursor_col as i32)
    }

    /// The attribute register as it stands now.
    pub fn current_attribute(&self) -> Attribute {
        self.attribute
    }

    /// Recorded mutating calls, in order.
    pub fn calls(&self) -> &[ConsoleCall] {
        &self.calls
    }

    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    pub fn bell_count(&self) -> usize {
        self.bells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<MemoryCell> {
        self.buffer.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Characters of one row with trailing spaces trimmed.
    pub fn row_text(&self, row: usize) -> String {
        self.buffer
            .get(row)
            .map(|cells| {
                cells
                    .iter()
                    .map(|c| c.ch)
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .unwrap_or_default()
    }

    fn check(&self, operation: &'static str) -> ConsoleResult<()> {
        if self.rejected.contains(&operation) {
            return Err(ConsoleError::Rejected { operation });
        }
        Ok(())
    }

    fn index_of(&self, start: NativeCoord) -> ConsoleResult<usize> {
        let size = ScreenSize::new(self.height as i32, self.width as i32);
        if !size.contains(start) {
            return Err(ConsoleError::OutOfBounds {
                row: start.row,
                col: start.col,
            });
        }
        Ok(start.row as usize * self.width + start.col as usize)
    }

    /// Apply `f` to `count` consecutive cells, wrapping across rows and
    /// stopping at the end of the buffer.
    fn fill_cells(
        &mut self,
        count: u32,
        start: NativeCoord,
        f: impl Fn(&mut MemoryCell),
    ) -> ConsoleResult<u32> {
        let first = self.index_of(start)?;
        let last = (first + count as usize).min(self.width * self.height);
        for idx in first..last {
            f(&mut self.buffer[idx / self.width][idx % self.width]);
        }
        Ok((last - first) as u32)
    }
}

impl ConsoleHost for MemoryConsole {
    fn default_attribute(&mut self) -> ConsoleResult<Attribute> {
        self.check("default_attribute")?;
        Ok(self.attribute)
    }

    fn set_attribute(&mut self, attribute: Attribute) -> ConsoleResult<()> {
        self.check("set_attribute")?;
        self.attribute = attribute;
        self.calls.push(ConsoleCall::SetAttribute(attribute));
        Ok(())
    }

    fn cursor_position(&mut self) -> ConsoleResult<NativeCoord> {
        self.check("cursor_position")?;
        Ok(self.cursor())
    }

    fn set_cursor_position(&mut self, position: NativeCoord) -> ConsoleResult<()> {
        self.check("set_cursor_position")?;
        if position.is_negative() {
            return Err(ConsoleError::NegativeCoordinate {
                row: position.row,
                col: position.col,
            });
        }
        self.index_of(position)?;
        self.cursor_row = position.row as usize;
        self.cursor_col = position.col as usize;
        self.calls.push(ConsoleCall::SetCursorPosition(position));
        Ok(())
    }

    fn screen_size(&mut self) -> ConsoleResult<ScreenSize> {
        self.check("screen_size")?;
        Ok(ScreenSize::new(self.height as i32, self.width as i32))
    }

    fn viewport_offset(&mut self) -> ConsoleResult<ViewportOffset> {
        self.check("viewport_offset")?;
        Ok(self.viewport)
    }

    fn fill_characters(&mut self, ch: char, count: u32, start: NativeCoord) -> ConsoleResult<u32> {
        self.check("fill_characters")?;
        let written = self.fill_cells(count, start, |cell| cell.ch = ch)?;
        self.calls.push(ConsoleCall::FillCharacters { ch, count, start });
        Ok(written)
    }

    fn fill_attributes(
        &mut self,
        attribute: Attribute,
        count: u32,
        start: NativeCoord,
    ) -> ConsoleResult<u32> {
        self.check("fill_attributes")?;
        let written = self.fill_cells(count, start, |cell| cell.attribute = attribute)?;
        self.calls.push(ConsoleCall::FillAttributes {
            attribute,
            count,
            start,
        });
        Ok(written)
    }

    fn write_raw(&mut self, text: &str) -> ConsoleResult<()> {
        self.check("write_raw")?;
        let mut writer = ScreenWriter {
            buffer: &mut self.buffer,
            width: self.width,
            height: self.height,
            cursor_row: &mut self.cursor_row,
            cursor_col: &mut self.cursor_col,
            attribute: self.attribute,
            blank_attribute: self.blank_attribute,
            bells: &mut self.bells,
        };
        Parser::new().advance(&mut writer, text.as_bytes());
        self.calls.push(ConsoleCall::Write(text.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> ConsoleResult<()> {
        self.check("flush")?;
        self.flushes += 1;
        Ok(())
    }
}

impl fmt::Display for MemoryConsole {
    /// Display the buffer content as a string (without attributes).
    ///
    /// Trailing whitespace is trimmed from each line and empty trailing
    /// lines are removed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = (0..self.height).map(|row| self.row_text(row)).collect();

        while lines.last().map(|s| s.is_empty()).unwrap_or(false) {
            lines.pop();
        }

        write!(f, "{}", lines.join("\n"))
    }
}

impl fmt::Debug for MemoryConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryConsole")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("cursor", &self.cursor())
            .field("attribute", &self.attribute)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

/// VTE performer that places written text into the buffer.
struct ScreenWriter<'a> {
    buffer: &'a mut Vec<Vec<MemoryCell>>,
    width: usize,
    height: usize,
    cursor_row: &'a mut usize,
    cursor_col: &'a mut usize,
    attribute: Attribute,
    blank_attribute: Attribute,
    bells: &'a mut usize,
}

impl ScreenWriter<'_> {
    /// Move down one row, scrolling the buffer at the bottom.
    fn line_feed(&mut self) {
        if *self.cursor_row + 1 < self.height {
            *self.cursor_row += 1;
        } else if self.height > 0 {
            self.buffer.remove(0);
            self.buffer
                .push(vec![MemoryCell::blank(self.blank_attribute); self.width]);
        }
    }

    fn carriage_return(&mut self) {
        *self.cursor_col = 0;
    }

    fn put_char(&mut self, c: char) {
        let char_width = c.width().unwrap_or(1);

        // Zero-width characters (combining marks, etc.) take no cell
        if char_width == 0 || self.width == 0 || self.height == 0 {
            return;
        }

        if *self.cursor_col + char_width > self.width {
            self.carriage_return();
            self.line_feed();
        }

        let row = &mut self.buffer[*self.cursor_row];
        row[*self.cursor_col] = MemoryCell {
            ch: c,
            attribute: self.attribute,
        };
        *self.cursor_col += 1;

        // Second half of a wide character
        if char_width == 2 && *self.cursor_col < self.width {
            row[*self.cursor_col] = MemoryCell {
                ch: ' ',
                attribute: self.attribute,
            };
            *self.cursor_col += 1;
        }

        // The legacy console wraps as soon as the last column is written
        if *self.cursor_col >= self.width {
            self.carriage_return();
            self.line_feed();
        }
    }
}

impl Perform for ScreenWriter<'_> {
    fn print(&mut self, c: char) {
        self.put_char(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' => {
                self.carriage_return();
                self.line_feed();
            }
            b'\r' => self.carriage_return(),
            b'\x07' => *self.bells += 1,
            b'\x08' => *self.cursor_col = self.cursor_col.saturating_sub(1),
            b'\t' => {
                let next_tab = (*self.cursor_col / 8 + 1) * 8;
                *self.cursor_col = next_tab.min(self.width.saturating_sub(1));
            }
            _ => {}
        }
    }

    fn csi_dispatch(
        &mut self,
        params: &vte::Params,
        intermediates: &[u8],
        _ignore: bool,
        action: char,
    ) {
        let params: Vec<u16> = params
            .iter()
            .map(|p| p.first().copied().unwrap_or(0))
            .collect();
        trace!(
            action = %action,
            params = ?params,
            intermediates = ?intermediates,
            "Legacy console ignores CSI sequence"
        );
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], _ignore: bool, byte: u8) {
        trace!(
            byte = byte,
            intermediates = ?intermediates,
            "Legacy console ignores ESC sequence"
        );
    }
}
