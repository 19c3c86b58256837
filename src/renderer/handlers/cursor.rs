//! Cursor movement and positioning handlers.
//!
//! Handles:
//! - Home: buffer origin
//! - CursorUp / CursorDown / CursorForward / CursorBackward: one cell
//! - CursorMoveToColumn: column on the current row
//! - CursorMoveTo: screen position, shifted by the viewport origin

use tracing::trace;

use super::super::legacy::LegacyRenderer;
use super::swallow;
use crate::console::{ConsoleHost, NativeCoord, ScreenPos};

impl<H: ConsoleHost> LegacyRenderer<H> {
    /// Set the cursor, dropping negative targets.
    fn move_to_native(&mut self, position: NativeCoord) {
        if position.is_negative() {
            trace!(row = position.row, col = position.col, "Dropped negative cursor move");
            return;
        }
        swallow("set_cursor_position", self.host.set_cursor_position(position));
    }

    /// Move relative to the current cursor position.
    fn move_relative(&mut self, rows: i32, cols: i32) {
        if let Some(pos) = swallow("cursor_position", self.host.cursor_position()) {
            self.move_to_native(NativeCoord::new(pos.row + rows, pos.col + cols));
        }
    }

    /// Move to the buffer origin (no viewport shift).
    pub fn handle_home(&mut self) {
        self.move_to_native(NativeCoord::ORIGIN);
    }

    /// Move to a 1-based screen position.
    ///
    /// The viewport offset is read fresh every time; it changes as the
    /// buffer scrolls.
    pub fn handle_move_to(&mut self, pos: ScreenPos) {
        let Some(viewport) = swallow("viewport_offset", self.host.viewport_offset()) else {
            return;
        };
        self.move_to_native(NativeCoord::from_screen(pos, viewport));
    }

    /// Up one row. At row 0 this is a no-op.
    pub fn handle_cursor_up(&mut self) {
        self.move_relative(-1, 0);
    }

    pub fn handle_cursor_down(&mut self) {
        self.move_relative(1, 0);
    }

    pub fn handle_cursor_forward(&mut self) {
        self.move_relative(0, 1);
    }

    pub fn handle_cursor_backward(&mut self) {
        self.move_relative(0, -1);
    }

    /// Move to a 1-based column on the current row.
    pub fn handle_move_to_column(&mut self, column: u16) {
        if let Some(pos) = swallow("cursor_position", self.host.cursor_position()) {
            self.move_to_native(pos.with_col(i32::from(column) - 1));
        }
    }
}
