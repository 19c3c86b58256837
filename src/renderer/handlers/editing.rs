//! Erase-in-line handler.
//!
//! Fills cells with spaces and resets their attribute to the captured
//! default. The cursor does not move.

use super::super::legacy::LegacyRenderer;
use super::swallow;
use crate::console::{ConsoleHost, NativeCoord};
use crate::segment::EraseMode;

impl<H: ConsoleHost> LegacyRenderer<H> {
    /// Handle Erase in Line.
    /// ToEnd: cursor column to end of row
    /// ToStart: column 0 through the cursor column, inclusive
    /// Whole: the entire cursor row
    pub fn handle_erase_line(&mut self, mode: EraseMode) {
        let Some(cursor) = swallow("cursor_position", self.host.cursor_position()) else {
            return;
        };
        let Some(size) = swallow("screen_size", self.host.screen_size()) else {
            return;
        };

        let (start, count) = match mode {
            EraseMode::ToEnd => (cursor, size.cols - cursor.col),
            EraseMode::ToStart => (cursor.with_col(0), (cursor.col + 1).min(size.cols)),
            EraseMode::Whole => (cursor.with_col(0), size.cols),
        };
        self.erase_cells(start, count);
    }

    fn erase_cells(&mut self, start: NativeCoord, count: i32) {
        let Ok(count) = u32::try_from(count) else {
            return;
        };
        if count == 0 {
            return;
        }
        swallow(
            "fill_characters",
            self.host.fill_characters(' ', count, start),
        );
        swallow(
            "fill_attributes",
            self.host
                .fill_attributes(self.default_attribute, count, start),
        );
    }
}
