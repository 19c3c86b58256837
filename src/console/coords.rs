//! Coordinate spaces.
//!
//! Control codes address the visible screen with 1-based (row, col).
//! The host addresses its whole scroll buffer with 0-based (row, col).
//! The two never mix: [`NativeCoord::from_screen`] is the only conversion.

/// A 1-based position on the visible screen, as carried by control codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPos {
    pub row: u16,
    pub col: u16,
}

impl ScreenPos {
    pub fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

/// A 0-based position in the host's screen buffer.
///
/// Signed so that arithmetic like "one row up from row 0" is representable
/// and can be rejected rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NativeCoord {
    pub row: i32,
    pub col: i32,
}

impl NativeCoord {
    pub const ORIGIN: NativeCoord = NativeCoord { row: 0, col: 0 };

    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Convert a screen position to a buffer position.
    ///
    /// Subtracts one from each axis, then shifts by the window's current
    /// top-left origin within the scroll buffer.
    pub fn from_screen(pos: ScreenPos, viewport: ViewportOffset) -> Self {
        Self {
            row: i32::from(pos.row) - 1 + viewport.row,
            col: i32::from(pos.col) - 1 + viewport.col,
        }
    }

    pub fn is_negative(self) -> bool {
        self.row < 0 || self.col < 0
    }

    pub fn with_col(self, col: i32) -> Self {
        Self { col, ..self }
    }
}

/// Top-left of the visible window within the scroll buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportOffset {
    pub row: i32,
    pub col: i32,
}

impl ViewportOffset {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Screen buffer dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub rows: i32,
    pub cols: i32,
}

impl ScreenSize {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    pub fn contains(self, pos: NativeCoord) -> bool {
        !pos.is_negative() && pos.row < self.rows && pos.col < self.cols
    }
}
