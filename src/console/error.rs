//! Console primitive errors.

/// Errors a console host primitive can report.
///
/// The renderer treats all of these as non-fatal; they exist so hosts can
/// say why a call was rejected and so construction can fail cleanly.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Legacy console is not available on this platform or stream")]
    Unsupported,

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Negative cursor position (row {row}, col {col})")]
    NegativeCoordinate { row: i32, col: i32 },

    #[error("Position outside the screen buffer (row {row}, col {col})")]
    OutOfBounds { row: i32, col: i32 },

    #[error("Console rejected {operation}")]
    Rejected { operation: &'static str },
}
