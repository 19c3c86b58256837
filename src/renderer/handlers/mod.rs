//! Control-code handlers for the legacy renderer.
//!
//! This module contains handlers for the control categories:
//! - cursor: Cursor movement and positioning
//! - editing: Erase in line

pub mod cursor;
pub mod editing;

use tracing::trace;

use crate::console::ConsoleResult;
use crate::segment::ControlCode;

/// Unwrap a primitive result, logging and dropping any failure.
pub fn swallow<T>(operation: &'static str, result: ConsoleResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            trace!(operation, error = %err, "Console primitive failed");
            None
        }
    }
}

/// Log a control code the renderer does not act on.
pub fn log_ignored_control(code: &ControlCode) {
    trace!(code = ?code, "Ignored control code");
}
