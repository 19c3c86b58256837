//! Legacy renderer tests.
//!
//! All run against `MemoryConsole` and assert on the recorded primitive
//! calls and the resulting buffer.
//! - style_tests: Attribute set / write / restore
//! - cursor_tests: Cursor movement and viewport translation
//! - editing_tests: Erase in line


use crate::console::MemoryConsole;
use crate::renderer::LegacyRenderer;

/// An 80x25 console with the renderer's captured default of 0x07.
fn renderer() -> LegacyRenderer<MemoryConsole> {
    LegacyRenderer::new(MemoryConsole::new(80, 25))
}
