//! Shared helpers for integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use legacy_term::console::{ConsoleCall, MemoryConsole};
use legacy_term::{LegacyRenderer, Segment, SegmentRenderer};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Render segments onto a fresh console of the given size.
pub fn render_on(width: usize, height: usize, segments: &[Segment]) -> MemoryConsole {
    let mut console = MemoryConsole::new(width, height);
    LegacyRenderer::new(&mut console).render(segments);
    console
}

/// One recorded primitive per line.
pub fn call_log(calls: &[ConsoleCall]) -> String {
    calls
        .iter()
        .map(|call| format!("{:?}", call))
        .collect::<Vec<_>>()
        .join("\n")
}
