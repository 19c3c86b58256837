//! Demo command handler

use anyhow::Result;

use legacy_term::color::Color;
use legacy_term::renderer::SegmentRenderer;
use legacy_term::{Config, ControlCode, Segment, Style};

use super::open_output;
use crate::cli::OutputArgs;

const BASE_COLORS: [Color; 8] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

/// The sample shown by `legacy-term demo`.
///
/// A row of background swatches, a row of foreground names, then a line that
/// is overwritten in place with carriage return and erase-in-line.
pub fn demo_segments() -> Vec<Segment> {
    let mut segments = vec![Segment::text("Backgrounds: ")];
    for color in BASE_COLORS {
        segments.push(Segment::styled("  ", Style::new(None, Some(color))));
    }
    segments.push(Segment::text("\n"));

    segments.push(Segment::text("Foregrounds: "));
    for color in BASE_COLORS.iter().skip(1) {
        segments.push(Segment::styled(format!("{} ", color), Style::fg(*color)));
    }
    segments.push(Segment::text("\n"));

    segments.push(Segment::styled(
        "Downgraded:  #ff8700 ",
        Style::fg(Color::Rgb(0xff, 0x87, 0x00)),
    ));
    segments.push(Segment::text("\n"));

    segments.push(Segment::text("working..."));
    segments.push(Segment::control([
        ControlCode::CarriageReturn,
        ControlCode::EraseInLine { mode: 2 },
    ]));
    segments.push(Segment::styled("done", Style::fg(Color::Green)));
    segments.push(Segment::text("\n"));
    segments
}

/// Render the demo sample.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, output: &OutputArgs) -> Result<()> {
    let mut renderer = open_output(config, output)?;
    renderer.render(&demo_segments());
    Ok(())
}
