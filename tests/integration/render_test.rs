//! End-to-end rendering onto the in-memory console

use std::fs;

use legacy_term::console::{ConsoleCall, MemoryConsole, NativeCoord, ViewportOffset};
use legacy_term::{
    Attribute, Color, ControlCode, LegacyRenderer, Segment, SegmentRenderer, Style,
};

use crate::helpers::{call_log, fixture_path, render_on};

#[test]
fn status_fixture_overwrites_progress_line() {
    let json = fs::read_to_string(fixture_path("status.json")).unwrap();
    let segments: Vec<Segment> = serde_json::from_str(&json).unwrap();
    let console = render_on(20, 3, &segments);

    insta::assert_snapshot!(console.to_string(), @"build ok");
    insta::assert_snapshot!(call_log(console.calls()), @r#"
    SetAttribute(Attribute(7))
    Write("build ")
    SetAttribute(Attribute(7))
    SetAttribute(Attribute(6))
    Write("running")
    SetAttribute(Attribute(7))
    Write("\r")
    FillCharacters { ch: ' ', count: 20, start: NativeCoord { row: 0, col: 0 } }
    FillAttributes { attribute: Attribute(7), count: 20, start: NativeCoord { row: 0, col: 0 } }
    SetAttribute(Attribute(7))
    Write("build ")
    SetAttribute(Attribute(7))
    SetAttribute(Attribute(2))
    Write("ok")
    SetAttribute(Attribute(7))
    "#);
}

#[test]
fn styled_cells_keep_their_attribute() {
    let console = render_on(
        10,
        1,
        &[
            Segment::styled("AB", Style::new(Some(Color::Blue), Some(Color::Yellow))),
            Segment::text("c"),
        ],
    );
    // blue -> 1, yellow -> 6
    assert_eq!(console.cell(0, 0).unwrap().attribute, Attribute(1 + 6 * 16));
    assert_eq!(console.cell(0, 1).unwrap().attribute, Attribute(1 + 6 * 16));
    assert_eq!(console.cell(0, 2).unwrap().attribute, Attribute::FALLBACK);
}

#[test]
fn table_redrawn_with_cursor_moves() {
    let mut segments = Vec::new();
    for (row, label) in [(1u16, "name"), (2, "size"), (3, "kind")] {
        segments.push(Segment::control([ControlCode::CursorMoveTo { column: 1, row }]));
        segments.push(Segment::styled(label, Style::fg(Color::Cyan)));
        segments.push(Segment::control([ControlCode::CursorMoveTo { column: 8, row }]));
        segments.push(Segment::text("-"));
    }
    let console = render_on(16, 4, &segments);

    insta::assert_snapshot!(console.to_string(), @r"
    name   -
    size   -
    kind   -
    ");
}

#[test]
fn cursor_moves_track_scrolled_viewport() {
    let mut console = MemoryConsole::new(10, 10).with_viewport_offset(ViewportOffset::new(6, 0));
    {
        let mut renderer = LegacyRenderer::new(&mut console);
        renderer.render(&[
            Segment::control([ControlCode::CursorMoveTo { column: 1, row: 1 }]),
            Segment::text("top"),
            Segment::control([ControlCode::Home]),
            Segment::text("buf"),
        ]);
    }
    assert_eq!(console.row_text(6), "top");
    assert_eq!(console.row_text(0), "buf");
}

#[test]
fn repeated_cursor_up_stops_at_top() {
    let mut console = MemoryConsole::new(10, 5);
    console.place_cursor(2, 4);
    {
        let mut renderer = LegacyRenderer::new(&mut console);
        renderer.render(&[Segment::control([ControlCode::CursorUp; 5]), Segment::text("x")]);
    }
    assert_eq!(console.row_text(0), "    x");
    assert_eq!(
        console
            .calls()
            .iter()
            .filter(|c| matches!(c, ConsoleCall::SetCursorPosition(_)))
            .count(),
        2
    );
}

#[test]
fn failures_never_interrupt_the_stream() {
    let mut console = MemoryConsole::new(10, 2);
    for op in [
        "set_attribute",
        "cursor_position",
        "set_cursor_position",
        "viewport_offset",
        "screen_size",
        "fill_characters",
        "fill_attributes",
        "flush",
    ] {
        console.reject(op);
    }
    {
        let mut renderer = LegacyRenderer::new(&mut console);
        renderer.render(&[
            Segment::styled("a", Style::fg(Color::Red)),
            Segment::control([
                ControlCode::CursorMoveTo { column: 3, row: 2 },
                ControlCode::CursorUp,
                ControlCode::Home,
                ControlCode::EraseInLine { mode: 0 },
            ]),
            Segment::text("b"),
        ]);
    }
    assert_eq!(console.to_string(), "ab");
    assert_eq!(console.cursor(), NativeCoord::new(0, 2));
}
