use core_model::{EditorModel, Viewport};
use core_render::{Frame, FrameRow, Writer, build_frame, render};
use core_state::{EditorState, MatchOverlay, SavedView, SearchSession};
use core_syntax::{Highlight, select_for_filename};
use core_text::Document;
use crossterm::{
    queue,
    style::{Color, SetForegroundColor},
};
use pretty_assertions::assert_eq;

fn model(text: &[u8], rows: usize, cols: usize) -> EditorModel {
    EditorModel::new(
        EditorState::new(Document::from_bytes(text)),
        Viewport::new(rows, cols),
    )
}

fn text_row(frame: &Frame, y: usize) -> (Vec<u8>, Vec<Highlight>) {
    match &frame.rows[y] {
        FrameRow::Text { bytes, classes } => (bytes.clone(), classes.clone()),
        other => panic!("row {y} is {other:?}"),
    }
}

#[test]
fn empty_document_shows_banner_and_fillers() {
    let m = model(b"", 9, 60);
    let frame = build_frame(&m, "0.1.0");
    assert_eq!(frame.rows.len(), 9);
    for (y, row) in frame.rows.iter().enumerate() {
        if y == 3 {
            assert!(matches!(row, FrameRow::Banner(line) if line.contains("Kiln editor -- version 0.1.0")));
        } else {
            assert_eq!(row, &FrameRow::Filler);
        }
    }
}

#[test]
fn rows_past_eof_are_fillers_without_banner() {
    let m = model(b"one\n", 4, 20);
    let frame = build_frame(&m, "0.1.0");
    assert_eq!(text_row(&frame, 0).0, b"one".to_vec());
    assert!(frame.rows[1..].iter().all(|r| *r == FrameRow::Filler));
}

#[test]
fn horizontal_scroll_slices_render_and_classes() {
    let mut m = model(b"int abcdefghij;\n", 3, 6);
    m.state_mut().document.set_syntax(select_for_filename("a.c"));
    m.view_mut().cx = 12;
    m.scroll();
    assert_eq!(m.view().viewport.col_offset, 7);
    let frame = build_frame(&m, "0.1.0");
    let (bytes, classes) = text_row(&frame, 0);
    assert_eq!(bytes, b"defghi".to_vec());
    assert_eq!(classes.len(), bytes.len());
    assert_eq!(frame.cursor, (5, 0));
}

#[test]
fn match_overlay_applies_only_in_frame() {
    let mut m = model(b"foo\nbox\n", 3, 20);
    let session = SearchSession {
        overlay: Some(MatchOverlay {
            row: 1,
            start: 2,
            len: 1,
        }),
        ..SearchSession::new(SavedView::default())
    };
    m.state_mut().search = Some(session);
    let frame = build_frame(&m, "0.1.0");
    let (_, classes) = text_row(&frame, 1);
    assert_eq!(
        classes,
        vec![Highlight::Normal, Highlight::Normal, Highlight::Match]
    );
    let stored = m.state().document.row(1).map(|r| r.highlight().to_vec());
    assert_eq!(stored, Some(vec![Highlight::Normal; 3]));
}

#[test]
fn status_and_message_fill_width() {
    let mut m = model(b"a\nb\n", 3, 30);
    m.state_mut().document.insert_char(0, 0, b'x');
    m.state_mut().set_status("hi");
    let frame = build_frame(&m, "0.1.0");
    assert_eq!(frame.status.chars().count(), 30);
    assert!(frame.status.starts_with("[No Name] - 2 lines (modified)"));
    assert_eq!(frame.message.chars().count(), 30);
    assert!(frame.message.starts_with("hi"));
    assert!(frame.message.ends_with("Col: 1/30"));
}

#[test]
fn encoded_frame_colours_and_control_bytes() {
    let mut m = model(b"int x; \x01\n", 2, 20);
    m.state_mut().document.set_syntax(select_for_filename("a.c"));
    let frame = build_frame(&m, "0.1.0");
    let mut w = Writer::new();
    w.encode(&frame).expect("encode");
    let out = w.bytes();

    let mut yellow: Vec<u8> = Vec::new();
    queue!(yellow, SetForegroundColor(Color::DarkYellow)).expect("queue");
    assert!(out.windows(yellow.len()).any(|win| win == yellow.as_slice()));
    assert!(out.windows(1).any(|win| win == b"A"), "control byte drawn as @+1");
    assert!(!out.contains(&0x01));
    assert_eq!(out.windows(2).filter(|win| *win == b"\r\n").count(), 3);
}

#[test]
fn render_writes_once_into_sink() {
    let m = model(b"hello\n", 2, 20);
    let mut sink: Vec<u8> = Vec::new();
    render(&m, "0.1.0", &mut sink).expect("render");
    let text = String::from_utf8_lossy(&sink);
    assert!(text.contains("hello"));
    assert!(text.contains("Col: 1/20"));
}
