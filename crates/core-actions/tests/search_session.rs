mod common;
use common::*;

use core_events::KeyCode;
use core_state::MatchOverlay;

#[test]
fn forward_navigation_wraps_through_matches() {
    let mut m = model(b"foo\nbox\nfox\n");
    ctrl(&mut m, 'f');
    type_str(&mut m, "x");
    assert_eq!(cursor(&m), (1, 2));
    press(&mut m, KeyCode::Down);
    assert_eq!(cursor(&m), (2, 2));
    press(&mut m, KeyCode::Right);
    assert_eq!(cursor(&m), (1, 2));
}

#[test]
fn backward_navigation() {
    let mut m = model(b"ax\nbx\ncx\n");
    ctrl(&mut m, 'f');
    type_str(&mut m, "x");
    assert_eq!(cursor(&m).0, 0);
    press(&mut m, KeyCode::Up);
    assert_eq!(cursor(&m).0, 2);
    press(&mut m, KeyCode::Left);
    assert_eq!(cursor(&m).0, 1);
}

#[test]
fn overlay_follows_match_and_is_view_only() {
    let mut m = model(b"int a;\n\tneedle\n");
    m.state_mut()
        .document
        .set_syntax(core_syntax::select_for_filename("t.c"));
    let stored: Vec<_> = m.state().document.row(1).map(|r| r.highlight().to_vec()).unwrap_or_default();
    ctrl(&mut m, 'f');
    type_str(&mut m, "needle");
    assert_eq!(
        m.state().match_overlay(),
        Some(MatchOverlay {
            row: 1,
            start: 8,
            len: 6
        })
    );
    assert_eq!(cursor(&m), (1, 1));
    let after: Vec<_> = m.state().document.row(1).map(|r| r.highlight().to_vec()).unwrap_or_default();
    assert_eq!(stored, after, "row highlight untouched by the overlay");
    press(&mut m, KeyCode::Enter);
    assert_eq!(m.state().match_overlay(), None);
    assert!(m.state().prompt.is_none());
    assert_eq!(cursor(&m), (1, 1), "accept keeps the match position");
}

#[test]
fn cancel_restores_cursor_and_viewport() {
    let text: Vec<u8> = (0..100)
        .flat_map(|i| if i == 70 { b"target\n".to_vec() } else { format!("row {i}\n").into_bytes() })
        .collect();
    let mut m = model_sized(&text, 10, 80);
    press(&mut m, KeyCode::Down);
    press(&mut m, KeyCode::Right);
    let before_cursor = cursor(&m);
    let before_offset = m.view().viewport.row_offset;
    ctrl(&mut m, 'f');
    type_str(&mut m, "target");
    assert_eq!(cursor(&m), (70, 0));
    assert_eq!(m.view().viewport.row_offset, 70, "match row scrolled to the top");
    press(&mut m, KeyCode::Esc);
    assert_eq!(cursor(&m), before_cursor);
    assert_eq!(m.view().viewport.row_offset, before_offset);
    assert!(m.state().search.is_none());
}

#[test]
fn miss_leaves_cursor_in_place() {
    let mut m = model(b"abc\ndef\n");
    press(&mut m, KeyCode::Down);
    ctrl(&mut m, 'f');
    type_str(&mut m, "zzz");
    assert_eq!(cursor(&m), (1, 0));
    assert_eq!(m.state().match_overlay(), None);
}

#[test]
fn editing_query_restarts_from_top() {
    let mut m = model(b"ab\nab\nabc\n");
    ctrl(&mut m, 'f');
    type_str(&mut m, "ab");
    press(&mut m, KeyCode::Down);
    assert_eq!(cursor(&m).0, 1);
    type_str(&mut m, "c");
    assert_eq!(cursor(&m).0, 2);
    press(&mut m, KeyCode::Backspace);
    assert_eq!(cursor(&m).0, 0);
}

#[test]
fn search_prompt_text() {
    let mut m = model(b"abc\n");
    ctrl(&mut m, 'f');
    type_str(&mut m, "b");
    assert_eq!(
        m.state().message_line().as_deref(),
        Some("Search: b (Use ESC/Arrows/Enter)")
    );
}
