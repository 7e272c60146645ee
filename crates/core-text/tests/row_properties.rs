use core_syntax::select_for_filename;
use core_text::{Document, cx_to_rx, rx_to_cx};
use proptest::prelude::*;

fn line_bytes() -> impl Strategy<Value = Vec<u8>> {
    // printable ASCII plus tabs and the delimiters the highlighter reacts to
    prop::collection::vec(
        prop_oneof![
            4 => 0x20u8..0x7f,
            1 => Just(b'\t'),
            1 => Just(b'/'),
            1 => Just(b'*'),
            1 => Just(b'"'),
        ],
        0..40,
    )
}

fn doc_from(lines: &[Vec<u8>]) -> Document {
    let mut content = Vec::new();
    for l in lines {
        content.extend_from_slice(l);
        content.push(b'\n');
    }
    let mut doc = Document::from_bytes(&content);
    doc.set_syntax(select_for_filename("p.c"));
    doc
}

fn assert_row_invariants(doc: &Document) {
    for (i, row) in doc.rows().iter().enumerate() {
        assert_eq!(row.index(), i);
        assert_eq!(row.render().len(), row.highlight().len());
    }
}

proptest! {
    #[test]
    fn coordinate_round_trip(raw in line_bytes(), cx_seed in 0usize..64) {
        let cx = cx_seed.min(raw.len());
        let rx = cx_to_rx(&raw, cx);
        let back = rx_to_cx(&raw, rx);
        prop_assert_eq!(cx_to_rx(&raw, back), rx);
    }

    #[test]
    fn insert_then_delete_restores_raw(raw in line_bytes(), at_seed in 0usize..64, c in 0x20u8..0x7f) {
        let mut doc = doc_from(std::slice::from_ref(&raw));
        let at = at_seed.min(raw.len());
        doc.insert_char(0, at, c);
        doc.delete_char(0, at);
        prop_assert_eq!(doc.row(0).map(|r| r.raw().to_vec()), Some(raw));
    }

    #[test]
    fn highlight_tracks_render_after_edits(
        lines in prop::collection::vec(line_bytes(), 1..8),
        ops in prop::collection::vec((0u8..8, 0usize..10, 0usize..50, 0x20u8..0x7f), 0..30),
    ) {
        let mut doc = doc_from(&lines);
        for (op, row, at, c) in ops {
            let row = if doc.is_empty() { 0 } else { row % doc.len() };
            match op {
                0 => doc.insert_char(row, at, c),
                1 => doc.delete_char(row, at),
                2 => doc.split_row(row, at),
                3 => { doc.join_with_previous(row); }
                4 => doc.insert_row(row, b"/* x"),
                5 => doc.set_row(row, b"/* y"),
                6 => doc.set_row(row, &[b'x', b'*', b'/', c]),
                _ => doc.delete_row(row),
            }
            assert_row_invariants(&doc);
        }
        // incremental result equals a from-scratch highlight of the same text
        let mut fresh = Document::from_bytes(&doc.to_bytes());
        fresh.set_syntax(doc.syntax());
        for (a, b) in doc.rows().iter().zip(fresh.rows()) {
            prop_assert_eq!(a.highlight(), b.highlight());
            prop_assert_eq!(a.open_comment(), b.open_comment());
        }
    }
}

#[test]
fn tab_row_scenario() {
    let doc = Document::from_bytes(b"a\tb\n");
    let row = doc.row(0).expect("row");
    assert_eq!(row.render(), b"a       b");
    assert_eq!(row.cx_to_rx(2), 8);
}
