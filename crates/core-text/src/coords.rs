//! Raw index (`cx`) <-> rendered column (`rx`) mapping.
//!
//! Search finds matches in rendered text while the cursor lives in raw
//! coordinates, so both directions walk the raw bytes with the same tab rule.

/// Fixed tab stop used for render expansion.
pub const TAB_STOP: usize = 8;

#[inline]
fn advance(rx: usize, byte: u8) -> usize {
    if byte == b'\t' {
        rx + TAB_STOP - (rx % TAB_STOP)
    } else {
        rx + 1
    }
}

/// Expand every tab to spaces up to the next multiple of `TAB_STOP`.
pub fn expand_tabs(raw: &[u8]) -> Vec<u8> {
    let tabs = raw.iter().filter(|&&b| b == b'\t').count();
    let mut out = Vec::with_capacity(raw.len() + tabs * (TAB_STOP - 1));
    for &b in raw {
        if b == b'\t' {
            out.push(b' ');
            while out.len() % TAB_STOP != 0 {
                out.push(b' ');
            }
        } else {
            out.push(b);
        }
    }
    out
}

/// Rendered width of `raw[..cx]`. `cx` beyond the row is clamped.
pub fn cx_to_rx(raw: &[u8], cx: usize) -> usize {
    raw[..cx.min(raw.len())].iter().fold(0, |rx, &b| advance(rx, b))
}

/// Raw index whose rendered cell covers column `rx`; `raw.len()` when `rx`
/// lies at or past the end of the rendered row.
pub fn rx_to_cx(raw: &[u8], rx: usize) -> usize {
    let mut cur = 0;
    for (cx, &b) in raw.iter().enumerate() {
        cur = advance(cur, b);
        if cur > rx {
            return cx;
        }
    }
    raw.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_expands_to_next_stop() {
        assert_eq!(expand_tabs(b"a\tb"), b"a       b".to_vec());
        assert_eq!(expand_tabs(b"\t"), vec![b' '; 8]);
        assert_eq!(expand_tabs(b"12345678\tx").len(), 17);
        assert!(expand_tabs(b"").is_empty());
    }

    #[test]
    fn cx_to_rx_counts_tab_width() {
        let raw = b"a\tb";
        assert_eq!(cx_to_rx(raw, 0), 0);
        assert_eq!(cx_to_rx(raw, 1), 1);
        assert_eq!(cx_to_rx(raw, 2), 8);
        assert_eq!(cx_to_rx(raw, 3), 9);
        assert_eq!(cx_to_rx(raw, 99), 9, "clamped to row length");
    }

    #[test]
    fn rx_to_cx_inside_tab_maps_to_tab() {
        let raw = b"a\tb";
        for rx in 1..8 {
            assert_eq!(rx_to_cx(raw, rx), 1, "rx {rx}");
        }
        assert_eq!(rx_to_cx(raw, 8), 2);
        assert_eq!(rx_to_cx(raw, 9), 3);
        assert_eq!(rx_to_cx(raw, 500), 3);
    }

    #[test]
    fn plain_text_is_identity() {
        let raw = b"hello";
        for cx in 0..=raw.len() {
            assert_eq!(cx_to_rx(raw, cx), cx);
            assert_eq!(rx_to_cx(raw, cx), cx);
        }
    }
}
