//! Single-row highlighter.
//!
//! Left-to-right scan over the rendered bytes keeping three pieces of state:
//! whether the previous byte was a separator, the open quote byte (if inside a
//! string) and whether a block comment is open. Rules are tried in order:
//! line comment, block comment, string, number, keyword; the first that fires
//! consumes its bytes.

use crate::{Highlight, KEYWORD2_MARKER, Syntax, SyntaxFlags};

/// Classes for one row plus the block comment state carried into the next row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineHighlight {
    pub classes: Vec<Highlight>,
    pub open_comment: bool,
}

/// Whitespace, NUL and the punctuation set that delimits numbers and keywords.
pub fn is_separator(c: u8) -> bool {
    c.is_ascii_whitespace() || c == 0x0b || c == 0 || b",.()+-/*=~%<>[];".contains(&c)
}

/// Convenience wrapper around [`highlight_into`] returning an owned result.
pub fn highlight_line(render: &[u8], open_in: bool, syntax: Option<&Syntax>) -> LineHighlight {
    let mut classes = Vec::with_capacity(render.len());
    let open_comment = highlight_into(render, open_in, syntax, &mut classes);
    LineHighlight {
        classes,
        open_comment,
    }
}

/// Classify `render` into `out` (resized to `render.len()`), returning whether
/// a block comment is still open at the end of the row.
pub fn highlight_into(
    render: &[u8],
    open_in: bool,
    syntax: Option<&Syntax>,
    out: &mut Vec<Highlight>,
) -> bool {
    out.clear();
    out.resize(render.len(), Highlight::Normal);
    let Some(syntax) = syntax else {
        return false;
    };

    let line_comment = syntax
        .line_comment
        .map(str::as_bytes)
        .filter(|s| !s.is_empty());
    let block_comment = syntax
        .block_comment
        .map(|(start, end)| (start.as_bytes(), end.as_bytes()))
        .filter(|(start, end)| !start.is_empty() && !end.is_empty());
    let strings = syntax.flags.contains(SyntaxFlags::HIGHLIGHT_STRINGS);
    let numbers = syntax.flags.contains(SyntaxFlags::HIGHLIGHT_NUMBERS);

    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    let mut in_comment = open_in && block_comment.is_some();

    let mut i = 0;
    while i < render.len() {
        let c = render[i];
        let prev_hl = if i > 0 { out[i - 1] } else { Highlight::Normal };

        if let Some(prefix) = line_comment
            && in_string.is_none()
            && !in_comment
            && render[i..].starts_with(prefix)
        {
            out[i..].fill(Highlight::Comment);
            break;
        }

        if let Some((start, end)) = block_comment
            && in_string.is_none()
        {
            if in_comment {
                out[i] = Highlight::BlockComment;
                if render[i..].starts_with(end) {
                    out[i..i + end.len()].fill(Highlight::BlockComment);
                    i += end.len();
                    in_comment = false;
                    prev_sep = true;
                } else {
                    i += 1;
                }
                continue;
            } else if render[i..].starts_with(start) {
                out[i..i + start.len()].fill(Highlight::BlockComment);
                i += start.len();
                in_comment = true;
                continue;
            }
        }

        if strings {
            if let Some(quote) = in_string {
                out[i] = Highlight::String;
                if c == b'\\' && i + 1 < render.len() {
                    out[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if c == quote {
                    in_string = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if c == b'"' || c == b'\'' {
                in_string = Some(c);
                out[i] = Highlight::String;
                i += 1;
                continue;
            }
        }

        if numbers
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
                || (c == b'.' && prev_hl == Highlight::Number))
        {
            out[i] = Highlight::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep && let Some((len, class)) = match_keyword(syntax.keywords, &render[i..]) {
            out[i..i + len].fill(class);
            i += len;
            prev_sep = false;
            continue;
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    in_comment
}

/// Longest keyword anchored at the start of `rest` that is followed by a
/// separator or the end of the row.
fn match_keyword(keywords: &[&str], rest: &[u8]) -> Option<(usize, Highlight)> {
    let mut best: Option<(usize, Highlight)> = None;
    for kw in keywords {
        let bytes = kw.as_bytes();
        let (text, class) = match bytes.split_last() {
            Some((&KEYWORD2_MARKER, head)) => (head, Highlight::Keyword2),
            _ => (bytes, Highlight::Keyword1),
        };
        if text.is_empty() || !rest.starts_with(text) {
            continue;
        }
        let followed_by_sep = rest.get(text.len()).is_none_or(|&b| is_separator(b));
        if followed_by_sep && best.is_none_or(|(len, _)| text.len() > len) {
            best = Some((text.len(), class));
        }
    }
    best
}
