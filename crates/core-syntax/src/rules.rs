//! Static rule-set table and filename matching.

use std::path::Path;

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SyntaxFlags: u8 {
        const HIGHLIGHT_NUMBERS = 0b0000_0001;
        const HIGHLIGHT_STRINGS = 0b0000_0010;
    }
}

/// Trailing byte marking a keyword as secondary (`Keyword2`). The marker is
/// not part of the matched text.
pub const KEYWORD2_MARKER: u8 = b'|';

/// Grammar descriptor shared read-only by every row of a document.
#[derive(Debug)]
pub struct Syntax {
    /// Display name shown in the status bar.
    pub name: &'static str,
    /// Patterns starting with `.` must equal the file extension; any other
    /// pattern matches as a substring of the file name.
    pub file_patterns: &'static [&'static str],
    /// Type names classify as `Keyword1`; entries ending in
    /// [`KEYWORD2_MARKER`] (statement keywords) classify as `Keyword2`.
    pub keywords: &'static [&'static str],
    pub line_comment: Option<&'static str>,
    /// `(start, end)` delimiters of a block comment.
    pub block_comment: Option<(&'static str, &'static str)>,
    pub flags: SyntaxFlags,
}

const BOTH: SyntaxFlags = SyntaxFlags::HIGHLIGHT_NUMBERS.union(SyntaxFlags::HIGHLIGHT_STRINGS);

pub static SYNTAXES: &[Syntax] = &[
    Syntax {
        name: "c",
        file_patterns: &[".c", ".h", ".cpp"],
        keywords: &[
            "int", "long", "double", "float", "char", "unsigned", "signed", "void", "switch|",
            "if|", "while|", "for|", "break|", "continue|", "return|", "else|", "struct|",
            "union|", "typedef|", "static|", "enum|", "class|", "case|",
        ],
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        flags: BOTH,
    },
    Syntax {
        name: "rust",
        file_patterns: &[".rs"],
        keywords: &[
            "Self", "bool", "char", "str", "u8", "u16", "u32", "u64", "usize", "i8", "i16",
            "i32", "i64", "isize", "f32", "f64", "String", "Vec", "Option", "Result", "as|",
            "async|", "await|", "break|", "const|", "continue|", "crate|", "dyn|", "else|",
            "enum|", "extern|", "fn|", "for|", "if|", "impl|", "in|", "let|", "loop|", "match|",
            "mod|", "move|", "mut|", "pub|", "ref|", "return|", "self|", "static|", "struct|",
            "super|", "trait|", "type|", "unsafe|", "use|", "where|", "while|",
        ],
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        flags: BOTH,
    },
    Syntax {
        name: "python",
        file_patterns: &[".py"],
        keywords: &[
            "None", "True", "False", "self", "int", "str", "float", "bool", "list", "dict",
            "tuple", "and|", "as|", "break|", "class|", "continue|", "def|", "elif|", "else|",
            "except|", "finally|", "for|", "from|", "if|", "import|", "in|", "is|", "lambda|",
            "not|", "or|", "pass|", "raise|", "return|", "try|", "while|", "with|", "yield|",
        ],
        line_comment: Some("#"),
        block_comment: None,
        flags: BOTH,
    },
];

impl Syntax {
    /// True when any of this rule set's patterns accepts `file_name`.
    pub fn matches_filename(&self, file_name: &str) -> bool {
        let base = Path::new(file_name)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name);
        let ext = base.rfind('.').map(|idx| &base[idx..]);
        self.file_patterns.iter().any(|pattern| {
            if pattern.starts_with('.') {
                ext == Some(*pattern)
            } else {
                file_name.contains(pattern)
            }
        })
    }
}

/// First rule set (in table order) whose patterns accept `file_name`.
pub fn select_for_filename(file_name: &str) -> Option<&'static Syntax> {
    let selected = SYNTAXES.iter().find(|s| s.matches_filename(file_name));
    tracing::debug!(
        target: "text.highlight",
        file = file_name,
        syntax = selected.map(|s| s.name),
        "syntax_select"
    );
    selected
}
