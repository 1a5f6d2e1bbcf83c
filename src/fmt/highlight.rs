//! Syntax highlighting for `hl`-tagged code snippets.
//!
//! A small regex tokenizer, not a parser: token classes are matched in
//! priority order (comments > strings > keywords > built-ins > numbers) and a
//! lower-priority class never re-claims text already taken by a higher one.

use super::color::{Color, colorize};
use regex::Regex;
use std::sync::LazyLock;

static LINE_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//[^\n]*").expect("Invalid line comment regex"));

static BLOCK_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("Invalid block comment regex"));

static DASH_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--[^\n]*").expect("Invalid dash comment regex"));

static STRING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'|`(?:\\.|[^`\\])*`"#)
        .expect("Invalid string regex")
});

/// Slash-delimited literals only exist in the scripting languages; matched
/// after strings so division inside quotes never counts.
static REGEXP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(?:\\.|[^/\\\n ])+/[a-z]*").expect("Invalid regexp regex"));

static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d+)?\b").expect("Invalid number regex"));

/// Syntax-token classes the theme maps to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Keyword,
    Builtin,
    Comment,
    Str,
    Number,
    Regexp,
}

/// Fixed mapping of token classes to colors, shared by every styled output.
#[derive(Debug, Clone)]
pub struct Theme {
    pub keyword: Color,
    pub builtin: Color,
    pub comment: Color,
    pub string: Color,
    pub number: Color,
    pub regexp: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            keyword: Color::pink(),
            builtin: Color::cyan(),
            comment: Color::grey(),
            string: Color::yellow(),
            number: Color::purple(),
            regexp: Color::red(),
        }
    }
}

impl Theme {
    const fn color(&self, class: TokenClass) -> Color {
        match class {
            TokenClass::Keyword => self.keyword,
            TokenClass::Builtin => self.builtin,
            TokenClass::Comment => self.comment,
            TokenClass::Str => self.string,
            TokenClass::Number => self.number,
            TokenClass::Regexp => self.regexp,
        }
    }
}

/// Per-language token tables. Unknown language ids degrade to the generic
/// profile (comments, strings, numbers) instead of erroring — an unknown
/// language in a log message must still render.
#[derive(Debug, Clone, Copy)]
enum Lang {
    Rust,
    Script,
    Sql,
    Generic,
}

impl Lang {
    fn from_id(id: &str) -> Self {
        match id.to_lowercase().as_str() {
            "rust" | "rs" => Self::Rust,
            "js" | "javascript" | "ts" | "typescript" => Self::Script,
            "sql" => Self::Sql,
            _ => Self::Generic,
        }
    }

    const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Rust => &[
                "as", "async", "await", "break", "const", "continue", "else", "enum", "fn", "for",
                "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "return",
                "self", "static", "struct", "trait", "type", "use", "where", "while",
            ],
            Self::Script => &[
                "async", "await", "break", "case", "catch", "class", "const", "continue",
                "default", "delete", "else", "export", "extends", "finally", "for", "function",
                "if", "import", "in", "instanceof", "let", "new", "of", "return", "static",
                "switch", "this", "throw", "try", "typeof", "var", "while", "yield",
            ],
            Self::Sql => &[
                "select", "from", "where", "insert", "into", "values", "update", "set", "delete",
                "create", "table", "drop", "alter", "join", "inner", "left", "right", "outer",
                "on", "group", "by", "order", "having", "limit", "offset", "as", "and", "or",
                "not", "null", "distinct", "union",
            ],
            Self::Generic => &[],
        }
    }

    const fn builtins(self) -> &'static [&'static str] {
        match self {
            Self::Rust => &[
                "bool", "char", "f32", "f64", "i8", "i16", "i32", "i64", "i128", "isize", "str",
                "u8", "u16", "u32", "u64", "u128", "usize", "String", "Vec", "Option", "Result",
                "Box", "Some", "None", "Ok", "Err",
            ],
            Self::Script => &[
                "Array", "Boolean", "Error", "JSON", "Map", "Math", "Number", "Object", "Promise",
                "RegExp", "Set", "String", "Symbol", "console", "undefined", "true", "false",
                "null",
            ],
            Self::Sql => &[
                "int", "integer", "bigint", "smallint", "varchar", "text", "boolean", "date",
                "timestamp", "numeric", "decimal", "count", "sum", "avg", "min", "max",
            ],
            Self::Generic => &[],
        }
    }

    const fn case_insensitive(self) -> bool {
        matches!(self, Self::Sql)
    }
}

/// Overlap detection needs start/end pairs — a tuple would lose semantic clarity.
#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Each regex hit needs its position, original text, and token class for the replacement pass.
#[derive(Debug)]
struct Match {
    span: Span,
    text: String,
    class: TokenClass,
}

/// Colors every recognized token in `code` according to `theme`. The output
/// carries ANSI escapes and never contains the original tag markers.
#[must_use]
pub fn render(code: &str, lang_id: &str, theme: &Theme) -> String {
    let lang = Lang::from_id(lang_id);
    let mut matches: Vec<Match> = Vec::new();

    match lang {
        Lang::Sql => collect(&mut matches, &DASH_COMMENT_REGEX, TokenClass::Comment, code),
        Lang::Rust | Lang::Script => {
            collect(&mut matches, &BLOCK_COMMENT_REGEX, TokenClass::Comment, code);
            collect(&mut matches, &LINE_COMMENT_REGEX, TokenClass::Comment, code);
        }
        Lang::Generic => {
            collect(&mut matches, &BLOCK_COMMENT_REGEX, TokenClass::Comment, code);
            collect(&mut matches, &LINE_COMMENT_REGEX, TokenClass::Comment, code);
            collect(&mut matches, &DASH_COMMENT_REGEX, TokenClass::Comment, code);
        }
    }

    collect(&mut matches, &STRING_REGEX, TokenClass::Str, code);

    if matches!(lang, Lang::Script) {
        collect(&mut matches, &REGEXP_REGEX, TokenClass::Regexp, code);
    }

    collect_words(&mut matches, lang.keywords(), lang, TokenClass::Keyword, code);
    collect_words(&mut matches, lang.builtins(), lang, TokenClass::Builtin, code);
    collect(&mut matches, &NUMBER_REGEX, TokenClass::Number, code);

    // Sort matches by position (reverse order for replacement)
    matches.sort_by(|a, b| b.span.start.cmp(&a.span.start));

    let mut result = code.to_string();
    for m in matches {
        let replacement = colorize(&m.text, theme.color(m.class));
        result.replace_range(m.span.start..m.span.end, &replacement);
    }

    result
}

fn collect(matches: &mut Vec<Match>, regex: &Regex, class: TokenClass, code: &str) {
    for m in regex.find_iter(code) {
        let span = Span {
            start: m.start(),
            end: m.end(),
        };
        if !overlaps_any(&span, matches) {
            matches.push(Match {
                span,
                text: m.as_str().to_string(),
                class,
            });
        }
    }
}

fn collect_words(
    matches: &mut Vec<Match>,
    words: &[&str],
    lang: Lang,
    class: TokenClass,
    code: &str,
) {
    if words.is_empty() {
        return;
    }
    let flag = if lang.case_insensitive() { "(?i)" } else { "" };
    let pattern = format!(r"{flag}\b(?:{})\b", words.join("|"));
    if let Ok(re) = Regex::new(&pattern) {
        collect(matches, &re, class, code);
    }
}

/// Lower-priority classes (numbers) must not re-claim text already taken by
/// higher-priority ones (strings, comments).
fn overlaps_any(span: &Span, matches: &[Match]) -> bool {
    matches.iter().any(|m| span.overlaps(&m.span))
}
