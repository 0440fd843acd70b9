//! Shared line patterns for the Go scanners.
//! Every pattern is applied to a single line, never to the whole document.

use regex::Regex;
use std::sync::OnceLock;

/// `type Name interface {` at the start of a line; captures the name.
pub fn interface_open_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^type\s+(\w+)\s+interface\s*\{").expect("interface open regex"))
}

/// Start of a method signature inside an interface body; captures the name.
pub fn signature_start_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(\w+)\s*\(").expect("signature start regex"))
}

/// `func (recv *Type) Name(`; captures receiver name (optional), type, method name.
///
/// The receiver name is matched lazily so `func (Type) M(` keeps `Type` whole.
pub fn receiver_method_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^func\s*\(\s*(?:(\w+)\s*)??\*?\s*(\w+)\s*\)\s*(\w+)\s*\(")
            .expect("receiver method regex")
    })
}

/// Strip a trailing `// ...` comment from a code line.
pub fn strip_line_comment(text: &str) -> &str {
    match text.find("//") {
        Some(idx) => &text[..idx],
        None => text,
    }
}

/// Text following the last `)` of `text`, with any trailing comment removed.
pub fn tail_after_last_paren(text: &str) -> &str {
    let code = strip_line_comment(text);
    match code.rfind(')') {
        Some(idx) => code[idx + 1..].trim(),
        None => code.trim(),
    }
}

/// Whether a line starts with the `func` keyword.
pub fn starts_with_func(text: &str) -> bool {
    let trimmed = text.trim_start();
    trimmed
        .strip_prefix("func")
        .is_some_and(|rest| rest.is_empty() || !is_ident_char(rest.chars().next().unwrap_or(' ')))
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
