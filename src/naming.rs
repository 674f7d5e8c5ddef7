//! Naming and escaping helpers shared by the emitters.
//!
//! Every generated name is derived from a node `id` or a page `pageName`:
//! CSS classes use the id verbatim, generated TypeScript identifiers go
//! through [`sanitize_identifier`], and file/selector stems reuse the page
//! name.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_IDENTIFIER_CHAR: Regex = Regex::new(r"[^A-Za-z0-9_]").unwrap();
    static ref CAMEL_BOUNDARY: Regex = Regex::new(r"([a-z])([A-Z])").unwrap();
}

/// Escape user-authored text for element content and attribute values.
///
/// `@` is escaped as well so that text can never open an Angular block
/// (`@if`, `@for`, ...) in the generated template.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace('@', "&#64;")
}

/// Escape text for the inside of an HTML comment.
///
/// On top of [`escape_html`], consecutive hyphens are split apart so the
/// text can neither close the comment (`-->`, `--!>`) nor end in a hyphen
/// that would merge with the closing delimiter.
pub fn escape_comment(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in escape_html(text).chars() {
        if c == '-' && out.ends_with('-') {
            out.push(' ');
        }
        out.push(c);
    }
    if out.ends_with('-') {
        out.push(' ');
    }
    out
}

/// Make a node id usable as part of a TypeScript identifier.
pub fn sanitize_identifier(id: &str) -> String {
    NON_IDENTIFIER_CHAR.replace_all(id, "_").into_owned()
}

/// `backgroundColor` -> `background-color`
pub fn camel_to_kebab(name: &str) -> String {
    CAMEL_BOUNDARY
        .replace_all(name, "${1}-${2}")
        .to_lowercase()
}

/// `button-page` -> `ButtonPage`
pub fn to_pascal_case(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Escape a value for a single-quoted TypeScript string literal.
pub fn escape_ts_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "")
}
