//! String helpers shared by the renderer: identifier escaping, string
//! literal escaping, and block indentation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Identifiers matching this pattern render without backticks.
    static ref SAFE_IDENTIFIER: Regex =
        Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").expect("static identifier pattern");
}

/// Escape a property key, alias, or other identifier position.
///
/// Names inside the safe identifier set pass through unchanged; anything
/// else is wrapped in backticks with embedded backticks doubled.
pub fn escape_identifier(name: &str) -> String {
    if SAFE_IDENTIFIER.is_match(name) {
        name.to_string()
    } else {
        format!("`{}`", name.replace('`', "``"))
    }
}

/// Escape a node label or relationship type.
///
/// Labels are always backtick-wrapped, matching the conservative quoting the
/// target language tooling expects for schema-derived names.
pub fn escape_label(label: &str) -> String {
    format!("`{}`", label.replace('`', "``"))
}

/// Escape a string for inline embedding: double quotes around the value,
/// backslash-escaping embedded quotes and backslashes.
pub fn escape_string_literal(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Indent every non-empty line of a rendered block by four spaces.
pub fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("    {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Join the non-empty parts with the separator, skipping empty fragments so
/// optional sections never produce doubled separators.
pub fn join_non_empty(parts: &[String], separator: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(separator)
}
