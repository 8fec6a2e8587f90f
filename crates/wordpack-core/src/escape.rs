//! Escaping text for embedding inside a JavaScript template literal.
//!
//! Three sequences are significant inside a backtick-delimited literal:
//! - Backslash: starts an escape sequence
//! - Backtick: terminates the literal
//! - `${`: opens an interpolation
//!
//! A lone `$` or `{` is inert and is left alone.

/// Escape `text` so that `` `<result>` `` evaluates back to `text`.
///
/// Substitutions run in a fixed order. Backslashes are doubled first so
/// the backslashes introduced for backticks and `${` are not doubled again.
///
/// # Examples
///
/// ```
/// use wordpack_core::escape::escape_template_literal;
///
/// assert_eq!(escape_template_literal("a\\b"), "a\\\\b");
/// assert_eq!(escape_template_literal("`"), "\\`");
/// assert_eq!(escape_template_literal("Hello ${name}"), "Hello \\${name}");
/// ```
pub fn escape_template_literal(text: &str) -> String {
    if is_literal_safe(text) {
        return text.to_owned();
    }
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Returns true if `text` contains nothing that would be escaped.
pub fn is_literal_safe(text: &str) -> bool {
    !text.contains('\\') && !text.contains('`') && !text.contains("${")
}
