//! Composition of the generated JavaScript file.
//!
//! Pure text-to-text: no filesystem access happens here, so the exact output
//! shape can be tested without touching disk.

use crate::config::{ConvertOptions, Exposure};
use crate::error::Result;
use crate::escape::escape_template_literal;
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

/// Render the full output file for `text` under `options`.
///
/// The text is escaped for a template literal, then placed into the global
/// script or ES module template depending on [`ConvertOptions::exposure`].
pub fn render_module(
    renderer: &TemplateRenderer,
    options: &ConvertOptions,
    text: &str,
) -> Result<String> {
    let escaped = escape_template_literal(text);
    tracing::debug!(
        input_len = text.len(),
        escaped_len = escaped.len(),
        "escaped word list"
    );

    let header = comment_block(&options.header);
    match &options.exposure {
        Exposure::Global { object } => {
            let data = serde_json::json!({
                "header": header,
                "name": options.constant_name,
                "content": escaped,
                "global_object": object,
            });
            renderer.render(embedded::GLOBAL_SCRIPT, &data)
        }
        Exposure::Module => {
            let data = serde_json::json!({
                "header": header,
                "name": options.constant_name,
                "content": escaped,
            });
            renderer.render(embedded::ES_MODULE, &data)
        }
    }
}

/// `// `-prefixed comment lines followed by a blank line, or nothing at all.
fn comment_block(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut block = String::new();
    for line in lines.iter().flat_map(|l| split_js_lines(l)) {
        if line.is_empty() {
            block.push_str("//\n");
        } else {
            block.push_str("// ");
            block.push_str(line);
            block.push('\n');
        }
    }
    block.push('\n');
    block
}

/// Split on every JavaScript LineTerminator, treating `\r\n` as one.
fn split_js_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(is_js_line_terminator) {
        lines.push(&rest[..pos]);
        let terminator_len = if rest[pos..].starts_with("\r\n") {
            2
        } else {
            rest[pos..].chars().next().map_or(1, char::len_utf8)
        };
        rest = &rest[pos + terminator_len..];
    }
    lines.push(rest);
    lines
}

fn is_js_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
