//! The word list conversion: read, escape, render, write.
//!
//! The input is read and decoded in full before the output is touched, so a
//! missing or undecodable input never creates or truncates the output file.
//! A failure during the write itself is not cleaned up.

use std::path::{Path, PathBuf};

use crate::config::ConvertOptions;
use crate::error::{Result, WordpackError};
use crate::render::render_module;
use crate::templates::renderer::TemplateRenderer;

/// What a successful conversion wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub output: PathBuf,
    /// Unicode scalar values in the written content.
    pub chars: usize,
    /// UTF-8 bytes in the written content.
    pub bytes: usize,
}

/// Convert `options.input` into a JavaScript data file at `options.output`.
pub fn convert(options: &ConvertOptions) -> Result<ConvertReport> {
    options.validate()?;

    let text = read_input(&options.input)?;
    let renderer = TemplateRenderer::new();
    let content = render_module(&renderer, options, &text)?;
    write_output(&options.output, &content)?;

    let report = ConvertReport {
        output: options.output.clone(),
        chars: content.chars().count(),
        bytes: content.len(),
    };
    tracing::info!(
        output = %report.output.display(),
        bytes = report.bytes,
        "wrote data file"
    );
    Ok(report)
}

/// Read the whole input file as UTF-8, with `\r\n` and lone `\r` turned into `\n`.
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| WordpackError::InputRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input");
    let text = String::from_utf8(bytes).map_err(|e| WordpackError::InvalidUtf8 {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(normalize_newlines(text))
}

/// Universal newlines: every `\r\n` and lone `\r` becomes `\n`.
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Write `content` to `path`, replacing any existing file.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| WordpackError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
