//! Conversion options and their JSON config file.
//!
//! [`ConvertOptions::default`] reproduces the fixed behavior of the original
//! one-shot converter: `IELTS 8000.txt` in, `ielts-8000-data.js` out, the
//! constant `IELTS_8000_DATA` attached to `window`. A `wordpack.config.json`
//! may override any subset of the fields; missing fields keep their defaults.
//!
//! ```json
//! {
//!   "input": "IELTS 8000.txt",
//!   "output": "ielts-8000-data.js",
//!   "constant_name": "IELTS_8000_DATA",
//!   "exposure": { "kind": "global", "object": "window" },
//!   "header": ["IELTS 8000 Word Collection - Built-in Data"]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordpackError};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "wordpack.config.json";

pub const DEFAULT_INPUT: &str = "IELTS 8000.txt";
pub const DEFAULT_OUTPUT: &str = "ielts-8000-data.js";
pub const DEFAULT_CONSTANT_NAME: &str = "IELTS_8000_DATA";
pub const DEFAULT_GLOBAL_OBJECT: &str = "window";

/// How the generated file makes the constant reachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Exposure {
    /// Assign the constant onto a global object, for module-less script loading.
    Global { object: String },
    /// Export the constant as an ES module (named and default export).
    Module,
}

impl Default for Exposure {
    fn default() -> Self {
        Self::Global {
            object: DEFAULT_GLOBAL_OBJECT.into(),
        }
    }
}

/// Everything one conversion needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Plain-text word list to read.
    pub input: PathBuf,
    /// JavaScript file to write (overwritten if present).
    pub output: PathBuf,
    /// Name of the declared constant.
    pub constant_name: String,
    pub exposure: Exposure,
    /// Comment lines written at the top of the output, without the `// ` prefix.
    pub header: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            constant_name: DEFAULT_CONSTANT_NAME.into(),
            exposure: Exposure::default(),
            header: vec![
                "IELTS 8000 Word Collection - Built-in Data".into(),
                "Auto-generated from IELTS 8000.txt".into(),
                "Total: 8000 words in 40 lists (200 words each)".into(),
            ],
        }
    }
}

impl ConvertOptions {
    /// Default options with the given input and output paths.
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    /// Load options from a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| WordpackError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        serde_json::from_str(&contents).map_err(|e| WordpackError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load options from `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save options as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| WordpackError::ConfigSerialize {
                path: path.to_path_buf(),
                source: e,
            })?;
        std::fs::write(path, json + "\n").map_err(|e| WordpackError::ConfigWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Check that the names written into the output are valid JavaScript.
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.constant_name) {
            return Err(WordpackError::InvalidIdentifier {
                field: "constant_name",
                value: self.constant_name.clone(),
            });
        }
        if let Exposure::Global { object } = &self.exposure {
            if object.is_empty() || !object.split('.').all(is_identifier) {
                return Err(WordpackError::InvalidIdentifier {
                    field: "exposure.object",
                    value: object.clone(),
                });
            }
        }
        Ok(())
    }
}

/// A JavaScript IdentifierName, approximated with Unicode alphabetic/alphanumeric classes.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
