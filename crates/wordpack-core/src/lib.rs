//! Core library for wordpack.
//!
//! Turns a plain-text word list into a JavaScript file that declares the text as
//! a constant, so a script runtime without file-system access can load it:
//! [`escape`] makes the text safe inside a template literal, [`render`] wraps it
//! in the output template, and [`convert`] does the file I/O around both.
//!
//! [`config::ConvertOptions::default`] reproduces the fixed `IELTS 8000.txt` to
//! `ielts-8000-data.js` conversion.

pub mod config;
pub mod convert;
pub mod error;
pub mod escape;
pub mod render;
pub mod templates;

pub use config::{ConvertOptions, Exposure};
pub use convert::{convert, ConvertReport};
pub use error::{Result, WordpackError};
