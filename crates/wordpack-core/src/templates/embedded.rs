//! Compile-time embedded output templates.
//!
//! Paths are relative to this source file (`crates/wordpack-core/src/templates/embedded.rs`).
//! Both templates end with a single newline, which becomes the trailing newline of the
//! generated file.

/// Script-style output: a `const` plus an assignment onto a global object.
pub const GLOBAL_SCRIPT: &str = include_str!("../../templates/global.js.hbs");

/// ES module output: a named and a default export, no globals.
pub const ES_MODULE: &str = include_str!("../../templates/module.js.hbs");
