//! Template system for generated JavaScript data files.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! - `{{header}}`: the comment block, each line prefixed with `// `, followed by a
//!   blank separator line (empty when there is no header)
//! - `{{name}}`: the constant name (e.g., `IELTS_8000_DATA`)
//! - `{{content}}`: the escaped word list, placed between backticks
//! - `{{global_object}}`: the object the constant is attached to (global template only)
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to the embedding source file and checked at compile-time.

pub mod embedded;
pub mod renderer;
