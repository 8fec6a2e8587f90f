//! CLI command implementations for wordpack.
//!
//! Each module corresponds to a subcommand (`wordpack <command>`).

pub mod convert;
pub mod init;
