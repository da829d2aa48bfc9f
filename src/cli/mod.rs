//! Interactive front end.
//!
//! A thin menu loop over the tree: argument parsing, the command session and
//! the listing renderer. None of it touches tree internals.

pub mod args;
pub mod error;
pub mod output;
pub mod session;

pub use args::{Cli, OutputFormat};
pub use error::{CliError, CliResult};
pub use session::{Command, Session};
