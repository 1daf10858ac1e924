//! Command-line interface module.

mod args;
pub mod check;
pub mod get;
pub mod init;
pub mod keys;

pub use args::{Cli, Commands, ShowFormat};
