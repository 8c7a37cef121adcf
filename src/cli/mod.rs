//! CLI module
//!
//! Command-line interface over the folder pagination library.
//!
//! # Commands
//!
//! - `list` - Every folder of an organization
//! - `page` - One page of an organization's folders
//! - `walk` - Every page of an organization, following cursors
//! - `orgs` - Organizations in the catalog with folder counts
//! - `encode-cursor` / `decode-cursor` - Cursor token conversion

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
