//! # folio-cli
//!
//! The `folio` command-line tool: serve the content API, inspect
//! collections, run searches, and render SEO output from the terminal.
//!
//! Configuration is loaded by [`FolioConfig::load`] from a TOML file,
//! `FOLIO_*` environment variables, and built-in defaults.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;

pub use app::FolioCli;
pub use cli::{CliArgs, Command, ConfigAction};
pub use config::{ContentConfig, FolioConfig};
