//! Project settings support for defcon.
//!
//! This module provides:
//! - Loading default options from a `defcon.toml` named with `--settings`
//! - Merging CLI args, settings file, and defaults
//! - Template generation with `--init`

mod file;
mod init;
mod merge;
mod schema;

pub use file::{load_settings, SettingsError, SETTINGS_FILE};
pub use init::{generate_init_file, generate_init_file_in, DEFCON_TOML_TEMPLATE};
pub use merge::{merge_options, CliOptions};
pub use schema::{DefconToml, InputSection, OutputSection};
