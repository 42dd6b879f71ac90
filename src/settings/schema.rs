//! TOML schema definitions for defcon.toml

use serde::Deserialize;
use std::path::PathBuf;

/// Root structure for defcon.toml
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefconToml {
    #[serde(default)]
    pub input: InputSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// `[input]` section in defcon.toml
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputSection {
    /// Configuration file (default: defcon.conf)
    pub config: Option<PathBuf>,

    /// Silence "undefined key" warnings (default: false)
    pub suppress_undefined: Option<bool>,
}

/// `[output]` section in defcon.toml
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// C header to generate
    pub header: Option<PathBuf>,

    /// Makefile fragment to generate
    pub makefile: Option<PathBuf>,

    /// Prefix for every emitted name (default: CONFIG_)
    pub prefix: Option<String>,

    /// Include guard of the C header (default: __CONFIG_H__)
    pub guard: Option<String>,
}
