//! Binding configuration file values to declared keys.

use std::fs;
use std::path::Path;

use crate::diag::Diagnostics;
use crate::error::DefconError;
use crate::ini::{self, Document};
use crate::registry::Registry;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "defcon.conf";

/// Per-entry outcome counts of a resolution pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub resolved: usize,
    pub undefined: usize,
    pub rejected: usize,
}

/// Read and apply the configuration file. Failing to read or parse it is fatal.
pub fn resolve_file(
    registry: &mut Registry,
    path: &Path,
    suppress_undefined: bool,
    diag: &mut Diagnostics,
) -> Result<Resolution, DefconError> {
    let content = fs::read_to_string(path).map_err(|source| DefconError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = ini::parse(&content).map_err(|source| DefconError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })?;

    let source = path.display().to_string();
    Ok(resolve_document(
        registry,
        &source,
        &doc,
        suppress_undefined,
        diag,
    ))
}

/// Assign each `key = value` entry to its definition. Sections are ignored.
pub fn resolve_document(
    registry: &mut Registry,
    source: &str,
    doc: &Document,
    suppress_undefined: bool,
    diag: &mut Diagnostics,
) -> Resolution {
    let mut resolution = Resolution::default();

    for entry in &doc.entries {
        let Some(def) = registry.find_mut(&entry.key) else {
            resolution.undefined += 1;
            if !suppress_undefined {
                diag.warn(source, format!("undefined key: {}", entry.key));
            }
            continue;
        };

        match def.assign(&entry.value) {
            Ok(()) => resolution.resolved += 1,
            Err(e) => {
                resolution.rejected += 1;
                diag.warn(format!("{source}:{}", entry.key), e.to_string());
            }
        }
    }

    resolution
}
