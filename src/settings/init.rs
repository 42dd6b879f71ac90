//! Template generation for `--init` command

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::file::SETTINGS_FILE;

/// Template defcon.toml with documentation
pub const DEFCON_TOML_TEMPLATE: &str = r#"# defcon.toml - Project settings for defcon
#
# defcon reads definition files describing configuration keys, fills them
# in from a configuration file and generates a C header and/or a makefile
# fragment. It is only read when named with --settings; definition files
# are always given on the command line. Every setting below can be
# overridden there too. Relative paths are resolved against the directory
# of this file.

[input]
# Configuration file with the actual values (-c).
# Default: "defcon.conf"
# config = "defcon.conf"

# Do not warn about keys that have no definition (-s).
# Default: false
# suppress_undefined = false

[output]
# C header to generate (-C).
# header = "config.h"

# Makefile fragment to generate (-M).
# makefile = "config.mk"

# Prefix of every emitted name.
# Default: "CONFIG_"
# prefix = "CONFIG_"

# Include guard of the C header.
# Default: "__CONFIG_H__"
# guard = "__CONFIG_H__"
"#;

/// Generate defcon.toml in the specified directory (or current directory if None).
///
/// Returns an error if defcon.toml already exists.
pub fn generate_init_file_in(dir: Option<&Path>) -> io::Result<PathBuf> {
    let path = dir.map_or_else(|| PathBuf::from(SETTINGS_FILE), |d| d.join(SETTINGS_FILE));

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "defcon.toml already exists",
        ));
    }

    fs::write(&path, DEFCON_TOML_TEMPLATE)?;
    Ok(path)
}

/// Generate defcon.toml in the current directory.
pub fn generate_init_file() -> io::Result<PathBuf> {
    generate_init_file_in(None)
}
