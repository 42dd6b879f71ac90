//! Options merging logic
//!
//! Priority: CLI args > defcon.toml > defaults

use std::path::PathBuf;

use super::schema::DefconToml;
use crate::options::Options;
use crate::render::{Artifact, ArtifactKind, RenderOptions};

/// Options given on the command line.
///
/// Uses `Option<T>` / empty vectors to distinguish "not specified" from
/// "explicitly set".
#[derive(Debug, Default)]
pub struct CliOptions {
    pub definitions: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    /// `-C` and `-M` outputs in the order they were given
    pub artifacts: Vec<Artifact>,
    /// If Some(true), silence undefined key warnings
    pub suppress_undefined: Option<bool>,
}

/// Merge options from CLI, a loaded defcon.toml and defaults.
///
/// Definition files only ever come from the command line. A settings
/// `header` or `makefile` is appended after the CLI outputs unless the CLI
/// already asked for an output of that kind.
pub fn merge_options(cli: &CliOptions, settings: Option<&DefconToml>) -> Options {
    let defaults = Options::default();
    let input = settings.map(|s| &s.input);
    let output = settings.map(|s| &s.output);

    let mut artifacts = cli.artifacts.clone();
    let has_kind = |kind: ArtifactKind| cli.artifacts.iter().any(|a| a.kind == kind);
    if let Some(path) = output.and_then(|o| o.header.as_ref()) {
        if !has_kind(ArtifactKind::Header) {
            artifacts.push(Artifact::header(path));
        }
    }
    if let Some(path) = output.and_then(|o| o.makefile.as_ref()) {
        if !has_kind(ArtifactKind::Makefile) {
            artifacts.push(Artifact::makefile(path));
        }
    }

    Options {
        definitions: cli.definitions.clone(),
        config: cli
            .config
            .clone()
            .or_else(|| input.and_then(|i| i.config.clone()))
            .unwrap_or(defaults.config),
        artifacts,
        suppress_undefined: cli
            .suppress_undefined
            .or_else(|| input.and_then(|i| i.suppress_undefined))
            .unwrap_or(defaults.suppress_undefined),
        render: RenderOptions {
            prefix: output
                .and_then(|o| o.prefix.clone())
                .unwrap_or(defaults.render.prefix),
            guard: output
                .and_then(|o| o.guard.clone())
                .unwrap_or(defaults.render.guard),
        },
    }
}
