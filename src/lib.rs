pub mod colors;
pub mod definitions;
pub mod diag;
pub mod error;
pub mod ini;
mod options;
pub mod registry;
pub mod render;
pub mod resolve;
pub mod settings;
pub mod validate;
pub mod value;

pub use colors::{should_use_colors, Colors};
pub use diag::{Diagnostics, Warning};
pub use error::DefconError;
pub use options::Options;
pub use registry::{Definition, Registry};
pub use render::{
    Artifact, ArtifactKind, HeaderRenderer, MakefileRenderer, RenderOptions, Renderer,
};
pub use resolve::{Resolution, DEFAULT_CONFIG_FILE};
pub use settings::{
    generate_init_file, load_settings, merge_options, CliOptions, DefconToml, SettingsError,
};
pub use value::{parse_boolean, parse_type, parse_value, TypeTag, Value, ValueError};

/// Summary of a completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub definitions: usize,
    pub resolution: Resolution,
    pub artifacts_written: usize,
    pub artifacts_failed: usize,
}

/// Main entry point: definitions, configuration, validation, artifacts.
///
/// Only the fatal conditions are returned as errors. Everything else is
/// reported through `diag` and the run carries on.
pub fn run(options: &Options, diag: &mut Diagnostics) -> Result<RunReport, DefconError> {
    if options.definitions.is_empty() {
        return Err(DefconError::NoDefinitionFiles);
    }

    let mut registry = Registry::new();
    for path in &options.definitions {
        definitions::ingest_file(&mut registry, path, diag);
    }

    let resolution = resolve::resolve_file(
        &mut registry,
        &options.config,
        options.suppress_undefined,
        diag,
    )?;

    validate::check_required(&registry)?;

    let mut report = RunReport {
        definitions: registry.len(),
        resolution,
        ..RunReport::default()
    };
    for artifact in &options.artifacts {
        let renderer = artifact.renderer(&options.render);
        if renderer.generate(&registry, diag) {
            report.artifacts_written += 1;
        } else {
            report.artifacts_failed += 1;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn options_in(dir: &Path, defs: &[&str]) -> Options {
        Options {
            definitions: defs.iter().map(|d| dir.join(d)).collect(),
            config: dir.join("defcon.conf"),
            artifacts: vec![
                Artifact::header(dir.join("config.h")),
                Artifact::makefile(dir.join("config.mk")),
            ],
            ..Options::default()
        }
    }

    #[test]
    fn test_no_definition_files() {
        let mut diag = Diagnostics::silent();
        let result = run(&Options::default(), &mut diag);
        assert!(matches!(result, Err(DefconError::NoDefinitionFiles)));
    }

    #[test]
    fn test_port_end_to_end() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("net.def"),
            "[PORT]\ntype = integer\ndefine = PORT\nrequired = true\n",
        )
        .unwrap();
        fs::write(dir.path().join("defcon.conf"), "PORT = 8080\n").unwrap();

        let mut diag = Diagnostics::silent();
        let report = run(&options_in(dir.path(), &["net.def"]), &mut diag).unwrap();

        assert_eq!(report.definitions, 1);
        assert_eq!(report.resolution.resolved, 1);
        assert_eq!(report.artifacts_written, 2);
        let header = fs::read_to_string(dir.path().join("config.h")).unwrap();
        assert!(header.lines().any(|l| l == "#define CONFIG_PORT 8080"));
        let makefile = fs::read_to_string(dir.path().join("config.mk")).unwrap();
        assert!(makefile.lines().any(|l| l == "CONFIG_PORT := 8080"));
    }

    #[test]
    fn test_optional_key_may_stay_unset() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("name.def"),
            "[NAME]\ntype = string\ndefine = NAME\n",
        )
        .unwrap();
        fs::write(dir.path().join("defcon.conf"), "").unwrap();

        let mut diag = Diagnostics::silent();
        run(&options_in(dir.path(), &["name.def"]), &mut diag).unwrap();

        let header = fs::read_to_string(dir.path().join("config.h")).unwrap();
        assert!(header.lines().any(|l| l == "#define CONFIG_NAME \"\""));
    }

    #[test]
    fn test_missing_required_aborts_before_rendering() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("net.def"),
            "[PORT]\ntype = integer\ndefine = PORT\nrequired = true\n",
        )
        .unwrap();
        fs::write(dir.path().join("defcon.conf"), "").unwrap();

        let mut diag = Diagnostics::silent();
        let result = run(&options_in(dir.path(), &["net.def"]), &mut diag);

        assert!(matches!(result, Err(DefconError::MissingValue { ref name }) if name == "PORT"));
        assert!(!dir.path().join("config.h").exists());
        assert!(!dir.path().join("config.mk").exists());
    }

    #[test]
    fn test_later_definition_file_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("a.def"),
            "[FOO]\ndescription = first\ndefine = FOO\nvalue = a\n",
        )
        .unwrap();
        fs::write(dir.path().join("b.def"), "[FOO]\nvalue = b\n").unwrap();
        fs::write(dir.path().join("defcon.conf"), "").unwrap();

        let mut diag = Diagnostics::silent();
        let report = run(&options_in(dir.path(), &["a.def", "b.def"]), &mut diag).unwrap();

        assert_eq!(report.definitions, 1);
        let makefile = fs::read_to_string(dir.path().join("config.mk")).unwrap();
        assert_eq!(makefile, "CONFIG_FOO := \"b\"\n");
    }

    #[test]
    fn test_invalid_later_default_makes_required_key_fatal() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("a.def"),
            "[A]\ntype = integer\ndefine = A\nrequired = true\nvalue = 5\n",
        )
        .unwrap();
        fs::write(dir.path().join("b.def"), "[A]\nvalue = abc\n").unwrap();
        fs::write(dir.path().join("defcon.conf"), "").unwrap();

        let mut diag = Diagnostics::silent();
        let result = run(&options_in(dir.path(), &["a.def", "b.def"]), &mut diag);

        assert!(matches!(result, Err(DefconError::MissingValue { ref name }) if name == "A"));
        assert!(!dir.path().join("config.h").exists());
    }

    #[test]
    fn test_unreadable_definition_file_is_not_fatal() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ok.def"), "[A]\ndefine = A\nvalue = 1\n").unwrap();
        fs::write(dir.path().join("defcon.conf"), "").unwrap();

        let mut diag = Diagnostics::silent();
        let report = run(
            &options_in(dir.path(), &["missing.def", "ok.def"]),
            &mut diag,
        )
        .unwrap();

        assert_eq!(report.definitions, 1);
        assert!(diag.warnings()[0].source.ends_with("missing.def"));
    }

    #[test]
    fn test_artifact_failure_does_not_fail_run() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.def"), "[A]\ndefine = A\n").unwrap();
        fs::write(dir.path().join("defcon.conf"), "").unwrap();

        let mut options = options_in(dir.path(), &["a.def"]);
        options.artifacts[0] = Artifact::header(dir.path().join("no/such/dir/config.h"));

        let mut diag = Diagnostics::silent();
        let report = run(&options, &mut diag).unwrap();

        assert_eq!(report.artifacts_failed, 1);
        assert_eq!(report.artifacts_written, 1);
        assert!(dir.path().join("config.mk").exists());
    }

    #[test]
    fn test_artifacts_follow_requested_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.def"), "[A]\ndefine = A\nvalue = 1\n").unwrap();
        fs::write(dir.path().join("defcon.conf"), "").unwrap();

        // Both write the same file, so the last one requested wins
        let mut options = options_in(dir.path(), &["a.def"]);
        let out = dir.path().join("out");
        options.artifacts = vec![Artifact::makefile(&out), Artifact::header(&out)];

        let mut diag = Diagnostics::silent();
        run(&options, &mut diag).unwrap();
        assert!(fs::read_to_string(&out).unwrap().starts_with("#ifndef"));

        options.artifacts.reverse();
        run(&options, &mut diag).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "CONFIG_A := \"1\"\n");
    }
}
