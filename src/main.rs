use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use defcon::{
    generate_init_file, load_settings, merge_options, run, should_use_colors, Artifact,
    CliOptions, Colors, DefconToml, Diagnostics,
};

const PROGRAM: &str = "defcon";

#[derive(Parser)]
#[command(name = "defcon")]
#[command(
    about = "Generate C headers and makefile fragments from typed configuration definitions",
    disable_version_flag = true
)]
struct Cli {
    /// Definition files, applied in order
    #[arg(value_name = "DEFINITIONS")]
    definitions: Vec<PathBuf>,

    /// Generate a C header
    #[arg(short = 'C', value_name = "FILENAME")]
    header: Vec<PathBuf>,

    /// Generate a makefile fragment
    #[arg(short = 'M', value_name = "FILENAME")]
    makefile: Vec<PathBuf>,

    /// Set the input file (default: defcon.conf)
    #[arg(short = 'c', value_name = "FILENAME")]
    config: Option<PathBuf>,

    /// Suppress "undefined key" warnings during parsing
    #[arg(short = 's')]
    suppress: bool,

    /// Print version and exit
    #[arg(short = 'v', long)]
    version: bool,

    /// Read default options from this defcon.toml
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Generate a template defcon.toml settings file
    #[arg(long)]
    init: bool,

    /// Always color diagnostics
    #[arg(long)]
    color: bool,

    /// Never color diagnostics
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let parsed = Cli::command()
        .try_get_matches()
        .and_then(|matches| Cli::from_arg_matches(&matches).map(|cli| (cli, matches)));
    let (cli, matches) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    let colors = Colors::new(should_use_colors(cli.color, cli.no_color));
    let mut diag = Diagnostics::new(colors);

    if cli.init {
        return handle_init(&diag);
    }

    let settings = cli
        .settings
        .as_deref()
        .and_then(|path| load_project_settings(path, &mut diag));
    let cli_options = build_cli_options(&cli, &matches);
    let options = merge_options(&cli_options, settings.as_ref());

    match run(&options, &mut diag) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            diag.fatal(PROGRAM, &e);
            ExitCode::from(1)
        }
    }
}

fn print_version() {
    println!("{PROGRAM} (DefCon) {}", env!("CARGO_PKG_VERSION"));
    println!("Copyright (c) 2021, Kirill GPRB.");
}

fn handle_init(diag: &Diagnostics) -> ExitCode {
    match generate_init_file() {
        Ok(path) => {
            let colors = diag.colors();
            println!(
                "{}Created{} {}",
                colors.success,
                colors.reset(),
                path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            diag.fatal(PROGRAM, &e);
            ExitCode::from(1)
        }
    }
}

/// Load the defcon.toml named with `--settings`. Failures only warn.
fn load_project_settings(path: &Path, diag: &mut Diagnostics) -> Option<DefconToml> {
    match load_settings(path) {
        Ok(settings) => Some(settings),
        Err(e) => {
            diag.warn(path.display().to_string(), e.to_string());
            None
        }
    }
}

fn build_cli_options(cli: &Cli, matches: &ArgMatches) -> CliOptions {
    // Flags in clap are always present (default false), so false is
    // treated as "not set" for merging with the settings file.
    CliOptions {
        definitions: cli.definitions.clone(),
        config: cli.config.clone(),
        artifacts: ordered_artifacts(cli, matches),
        suppress_undefined: cli.suppress.then_some(true),
    }
}

/// Interleave `-C` and `-M` back into command-line order.
fn ordered_artifacts(cli: &Cli, matches: &ArgMatches) -> Vec<Artifact> {
    let headers = matches
        .indices_of("header")
        .into_iter()
        .flatten()
        .zip(cli.header.iter().map(Artifact::header));
    let makefiles = matches
        .indices_of("makefile")
        .into_iter()
        .flatten()
        .zip(cli.makefile.iter().map(Artifact::makefile));

    let mut indexed: Vec<(usize, Artifact)> = headers.chain(makefiles).collect();
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, artifact)| artifact).collect()
}
