//! Tripwire - run artifact invariant manifests from a pipeline.
//!
//! Exit status is 0 when every check passed, 1 when any check failed and 2
//! when a manifest could not be loaded or the arguments were wrong.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::debug;
use tripwire_suite::{Suite, SuiteError};

const USAGE: &str = "usage: tripwire [-v|--verbose] [--root DIR] MANIFEST...";

/// Command-line options.
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    verbose: bool,
    root: Option<PathBuf>,
    manifests: Vec<PathBuf>,
}

impl Options {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-v" | "--verbose" => options.verbose = true,
                "--root" => {
                    let dir = args
                        .next()
                        .ok_or_else(|| "--root requires a directory".to_string())?;
                    options.root = Some(PathBuf::from(dir));
                }
                "-h" | "--help" => return Err(USAGE.to_string()),
                flag if flag.starts_with('-') => {
                    return Err(format!("unknown option '{flag}'"));
                }
                _ => options.manifests.push(PathBuf::from(&arg)),
            }
        }

        if options.manifests.is_empty() {
            return Err("no manifest given".to_string());
        }
        Ok(options)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run every manifest; returns whether all checks passed.
fn run(options: &Options) -> Result<bool, SuiteError> {
    let mut all_passed = true;

    for manifest in &options.manifests {
        let mut suite = Suite::from_manifest(manifest)?;
        if let Some(root) = &options.root {
            suite = suite.base_path(root);
        }

        let report = suite.run()?;
        println!("{report}");
        all_passed &= report.is_success();
    }

    Ok(all_passed)
}

fn main() -> ExitCode {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    init_logging(options.verbose);
    debug!(manifests = options.manifests.len(), root = ?options.root, "starting run");

    exit_code(run(&options))
}

/// Map the outcome of a run to the process exit status.
fn exit_code(result: Result<bool, SuiteError>) -> ExitCode {
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
