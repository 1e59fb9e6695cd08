//! # release-drafter-config entry point
//!
//! Parses command-line arguments, sets up logging, and runs the generator.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use drafter_cli::generate::{run_generate, GenerateArgs};
use drafter_cli::resolve_root;

/// Generate a per-policy release-drafter configuration.
///
/// The config extends `.github/release-drafter.yml` and restricts names,
/// tags, and tracked paths to a single policy under `policies/`.
#[derive(Parser, Debug)]
#[command(name = "release-drafter-config", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory containing `policies/`; a relative --output resolves against it.
    /// Defaults to the current directory.
    #[arg(long)]
    root: Option<PathBuf>,

    #[command(flatten)]
    generate: GenerateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = resolve_root(cli.root.as_deref());
    tracing::debug!(root = %root.display(), "resolved policies root");

    match run_generate(&cli.generate, &root) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
