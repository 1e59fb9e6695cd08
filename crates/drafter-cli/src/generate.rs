//! # Generate Command
//!
//! Writes the release-drafter config for a single policy.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Args;

use drafter_core::{emit_str, EmitOptions};

/// Arguments for generating a policy's release-drafter config.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Name of the policy; `policies/<name>` must exist.
    #[arg(long)]
    pub policy_name: String,

    /// File to write the generated config to.
    // Parsed as an OsString so an empty value reaches the emitter's check.
    #[arg(long, value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub output: PathBuf,

    /// Print the generated config to stdout without writing the output file.
    #[arg(long)]
    pub dry_run: bool,
}

/// Execute the generate command against `root`.
pub fn run_generate(args: &GenerateArgs, root: &Path) -> Result<u8> {
    let options = EmitOptions::new(root).with_dry_run(args.dry_run);

    let emitted = emit_str(&args.policy_name, &args.output, &options)
        .with_context(|| format!("generating config for policy '{}'", args.policy_name))?;

    if !emitted.written {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(emitted.contents.as_bytes())
            .context("writing config to stdout")?;
        stdout.flush().context("flushing stdout")?;
    }

    Ok(0)
}
