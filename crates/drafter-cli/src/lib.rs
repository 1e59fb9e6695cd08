//! # drafter-cli - Release-Drafter Config CLI
//!
//! Provides the `release-drafter-config` binary, run from CI once per policy
//! to produce the config release-drafter uses for that policy's releases.
//!
//! ```bash
//! release-drafter-config --policy-name widget --output .github/release-drafter-widget.yml
//! release-drafter-config --policy-name widget --output out.yml --dry-run
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; validation, rendering, and writing live in
//!   `drafter-core`.
//! - Handlers return an exit code; only `main` touches the process.

pub mod generate;

use std::path::{Path, PathBuf};

/// Resolve the root holding `policies/`: the explicit `--root` if given,
/// otherwise the current directory.
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(root) = explicit {
        return root.to_path_buf();
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
