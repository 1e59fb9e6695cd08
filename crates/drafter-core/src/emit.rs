//! # Config Emitter
//!
//! Validates the request, confirms the policy exists, renders the template,
//! and writes it to the output path. Steps run strictly in that order, so an
//! unknown policy is reported before the output file is created.
//!
//! ```no_run
//! use drafter_core::{emit_str, EmitOptions};
//!
//! let options = EmitOptions::new(".");
//! let emitted = emit_str("widget", "release-drafter-widget.yml", &options)?;
//! assert!(emitted.written);
//! # Ok::<(), drafter_core::EmitError>(())
//! ```

use std::path::{Component, Path, PathBuf};

use crate::error::EmitError;
use crate::policy::PolicyName;
use crate::template::render;
use crate::POLICIES_DIR;

/// A validated emit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitRequest {
    pub policy_name: PolicyName,
    pub output: PathBuf,
}

impl EmitRequest {
    /// Validate raw inputs. The policy name is checked before the output.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::MissingArgument`] if either value is empty.
    pub fn new(policy_name: &str, output: impl AsRef<Path>) -> Result<Self, EmitError> {
        let policy_name = PolicyName::new(policy_name)?;
        let output = output.as_ref();
        if output.as_os_str().is_empty() {
            return Err(EmitError::MissingArgument { flag: "--output" });
        }
        Ok(Self {
            policy_name,
            output: output.to_path_buf(),
        })
    }
}

/// Where policies live and whether to write anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Directory containing `policies/`. Relative output paths resolve here.
    pub root: PathBuf,
    /// Render and validate, but do not write the output file.
    pub dry_run: bool,
}

impl EmitOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
        }
    }

    /// Enable or disable dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Resolve `output` against the root unless it is already absolute.
    pub fn resolve_output(&self, output: &Path) -> PathBuf {
        if output.is_absolute() {
            output.to_path_buf()
        } else {
            self.root.join(output)
        }
    }
}

/// Result of a successful emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    /// Resolved output path.
    pub path: PathBuf,
    /// The rendered config.
    pub contents: String,
    /// False for dry runs.
    pub written: bool,
}

/// `root/policies/<name>`.
///
/// The name is appended to `policies/` as text, so an absolute name stays
/// under `root` instead of replacing it.
pub fn policy_dir(root: &Path, policy: &PolicyName) -> PathBuf {
    root.join(format!("{POLICIES_DIR}/{policy}"))
}

/// True if every component of the name is a plain segment, so the lookup
/// cannot leave `policies/`.
fn is_contained(policy: &PolicyName) -> bool {
    Path::new(policy.as_str())
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Confirm the policy directory exists and return its path.
///
/// Nested names such as `team/widget` are allowed. Absolute names and names
/// with `..` segments never match.
///
/// # Errors
///
/// Returns [`EmitError::PolicyNotFound`] if the name escapes `policies/`, or
/// the path is missing or is not a directory.
pub fn locate_policy(root: &Path, policy: &PolicyName) -> Result<PathBuf, EmitError> {
    let dir = policy_dir(root, policy);
    if !is_contained(policy) || !dir.is_dir() {
        return Err(EmitError::PolicyNotFound {
            policy: policy.to_string(),
            path: dir,
        });
    }
    Ok(dir)
}

/// Create or truncate `path` and write `contents` to it.
///
/// Parent directories are not created.
pub fn write_config(path: &Path, contents: &str) -> Result<(), EmitError> {
    std::fs::write(path, contents).map_err(|source| EmitError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Emit the release-drafter config described by `request`.
pub fn emit(request: &EmitRequest, options: &EmitOptions) -> Result<Emitted, EmitError> {
    let policy = &request.policy_name;

    let dir = locate_policy(&options.root, policy)?;
    tracing::debug!(policy = %policy, dir = %dir.display(), "policy directory found");

    let contents = render(policy);
    let path = options.resolve_output(&request.output);

    if options.dry_run {
        tracing::info!(policy = %policy, path = %path.display(), "dry run, skipping write");
        return Ok(Emitted {
            path,
            contents,
            written: false,
        });
    }

    write_config(&path, &contents)?;
    tracing::info!(
        policy = %policy,
        path = %path.display(),
        bytes = contents.len(),
        "wrote release-drafter config"
    );

    Ok(Emitted {
        path,
        contents,
        written: true,
    })
}

/// Validate raw inputs and emit.
pub fn emit_str(
    policy_name: &str,
    output: impl AsRef<Path>,
    options: &EmitOptions,
) -> Result<Emitted, EmitError> {
    let request = EmitRequest::new(policy_name, output)?;
    emit(&request, options)
}
