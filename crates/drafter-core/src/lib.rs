//! # drafter-core - Release-Drafter Config Generation
//!
//! Generates the per-policy configuration consumed by release-drafter. Each
//! policy under `policies/<name>/` is versioned and tagged independently, so
//! each one gets its own config extending the shared
//! `.github/release-drafter.yml` with a policy-scoped tag prefix and include
//! path.
//!
//! ## Pipeline
//!
//! 1. [`EmitRequest::new`] validates the raw inputs (both non-empty).
//! 2. [`locate_policy`] confirms `policies/<name>` exists under the root.
//! 3. [`render`] substitutes the policy name into the fixed template.
//! 4. [`write_config`] creates or truncates the output file.
//!
//! [`emit`] runs all four steps in order. A failed lookup never touches the
//! output file.
//!
//! ## Crate Policy
//!
//! - Rendering and validation are pure; only [`write_config`] performs I/O.
//! - Nothing here exits the process. Callers decide how to report failures.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod emit;
pub mod error;
pub mod policy;
pub mod template;

pub use emit::{
    emit, emit_str, locate_policy, policy_dir, write_config, EmitOptions, EmitRequest, Emitted,
};
pub use error::{EmitError, ErrorKind};
pub use policy::PolicyName;
pub use template::render;

/// Directory, relative to the root, that holds one subdirectory per policy.
pub const POLICIES_DIR: &str = "policies";
