//! Action detection from project marker files
//!
//! Marker files are filenames whose presence in a directory indicates a
//! particular toolchain (`go.mod` for Go modules, `package.json` for npm).
//! The [`Detector`] probes a project root for a fixed, ordered set of markers
//! and returns one [`Action`] per match. Actions are suggestions only; running
//! them is the caller's business.

use serde::{Deserialize, Serialize};

pub mod detector;
pub mod rules;

pub use detector::{detect_actions, DetectError, Detector};
pub use rules::{default_rules, MarkerRule};

/// A suggested command for a detected toolchain
///
/// Immutable record constructed fresh on each detection call. `id` is a short
/// stable identifier ("go", "npm"), `label` a human-readable description, and
/// `cmd` the shell command text a consumer may choose to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    pub label: String,
    pub cmd: String,
}

impl Action {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        cmd: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            cmd: cmd.into(),
        }
    }
}
