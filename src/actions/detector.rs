//! Marker file detector
//!
//! Probes a project root for marker files and collects the matching actions.
//! The default policy is non-fatal: a probe that fails for any reason other
//! than success is treated as "marker absent", so callers never see an error
//! for a missing or even nonexistent root. Strict mode tightens this to
//! surface probe failures that are not plain `NotFound`.

use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, trace};

use super::rules::{default_rules, MarkerRule};
use super::Action;

/// Error raised by [`Detector::detect`] in strict mode
///
/// The default detector never constructs this: missing markers and
/// inconclusive probes alike yield no action and no error.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("failed to probe marker '{marker}' under {root}: {source}")]
    Probe {
        marker: &'static str,
        root: String,
        #[source]
        source: io::Error,
    },
}

/// Outcome of a single marker probe
enum Probe {
    Present,
    Absent,
    /// The stat failed for a reason other than "not found" (permission
    /// denied, not a directory, path too long). The default policy folds
    /// this into Absent.
    Inconclusive(io::Error),
}

/// Orders marker probes and maps matches to actions
///
/// Cheap to construct and stateless between calls; safe to use from multiple
/// threads since it only reads the filesystem.
pub struct Detector {
    rules: Vec<MarkerRule>,
    strict: bool,
}

impl Detector {
    /// Creates a detector with the built-in rules (`go.mod`, `package.json`)
    pub fn new() -> Self {
        Self::with_rules(default_rules().to_vec())
    }

    /// Creates a detector with a custom ordered rule set
    pub fn with_rules(rules: Vec<MarkerRule>) -> Self {
        Self {
            rules,
            strict: false,
        }
    }

    /// Surfaces probe failures other than `NotFound` instead of skipping them
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Checks each rule's marker under `root`, in rule order
    ///
    /// Returns every matching action, empty when nothing matches. `root` is
    /// not validated up front; a nonexistent root simply matches nothing.
    pub fn detect(&self, root: &Path) -> Result<Vec<Action>, DetectError> {
        let mut out = Vec::new();

        for rule in &self.rules {
            match probe(&root.join(rule.marker)) {
                Probe::Present => {
                    trace!(marker = rule.marker, id = rule.id, "marker matched");
                    out.push(rule.to_action());
                }
                Probe::Absent => {
                    trace!(marker = rule.marker, "marker absent");
                }
                Probe::Inconclusive(err) => {
                    if self.strict {
                        return Err(DetectError::Probe {
                            marker: rule.marker,
                            root: root.display().to_string(),
                            source: err,
                        });
                    }
                    debug!(
                        marker = rule.marker,
                        error = %err,
                        "marker probe inconclusive, treating as absent"
                    );
                }
            }
        }

        debug!(root = %root.display(), count = out.len(), "detection complete");
        Ok(out)
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

/// Detects actions under `root` with the default rules and policy
///
/// Never returns an error: missing markers, a nonexistent root, and
/// inconclusive probes all just produce fewer actions.
pub fn detect_actions(root: &Path) -> Result<Vec<Action>, DetectError> {
    Detector::new().detect(root)
}

fn probe(path: &Path) -> Probe {
    // Follows symlinks, so a dangling symlink marker counts as absent.
    match std::fs::metadata(path) {
        Ok(_) => Probe::Present,
        Err(err) if err.kind() == io::ErrorKind::NotFound => Probe::Absent,
        Err(err) => Probe::Inconclusive(err),
    }
}
