//! Marker rule table
//!
//! Each rule maps one marker filename to the action suggested when that file
//! exists under the project root. Rules are checked in table order and the
//! result preserves that order, so `go.mod` always ranks before
//! `package.json` in the defaults.

use super::Action;

/// Maps a marker filename to a suggested action
#[derive(Debug, Clone, Copy)]
pub struct MarkerRule {
    /// Filename probed relative to the project root (e.g., "go.mod")
    pub marker: &'static str,
    pub id: &'static str,
    pub label: &'static str,
    pub cmd: &'static str,
}

impl MarkerRule {
    pub fn to_action(&self) -> Action {
        Action::new(self.id, self.label, self.cmd)
    }
}

/// Built-in rules, in priority order
const DEFAULT_RULES: &[MarkerRule] = &[
    MarkerRule {
        marker: "go.mod",
        id: "go",
        label: "go test",
        cmd: "go test ./...",
    },
    MarkerRule {
        marker: "package.json",
        id: "npm",
        label: "npm ci && npm test",
        cmd: "npm ci && npm test",
    },
];

/// The default rule table: `go.mod` first, then `package.json`
pub fn default_rules() -> &'static [MarkerRule] {
    DEFAULT_RULES
}
