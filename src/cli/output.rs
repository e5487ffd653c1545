//! Output formatting for detection results
//!
//! Formats the action list as JSON, YAML, or human-readable text. JSON and
//! YAML serialize the actions directly so the output shape matches the
//! [`Action`] record: `{id, label, cmd}`.

use anyhow::{Context, Result};

use crate::actions::Action;
use crate::cli::commands::OutputFormatArg;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Human => OutputFormat::Human,
        }
    }
}

/// Formatter for a detected action list
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, actions: &[Action]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(actions),
            OutputFormat::Yaml => self.format_yaml(actions),
            OutputFormat::Human => Ok(self.format_human(actions)),
        }
    }

    fn format_json(&self, actions: &[Action]) -> Result<String> {
        serde_json::to_string_pretty(actions).context("Failed to serialize actions to JSON")
    }

    fn format_yaml(&self, actions: &[Action]) -> Result<String> {
        serde_yaml::to_string(actions).context("Failed to serialize actions to YAML")
    }

    fn format_human(&self, actions: &[Action]) -> String {
        if actions.is_empty() {
            return "No known marker files found. Nothing to suggest.\n".to_string();
        }

        let mut out = String::new();
        out.push_str("Suggested actions:\n");
        for action in actions {
            out.push_str(&format!("  [{}] {}\n      $ {}\n", action.id, action.label, action.cmd));
        }
        out
    }
}
