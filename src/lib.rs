//! buildhint - build/test command suggestions from project marker files
//!
//! This library inspects a project directory for marker files and proposes
//! the build/test commands that fit the detected toolchain. Detection is a
//! fixed, ordered sequence of existence checks: `go.mod` first, then
//! `package.json`. Every matching marker contributes one action; the result
//! preserves check order.
//!
//! The detector only reads filesystem metadata. It never runs the suggested
//! commands, never reads manifest contents, and never fails just because a
//! marker (or the whole root) is missing.
//!
//! # Example
//!
//! ```no_run
//! use buildhint::detect_actions;
//! use std::path::Path;
//!
//! let actions = detect_actions(Path::new("/path/to/project"))?;
//! for action in &actions {
//!     println!("{}: {}", action.label, action.cmd);
//! }
//! # Ok::<(), buildhint::DetectError>(())
//! ```
//!
//! # Project Structure
//!
//! - [`actions`]: the [`Action`] record, marker rule table, and [`Detector`]
//! - [`cli`]: argument parsing, handlers, and output formatting
//! - [`util`]: logging setup

pub mod actions;
pub mod cli;
pub mod util;

pub use actions::{detect_actions, Action, DetectError, Detector, MarkerRule};
pub use cli::{OutputFormat, OutputFormatter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
