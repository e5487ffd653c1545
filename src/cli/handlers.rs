//! Command handlers
//!
//! Each handler maps a parsed subcommand to work and returns a process exit
//! code. Errors are logged and reported on stderr rather than panicking.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, error};

use crate::actions::Detector;
use crate::cli::commands::DetectArgs;
use crate::cli::output::OutputFormatter;

/// Runs detection and prints the result, returning the process exit code
pub fn handle_detect(args: &DetectArgs) -> i32 {
    match run_detect(args) {
        Ok(()) => 0,
        Err(err) => {
            error!("detect failed: {:#}", err);
            eprintln!("Error: {:#}", err);
            1
        }
    }
}

fn run_detect(args: &DetectArgs) -> Result<()> {
    let root = match &args.root {
        Some(path) => path.clone(),
        None => env::current_dir().context("Failed to determine current directory")?,
    };
    debug!(root = %root.display(), strict = args.strict, "running detection");

    let actions = Detector::new().strict(args.strict).detect(&root)?;

    let formatter = OutputFormatter::new(args.format.into());
    let output = formatter.format(&actions)?;

    write_output(&output, args.output.as_ref())
}

fn write_output(output: &str, destination: Option<&PathBuf>) -> Result<()> {
    match destination {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("Failed to write output to {}", path.display())),
        None => {
            print!("{}", output);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::OutputFormatArg;
    use std::fs::File;
    use tempfile::TempDir;

    fn detect_args(root: PathBuf) -> DetectArgs {
        DetectArgs {
            root: Some(root),
            format: OutputFormatArg::Json,
            strict: false,
            output: None,
        }
    }

    #[test]
    fn test_handle_detect_empty_dir_exits_zero() {
        let dir = TempDir::new().unwrap();
        assert_eq!(handle_detect(&detect_args(dir.path().to_path_buf())), 0);
    }

    #[test]
    fn test_handle_detect_writes_output_file() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("go.mod")).unwrap();
        let out_path = dir.path().join("result.json");

        let mut args = detect_args(dir.path().to_path_buf());
        args.output = Some(out_path.clone());

        assert_eq!(handle_detect(&args), 0);
        let contents = fs::read_to_string(out_path).unwrap();
        assert!(contents.contains("\"id\": \"go\""));
    }

    #[cfg(unix)]
    #[test]
    fn test_handle_detect_strict_probe_failure_exits_one() {
        let dir = TempDir::new().unwrap();
        let file_root = dir.path().join("plain-file");
        fs::write(&file_root, "").unwrap();

        let mut args = detect_args(file_root);
        args.strict = true;
        assert_eq!(handle_detect(&args), 1);
    }
}
