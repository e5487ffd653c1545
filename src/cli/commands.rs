use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Suggests build/test commands from project marker files
#[derive(Parser, Debug)]
#[command(
    name = "buildhint",
    about = "Suggests build/test commands from project marker files",
    version,
    author,
    long_about = "buildhint inspects a project directory for marker files (go.mod, \
                  package.json) and prints the build/test commands that fit what it \
                  finds. It never runs the commands itself."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug output")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect suggested actions in a project directory",
        long_about = "Checks the directory for known marker files and prints one \
                      suggested action per match, in priority order.\n\n\
                      Examples:\n  \
                      buildhint detect\n  \
                      buildhint detect /path/to/project\n  \
                      buildhint detect --format json"
    )]
    Detect(DetectArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to project root (defaults to current directory)"
    )]
    pub root: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        long,
        help = "Fail on marker probes that error for reasons other than 'not found'"
    )]
    pub strict: bool,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Human,
    Json,
    Yaml,
}
