use buildhint::cli::commands::{CliArgs, Commands};
use buildhint::cli::handlers::handle_detect;
use buildhint::util::logging::{init_logging, parse_level, LoggingOptions};
use buildhint::VERSION;

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    init_logging(LoggingOptions {
        verbose: args.verbose,
        quiet: args.quiet,
        level: args.log_level.as_deref().map(parse_level),
    });

    debug!("buildhint v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Detect(detect_args) => handle_detect(detect_args),
    };

    std::process::exit(exit_code);
}
