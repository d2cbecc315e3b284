use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use rbuild::{
    config::BuildConfig,
    diagnostics::print_missing_tool_error,
    error::Error,
    sequence::rebuild_sequence,
    utils::find_program,
};
use simple_logger::SimpleLogger;

/// Build driver arguments
#[derive(Parser, Debug)]
#[command(
    name = "rbuild",
    about = "Run the clean-and-rebuild sequence for the configured project",
    author = "Zeke Mitchell <zeke.mitchell@gmail.com>",
    version
)]
struct BuildArgs {
    /// Path to the build configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Abort the sequence at the first failed command
    #[arg(long)]
    strict: bool,

    /// Print the command sequence without executing it
    #[arg(long)]
    dry_run: bool,

    /// Verbose mode
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

pub fn main() -> Result<(), Error> {
    let args = BuildArgs::parse();

    // Set log level
    let log_level = LevelFilter::iter()
        .nth(2 + args.verbose as usize)
        .unwrap_or(LevelFilter::max());
    SimpleLogger::new()
        .with_level(log_level)
        .init()
        .map_err(|err| Error::LoggerError(err.to_string()))?;

    let config = match &args.config {
        Some(config_filepath) => BuildConfig::load_path(config_filepath)?,
        None => BuildConfig::load()?,
    };
    log::debug!("Configuration: {:?}", config);

    // Pre-flight: resolve the compiler before the cleanup step can delete
    // the previous artifact
    let compiler_filepath = find_program(config.compiler()).inspect_err(|_| {
        print_missing_tool_error(config.compiler(), None);
    })?;
    log::debug!("Compiler: {:?}", compiler_filepath);

    let spec = config.to_spec()?;
    let mut sequence = rebuild_sequence(&spec)?.strict(args.strict);

    if args.dry_run {
        for line in sequence.render() {
            println!("{}", line);
        }
        return Ok(());
    }

    if let Some(code) = sequence.run()? {
        std::process::exit(code);
    }

    Ok(())
}
