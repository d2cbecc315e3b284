use std::io;
use std::path::PathBuf;

use clap::{Command, Parser};
use clap_complete::{Shell, generate};

/// Generate shell completions for rbuild
#[derive(Parser, Debug)]
#[command(
    name = "rbuild-completions",
    about = "Generate shell completions for rbuild",
    author = "Zeke Mitchell <zeke.mitchell@gmail.com>",
    version
)]
struct CompletionArgs {
    /// Shell to generate completions for
    #[arg(long, value_enum)]
    shell: Shell,
}

/// Build the clap Command for rbuild
fn build_rbuild_cmd() -> Command {
    Command::new("rbuild")
        .about("Run the clean-and-rebuild sequence for the configured project")
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to the build configuration file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            clap::Arg::new("strict")
                .long("strict")
                .help("Abort the sequence at the first failed command")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("dry-run")
                .long("dry-run")
                .help("Print the command sequence without executing it")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Verbose mode")
                .action(clap::ArgAction::Count),
        )
}

fn main() {
    let args = CompletionArgs::parse();

    let mut cmd = build_rbuild_cmd();
    let bin_name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, &bin_name, &mut io::stdout());
}
