use crate::core::types::PackageManagerKind;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pompa",
    about = "Lockfile-aware package manager dispatcher",
    long_about = "Forwards project commands to npm, yarn, or pnpm, remapping command names where their vocabularies differ",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    /// Command to forward, e.g. "install -D typescript", "build", "dev"
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub command: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Package manager to use, skipping lockfile detection
    #[arg(long, value_name = "PM", global = true)]
    pub pm: Option<PackageManagerKind>,
}
