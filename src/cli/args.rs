//! CLI argument definitions using clap

use clap::Parser;

/// Contact-tracing hierarchy demo: builds the reference outbreak tree and
/// shows per-case statistics before and after a cascading removal.
#[derive(Parser, Debug)]
#[command(name = "tracetree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count)]
    pub debug: u8,
}
