//! CLI argument definitions for Imprint.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "imprint",
    version,
    about = "Repository bootstrap automation for Git hooks",
    long_about = "Imprint automates repository bootstrap chores: prepending license headers \
                  to source files, maintaining copyright years in LICENSE.md and INTENT.md, \
                  seeding default files, and bumping the semantic-version Git tag."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the configuration file (discovered upwards from the target
    /// directory when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory to operate on (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Name substituted for the configuration's name placeholder
    #[arg(long, global = true, default_value = "John Doe")]
    pub name: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full hook flow: classify, apply license artifacts, bump the patch tag
    Run,

    /// Apply headers, LICENSE.md, and INTENT.md from one configuration section
    Apply {
        /// Configuration section to apply (e.g. personal, work)
        section: String,
    },

    /// Create the next semantic-version tag
    Bump {
        /// Version component to increment: major, minor, patch (prompted when omitted)
        kind: Option<String>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
