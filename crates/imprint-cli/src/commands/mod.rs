//! Command dispatch and handler modules.

mod apply;
mod bump;
mod run;

use std::path::{Path, PathBuf};

use chrono::Datelike;
use miette::Result;

use imprint_core::config::{Config, CONFIG_FILE};
use imprint_util::errors::ImprintError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::Run => run::exec(&cli),
        Command::Apply { section } => apply::exec(&cli, section),
        Command::Bump { kind } => bump::exec(&cli, kind.as_deref()),
    }
}

/// The directory the command operates on.
fn target_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.dir {
        Some(dir) => Ok(dir.clone()),
        None => {
            let cwd = std::env::current_dir().map_err(ImprintError::Io)?;
            Ok(cwd)
        }
    }
}

/// Load the configuration: an explicit `--config` path, or `imprint.toml`
/// discovered upwards from the target directory.
fn load_config(cli: &Cli, target_dir: &Path, year: i32) -> Result<Config> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => imprint_util::fs::locate_upwards(target_dir, CONFIG_FILE)
            .unwrap_or_else(|| target_dir.join(CONFIG_FILE)),
    };
    Config::load(&path, &cli.name, year)
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}
