use serde::Deserialize;
use std::path::{Path, PathBuf};
use toml::Table;

use imprint_util::errors::ImprintError;

use crate::placeholder::PlaceholderContext;

/// Default name of the configuration file, discovered upwards from the
/// target directory when no explicit path is given.
pub const CONFIG_FILE: &str = "imprint.toml";

/// Fully placeholder-resolved configuration.
///
/// Loaded once at startup and immutable afterwards; sections are extracted
/// on demand as typed views.
#[derive(Debug, Clone)]
pub struct Config {
    table: Table,
}

/// One top-level section (`[personal]`, `[work]`) driving license handling.
///
/// Every key is optional; an absent key disables handling of the
/// corresponding artifact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Section {
    /// Header text prepended to matching source files.
    pub script: Option<String>,
    /// Content written to a freshly created LICENSE.md.
    pub license: Option<String>,
    /// Content written to a freshly created INTENT.md.
    pub intent: Option<String>,
    /// File-name globs selecting the source files that receive the header.
    pub sources: Vec<String>,
}

impl Default for Section {
    fn default() -> Self {
        Self {
            script: None,
            license: None,
            intent: None,
            sources: vec!["*.py".to_string()],
        }
    }
}

/// The `[defaults]` section: where default repository files are seeded from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DefaultsConfig {
    dir: Option<PathBuf>,
}

impl Config {
    /// Load `imprint.toml` from `path` and resolve every placeholder token.
    ///
    /// Fails when the file is missing or unparseable. After this returns, no
    /// string anywhere in the document contains a placeholder token.
    pub fn load(path: &Path, name: &str, year: i32) -> miette::Result<Self> {
        if !path.is_file() {
            return Err(ImprintError::Config {
                message: format!("Config file at {} not found", path.display()),
            }
            .into());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ImprintError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;

        let raw: Table = content.parse().map_err(|e| ImprintError::Config {
            message: format!("Failed to parse {}: {e}", path.display()),
        })?;

        let ctx = PlaceholderContext::new(name, year);
        let table = raw
            .into_iter()
            .map(|(key, value)| (key, ctx.resolve(value)))
            .collect();

        Ok(Self { table })
    }

    /// Typed view of a top-level section.
    ///
    /// A missing section yields the empty [`Section`]; a malformed one is
    /// logged and degrades to the same.
    pub fn section(&self, name: &str) -> Section {
        let Some(value) = self.table.get(name) else {
            return Section::default();
        };
        let parsed: Result<Section, _> = value.clone().try_into();
        match parsed {
            Ok(section) => section,
            Err(e) => {
                tracing::warn!("Ignoring malformed [{name}] section: {e}");
                Section::default()
            }
        }
    }

    /// Directory holding default repository files (`[defaults] dir = "…"`),
    /// if configured.
    pub fn defaults_dir(&self) -> Option<PathBuf> {
        let value = self.table.get("defaults")?;
        let parsed: Result<DefaultsConfig, _> = value.clone().try_into();
        match parsed {
            Ok(defaults) => defaults.dir,
            Err(e) => {
                tracing::warn!("Ignoring malformed [defaults] section: {e}");
                None
            }
        }
    }

    /// The resolved document as a raw TOML table.
    pub fn table(&self) -> &Table {
        &self.table
    }
}
