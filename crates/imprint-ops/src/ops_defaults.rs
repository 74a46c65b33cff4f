//! Seeding default repository files (e.g. a stock `.gitignore`).

use std::path::Path;

use imprint_util::errors::ImprintError;

/// Copy every regular file from `defaults_dir` into `target_dir`, skipping
/// names that already exist there. Existing files are never overwritten.
///
/// A missing defaults directory is a no-op. Returns the number of files
/// copied.
pub fn seed_defaults(defaults_dir: &Path, target_dir: &Path) -> miette::Result<usize> {
    if !defaults_dir.is_dir() {
        tracing::debug!("No defaults directory at {}", defaults_dir.display());
        return Ok(0);
    }

    let entries = std::fs::read_dir(defaults_dir).map_err(ImprintError::Io)?;

    let mut copied = 0;
    for entry in entries.filter_map(|e| e.ok()) {
        let source = entry.path();
        if !source.is_file() {
            continue;
        }
        let Some(name) = source.file_name() else {
            continue;
        };
        let dest = target_dir.join(name);
        if dest.exists() {
            continue;
        }
        std::fs::copy(&source, &dest).map_err(ImprintError::Io)?;
        copied += 1;
    }

    Ok(copied)
}
