//! Git delegation.
//!
//! Tag listing and creation go through the external `git` binary; nothing in
//! this crate reimplements Git semantics. The [`GitClient`] trait is the seam
//! that lets tests substitute an in-memory fake.

use std::path::{Path, PathBuf};
use std::process::Command;

use imprint_util::errors::ImprintError;

/// Capability over the version-control collaborator.
pub trait GitClient {
    /// The most recent tag reachable from HEAD.
    fn latest_tag(&self) -> miette::Result<String>;

    /// Create a lightweight tag with the given literal name.
    fn create_tag(&self, name: &str) -> miette::Result<()>;
}

impl<T: GitClient + ?Sized> GitClient for &T {
    fn latest_tag(&self) -> miette::Result<String> {
        (**self).latest_tag()
    }

    fn create_tag(&self, name: &str) -> miette::Result<()> {
        (**self).create_tag(name)
    }
}

/// [`GitClient`] backed by the `git` binary, run inside a repository.
pub struct CliGit {
    repo_dir: PathBuf,
}

impl CliGit {
    pub fn new(repo_dir: &Path) -> Self {
        Self {
            repo_dir: repo_dir.to_path_buf(),
        }
    }

    fn run(&self, args: &[&str]) -> miette::Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .output()
            .map_err(|e| ImprintError::Git {
                message: format!("Failed to run git: {e}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ImprintError::Git {
                message: format!("git {} failed: {}", args.join(" "), stderr.trim()),
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitClient for CliGit {
    fn latest_tag(&self) -> miette::Result<String> {
        self.run(&["describe", "--tags", "--abbrev=0"])
    }

    fn create_tag(&self, name: &str) -> miette::Result<()> {
        self.run(&["tag", name]).map(|_| ())
    }
}
