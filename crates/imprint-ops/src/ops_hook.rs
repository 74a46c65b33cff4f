//! The end-to-end hook flow.
//!
//! One run classifies the repository, checks which license artifacts are
//! missing, applies the matching configuration section, seeds default files,
//! and finishes with a patch bump of the version tag. When nothing is
//! missing the whole run is a no-op.

use std::path::{Path, PathBuf};

use imprint_core::config::Config;

use crate::git::GitClient;
use crate::ops_defaults;
use crate::ops_license::{LicenseOps, LicenseReport, INTENT_FILE, LICENSE_FILE};
use crate::ops_version::TagBumper;
use crate::prompt::Classify;

/// How a repository is classified, selecting the configuration section that
/// drives license handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Personal,
    Work,
}

impl ProjectKind {
    /// Name of the configuration section for this kind.
    pub fn section_name(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Work => "work",
        }
    }
}

/// Result of one hook run.
#[derive(Debug)]
pub enum HookOutcome {
    /// Required artifacts were already present; nothing was touched.
    UpToDate,
    /// License artifacts were applied. `tag` carries the newly created
    /// version tag, or `None` when the latest tag could not be bumped.
    Processed {
        report: LicenseReport,
        defaults_seeded: usize,
        tag: Option<String>,
    },
}

/// Wires the configuration, target directory, and injected capabilities
/// into one hook run.
pub struct HookRunner<'a, C, G> {
    config: &'a Config,
    target_dir: PathBuf,
    classifier: C,
    git: G,
    current_year: i32,
}

impl<'a, C: Classify, G: GitClient> HookRunner<'a, C, G> {
    pub fn new(
        config: &'a Config,
        target_dir: &Path,
        classifier: C,
        git: G,
        current_year: i32,
    ) -> Self {
        Self {
            config,
            target_dir: target_dir.to_path_buf(),
            classifier,
            git,
            current_year,
        }
    }

    /// Execute one end-to-end run.
    pub fn run(&self) -> miette::Result<HookOutcome> {
        let kind = self.classifier.classify()?;

        if !self.artifacts_missing(kind) {
            tracing::debug!("License artifacts present; nothing to do");
            return Ok(HookOutcome::UpToDate);
        }

        let section = self.config.section(kind.section_name());
        let ops = LicenseOps::new(section, self.current_year);
        let report = ops.apply(&self.target_dir)?;

        let defaults_seeded = match self.config.defaults_dir() {
            Some(dir) => ops_defaults::seed_defaults(&dir, &self.target_dir)?,
            None => 0,
        };

        let bumper = TagBumper::new(&self.git);
        let before = bumper.latest_tag().to_string();
        let after = bumper.bump("patch")?;
        let tag = (after != before).then_some(after);

        Ok(HookOutcome::Processed {
            report,
            defaults_seeded,
            tag,
        })
    }

    /// Work requires both LICENSE.md and INTENT.md; personal only LICENSE.md.
    /// Either missing file triggers processing.
    fn artifacts_missing(&self, kind: ProjectKind) -> bool {
        let license = self.target_dir.join(LICENSE_FILE);
        let intent = self.target_dir.join(INTENT_FILE);
        match kind {
            ProjectKind::Work => !(license.is_file() && intent.is_file()),
            ProjectKind::Personal => !license.is_file(),
        }
    }
}
