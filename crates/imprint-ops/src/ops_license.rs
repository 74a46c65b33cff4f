//! License headers, LICENSE/INTENT files, and copyright-year maintenance.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::{Captures, Regex};

use imprint_core::config::Section;
use imprint_util::errors::ImprintError;
use imprint_util::fs::rewrite;

/// File name of the license artifact inside the target directory.
pub const LICENSE_FILE: &str = "LICENSE.md";

/// File name of the intent artifact inside the target directory.
pub const INTENT_FILE: &str = "INTENT.md";

/// What one [`LicenseOps::apply`] run changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LicenseReport {
    /// Source files that received the header this run.
    pub headers_applied: usize,
    /// LICENSE.md was newly created.
    pub license_created: bool,
    /// INTENT.md was newly created.
    pub intent_created: bool,
}

/// Applies one configuration section's license artifacts to a directory.
pub struct LicenseOps {
    section: Section,
    current_year: i32,
}

impl LicenseOps {
    pub fn new(section: Section, current_year: i32) -> Self {
        Self {
            section,
            current_year,
        }
    }

    /// Rewrite `© YYYY` and `© YYYY-YYYY` notices so the range ends at
    /// `current_year`.
    ///
    /// A leading year at or past `current_year` is left alone, which makes
    /// the rewrite idempotent within a year and monotonic across years.
    pub fn update_copyright_year(text: &str, current_year: i32) -> String {
        let notice = Regex::new(r"© (\d{4})(?:-(\d{4}))?").expect("valid pattern");
        notice
            .replace_all(text, |caps: &Captures<'_>| {
                let start: i32 = caps[1].parse().unwrap_or(current_year);
                if start < current_year {
                    format!("© {start}-{current_year}")
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned()
    }

    /// Apply headers to matching source files, then ensure the LICENSE and
    /// INTENT artifacts exist with an up-to-date copyright year.
    pub fn apply(&self, target_dir: &Path) -> miette::Result<LicenseReport> {
        let mut report = LicenseReport {
            headers_applied: self.apply_headers(target_dir)?,
            ..Default::default()
        };

        report.license_created = self.ensure_artifact(
            &target_dir.join(LICENSE_FILE),
            self.section.license.as_deref(),
        )?;

        // INTENT.md is only handled when the section asks for it.
        if self.section.intent.is_some() {
            report.intent_created = self.ensure_artifact(
                &target_dir.join(INTENT_FILE),
                self.section.intent.as_deref(),
            )?;
        }

        Ok(report)
    }

    /// Prepend the header to every matching file that lacks it.
    ///
    /// Idempotent: files already containing the exact header text are left
    /// untouched. Returns the number of files changed.
    fn apply_headers(&self, target_dir: &Path) -> miette::Result<usize> {
        let Some(header) = self.section.script.as_deref() else {
            return Ok(0);
        };

        let matcher = source_matcher(&self.section.sources)?;
        let entries = std::fs::read_dir(target_dir).map_err(ImprintError::Io)?;

        let mut applied = 0;
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !matcher.is_match(name) {
                continue;
            }

            let content = std::fs::read_to_string(&path).map_err(ImprintError::Io)?;
            if content.contains(header) {
                continue;
            }
            std::fs::write(&path, format!("{header}\n{content}")).map_err(ImprintError::Io)?;
            applied += 1;
        }

        Ok(applied)
    }

    /// Update an existing artifact's copyright year, or create it from the
    /// configured text. Returns `true` when the file was newly created.
    fn ensure_artifact(&self, path: &Path, content: Option<&str>) -> miette::Result<bool> {
        if path.is_file() {
            rewrite(path, |text| {
                Self::update_copyright_year(&text, self.current_year)
            })
            .map_err(|e| ImprintError::License {
                message: format!("Failed to update {}: {e}", path.display()),
            })?;
            return Ok(false);
        }

        let Some(content) = content else {
            return Ok(false);
        };
        std::fs::write(path, content).map_err(|e| ImprintError::License {
            message: format!("Failed to create {}: {e}", path.display()),
        })?;
        Ok(true)
    }
}

/// Compile the section's source globs into one matcher.
fn source_matcher(patterns: &[String]) -> miette::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| ImprintError::License {
            message: format!("Invalid source pattern '{pattern}': {e}"),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| {
        ImprintError::License {
            message: format!("Could not compile source patterns: {e}"),
        }
        .into()
    })
}
