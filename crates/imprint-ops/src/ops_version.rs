//! Semantic-version tag bumping.
//!
//! The latest tag is read once at construction; bumping parses it as
//! `vMAJOR.MINOR.PATCH`, increments one component, zeroes the lower-order
//! ones, and creates the new tag. Every invalid input degrades to a logged
//! no-op that returns the prior tag.

use semver::Version;

use crate::git::GitClient;

/// Which version component to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl BumpKind {
    /// Accepted spellings, in prompt order.
    pub const NAMES: [&'static str; 3] = ["patch", "minor", "major"];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "major" => Some(Self::Major),
            "minor" => Some(Self::Minor),
            "patch" => Some(Self::Patch),
            _ => None,
        }
    }
}

/// Bumps the repository's version tag through a [`GitClient`].
pub struct TagBumper<G: GitClient> {
    git: G,
    latest_tag: String,
}

impl<G: GitClient> TagBumper<G> {
    /// Query the most recent tag.
    ///
    /// A failed query (no tags, git unavailable) degrades to an empty tag
    /// and a warning; construction never fails.
    pub fn new(git: G) -> Self {
        let latest_tag = match git.latest_tag() {
            Ok(tag) => tag,
            Err(e) => {
                tracing::warn!("Could not determine latest tag: {e}");
                String::new()
            }
        };
        Self { git, latest_tag }
    }

    /// The tag recorded at construction; empty when none was found.
    pub fn latest_tag(&self) -> &str {
        &self.latest_tag
    }

    /// Create the next version tag according to `kind`.
    ///
    /// An unknown kind or an unparseable latest tag logs an error and
    /// returns the unchanged tag without touching the repository. Only tag
    /// creation itself can fail.
    pub fn bump(&self, kind: &str) -> miette::Result<String> {
        let Some(kind) = BumpKind::parse(kind) else {
            tracing::error!("Invalid bump type; aborting version change");
            return Ok(self.latest_tag.clone());
        };

        let Some(version) = parse_tag(&self.latest_tag) else {
            tracing::error!("Invalid tag format or no tags found; aborting version change");
            return Ok(self.latest_tag.clone());
        };

        let next = match kind {
            BumpKind::Major => Version::new(version.major + 1, 0, 0),
            BumpKind::Minor => Version::new(version.major, version.minor + 1, 0),
            BumpKind::Patch => Version::new(version.major, version.minor, version.patch + 1),
        };

        let tag = format!("v{next}");
        self.git.create_tag(&tag)?;
        Ok(tag)
    }
}

/// Parse a `vMAJOR.MINOR.PATCH` tag.
///
/// Pre-release and build metadata are rejected: the bump rules only make
/// sense for plain numeric versions.
fn parse_tag(tag: &str) -> Option<Version> {
    let rest = tag.strip_prefix('v')?;
    let version = Version::parse(rest).ok()?;
    if !version.pre.is_empty() || !version.build.is_empty() {
        return None;
    }
    Some(version)
}
