//! Interactive prompts.
//!
//! The classification question is behind the [`Classify`] trait so the hook
//! flow can run in tests without a terminal.

use dialoguer::{Input, Select};

use imprint_util::errors::ImprintError;

use crate::ops_hook::ProjectKind;
use crate::ops_version::BumpKind;

/// Capability for deciding how a repository is classified.
pub trait Classify {
    fn classify(&self) -> miette::Result<ProjectKind>;
}

/// Terminal-backed classifier: asks for `p`/`w` and re-prompts until one of
/// the two (case-insensitive) arrives.
pub struct TerminalClassifier;

impl Classify for TerminalClassifier {
    fn classify(&self) -> miette::Result<ProjectKind> {
        loop {
            let answer: String = Input::new()
                .with_prompt("Is this (p)ersonally produced or for (w)ork? (p/w)")
                .interact_text()
                .map_err(|e| ImprintError::Generic {
                    message: format!("Prompt error: {e}"),
                })?;

            match answer.trim().to_lowercase().as_str() {
                "p" => return Ok(ProjectKind::Personal),
                "w" => return Ok(ProjectKind::Work),
                _ => eprintln!("Invalid input. Please enter 'p' or 'w'."),
            }
        }
    }
}

/// Ask which version component to bump.
pub fn select_bump_kind() -> miette::Result<&'static str> {
    let choice = Select::new()
        .with_prompt("Which version component should be bumped?")
        .items(&BumpKind::NAMES)
        .default(0)
        .interact()
        .map_err(|e| ImprintError::Generic {
            message: format!("Prompt error: {e}"),
        })?;
    Ok(BumpKind::NAMES[choice])
}
