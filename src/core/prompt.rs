//! Confirmation for destructive operations.

use crate::error::Result;

/// Asks the operator a yes/no question.
pub trait Confirm {
    /// `true` only for an affirmative answer.
    fn confirm(&self, question: &str) -> Result<bool>;
}

/// Answers yes without asking (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _question: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Whether a typed answer counts as yes.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
