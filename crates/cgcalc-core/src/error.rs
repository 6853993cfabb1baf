//! Reasons a course entry is left out of the CG.
//!
//! A computation never fails on bad input. These values record why an entry
//! contributed nothing so validation and per-course output can say so.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a single course entry was discarded from the totals.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryIssue {
    /// The grade field is empty.
    #[error("no grade selected")]
    MissingGrade,

    /// The grade field holds text that is not on the grade scale.
    #[error("unknown grade '{label}'")]
    UnknownGrade { label: String },

    /// The credits field is empty.
    #[error("no credits entered")]
    MissingCredits,

    /// The credits field is not a finite number.
    #[error("credits '{raw}' is not a number")]
    UnparsableCredits { raw: String },

    /// The credits parsed but are zero or negative.
    #[error("credits must be positive, got {value}")]
    NonPositiveCredits { value: f64 },
}

impl EntryIssue {
    /// Returns `true` if the issue is with the grade rather than the credits.
    pub fn is_grade_issue(&self) -> bool {
        matches!(
            self,
            EntryIssue::MissingGrade | EntryIssue::UnknownGrade { .. }
        )
    }
}
