//! The fixed letter-grade scale.
//!
//! | Grade | Points |
//! |-------|--------|
//! | AA    | 10     |
//! | AB    | 9      |
//! | BB    | 8      |
//! | BC    | 7      |
//! | CC    | 6      |
//! | CD    | 5      |
//! | DD    | 4      |
//! | FF    | 0      |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A grade label on the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeLabel {
    AA,
    AB,
    BB,
    BC,
    CC,
    CD,
    DD,
    FF,
}

impl GradeLabel {
    /// Every label, highest first.
    pub const ALL: [GradeLabel; 8] = [
        GradeLabel::AA,
        GradeLabel::AB,
        GradeLabel::BB,
        GradeLabel::BC,
        GradeLabel::CC,
        GradeLabel::CD,
        GradeLabel::DD,
        GradeLabel::FF,
    ];

    /// Point value of this grade.
    pub fn points(self) -> u8 {
        match self {
            GradeLabel::AA => 10,
            GradeLabel::AB => 9,
            GradeLabel::BB => 8,
            GradeLabel::BC => 7,
            GradeLabel::CC => 6,
            GradeLabel::CD => 5,
            GradeLabel::DD => 4,
            GradeLabel::FF => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GradeLabel::AA => "AA",
            GradeLabel::AB => "AB",
            GradeLabel::BB => "BB",
            GradeLabel::BC => "BC",
            GradeLabel::CC => "CC",
            GradeLabel::CD => "CD",
            GradeLabel::DD => "DD",
            GradeLabel::FF => "FF",
        }
    }
}

impl fmt::Display for GradeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradeLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradeLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| format!("unknown grade: {s}"))
    }
}

/// Lookup table from raw grade text to point values.
///
/// The scale is fixed for the lifetime of the process; there is no way to
/// construct a different one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeScale;

impl GradeScale {
    /// Resolve raw text (as typed or selected by a user) to a grade label.
    ///
    /// Matching is exact: `"ab"` or `" AB"` is not a grade. Empty or
    /// unrecognized text yields `None`.
    pub fn lookup(&self, raw: &str) -> Option<GradeLabel> {
        raw.parse().ok()
    }

    /// Point value for raw grade text, if it names a grade on the scale.
    pub fn value_of(&self, raw: &str) -> Option<u8> {
        self.lookup(raw).map(GradeLabel::points)
    }

    /// All `(label, points)` pairs, highest first.
    pub fn entries(&self) -> impl Iterator<Item = (GradeLabel, u8)> {
        GradeLabel::ALL.into_iter().map(|l| (l, l.points()))
    }
}
