//! Core data model types for cgcalc.
//!
//! Course entries as the user edits them, the CG value, and the result band
//! with its colour cue.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text shown in place of a CG when no entry contributes credits.
pub const INVALID_CG_TEXT: &str = "Invalid Input";

/// One course's raw input.
///
/// Both fields hold text exactly as entered. Nothing is validated until the
/// CG is computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    /// Credit weight, semantically a positive real number.
    #[serde(default)]
    pub credits: String,
    /// Grade label, semantically one of the scale's labels.
    #[serde(default)]
    pub grade: String,
}

impl CourseEntry {
    pub fn new(credits: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            credits: credits.into(),
            grade: grade.into(),
        }
    }

    /// Returns `true` if neither field has been filled in.
    pub fn is_blank(&self) -> bool {
        self.credits.trim().is_empty() && self.grade.trim().is_empty()
    }
}

/// Which field of a course entry an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryField {
    Credits,
    Grade,
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryField::Credits => write!(f, "credits"),
            EntryField::Grade => write!(f, "grade"),
        }
    }
}

impl FromStr for EntryField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "credits" | "credit" => Ok(EntryField::Credits),
            "grade" => Ok(EntryField::Grade),
            other => Err(format!("unknown field: {other}")),
        }
    }
}

/// A computed cumulative grade, or the invalid sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cg {
    /// Credit-weighted average, already truncated to two decimals.
    Value(f64),
    /// No entry contributed positive credits.
    Invalid,
}

impl Cg {
    pub fn value(self) -> Option<f64> {
        match self {
            Cg::Value(v) => Some(v),
            Cg::Invalid => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Cg::Value(_))
    }
}

impl fmt::Display for Cg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cg::Value(v) => write!(f, "{v:.2}"),
            Cg::Invalid => f.write_str(INVALID_CG_TEXT),
        }
    }
}

/// Qualitative tier of a CG.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultBand {
    Excellent,
    Good,
    Average,
    BelowAverage,
    /// Nothing computed yet, or the last computation was invalid.
    #[default]
    Undetermined,
}

impl ResultBand {
    /// Classify a CG. Each threshold is inclusive at its lower bound.
    ///
    /// | CG          | Band         |
    /// |-------------|--------------|
    /// | >= 9        | Excellent    |
    /// | >= 7        | Good         |
    /// | >= 5        | Average      |
    /// | < 5         | BelowAverage |
    /// | invalid     | Undetermined |
    pub fn from_cg(cg: Cg) -> Self {
        match cg {
            Cg::Value(v) if v >= 9.0 => ResultBand::Excellent,
            Cg::Value(v) if v >= 7.0 => ResultBand::Good,
            Cg::Value(v) if v >= 5.0 => ResultBand::Average,
            Cg::Value(_) => ResultBand::BelowAverage,
            Cg::Invalid => ResultBand::Undetermined,
        }
    }

    /// Colour cue shown alongside a result in this band.
    pub fn color(self) -> BandColor {
        match self {
            ResultBand::Excellent => BandColor::Green,
            ResultBand::Good => BandColor::Yellow,
            ResultBand::Average => BandColor::Orange,
            ResultBand::BelowAverage => BandColor::Red,
            ResultBand::Undetermined => BandColor::Gray,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResultBand::Excellent => "Excellent",
            ResultBand::Good => "Good",
            ResultBand::Average => "Average",
            ResultBand::BelowAverage => "Below Average",
            ResultBand::Undetermined => "Undetermined",
        }
    }
}

impl fmt::Display for ResultBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Background colour associated with a result band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandColor {
    Green,
    Yellow,
    Orange,
    Red,
    Gray,
}

impl BandColor {
    /// CSS hex colour.
    pub fn css(self) -> &'static str {
        match self {
            BandColor::Green => "#22c55e",
            BandColor::Yellow => "#eab308",
            BandColor::Orange => "#f97316",
            BandColor::Red => "#ef4444",
            BandColor::Gray => "#f3f4f6",
        }
    }

    /// The same colour as an `(r, g, b)` triple for terminal output.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            BandColor::Green => (0x22, 0xc5, 0x5e),
            BandColor::Yellow => (0xea, 0xb3, 0x08),
            BandColor::Orange => (0xf9, 0x73, 0x16),
            BandColor::Red => (0xef, 0x44, 0x44),
            BandColor::Gray => (0xf3, 0xf4, 0xf6),
        }
    }
}
