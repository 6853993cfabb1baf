//! A printable snapshot of one computation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::calculator::GradeCalculator;
use crate::computation::{ComputationResult, CourseOutcome};
use crate::model::CourseEntry;
use crate::sheet::CourseSheet;

/// Text shown in place of grade points for a course that did not count.
pub const INVALID_COURSE_TEXT: &str = "Invalid";

/// The inputs and result of one CG computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CgReport {
    /// Heading for the report (sheet name, or a generic title).
    pub title: String,
    /// One line per course, in entry order.
    pub courses: Vec<CourseLine>,
    pub result: ComputationResult,
}

/// A course's inputs next to what it contributed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseLine {
    pub name: String,
    #[serde(flatten)]
    pub entry: CourseEntry,
    pub outcome: CourseOutcome,
}

impl CourseLine {
    /// Grade points with two decimals, or `Invalid` for a discarded course.
    pub fn grade_points_text(&self) -> String {
        match &self.outcome {
            CourseOutcome::Counted { grade_points, .. } => format!("{grade_points:.2}"),
            CourseOutcome::Discarded { .. } => INVALID_COURSE_TEXT.to_string(),
        }
    }
}

impl CgReport {
    /// Pair `entries` with `result`, naming courses from `names` where given
    /// and `Course N` otherwise.
    pub fn new(
        title: impl Into<String>,
        names: &[String],
        entries: &[CourseEntry],
        result: ComputationResult,
    ) -> Self {
        let courses = entries
            .iter()
            .zip(&result.outcomes)
            .enumerate()
            .map(|(i, (entry, outcome))| CourseLine {
                name: names
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| format!("Course {}", i + 1)),
                entry: entry.clone(),
                outcome: outcome.clone(),
            })
            .collect();

        Self {
            title: title.into(),
            courses,
            result,
        }
    }

    /// Snapshot a calculator's current entries and last result.
    ///
    /// Returns `None` if nothing has been computed since the last reset.
    pub fn from_calculator(title: impl Into<String>, calc: &GradeCalculator) -> Option<Self> {
        let result = calc.last_result()?.clone();
        Some(Self::new(title, &[], calc.entries(), result))
    }

    /// Compute a sheet and wrap the result.
    pub fn from_sheet(sheet: &CourseSheet) -> Self {
        let mut calc = sheet.to_calculator();
        let result = calc.compute().clone();
        Self::new(&sheet.name, &sheet.course_names(), calc.entries(), result)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize report")
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}\n\n", self.title));
        md.push_str("| # | Course | Credits | Grade | Grade Points |\n");
        md.push_str("|---|--------|---------|-------|--------------|\n");
        for (i, c) in self.courses.iter().enumerate() {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                i + 1,
                c.name,
                c.entry.credits,
                c.entry.grade,
                c.grade_points_text()
            ));
        }
        md.push('\n');

        md.push_str(&format!(
            "**CG:** {} ({})\n",
            self.result.cg, self.result.band
        ));
        if self.result.cg.is_valid() {
            md.push_str(&format!(
                "\n{} of {} courses counted, {} credits, {} grade points\n",
                self.result.counted(),
                self.courses.len(),
                self.result.total_credits,
                self.result.total_points
            ));
        }

        md
    }
}
