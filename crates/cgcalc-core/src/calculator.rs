//! The stateful calculator a front end drives.
//!
//! A front end owns one `GradeCalculator`, forwards user actions to
//! [`GradeCalculator::set_course_count`], [`GradeCalculator::update_entry`]
//! and [`GradeCalculator::compute`], and reads [`GradeCalculator::cg`] and
//! [`GradeCalculator::band`] afterwards to decide what to show.

use crate::computation::{evaluate, ComputationResult};
use crate::model::{Cg, CourseEntry, EntryField, ResultBand};
use crate::scale::GradeScale;

/// Course entries plus the result of the most recent computation.
#[derive(Debug, Clone, Default)]
pub struct GradeCalculator {
    scale: GradeScale,
    entries: Vec<CourseEntry>,
    grade_points: Vec<f64>,
    last: Option<ComputationResult>,
}

/// Coerce raw course-count text to a count.
///
/// Only the leading integer is read, so `"3.5"` and `"3x"` both give 3.
/// Text without a leading integer, a count that is not positive, or one too
/// large for `usize` gives 0.
pub fn parse_course_count(raw: &str) -> usize {
    let text = raw.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if negative || digits_end == 0 {
        return 0;
    }
    // overflow counts as unparsable
    unsigned[..digits_end].parse().unwrap_or(0)
}

impl GradeCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a calculator pre-filled with `entries`, as if the count had been
    /// set and every field edited in turn.
    pub fn with_entries(entries: Vec<CourseEntry>) -> Self {
        let mut calc = Self::new();
        calc.set_course_count(entries.len());
        calc.entries = entries;
        calc
    }

    /// Replace all entries with `n` blank ones.
    ///
    /// Previous entries are discarded even if they held valid data. Grade
    /// points reset to `n` zeros and the band returns to `Undetermined`.
    pub fn set_course_count(&mut self, n: usize) {
        self.entries = vec![CourseEntry::default(); n];
        self.grade_points = vec![0.0; n];
        self.last = None;
        tracing::debug!(courses = n, "course list reset");
    }

    /// Like [`set_course_count`](Self::set_course_count), taking the count as
    /// raw text. Returns the count actually applied.
    pub fn set_course_count_raw(&mut self, raw: &str) -> usize {
        let n = parse_course_count(raw);
        self.set_course_count(n);
        n
    }

    /// Overwrite one field of one entry. No validation happens here.
    ///
    /// An out-of-range `index` leaves everything untouched and returns
    /// `false`.
    pub fn update_entry(&mut self, index: usize, field: EntryField, value: impl Into<String>) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            tracing::warn!(
                index,
                courses = self.entries.len(),
                "ignoring edit to nonexistent course"
            );
            return false;
        };
        let value = value.into();
        match field {
            EntryField::Credits => entry.credits = value,
            EntryField::Grade => entry.grade = value,
        }
        true
    }

    /// Compute CG, per-course grade points, and band from the current entries.
    pub fn compute(&mut self) -> &ComputationResult {
        let result = evaluate(&self.entries, &self.scale);
        tracing::debug!(
            courses = self.entries.len(),
            counted = result.counted(),
            total_credits = result.total_credits,
            total_points = result.total_points,
            cg = %result.cg,
            band = %result.band,
            "computed CG"
        );
        self.grade_points = result.per_course_grade_points.clone();
        &*self.last.insert(result)
    }

    pub fn scale(&self) -> &GradeScale {
        &self.scale
    }

    pub fn entries(&self) -> &[CourseEntry] {
        &self.entries
    }

    pub fn course_count(&self) -> usize {
        self.entries.len()
    }

    /// Per-course grade points: zeros after a reset, the computed values after
    /// a valid computation, empty after an invalid one.
    pub fn grade_points(&self) -> &[f64] {
        &self.grade_points
    }

    /// The last computed CG, or `None` if nothing has been computed since the
    /// last reset.
    pub fn cg(&self) -> Option<Cg> {
        self.last.as_ref().map(|r| r.cg)
    }

    pub fn band(&self) -> ResultBand {
        self.last.as_ref().map(|r| r.band).unwrap_or_default()
    }

    pub fn last_result(&self) -> Option<&ComputationResult> {
        self.last.as_ref()
    }
}
