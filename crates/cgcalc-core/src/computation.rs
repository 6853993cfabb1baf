//! Credit-weighted CG computation.
//!
//! CG = floor(total_points / total_credits * 100) / 100
//!
//! An entry counts only when its grade is on the scale AND its credits parse
//! to a positive number. Anything else is discarded whole, with no partial
//! credit for the half that was valid.

use serde::{Deserialize, Serialize};

use crate::error::EntryIssue;
use crate::model::{Cg, CourseEntry, ResultBand};
use crate::scale::{GradeLabel, GradeScale};

/// How one entry fared in a computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CourseOutcome {
    /// The entry was included in the totals.
    Counted {
        grade: GradeLabel,
        credits: f64,
        grade_points: f64,
    },
    /// The entry contributed nothing.
    Discarded { issue: EntryIssue },
}

impl CourseOutcome {
    /// Grade-point contribution, 0 for a discarded entry.
    pub fn grade_points(&self) -> f64 {
        match self {
            CourseOutcome::Counted { grade_points, .. } => *grade_points,
            CourseOutcome::Discarded { .. } => 0.0,
        }
    }

    pub fn is_counted(&self) -> bool {
        matches!(self, CourseOutcome::Counted { .. })
    }

    pub fn issue(&self) -> Option<&EntryIssue> {
        match self {
            CourseOutcome::Counted { .. } => None,
            CourseOutcome::Discarded { issue } => Some(issue),
        }
    }
}

/// Everything derived from one pass over the entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputationResult {
    /// Sum of credits over counted entries.
    pub total_credits: f64,
    /// Sum of grade value x credits over counted entries.
    pub total_points: f64,
    /// The truncated CG, or the invalid sentinel.
    pub cg: Cg,
    /// One value per course (0 for discarded entries). Empty when `cg` is
    /// invalid.
    pub per_course_grade_points: Vec<f64>,
    /// One outcome per course, always the same length as the entry list.
    pub outcomes: Vec<CourseOutcome>,
    /// Band derived from `cg`.
    pub band: ResultBand,
}

impl ComputationResult {
    /// Number of entries that made it into the totals.
    pub fn counted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_counted()).count()
    }
}

/// Parse a raw credits field.
///
/// Surrounding whitespace is ignored. Non-finite values (`inf`, `NaN`) are
/// rejected along with anything that does not parse as a real number.
pub fn parse_credits(raw: &str) -> Result<f64, EntryIssue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EntryIssue::MissingCredits);
    }
    let value: f64 = trimmed
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| EntryIssue::UnparsableCredits {
            raw: trimmed.to_string(),
        })?;
    if value <= 0.0 {
        return Err(EntryIssue::NonPositiveCredits { value });
    }
    Ok(value)
}

/// Decide whether one entry counts, and what it contributes.
///
/// The grade is checked before the credits, so an entry with both fields bad
/// reports the grade problem.
pub fn assess_entry(entry: &CourseEntry, scale: &GradeScale) -> CourseOutcome {
    let grade = match scale.lookup(&entry.grade) {
        Some(grade) => grade,
        None => {
            let issue = if entry.grade.trim().is_empty() {
                EntryIssue::MissingGrade
            } else {
                EntryIssue::UnknownGrade {
                    label: entry.grade.clone(),
                }
            };
            return CourseOutcome::Discarded { issue };
        }
    };

    match parse_credits(&entry.credits) {
        Ok(credits) => CourseOutcome::Counted {
            grade,
            credits,
            grade_points: f64::from(grade.points()) * credits,
        },
        Err(issue) => CourseOutcome::Discarded { issue },
    }
}

/// Truncate (not round) to two decimal places.
pub fn truncate_to_hundredths(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}

/// Compute totals, CG, per-course grade points, and band for `entries`.
pub fn evaluate(entries: &[CourseEntry], scale: &GradeScale) -> ComputationResult {
    let mut total_credits = 0.0f64;
    let mut total_points = 0.0f64;

    let outcomes: Vec<CourseOutcome> = entries
        .iter()
        .map(|entry| {
            let outcome = assess_entry(entry, scale);
            if let CourseOutcome::Counted {
                credits,
                grade_points,
                ..
            } = &outcome
            {
                total_credits += credits;
                total_points += grade_points;
            }
            outcome
        })
        .collect();

    let (cg, per_course_grade_points) = if total_credits > 0.0 {
        let cg = truncate_to_hundredths(total_points / total_credits);
        let points = outcomes.iter().map(CourseOutcome::grade_points).collect();
        (Cg::Value(cg), points)
    } else {
        (Cg::Invalid, Vec::new())
    };

    ComputationResult {
        total_credits,
        total_points,
        cg,
        per_course_grade_points,
        band: ResultBand::from_cg(cg),
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> Vec<CourseEntry> {
        pairs
            .iter()
            .map(|(c, g)| CourseEntry::new(*c, *g))
            .collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn whole_number_cg() {
        let result = evaluate(&entries(&[("5", "AA"), ("5", "BB")]), &GradeScale);
        assert!(approx(result.total_points, 90.0));
        assert!(approx(result.total_credits, 10.0));
        assert_eq!(result.cg, Cg::Value(9.0));
        assert_eq!(result.cg.to_string(), "9.00");
        assert_eq!(result.band, ResultBand::Excellent);
        assert_eq!(result.per_course_grade_points, vec![50.0, 40.0]);
    }

    #[test]
    fn fractional_cg_is_truncated() {
        let result = evaluate(&entries(&[("3", "BC"), ("4", "CD")]), &GradeScale);
        assert!(approx(result.total_points, 41.0));
        assert!(approx(result.total_credits, 7.0));
        assert_eq!(result.cg.to_string(), "5.85");
        assert_eq!(result.band, ResultBand::Average);
        assert_eq!(result.per_course_grade_points, vec![21.0, 20.0]);
    }

    #[test]
    fn grade_labels_must_match_exactly() {
        let result = evaluate(&entries(&[("4", "ab"), ("4", " BB ")]), &GradeScale);
        assert_eq!(result.cg, Cg::Invalid);
        assert_eq!(result.band, ResultBand::Undetermined);
        assert!(result.per_course_grade_points.is_empty());
        assert_eq!(
            result.outcomes[0].issue(),
            Some(&EntryIssue::UnknownGrade {
                label: "ab".to_string()
            })
        );
        assert_eq!(
            result.outcomes[1].issue(),
            Some(&EntryIssue::UnknownGrade {
                label: " BB ".to_string()
            })
        );
    }

    #[test]
    fn truncation_never_rounds_up() {
        // 6999 / 1000 = 6.999
        let result = evaluate(&entries(&[("1", "CC"), ("999", "BC")]), &GradeScale);
        assert_eq!(result.cg.to_string(), "6.99");
        assert_eq!(result.band, ResultBand::Average);
        assert!(approx(truncate_to_hundredths(6.999), 6.99));
        assert!(approx(truncate_to_hundredths(5.857142857), 5.85));
    }

    #[test]
    fn invalid_entries_contribute_zero() {
        let result = evaluate(
            &entries(&[("4", "AA"), ("abc", "AB"), ("3", "ZZ"), ("-1", "BB"), ("0", "CC")]),
            &GradeScale,
        );
        assert_eq!(result.cg, Cg::Value(10.0));
        assert!(approx(result.total_credits, 4.0));
        assert_eq!(result.per_course_grade_points, vec![40.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(result.counted(), 1);
        assert_eq!(
            result.outcomes[1].issue(),
            Some(&EntryIssue::UnparsableCredits { raw: "abc".into() })
        );
        assert_eq!(
            result.outcomes[2].issue(),
            Some(&EntryIssue::UnknownGrade { label: "ZZ".into() })
        );
        assert_eq!(
            result.outcomes[3].issue(),
            Some(&EntryIssue::NonPositiveCredits { value: -1.0 })
        );
    }

    #[test]
    fn all_invalid_clears_grade_points() {
        let result = evaluate(&entries(&[("", ""), ("3", ""), ("", "AA")]), &GradeScale);
        assert_eq!(result.cg, Cg::Invalid);
        assert_eq!(result.cg.to_string(), "Invalid Input");
        assert!(result.per_course_grade_points.is_empty());
        assert_eq!(result.outcomes.len(), 3);
        assert_eq!(result.band, ResultBand::Undetermined);
    }

    #[test]
    fn no_entries_is_invalid() {
        let result = evaluate(&[], &GradeScale);
        assert_eq!(result.cg, Cg::Invalid);
        assert!(result.per_course_grade_points.is_empty());
        assert!(result.outcomes.is_empty());
    }

    #[test]
    fn failing_grade_still_counts_credits() {
        let result = evaluate(&entries(&[("4", "AA"), ("4", "FF")]), &GradeScale);
        assert!(approx(result.total_credits, 8.0));
        assert_eq!(result.cg, Cg::Value(5.0));
        assert!(result.outcomes[1].is_counted());
        assert_eq!(result.per_course_grade_points, vec![40.0, 0.0]);
    }

    #[test]
    fn fractional_credits_are_accepted() {
        let result = evaluate(&entries(&[("1.5", "AB"), (" 2.5 ", "BB")]), &GradeScale);
        assert!(approx(result.total_credits, 4.0));
        assert!(approx(result.total_points, 33.5));
        assert_eq!(result.cg.to_string(), "8.37");
        assert_eq!(result.band, ResultBand::Good);
    }

    #[test]
    fn parse_credits_rejects_bad_input() {
        assert_eq!(parse_credits(""), Err(EntryIssue::MissingCredits));
        assert_eq!(parse_credits("  "), Err(EntryIssue::MissingCredits));
        assert!(matches!(
            parse_credits("inf"),
            Err(EntryIssue::UnparsableCredits { .. })
        ));
        assert!(matches!(
            parse_credits("NaN"),
            Err(EntryIssue::UnparsableCredits { .. })
        ));
        assert!(matches!(
            parse_credits("0"),
            Err(EntryIssue::NonPositiveCredits { .. })
        ));
        assert_eq!(parse_credits("3"), Ok(3.0));
        assert_eq!(parse_credits("0.5"), Ok(0.5));
    }

    #[test]
    fn grade_issue_reported_before_credit_issue() {
        let outcome = assess_entry(&CourseEntry::new("x", ""), &GradeScale);
        assert_eq!(outcome.issue(), Some(&EntryIssue::MissingGrade));
    }
}
