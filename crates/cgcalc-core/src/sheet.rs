//! TOML course sheet parser.
//!
//! Loads course sheets from TOML files and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::calculator::GradeCalculator;
use crate::computation::assess_entry;
use crate::model::{CourseEntry, EntryField};
use crate::scale::GradeScale;

/// A named list of courses to compute a CG over.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSheet {
    pub name: String,
    pub description: String,
    pub courses: Vec<SheetCourse>,
}

/// One course row on a sheet. Credits and grade stay as raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetCourse {
    pub name: String,
    pub entry: CourseEntry,
}

impl CourseSheet {
    /// Load the sheet into a fresh calculator, one edit per field.
    pub fn to_calculator(&self) -> GradeCalculator {
        let mut calc = GradeCalculator::new();
        calc.set_course_count(self.courses.len());
        for (i, course) in self.courses.iter().enumerate() {
            calc.update_entry(i, EntryField::Credits, course.entry.credits.as_str());
            calc.update_entry(i, EntryField::Grade, course.entry.grade.as_str());
        }
        calc
    }

    pub fn course_names(&self) -> Vec<String> {
        self.courses.iter().map(|c| c.name.clone()).collect()
    }
}

/// Intermediate TOML structure for parsing sheet files.
#[derive(Debug, Deserialize)]
struct TomlSheetFile {
    sheet: TomlSheetHeader,
    #[serde(default)]
    courses: Vec<TomlCourse>,
}

#[derive(Debug, Deserialize)]
struct TomlSheetHeader {
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlCourse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    credits: Option<TomlScalar>,
    #[serde(default)]
    grade: Option<TomlScalar>,
}

/// Sheets may write `credits = 4`, `credits = 3.5` or `credits = "4"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TomlScalar {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl TomlScalar {
    fn into_raw(self) -> String {
        match self {
            TomlScalar::Integer(i) => i.to_string(),
            TomlScalar::Float(f) => f.to_string(),
            TomlScalar::Text(s) => s,
        }
    }
}

/// Parse a single TOML file into a `CourseSheet`.
pub fn parse_sheet(path: &Path) -> Result<CourseSheet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read course sheet: {}", path.display()))?;

    parse_sheet_str(&content, path)
}

/// Parse a TOML string into a `CourseSheet` (useful for testing).
pub fn parse_sheet_str(content: &str, source_path: &Path) -> Result<CourseSheet> {
    let parsed: TomlSheetFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let courses = parsed
        .courses
        .into_iter()
        .enumerate()
        .map(|(i, c)| SheetCourse {
            name: c.name.unwrap_or_else(|| format!("Course {}", i + 1)),
            entry: CourseEntry {
                credits: c.credits.map(TomlScalar::into_raw).unwrap_or_default(),
                grade: c.grade.map(TomlScalar::into_raw).unwrap_or_default(),
            },
        })
        .collect();

    Ok(CourseSheet {
        name: parsed.sheet.name,
        description: parsed.sheet.description,
        courses,
    })
}

/// Recursively load all `.toml` course sheets from a directory.
pub fn load_sheet_directory(dir: &Path) -> Result<Vec<CourseSheet>> {
    let mut sheets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            sheets.extend(load_sheet_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_sheet(&path) {
                Ok(sheet) => sheets.push(sheet),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(sheets)
}

/// Load a sheet file, or every sheet under a directory.
pub fn load_sheets(path: &Path) -> Result<Vec<CourseSheet>> {
    if path.is_dir() {
        load_sheet_directory(path)
    } else {
        Ok(vec![parse_sheet(path)?])
    }
}

/// A warning from sheet validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The course name (if applicable).
    pub course: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a sheet for entries that will be left out of the CG.
pub fn validate_sheet(sheet: &CourseSheet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if sheet.courses.is_empty() {
        warnings.push(ValidationWarning {
            course: None,
            message: "sheet has no courses".into(),
        });
    }

    let mut seen = std::collections::HashSet::new();
    for course in &sheet.courses {
        if !seen.insert(&course.name) {
            warnings.push(ValidationWarning {
                course: Some(course.name.clone()),
                message: format!("duplicate course name: {}", course.name),
            });
        }
    }

    for course in &sheet.courses {
        if let Some(issue) = assess_entry(&course.entry, &GradeScale).issue() {
            warnings.push(ValidationWarning {
                course: Some(course.name.clone()),
                message: format!("{issue}; course will not count toward the CG"),
            });
        }
    }

    warnings
}
