//! Terminal rendering of reports, results, and the grade scale.

use std::str::FromStr;

use anyhow::Result;
use comfy_table::{Cell, Color, Table};

use cgcalc_core::report::CgReport;
use cgcalc_core::{Cg, GradeScale, ResultBand};

/// How `calc` prints a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => anyhow::bail!("unknown format '{other}' (expected text, json, or markdown)"),
        }
    }
}

/// Terminal colour for a band's colour cue.
pub fn band_color(band: ResultBand) -> Color {
    let (r, g, b) = band.color().rgb();
    Color::Rgb { r, g, b }
}

/// Per-course table: inputs and grade points.
pub fn course_table(report: &CgReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Course", "Credits", "Grade", "Grade Points"]);

    for (i, c) in report.courses.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&c.name),
            Cell::new(&c.entry.credits),
            Cell::new(&c.entry.grade),
            Cell::new(c.grade_points_text()),
        ]);
    }

    table
}

/// Two-cell CG/band table, with the band cell in the band's colour.
pub fn result_table(cg: Cg, band: ResultBand, color: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["CG", "Band"]);

    let mut band_cell = Cell::new(band.label());
    if color {
        band_cell = band_cell.bg(band_color(band));
    }
    table.add_row(vec![Cell::new(cg), band_cell]);

    table
}

pub fn scale_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Grade", "Points"]);
    for (label, points) in GradeScale.entries() {
        table.add_row(vec![Cell::new(label), Cell::new(points)]);
    }
    table
}

/// Render a full report in the requested format.
pub fn render(report: &CgReport, format: OutputFormat, color: bool) -> Result<String> {
    let out = match format {
        OutputFormat::Json => report.to_json()?,
        OutputFormat::Markdown => report.to_markdown(),
        OutputFormat::Text => {
            let mut out = format!("Sheet: {}\n", report.title);
            if !report.courses.is_empty() {
                out.push_str(&format!("{}\n", course_table(report)));
            }
            out.push_str(&format!(
                "{}",
                result_table(report.result.cg, report.result.band, color)
            ));
            out
        }
    };
    Ok(out)
}
