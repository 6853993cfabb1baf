//! The `cgcalc calc` command.

use std::path::PathBuf;

use anyhow::Result;

use cgcalc_core::report::CgReport;
use cgcalc_core::sheet::load_sheets;
use cgcalc_core::{CourseEntry, GradeCalculator};
use cgcalc_report::write_html_report;

use crate::config::load_config_from;
use crate::output::{render, OutputFormat};

/// Parse `"3:BC,4:CD"` into raw entries. A token without `:` is credits only.
pub fn parse_course_list(spec: &str) -> Vec<CourseEntry> {
    if spec.trim().is_empty() {
        return Vec::new();
    }
    spec.split(',')
        .map(|token| match token.split_once(':') {
            Some((credits, grade)) => CourseEntry::new(credits.trim(), grade.trim()),
            None => CourseEntry::new(token.trim(), ""),
        })
        .collect()
}

pub fn execute(
    courses: Option<String>,
    sheet: Option<PathBuf>,
    format: Option<String>,
    html: Option<PathBuf>,
    no_color: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let format: OutputFormat = format
        .as_deref()
        .unwrap_or(config.default_format.as_str())
        .parse()?;
    let color = config.color && !no_color;

    let reports: Vec<CgReport> = match (courses, sheet) {
        (Some(spec), None) => {
            let mut calc = GradeCalculator::with_entries(parse_course_list(&spec));
            calc.compute();
            CgReport::from_calculator("Command line", &calc)
                .into_iter()
                .collect()
        }
        (None, Some(path)) => load_sheets(&path)?
            .iter()
            .map(CgReport::from_sheet)
            .collect(),
        _ => anyhow::bail!("pass exactly one of --courses or --sheet"),
    };

    if reports.is_empty() {
        println!("No course sheets found.");
        return Ok(());
    }

    let rendered = reports
        .iter()
        .map(|r| render(r, format, color))
        .collect::<Result<Vec<_>>>()?;
    println!("{}", rendered.join("\n\n"));

    if let Some(path) = html {
        anyhow::ensure!(
            reports.len() == 1,
            "--html needs a single sheet, found {}",
            reports.len()
        );
        write_html_report(&reports[0], &path)?;
        eprintln!("HTML report: {}", path.display());
    }

    Ok(())
}
