//! The `cgcalc validate` command.

use std::path::PathBuf;

use anyhow::Result;

use cgcalc_core::report::CgReport;
use cgcalc_core::sheet::{load_sheets, validate_sheet};

pub fn execute(sheet_path: PathBuf) -> Result<()> {
    let sheets = load_sheets(&sheet_path)?;

    let mut total_warnings = 0;
    for sheet in &sheets {
        let report = CgReport::from_sheet(sheet);
        println!(
            "Sheet: {} ({} courses, {} counted, CG {} ({}))",
            sheet.name,
            report.courses.len(),
            report.result.counted(),
            report.result.cg,
            report.result.band,
        );

        let warnings = validate_sheet(sheet);
        for warning in &warnings {
            match &warning.course {
                Some(course) => println!("  [{course}] WARNING: {}", warning.message),
                None => println!("  WARNING: {}", warning.message),
            }
        }
        total_warnings += warnings.len();
    }

    match total_warnings {
        0 => println!("All sheets valid."),
        n => println!("\n{n} warning(s) found across {} sheet(s).", sheets.len()),
    }

    Ok(())
}
