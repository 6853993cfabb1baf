//! The `cgcalc init` command.

use std::path::Path;

use anyhow::{Context, Result};

use cgcalc_core::report::CgReport;
use cgcalc_core::sheet::parse_sheet_str;

const CONFIG_PATH: &str = "cgcalc.toml";
const SHEET_PATH: &str = "sheets/example.toml";

pub fn execute() -> Result<()> {
    write_if_missing(Path::new(CONFIG_PATH), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("sheets").context("failed to create sheets/")?;
    write_if_missing(Path::new(SHEET_PATH), EXAMPLE_SHEET)?;

    let sheet = parse_sheet_str(EXAMPLE_SHEET, Path::new(SHEET_PATH))?;
    let result = CgReport::from_sheet(&sheet).result;
    println!(
        "\nThe example sheet computes to CG {} ({}). Edit it, then run:\n  cgcalc calc --sheet {SHEET_PATH}",
        result.cg, result.band
    );

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
        return Ok(());
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# cgcalc configuration

# Output format for `cgcalc calc`: text, json, or markdown
default_format = "text"

# Colour the result band in terminal tables
color = true

# Largest course count accepted by `cgcalc interactive`
max_courses = 10
"#;

const EXAMPLE_SHEET: &str = r#"[sheet]
name = "Example Semester"
description = "Replace these courses with your own"

[[courses]]
name = "Data Structures"
credits = 4
grade = "AB"

[[courses]]
name = "Discrete Mathematics"
credits = 3
grade = "BB"

[[courses]]
name = "Digital Logic"
credits = 3
grade = "BC"

[[courses]]
name = "Technical Writing"
credits = 2
grade = "AA"
"#;
