//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cgcalc() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("cgcalc").unwrap();
    // Keep tests independent of any config in the developer's home directory.
    cmd.env("HOME", env!("CARGO_TARGET_TMPDIR"));
    cmd
}

#[test]
fn calc_from_course_list() {
    cgcalc()
        .arg("calc")
        .arg("--courses")
        .arg("3:BC,4:CD")
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("21.00"))
        .stdout(predicate::str::contains("20.00"))
        .stdout(predicate::str::contains("5.85"))
        .stdout(predicate::str::contains("Average"));
}

#[test]
fn calc_whole_number_cg() {
    cgcalc()
        .args(["calc", "--courses", "5:AA,5:BB", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9.00"))
        .stdout(predicate::str::contains("Excellent"));
}

#[test]
fn calc_truncates_instead_of_rounding() {
    cgcalc()
        .args(["calc", "--courses", "1:CC,999:BC", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6.99"))
        .stdout(predicate::str::contains("7.00").not());
}

#[test]
fn calc_all_invalid() {
    cgcalc()
        .args(["calc", "--courses", "abc:AA,3:ZZ,-2:BB", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid Input"))
        .stdout(predicate::str::contains("Undetermined"));
}

#[test]
fn calc_json_output() {
    let output = cgcalc()
        .args(["calc", "--courses", "3:BC,4:CD", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["result"]["band"], "average");
    assert_eq!(value["result"]["cg"]["value"], 5.85);
    assert_eq!(value["result"]["per_course_grade_points"][0], 21.0);
}

#[test]
fn calc_markdown_output() {
    cgcalc()
        .args(["calc", "--courses", "3:BC,4:CD", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**CG:** 5.85 (Average)"));
}

#[test]
fn calc_from_sheet() {
    cgcalc()
        .arg("calc")
        .arg("--sheet")
        .arg("../../sheets/semester-1.toml")
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sheet: Semester 1"))
        .stdout(predicate::str::contains("Calculus"))
        .stdout(predicate::str::contains("9.23"))
        .stdout(predicate::str::contains("Excellent"));
}

#[test]
fn calc_sheet_with_invalid_rows() {
    cgcalc()
        .args(["calc", "--sheet", "../../sheets/semester-2.toml", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6.14"))
        .stdout(predicate::str::contains("Invalid"));
}

#[test]
fn calc_writes_html() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cg.html");

    cgcalc()
        .args(["calc", "--courses", "5:AA,5:BB", "--html"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("HTML report"));

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("background: #22c55e"));
    assert!(html.contains("9.00"));
}

#[test]
fn calc_rejects_unknown_format() {
    cgcalc()
        .args(["calc", "--courses", "3:AA", "--format", "sarif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn calc_requires_input() {
    cgcalc().arg("calc").assert().failure();
}

#[test]
fn calc_rejects_both_inputs() {
    cgcalc()
        .args(["calc", "--courses", "3:AA", "--sheet", "x.toml"])
        .assert()
        .failure();
}

#[test]
fn calc_uses_config_default_format() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("cgcalc.toml");
    std::fs::write(&config, "default_format = \"markdown\"\n").unwrap();

    cgcalc()
        .args(["calc", "--courses", "4:AB", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("**CG:** 9.00 (Excellent)"));
}

#[test]
fn calc_missing_config_fails() {
    cgcalc()
        .args(["calc", "--courses", "4:AB", "--config", "no_such_config.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn interactive_session() {
    cgcalc()
        .arg("interactive")
        .write_stdin("count 2\ncredits 1 5\ngrade 1 AA\ncredits 2 5\ngrade 2 BB\ncompute\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 course(s) ready"))
        .stdout(predicate::str::contains("9.00"))
        .stdout(predicate::str::contains("Excellent"));
}

#[test]
fn interactive_out_of_range_edit() {
    cgcalc()
        .arg("interactive")
        .write_stdin("count 1\ngrade 4 AA\ncompute\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("no course 4"))
        .stdout(predicate::str::contains("Invalid Input"));
}

#[test]
fn validate_clean_sheet() {
    cgcalc()
        .arg("validate")
        .arg("--sheet")
        .arg("../../sheets/semester-1.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 courses, 4 counted, CG 9.23 (Excellent)"))
        .stdout(predicate::str::contains("All sheets valid"));
}

#[test]
fn validate_sheet_with_warnings() {
    cgcalc()
        .arg("validate")
        .arg("--sheet")
        .arg("../../sheets/semester-2.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Open Elective] WARNING: no credits entered"))
        .stdout(predicate::str::contains("[Networks Lab] WARNING: unknown grade 'A+'"))
        .stdout(predicate::str::contains("4 courses, 2 counted, CG 6.14 (Average)"))
        .stdout(predicate::str::contains("2 warning(s) found across 1 sheet(s)"));
}

#[test]
fn validate_directory() {
    cgcalc()
        .arg("validate")
        .arg("--sheet")
        .arg("../../sheets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Semester 1"))
        .stdout(predicate::str::contains("Semester 2"));
}

#[test]
fn validate_nonexistent_file() {
    cgcalc()
        .arg("validate")
        .arg("--sheet")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn scale_lists_grades() {
    cgcalc()
        .arg("scale")
        .assert()
        .success()
        .stdout(predicate::str::contains("AA"))
        .stdout(predicate::str::contains("10"))
        .stdout(predicate::str::contains("FF"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    cgcalc()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created cgcalc.toml"))
        .stdout(predicate::str::contains("Created sheets/example.toml"))
        .stdout(predicate::str::contains("CG 8.41 (Good)"));

    assert!(dir.path().join("cgcalc.toml").exists());
    assert!(dir.path().join("sheets/example.toml").exists());

    cgcalc()
        .current_dir(dir.path())
        .args(["calc", "--sheet", "sheets/example.toml", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8.41"))
        .stdout(predicate::str::contains("Good"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    cgcalc()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    cgcalc()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("cgcalc.toml already exists"))
        .stdout(predicate::str::contains("sheets/example.toml already exists"));
}

#[test]
fn help_output() {
    cgcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Credit-weighted CG calculator"));
}

#[test]
fn version_output() {
    cgcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cgcalc"));
}
