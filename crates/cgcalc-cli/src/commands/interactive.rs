//! The `cgcalc interactive` command.
//!
//! A line-oriented front end over a single `GradeCalculator`. Every command
//! runs to completion before the next line is read, and results are printed
//! by reading the calculator back after `compute`.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use cgcalc_core::calculator::parse_course_count;
use cgcalc_core::computation::{assess_entry, CourseOutcome};
use cgcalc_core::report::CgReport;
use cgcalc_core::{EntryField, GradeCalculator};

use crate::config::{load_config_from, CgcalcConfig};
use crate::output::{course_table, result_table, scale_table};

const HELP: &str = "\
Commands:
  count N            start over with N blank courses
  credits I VALUE    set the credits of course I (1-based)
  grade I VALUE      set the grade of course I (AA, AB, BB, BC, CC, CD, DD, FF)
  compute            calculate the CG
  show               list the current entries
  scale              print the grade scale
  help               show this help
  quit               leave";

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(stdin.lock(), stdout.lock(), &config)
}

/// Drive a session from `input` until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(input: R, mut out: W, config: &CgcalcConfig) -> Result<()> {
    let mut session = Session {
        calc: GradeCalculator::new(),
        max_courses: config.max_courses,
        color: config.color,
    };

    writeln!(out, "CG CALCULATOR (type `help` for commands)")?;
    prompt(&mut out)?;
    for line in input.lines() {
        let line = line?;
        if let Flow::Quit = session.handle(&line, &mut out)? {
            break;
        }
        prompt(&mut out)?;
    }
    writeln!(out)?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

enum Flow {
    Continue,
    Quit,
}

struct Session {
    calc: GradeCalculator,
    max_courses: usize,
    color: bool,
}

/// Split off the first whitespace-delimited word.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim()),
        None => (s, ""),
    }
}

impl Session {
    fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let (command, rest) = split_word(line);

        match command.to_lowercase().as_str() {
            "" => {}
            "count" => self.count(rest, out)?,
            "credits" => self.edit(EntryField::Credits, rest, out)?,
            "grade" => self.edit(EntryField::Grade, rest, out)?,
            "compute" => self.compute(out)?,
            "show" => self.show(out)?,
            "scale" => writeln!(out, "{}", scale_table())?,
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => writeln!(out, "unknown command '{other}' (type `help`)")?,
        }

        Ok(Flow::Continue)
    }

    fn count<W: Write>(&mut self, arg: &str, out: &mut W) -> Result<()> {
        let n = parse_course_count(arg);
        if n > self.max_courses {
            writeln!(out, "choose at most {} courses", self.max_courses)?;
            return Ok(());
        }
        self.calc.set_course_count(n);
        writeln!(out, "{n} course(s) ready")?;
        Ok(())
    }

    fn edit<W: Write>(&mut self, field: EntryField, rest: &str, out: &mut W) -> Result<()> {
        let (course, value) = split_word(rest);
        let Some(index) = course.parse::<usize>().ok().and_then(|i| i.checked_sub(1)) else {
            writeln!(out, "usage: {field} I VALUE (course numbers start at 1)")?;
            return Ok(());
        };

        if self.calc.update_entry(index, field, value) {
            writeln!(out, "course {course} {field} set to '{value}'")?;
        } else {
            writeln!(
                out,
                "no course {course}; {} course(s) set",
                self.calc.course_count()
            )?;
        }
        Ok(())
    }

    fn compute<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let result = self.calc.compute();
        let (cg, band) = (result.cg, result.band);

        if let Some(report) = CgReport::from_calculator("Session", &self.calc) {
            if !report.courses.is_empty() {
                writeln!(out, "{}", course_table(&report))?;
            }
        }
        writeln!(out, "{}", result_table(cg, band, self.color))?;
        Ok(())
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.calc.course_count() == 0 {
            writeln!(out, "no courses; use `count N`")?;
            return Ok(());
        }

        let mut table = Table::new();
        table.set_header(vec!["#", "Credits", "Grade", "Status"]);
        for (i, entry) in self.calc.entries().iter().enumerate() {
            let status = match assess_entry(entry, self.calc.scale()) {
                CourseOutcome::Counted { .. } => "counts".to_string(),
                CourseOutcome::Discarded { issue } => issue.to_string(),
            };
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(&entry.credits),
                Cell::new(&entry.grade),
                Cell::new(status),
            ]);
        }
        writeln!(out, "{table}")?;

        match self.calc.cg() {
            Some(cg) => writeln!(out, "Last CG: {cg} ({})", self.calc.band())?,
            None => writeln!(out, "Not computed yet")?,
        }
        Ok(())
    }
}
