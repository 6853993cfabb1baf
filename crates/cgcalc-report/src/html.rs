//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined. The page
//! background takes the result band's colour.

use anyhow::{Context, Result};
use std::path::Path;

use cgcalc_core::report::CgReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from a CG report.
pub fn generate_html(report: &CgReport) -> String {
    let band = report.result.band;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>CG report: {}</title>\n",
        html_escape(&report.title)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str(&format!(
        "body {{ background: {}; }}\n",
        band.color().css()
    ));
    html.push_str("</style>\n");
    html.push_str("</head>\n");
    html.push_str(&format!(
        "<body class=\"band-{}\">\n<main>\n",
        band_class(band)
    ));

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>CG CALCULATOR</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">{} | {} courses</p>\n",
        html_escape(&report.title),
        report.courses.len()
    ));
    html.push_str("</header>\n");

    // Result card
    html.push_str("<section class=\"card result\">\n");
    html.push_str(&format!(
        "Your CG: <strong>{}</strong>\n",
        html_escape(&report.result.cg.to_string())
    ));
    html.push_str(&format!(
        "<p class=\"band\">{}</p>\n",
        html_escape(band.label())
    ));
    html.push_str("</section>\n");

    // Per-course grade points
    if !report.courses.is_empty() {
        html.push_str("<section class=\"card\">\n");
        html.push_str("<h2>Total Grade Points for Each Course</h2>\n");
        html.push_str("<table>\n");
        html.push_str("<thead><tr><th>#</th><th>Course</th><th>Credits</th><th>Grade</th><th>Grade Points</th></tr></thead>\n");
        html.push_str("<tbody>\n");
        for (i, c) in report.courses.iter().enumerate() {
            let class = if c.outcome.is_counted() { "ok" } else { "invalid" };
            let title = c
                .outcome
                .issue()
                .map(|issue| format!(" title=\"{}\"", html_escape(&issue.to_string())))
                .unwrap_or_default();
            html.push_str(&format!(
                "<tr class=\"{}\"{}><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                class,
                title,
                i + 1,
                html_escape(&c.name),
                html_escape(&c.entry.credits),
                html_escape(&c.entry.grade),
                c.grade_points_text()
            ));
        }
        html.push_str("</tbody></table>\n");
        html.push_str("</section>\n");
    }

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(report).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</main>\n</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &CgReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

fn band_class(band: cgcalc_core::ResultBand) -> &'static str {
    use cgcalc_core::ResultBand;

    match band {
        ResultBand::Excellent => "excellent",
        ResultBand::Good => "good",
        ResultBand::Average => "average",
        ResultBand::BelowAverage => "below-average",
        ResultBand::Undetermined => "undetermined",
    }
}

const CSS: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2.5rem 1rem; color: #1f2937; min-height: 100vh; }
main { max-width: 56rem; margin: 0 auto; }
h1 { text-align: center; font-size: 2.25rem; }
.meta { text-align: center; color: #374151; }
.card { background: #fff; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.12); padding: 1rem; margin: 1.25rem 0; }
.result { text-align: center; font-size: 1.5rem; }
.band { font-size: 1rem; color: #6b7280; margin: 0.25rem 0 0; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #e5e7eb; padding: 0.5rem 1rem; text-align: left; }
th { background: #e5e7eb; }
.invalid td:last-child { color: #b91c1c; font-weight: bold; }
pre { overflow-x: auto; padding: 1rem; background: #fff; border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
"#;
