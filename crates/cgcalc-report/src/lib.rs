//! cgcalc-report — rendered output for CG reports.

pub mod html;

pub use html::{generate_html, write_html_report};
