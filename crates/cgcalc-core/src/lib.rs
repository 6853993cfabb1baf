//! cgcalc-core — grade scale, course model, and CG computation.
//!
//! This crate holds everything the calculator knows: the fixed grade scale,
//! the course entries a user edits, the credit-weighted CG computation, and
//! the course-sheet and report types the CLI builds on.

pub mod calculator;
pub mod computation;
pub mod error;
pub mod model;
pub mod report;
pub mod scale;
pub mod sheet;

pub use calculator::GradeCalculator;
pub use computation::ComputationResult;
pub use model::{Cg, CourseEntry, EntryField, ResultBand};
pub use scale::{GradeLabel, GradeScale};
