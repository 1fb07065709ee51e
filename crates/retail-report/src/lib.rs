//! retail-report: exploratory analysis report for retail transaction data.
//!
//! This crate loads a fixed-schema transaction CSV into an immutable
//! [`dataset::Dataset`], derives a small set of aggregate views from it
//! (value counts, grouped sums and means), and renders those views as tables,
//! Plotly charts and fixed commentary in a single HTML page.
//!
//! Computation and presentation are kept apart: `aggregates` and `stats` are
//! pure functions over `&Dataset`, while `report` only formats what they return.
pub mod aggregates;
pub mod dataset;
pub mod io;
pub mod report;
pub mod stats;

pub use dataset::{Dataset, Transaction};
pub use report::{Report, ReportSection};
