//! Reporting and plotting helpers.
//!
//! `builder` assembles an HTML page out of sections holding `maud` markup and
//! Plotly charts. `plots` and `tables` turn aggregate views into those blocks,
//! `narrative` holds the fixed commentary and `retail` lays out the full page.
pub mod builder;
pub mod narrative;
pub mod plots;
pub mod retail;
pub mod tables;

pub use builder::{Report, ReportSection};
pub use retail::{build_retail_report, ReportOptions};
