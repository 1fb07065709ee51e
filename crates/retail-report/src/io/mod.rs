//! IO utilities for loading transaction files.

pub mod retail_csv;

pub use retail_csv::{read_transactions, read_transactions_with_config, ReaderConfig};
