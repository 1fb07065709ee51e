//! Retail transaction CSV reader.
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use csv::StringRecord;

use crate::dataset::{Dataset, Transaction};

/// Configuration for reading transaction files.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    pub transaction_id_column: String,
    pub date_column: String,
    pub age_column: String,
    pub gender_column: String,
    pub product_category_column: String,
    pub quantity_column: String,
    pub total_amount_column: String,
    /// `chrono` format string for the date column.
    pub date_format: String,
    /// Field delimiter. When `None` it is picked from the file extension
    /// (`.tsv` is tab separated, anything else comma separated).
    pub delimiter: Option<u8>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            transaction_id_column: "Transaction ID".to_string(),
            date_column: "Date".to_string(),
            age_column: "Age".to_string(),
            gender_column: "Gender".to_string(),
            product_category_column: "Product Category".to_string(),
            quantity_column: "Quantity".to_string(),
            total_amount_column: "Total Amount".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            delimiter: None,
        }
    }
}

/// Column positions resolved against a header row.
struct ColumnIndices {
    transaction_id: usize,
    date: usize,
    age: usize,
    gender: usize,
    product_category: usize,
    quantity: usize,
    total_amount: usize,
}

/// Read a transaction CSV file into a [`Dataset`].
pub fn read_transactions<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    read_transactions_with_config(path, &ReaderConfig::default())
}

/// Read a transaction file using a custom configuration.
pub fn read_transactions_with_config<P: AsRef<Path>>(
    path: P,
    config: &ReaderConfig,
) -> Result<Dataset> {
    let path = path.as_ref();
    let delimiter = config.delimiter.unwrap_or_else(|| delimiter_for(path));

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open transaction file: {}", path.display()))?;

    let headers = reader
        .headers()
        .context("Failed to read transaction header row")?
        .clone();

    let columns = resolve_columns(&headers, config)?;

    let mut transactions = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let row = row_idx + 1;
        let record = result.with_context(|| format!("Failed to read row {}", row))?;
        transactions.push(parse_transaction(&record, &columns, config, row)?);
    }

    let dataset = Dataset::new(transactions);
    log::info!(
        "Loaded {} transactions from {}",
        dataset.len(),
        path.display()
    );

    let duplicates = dataset.duplicate_id_count();
    if duplicates > 0 {
        log::debug!("{} rows reuse an earlier transaction id", duplicates);
    }

    Ok(dataset)
}

fn delimiter_for(path: &Path) -> u8 {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .as_deref()
    {
        Some("tsv") => b'\t',
        _ => b',',
    }
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name.trim()))
}

fn require_column(headers: &StringRecord, name: &str) -> Result<usize> {
    find_column(headers, name).ok_or_else(|| anyhow!("Missing column '{}'", name))
}

fn resolve_columns(headers: &StringRecord, config: &ReaderConfig) -> Result<ColumnIndices> {
    Ok(ColumnIndices {
        transaction_id: require_column(headers, &config.transaction_id_column)?,
        date: require_column(headers, &config.date_column)?,
        age: require_column(headers, &config.age_column)?,
        gender: require_column(headers, &config.gender_column)?,
        product_category: require_column(headers, &config.product_category_column)?,
        quantity: require_column(headers, &config.quantity_column)?,
        total_amount: require_column(headers, &config.total_amount_column)?,
    })
}

fn field<'r>(record: &'r StringRecord, idx: usize, column: &str, row: usize) -> Result<&'r str> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or_else(|| anyhow!("Missing '{}' value at row {}", column, row))
}

fn parse_field<T>(record: &StringRecord, idx: usize, column: &str, row: usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = field(record, idx, column, row)?;
    value
        .parse::<T>()
        .with_context(|| format!("Invalid '{}' value '{}' at row {}", column, value, row))
}

/// Decimal amount that must be finite; `NaN` and `inf` parse as `f64` but
/// cannot be summed or plotted.
fn parse_amount(record: &StringRecord, idx: usize, column: &str, row: usize) -> Result<f64> {
    let value: f64 = parse_field(record, idx, column, row)?;
    if !value.is_finite() {
        return Err(anyhow!(
            "Invalid '{}' value '{}' at row {} (must be a finite number)",
            column,
            value,
            row
        ));
    }
    Ok(value)
}

fn parse_transaction(
    record: &StringRecord,
    columns: &ColumnIndices,
    config: &ReaderConfig,
    row: usize,
) -> Result<Transaction> {
    let raw_date = field(record, columns.date, &config.date_column, row)?;
    let date = NaiveDate::parse_from_str(raw_date, &config.date_format).with_context(|| {
        format!(
            "Invalid '{}' value '{}' at row {} (expected {})",
            config.date_column, raw_date, row, config.date_format
        )
    })?;

    Ok(Transaction {
        transaction_id: field(record, columns.transaction_id, &config.transaction_id_column, row)?
            .to_string(),
        date,
        age: parse_field(record, columns.age, &config.age_column, row)?,
        gender: field(record, columns.gender, &config.gender_column, row)?.to_string(),
        product_category: field(
            record,
            columns.product_category,
            &config.product_category_column,
            row,
        )?
        .to_string(),
        quantity: parse_field(record, columns.quantity, &config.quantity_column, row)?,
        total_amount: parse_amount(record, columns.total_amount, &config.total_amount_column, row)?,
    })
}
