use std::collections::HashSet;

use chrono::NaiveDate;

/// A single retail transaction row.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub transaction_id: String,
    pub date: NaiveDate,
    pub age: u32,
    pub gender: String,
    pub product_category: String,
    pub quantity: u32,
    pub total_amount: f64,
}

/// Immutable, ordered collection of transactions.
///
/// Rows keep the order they were loaded in. The transaction id is treated as
/// the key of a row but uniqueness is not enforced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    transactions: Vec<Transaction>,
}

impl Dataset {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Total amount of every row, in load order.
    pub fn total_amounts(&self) -> Vec<f64> {
        self.transactions.iter().map(|t| t.total_amount).collect()
    }

    /// Number of rows whose transaction id was already seen earlier.
    pub fn duplicate_id_count(&self) -> usize {
        let mut seen = HashSet::with_capacity(self.transactions.len());
        self.transactions
            .iter()
            .filter(|t| !seen.insert(t.transaction_id.as_str()))
            .count()
    }
}

impl FromIterator<Transaction> for Dataset {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
