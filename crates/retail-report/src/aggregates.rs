//! Aggregate views derived from a [`Dataset`].
//!
//! Every function here is a pure reduction over `&Dataset`: it groups rows by
//! one or more categorical or date fields, reduces a numeric field and
//! returns a freshly sorted table. Nothing is cached and the dataset is never
//! modified.
use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::dataset::Dataset;
use crate::stats::{mean, round_to, standard_error};

/// Row count for a single customer age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeCount {
    pub age: u32,
    pub count: usize,
}

/// Summed revenue for a single day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub total_amount: f64,
}

/// Average transaction amount on a day with a 95% confidence band.
///
/// `lower`/`upper` equal `mean` when the day has a single transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTrendPoint {
    pub date: NaiveDate,
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
    pub transactions: usize,
}

/// Summed quantity sold for a product category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuantity {
    pub product_category: String,
    pub quantity: u64,
}

/// Mean spend for a (product category, gender) pair, rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGenderSpend {
    pub product_category: String,
    pub gender: String,
    pub average_amount: f64,
}

const CONFIDENCE_Z: f64 = 1.96;

fn desc_f64(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Count rows per distinct age, most frequent first, keeping `top_n` rows.
///
/// Ages with the same count are listed youngest first.
pub fn age_value_counts(dataset: &Dataset, top_n: usize) -> Vec<AgeCount> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for t in dataset {
        *counts.entry(t.age).or_default() += 1;
    }

    let mut rows: Vec<AgeCount> = counts
        .into_iter()
        .map(|(age, count)| AgeCount { age, count })
        .collect();
    // stable sort keeps ascending age within equal counts
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows.truncate(top_n);
    rows
}

/// Total amount summed per day, chronological.
pub fn daily_revenue(dataset: &Dataset) -> Vec<DailyRevenue> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for t in dataset {
        *totals.entry(t.date).or_default() += t.total_amount;
    }
    totals
        .into_iter()
        .map(|(date, total_amount)| DailyRevenue { date, total_amount })
        .collect()
}

/// Days with the highest summed total amount, best first, keeping `top_n`.
///
/// Days with equal revenue are listed earliest first.
pub fn top_revenue_days(dataset: &Dataset, top_n: usize) -> Vec<DailyRevenue> {
    let mut rows = daily_revenue(dataset);
    rows.sort_by(|a, b| desc_f64(a.total_amount, b.total_amount));
    rows.truncate(top_n);
    rows
}

/// Mean total amount per day over the full date range, chronological.
pub fn daily_amount_trend(dataset: &Dataset) -> Vec<DailyTrendPoint> {
    let mut by_date: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for t in dataset {
        by_date.entry(t.date).or_default().push(t.total_amount);
    }

    by_date
        .into_iter()
        .filter_map(|(date, amounts)| {
            let mean = mean(&amounts)?;
            let half_width = standard_error(&amounts).map_or(0.0, |se| CONFIDENCE_Z * se);
            Some(DailyTrendPoint {
                date,
                mean,
                lower: mean - half_width,
                upper: mean + half_width,
                transactions: amounts.len(),
            })
        })
        .collect()
}

/// Quantity summed per product category, largest first.
///
/// Categories with the same quantity are listed alphabetically.
pub fn category_quantity(dataset: &Dataset) -> Vec<CategoryQuantity> {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for t in dataset {
        *totals.entry(t.product_category.as_str()).or_default() += u64::from(t.quantity);
    }

    let mut rows: Vec<CategoryQuantity> = totals
        .into_iter()
        .map(|(category, quantity)| CategoryQuantity {
            product_category: category.to_string(),
            quantity,
        })
        .collect();
    rows.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    rows
}

/// Mean total amount per (product category, gender), rounded to 2 decimals
/// and ordered by category then gender.
pub fn category_gender_average_spend(dataset: &Dataset) -> Vec<CategoryGenderSpend> {
    let mut groups: BTreeMap<(&str, &str), (f64, usize)> = BTreeMap::new();
    for t in dataset {
        let entry = groups
            .entry((t.product_category.as_str(), t.gender.as_str()))
            .or_insert((0.0, 0));
        entry.0 += t.total_amount;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|((category, gender), (sum, count))| CategoryGenderSpend {
            product_category: category.to_string(),
            gender: gender.to_string(),
            average_amount: round_to(sum / count as f64, 2),
        })
        .collect()
}

