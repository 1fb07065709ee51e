//! HTML tables for the aggregate views.
use maud::{html, Markup};

use crate::aggregates::{AgeCount, CategoryGenderSpend, CategoryQuantity, DailyRevenue};

fn amount(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn age_counts_table(rows: &[AgeCount]) -> Markup {
    html! {
        table class="data-table" {
            thead { tr { th { "Age" } th { "count" } } }
            tbody {
                @for row in rows {
                    tr { td class="num" { (row.age) } td class="num" { (row.count) } }
                }
            }
        }
    }
}

pub fn revenue_days_table(rows: &[DailyRevenue]) -> Markup {
    html! {
        table class="data-table" {
            thead { tr { th { "Date" } th { "Total Amount" } } }
            tbody {
                @for row in rows {
                    tr {
                        td { (row.date.format("%Y-%m-%d")) }
                        td class="num" { (amount(row.total_amount)) }
                    }
                }
            }
        }
    }
}

pub fn category_quantity_table(rows: &[CategoryQuantity]) -> Markup {
    html! {
        table class="data-table" {
            thead { tr { th { "Product Category" } th { "Quantity" } } }
            tbody {
                @for row in rows {
                    tr { td { (row.product_category) } td class="num" { (row.quantity) } }
                }
            }
        }
    }
}

pub fn category_gender_table(rows: &[CategoryGenderSpend]) -> Markup {
    html! {
        table class="data-table" {
            thead { tr { th { "Product Category" } th { "Gender" } th { "Total Amount" } } }
            tbody {
                @for row in rows {
                    tr {
                        td { (row.product_category) }
                        td { (row.gender) }
                        td class="num" { (amount(row.average_amount)) }
                    }
                }
            }
        }
    }
}
