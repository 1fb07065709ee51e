//! Layout of the retail transaction report.
use anyhow::Result;
use maud::html;

use crate::aggregates::{
    age_value_counts, category_gender_average_spend, category_quantity, daily_amount_trend,
    top_revenue_days,
};
use crate::dataset::Dataset;
use crate::report::narrative::{self, paragraphs};
use crate::report::plots::{
    plot_amount_density, plot_amount_over_time, plot_category_gender_spend,
    plot_category_quantity,
};
use crate::report::tables::{
    age_counts_table, category_gender_table, category_quantity_table, revenue_days_table,
};
use crate::report::{Report, ReportSection};
use crate::stats::{gaussian_kde, DEFAULT_KDE_GRID_POINTS};

/// Knobs for [`build_retail_report`].
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub name: String,
    pub version: String,
    pub logo: Option<String>,
    /// Rows kept in the age and revenue day tables.
    pub top_n: usize,
    pub kde_grid_points: usize,
    /// When set, appended as a trailing "Configuration" section.
    pub configuration: Option<serde_json::Value>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            name: "Retail Report".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            logo: None,
            top_n: 10,
            kde_grid_points: DEFAULT_KDE_GRID_POINTS,
            configuration: None,
        }
    }
}

/// Compute every aggregate view and lay the page out in its fixed order.
pub fn build_retail_report(dataset: &Dataset, options: &ReportOptions) -> Result<Report> {
    let mut report = Report::new(
        &options.name,
        &options.version,
        options.logo.as_deref(),
        narrative::REPORT_TITLE,
    );

    /* Section 1: Customers and best days */
    {
        let age_counts = age_value_counts(dataset, options.top_n);
        let top_days = top_revenue_days(dataset, options.top_n);
        log::debug!(
            "{} age rows, {} revenue day rows",
            age_counts.len(),
            top_days.len()
        );

        let mut section = ReportSection::new(narrative::AGE_HEADING);
        section.add_content(age_counts_table(&age_counts));
        section.add_content(paragraphs(narrative::TOP_DAYS_INTRO));
        section.add_content(revenue_days_table(&top_days));
        report.add_section(section);
    }

    /* Section 2: Sales over time and their distribution */
    {
        let trend = daily_amount_trend(dataset);
        log::debug!("{} dates in the sales trend", trend.len());

        let amounts = dataset.total_amounts();
        let density = gaussian_kde(&amounts, options.kde_grid_points);
        if density.is_none() && !dataset.is_empty() {
            log::warn!(
                "Total amount bandwidth undefined across {} rows (fewer than two distinct values); density chart left empty",
                dataset.len()
            );
        }

        let mut section = ReportSection::new(narrative::SALES_HEADING);
        section.add_plot(plot_amount_over_time(&trend));
        section.add_content(paragraphs(narrative::SALES_TREND_COMMENT));
        section.add_plot(plot_amount_density(density.as_ref()));
        section.add_content(paragraphs(narrative::SALES_DISTRIBUTION_COMMENT));
        report.add_section(section);
    }

    /* Section 3: Categories */
    {
        let quantities = category_quantity(dataset);
        let spend = category_gender_average_spend(dataset);
        log::debug!(
            "{} categories, {} category/gender groups",
            quantities.len(),
            spend.len()
        );

        let mut section = ReportSection::new(narrative::CATEGORY_HEADING);
        section.add_content(category_quantity_table(&quantities));
        section.add_content(paragraphs(narrative::CATEGORY_TABLE_COMMENT));
        section.add_plot(plot_category_quantity(&quantities));
        section.add_content(paragraphs(narrative::CATEGORY_CHART_COMMENT));

        section.add_content(paragraphs(narrative::GENDER_SPEND_INTRO));
        section.add_content(category_gender_table(&spend));
        section.add_content(paragraphs(narrative::GENDER_SPEND_TABLE_COMMENT));
        section.add_plot(plot_category_gender_spend(&spend));
        section.add_content(paragraphs(narrative::GENDER_SPEND_CHART_COMMENT));
        report.add_section(section);
    }

    /* Section 4: Conclusion */
    {
        let mut section = ReportSection::new(narrative::CONCLUSION_HEADING);
        section.add_content(paragraphs(narrative::CONCLUSION));
        report.add_section(section);
    }

    if let Some(configuration) = &options.configuration {
        let mut section = ReportSection::new("Configuration");
        section.add_content(html! {
            style {
                ".code-container {
                    background-color: #f5f5f5;
                    padding: 10px;
                    border-radius: 5px;
                    overflow-x: auto;
                    font-family: monospace;
                    white-space: pre-wrap;
                }"
            }
            div class="code-container" {
                pre {
                    code { (serde_json::to_string_pretty(configuration)?) }
                }
            }
        });
        report.add_section(section);
    }

    Ok(report)
}
