use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};

use crate::util::{validate_html_output, validate_tsv_or_csv_file};

/// Run configuration for the retail report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub version: String,
    pub input_file: String,
    pub output_file: String,
    pub report_name: String,
    pub logo: Option<String>,
    pub top_n: usize,
    pub kde_grid_points: usize,
    pub include_config_section: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: String::from("retail_sales_dataset.csv"),
            output_file: String::from("retail_report.html"),
            report_name: String::from("Retail Report"),
            logo: None,
            top_n: 10,
            kde_grid_points: 200,
            include_config_section: false,
        }
    }
}

/// Load a report configuration from a JSON file.
pub fn load_report_config<P: AsRef<Path>>(path: P) -> Result<ReportConfig> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ReportConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

impl ReportConfig {
    /// Apply command line overrides on top of `self` and validate the paths.
    pub fn with_overrides(mut self, matches: &ArgMatches) -> Result<Self> {
        if let Some(input_file) = matches.get_one::<String>("input_file") {
            self.input_file = input_file.clone();
        }

        if let Some(output_file) = matches.get_one::<String>("output_file") {
            self.output_file = output_file.clone();
        }

        if let Some(top_n) = matches.get_one::<usize>("top_n") {
            self.top_n = *top_n;
        }

        if matches.get_flag("include_config") {
            self.include_config_section = true;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        validate_tsv_or_csv_file(&self.input_file)?;
        validate_html_output(&self.output_file)?;
        if self.top_n == 0 {
            anyhow::bail!("top_n must be at least 1");
        }
        if self.kde_grid_points < 2 {
            anyhow::bail!("kde_grid_points must be at least 2");
        }
        Ok(())
    }
}
