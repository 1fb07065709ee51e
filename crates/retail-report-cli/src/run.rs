use anyhow::{Context, Result};

use retail_report::io::read_transactions;
use retail_report::report::{build_retail_report, ReportOptions};

use crate::input::ReportConfig;

/// Load the dataset, build the report and write it to `config.output_file`.
pub fn run_report(config: &ReportConfig) -> Result<()> {
    let start_time = std::time::Instant::now();

    let dataset = read_transactions(&config.input_file)
        .with_context(|| format!("Failed to load dataset: {}", config.input_file))?;

    let options = ReportOptions {
        name: config.report_name.clone(),
        version: config.version.clone(),
        logo: config.logo.clone(),
        top_n: config.top_n,
        kde_grid_points: config.kde_grid_points,
        configuration: if config.include_config_section {
            Some(serde_json::to_value(config)?)
        } else {
            None
        },
    };

    let report = build_retail_report(&dataset, &options)?;
    report
        .save_to_file(&config.output_file)
        .with_context(|| format!("Failed to write report: {}", config.output_file))?;

    log::info!(
        "Report for {} transactions written to {} in {:?}",
        dataset.len(),
        config.output_file,
        start_time.elapsed()
    );
    Ok(())
}
