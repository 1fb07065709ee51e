//! Integration tests for CLI config parsing and util helpers.

use std::io::Write;

use retail_report_cli::input::{load_report_config, ReportConfig};
use retail_report_cli::util::{validate_html_output, validate_tsv_or_csv_file};

// ---------------------------------------------------------------------------
// validate_tsv_or_csv_file
// ---------------------------------------------------------------------------

#[test]
fn validate_csv_file_exists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    std::fs::File::create(&path).unwrap();
    assert!(validate_tsv_or_csv_file(path.to_str().unwrap()).is_ok());
}

#[test]
fn validate_wrong_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.xlsx");
    std::fs::File::create(&path).unwrap();
    assert!(validate_tsv_or_csv_file(path.to_str().unwrap()).is_err());
}

#[test]
fn validate_missing_file() {
    assert!(validate_tsv_or_csv_file("/nonexistent/data.csv").is_err());
}

#[test]
fn validate_html_output_extension() {
    assert!(validate_html_output("report.html").is_ok());
    assert!(validate_html_output("REPORT.HTM").is_ok());
    assert!(validate_html_output("report.pdf").is_err());
}

// ---------------------------------------------------------------------------
// ReportConfig
// ---------------------------------------------------------------------------

#[test]
fn default_config_matches_single_shot_run() {
    let config = ReportConfig::default();
    assert_eq!(config.input_file, "retail_sales_dataset.csv");
    assert_eq!(config.output_file, "retail_report.html");
    assert_eq!(config.top_n, 10);
    assert!(!config.include_config_section);
}

#[test]
fn partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, r#"{{ "top_n": 5, "report_name": "Store 12" }}"#).unwrap();

    let config = load_report_config(&path).unwrap();
    assert_eq!(config.top_n, 5);
    assert_eq!(config.report_name, "Store 12");
    assert_eq!(config.kde_grid_points, 200);
}

#[test]
fn invalid_config_json_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load_report_config(&path).unwrap_err();
    assert!(format!("{}", err).contains("Failed to parse config"));
}

#[test]
fn validate_rejects_zero_top_n() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.csv");
    std::fs::File::create(&input).unwrap();
    let config = ReportConfig {
        input_file: input.to_str().unwrap().to_string(),
        top_n: 0,
        ..ReportConfig::default()
    };
    assert!(config.validate().is_err());
}
