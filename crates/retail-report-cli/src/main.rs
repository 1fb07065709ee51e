use anyhow::Result;
use clap::{Arg, ArgAction, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use retail_report_cli::input::{load_report_config, ReportConfig};
use retail_report_cli::run::run_report;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("RETAIL_REPORT_LOG", "error,retail_report=info"))
        .init();

    let matches = Command::new("retail-report")
        .version(clap::crate_version!())
        .about("\u{1F6CD} Retail Report - exploratory analysis of retail transactions")
        .arg(
            Arg::new("config")
                .help("Path to report JSON configuration file")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("input_file")
                .short('i')
                .long("input")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .help(
                    "Path to the transaction CSV file. Overrides the input file \
                     specified in the configuration file.",
                )
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output_file")
                .short('o')
                .long("output")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .help(
                    "File path that the HTML report will be written to. \
                     Overrides the output file specified in the configuration file.",
                )
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("top_n")
                .short('n')
                .long("top-n")
                .value_parser(clap::value_parser!(usize))
                .help("Number of rows kept in the age and top revenue day tables.")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("include_config")
                .long("include-config")
                .help("Append the run configuration to the end of the report.")
                .action(ArgAction::SetTrue),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    let config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("[RetailReport] Using config: {:?}", config_path);
        load_report_config(config_path)?
    } else {
        let default_config = ReportConfig::default();
        eprintln!("[RetailReport] No config provided; using defaults.");
        eprintln!(
            "[RetailReport] Default config:\n{}",
            serde_json::to_string_pretty(&default_config).unwrap_or_default()
        );
        default_config
    };

    let config = config.with_overrides(&matches)?;

    match run_report(&config) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Report generation failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
