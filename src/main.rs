//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_trust` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use log::LevelFilter;
use structopt::StructOpt;

use domain_trust::initialization::init_logger;
use domain_trust::{analyze_url, assess_risk, AnalysisContext, Config, ReferenceTables};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "domain_trust",
    about = "Gathers WHOIS, DNS, TLS, and redirect trust signals for a domain and prints a risk assessment as JSON."
)]
struct Opt {
    /// URL or bare hostname to analyze
    url: String,

    /// Log level (error, warn, info, debug, trace)
    #[structopt(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,

    /// Print only the risk assessment, not the raw signal report
    #[structopt(long = "risk-only")]
    risk_only: bool,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Output<'a> {
    report: &'a domain_trust::AnalysisReport,
    risk: &'a domain_trust::RiskBundle,
}

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::from_args();
    init_logger(opt.log_level);

    let config = Config::from_env();
    let ctx = AnalysisContext::init(&config).context("Failed to initialize clients")?;

    match analyze_url(&opt.url, &ctx).await {
        Ok(report) => {
            let risk = assess_risk(&report, &ReferenceTables::default());
            let json = if opt.risk_only {
                serde_json::to_string_pretty(&risk)?
            } else {
                serde_json::to_string_pretty(&Output {
                    report: &report,
                    risk: &risk,
                })?
            };
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_trust error: {:#}", e);
            process::exit(1);
        }
    }
}
