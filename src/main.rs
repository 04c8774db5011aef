//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `param_scout` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process;

use param_scout::initialization::init_logger_with;
use param_scout::{run, Config};

const BANNER: &str = r"
 ___  ___  ___  ___  _____     ___  ___  ___  _ _  _
| . || .'||  _|| .'||     |   |_ -||  _|| . || | || |_
|  _||__,||_|  |__,||_|_|_|   |___||___||___||___||  _|
|_|                                               |_|
";

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", BANNER.bold().blue());

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the miner using the library
    match run(config).await {
        Ok(report) => {
            // Print user-friendly summary
            println!(
                "✅ Processed {} domain{} ({} parameterized URL{}, {} skipped) in {:.1}s",
                report.domains.len(),
                if report.domains.len() == 1 { "" } else { "s" },
                report.total_urls,
                if report.total_urls == 1 { "" } else { "s" },
                report.skipped_domains,
                report.elapsed_seconds
            );
            println!("Results saved in {}", report.output_dir.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("param_scout error: {:#}", e);
            process::exit(1);
        }
    }
}
