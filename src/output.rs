//! Result persistence.
//!
//! Writes each hostname's parameterized URLs to `<output>/<hostname>.txt`,
//! one per line, optionally echoing them live to the console.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use tokio::fs;

/// Creates the results directory if it does not exist.
pub async fn ensure_results_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).await.context(format!(
        "Failed to create results directory: {}",
        dir.display()
    ))
}

/// Writes one hostname's URLs to `<dir>/<hostname>.txt`.
///
/// One URL per line with a trailing newline. An empty URL list still
/// produces the (empty) file: the file is the per-hostname record, present
/// even when the mine came up dry. When `stream` is set, each URL is echoed
/// to stdout as a `[FOUND]` line.
///
/// # Arguments
///
/// * `dir` - Results directory (must already exist)
/// * `hostname` - Sanitized hostname, used as the file stem
/// * `urls` - Final parameterized URLs, in output order
/// * `stream` - Echo each URL to the console
///
/// # Returns
///
/// The path of the written file.
pub async fn write_results(
    dir: &Path,
    hostname: &str,
    urls: &[String],
    stream: bool,
) -> Result<PathBuf> {
    let path = dir.join(format!("{}.txt", hostname));

    let mut contents = String::new();
    for url in urls {
        contents.push_str(url);
        contents.push('\n');
    }

    fs::write(&path, contents).await.context(format!(
        "Failed to write results file: {}",
        path.display()
    ))?;

    if stream {
        for url in urls {
            println!("[{}] {}", "FOUND".blue(), url);
        }
    }

    Ok(path)
}
