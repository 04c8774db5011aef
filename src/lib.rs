//! param_scout library: historical URL mining functionality
//!
//! This library mines the Wayback Machine CDX index for a hostname's
//! historical URLs, normalizes and deduplicates them, and keeps only those
//! carrying query parameters with every value replaced by a placeholder
//! token, ready for parameter fuzzing.
//!
//! # Example
//!
//! ```no_run
//! use param_scout::{run, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domains: vec!["example.com".to_string()],
//!     ..Default::default()
//! };
//!
//! let report = run(config).await?;
//! println!(
//!     "Mined {} parameterized URLs across {} domains",
//!     report.total_urls,
//!     report.domains.len()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod archive;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod output;
mod urls;
mod user_agent;

// Re-export public API
pub use archive::ArchiveQuery;
pub use config::{Config, LogFormat, LogLevel, OnExhausted};
pub use error_handling::FetchError;
pub use fetch::fetch_url_content;
pub use run::{collect_hostnames, run, DomainSummary, RunReport};
pub use urls::{clean_hostname, clean_url, clean_urls, has_extension};
pub use user_agent::UserAgentPool;

// Internal run module (contains the main mining logic)
mod run {
    use std::collections::HashSet;
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::archive::ArchiveQuery;
    use crate::config::{Config, OnExhausted, STATIC_ASSET_EXTENSIONS};
    use crate::error_handling::is_exhaustion;
    use crate::fetch::fetch_url_content;
    use crate::initialization::init_client;
    use crate::output::{ensure_results_dir, write_results};
    use crate::urls::{clean_hostname, clean_urls};
    use crate::user_agent::UserAgentPool;

    /// Result of mining one hostname.
    #[derive(Debug, Clone)]
    pub struct DomainSummary {
        /// The sanitized hostname.
        pub hostname: String,
        /// Number of parameterized URLs discovered.
        pub url_count: usize,
        /// Path of the written results file.
        pub output_path: PathBuf,
    }

    /// Results of a mining run.
    ///
    /// Contains summary statistics and metadata about the completed run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Per-hostname summaries, in processing order.
        pub domains: Vec<DomainSummary>,
        /// Hostnames dropped after fetch exhaustion (only nonzero with
        /// `--on-exhausted skip`).
        pub skipped_domains: usize,
        /// Total parameterized URLs across all hostnames.
        pub total_urls: usize,
        /// Directory the result files were written to.
        pub output_dir: PathBuf,
        /// Elapsed time in seconds.
        pub elapsed_seconds: f64,
    }

    /// Collects and sanitizes the target hostnames from configuration.
    ///
    /// Merges `-d` arguments with the lines of every `-l` file (blank lines
    /// and `#` comments skipped), passes each entry through
    /// [`clean_hostname`] — unparseable entries are dropped with a warning —
    /// and deduplicates while preserving first-seen order.
    ///
    /// # Errors
    ///
    /// Returns an error if a list file cannot be read, or if no valid
    /// hostname survives sanitization.
    pub async fn collect_hostnames(config: &Config) -> Result<Vec<String>> {
        let mut seen = HashSet::new();
        let mut hostnames = Vec::new();

        for entry in &config.domains {
            add_hostname(entry, &mut seen, &mut hostnames);
        }

        for list in &config.lists {
            let contents = tokio::fs::read_to_string(list)
                .await
                .context(format!("Failed to read domain list: {}", list.display()))?;
            for line in contents.lines() {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                add_hostname(trimmed, &mut seen, &mut hostnames);
            }
        }

        if hostnames.is_empty() {
            anyhow::bail!("No valid hostnames to process (provide -d or -l)");
        }

        Ok(hostnames)
    }

    fn add_hostname(raw: &str, seen: &mut HashSet<String>, hostnames: &mut Vec<String>) {
        match clean_hostname(raw) {
            Some(hostname) => {
                if seen.insert(hostname.clone()) {
                    hostnames.push(hostname);
                }
            }
            None => warn!("Error parsing domain {:?}. Skipping...", raw),
        }
    }

    /// Mines one hostname: build the query, fetch, normalize, persist.
    async fn process_hostname(
        client: &reqwest::Client,
        pool: &UserAgentPool,
        config: &Config,
        hostname: &str,
    ) -> Result<DomainSummary> {
        info!("Fetching URLs from {}...", hostname);

        let query = ArchiveQuery::with_endpoint(hostname, &config.archive_url);
        let body = fetch_url_content(client, &query.url(), pool)
            .await
            .context(format!("Archive fetch failed for {}", hostname))?;

        let cleaned = clean_urls(body.lines(), &STATIC_ASSET_EXTENSIONS, &config.placeholder);
        info!("Found {} unique URLs for {}", cleaned.len(), hostname);

        info!("Extracting URLs with parameters from {}...", hostname);
        let parameterized: Vec<String> =
            cleaned.into_iter().filter(|url| url.contains('?')).collect();

        let output_path =
            write_results(&config.output, hostname, &parameterized, config.stream).await?;
        info!(
            "Saved {} parameterized URLs to {}",
            parameterized.len(),
            output_path.display()
        );

        Ok(DomainSummary {
            hostname: hostname.to_string(),
            url_count: parameterized.len(),
            output_path,
        })
    }

    /// Runs a mining pass with the provided configuration.
    ///
    /// This is the main entry point for the library. It resolves the target
    /// hostnames, then processes them strictly sequentially: one CDX fetch,
    /// one normalization pass, and one results file per hostname.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the run (domains, placeholder, output
    ///   directory, retry policy, etc.)
    ///
    /// # Returns
    ///
    /// Returns a `RunReport` with per-domain summaries, or an error if the
    /// run failed.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - No valid hostname can be collected from the configuration
    /// - A domain list file cannot be read
    /// - The HTTP client cannot be initialized
    /// - A results file cannot be written
    /// - A hostname's fetch exhausts all retries and the policy is
    ///   [`OnExhausted::Abort`] (the default)
    ///
    /// With [`OnExhausted::Skip`], exhausted hostnames are counted in
    /// `skipped_domains` and the run continues.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use param_scout::{run, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     domains: vec!["example.com".to_string()],
    ///     ..Default::default()
    /// };
    /// let report = run(config).await?;
    /// println!("Mined {} URLs", report.total_urls);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run(config: Config) -> Result<RunReport> {
        let start_time = std::time::Instant::now();

        let hostnames = collect_hostnames(&config).await?;
        info!(
            "Processing {} hostname{}",
            hostnames.len(),
            if hostnames.len() == 1 { "" } else { "s" }
        );

        let client =
            init_client(config.timeout_seconds).context("Failed to initialize HTTP client")?;
        let pool = UserAgentPool::load(config.user_agents.as_deref()).await;

        ensure_results_dir(&config.output).await?;

        let mut domains = Vec::new();
        let mut skipped_domains = 0usize;

        for hostname in &hostnames {
            match process_hostname(&client, &pool, &config, hostname).await {
                Ok(summary) => domains.push(summary),
                Err(e) => {
                    // Only fetch exhaustion is skippable; anything else
                    // (I/O, initialization) aborts regardless of policy
                    if config.on_exhausted == OnExhausted::Skip && is_exhaustion(&e) {
                        warn!("Skipping {} after retry exhaustion: {:#}", hostname, e);
                        skipped_domains += 1;
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        let total_urls = domains.iter().map(|d| d.url_count).sum();

        Ok(RunReport {
            domains,
            skipped_domains,
            total_urls,
            output_dir: config.output.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
