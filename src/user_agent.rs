//! User-Agent pool management.
//!
//! Each fetch attempt presents a different browser identity drawn at random
//! from a pool. The pool is built in by default, or loaded at startup from a
//! URL or local file with one identity per line.

use std::time::Duration;

use rand::seq::IndexedRandom;
use tokio::fs;

use crate::config::{BUILTIN_USER_AGENTS, DEFAULT_USER_AGENT};

/// Timeout for fetching a remote User-Agent pool.
const POOL_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// A non-empty pool of User-Agent strings with uniform random selection.
///
/// The public constructors guarantee a non-empty pool: loading falls back to
/// the built-in list rather than producing an empty one.
#[derive(Debug, Clone)]
pub struct UserAgentPool {
    agents: Vec<String>,
}

impl UserAgentPool {
    /// Creates the pool of built-in browser identities.
    pub fn builtin() -> Self {
        Self {
            agents: BUILTIN_USER_AGENTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Builds a pool from newline-delimited text, dropping blank lines and
    /// `#` comments.
    ///
    /// Returns `None` when nothing usable remains, so callers can fall back.
    fn from_lines(text: &str) -> Option<Self> {
        let agents: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        if agents.is_empty() {
            None
        } else {
            Some(Self { agents })
        }
    }

    /// Loads the pool from an optional source, falling back to the built-in
    /// list.
    ///
    /// The source may be an `http(s)` URL or a local file path. Any failure
    /// to read it degrades to the built-in pool with a warning; identity
    /// rotation never blocks a run.
    pub async fn load(source: Option<&str>) -> Self {
        let Some(source) = source else {
            return Self::builtin();
        };

        match try_load_pool(source).await {
            Ok(pool) => {
                log::info!(
                    "Loaded {} User-Agent identities from {}",
                    pool.len(),
                    source
                );
                pool
            }
            Err(e) => {
                log::warn!(
                    "Failed to load User-Agent pool from {}: {}. Using the built-in pool.",
                    source,
                    e
                );
                Self::builtin()
            }
        }
    }

    /// Picks one identity uniformly at random.
    pub fn select(&self) -> &str {
        self.agents
            .choose(&mut rand::rng())
            .map(String::as_str)
            .unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Number of identities in the pool.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the pool is empty. Never true for pools built by the public
    /// constructors.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

/// Attempts to load a pool from a URL or file path.
async fn try_load_pool(source: &str) -> Result<UserAgentPool, anyhow::Error> {
    let text = if source.starts_with("http://") || source.starts_with("https://") {
        let client = reqwest::Client::builder()
            .timeout(POOL_FETCH_TIMEOUT)
            .build()?;

        let response = client.get(source).send().await?;
        if !response.status().is_success() {
            return Err(anyhow::anyhow!("HTTP {}", response.status()));
        }
        response.text().await?
    } else {
        fs::read_to_string(source).await?
    };

    UserAgentPool::from_lines(&text)
        .ok_or_else(|| anyhow::anyhow!("Source contains no usable identities"))
}
