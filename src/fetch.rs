//! Resilient archive fetching.
//!
//! One GET per attempt against the archive endpoint, each attempt presenting
//! a freshly drawn User-Agent. Failed attempts are retried on a fixed delay;
//! exhaustion surfaces as a typed error so the orchestrator can apply its
//! abort-or-skip policy instead of the fetch layer deciding for it.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use log::warn;
use reqwest::Client;

use crate::config::{RETRY_DELAY_MS, RETRY_MAX_ATTEMPTS};
use crate::error_handling::{get_retry_strategy, FetchError};
use crate::user_agent::UserAgentPool;

/// Fetches a URL's body as text, rotating identities across attempts.
///
/// Each attempt draws a random User-Agent from `pool` and issues one GET.
/// A non-2xx status or transport failure abandons the attempt; the next one
/// starts after the fixed retry delay. Once `RETRY_MAX_ATTEMPTS` attempts
/// have failed the fetch gives up with [`FetchError::RetriesExhausted`]
/// wrapping the final attempt's error.
///
/// # Arguments
///
/// * `client` - Shared HTTP client (carries the transport timeout)
/// * `url` - Absolute URL to fetch
/// * `pool` - Identity pool, drawn from once per attempt
///
/// # Returns
///
/// The response body of the first successful attempt.
pub async fn fetch_url_content(
    client: &Client,
    url: &str,
    pool: &UserAgentPool,
) -> Result<String, FetchError> {
    // Attempt counting via Arc<AtomicU32>: the closure is re-invoked per
    // attempt and cannot borrow a local counter mutably
    let attempt_count = Arc::new(AtomicU32::new(0));

    let result = tokio_retry::Retry::spawn(get_retry_strategy(), {
        let attempt_count = Arc::clone(&attempt_count);
        move || {
            let attempt = attempt_count.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                match try_fetch(client, url, pool.select()).await {
                    Ok(body) => Ok(body),
                    Err(e) => {
                        if attempt < RETRY_MAX_ATTEMPTS {
                            warn!(
                                "Error fetching URL {} (attempt {}/{}): {}. Retrying in {} seconds...",
                                url,
                                attempt,
                                RETRY_MAX_ATTEMPTS,
                                e,
                                RETRY_DELAY_MS / 1000
                            );
                        }
                        Err(e)
                    }
                }
            }
        }
    })
    .await;

    result.map_err(|final_error| {
        let attempts = attempt_count.load(Ordering::SeqCst);
        log::error!(
            "Failed to fetch URL {} after {} attempts: {}",
            url,
            attempts,
            final_error
        );
        FetchError::RetriesExhausted {
            url: url.to_string(),
            attempts,
            source: Box::new(final_error),
        }
    })
}

/// Issues a single GET with the given identity.
async fn try_fetch(client: &Client, url: &str, user_agent: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, user_agent)
        .send()
        .await
        .map_err(|e| FetchError::Transport {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::BadStatus {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|e| FetchError::Transport {
        url: url.to_string(),
        source: e,
    })
}

// Behavioral tests (attempt counts, identity rotation, exhaustion) need a
// mock HTTP server and live in tests/integration_test.rs.
