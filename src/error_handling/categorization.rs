//! Retry strategy and error chain inspection.
//!
//! This module provides the retry timing for archive fetches and the chain
//! inspection the orchestrator uses to recognize retry exhaustion.

use std::time::Duration;

use anyhow::Error;
use tokio_retry::strategy::FixedInterval;

use super::types::FetchError;
use crate::config::{RETRY_DELAY_MS, RETRY_MAX_ATTEMPTS};

/// Creates the fixed-delay retry strategy for archive fetches.
///
/// Returns a strategy yielding `RETRY_MAX_ATTEMPTS - 1` pauses of
/// `RETRY_DELAY_MS` milliseconds each. The pause runs between attempts, so an
/// exhausted fetch fails immediately after its final attempt rather than
/// sleeping first.
pub fn get_retry_strategy() -> impl Iterator<Item = Duration> {
    FixedInterval::from_millis(RETRY_DELAY_MS).take(RETRY_MAX_ATTEMPTS as usize - 1)
}

/// Reports whether an error chain contains retry exhaustion.
///
/// Uses error chain inspection with downcasting rather than string matching,
/// so context layers added by the orchestrator do not hide the condition.
/// Drives the `--on-exhausted` abort-or-skip decision.
pub fn is_exhaustion(error: &Error) -> bool {
    error.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<FetchError>(),
            Some(FetchError::RetriesExhausted { .. })
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_strategy_pause_count_and_delay() {
        let pauses: Vec<Duration> = get_retry_strategy().collect();
        // Two pauses between three attempts
        assert_eq!(pauses.len(), RETRY_MAX_ATTEMPTS as usize - 1);
        for pause in pauses {
            assert_eq!(pause, Duration::from_millis(RETRY_DELAY_MS));
        }
    }

    #[test]
    fn test_is_exhaustion_spots_wrapped_fetch_error() {
        let inner = FetchError::BadStatus {
            url: "http://archive.test/cdx".to_string(),
            status: reqwest::StatusCode::BAD_GATEWAY,
        };
        let exhausted = FetchError::RetriesExhausted {
            url: "http://archive.test/cdx".to_string(),
            attempts: RETRY_MAX_ATTEMPTS,
            source: Box::new(inner),
        };
        let wrapped = Error::new(exhausted).context("while mining archive.test");
        assert!(is_exhaustion(&wrapped));
    }

    #[test]
    fn test_is_exhaustion_ignores_other_errors() {
        assert!(!is_exhaustion(&anyhow::anyhow!("disk full")));

        let status_only = Error::new(FetchError::BadStatus {
            url: "http://archive.test/cdx".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        });
        assert!(!is_exhaustion(&status_only));
    }
}
