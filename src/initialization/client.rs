//! HTTP client initialization.
//!
//! This module provides the shared HTTP client used for all archive requests.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Initializes the shared HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - Timeout from configuration (CDX queries for large hosts are slow)
/// - Redirect following enabled (reqwest default)
///
/// No default User-Agent is set here: every fetch attempt supplies its own
/// rotated identity header.
///
/// # Arguments
///
/// * `timeout_seconds` - Per-request timeout in seconds
///
/// # Returns
///
/// A configured HTTP client ready for making requests.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(timeout_seconds: u64) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?;
    Ok(client)
}
