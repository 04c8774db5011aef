//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for archive fetch operations.
///
/// `BadStatus` and `Transport` describe a single failed attempt;
/// `RetriesExhausted` is the terminal condition after every attempt has
/// failed, carrying the final attempt's error as its source. The orchestrator
/// decides whether exhaustion aborts the batch or skips the hostname.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP status {status} fetching {url}")]
    BadStatus {
        /// The URL that was requested.
        url: String,
        /// The non-2xx status code received.
        status: reqwest::StatusCode,
    },

    /// The request failed below the HTTP layer (connect, timeout, body read).
    #[error("Transport error fetching {url}: {source}")]
    Transport {
        /// The URL that was requested.
        url: String,
        /// The underlying client error.
        #[source]
        source: ReqwestError,
    },

    /// Every attempt failed and the fetch gave up.
    #[error("Failed to fetch {url} after {attempts} attempts")]
    RetriesExhausted {
        /// The URL that was requested.
        url: String,
        /// Total attempts made, including the first.
        attempts: u32,
        /// The error from the final attempt.
        #[source]
        source: Box<FetchError>,
    },
}
