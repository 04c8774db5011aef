//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization, fetch)
//! - Retry strategy configuration
//! - Exhaustion detection on error chains

mod categorization;
mod types;

// Re-export public API
pub use categorization::{get_retry_strategy, is_exhaustion};
pub use types::{FetchError, InitializationError};
