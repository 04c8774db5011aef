//! URL normalization pipeline.
//!
//! This module turns raw archive records into fuzz-ready URLs:
//! - Hostname sanitization for user-supplied domains
//! - Static-asset extension filtering
//! - Default-port normalization, placeholder substitution, and deduplication

mod clean;
mod extension;
mod hostname;

// Re-export public API
pub use clean::{clean_url, clean_urls};
pub use extension::has_extension;
pub use hostname::clean_hostname;
