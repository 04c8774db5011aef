//! Archive query construction.
//!
//! Builds the CDX search URL for a hostname. The parameter set asks the
//! index for every capture under the host (`<hostname>/*`), collapsed by
//! URL key so each original URL appears once, returned as plain text with
//! only the original URL column.

use std::fmt;

use crate::config::ARCHIVE_CDX_ENDPOINT;

/// A CDX query for one hostname against an archive endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveQuery {
    hostname: String,
    endpoint: String,
}

impl ArchiveQuery {
    /// Creates a query for `hostname` against the default archive endpoint.
    pub fn new(hostname: &str) -> Self {
        Self::with_endpoint(hostname, ARCHIVE_CDX_ENDPOINT)
    }

    /// Creates a query against a specific endpoint base URL.
    ///
    /// Used with the `--archive-url` override (caching proxies, test
    /// servers). A trailing `/` on the endpoint is tolerated.
    pub fn with_endpoint(hostname: &str, endpoint: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// The hostname this query targets.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Renders the full query URL.
    pub fn url(&self) -> String {
        format!(
            "{}?url={}/*&output=txt&collapse=urlkey&fl=original&page=/",
            self.endpoint, self.hostname
        )
    }
}

impl fmt::Display for ArchiveQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
