//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the application,
//! including the archive endpoint, retry parameters, and the built-in tables
//! (static-asset extensions, User-Agent pool) that drive URL mining.

// Archive endpoint
/// Base URL of the Wayback Machine CDX search API.
///
/// Overridable via the `--archive-url` CLI flag, e.g. to point at a caching
/// proxy or a local test server.
pub const ARCHIVE_CDX_ENDPOINT: &str = "https://web.archive.org/cdx/search/cdx";

// Retry strategy
/// Maximum number of fetch attempts (including the initial attempt).
/// Set to 3 = initial attempt + 2 retries.
pub const RETRY_MAX_ATTEMPTS: u32 = 3;
/// Fixed delay in milliseconds between fetch attempts.
/// No backoff or jitter: the archive rate-limits by IP, not by request pattern.
pub const RETRY_DELAY_MS: u64 = 5000;

// Network operation timeouts
/// Per-request timeout in seconds.
/// CDX queries for large hosts can run well over a minute.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

// Output
/// Token substituted for every query-parameter value in mined URLs.
pub const DEFAULT_PLACEHOLDER: &str = "FUZZ";
/// Directory where per-hostname result files are written.
pub const DEFAULT_RESULTS_DIR: &str = "./results";

/// Fallback User-Agent string for HTTP requests.
///
/// **Note:** This is a last-resort value. Each fetch attempt normally draws a
/// random identity from [`BUILTIN_USER_AGENTS`] (or a user-supplied pool via
/// the `--user-agents` flag).
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// File extensions identifying static assets, matched case-insensitively
/// against the final suffix of a URL's last path segment.
///
/// URLs ending in one of these never carry fuzzable parameters worth keeping
/// (images, fonts, stylesheets, media), so the pipeline drops them outright.
pub const STATIC_ASSET_EXTENSIONS: [&str; 17] = [
    ".jpg", ".jpeg", ".png", ".gif", ".pdf", ".svg", ".json", ".css", ".js", ".webp", ".woff",
    ".woff2", ".eot", ".ttf", ".otf", ".mp4", ".txt",
];

/// Built-in pool of browser User-Agent strings, one chosen uniformly at
/// random per fetch attempt.
pub const BUILTIN_USER_AGENTS: [&str; 15] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36",
    "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:54.0) Gecko/20100101 Firefox/54.0",
    "Mozilla/5.0 (Windows NT 6.1; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; WOW64; rv:54.0) Gecko/20100101 Firefox/54.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_6) AppleWebKit/603.3.8 (KHTML, like Gecko) Version/10.1.2 Safari/603.3.8",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/89.0.4389.82 Safari/537.36 Edg/89.0.774.45",
    "Mozilla/5.0 (Windows NT 10.0; WOW64; Trident/7.0; AS; rv:11.0) like Gecko",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.96 Safari/537.36 Edge/16.16299",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36 OPR/45.0.2552.898",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36 Vivaldi/1.8.770.50",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:54.0) Gecko/20100101 Firefox/54.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36 Edge/15.15063",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36 Edge/15.15063",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.81 Safari/537.36",
];
