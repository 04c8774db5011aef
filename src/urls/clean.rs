//! URL normalization, deduplication, and placeholder substitution.
//!
//! Raw archive output is one URL per line, heavy with duplicates that differ
//! only in parameter values or redundant port notation. This module collapses
//! them: parse, drop static assets, overwrite every query value with the
//! placeholder, and keep the first occurrence of each resulting string.

use std::collections::HashSet;

use log::warn;
use url::Url;

use super::extension::has_extension;

/// Parses and normalizes a single URL.
///
/// Parsing alone performs the normalization this tool needs: the WHATWG
/// rules drop a default port (80 for `http`, 443 for `https`) from the
/// serialization while leaving any other port, and every other component,
/// untouched.
pub fn clean_url(url: &str) -> Result<Url, url::ParseError> {
    Url::parse(url)
}

/// Normalizes a batch of raw archive records into unique fuzzable URLs.
///
/// For each line:
/// - empty lines are skipped;
/// - unparseable lines are skipped with a warning — one corrupt record must
///   not sink the thousands of good ones around it;
/// - URLs whose path ends in one of `extensions` are dropped;
/// - every query-parameter value of the rest is replaced with `placeholder`,
///   keys kept in their original order and multiplicity.
///
/// The result is deduplicated by full-string equality after substitution,
/// preserving first-insertion order.
///
/// # Arguments
///
/// * `urls` - Raw URL records, typically the lines of a CDX response body
/// * `extensions` - Static-asset extensions to drop, in `.ext` form
/// * `placeholder` - Token substituted for every parameter value
///
/// # Returns
///
/// The ordered, deduplicated list of normalized URL strings.
pub fn clean_urls<'a, I>(urls: I, extensions: &[&str], placeholder: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut cleaned = Vec::new();

    for raw in urls {
        if raw.is_empty() {
            continue;
        }

        let mut url = match clean_url(raw) {
            Ok(url) => url,
            Err(e) => {
                warn!("Skipping malformed record {:?}: {}", raw, e);
                continue;
            }
        };

        if has_extension(&url, extensions) {
            continue;
        }

        substitute_query_values(&mut url, placeholder);

        let rendered = url.to_string();
        if seen.insert(rendered.clone()) {
            cleaned.push(rendered);
        }
    }

    cleaned
}

/// Replaces every query-parameter value with the placeholder.
///
/// Keys keep their original order and multiplicity; a valueless key (`?flag`)
/// gains `=placeholder` like any other. A URL with no parameters loses its
/// query entirely so no dangling `?` survives substitution.
fn substitute_query_values(url: &mut Url, placeholder: &str) {
    let keys: Vec<String> = url
        .query_pairs()
        .map(|(key, _)| key.into_owned())
        .collect();

    if keys.is_empty() {
        url.set_query(None);
        return;
    }

    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    for key in &keys {
        pairs.append_pair(key, placeholder);
    }
}
