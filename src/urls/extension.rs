//! Static-asset extension matching.

use url::Url;

/// Tests whether a URL's path ends in one of the given extensions.
///
/// Takes the final dot-delimited suffix of the last path segment, including
/// the dot, lowercases it, and looks for an exact match in `extensions`
/// (entries are expected in `.ext` form, as in
/// [`crate::config::STATIC_ASSET_EXTENSIONS`]). A last segment without a dot
/// never matches; query and fragment are irrelevant.
pub fn has_extension(url: &Url, extensions: &[&str]) -> bool {
    let Some(last_segment) = url.path_segments().and_then(|mut segments| segments.next_back())
    else {
        return false;
    };

    match last_segment.rfind('.') {
        Some(dot) => {
            let ext = last_segment[dot..].to_ascii_lowercase();
            extensions.contains(&ext.as_str())
        }
        None => false,
    }
}
