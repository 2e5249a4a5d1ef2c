//! Last path segment of a URL.

use percent_encoding::percent_decode_str;

/// Returns the percent-decoded last non-empty path segment, ignoring query
/// and fragment. `None` if the URL does not parse or has no usable segment.
pub fn last_path_segment(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path_segments()?.filter(|s| !s.is_empty()).last()?;
    let decoded = percent_decode_str(segment).decode_utf8_lossy().into_owned();
    match decoded.as_str() {
        "" | "." | ".." => None,
        _ => Some(decoded),
    }
}
