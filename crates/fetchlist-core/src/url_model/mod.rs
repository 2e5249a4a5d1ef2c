//! Local filename derivation for downloads given only a URL.

mod path;
mod sanitize;

pub use path::last_path_segment;
pub use sanitize::sanitize_file_name;

/// Used when the URL path yields nothing usable.
pub const FALLBACK_FILENAME: &str = "download.bin";

/// Derives a safe filename from the last segment of `url`'s path.
///
/// - `https://example.com/putty.zip` → `putty.zip`
/// - `https://example.com/` → `download.bin`
pub fn derive_filename(url: &str) -> String {
    let sanitized = match last_path_segment(url) {
        Some(segment) => sanitize_file_name(&segment),
        None => return FALLBACK_FILENAME.to_string(),
    };
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        FALLBACK_FILENAME.to_string()
    } else {
        sanitized
    }
}
