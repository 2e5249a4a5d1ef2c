//! Filename cleanup for names taken from URLs.

/// Linux NAME_MAX.
const MAX_NAME_BYTES: usize = 255;

fn is_separator_like(c: char) -> bool {
    matches!(c, '/' | '\\' | ':' | ' ') || c.is_control()
}

/// Makes `name` safe to use as a single path component.
///
/// Path separators, `:`, spaces and control characters become `_` (runs
/// collapse to one). Leading and trailing dots and underscores are trimmed,
/// and the result is cut to 255 bytes on a char boundary.
pub fn sanitize_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if is_separator_like(c) {
            if !out.ends_with('_') {
                out.push('_');
            }
        } else {
            out.push(c);
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    let mut end = trimmed.len().min(MAX_NAME_BYTES);
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_become_underscores() {
        assert_eq!(sanitize_file_name("a/b\\c:d.txt"), "a_b_c_d.txt");
        assert_eq!(sanitize_file_name("tab\there"), "tab_here");
    }

    #[test]
    fn runs_collapse() {
        assert_eq!(sanitize_file_name("x  //  y.zip"), "x_y.zip");
    }

    #[test]
    fn trims_edges() {
        assert_eq!(sanitize_file_name(" ..hidden.. "), "hidden");
        assert_eq!(sanitize_file_name("..."), "");
    }

    #[test]
    fn long_names_truncate_on_char_boundary() {
        let long = "é".repeat(200);
        let out = sanitize_file_name(&long);
        assert!(out.len() <= MAX_NAME_BYTES);
        assert!(out.chars().all(|c| c == 'é'));
    }
}
