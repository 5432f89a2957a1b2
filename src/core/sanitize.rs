// src/core/sanitize.rs

/// Collapse runs of whitespace (incl. NBSP) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Keep a user id usable as part of a file name.
pub fn sanitize_filename_part(s: &str) -> String {
    let out: String = s
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if out.is_empty() { s!("user") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  The\n   Thing \t"), "The Thing");
        assert_eq!(normalize_ws("a\u{a0}\u{a0}b"), "a b");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn filename_part_drops_separators() {
        assert_eq!(sanitize_filename_part("123456"), "123456");
        assert_eq!(sanitize_filename_part("../12 34"), "1234");
        assert_eq!(sanitize_filename_part("///"), "user");
    }
}
