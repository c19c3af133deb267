//! Character-boundary-safe string helpers.

/// Cap a string at `max` characters, never splitting a scalar value.
///
/// Returns the original slice when it is already short enough; overflow is
/// truncated, never rejected.
pub fn cap_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_string_untouched() {
        assert_eq!(cap_chars("hola", 10), "hola");
    }

    #[test]
    fn test_exact_length_untouched() {
        assert_eq!(cap_chars("hola", 4), "hola");
    }

    #[test]
    fn test_overflow_truncated_to_exactly_max() {
        let s = "x".repeat(2001);
        assert_eq!(cap_chars(&s, 2000).chars().count(), 2000);
    }

    #[test]
    fn test_multibyte_boundary_respected() {
        // "ñ" is two bytes; a byte-based slice at 3 would panic.
        assert_eq!(cap_chars("añejo", 2), "añ");
    }
}
