//! Response body truncation for logs
//!
//! Generated scripts and analysis payloads can run to several kilobytes;
//! debug logs only keep the head of each body.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 512;

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a response body for logging.
///
/// Bodies within the limit are returned as-is; longer ones keep the first
/// `TRUNCATE_LIMIT` bytes (cut on a char boundary) plus the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        let s = r#"{"topic":"에어프라이어"}"#;
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn long_body_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 10);
        let result = truncate_for_log(&s);
        assert!(result.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT + 10)));
    }

    #[test]
    fn hangul_not_split() {
        // 3 bytes per syllable, 512 is not a multiple of 3
        let s = "가".repeat(300);
        let result = truncate_for_log(&s);
        let head = result.split("...").next().unwrap();
        assert_eq!(head.len() % 3, 0);
    }
}
