//! Bucket keys for pruning candidate phrases.
//!
//! A key is the lowercased first one to three characters of a span followed
//! by the span's code-point length as a zero-padded three digit number, e.g.
//! `"golang developer"` becomes `"gol016"`. Different phrases may share a
//! key, but two phrases that agree case-insensitively always do.

use std::fmt::Write;

/// Number of leading characters folded into a key.
const KEY_PREFIX_LEN: usize = 3;

/// Compute the bucket key for a non-empty span.
///
/// # Example
///
/// ```
/// use phrasemark::bucket_key;
///
/// let phrase: Vec<char> = "San Francisco, USA".chars().collect();
/// assert_eq!(bucket_key(&phrase), "san018");
/// ```
pub fn bucket_key(span: &[char]) -> String {
    let mut key = String::with_capacity(KEY_PREFIX_LEN * 4 + 3);
    write_bucket_key(span, &mut key);
    key
}

/// Write the bucket key for `span` into `key`, replacing its contents.
///
/// The matching engine keeps one buffer per search and calls this for every
/// candidate, so building keys does not allocate after the first few.
#[inline]
pub fn write_bucket_key(span: &[char], key: &mut String) {
    debug_assert!(!span.is_empty(), "bucket key of an empty span");
    key.clear();
    for c in span.iter().take(KEY_PREFIX_LEN) {
        key.extend(c.to_lowercase());
    }
    // Writing into a String cannot fail
    let _ = write!(key, "{:03}", span.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_of(s: &str) -> String {
        let chars: Vec<char> = s.chars().collect();
        bucket_key(&chars)
    }

    #[test]
    fn test_bucket_keys() {
        let cases = [
            ("golang developer", "gol016"),
            ("San Francisco, USA", "san018"),
            ("PHP", "php003"),
            ("本語", "本語002"),
            ("C", "c001"),
        ];
        for (phrase, expected) in cases {
            assert_eq!(key_of(phrase), expected, "key for {:?}", phrase);
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(key_of("GoLang Developer"), key_of("golang developer"));
    }

    #[test]
    fn test_length_over_three_digits() {
        let long = "x".repeat(1234);
        assert_eq!(key_of(&long), "xxx1234");
    }

    #[test]
    fn test_buffer_reuse() {
        let mut key = String::new();
        let a: Vec<char> = "Shipway".chars().collect();
        let b: Vec<char> = "PRC".chars().collect();
        write_bucket_key(&a, &mut key);
        assert_eq!(key, "shi007");
        write_bucket_key(&b, &mut key);
        assert_eq!(key, "prc003");
    }
}
