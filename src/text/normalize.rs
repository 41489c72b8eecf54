//! Text normalization shared by queries and candidate fields.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());

/// Normalize free text for comparison: lowercase, trim, and remove every
/// character that is not a lowercase letter, digit, or whitespace.
///
/// Punctuation is deleted rather than replaced, so hyphenated words fuse
/// ("rock-climbing" becomes "rockclimbing"). Both sides of every
/// comparison go through this function, which keeps the fusing harmless.
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    NON_ALNUM_RE.replace_all(&lowered, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(normalize("  Hocking Hills  "), "hocking hills");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(
            normalize("Ohio's #1 park, honestly!"),
            "ohios 1 park honestly"
        );
    }

    #[test]
    fn test_hyphens_fuse_words() {
        assert_eq!(normalize("rock-climbing"), "rockclimbing");
    }

    #[test]
    fn test_preserves_interior_whitespace() {
        assert_eq!(normalize("a  b"), "a  b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!!"), "");
    }
}
