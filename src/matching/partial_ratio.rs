//! Partial-ratio fuzzy scoring.
//!
//! Scores how well the shorter of two strings matches the best-aligned
//! window of the longer one, on a 0-100 scale. A query that appears
//! verbatim inside a long description scores 100 even though the full
//! strings differ wildly in length.

/// Compute the partial ratio between two strings.
///
/// The shorter string is slid over every same-length window of the longer
/// one; the result is the best normalized Levenshtein similarity found,
/// scaled to 0-100. Comparing two empty strings yields 100, an empty
/// string against a non-empty one yields 0.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let (shorter, longer) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    if shorter.is_empty() {
        return if longer.is_empty() { 100 } else { 0 };
    }

    let needle: String = shorter.iter().collect();
    let window_len = shorter.len();
    let mut best = 0u8;

    for start in 0..=(longer.len() - window_len) {
        let window: String = longer[start..start + window_len].iter().collect();
        let score = (strsim::normalized_levenshtein(&needle, &window) * 100.0).round() as u8;
        if score > best {
            best = score;
            if best == 100 {
                break;
            }
        }
    }

    best
}
