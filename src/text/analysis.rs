//! Phrase and lemma extraction over normalized text.
//!
//! [`AnalyzedText`] is the derived view the matching pipeline works with:
//! the normalized text plus its phrase set and lemma set. Both sets are
//! computed inside the constructor from the same normalized string, so
//! they can never drift apart or be supplied independently.

use super::normalize::normalize;
use super::stopwords::is_stopword;
use std::collections::HashSet;

/// Minimum number of words for a token run to count as a phrase.
/// Single content words are keywords, not phrases.
const MIN_PHRASE_WORDS: usize = 2;

/// Reduce a normalized token to a base form.
///
/// Rule-based suffix stripping: plural `-ies`/`-es`/`-s` and participle
/// `-ing`/`-ed` with doubled-consonant undo. Dictionary fidelity is not
/// the goal; queries and candidates run through the same rules, so
/// overlap comparisons stay symmetric even where a rule diverges from
/// the true lemma.
pub fn lemmatize(token: &str) -> String {
    if let Some(stem) = token.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{}y", stem);
        }
    }
    if let Some(stem) = token.strip_suffix("es") {
        if ends_with_sibilant(stem) {
            return stem.to_string();
        }
    }
    if let Some(stem) = token.strip_suffix('s') {
        if stem.len() >= 3 && !stem.ends_with('s') && !stem.ends_with('u') && !stem.ends_with('i')
        {
            return stem.to_string();
        }
    }
    // "speed", "feed": the -ed rule would mangle these
    if token.ends_with("eed") {
        return token.to_string();
    }
    if let Some(stem) = token.strip_suffix("ing") {
        if stem.len() >= 3 {
            return undouble(stem);
        }
    }
    if let Some(stem) = token.strip_suffix("ed") {
        if stem.len() >= 3 {
            return undouble(stem);
        }
    }
    token.to_string()
}

fn ends_with_sibilant(stem: &str) -> bool {
    stem.ends_with('s')
        || stem.ends_with('x')
        || stem.ends_with('z')
        || stem.ends_with("ch")
        || stem.ends_with("sh")
}

/// Drop a trailing doubled consonant ("swimm" -> "swim"), leaving
/// l/s/z doubles alone ("fall", "pass" keep their spelling).
fn undouble(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() >= 3 {
        let last = chars[chars.len() - 1];
        let prev = chars[chars.len() - 2];
        if last == prev && !is_vowel(last) && !matches!(last, 'l' | 's' | 'z') {
            return chars[..chars.len() - 1].iter().collect();
        }
    }
    stem.to_string()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Extract phrase runs from normalized text: maximal sequences of
/// consecutive non-stopword tokens, keeping runs of two or more words.
fn phrase_runs(normalized: &str) -> HashSet<String> {
    let mut phrases = HashSet::new();
    let mut run: Vec<&str> = Vec::new();

    for token in normalized.split_whitespace() {
        if is_stopword(token) {
            if run.len() >= MIN_PHRASE_WORDS {
                phrases.insert(run.join(" "));
            }
            run.clear();
        } else {
            run.push(token);
        }
    }

    if run.len() >= MIN_PHRASE_WORDS {
        phrases.insert(run.join(" "));
    }

    phrases
}

/// A normalized string together with its derived phrase and lemma sets.
///
/// Produced for both the caller's query and each candidate's comparison
/// text; [`AnalyzedText::of`] is the only constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedText {
    text: String,
    phrases: HashSet<String>,
    lemmas: HashSet<String>,
}

impl AnalyzedText {
    /// Analyze raw text: normalize it, then extract phrase runs and the
    /// lemmas of its non-stopword tokens.
    ///
    /// Empty or punctuation-only input yields empty sets; this never fails.
    pub fn of(raw: &str) -> Self {
        let text = normalize(raw);
        let phrases = phrase_runs(&text);
        let lemmas = text
            .split_whitespace()
            .filter(|token| !is_stopword(token))
            .map(lemmatize)
            .collect();

        Self {
            text,
            phrases,
            lemmas,
        }
    }

    /// The normalized text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Phrase runs found in the text (two or more content words each).
    pub fn phrases(&self) -> &HashSet<String> {
        &self.phrases
    }

    /// Lemmatized non-stopword tokens.
    pub fn lemmas(&self) -> &HashSet<String> {
        &self.lemmas
    }

    /// True when normalization left nothing to match on.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
