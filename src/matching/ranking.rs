//! Aggregation and ranking of match records.

use crate::matching::park_matcher::ParkMatch;

/// Outcome of a search after aggregation.
///
/// An empty record set becomes [`SearchOutcome::NoMatches`] so callers
/// can tell "nothing matched" apart from an empty-but-present list.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// No strategy produced a record for any park
    NoMatches,

    /// Ranked records, duplicates across strategies preserved
    Matches(Vec<ParkMatch>),
}

impl SearchOutcome {
    /// Number of records carried by this outcome.
    pub fn record_count(&self) -> usize {
        match self {
            Self::NoMatches => 0,
            Self::Matches(records) => records.len(),
        }
    }
}

/// Rank records by embedding similarity, highest first.
///
/// Only embedding records carry a `similarity_score`; every other record
/// sorts as zero. The sort is stable, so records with equal scores keep
/// the scan's park-then-strategy order. Nothing is deduplicated: a park
/// matched by three strategies appears three times.
pub fn rank_matches(mut records: Vec<ParkMatch>) -> SearchOutcome {
    if records.is_empty() {
        return SearchOutcome::NoMatches;
    }

    records.sort_by(|a, b| {
        let a_score = a.similarity_score.unwrap_or(0.0);
        let b_score = b.similarity_score.unwrap_or(0.0);
        b_score.total_cmp(&a_score)
    });

    SearchOutcome::Matches(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::park_matcher::MatchMethod;

    fn match_record(name: &str, method: MatchMethod) -> ParkMatch {
        ParkMatch {
            park_name: name.to_string(),
            description: "No description available.".to_string(),
            features: "No features available".to_string(),
            url: "No URL available".to_string(),
            similarity_score: None,
            overlap_score: None,
            fuzzy_score: None,
            matching_method: method,
        }
    }

    fn embedding_record(name: &str, score: f32) -> ParkMatch {
        let mut record = match_record(name, MatchMethod::EmbeddingSimilarity);
        record.similarity_score = Some(score);
        record
    }

    #[test]
    fn test_empty_records_is_no_matches() {
        assert_eq!(rank_matches(Vec::new()), SearchOutcome::NoMatches);
        assert_eq!(SearchOutcome::NoMatches.record_count(), 0);
    }

    #[test]
    fn test_scored_records_sort_descending() {
        let records = vec![
            embedding_record("Low", 0.61),
            embedding_record("High", 0.93),
            embedding_record("Mid", 0.77),
        ];

        let outcome = rank_matches(records);
        let SearchOutcome::Matches(ranked) = outcome else {
            panic!("expected matches");
        };

        let names: Vec<&str> = ranked.iter().map(|r| r.park_name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn test_unscored_records_keep_scan_order() {
        let records = vec![
            match_record("First", MatchMethod::ExactPhrase),
            embedding_record("Scored", 0.88),
            match_record("Second", MatchMethod::KeywordOverlap),
            match_record("Third", MatchMethod::FuzzyMatching),
        ];

        let outcome = rank_matches(records);
        let SearchOutcome::Matches(ranked) = outcome else {
            panic!("expected matches");
        };

        let names: Vec<&str> = ranked.iter().map(|r| r.park_name.as_str()).collect();
        assert_eq!(names, vec!["Scored", "First", "Second", "Third"]);
    }

    #[test]
    fn test_equal_scores_stay_stable() {
        let records = vec![
            embedding_record("A", 0.8),
            embedding_record("B", 0.8),
            embedding_record("C", 0.8),
        ];

        let outcome = rank_matches(records);
        let SearchOutcome::Matches(ranked) = outcome else {
            panic!("expected matches");
        };

        let names: Vec<&str> = ranked.iter().map(|r| r.park_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let records = vec![
            match_record("Deer Creek State Park", MatchMethod::ExactPhrase),
            match_record("Deer Creek State Park", MatchMethod::KeywordOverlap),
            match_record("Deer Creek State Park", MatchMethod::FuzzyMatching),
        ];

        let outcome = rank_matches(records);
        assert_eq!(outcome.record_count(), 3);
    }
}
