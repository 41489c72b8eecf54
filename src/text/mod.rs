//! Query and candidate text analysis.
//!
//! Normalization, stopword filtering, lemmatization, and phrase
//! extraction. The matching pipeline runs every query and every
//! candidate comparison string through the same [`AnalyzedText`]
//! constructor, so the two sides are always directly comparable.

pub mod analysis;
pub mod normalize;
pub mod stopwords;

pub use analysis::{lemmatize, AnalyzedText};
pub use normalize::normalize;
pub use stopwords::{is_stopword, STOPWORDS};
