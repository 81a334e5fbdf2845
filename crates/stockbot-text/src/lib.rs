//! stockbot-text
//!
//! Text canonicalization, bigram similarity and the attribute extractors that
//! turn a customer utterance into an `ExtractedQuery`.

pub mod extract;
pub mod normalize;
pub mod similarity;
pub mod vocabulary;

pub use extract::Extractor;
pub use normalize::normalize;
pub use similarity::similarity;
