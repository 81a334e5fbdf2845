//! stockbot-match
//!
//! The product matching pipeline: fallback search against the catalog,
//! progressive narrowing with rollback, and shaping into a `MatchResult`.

pub mod filter;
pub mod matcher;
pub mod search;
pub mod shape;

pub use matcher::ProductMatcher;
