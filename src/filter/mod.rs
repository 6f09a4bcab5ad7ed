//! Hallucination filter module
//!
//! Speech recognizers emit text that was never spoken: broadcast credits
//! memorized from training data, bare acknowledgements over silence, the same
//! sentence repeated. Two passes run over the merged timeline:
//! - Stock phrase suppression through a pluggable predicate
//! - Non-destructive fusion of near-identical neighbours

pub mod hallucination;
pub mod patterns;

pub use hallucination::{
    filter_hallucinations, fuse_near_duplicates, suppress_stock_phrases, FilterOutcome, FilterStats,
};
pub use patterns::{SpuriousPredicate, StockPhrases, DEFAULT_STOCK_PATTERNS};
