//! Cross-chunk merge module
//!
//! Chunks overlap in the source audio so no word is lost at a cut. This
//! module turns that redundancy back into a single timeline:
//! - Text similarity measures used to recognize repeated content
//! - A single greedy pass that merges duplicates and nudges collisions

pub mod overlap;
pub mod similarity;

pub use overlap::{resolve_overlaps, MergeOutcome, MergeStats};
pub use similarity::{boundary_words_overlap, stitch_overlap, trigram_jaccard};
