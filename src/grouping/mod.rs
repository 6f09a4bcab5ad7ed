//! Word grouping module
//!
//! Turns one chunk's flat word stream into readable cues:
//! - Repair of contraction tokens split by the recognizer
//! - Cue boundaries on long pauses and sentence punctuation
//! - Line breaking on the character limit, commas and short pauses
//! - Packing lines into cues of bounded line count

pub mod grouper;
pub mod repair;

pub use grouper::{group_chunk, group_words};
pub use repair::repair_tokens;
