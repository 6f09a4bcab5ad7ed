//! Subtitle model and SRT codec
//!
//! This module handles the timed-text side of the pipeline:
//! - The in-memory cue representation shared by every stage
//! - Block parsing of SRT documents, skipping malformed blocks
//! - Serialization with final 1..N re-indexing

pub mod cue;
pub mod srt;

pub use cue::Cue;
pub use srt::{parse_block_text, serialize, validate_srt_format};
