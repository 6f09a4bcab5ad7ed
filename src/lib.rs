//! Subtitle assembly engine
//!
//! Turns word-level transcription output from overlapping audio chunks into
//! a single SRT timeline: words are grouped into readable cues per chunk,
//! chunks are merged across their overlap windows, recognition
//! hallucinations are filtered out, and cues spanning a speaker change are
//! split using diarization intervals.

// helper.
macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

pub(crate) mod config;
pub(crate) mod config_file;
pub(crate) mod error;
pub(crate) mod filter;
pub(crate) mod grouping;
pub(crate) mod job;
pub(crate) mod merge;
pub(crate) mod pipeline;
pub(crate) mod speaker;
pub(crate) mod subtitle;
pub(crate) mod timecode;
pub(crate) mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use config::{AssemblerConfig, FilterConfig, GroupingConfig, MergeConfig, SpeakerConfig};
pub use config_file::{generate_default_config, ConfigFile, LoggingSettings};
pub use error::{Result, SubtitleError};
pub use filter::{
    filter_hallucinations, fuse_near_duplicates, suppress_stock_phrases, FilterOutcome, FilterStats,
    SpuriousPredicate, StockPhrases, DEFAULT_STOCK_PATTERNS,
};
pub use grouping::{group_chunk, group_words, repair_tokens};
pub use job::{ChunkSource, JobFile};
pub use merge::{
    boundary_words_overlap, resolve_overlaps, stitch_overlap, trigram_jaccard, MergeOutcome,
    MergeStats,
};
pub use pipeline::{Assembler, AssemblyJob, AssemblyReport, AssemblyStats};
pub use speaker::{resegment_by_speaker, speaker_turns, SpeakerOutcome, SpeakerStats};
pub use subtitle::{parse_block_text, serialize, validate_srt_format, Cue};
pub use timecode::{format_timecode, from_components, parse_timecode, to_millis};
pub use types::{ChunkResult, SpeakerInterval, SrtChunk, WordToken};
