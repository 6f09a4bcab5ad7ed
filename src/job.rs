//! Job file support
//!
//! Loads the chunks and speaker intervals of one recording from JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::types::{ChunkResult, SpeakerInterval, SrtChunk};

/// Recognition output for one chunk, as words or as timed text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChunkSource {
    Srt(SrtChunk),
    Words(ChunkResult),
}

/// Job file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobFile {
    /// Chunks in any order
    #[serde(default)]
    pub chunks: Vec<ChunkSource>,
    /// Diarization output, when available
    #[serde(default)]
    pub speakers: Option<Vec<SpeakerInterval>>,
}

impl JobFile {
    /// Load a job from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Recognized words across all word-level chunks
    pub fn word_count(&self) -> usize {
        self.chunks
            .iter()
            .map(|chunk| match chunk {
                ChunkSource::Words(chunk) => chunk.words.len(),
                ChunkSource::Srt(_) => 0,
            })
            .sum()
    }
}
