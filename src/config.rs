//! Assembler configuration

use serde::{Deserialize, Serialize};

use crate::error::{Result, SubtitleError};

/// Word grouping configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Maximum characters per subtitle line
    pub max_chars_per_line: usize,

    /// Maximum lines per cue
    pub max_lines_per_cue: usize,

    /// Cue duration after which the next punctuation closes the cue
    pub max_cue_duration_secs: f64,

    /// Pause between words that starts a new line
    pub line_pause_secs: f64,

    /// Pause between words that starts a new cue
    pub cue_pause_secs: f64,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            max_chars_per_line: 42,
            max_lines_per_cue: 2,
            max_cue_duration_secs: 7.0,
            line_pause_secs: 0.8,
            cue_pause_secs: 1.5,
        }
    }
}

/// Cross-chunk overlap resolution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Overlapping cues more similar than this are duplicates
    pub similarity_threshold: f64,

    /// Number of words compared at each side of a chunk boundary
    pub boundary_window: usize,

    /// Shared boundary words needed to call an overlap a duplicate
    pub min_shared_words: usize,

    /// Gap inserted after the previous cue when nudging a collision
    pub collision_gap_secs: f64,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.5,
            boundary_window: 5,
            min_shared_words: 2,
            collision_gap_secs: 0.1,
        }
    }
}

/// Hallucination filter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Maximum gap between near-duplicate cues that still fuse
    pub time_merge_window_secs: f64,

    /// Minimum similarity for near-duplicate fusion
    pub similarity_threshold: f64,

    /// Stock phrases longer than this many words are kept
    pub max_spurious_words: usize,

    /// Stock phrases with at least this many characters are kept
    pub max_spurious_chars: usize,

    /// Replacement for the built-in stock phrase patterns
    pub stock_patterns: Option<Vec<String>>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            time_merge_window_secs: 3.0,
            similarity_threshold: 0.9,
            max_spurious_words: 6,
            max_spurious_chars: 100,
            stock_patterns: None,
        }
    }
}

/// Speaker re-segmentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeakerConfig {
    /// Split cues on speaker changes when intervals are supplied
    pub enabled: bool,

    /// Lower bound on words handed to each speaker segment
    pub min_words_per_segment: usize,
}

impl Default for SpeakerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_words_per_segment: 1,
        }
    }
}

/// Assembler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    /// Word grouping configuration
    pub grouping: GroupingConfig,

    /// Overlap resolution configuration
    pub merge: MergeConfig,

    /// Hallucination filter configuration
    pub filter: FilterConfig,

    /// Speaker re-segmentation configuration
    pub speaker: SpeakerConfig,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            grouping: GroupingConfig::default(),
            merge: MergeConfig::default(),
            filter: FilterConfig::default(),
            speaker: SpeakerConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AssemblerConfig {
    /// Reject values that would make a stage degenerate
    pub fn validate(&self) -> Result<()> {
        let g = &self.grouping;
        if g.max_chars_per_line == 0 || g.max_lines_per_cue == 0 {
            return Err(SubtitleError::Config(
                "grouping limits must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("grouping.max_cue_duration_secs", g.max_cue_duration_secs),
            ("grouping.line_pause_secs", g.line_pause_secs),
            ("grouping.cue_pause_secs", g.cue_pause_secs),
        ] {
            if !(value > 0.0) {
                return Err(SubtitleError::Config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        for (name, value) in [
            ("merge.similarity_threshold", self.merge.similarity_threshold),
            ("filter.similarity_threshold", self.filter.similarity_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SubtitleError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        if self.merge.boundary_window == 0 || self.merge.min_shared_words == 0 {
            return Err(SubtitleError::Config(
                "merge boundary settings must be at least 1".to_string(),
            ));
        }
        if self.merge.collision_gap_secs < 0.0 || self.filter.time_merge_window_secs < 0.0 {
            return Err(SubtitleError::Config(
                "time windows cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}
