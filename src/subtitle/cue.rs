//! Subtitle cue model

use serde::{Deserialize, Serialize};

use crate::error::{Result, SubtitleError};
use crate::timecode::to_millis;

/// A single subtitle cue with timing in seconds
///
/// `index` is a placeholder (0) until [`crate::subtitle::serialize`] assigns
/// the final numbering. `text` may contain one `\n` line break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Cue {
    /// Create a new cue with a placeholder index
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            index: 0,
            start,
            end,
            text: text.into(),
        }
    }

    /// Get the duration in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// True when the cue still spans at least one millisecond once its
    /// timestamps are written out
    pub fn is_valid(&self) -> bool {
        to_millis(self.start) < to_millis(self.end)
    }

    /// Check the `start < end` invariant at millisecond resolution
    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SubtitleError::InvalidInterval {
                start: self.start,
                end: self.end,
            })
        }
    }

    /// Whitespace-separated words, across line breaks
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /// Shift both timestamps by `offset` seconds
    pub fn shifted(mut self, offset: f64) -> Self {
        self.start += offset;
        self.end += offset;
        self
    }
}
