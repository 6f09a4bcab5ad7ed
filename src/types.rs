use serde::{Deserialize, Serialize};

/// A single recognized word with chunk-local timing in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordToken {
    #[serde(alias = "word")]
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl WordToken {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Character count, as used by the per-line limit
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn ends_with_any(&self, marks: &[char]) -> bool {
        self.text.chars().last().is_some_and(|c| marks.contains(&c))
    }
}

/// Recognition output for one audio chunk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChunkResult {
    #[serde(default)]
    pub words: Vec<WordToken>,
    /// Position of the chunk in the source audio, added to every local time
    #[serde(alias = "offset")]
    pub time_offset: f64,
}

impl ChunkResult {
    pub fn new(words: Vec<WordToken>, time_offset: f64) -> Self {
        Self { words, time_offset }
    }
}

/// A chunk whose recognition output is already timed text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SrtChunk {
    pub srt_content: String,
    #[serde(alias = "offset")]
    pub time_offset: f64,
}

/// A diarization turn: who speaks between `start` and `end`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerInterval {
    pub start: f64,
    pub end: f64,
    #[serde(alias = "speaker")]
    pub speaker_label: String,
}

impl SpeakerInterval {
    pub fn new(start: f64, end: f64, speaker_label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            speaker_label: speaker_label.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Whether the interval shares any time with `[start, end]`
    pub fn intersects(&self, start: f64, end: f64) -> bool {
        self.end > start && self.start < end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_token_punctuation() {
        let word = WordToken::new("world,", 0.0, 0.5);
        assert!(word.ends_with_any(&[',', ';']));
        assert!(!word.ends_with_any(&['.']));
        assert_eq!(word.char_len(), 6);
    }

    #[test]
    fn test_chunk_deserialize_aliases() {
        let chunk: ChunkResult = serde_json::from_str(
            r#"{"offset": 180.0, "words": [{"word": "bonjour", "start": 0.1, "end": 0.6}]}"#,
        )
        .unwrap();
        assert_eq!(chunk.time_offset, 180.0);
        assert_eq!(chunk.words[0].text, "bonjour");
    }

    #[test]
    fn test_speaker_interval_intersects() {
        let turn = SpeakerInterval::new(2.0, 4.0, "SPEAKER_00");
        assert!(turn.intersects(3.0, 5.0));
        assert!(turn.intersects(0.0, 2.5));
        assert!(!turn.intersects(4.0, 6.0));
        assert!(!turn.intersects(0.0, 2.0));
    }
}
