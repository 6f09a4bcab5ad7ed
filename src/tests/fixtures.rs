//! Test fixtures for integration tests
//!
//! Provides synthetic transcripts for testing without a recognition backend.

use crate::job::ChunkSource;
use crate::pipeline::AssemblyJob;
use crate::types::{ChunkResult, SpeakerInterval, SrtChunk, WordToken};

/// Test transcript: the chunks of one recording plus diarization
#[derive(Debug, Clone)]
pub struct TestTranscript {
    pub name: &'static str,
    #[allow(dead_code)]
    pub description: &'static str,
    pub chunks: Vec<ChunkSource>,
    pub speakers: Option<Vec<SpeakerInterval>>,
}

impl TestTranscript {
    /// Two chunks repeating "we saw the" in their overlap window
    pub fn duplicate_overlap() -> Self {
        Self {
            name: "duplicate_overlap",
            description: "Chunk B repeats the tail of chunk A",
            chunks: vec![
                word_chunk(
                    &[
                        ("and", 10.0, 10.5),
                        ("then", 10.5, 11.0),
                        ("we", 11.25, 11.75),
                        ("saw", 11.75, 12.25),
                        ("the", 12.5, 13.0),
                    ],
                    0.0,
                ),
                word_chunk(
                    &[
                        ("we", 2.75, 3.25),
                        ("saw", 3.25, 3.75),
                        ("the", 3.75, 4.25),
                        ("results", 4.5, 6.0),
                    ],
                    10.0,
                ),
            ],
            speakers: None,
        }
    }

    /// A bare "Merci." between two real sentences
    pub fn hallucination() -> Self {
        Self {
            name: "hallucination",
            description: "Standalone acknowledgement over silence",
            chunks: vec![srt_chunk(
                "1\n00:00:00,000 --> 00:00:04,000\nBonjour à tous et bienvenue.\n\n\
                 2\n00:00:05,000 --> 00:00:05,400\nMerci.\n\n\
                 3\n00:00:09,000 --> 00:00:12,000\nOn commence par le budget.\n",
                0.0,
            )],
            speakers: None,
        }
    }

    /// One cue covering two speakers
    pub fn speaker_split() -> Self {
        Self {
            name: "speaker_split",
            description: "Speaker A then B inside one cue",
            chunks: vec![srt_chunk(
                "1\n00:00:00,000 --> 00:00:04,000\nhello there friend\n",
                0.0,
            )],
            speakers: Some(vec![
                SpeakerInterval::new(0.0, 2.0, "A"),
                SpeakerInterval::new(2.0, 4.0, "B"),
            ]),
        }
    }

    /// A silent chunk between two spoken ones
    pub fn with_empty_chunk() -> Self {
        Self {
            name: "with_empty_chunk",
            description: "Middle chunk produced no words",
            chunks: vec![
                word_chunk(
                    &[("Bonjour", 0.0, 0.5), ("à", 0.5, 0.75), ("tous.", 0.75, 1.5)],
                    0.0,
                ),
                word_chunk(&[], 30.0),
                word_chunk(
                    &[
                        ("Merci", 0.0, 0.5),
                        ("de", 0.5, 0.75),
                        ("votre", 0.75, 1.0),
                        ("présence.", 1.0, 2.0),
                    ],
                    60.0,
                ),
            ],
            speakers: None,
        }
    }

    /// A long recording cut into overlapping chunks
    ///
    /// Words are 0.3s long every 0.4s, every eighth ending a sentence.
    /// Consecutive chunks share `overlap` seconds of audio, so the words in
    /// that window appear in both. Speakers alternate about every 10 seconds.
    pub fn meeting(chunk_count: usize, chunk_secs: f64, overlap: f64) -> Self {
        const VOCABULARY: [&str; 12] = [
            "nous", "allons", "examiner", "le", "rapport", "annuel", "avec", "attention",
            "puis", "voter", "les", "propositions",
        ];

        let total = chunk_count as f64 * chunk_secs;
        let mut words = Vec::new();
        let mut i = 0usize;
        loop {
            let start = i as f64 * 0.4;
            if start + 0.3 > total {
                break;
            }
            let mut text = VOCABULARY[i % VOCABULARY.len()].to_string();
            if i % 8 == 7 {
                text.push('.');
            }
            words.push(WordToken::new(text, start, start + 0.3));
            i += 1;
        }

        let chunks = (0..chunk_count)
            .map(|c| {
                let offset = (c as f64 * chunk_secs - overlap).max(0.0);
                let end = (c + 1) as f64 * chunk_secs;
                let local = words
                    .iter()
                    .filter(|w| w.start >= offset && w.end <= end)
                    .map(|w| WordToken::new(w.text.clone(), w.start - offset, w.end - offset))
                    .collect();
                ChunkSource::Words(ChunkResult::new(local, offset))
            })
            .collect();

        // Turns change 50ms past each 10s mark, away from word boundaries.
        let turn_at = |s: usize| if s == 0 { 0.0 } else { s as f64 * 10.0 + 0.05 };
        let speakers = (0..((total - 0.05) / 10.0).ceil() as usize)
            .map(|s| {
                let label = if s % 2 == 0 { "SPEAKER_00" } else { "SPEAKER_01" };
                SpeakerInterval::new(turn_at(s), turn_at(s + 1).min(total), label)
            })
            .collect();

        Self {
            name: "meeting",
            description: "Overlapping chunks of continuous speech",
            chunks,
            speakers: Some(speakers),
        }
    }

    pub fn create_job(&self) -> AssemblyJob {
        let job = AssemblyJob::new(self.chunks.clone());
        match &self.speakers {
            Some(speakers) => job.with_speakers(speakers.clone()),
            None => job,
        }
    }
}

/// Word chunk from `(text, local start, local end)` triples
pub fn word_chunk(items: &[(&str, f64, f64)], time_offset: f64) -> ChunkSource {
    let words = items
        .iter()
        .map(|(text, start, end)| WordToken::new(*text, *start, *end))
        .collect();
    ChunkSource::Words(ChunkResult::new(words, time_offset))
}

pub fn srt_chunk(content: &str, time_offset: f64) -> ChunkSource {
    ChunkSource::Srt(SrtChunk {
        srt_content: content.to_string(),
        time_offset,
    })
}
