//! Job-scoped assembly pipeline
//!
//! Runs the stages in order over one job's complete input:
//! grouping per chunk, overlap resolution across chunks, hallucination
//! filtering, then speaker re-segmentation when intervals are supplied.
//! All state for a run lives in the returned [`AssemblyReport`].

use serde::Serialize;
use uuid::Uuid;

use crate::config::AssemblerConfig;
use crate::error::Result;
use crate::filter::{filter_hallucinations, FilterStats, SpuriousPredicate, StockPhrases};
use crate::grouping::group_chunk;
use crate::job::{ChunkSource, JobFile};
use crate::merge::{resolve_overlaps, MergeStats};
use crate::speaker::{resegment_by_speaker, SpeakerStats};
use crate::subtitle::{parse_block_text, serialize, Cue};
use crate::types::{SpeakerInterval, SrtChunk};

/// One assembly job: every chunk of a recording plus optional diarization
#[derive(Debug, Clone)]
pub struct AssemblyJob {
    pub id: Uuid,
    pub chunks: Vec<ChunkSource>,
    pub speakers: Option<Vec<SpeakerInterval>>,
}

impl AssemblyJob {
    pub fn new(chunks: Vec<ChunkSource>) -> Self {
        Self {
            id: Uuid::new_v4(),
            chunks,
            speakers: None,
        }
    }

    pub fn with_speakers(mut self, speakers: Vec<SpeakerInterval>) -> Self {
        self.speakers = Some(speakers);
        self
    }
}

impl From<JobFile> for AssemblyJob {
    fn from(file: JobFile) -> Self {
        Self {
            id: Uuid::new_v4(),
            chunks: file.chunks,
            speakers: file.speakers,
        }
    }
}

/// Counters for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssemblyStats {
    /// Cues produced by grouping or parsing, before merging
    pub chunk_cues: usize,
    pub merge: MergeStats,
    pub filter: FilterStats,
    /// Present only when re-segmentation ran
    pub speaker: Option<SpeakerStats>,
}

/// Output of one pipeline run
#[derive(Debug, Clone)]
pub struct AssemblyReport {
    pub job_id: Uuid,
    pub cues: Vec<Cue>,
    pub stats: AssemblyStats,
}

impl AssemblyReport {
    /// Render the timeline as an SRT document
    pub fn to_srt(&self) -> String {
        serialize(&self.cues)
    }
}

/// Subtitle assembler
///
/// Holds the validated configuration and the spurious text predicate. One
/// assembler can run any number of jobs; runs share no state.
pub struct Assembler {
    config: AssemblerConfig,
    predicate: Box<dyn SpuriousPredicate>,
}

impl Assembler {
    /// Create an assembler, compiling the configured stock phrase patterns
    pub fn new(config: AssemblerConfig) -> Result<Self> {
        config.validate()?;
        let predicate = StockPhrases::from_config(&config.filter)?;
        if predicate.is_empty() {
            tracing::warn!("No stock phrase patterns configured, suppression disabled");
        }
        tracing::debug!(patterns = predicate.len(), "Assembler ready");
        Ok(Self {
            config,
            predicate: Box::new(predicate),
        })
    }

    /// Replace the spurious text predicate
    pub fn with_predicate<P: SpuriousPredicate + 'static>(mut self, predicate: P) -> Self {
        self.predicate = Box::new(predicate);
        self
    }

    /// Assemble a job into one cleaned timeline.
    ///
    /// Never fails: bad words, blocks, cues and intervals are dropped and
    /// counted in the report. A job with no usable input yields an empty
    /// timeline.
    pub fn assemble(&self, job: &AssemblyJob) -> AssemblyReport {
        let span = tracing::info_span!("assemble", job_id = %job.id);
        let _guard = span.enter();

        let mut stats = AssemblyStats::default();

        // Every chunk is grouped before merging starts; a later chunk may
        // overlap any cue of an earlier one.
        let mut cues = Vec::new();
        for chunk in &job.chunks {
            match chunk {
                ChunkSource::Words(chunk) => {
                    cues.extend(group_chunk(chunk, &self.config.grouping));
                }
                ChunkSource::Srt(chunk) => cues.extend(shift_srt_chunk(chunk)),
            }
        }
        stats.chunk_cues = cues.len();
        tracing::info!(
            "Grouped {} chunks into {} cues",
            job.chunks.len(),
            stats.chunk_cues
        );

        let merged = resolve_overlaps(cues, &self.config.merge);
        stats.merge = merged.stats;

        let filtered =
            filter_hallucinations(merged.cues, self.predicate.as_ref(), &self.config.filter);
        stats.filter = filtered.stats;
        let mut cues = filtered.cues;

        match job.speakers.as_deref() {
            Some(speakers) if self.config.speaker.enabled && !speakers.is_empty() => {
                let outcome = resegment_by_speaker(cues, speakers, &self.config.speaker);
                stats.speaker = Some(outcome.stats);
                cues = outcome.cues;
            }
            Some(_) => tracing::debug!("Speaker re-segmentation skipped"),
            None => {}
        }

        tracing::info!(cues = cues.len(), "Assembly complete");

        AssemblyReport {
            job_id: job.id,
            cues,
            stats,
        }
    }

    /// Clean an existing SRT document: merge overlaps, filter
    /// hallucinations, split on speaker changes when intervals are given,
    /// and renumber.
    pub fn clean_document(&self, srt: &str, speakers: Option<&[SpeakerInterval]>) -> String {
        let mut job = AssemblyJob::new(vec![ChunkSource::Srt(SrtChunk {
            srt_content: srt.to_string(),
            time_offset: 0.0,
        })]);
        job.speakers = speakers.map(<[SpeakerInterval]>::to_vec);
        self.assemble(&job).to_srt()
    }
}

/// Parse a timed-text chunk onto the global timeline
fn shift_srt_chunk(chunk: &SrtChunk) -> Vec<Cue> {
    let cues: Vec<Cue> = parse_block_text(&chunk.srt_content)
        .into_iter()
        .map(|cue| Cue { index: 0, ..cue }.shifted(chunk.time_offset))
        .collect();

    tracing::debug!(
        offset = chunk.time_offset,
        cues = cues.len(),
        "shift_srt_chunk: done"
    );
    cues
}
