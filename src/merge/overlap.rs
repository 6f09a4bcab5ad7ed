//! Overlap resolution across chunks

use serde::Serialize;

use super::similarity::{boundary_words_overlap, stitch_overlap, trigram_jaccard};
use crate::config::MergeConfig;
use crate::subtitle::Cue;
use crate::timecode::to_millis;

/// Counters for one merge pass
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MergeStats {
    /// Cues dropped because `start >= end`
    pub invalid_dropped: usize,
    /// Overlapping cues recognized as repeated content
    pub duplicates_merged: usize,
    /// Overlapping cues with new content, moved after the previous cue
    pub collisions_nudged: usize,
    /// Colliding cues too short to move, appended to the previous cue
    pub collisions_absorbed: usize,
}

/// Result of a merge pass
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub cues: Vec<Cue>,
    pub stats: MergeStats,
}

/// Merge cues from all chunks into one non-overlapping timeline.
///
/// Takes the complete set of cues with chunk offsets already applied. Invalid
/// cues are dropped, the rest sorted by start and walked once: each cue that
/// overlaps the last accepted one is either merged into it (repeated content
/// from the chunk overlap window) or moved to start `collision_gap_secs`
/// after it. The output satisfies `cues[i].end <= cues[i + 1].start`.
pub fn resolve_overlaps(mut cues: Vec<Cue>, config: &MergeConfig) -> MergeOutcome {
    let mut stats = MergeStats::default();
    let input = cues.len();

    cues.retain(|cue| match cue.validate() {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("Dropping cue {:?}: {}", cue.text, e);
            stats.invalid_dropped += 1;
            false
        }
    });
    cues.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut accepted: Vec<Cue> = Vec::with_capacity(cues.len());
    for cue in cues {
        let to_push = match accepted.last_mut() {
            Some(prev) if cue.start < prev.end => resolve_collision(prev, cue, config, &mut stats),
            _ => Some(cue),
        };
        if let Some(cue) = to_push {
            accepted.push(cue);
        }
    }

    tracing::info!(
        invalid = stats.invalid_dropped,
        merged = stats.duplicates_merged,
        nudged = stats.collisions_nudged,
        absorbed = stats.collisions_absorbed,
        "Merge: {} → {} cues",
        input,
        accepted.len()
    );

    MergeOutcome {
        cues: accepted,
        stats,
    }
}

/// Settle a cue that starts before `prev` ends. Returns the cue if it is
/// still to be accepted.
fn resolve_collision(
    prev: &mut Cue,
    mut cue: Cue,
    config: &MergeConfig,
    stats: &mut MergeStats,
) -> Option<Cue> {
    let similarity = trigram_jaccard(&prev.text, &cue.text);
    let shared_boundary = boundary_words_overlap(
        &prev.text,
        &cue.text,
        config.boundary_window,
        config.min_shared_words,
    );

    if similarity > config.similarity_threshold || shared_boundary {
        let stitched = stitch_overlap(&prev.text, &cue.text);
        let mut text = prev.text.clone();
        for candidate in [Some(cue.text), stitched].into_iter().flatten() {
            if candidate.chars().count() > text.chars().count() {
                text = candidate;
            }
        }

        tracing::debug!(
            similarity,
            shared_boundary,
            "Overlap: merged duplicate into {:?}",
            text
        );
        prev.text = text;
        prev.end = prev.end.max(cue.end);
        stats.duplicates_merged += 1;
        return None;
    }

    // Compared as written out, so a nudge never leaves a sub-millisecond cue.
    let nudged = prev.end + config.collision_gap_secs;
    if to_millis(nudged) < to_millis(cue.end) {
        tracing::debug!(from = cue.start, to = nudged, "Overlap: nudged {:?}", cue.text);
        cue.start = nudged;
        stats.collisions_nudged += 1;
        return Some(cue);
    }

    // Entirely inside the previous cue: keep its words rather than lose them.
    tracing::debug!("Overlap: absorbed {:?} into previous cue", cue.text);
    prev.text = format!("{} {}", prev.text.trim_end(), cue.text.trim());
    prev.end = prev.end.max(cue.end);
    stats.collisions_absorbed += 1;
    None
}
