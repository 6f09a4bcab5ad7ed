//! Time-proportional cue splitting on speaker changes

use serde::Serialize;

use crate::config::SpeakerConfig;
use crate::subtitle::Cue;
use crate::timecode::to_millis;
use crate::types::SpeakerInterval;

/// Counters for one re-segmentation run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpeakerStats {
    /// Cues that spanned a speaker change
    pub cues_split: usize,
    /// Cues produced by those splits
    pub cues_created: usize,
    /// Diarization intervals ignored because `start >= end`
    pub invalid_intervals: usize,
}

/// Result of a re-segmentation run
#[derive(Debug, Clone)]
pub struct SpeakerOutcome {
    pub cues: Vec<Cue>,
    pub stats: SpeakerStats,
}

/// Split every cue that covers more than one speaker.
///
/// Words carry no timestamps at this point, so each speaker gets a share of
/// the cue's words proportional to its share of the cue's duration, in
/// reading order. This approximates the true word/speaker boundary. Every
/// sub-cue stays inside its parent's bounds and no word is dropped or
/// repeated.
pub fn resegment_by_speaker(
    cues: Vec<Cue>,
    speakers: &[SpeakerInterval],
    config: &SpeakerConfig,
) -> SpeakerOutcome {
    let mut stats = SpeakerStats::default();

    let mut intervals: Vec<SpeakerInterval> = speakers
        .iter()
        .filter(|s| {
            if s.is_valid() {
                return true;
            }
            tracing::warn!(
                "Ignoring speaker interval {:.3}-{:.3} ({})",
                s.start,
                s.end,
                s.speaker_label
            );
            stats.invalid_intervals += 1;
            false
        })
        .cloned()
        .collect();
    intervals.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut output = Vec::with_capacity(cues.len());
    for cue in cues {
        let turns = speaker_turns(&cue, &intervals);
        if turns.len() < 2 {
            output.push(cue);
            continue;
        }

        let parts = split_cue(&cue, &turns, config.min_words_per_segment.max(1));
        if parts.len() > 1 {
            tracing::debug!(
                speakers = turns.len(),
                parts = parts.len(),
                "Split cue {:?} on speaker change",
                cue.text
            );
            stats.cues_split += 1;
            stats.cues_created += parts.len();
        }
        output.extend(parts);
    }

    tracing::info!(
        split = stats.cues_split,
        created = stats.cues_created,
        "Speaker re-segmentation: {} cues",
        output.len()
    );

    SpeakerOutcome {
        cues: output,
        stats,
    }
}

/// Speaker turns inside a cue, as `(time, speaker)` in time order.
///
/// Sweeps the start and end of every interval intersecting the cue. Between
/// two boundaries the speaker is the latest-started interval still running,
/// so a speaker interrupted by a nested interval resumes when it ends. Spans
/// covered by nobody never count as a change; a change across one is placed
/// at its midpoint. Times are clipped to the cue, and turns closer than one
/// millisecond collapse into the later one.
pub fn speaker_turns<'a>(cue: &Cue, intervals: &'a [SpeakerInterval]) -> Vec<(f64, &'a str)> {
    let mut relevant: Vec<&SpeakerInterval> = intervals
        .iter()
        .filter(|i| i.intersects(cue.start, cue.end))
        .collect();
    relevant.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut bounds: Vec<f64> = relevant
        .iter()
        .flat_map(|i| [i.start, i.end])
        .map(|t| t.clamp(cue.start, cue.end))
        .filter(|t| to_millis(*t) < to_millis(cue.end))
        .collect();
    bounds.sort_by(f64::total_cmp);
    bounds.dedup();

    let mut turns: Vec<(f64, &'a str)> = Vec::new();
    let mut silent_since: Option<f64> = None;

    for t in bounds {
        let Some(&current) = relevant.iter().rev().find(|i| i.start <= t && i.end > t) else {
            silent_since.get_or_insert(t);
            continue;
        };
        let time = match silent_since.take() {
            Some(gap) if !turns.is_empty() => (gap + t) / 2.0,
            _ => t,
        };

        let label = current.speaker_label.as_str();
        match turns.last_mut() {
            Some(last) if last.1 == label => {}
            Some(last) if to_millis(time) <= to_millis(last.0) => last.1 = label,
            _ => turns.push((time, label)),
        }
    }

    turns.dedup_by(|next, prev| next.1 == prev.1);
    turns
}

fn split_cue(cue: &Cue, turns: &[(f64, &str)], min_words: usize) -> Vec<Cue> {
    let words: Vec<&str> = cue.words().collect();
    if words.len() < 2 {
        return vec![cue.clone()];
    }

    let per_word = cue.duration() / words.len() as f64;
    let mut parts: Vec<Cue> = Vec::with_capacity(turns.len());
    let mut next = 0;

    for (i, (time, _)) in turns.iter().enumerate() {
        if next >= words.len() {
            break;
        }
        let start = if i == 0 { cue.start } else { *time };
        let end = turns.get(i + 1).map_or(cue.end, |t| t.0);

        let share = ((end - start) / per_word).round() as usize;
        let take = share.max(min_words).min(words.len() - next);
        parts.push(Cue::new(start, end, words[next..next + take].join(" ")));
        next += take;
    }

    if let Some(last) = parts.last_mut() {
        if next < words.len() {
            last.text.push(' ');
            last.text.push_str(&words[next..].join(" "));
        }
        last.end = cue.end;
    }

    parts
}
