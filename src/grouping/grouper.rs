//! Word-to-cue grouper

use super::repair::repair_tokens;
use crate::config::GroupingConfig;
use crate::subtitle::Cue;
use crate::types::{ChunkResult, WordToken};

/// Marks after which a new line starts
const LINE_BREAK_MARKS: [char; 2] = [',', ';'];

/// Marks that close a cue once it is over the duration limit
const CLOSING_MARKS: [char; 6] = ['.', '!', '?', ',', ':', ';'];

/// Marks that always close a cue
const TERMINAL_MARKS: [char; 4] = ['.', '!', '?', ':'];

/// Group one chunk's words into cues on the global timeline
pub fn group_chunk(chunk: &ChunkResult, config: &GroupingConfig) -> Vec<Cue> {
    let cues: Vec<Cue> = group_words(&chunk.words, config)
        .into_iter()
        .map(|cue| cue.shifted(chunk.time_offset))
        .collect();

    tracing::debug!(
        offset = chunk.time_offset,
        words = chunk.words.len(),
        cues = cues.len(),
        "group_chunk: done"
    );
    cues
}

/// Group words into cues, keeping their timestamps as given
pub fn group_words(words: &[WordToken], config: &GroupingConfig) -> Vec<Cue> {
    let tokens = repair_tokens(words);
    let mut cues = Vec::new();

    for segment in split_segments(&tokens, config) {
        let lines = break_lines(segment, config);
        for group in lines.chunks(config.max_lines_per_cue.max(1)) {
            if let Some(cue) = build_cue(group) {
                cues.push(cue);
            }
        }
    }

    cues
}

/// Split tokens into cue-sized runs.
///
/// A run ends before a pause of `cue_pause_secs`, after a token with terminal
/// punctuation, or after any closing punctuation once the run is longer than
/// `max_cue_duration_secs`. Without punctuation an over-long run keeps growing
/// rather than being cut mid-sentence.
fn split_segments<'a>(tokens: &'a [WordToken], config: &GroupingConfig) -> Vec<&'a [WordToken]> {
    let mut segments = Vec::new();
    let mut seg_start = 0;

    for i in 0..tokens.len() {
        if i > seg_start && tokens[i].start - tokens[i - 1].end >= config.cue_pause_secs {
            segments.push(&tokens[seg_start..i]);
            seg_start = i;
        }

        let token = &tokens[i];
        let running = token.end - tokens[seg_start].start;
        let closes = token.ends_with_any(&TERMINAL_MARKS)
            || (running > config.max_cue_duration_secs && token.ends_with_any(&CLOSING_MARKS));
        if closes {
            segments.push(&tokens[seg_start..=i]);
            seg_start = i + 1;
        }
    }

    if seg_start < tokens.len() {
        segments.push(&tokens[seg_start..]);
    }
    segments
}

/// Break a run into display lines
fn break_lines<'a>(segment: &'a [WordToken], config: &GroupingConfig) -> Vec<&'a [WordToken]> {
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut line_len = 0;

    for (i, token) in segment.iter().enumerate() {
        if i > line_start {
            let prev = &segment[i - 1];
            let too_long = line_len + 1 + token.char_len() > config.max_chars_per_line;
            let after_comma = prev.ends_with_any(&LINE_BREAK_MARKS);
            let paused = token.start - prev.end >= config.line_pause_secs;
            if too_long || after_comma || paused {
                lines.push(&segment[line_start..i]);
                line_start = i;
            }
        }

        line_len = if i == line_start {
            token.char_len()
        } else {
            line_len + 1 + token.char_len()
        };
    }

    if line_start < segment.len() {
        lines.push(&segment[line_start..]);
    }
    lines
}

fn build_cue(lines: &[&[WordToken]]) -> Option<Cue> {
    let first = lines.first()?.first()?;
    let last = lines.last()?.last()?;

    let text = lines
        .iter()
        .map(|line| {
            line.iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n");

    let cue = Cue::new(first.start, last.end, text);
    match cue.validate() {
        Ok(()) => Some(cue),
        Err(e) => {
            tracing::debug!("Dropping grouped cue {:?}: {}", cue.text, e);
            None
        }
    }
}
