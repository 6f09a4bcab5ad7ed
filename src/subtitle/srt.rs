//! SRT block parsing and serialization

use super::cue::Cue;
use crate::error::{Result, SubtitleError};
use crate::timecode::{format_timecode, from_components};

/// Parse an SRT document into cues.
///
/// Blocks are separated by blank lines. A block without a numeric index line,
/// a valid `start --> end` line or any text is skipped; upstream generators
/// are imperfect and one bad block must not sink the document. Cue indices
/// are kept as read, and invalid intervals are left for later stages to drop.
pub fn parse_block_text(text: &str) -> Vec<Cue> {
    let normalized = text.replace("\r\n", "\n");
    let mut cues = Vec::new();
    let mut skipped = 0usize;

    for block in regex!(r"\n\s*\n").split(normalized.trim()) {
        if block.trim().is_empty() {
            continue;
        }
        match parse_block(block) {
            Ok(cue) => cues.push(cue),
            Err(e) => {
                skipped += 1;
                tracing::debug!("Skipping SRT block: {}", e);
            }
        }
    }

    if skipped > 0 {
        tracing::debug!(parsed = cues.len(), skipped, "parse_block_text: done");
    }
    cues
}

fn parse_block(block: &str) -> Result<Cue> {
    let mut lines = block.trim().lines();

    let index_line = lines.next().unwrap_or_default().trim();
    let index = index_line
        .parse::<usize>()
        .map_err(|_| SubtitleError::MalformedBlock(format!("bad index line {:?}", index_line)))?;

    let time_line = lines
        .next()
        .ok_or_else(|| SubtitleError::MalformedBlock(format!("cue {} has no timing line", index)))?;
    let caps = regex!(r"^\s*(\d{2}):(\d{2}):(\d{2}),(\d{3})\s*-->\s*(\d{2}):(\d{2}):(\d{2}),(\d{3})")
        .captures(time_line)
        .ok_or_else(|| SubtitleError::MalformedTimecode(time_line.to_string()))?;

    // Captures are fixed-width digit runs, always valid u64.
    let n = |i: usize| caps[i].parse::<u64>().unwrap_or_default();
    let start = from_components(n(1), n(2), n(3), n(4));
    let end = from_components(n(5), n(6), n(7), n(8));

    let text = lines.map(str::trim_end).collect::<Vec<_>>().join("\n");
    if text.trim().is_empty() {
        return Err(SubtitleError::MalformedBlock(format!(
            "cue {} has no text",
            index
        )));
    }

    Ok(Cue {
        index,
        start,
        end,
        text,
    })
}

/// Serialize cues as an SRT document.
///
/// This is the only place final indices are assigned: cues are numbered
/// 1..N in input order. Cues violating `start < end` are never written; the
/// check is made on the millisecond timestamps, so a cue shorter than one
/// millisecond cannot come out as `X --> X`.
pub fn serialize(cues: &[Cue]) -> String {
    let mut out = String::new();
    let mut index = 0usize;

    for cue in cues {
        if let Err(e) = cue.validate() {
            tracing::warn!("Not serializing cue {:?}: {}", cue.text, e);
            continue;
        }
        index += 1;
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            index,
            format_timecode(cue.start),
            format_timecode(cue.end),
            cue.text
        ));
    }

    out
}

/// Check whether a string looks like an SRT document
pub fn validate_srt_format(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    regex!(r"\d+\s*\n\d{2}:\d{2}:\d{2},\d{3}\s*-->\s*\d{2}:\d{2}:\d{2},\d{3}")
        .is_match(&text.replace("\r\n", "\n"))
}
