//! Speaker re-segmentation module
//!
//! Splits cues that span a diarization speaker change.

pub mod resegment;

pub use resegment::{resegment_by_speaker, speaker_turns, SpeakerOutcome, SpeakerStats};
