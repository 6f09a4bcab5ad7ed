use thiserror::Error;

/// Main error type for subtitle assembly
///
/// Pipeline stages recover from the per-cue variants locally: they log the
/// error, count it and move on. Only the outer surface (config, job files,
/// pattern compilation) propagates errors to the caller. An empty input is
/// not an error at all; it produces an empty document.
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// A timestamp string did not match `HH:MM:SS,mmm`
    #[error("Malformed timecode: {0}")]
    MalformedTimecode(String),

    /// A timed-text block had no usable index or timing line
    #[error("Malformed cue block: {0}")]
    MalformedBlock(String),

    /// A cue or speaker interval whose start is not before its end
    #[error("Invalid interval: start={start:.3}, end={end:.3}")]
    InvalidInterval { start: f64, end: f64 },

    /// A hallucination pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The job description could not be decoded
    #[error("Job input error: {0}")]
    Json(#[from] serde_json::Error),

    /// A standard I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SubtitleError>;
