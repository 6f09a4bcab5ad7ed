//! SRT timecode codec
//!
//! Converts between `HH:MM:SS,mmm` strings and seconds as `f64`.

use crate::error::{Result, SubtitleError};

/// Convert timecode components to seconds.
///
/// The value is computed from the integer millisecond total so that it is the
/// closest `f64` to the decimal timestamp, which keeps `format_timecode` and
/// this function exact inverses at millisecond precision.
pub fn from_components(hours: u64, minutes: u64, seconds: u64, millis: u64) -> f64 {
    let total_ms = ((hours * 60 + minutes) * 60 + seconds) * 1000 + millis;
    total_ms as f64 / 1000.0
}

/// Parse a `HH:MM:SS,mmm` timestamp into seconds
pub fn parse_timecode(value: &str) -> Result<f64> {
    let caps = regex!(r"^(\d{2}):(\d{2}):(\d{2}),(\d{3})$")
        .captures(value.trim())
        .ok_or_else(|| SubtitleError::MalformedTimecode(value.to_string()))?;

    let field = |i: usize| -> Result<u64> {
        caps[i]
            .parse::<u64>()
            .map_err(|_| SubtitleError::MalformedTimecode(value.to_string()))
    };

    Ok(from_components(field(1)?, field(2)?, field(3)?, field(4)?))
}

/// Whole milliseconds a timestamp is written as.
///
/// Truncates, after rounding to the microsecond so float noise (e.g.
/// `1.001 * 1000.0 == 1000.999..`) does not push a timestamp down by one
/// millisecond. Negative values clamp to zero.
pub fn to_millis(seconds: f64) -> u64 {
    (seconds.max(0.0) * 1_000_000.0).round() as u64 / 1000
}

/// Format seconds as `HH:MM:SS,mmm`, at the resolution of [`to_millis`]
pub fn format_timecode(seconds: f64) -> String {
    let total_ms = to_millis(seconds);
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let ms = total_ms % 1000;
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_components() {
        assert_eq!(from_components(0, 0, 10, 500), 10.5);
        assert_eq!(from_components(1, 1, 1, 123), 3661.123);
    }

    #[test]
    fn test_parse_timecode() {
        assert_eq!(parse_timecode("00:00:00,000").unwrap(), 0.0);
        assert_eq!(parse_timecode("00:01:01,500").unwrap(), 61.5);
        assert_eq!(parse_timecode(" 01:01:01,123 ").unwrap(), 3661.123);
    }

    #[test]
    fn test_parse_malformed() {
        for bad in ["", "0:00:01,000", "00:00:01.000", "00:00:01,00", "aa:bb:cc,ddd"] {
            assert!(
                matches!(parse_timecode(bad), Err(SubtitleError::MalformedTimecode(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_format_timecode() {
        assert_eq!(format_timecode(0.0), "00:00:00,000");
        assert_eq!(format_timecode(61.5), "00:01:01,500");
        assert_eq!(format_timecode(3661.123), "01:01:01,123");
        assert_eq!(format_timecode(1.001), "00:00:01,001");
        assert_eq!(format_timecode(-3.0), "00:00:00,000");
    }

    #[test]
    fn test_to_millis() {
        assert_eq!(to_millis(1.2341), 1234);
        assert_eq!(to_millis(1.2345), 1234);
        assert_eq!(to_millis(1.001), 1001);
        assert_eq!(to_millis(-0.5), 0);
    }

    #[test]
    fn test_format_truncates() {
        assert_eq!(format_timecode(1.9996), "00:00:01,999");
        assert_eq!(format_timecode(59.9999), "00:00:59,999");
    }
}
