//! Configuration file support
//!
//! Loads assembler configuration from TOML files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{AssemblerConfig, FilterConfig, GroupingConfig, MergeConfig, SpeakerConfig};
use crate::error::{Result, SubtitleError};

/// Configuration file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Word grouping settings
    pub grouping: Option<GroupingConfig>,
    /// Overlap resolution settings
    pub merge: Option<MergeConfig>,
    /// Hallucination filter settings
    pub filter: Option<FilterConfig>,
    /// Speaker re-segmentation settings
    pub speaker: Option<SpeakerConfig>,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| {
            SubtitleError::Config(format!("{}: {}", path.as_ref().display(), e))
        })
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| SubtitleError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        Self {
            grouping: Some(GroupingConfig::default()),
            merge: Some(MergeConfig::default()),
            filter: Some(FilterConfig::default()),
            speaker: Some(SpeakerConfig::default()),
            logging: Some(LoggingSettings {
                level: "info".to_string(),
                format: Some("pretty".to_string()),
            }),
        }
    }

    /// Log output format, `pretty` unless set
    pub fn log_format(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .unwrap_or("pretty")
    }

    /// Convert to AssemblerConfig
    pub fn into_assembler_config(self) -> AssemblerConfig {
        AssemblerConfig {
            grouping: self.grouping.unwrap_or_default(),
            merge: self.merge.unwrap_or_default(),
            filter: self.filter.unwrap_or_default(),
            speaker: self.speaker.unwrap_or_default(),
            log_level: self
                .logging
                .map(|l| l.level)
                .unwrap_or_else(|| "info".to_string()),
        }
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let config = ConfigFile::default_config();
    config.to_file(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default_config();
        assert_eq!(config.grouping.as_ref().unwrap().max_chars_per_line, 42);
        assert_eq!(config.filter.as_ref().unwrap().time_merge_window_secs, 3.0);
        assert_eq!(config.log_format(), "pretty");
    }

    #[test]
    fn test_config_file_roundtrip() {
        let config = ConfigFile::default_config();

        let mut temp_file = NamedTempFile::new().unwrap();
        let content = toml::to_string_pretty(&config).unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let loaded = ConfigFile::from_file(temp_file.path()).unwrap();
        assert_eq!(
            loaded.merge.unwrap().boundary_window,
            config.merge.unwrap().boundary_window
        );
    }

    #[test]
    fn test_partial_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[grouping]\nmax_chars_per_line = 32\n\n[logging]\nlevel = \"debug\"\nformat = \"json\"\n",
            )
            .unwrap();

        let loaded = ConfigFile::from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.log_format(), "json");

        let config = loaded.into_assembler_config();
        assert_eq!(config.grouping.max_chars_per_line, 32);
        assert_eq!(config.grouping.max_lines_per_cue, 2);
        assert_eq!(config.merge.similarity_threshold, 0.5);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[grouping\n").unwrap();
        assert!(matches!(
            ConfigFile::from_file(temp_file.path()),
            Err(SubtitleError::Config(_))
        ));
    }

    #[test]
    fn test_into_assembler_config() {
        let config = ConfigFile::default().into_assembler_config();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.speaker.min_words_per_segment, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generate_default_config() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();

        generate_default_config(&path).unwrap();

        assert!(path.exists());
        let loaded = ConfigFile::from_file(&path).unwrap();
        assert!(loaded.speaker.unwrap().enabled);
    }
}
