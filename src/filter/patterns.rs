//! Spurious text detection

use regex::{Regex, RegexBuilder};

use crate::config::FilterConfig;
use crate::error::Result;

/// Decides whether a cue text is a known recognition artifact
pub trait SpuriousPredicate: Send + Sync {
    fn is_spurious(&self, text: &str) -> bool;
}

impl<F> SpuriousPredicate for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_spurious(&self, text: &str) -> bool {
        self(text)
    }
}

/// Built-in stock phrases, matched case-insensitively against trimmed text
pub const DEFAULT_STOCK_PATTERNS: &[&str] = &[
    r"sous[\s-]?titrage",
    r"soci[eé]t[eé]\s+radio[\s-]?canada",
    r"production",
    r"r[eé]alisation",
    r"^merci\s*[.!]?\s*$",
    r"^très\s+bien\s*[.!]?\s*$",
    r"^ok\s*[.!]?\s*$",
    r"^ah\s*[.!]?\s*$",
    r"^(thanks|thank\s+you)\s*[.!]?\s*$",
    r"^\[.*\]$",
    r"^♪.*♪$",
];

/// Regex list predicate
#[derive(Debug, Clone)]
pub struct StockPhrases {
    patterns: Vec<Regex>,
}

impl StockPhrases {
    /// Compile a pattern list
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| RegexBuilder::new(p.as_ref()).case_insensitive(true).build())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// The built-in broadcast credit and acknowledgement patterns
    pub fn builtin() -> Self {
        Self::new(DEFAULT_STOCK_PATTERNS).expect("built-in stock patterns are valid")
    }

    /// Patterns from the config, or the built-in list
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        match &config.stock_patterns {
            Some(patterns) => Self::new(patterns.as_slice()),
            None => Ok(Self::builtin()),
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl SpuriousPredicate for StockPhrases {
    fn is_spurious(&self, text: &str) -> bool {
        let normalized = text.trim().to_lowercase();
        self.patterns.iter().any(|p| p.is_match(&normalized))
    }
}
