//! Hallucination filter passes

use serde::Serialize;

use super::patterns::SpuriousPredicate;
use crate::config::FilterConfig;
use crate::merge::trigram_jaccard;
use crate::subtitle::Cue;

/// Counters for one filter run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterStats {
    /// Short cues matching a stock phrase
    pub stock_phrases_dropped: usize,
    /// Near-identical neighbours folded into the previous cue
    pub near_duplicates_fused: usize,
}

/// Result of a filter run
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub cues: Vec<Cue>,
    pub stats: FilterStats,
}

/// Run stock phrase suppression, then near-duplicate fusion.
///
/// Input must already be a merged timeline. Both passes only remove cues or
/// extend an end time up to the following cue's end, so ordering and the
/// non-overlap invariant carry over.
pub fn filter_hallucinations(
    cues: Vec<Cue>,
    predicate: &dyn SpuriousPredicate,
    config: &FilterConfig,
) -> FilterOutcome {
    let input = cues.len();
    let mut stats = FilterStats::default();

    let cues = suppress_stock_phrases(cues, predicate, config, &mut stats);
    let cues = fuse_near_duplicates(cues, config, &mut stats);

    tracing::info!(
        dropped = stats.stock_phrases_dropped,
        fused = stats.near_duplicates_fused,
        "Cleaning: {} → {} subtitles",
        input,
        cues.len()
    );

    FilterOutcome { cues, stats }
}

/// Drop short cues the predicate flags.
///
/// Only cues with at most `max_spurious_words` words and fewer than
/// `max_spurious_chars` characters are candidates; longer text is assumed to
/// be real speech even when it contains a stock phrase. Blank cues are kept.
pub fn suppress_stock_phrases(
    cues: Vec<Cue>,
    predicate: &dyn SpuriousPredicate,
    config: &FilterConfig,
    stats: &mut FilterStats,
) -> Vec<Cue> {
    cues.into_iter()
        .filter(|cue| {
            let text = cue.text.trim();
            if text.is_empty() {
                return true;
            }
            let short = cue.word_count() <= config.max_spurious_words
                && text.chars().count() < config.max_spurious_chars;
            if short && predicate.is_spurious(text) {
                tracing::debug!("Blocked stock phrase hallucination: {:?}", text);
                stats.stock_phrases_dropped += 1;
                return false;
            }
            true
        })
        .collect()
}

/// Fold near-identical neighbours into the earlier cue.
///
/// A cue starting within `time_merge_window_secs` of the previous cue's end
/// and at least `similarity_threshold` similar to it only extends the previous
/// cue's end. Text is never truncated: a false positive costs a timing
/// change, not speech.
pub fn fuse_near_duplicates(
    cues: Vec<Cue>,
    config: &FilterConfig,
    stats: &mut FilterStats,
) -> Vec<Cue> {
    let mut output: Vec<Cue> = Vec::with_capacity(cues.len());

    for cue in cues {
        if let Some(last) = output.last_mut() {
            let blank = cue.text.trim().is_empty() || last.text.trim().is_empty();
            let near = cue.start - last.end <= config.time_merge_window_secs;
            if !blank
                && near
                && trigram_jaccard(&cue.text, &last.text) >= config.similarity_threshold
            {
                tracing::debug!("Fused similar cue: {:?}", cue.text);
                last.end = last.end.max(cue.end);
                stats.near_duplicates_fused += 1;
                continue;
            }
        }
        output.push(cue);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::StockPhrases;

    fn run(cues: Vec<Cue>) -> FilterOutcome {
        filter_hallucinations(cues, &StockPhrases::builtin(), &FilterConfig::default())
    }

    #[test]
    fn test_standalone_merci_dropped() {
        let outcome = run(vec![
            Cue::new(0.0, 4.0, "Bonjour à tous et bienvenue."),
            Cue::new(5.0, 5.4, "Merci."),
            Cue::new(9.0, 12.0, "On commence par le budget."),
        ]);
        let texts: Vec<_> = outcome.cues.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Bonjour à tous et bienvenue.", "On commence par le budget."]);
        assert_eq!(outcome.stats.stock_phrases_dropped, 1);
    }

    #[test]
    fn test_long_text_with_stock_phrase_kept() {
        let outcome = run(vec![Cue::new(
            0.0,
            5.0,
            "la production de cette année a doublé dans nos usines",
        )]);
        assert_eq!(outcome.cues.len(), 1);
        assert_eq!(outcome.stats.stock_phrases_dropped, 0);
    }

    #[test]
    fn test_blank_cue_kept() {
        let outcome = run(vec![Cue::new(0.0, 1.0, " "), Cue::new(1.0, 2.0, " ")]);
        assert_eq!(outcome.cues.len(), 2);
    }

    #[test]
    fn test_near_duplicates_fused() {
        let outcome = run(vec![
            Cue::new(0.0, 2.0, "Nous allons voter maintenant."),
            Cue::new(3.5, 5.0, "Nous allons voter maintenant."),
            Cue::new(5.0, 7.0, "Le vote est ouvert."),
        ]);
        assert_eq!(outcome.cues.len(), 2);
        assert_eq!(outcome.cues[0].start, 0.0);
        assert_eq!(outcome.cues[0].end, 5.0);
        assert_eq!(outcome.cues[0].text, "Nous allons voter maintenant.");
        assert_eq!(outcome.stats.near_duplicates_fused, 1);
        assert!(outcome.cues[0].end <= outcome.cues[1].start);
    }

    #[test]
    fn test_duplicates_outside_window_kept() {
        let outcome = run(vec![
            Cue::new(0.0, 2.0, "Nous allons voter maintenant."),
            Cue::new(6.0, 8.0, "Nous allons voter maintenant."),
        ]);
        assert_eq!(outcome.cues.len(), 2);
    }

    #[test]
    fn test_custom_predicate() {
        let predicate = |text: &str| text.eq_ignore_ascii_case("um");
        let mut stats = FilterStats::default();
        let cues = suppress_stock_phrases(
            vec![Cue::new(0.0, 1.0, "Um"), Cue::new(1.0, 2.0, "Merci.")],
            &predicate,
            &FilterConfig::default(),
            &mut stats,
        );
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "Merci.");
    }
}
