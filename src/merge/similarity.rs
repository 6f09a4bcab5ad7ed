//! Text similarity for duplicate detection

use std::collections::HashSet;

/// Set of overlapping 3-character substrings, case-folded and trimmed.
///
/// Texts shorter than three characters are their own single trigram.
fn trigrams(text: &str) -> HashSet<String> {
    let normalized = text.trim().to_lowercase();
    let chars: Vec<char> = normalized.chars().collect();
    if chars.len() < 3 {
        return HashSet::from([normalized]);
    }
    chars.windows(3).map(|w| w.iter().collect()).collect()
}

/// Jaccard similarity of the character trigram sets of two texts
pub fn trigram_jaccard(a: &str, b: &str) -> f64 {
    let left = trigrams(a);
    let right = trigrams(b);

    let union = left.union(&right).count();
    if union == 0 {
        return 1.0;
    }
    left.intersection(&right).count() as f64 / union as f64
}

/// Lowercase a word and strip everything but letters and digits
fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn normalized_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect()
}

/// Whether the end of `prev` reappears at the start of `next`.
///
/// Counts distinct words among the last `window` words of `prev` that also
/// occur among the first `window` words of `next`.
pub fn boundary_words_overlap(prev: &str, next: &str, window: usize, min_shared: usize) -> bool {
    let prev_words = normalized_words(prev);
    let next_words = normalized_words(next);

    let tail = &prev_words[prev_words.len().saturating_sub(window)..];
    let head: HashSet<&str> = next_words.iter().take(window).map(String::as_str).collect();
    let shared: HashSet<&str> = tail
        .iter()
        .map(String::as_str)
        .filter(|w| head.contains(w))
        .collect();

    shared.len() >= min_shared
}

/// Join two texts whose boundary words repeat.
///
/// Finds the longest run of words ending `prev` that also starts `next`
/// (compared normalized) and appends the rest of `next`, with its original
/// spelling, to `prev`. Returns `None` when no such run exists.
pub fn stitch_overlap(prev: &str, next: &str) -> Option<String> {
    let prev_words = normalized_words(prev);
    let next_tokens: Vec<(&str, String)> = next
        .split_whitespace()
        .map(|w| (w, normalize_word(w)))
        .collect();
    // (position in next_tokens, normalized word) for tokens that carry a word
    let next_words: Vec<(usize, &str)> = next_tokens
        .iter()
        .enumerate()
        .filter(|(_, (_, n))| !n.is_empty())
        .map(|(i, (_, n))| (i, n.as_str()))
        .collect();

    let max_run = prev_words.len().min(next_words.len());
    let run = (1..=max_run).rev().find(|&k| {
        prev_words[prev_words.len() - k..]
            .iter()
            .zip(&next_words[..k])
            .all(|(p, (_, n))| p == n)
    })?;

    let cut = next_words[run - 1].0 + 1;
    let remainder: Vec<&str> = next_tokens[cut..].iter().map(|(w, _)| *w).collect();
    if remainder.is_empty() {
        return Some(prev.to_string());
    }
    Some(format!("{} {}", prev.trim_end(), remainder.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jaccard_identical_and_disjoint() {
        assert_eq!(trigram_jaccard("bonjour", "bonjour"), 1.0);
        assert_eq!(trigram_jaccard("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_jaccard_case_and_whitespace() {
        assert_eq!(trigram_jaccard("  Hello World ", "hello world"), 1.0);
    }

    #[test]
    fn test_jaccard_short_texts() {
        assert_eq!(trigram_jaccard("ok", "ok"), 1.0);
        assert_eq!(trigram_jaccard("ok", "OK"), 1.0);
        assert_eq!(trigram_jaccard("ok", "okay"), 0.0);
        assert_eq!(trigram_jaccard("", ""), 1.0);
    }

    #[test]
    fn test_jaccard_partial() {
        // "abcd" -> {abc, bcd}, "abce" -> {abc, bce}
        let sim = trigram_jaccard("abcd", "abce");
        assert!((sim - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_boundary_words_overlap() {
        assert!(boundary_words_overlap("and then we saw the", "we saw the results", 5, 2));
        assert!(boundary_words_overlap("We SAW, the", "...we saw it", 5, 2));
        assert!(!boundary_words_overlap("the cat sat", "the dog ran", 5, 2));
        assert!(!boundary_words_overlap("", "anything here", 5, 2));
    }

    #[test]
    fn test_boundary_window_limits_comparison() {
        let prev = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
        assert!(!boundary_words_overlap(prev, "alpha beta more words", 5, 2));
        assert!(boundary_words_overlap(prev, "iota kappa more words", 5, 2));
    }

    #[test]
    fn test_stitch_overlap() {
        assert_eq!(
            stitch_overlap("and then we saw the", "we saw the results").as_deref(),
            Some("and then we saw the results")
        );
        assert_eq!(
            stitch_overlap("It was, as we said,", "As we said - great.").as_deref(),
            Some("It was, as we said, - great.")
        );
        assert_eq!(
            stitch_overlap("we saw the", "saw the").as_deref(),
            Some("we saw the")
        );
        assert_eq!(stitch_overlap("one two", "three four"), None);
    }
}
