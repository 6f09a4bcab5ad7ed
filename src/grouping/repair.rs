//! Token repair

use crate::types::WordToken;

/// Leading characters that glue a token onto the previous one
const JOIN_MARKERS: [char; 4] = ['\'', '\u{2019}', '-', '\u{2013}'];

/// Re-attach contraction fragments to the preceding word.
///
/// Some recognizers emit `l` `'homme` or `aujourd` `'hui` as separate tokens.
/// A token starting with an apostrophe, hyphen or en-dash is appended to the
/// previous token without a space and extends its end time. Because the two
/// become a single token, no later line or cue break can separate them.
/// Blank tokens are dropped.
pub fn repair_tokens(words: &[WordToken]) -> Vec<WordToken> {
    let mut out: Vec<WordToken> = Vec::with_capacity(words.len());

    for word in words {
        let text = word.text.trim();
        if text.is_empty() {
            continue;
        }

        let joins = text.starts_with(&JOIN_MARKERS[..]);
        match out.last_mut() {
            Some(prev) if joins => {
                prev.text.push_str(text);
                prev.end = prev.end.max(word.end);
            }
            _ => out.push(WordToken::new(text, word.start, word.end)),
        }
    }

    out
}
