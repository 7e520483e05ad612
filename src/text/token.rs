use unicode_segmentation::UnicodeSegmentation;

use crate::engine::config::TokenizerConfig;

/// Splits text into word, punctuation and whitespace tokens on Unicode word
/// boundaries (UAX #29). Apostrophes inside a word keep it whole, so
/// "won't" and "y'all" come out as single tokens.
///
/// A leading elision apostrophe ("'tis", "'twas") is glued onto its word when
/// it opens the text or follows whitespace, unless the word is closed by
/// another apostrophe (a quoted word keeps its quotes as separate tokens).
///
/// With `keep_whitespace` set, the returned slices concatenate back to `text`.
pub fn tokenize<'a>(text: &'a str, config: &TokenizerConfig) -> Vec<&'a str> {
    let segments: Vec<(usize, &str)> = text.split_word_bound_indices().collect();
    let mut tokens = Vec::with_capacity(segments.len());

    let mut i = 0;
    while i < segments.len() {
        let (start, segment) = segments[i];

        if starts_elided_word(&segments, i) {
            let (word_start, word) = segments[i + 1];
            tokens.push(&text[start..word_start + word.len()]);
            i += 2;
            continue;
        }

        if config.keep_whitespace || !is_whitespace(segment) {
            tokens.push(segment);
        }
        i += 1;
    }

    tokens
}

fn starts_elided_word(segments: &[(usize, &str)], i: usize) -> bool {
    if segments[i].1 != "'" {
        return false;
    }

    let at_word_start = i == 0 || is_whitespace(segments[i - 1].1);
    let followed_by_word = segments.get(i + 1).is_some_and(|&(_, s)| is_word(s));
    let quoted = segments.get(i + 2).is_some_and(|&(_, s)| s == "'");

    at_word_start && followed_by_word && !quoted
}

fn is_whitespace(segment: &str) -> bool {
    segment.chars().all(char::is_whitespace)
}

fn is_word(segment: &str) -> bool {
    segment.chars().next().is_some_and(char::is_alphanumeric)
}
