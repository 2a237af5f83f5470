//! Spelling correction over the dictionary headword list.
//!
//! A failed lookup gets one shot at redemption: the closest headword by
//! Levenshtein edit distance, if any sits within [`MAX_EDIT_DISTANCE`].

use crate::types::normalize_word;

/// Largest edit distance still considered "close enough" to suggest.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// Levenshtein edit distance between two strings, counted in `char`s.
///
/// Classic dynamic program with two rolling rows, so memory stays
/// proportional to the shorter dimension rather than the full matrix.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j] + substitution)
                .min(prev[j + 1] + 1)
                .min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// The candidate closest to `word`, or `None` when nothing is within
/// [`MAX_EDIT_DISTANCE`].
///
/// Ties go to the candidate encountered first, so a caller feeding
/// candidates in a stable order gets a stable suggestion. Candidates are
/// expected to be normalized already (dictionary headwords are); the query
/// is normalized here.
pub fn nearest<'a>(word: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let word = normalize_word(word);
    let mut best: Option<(&str, usize)> = None;

    for candidate in candidates {
        let distance = levenshtein(&word, candidate);
        if distance > MAX_EDIT_DISTANCE {
            continue;
        }
        match best {
            Some((_, d)) if d <= distance => {}
            _ => best = Some((candidate, distance)),
        }
    }

    best.map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn distance_of_identical_strings_is_zero() {
        assert_eq!(levenshtein("apple", "apple"), 0);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn distance_from_empty_is_length() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn textbook_distances() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("appl", "apple"), 1);
    }

    #[test]
    fn distance_is_symmetric() {
        for (a, b) in [("kitten", "sitting"), ("apple", "appel"), ("a", "zzz")] {
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
        }
    }

    #[test]
    fn triangle_inequality_holds() {
        let words = ["apple", "apply", "ample", "maple"];
        for a in words {
            for b in words {
                for c in words {
                    assert!(levenshtein(a, c) <= levenshtein(a, b) + levenshtein(b, c));
                }
            }
        }
    }

    #[test]
    fn nearest_picks_the_closest_candidate() {
        let candidates = ["banana", "apple", "carrot"];
        assert_eq!(nearest("appl", candidates), Some("apple"));
    }

    #[test]
    fn nearest_rejects_everything_past_the_threshold() {
        let candidates = ["banana", "apple", "carrot"];
        assert_eq!(nearest("xyz", candidates), None);
    }

    #[test]
    fn distance_two_is_in_three_is_out() {
        assert_eq!(nearest("aple", ["apple"]), Some("apple"));
        assert_eq!(nearest("ale", ["apple"]), Some("apple"));
        assert_eq!(nearest("ae", ["apple"]), None);
    }

    #[test]
    fn ties_go_to_the_first_candidate_seen() {
        // "cart" is distance 1 from both; order decides.
        assert_eq!(nearest("cart", ["card", "care"]), Some("card"));
        assert_eq!(nearest("cart", ["care", "card"]), Some("care"));
    }

    #[test]
    fn query_is_normalized_before_comparison() {
        assert_eq!(nearest("  APPL ", ["apple"]), Some("apple"));
    }
}
