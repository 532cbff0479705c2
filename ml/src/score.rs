//! Relevance scoring between a query and a single log line
//!
//! Two stages, exact first with early exit. An exact substring hit scores a
//! base of 10 plus per-word bonuses, so literal recall always outranks the
//! fuzzy fallback, whose total contribution stays small by construction.

use crate::FUZZY_PREFIX_LEN;

/// Base score for the query appearing verbatim in the line
const EXACT_BASE: f64 = 10.0;

/// Bonus per identical query/line word pair after an exact hit
const WORD_EXACT_BONUS: f64 = 5.0;

/// Bonus per word pair where one word contains the other
const WORD_PARTIAL_BONUS: f64 = 2.0;

/// Weight applied to whole-string fuzzy similarity
const FUZZY_WEIGHT: f64 = 3.0;

/// Minimum similarity before the whole-string fuzzy score counts
const FUZZY_THRESHOLD: f64 = 0.5;

/// Bonus per fuzzily-matching word pair
const FUZZY_WORD_BONUS: f64 = 2.0;

/// Maximum normalized edit distance for two words to count as a fuzzy match
const FUZZY_WORD_RATIO: f64 = 0.4;

/// Score a candidate line against a query; both must be lower-cased
///
/// Returns 0 when the line is not a match at all.
pub fn score_line(query: &str, line: &str) -> f64 {
    if line.contains(query) {
        return exact_score(query, line);
    }
    fuzzy_score(query, line)
}

/// Exact stage: containment base plus word-boundary bonuses
fn exact_score(query: &str, line: &str) -> f64 {
    let mut score = EXACT_BASE;

    for query_word in query.split_whitespace() {
        for line_word in line.split_whitespace() {
            if query_word == line_word {
                score += WORD_EXACT_BONUS;
            } else if query_word.contains(line_word) || line_word.contains(query_word) {
                score += WORD_PARTIAL_BONUS;
            }
        }
    }

    score
}

/// Fuzzy stage: whole-string similarity over a bounded prefix, then
/// per-word edit-distance matching
fn fuzzy_score(query: &str, line: &str) -> f64 {
    let mut score = 0.0;

    let line_len = line.chars().count();
    let query_len = query.chars().count();
    let longest = line_len.max(query_len);

    if longest > 0 {
        let line_prefix: String = line.chars().take(FUZZY_PREFIX_LEN).collect();
        let query_prefix: String = query.chars().take(FUZZY_PREFIX_LEN).collect();
        let dist = levenshtein(&line_prefix, &query_prefix);
        let similarity = 1.0 - dist as f64 / longest as f64;
        if similarity > FUZZY_THRESHOLD {
            score += similarity * FUZZY_WEIGHT;
        }
    }

    for query_word in query.split_whitespace() {
        for line_word in line.split_whitespace() {
            let longer = query_word.chars().count().max(line_word.chars().count());
            if longer == 0 {
                continue;
            }
            let ratio = levenshtein(query_word, line_word) as f64 / longer as f64;
            if ratio < FUZZY_WORD_RATIO {
                score += FUZZY_WORD_BONUS;
            }
        }
    }

    score
}

/// Levenshtein distance between two strings
///
/// Dynamic programming over chars with two rows, O(m*n) time and
/// O(min(m,n)) space.
pub fn levenshtein(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    // Use the smaller string for columns to minimize space
    let (shorter, longer, short_len, long_len) = if len1 <= len2 {
        (&s1_chars, &s2_chars, len1, len2)
    } else {
        (&s2_chars, &s1_chars, len2, len1)
    };

    let mut prev_row: Vec<usize> = (0..=short_len).collect();
    let mut curr_row = vec![0; short_len + 1];

    for i in 1..=long_len {
        curr_row[0] = i;

        for j in 1..=short_len {
            let cost = if longer[i - 1] == shorter[j - 1] { 0 } else { 1 };

            curr_row[j] = std::cmp::min(
                std::cmp::min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short_len]
}
