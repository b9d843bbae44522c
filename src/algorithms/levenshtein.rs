//! Levenshtein distance implementation
//!
//! Minimum number of single-character insertions, deletions and
//! substitutions needed to turn one string into the other.
//!
//! # Complexity
//! - Time: O(m*n) where m and n are string lengths
//! - Space: O(n) using a single DP row

use smallvec::SmallVec;

/// Calculate the Levenshtein distance between two strings.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut row: SmallVec<[usize; 64]> = (0..=b_chars.len()).collect();

    for (i, ac) in a_chars.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    row[b_chars.len()]
}

/// Normalized Levenshtein similarity (0.0 to 1.0)
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    super::distance_to_similarity(levenshtein(a, b), a, b)
}
