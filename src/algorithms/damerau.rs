//! Damerau-Levenshtein distance implementations
//!
//! Two variants are provided:
//! - [`damerau_levenshtein`]: the unrestricted distance, where a substring
//!   may be edited again after a transposition. Needs a full table, so
//!   inputs are capped at [`MAX_DAMERAU_LENGTH`] characters.
//! - [`optimal_string_alignment`]: the restricted variant (OSA), where no
//!   substring is edited more than once. Runs in three rolling rows.

use super::AlgorithmError;
use ahash::AHashMap;
use smallvec::SmallVec;

/// Maximum input length for the full-table variant.
pub const MAX_DAMERAU_LENGTH: usize = 10_000;

/// Unrestricted Damerau-Levenshtein distance.
///
/// # Errors
///
/// Returns `AlgorithmError::InputTooLong` when either input exceeds
/// [`MAX_DAMERAU_LENGTH`] characters.
pub fn damerau_levenshtein(a: &str, b: &str) -> Result<usize, AlgorithmError> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    let longest = m.max(n);
    if longest > MAX_DAMERAU_LENGTH {
        return Err(AlgorithmError::InputTooLong {
            len: longest,
            max: MAX_DAMERAU_LENGTH,
        });
    }
    if m == 0 || n == 0 {
        return Ok(longest);
    }

    let width = n + 2;
    let max_dist = m + n;
    let mut table = vec![0usize; (m + 2) * width];
    let idx = |i: usize, j: usize| i * width + j;

    table[idx(0, 0)] = max_dist;
    for i in 0..=m {
        table[idx(i + 1, 0)] = max_dist;
        table[idx(i + 1, 1)] = i;
    }
    for j in 0..=n {
        table[idx(0, j + 1)] = max_dist;
        table[idx(1, j + 1)] = j;
    }

    // Last row in which each character of `a` was seen
    let mut last_row: AHashMap<char, usize> = AHashMap::new();

    for i in 1..=m {
        let mut last_match_col = 0;
        for j in 1..=n {
            let i1 = last_row.get(&b_chars[j - 1]).copied().unwrap_or(0);
            let j1 = last_match_col;
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };

            let substitution = table[idx(i, j)] + cost;
            let insertion = table[idx(i + 1, j)] + 1;
            let deletion = table[idx(i, j + 1)] + 1;
            let transposition = table[idx(i1, j1)] + (i - i1 - 1) + 1 + (j - j1 - 1);

            table[idx(i + 1, j + 1)] = substitution.min(insertion).min(deletion).min(transposition);
        }
        last_row.insert(a_chars[i - 1], i);
    }

    Ok(table[idx(m + 1, n + 1)])
}

/// Optimal string alignment distance (restricted Damerau-Levenshtein).
#[must_use]
pub fn optimal_string_alignment(a: &str, b: &str) -> usize {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Three rows are needed to look back over a transposition
    let mut prev2_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut prev_row: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            let mut best = (prev_row[j] + 1)
                .min(curr_row[j - 1] + 1)
                .min(prev_row[j - 1] + cost);

            if i > 1
                && j > 1
                && a_chars[i - 1] == b_chars[j - 2]
                && a_chars[i - 2] == b_chars[j - 1]
            {
                best = best.min(prev2_row[j - 2] + 1);
            }
            curr_row[j] = best;
        }
        std::mem::swap(&mut prev2_row, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}
