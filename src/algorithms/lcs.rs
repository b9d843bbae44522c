//! Longest Common Subsequence (LCS) implementation
//!
//! Length-only computation runs in O(n) space. Everything that has to walk
//! the table back (one LCS, every LCS, the diff render) keeps the full
//! O(m*n) table and refuses inputs longer than [`MAX_LCS_TABLE_LENGTH`].
//! Enumerating every LCS can grow exponentially, so it has its own tighter
//! limits on input length and result count.

use super::AlgorithmError;
use ahash::AHashSet;

/// Maximum input length for routines that keep the full DP table.
pub const MAX_LCS_TABLE_LENGTH: usize = 10_000;

/// Maximum input length for [`lcs_backtrack_all`].
pub const MAX_LCS_ALL_LENGTH: usize = 500;

/// Maximum number of candidate subsequences [`lcs_backtrack_all`] keeps per cell.
pub const MAX_LCS_ALL_RESULTS: usize = 1_024;

/// Calculate the length of the Longest Common Subsequence.
#[must_use]
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    if a_chars.is_empty() || n == 0 {
        return 0;
    }

    let mut prev: Vec<usize> = vec![0; n + 1];
    let mut curr: Vec<usize> = vec![0; n + 1];

    for ac in &a_chars {
        for j in 1..=n {
            curr[j] = if *ac == b_chars[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Calculate LCS-based similarity (0.0 to 1.0).
/// Uses the formula: 2 * LCS_length / (len(a) + len(b))
#[must_use]
pub fn lcs_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 1.0;
    }
    (2 * lcs_length(a, b)) as f64 / total as f64
}

/// Full DP table over prefixes of both inputs.
struct LcsTable {
    a: Vec<char>,
    b: Vec<char>,
    cells: Vec<usize>,
}

impl LcsTable {
    fn build(a: &str, b: &str) -> Result<Self, AlgorithmError> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let longest = a.len().max(b.len());
        if longest > MAX_LCS_TABLE_LENGTH {
            return Err(AlgorithmError::InputTooLong {
                len: longest,
                max: MAX_LCS_TABLE_LENGTH,
            });
        }

        let width = b.len() + 1;
        let mut cells = vec![0usize; (a.len() + 1) * width];
        for i in 1..=a.len() {
            for j in 1..=b.len() {
                cells[i * width + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * width + j - 1] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + j - 1])
                };
            }
        }

        Ok(Self { a, b, cells })
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> usize {
        self.cells[i * (self.b.len() + 1) + j]
    }

    fn backtrack(&self) -> String {
        let mut out = Vec::with_capacity(self.at(self.a.len(), self.b.len()));
        let (mut i, mut j) = (self.a.len(), self.b.len());

        while i > 0 && j > 0 {
            if self.a[i - 1] == self.b[j - 1] {
                out.push(self.a[i - 1]);
                i -= 1;
                j -= 1;
            } else if self.at(i - 1, j) > self.at(i, j - 1) {
                i -= 1;
            } else {
                j -= 1;
            }
        }

        out.iter().rev().collect()
    }

    /// Every distinct LCS, built row by row over the cells that lie on an
    /// optimal path back from the bottom-right corner.
    ///
    /// Only two rows of candidate sets are alive at any time.
    fn backtrack_all(&self) -> Result<Vec<String>, AlgorithmError> {
        let (m, n) = (self.a.len(), self.b.len());
        if self.at(m, n) == 0 {
            return Ok(Vec::new());
        }

        let width = n + 1;
        let mut on_path = vec![false; (m + 1) * width];
        on_path[m * width + n] = true;
        for i in (1..=m).rev() {
            for j in (1..=n).rev() {
                if !on_path[i * width + j] {
                    continue;
                }
                if self.a[i - 1] == self.b[j - 1] {
                    on_path[(i - 1) * width + j - 1] = true;
                    continue;
                }
                if self.at(i - 1, j) >= self.at(i, j - 1) {
                    on_path[(i - 1) * width + j] = true;
                }
                if self.at(i, j - 1) >= self.at(i - 1, j) {
                    on_path[i * width + j - 1] = true;
                }
            }
        }

        let base: AHashSet<String> = std::iter::once(String::new()).collect();
        let mut prev: Vec<AHashSet<String>> = vec![base.clone(); width];
        for i in 1..=m {
            let mut curr: Vec<AHashSet<String>> = vec![AHashSet::new(); width];
            curr[0] = base.clone();
            for j in 1..=n {
                if !on_path[i * width + j] {
                    continue;
                }

                let candidates: AHashSet<String> = if self.a[i - 1] == self.b[j - 1] {
                    let c = self.a[i - 1];
                    prev[j - 1]
                        .iter()
                        .map(|prefix| {
                            let mut extended = String::with_capacity(prefix.len() + c.len_utf8());
                            extended.push_str(prefix);
                            extended.push(c);
                            extended
                        })
                        .collect()
                } else {
                    let mut merged = AHashSet::new();
                    if self.at(i - 1, j) >= self.at(i, j - 1) {
                        merged.extend(prev[j].iter().cloned());
                    }
                    if self.at(i, j - 1) >= self.at(i - 1, j) {
                        merged.extend(curr[j - 1].iter().cloned());
                    }
                    merged
                };

                if candidates.len() > MAX_LCS_ALL_RESULTS {
                    return Err(AlgorithmError::TooManySubsequences {
                        max: MAX_LCS_ALL_RESULTS,
                    });
                }
                curr[j] = candidates;
            }
            prev = curr;
        }

        let mut all: Vec<String> = std::mem::take(&mut prev[n])
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        all.sort();
        Ok(all)
    }
}

/// One longest common subsequence of `a` and `b`.
///
/// # Errors
///
/// Returns `AlgorithmError::InputTooLong` past [`MAX_LCS_TABLE_LENGTH`] chars.
pub fn lcs_backtrack(a: &str, b: &str) -> Result<String, AlgorithmError> {
    Ok(LcsTable::build(a, b)?.backtrack())
}

/// Every distinct longest common subsequence, sorted.
///
/// Empty when the inputs share no character.
///
/// # Errors
///
/// Returns `AlgorithmError::InputTooLong` past [`MAX_LCS_ALL_LENGTH`] chars and
/// `AlgorithmError::TooManySubsequences` once more than
/// [`MAX_LCS_ALL_RESULTS`] candidates build up.
pub fn lcs_backtrack_all(a: &str, b: &str) -> Result<Vec<String>, AlgorithmError> {
    let longest = a.chars().count().max(b.chars().count());
    if longest > MAX_LCS_ALL_LENGTH {
        return Err(AlgorithmError::InputTooLong {
            len: longest,
            max: MAX_LCS_ALL_LENGTH,
        });
    }
    LcsTable::build(a, b)?.backtrack_all()
}

/// Two-line diff render of `a` against `b`.
///
/// The first line is the merged character sequence; the second line marks
/// each position with `' '` (common), `'-'` (only in `a`) or `'+'` (only in `b`).
///
/// # Errors
///
/// Returns `AlgorithmError::InputTooLong` past [`MAX_LCS_TABLE_LENGTH`] chars.
pub fn lcs_diff(a: &str, b: &str) -> Result<[String; 2], AlgorithmError> {
    let table = LcsTable::build(a, b)?;
    let mut merged = Vec::new();
    let mut marks = Vec::new();
    let (mut i, mut j) = (table.a.len(), table.b.len());

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && table.a[i - 1] == table.b[j - 1] {
            merged.push(table.a[i - 1]);
            marks.push(' ');
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.at(i, j - 1) >= table.at(i - 1, j)) {
            merged.push(table.b[j - 1]);
            marks.push('+');
            j -= 1;
        } else {
            merged.push(table.a[i - 1]);
            marks.push('-');
            i -= 1;
        }
    }

    Ok([merged.iter().rev().collect(), marks.iter().rev().collect()])
}
