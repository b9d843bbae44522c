//! Hamming distance implementation
//!
//! Counts positions where characters differ. Only defined for strings of
//! equal length; unequal lengths are reported as an error rather than a
//! sentinel so the caller can record the failure.

use super::AlgorithmError;

/// Calculate Hamming distance between two strings.
///
/// # Errors
///
/// Returns `AlgorithmError::UnequalLengths` if the inputs differ in length.
pub fn hamming_distance(a: &str, b: &str) -> Result<usize, AlgorithmError> {
    let left = a.chars().count();
    let right = b.chars().count();

    if left != right {
        return Err(AlgorithmError::UnequalLengths { left, right });
    }

    Ok(a.chars().zip(b.chars()).filter(|(ac, bc)| ac != bc).count())
}
