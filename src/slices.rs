//! Order-insensitive sequence equality

use ahash::AHashMap;
use std::hash::Hash;

/// Whether two result slices match when both were never populated.
///
/// Used by [`SequenceResult::is_match`](crate::results::SequenceResult): two
/// results that both failed carry no values and are compared by their errors.
pub const NIL_SLICES_MATCH: bool = true;

/// Multiset equality: same elements with the same multiplicities, any order.
///
/// `None` is an absent sequence, distinct from an empty one. Two absent
/// sequences are equal only when `nil_equal` is set.
///
/// ```
/// use fuzzyledger::slices::compare_slices;
///
/// let a = ["to", "be", "or"];
/// let b = ["or", "to", "be"];
/// assert!(compare_slices(Some(&a[..]), Some(&b[..]), false));
/// assert!(compare_slices::<&str>(None, None, true));
/// assert!(!compare_slices::<&str>(None, None, false));
/// ```
pub fn compare_slices<T: Eq + Hash>(a: Option<&[T]>, b: Option<&[T]>, nil_equal: bool) -> bool {
    let (a, b) = match (a, b) {
        (None, None) => return nil_equal,
        (Some(a), Some(b)) => (a, b),
        _ => return false,
    };
    if a.len() != b.len() {
        return false;
    }

    let mut counts: AHashMap<&T, isize> = AHashMap::with_capacity(a.len());
    for item in a {
        *counts.entry(item).or_insert(0) += 1;
    }
    for item in b {
        match counts.get_mut(item) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}
