//! Shingle (q-gram) extraction and the set/profile coefficients built on it
//!
//! A shingle of size `k` is a window of `k` consecutive characters. Size `0`
//! switches to word shingles: the Unicode words of the input. Inputs shorter
//! than `k` characters yield themselves as a single shingle so short strings
//! still compare.
//!
//! # Complexity
//! - Time: O(m+n) for extraction and comparison
//! - Space: O(m+n) for the profiles

use ahash::{AHashMap, AHashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Shingle profile: shingle -> occurrence count.
pub type ShingleProfile = AHashMap<String, usize>;

fn for_each_shingle<'a>(s: &'a str, k: usize, mut visit: impl FnMut(&'a str)) {
    if s.is_empty() {
        return;
    }
    if k == 0 {
        s.unicode_words().for_each(visit);
        return;
    }

    let boundaries: Vec<usize> = s
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .collect();
    let char_count = boundaries.len() - 1;

    if char_count < k {
        visit(s);
        return;
    }
    for start in 0..=(char_count - k) {
        visit(&s[boundaries[start]..boundaries[start + k]]);
    }
}

/// Count every shingle of size `k` in `s`.
#[must_use]
pub fn shingle(s: &str, k: usize) -> ShingleProfile {
    let mut profile = ShingleProfile::new();
    for_each_shingle(s, k, |gram| {
        *profile.entry(gram.to_string()).or_insert(0) += 1;
    });
    profile
}

/// Distinct shingles of size `k` in first-seen order.
#[must_use]
pub fn shingle_slice(s: &str, k: usize) -> Vec<String> {
    let mut seen = AHashSet::new();
    let mut out = Vec::new();
    for_each_shingle(s, k, |gram| {
        if seen.insert(gram) {
            out.push(gram.to_string());
        }
    });
    out
}

fn intersection_count(a: &ShingleProfile, b: &ShingleProfile) -> usize {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.keys().filter(|gram| large.contains_key(*gram)).count()
}

/// Jaccard index over distinct shingles: |A ∩ B| / |A ∪ B|.
#[must_use]
pub fn jaccard_similarity(a: &str, b: &str, k: usize) -> f64 {
    if a == b {
        return 1.0;
    }
    let a_profile = shingle(a, k);
    let b_profile = shingle(b, k);
    let intersection = intersection_count(&a_profile, &b_profile);
    let union = a_profile.len() + b_profile.len() - intersection;

    if union == 0 {
        1.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Sørensen-Dice coefficient over distinct shingles: 2|A ∩ B| / (|A| + |B|).
#[must_use]
pub fn sorensen_dice_coefficient(a: &str, b: &str, k: usize) -> f64 {
    if a == b {
        return 1.0;
    }
    let a_profile = shingle(a, k);
    let b_profile = shingle(b, k);
    let total = a_profile.len() + b_profile.len();

    if total == 0 {
        1.0
    } else {
        (2 * intersection_count(&a_profile, &b_profile)) as f64 / total as f64
    }
}

/// Cosine similarity between shingle count vectors.
#[must_use]
pub fn cosine_similarity(a: &str, b: &str, k: usize) -> f64 {
    if a == b {
        return 1.0;
    }
    let a_profile = shingle(a, k);
    let b_profile = shingle(b, k);

    if a_profile.is_empty() || b_profile.is_empty() {
        return if a_profile.is_empty() && b_profile.is_empty() { 1.0 } else { 0.0 };
    }

    let dot: usize = a_profile
        .iter()
        .filter_map(|(gram, count)| b_profile.get(gram).map(|other| count * other))
        .sum();
    let norm = |profile: &ShingleProfile| {
        profile.values().map(|&c| (c * c) as f64).sum::<f64>().sqrt()
    };

    dot as f64 / (norm(&a_profile) * norm(&b_profile))
}

/// Q-gram distance between two prepared profiles: Σ |countA - countB|.
#[must_use]
pub fn qgram_distance_custom(a: &ShingleProfile, b: &ShingleProfile) -> usize {
    let mut distance = 0;
    for (gram, &count) in a {
        distance += count.abs_diff(b.get(gram).copied().unwrap_or(0));
    }
    for (gram, &count) in b {
        if !a.contains_key(gram) {
            distance += count;
        }
    }
    distance
}

/// Q-gram distance between the size-`k` profiles of `a` and `b`.
#[must_use]
pub fn qgram_distance(a: &str, b: &str, k: usize) -> usize {
    if a == b {
        return 0;
    }
    qgram_distance_custom(&shingle(a, k), &shingle(b, k))
}

/// Q-gram similarity: 1 - distance / (total shingles in both profiles).
#[must_use]
pub fn qgram_similarity(a: &str, b: &str, k: usize) -> f64 {
    if a == b {
        return 1.0;
    }
    let a_profile = shingle(a, k);
    let b_profile = shingle(b, k);
    let total: usize = a_profile.values().sum::<usize>() + b_profile.values().sum::<usize>();

    if total == 0 {
        1.0
    } else {
        1.0 - qgram_distance_custom(&a_profile, &b_profile) as f64 / total as f64
    }
}
