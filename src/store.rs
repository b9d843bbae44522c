//! Two-level result store
//!
//! A [`ResultStore`] maps `kind -> key -> value`. One generic container backs
//! all four result families; the aliases at the bottom name each instance.
//!
//! Inserting at an occupied `(kind, key)` slot replaces the previous value.
//! Filters build a new store and leave the source untouched. Cloning (or
//! [`ResultStore::get_copy`]) produces a fully independent deep copy.
//!
//! Iteration order of the underlying maps is unspecified; [`ResultStore::format`]
//! sorts by kind and key so the rendered text is deterministic.

use crate::format;
use crate::results::{ComparisonResult, LcsResult, ShingleResult, SimilarityResult, StoredResult};
use ahash::AHashMap;
use std::borrow::Borrow;
use std::hash::Hash;
use tracing::debug;

/// Multi-index container for one result family.
#[derive(Debug, Clone)]
pub struct ResultStore<V: StoredResult> {
    entries: AHashMap<V::Kind, AHashMap<V::Key, V>>,
}

impl<V: StoredResult> Default for ResultStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: StoredResult> ResultStore<V> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }

    /// Insert `value` at `[kind][key]`, returning the value it replaced.
    pub fn add(&mut self, value: V) -> Option<V> {
        let kind = value.kind();
        let key = value.key();
        let replaced = self.entries.entry(kind).or_default().insert(key, value);
        if let Some(previous) = &replaced {
            debug!(kind = %kind, key = %previous.key(), "replaced stored result");
        }
        replaced
    }

    /// Look up the value at `[kind][key]`.
    pub fn get<Q>(&self, kind: V::Kind, key: &Q) -> Option<&V>
    where
        V::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(&kind).and_then(|by_key| by_key.get(key))
    }

    /// Whether a value exists at `[kind][key]`.
    pub fn contains<Q>(&self, kind: V::Kind, key: &Q) -> bool
    where
        V::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(kind, key).is_some()
    }

    /// Every value recorded under `kind`, in unspecified order.
    pub fn get_by_type(&self, kind: V::Kind) -> Vec<&V> {
        self.entries
            .get(&kind)
            .map(|by_key| by_key.values().collect())
            .unwrap_or_default()
    }

    /// New store holding only the entries recorded under `kind`.
    pub fn filter_by_type(&self, kind: V::Kind) -> Self {
        let mut filtered = Self::new();
        if let Some(by_key) = self.entries.get(&kind) {
            if !by_key.is_empty() {
                filtered.entries.insert(kind, by_key.clone());
            }
        }
        filtered
    }

    /// Every value recorded under `key`, across all kinds, in unspecified order.
    pub fn get_by_key<Q>(&self, key: &Q) -> Vec<&V>
    where
        V::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries
            .values()
            .filter_map(|by_key| by_key.get(key))
            .collect()
    }

    /// New store holding only the entries recorded under `key`.
    pub fn filter_by_key<Q>(&self, key: &Q) -> Self
    where
        V::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut filtered = Self::new();
        for by_key in self.entries.values() {
            if let Some(value) = by_key.get(key) {
                filtered.add(value.clone());
            }
        }
        filtered
    }

    /// Number of kinds holding at least one entry.
    pub fn type_count(&self) -> usize {
        self.entries.values().filter(|by_key| !by_key.is_empty()).count()
    }

    /// Total number of entries across all kinds.
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(|by_key| by_key.len()).sum()
    }

    /// Whether the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Kinds holding at least one entry, sorted.
    pub fn kinds(&self) -> Vec<V::Kind> {
        let mut kinds: Vec<V::Kind> = self
            .entries
            .iter()
            .filter(|(_, by_key)| !by_key.is_empty())
            .map(|(kind, _)| *kind)
            .collect();
        kinds.sort();
        kinds
    }

    /// Every value, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.entries.values().flat_map(|by_key| by_key.values())
    }

    /// Independent deep copy; mutating it never affects `self`.
    pub fn get_copy(&self) -> Self {
        self.clone()
    }

    /// Structural equality: same `(kind, key)` slots holding matching values.
    pub fn is_match(&self, other: &Self) -> bool {
        if self.type_count() != other.type_count() || self.entry_count() != other.entry_count() {
            return false;
        }

        self.entries.iter().all(|(kind, by_key)| {
            by_key.iter().all(|(key, value)| {
                other
                    .entries
                    .get(kind)
                    .and_then(|theirs| theirs.get(key))
                    .is_some_and(|theirs| value.is_match(theirs))
            })
        })
    }

    /// Render every entry grouped by kind, kinds and keys sorted.
    pub fn format(&self, verbose: bool) -> String {
        let mut sections = Vec::new();
        for kind in self.kinds() {
            let Some(by_key) = self.entries.get(&kind) else {
                continue;
            };
            let mut keys: Vec<&V::Key> = by_key.keys().collect();
            keys.sort();

            let mut section = format!("{} ({})", kind, keys.len());
            for key in keys {
                section.push('\n');
                section.push_str(&format::indent(&by_key[key].format(verbose), 2));
            }
            sections.push(section);
        }
        sections.join("\n")
    }

    /// Write [`format`](Self::format) to stdout and hand the store back.
    pub fn print(&self, verbose: bool) -> &Self {
        println!("{}", self.format(verbose));
        self
    }
}

/// Scalar comparisons keyed by `ComparisonType`, then second string or label.
pub type ComparisonResultsMap = ResultStore<ComparisonResult>;
/// Similarity scores keyed by `Algorithm`, then second string.
pub type SimilarityResultsMap = ResultStore<SimilarityResult>;
/// Shingle maps and lists keyed by `ShingleType`, then n-gram length.
pub type ShingleResultsMap = ResultStore<ShingleResult>;
/// LCS renderings keyed by `LcsType`, then second string.
pub type LcsResultsMap = ResultStore<LcsResult>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{ComparisonType, FloatResult, IntResult};

    fn int(kind: ComparisonType, second: &str, score: usize) -> ComparisonResult {
        IntResult::new(kind, "hello", second, None, Ok(score)).into()
    }

    fn populated() -> ComparisonResultsMap {
        let mut store = ComparisonResultsMap::new();
        store.add(int(ComparisonType::Levenshtein, "helloo", 1));
        store.add(int(ComparisonType::Levenshtein, "help", 2));
        store.add(int(ComparisonType::Hamming, "hallo", 1));
        store.add(FloatResult::new(ComparisonType::Jaro, "hello", "helloo", None, Ok(0.94)).into());
        store
    }

    #[test]
    fn test_add_and_get() {
        let store = populated();
        assert_eq!(store.type_count(), 3);
        assert_eq!(store.entry_count(), 4);

        let found = store.get(ComparisonType::Levenshtein, "helloo").unwrap();
        assert_eq!(found.score_f64(), Ok(1.0));
        assert!(store.get(ComparisonType::Levenshtein, "missing").is_none());
        assert!(store.get(ComparisonType::Cosine, "helloo").is_none());
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let mut store = ComparisonResultsMap::new();
        assert!(store.add(int(ComparisonType::Levenshtein, "x", 1)).is_none());
        let replaced = store.add(int(ComparisonType::Levenshtein, "x", 7));
        assert!(replaced.is_some());
        assert_eq!(store.entry_count(), 1);
        assert_eq!(
            store.get(ComparisonType::Levenshtein, "x").unwrap().score_f64(),
            Ok(7.0)
        );
    }

    #[test]
    fn test_filter_by_type_matches_get_by_type() {
        let store = populated();
        for kind in store.kinds() {
            assert_eq!(store.filter_by_type(kind).entry_count(), store.get_by_type(kind).len());
        }
        assert_eq!(store.filter_by_type(ComparisonType::Cosine).entry_count(), 0);
        assert_eq!(store.filter_by_type(ComparisonType::Cosine).type_count(), 0);
        assert!(store.get_by_type(ComparisonType::Cosine).is_empty());
    }

    #[test]
    fn test_filter_by_key_spans_kinds() {
        let store = populated();
        let filtered = store.filter_by_key("helloo");
        assert_eq!(filtered.entry_count(), 2);
        assert_eq!(filtered.type_count(), 2);
        assert_eq!(store.get_by_key("helloo").len(), 2);
        // Source untouched
        assert_eq!(store.entry_count(), 4);
    }

    #[test]
    fn test_filters_compose() {
        let store = populated();
        let narrowed = store
            .filter_by_type(ComparisonType::Levenshtein)
            .filter_by_key("help");
        assert_eq!(narrowed.entry_count(), 1);
        assert!(narrowed.contains(ComparisonType::Levenshtein, "help"));
    }

    #[test]
    fn test_copy_is_independent() {
        let store = populated();
        let mut copy = store.get_copy();
        assert!(copy.is_match(&store));

        copy.add(int(ComparisonType::OsaDamerauLevenshtein, "hlelo", 1));
        assert_eq!(store.entry_count(), 4);
        assert_eq!(copy.entry_count(), 5);
        assert!(!copy.is_match(&store));
    }

    #[test]
    fn test_is_match_symmetric() {
        let a = populated();
        let mut b = populated();
        b.add(int(ComparisonType::Hamming, "hallo", 2));
        assert!(!a.is_match(&b));
        assert!(!b.is_match(&a));
        assert!(a.is_match(&populated()));
        assert!(ComparisonResultsMap::new().is_match(&ComparisonResultsMap::new()));
    }

    #[test]
    fn test_format_is_sorted() {
        let text = populated().format(false);
        assert_eq!(
            text,
            [
                "levenshtein (2)",
                r#"  levenshtein("hello", "helloo") = 1"#,
                r#"  levenshtein("hello", "help") = 2"#,
                "hamming (1)",
                r#"  hamming("hello", "hallo") = 1"#,
                "jaro (1)",
                r#"  jaro("hello", "helloo") = 0.9400"#,
            ]
            .join("\n")
        );
    }
}
