//! Result manager: one lazily created store per result family
//!
//! Writes allocate, reads never do. Until the first `add_*` call for a
//! family, every read of that family answers `None`, which is distinct from
//! a present store with no entries.
//!
//! Like every type in this crate the manager is single-owner and not
//! synchronised; share it across threads only behind external locking.

use crate::algorithms::Algorithm;
use crate::format;
use crate::results::{
    ComparisonResult, ComparisonType, LcsResult, LcsType, ShingleResult, ShingleType,
    SimilarityResult, StoredResult,
};
use crate::store::{
    ComparisonResultsMap, LcsResultsMap, ResultStore, ShingleResultsMap, SimilarityResultsMap,
};
use std::borrow::Borrow;
use std::hash::Hash;
use tracing::debug;

/// Generates the accessor set for one result family.
macro_rules! family_accessors {
    (
        field: $field:ident,
        label: $label:literal,
        value: $value:ty,
        kind: $kind:ty,
        key: $key:ty,
        add: $add:ident,
        map: $map:ident,
        get: $get:ident,
        by_type: $by_type:ident,
        by_key: $by_key:ident,
        filter_type: $filter_type:ident,
        filter_key: $filter_key:ident,
        copy: $copy:ident $(,)?
    ) => {
        #[doc = concat!("Record a ", $label, " result, creating the store on first use.")]
        pub fn $add(&mut self, result: impl Into<$value>) -> &mut Self {
            let store = self.$field.get_or_insert_with(|| {
                debug!(family = $label, "allocating result store");
                ResultStore::new()
            });
            store.add(result.into());
            self
        }

        #[doc = concat!("The ", $label, " store, or `None` if nothing was recorded yet.")]
        pub fn $map(&self) -> Option<&ResultStore<$value>> {
            self.$field.as_ref()
        }

        pub fn $get<Q>(&self, kind: $kind, key: &Q) -> Option<&$value>
        where
            $key: Borrow<Q>,
            Q: Hash + Eq + ?Sized,
        {
            self.$field.as_ref()?.get(kind, key)
        }

        pub fn $by_type(&self, kind: $kind) -> Option<Vec<&$value>> {
            Some(self.$field.as_ref()?.get_by_type(kind))
        }

        pub fn $by_key<Q>(&self, key: &Q) -> Option<Vec<&$value>>
        where
            $key: Borrow<Q>,
            Q: Hash + Eq + ?Sized,
        {
            Some(self.$field.as_ref()?.get_by_key(key))
        }

        pub fn $filter_type(&self, kind: $kind) -> Option<ResultStore<$value>> {
            Some(self.$field.as_ref()?.filter_by_type(kind))
        }

        pub fn $filter_key<Q>(&self, key: &Q) -> Option<ResultStore<$value>>
        where
            $key: Borrow<Q>,
            Q: Hash + Eq + ?Sized,
        {
            Some(self.$field.as_ref()?.filter_by_key(key))
        }

        #[doc = concat!("Deep copy of the ", $label, " store.")]
        pub fn $copy(&self) -> Option<ResultStore<$value>> {
            self.$field.as_ref().map(ResultStore::get_copy)
        }
    };
}

/// Facade over the four result stores.
#[derive(Debug, Clone, Default)]
pub struct ResultManager {
    comparisons: Option<ComparisonResultsMap>,
    similarities: Option<SimilarityResultsMap>,
    shingles: Option<ShingleResultsMap>,
    lcs: Option<LcsResultsMap>,
}

impl ResultManager {
    pub fn new() -> Self {
        Self::default()
    }

    family_accessors! {
        field: comparisons,
        label: "comparison",
        value: ComparisonResult,
        kind: ComparisonType,
        key: String,
        add: add_comparison_result,
        map: get_comparison_results_map,
        get: get_comparison_result,
        by_type: get_comparison_results_by_type,
        by_key: get_comparison_results_by_key,
        filter_type: filter_comparison_results_by_type,
        filter_key: filter_comparison_results_by_key,
        copy: copy_comparison_results_map,
    }

    family_accessors! {
        field: similarities,
        label: "similarity",
        value: SimilarityResult,
        kind: Algorithm,
        key: String,
        add: add_similarity_result,
        map: get_similarity_results_map,
        get: get_similarity_result,
        by_type: get_similarity_results_by_algorithm,
        by_key: get_similarity_results_by_key,
        filter_type: filter_similarity_results_by_algorithm,
        filter_key: filter_similarity_results_by_key,
        copy: copy_similarity_results_map,
    }

    family_accessors! {
        field: shingles,
        label: "shingle",
        value: ShingleResult,
        kind: ShingleType,
        key: isize,
        add: add_shingle_result,
        map: get_shingle_results_map,
        get: get_shingle_result,
        by_type: get_shingle_results_by_type,
        by_key: get_shingle_results_by_size,
        filter_type: filter_shingle_results_by_type,
        filter_key: filter_shingle_results_by_size,
        copy: copy_shingle_results_map,
    }

    family_accessors! {
        field: lcs,
        label: "lcs",
        value: LcsResult,
        kind: LcsType,
        key: String,
        add: add_lcs_result,
        map: get_lcs_results_map,
        get: get_lcs_result,
        by_type: get_lcs_results_by_type,
        by_key: get_lcs_results_by_key,
        filter_type: filter_lcs_results_by_type,
        filter_key: filter_lcs_results_by_key,
        copy: copy_lcs_results_map,
    }

    /// Entries across all four families.
    pub fn total_entries(&self) -> usize {
        self.comparisons.as_ref().map_or(0, ResultStore::entry_count)
            + self.similarities.as_ref().map_or(0, ResultStore::entry_count)
            + self.shingles.as_ref().map_or(0, ResultStore::entry_count)
            + self.lcs.as_ref().map_or(0, ResultStore::entry_count)
    }

    /// Pairwise store equality across all four families.
    ///
    /// An absent store matches an absent or empty one.
    pub fn is_match(&self, other: &Self) -> bool {
        stores_match(&self.comparisons, &other.comparisons)
            && stores_match(&self.similarities, &other.similarities)
            && stores_match(&self.shingles, &other.shingles)
            && stores_match(&self.lcs, &other.lcs)
    }

    /// Render every present store under a family heading.
    pub fn format(&self, verbose: bool) -> String {
        let mut sections = Vec::new();
        push_section(&mut sections, "Comparison results", &self.comparisons, verbose);
        push_section(&mut sections, "Similarity results", &self.similarities, verbose);
        push_section(&mut sections, "Shingle results", &self.shingles, verbose);
        push_section(&mut sections, "LCS results", &self.lcs, verbose);
        sections.join("\n")
    }

    pub fn print(&self, verbose: bool) -> &Self {
        println!("{}", self.format(verbose));
        self
    }
}

fn stores_match<V: StoredResult>(a: &Option<ResultStore<V>>, b: &Option<ResultStore<V>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.is_match(b),
        (Some(store), None) | (None, Some(store)) => store.is_empty(),
        (None, None) => true,
    }
}

fn push_section<V: StoredResult>(
    sections: &mut Vec<String>,
    title: &str,
    store: &Option<ResultStore<V>>,
    verbose: bool,
) {
    if let Some(store) = store {
        let mut section = format!("{}: {} entries", title, store.entry_count());
        if !store.is_empty() {
            section.push('\n');
            section.push_str(&format::indent(&store.format(verbose), 2));
        }
        sections.push(section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{FloatResult, IntResult, ShingleMapResult};

    #[test]
    fn test_fresh_manager_reads_absent() {
        let manager = ResultManager::new();

        assert!(manager.get_comparison_results_map().is_none());
        assert!(manager.get_comparison_result(ComparisonType::Levenshtein, "x").is_none());
        assert!(manager.get_comparison_results_by_type(ComparisonType::Levenshtein).is_none());
        assert!(manager.get_comparison_results_by_key("x").is_none());
        assert!(manager.filter_comparison_results_by_type(ComparisonType::Jaro).is_none());
        assert!(manager.filter_comparison_results_by_key("x").is_none());
        assert!(manager.copy_comparison_results_map().is_none());

        assert!(manager.get_similarity_results_map().is_none());
        assert!(manager.get_similarity_result(Algorithm::Jaro, "x").is_none());
        assert!(manager.get_similarity_results_by_algorithm(Algorithm::Jaro).is_none());
        assert!(manager.get_similarity_results_by_key("x").is_none());
        assert!(manager.filter_similarity_results_by_algorithm(Algorithm::Jaro).is_none());
        assert!(manager.filter_similarity_results_by_key("x").is_none());
        assert!(manager.copy_similarity_results_map().is_none());

        assert!(manager.get_shingle_results_map().is_none());
        assert!(manager.get_shingle_result(ShingleType::Map, &2isize).is_none());
        assert!(manager.get_shingle_results_by_type(ShingleType::Map).is_none());
        assert!(manager.get_shingle_results_by_size(&2isize).is_none());
        assert!(manager.filter_shingle_results_by_type(ShingleType::Slice).is_none());
        assert!(manager.filter_shingle_results_by_size(&2isize).is_none());
        assert!(manager.copy_shingle_results_map().is_none());

        assert!(manager.get_lcs_results_map().is_none());
        assert!(manager.get_lcs_result(LcsType::Diff, "x").is_none());
        assert!(manager.get_lcs_results_by_type(LcsType::Diff).is_none());
        assert!(manager.get_lcs_results_by_key("x").is_none());
        assert!(manager.filter_lcs_results_by_type(LcsType::Diff).is_none());
        assert!(manager.filter_lcs_results_by_key("x").is_none());
        assert!(manager.copy_lcs_results_map().is_none());

        // Reads did not allocate
        assert!(manager.get_comparison_results_map().is_none());
        assert_eq!(manager.total_entries(), 0);
    }

    #[test]
    fn test_write_allocates_only_its_family() {
        let mut manager = ResultManager::new();
        manager.add_comparison_result(IntResult::new(
            ComparisonType::Levenshtein,
            "hello",
            "helloo",
            None,
            Ok(1),
        ));

        assert_eq!(manager.get_comparison_results_map().map(|m| m.entry_count()), Some(1));
        assert!(manager.get_similarity_results_map().is_none());
        assert!(manager.get_shingle_results_map().is_none());
        assert!(manager.get_lcs_results_map().is_none());

        // Present but no match: empty collection, not absence
        assert_eq!(
            manager.get_comparison_results_by_type(ComparisonType::Jaro).map(|v| v.len()),
            Some(0)
        );
    }

    #[test]
    fn test_copy_is_independent() {
        let mut manager = ResultManager::new();
        manager
            .add_comparison_result(FloatResult::new(ComparisonType::Jaro, "a", "b", None, Ok(0.0)))
            .add_shingle_result(ShingleMapResult::new("ab", 1, Ok(crate::algorithms::shingle("ab", 1))));

        let mut copy = manager.copy_comparison_results_map().unwrap();
        copy.add(FloatResult::new(ComparisonType::Cosine, "a", "b", None, Ok(0.0)).into());
        assert_eq!(manager.get_comparison_results_map().unwrap().entry_count(), 1);
        assert_eq!(copy.entry_count(), 2);
    }

    #[test]
    fn test_manager_match() {
        let build = |score: usize| {
            let mut manager = ResultManager::new();
            manager.add_comparison_result(IntResult::new(
                ComparisonType::Hamming,
                "abc",
                "abd",
                None,
                Ok(score),
            ));
            manager
        };
        assert!(build(1).is_match(&build(1)));
        assert!(!build(1).is_match(&build(2)));
        assert!(ResultManager::new().is_match(&ResultManager::new()));
        assert!(!build(1).is_match(&ResultManager::new()));
    }

    #[test]
    fn test_format_lists_present_families() {
        let mut manager = ResultManager::new();
        manager.add_lcs_result(LcsResult::new(
            LcsType::Backtrack,
            "abcde",
            "ace".to_string(),
            Ok(vec!["ace".to_string()]),
        ));
        assert_eq!(
            manager.format(false),
            "LCS results: 1 entries\n  lcs_backtrack (1)\n    lcs_backtrack(\"abcde\", ace) = [ace]"
        );
    }
}
