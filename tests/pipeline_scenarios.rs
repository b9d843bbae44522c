//! End-to-end behaviour of the pipeline, the manager and the stores.

use fuzzyledger::compare;
use fuzzyledger::{
    compare_slices, Algorithm, ComparisonType, ErrorKind, LcsType, NormalizationMode, Pipeline,
    PipelineConfig, ResultManager, ResultStore, ShingleType, StoredResult, NIL_SLICES_MATCH,
};

fn chain(subject: &str, other: &str) -> Pipeline {
    chain_with(subject, other, other, 2)
}

fn chain_with(subject: &str, other: &str, similar_to: &str, shingle_size: isize) -> Pipeline {
    Pipeline::new(subject)
        .levenshtein(other)
        .jaro_winkler(other)
        .similarity(similar_to, Algorithm::SorensenDice)
        .shingle(shingle_size)
        .shingle_slice(2)
        .lcs_backtrack(other)
        .lcs_diff(other)
}

/// Per-family store equality: comparisons, similarities, shingles, lcs.
fn family_matches(a: &ResultManager, b: &ResultManager) -> [bool; 4] {
    fn pair<V: StoredResult>(x: Option<&ResultStore<V>>, y: Option<&ResultStore<V>>) -> bool {
        match (x, y) {
            (Some(x), Some(y)) => x.is_match(y),
            (x, y) => x.is_none() && y.is_none(),
        }
    }
    [
        pair(a.get_comparison_results_map(), b.get_comparison_results_map()),
        pair(a.get_similarity_results_map(), b.get_similarity_results_map()),
        pair(a.get_shingle_results_map(), b.get_shingle_results_map()),
        pair(a.get_lcs_results_map(), b.get_lcs_results_map()),
    ]
}

#[test]
fn integer_distance_scores() {
    let same = compare::levenshtein("hello", "hello");
    assert_eq!(same.score(), Ok(0));
    assert!(same.error().is_none());

    let one_off = compare::levenshtein("hello", "helloo");
    assert_eq!(one_off.score(), Ok(1));
    assert!(one_off.error().is_none());
}

#[test]
fn negative_size_is_invalid_parameter() {
    let direct = compare::qgram_similarity("hello", "hallo", -2);
    assert!(direct.score().is_err());
    assert_eq!(direct.error().map(|e| e.kind()), Some(ErrorKind::InvalidParameter));

    let pipeline = Pipeline::new("hello").qgram_similarity("hallo", -2);
    let err = pipeline.error().unwrap();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    assert_eq!(err, direct.error().unwrap());

    let stored = pipeline
        .manager()
        .unwrap()
        .get_comparison_result(ComparisonType::QgramSimilarity, "hallo")
        .unwrap();
    assert!(stored.score_f64().is_err());
}

#[test]
fn five_operations_five_entries() {
    let pipeline = Pipeline::new("kitten")
        .levenshtein("sitting")
        .damerau_levenshtein("sitting")
        .jaro("sitting")
        .jaccard("sitting", 2)
        .levenshtein("mitten");

    let map = pipeline.manager().unwrap().get_comparison_results_map().unwrap();
    assert_eq!(map.entry_count(), 5);
    assert_eq!(map.type_count(), 4);
    assert!(pipeline.error().is_none());
}

#[test]
fn identical_chains_produce_matching_managers() {
    let a = chain("hello world", "yellow word");
    let b = chain("hello world", "yellow word");
    let a_manager = a.manager().unwrap();
    let b_manager = b.manager().unwrap();
    assert_eq!(family_matches(a_manager, b_manager), [true; 4]);
    assert!(a_manager.is_match(b_manager));

    let c = chain("hello world", "yellow ward");
    let c_manager = c.manager().unwrap();
    assert_eq!(family_matches(a_manager, c_manager), [false, false, true, false]);
    assert!(!a_manager.is_match(c_manager));
}

#[test]
fn changing_one_shingle_size_breaks_only_the_shingle_store() {
    let base = chain_with("hello world", "yellow word", "yellow word", 2);
    let changed = chain_with("hello world", "yellow word", "yellow word", 3);
    let base_manager = base.manager().unwrap();
    let changed_manager = changed.manager().unwrap();

    assert_eq!(family_matches(base_manager, changed_manager), [true, true, false, true]);
    assert!(!base_manager.is_match(changed_manager));
    assert!(!changed_manager.is_match(base_manager));
}

#[test]
fn changing_one_similarity_target_breaks_only_the_similarity_store() {
    let base = chain_with("hello world", "yellow word", "yellow word", 2);
    let changed = chain_with("hello world", "yellow word", "mellow word", 2);
    let base_manager = base.manager().unwrap();
    let changed_manager = changed.manager().unwrap();

    assert_eq!(family_matches(base_manager, changed_manager), [true, false, true, true]);
    assert!(!base_manager.is_match(changed_manager));
}

#[test]
fn all_lcs_on_long_input_is_recorded_not_fatal() {
    let subject = "a".repeat(4000);
    let pipeline = Pipeline::new(subject.as_str()).lcs_backtrack_all(&"b".repeat(4000));
    assert_eq!(pipeline.error().map(|e| e.kind()), Some(ErrorKind::Algorithm));
    assert_eq!(pipeline.error().and_then(|e| e.operation()), Some("lcs_backtrack_all"));

    let disjoint = Pipeline::new("a".repeat(500)).lcs_backtrack_all(&"b".repeat(500));
    assert!(disjoint.error().is_none());
    let stored = disjoint
        .manager()
        .unwrap()
        .get_lcs_result(LcsType::BacktrackAll, "b".repeat(500).as_str())
        .unwrap();
    assert!(stored.values().unwrap().is_empty());
}

#[test]
fn first_failure_halts_the_chain() {
    let pipeline = Pipeline::new("abcd")
        .levenshtein("abce")
        .hamming("abc")
        .jaro("abce")
        .normalize(NormalizationMode::Lowercase)
        .lcs_backtrack("abce");

    let (value, err) = pipeline.result();
    assert_eq!(value, "abcd");
    assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::Algorithm));

    let manager = pipeline.manager().unwrap();
    assert_eq!(manager.total_entries(), 2);
    assert!(manager.get_lcs_results_map().is_none());
    assert!(manager.get_comparison_result(ComparisonType::Jaro, "abce").is_none());
    assert!(pipeline.build().is_err());
}

#[test]
fn tolerant_pipeline_keeps_going() {
    let config = PipelineConfig::default().with_halt_on_error(false);
    let pipeline = Pipeline::with_config("abcd", config)
        .hamming("abc")
        .lcs_backtrack("abce");

    assert!(pipeline.error().is_some());
    let lcs = pipeline
        .manager()
        .unwrap()
        .get_lcs_result(LcsType::Backtrack, "abce")
        .unwrap();
    assert_eq!(lcs.values().unwrap(), ["abc"]);
}

#[test]
fn copies_are_independent_of_the_manager() {
    let pipeline = Pipeline::new("banana").shingle(2).shingle_slice(3);
    let manager = pipeline.manager().unwrap();

    let mut copy = manager.copy_shingle_results_map().unwrap();
    copy.add(compare::shingle("banana", 4).into());

    assert_eq!(copy.entry_count(), 3);
    assert_eq!(manager.get_shingle_results_map().unwrap().entry_count(), 2);
}

#[test]
fn reads_never_allocate() {
    let mut manager = ResultManager::new();
    assert!(manager.get_shingle_results_by_size(&2isize).is_none());
    assert!(manager.filter_lcs_results_by_key("x").is_none());
    assert!(manager.get_similarity_results_map().is_none());

    manager.add_similarity_result(compare::similarity("night", "nacht", Algorithm::Jaro));
    assert!(manager.get_similarity_results_map().is_some());
    assert!(manager.get_shingle_results_map().is_none());
    assert!(manager.get_comparison_results_map().is_none());
    assert!(manager.get_lcs_results_map().is_none());
}

#[test]
fn filters_compose_across_families() {
    let pipeline = Pipeline::new("banana")
        .shingle(2)
        .shingle(3)
        .shingle_slice(2);
    let manager = pipeline.manager().unwrap();

    let by_size = manager.filter_shingle_results_by_size(&2isize).unwrap();
    assert_eq!(by_size.entry_count(), 2);

    let narrowed = by_size.filter_by_type(ShingleType::Slice);
    assert_eq!(narrowed.entry_count(), 1);
    let slice = narrowed.get(ShingleType::Slice, &2isize).unwrap().as_slice().unwrap();
    assert_eq!(slice.values().unwrap(), ["ba", "an", "na"]);
}

#[test]
fn slices_compare_as_multisets() {
    let a = ["ab", "ba", "ab"];
    let b = ["ba", "ab", "ab"];
    let c = ["ab", "ba", "ba"];
    assert!(compare_slices(Some(&a[..]), Some(&b[..]), NIL_SLICES_MATCH));
    assert!(!compare_slices(Some(&a[..]), Some(&c[..]), NIL_SLICES_MATCH));
    assert!(compare_slices::<&str>(None, None, true));
    assert!(!compare_slices::<&str>(None, None, false));
    assert!(!compare_slices(None, Some(&[] as &[&str]), true));
}

#[test]
fn manager_report_is_deterministic() {
    let a = chain("hello", "help");
    let b = chain("hello", "help");
    let text = a.manager().unwrap().format(false);
    assert_eq!(text, b.manager().unwrap().format(false));
    assert!(text.starts_with("Comparison results: 2 entries"));
    assert!(text.contains("LCS results: 2 entries"));
}
