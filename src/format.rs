//! Deterministic text rendering shared by results, stores and the pipeline
//!
//! Anything backed by a hash map is sorted before rendering so identical
//! inputs always produce identical text.

use crate::algorithms::ShingleProfile;

/// Labelled multi-line block: a title line followed by indented `Label: value` rows.
pub(crate) fn block(title: &str, rows: &[(&str, String)]) -> String {
    let mut out = String::from(title);
    for (label, value) in rows {
        out.push_str("\n  ");
        out.push_str(label);
        out.push_str(": ");
        out.push_str(value);
    }
    out
}

/// `[a, b, c]`
pub(crate) fn list(values: &[String]) -> String {
    format!("[{}]", values.join(", "))
}

/// `{ab: 1, ba: 2}` with keys sorted.
pub(crate) fn profile(profile: &ShingleProfile) -> String {
    let mut entries: Vec<(&String, &usize)> = profile.iter().collect();
    entries.sort();
    let body: Vec<String> = entries
        .into_iter()
        .map(|(gram, count)| format!("{}: {}", gram, count))
        .collect();
    format!("{{{}}}", body.join(", "))
}

/// Indent every line of `text` by `width` spaces.
pub(crate) fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block() {
        let text = block("hamming", &[("String 1", "abc".into()), ("Score", "1".into())]);
        assert_eq!(text, "hamming\n  String 1: abc\n  Score: 1");
    }

    #[test]
    fn test_profile_sorted() {
        let mut p = ShingleProfile::new();
        p.insert("ba".into(), 1);
        p.insert("ab".into(), 2);
        assert_eq!(profile(&p), "{ab: 2, ba: 1}");
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent("a\nb", 2), "  a\n  b");
    }
}
