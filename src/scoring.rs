//! Tag-overlap scoring

use std::collections::HashSet;

/// Jaccard similarity between two tag collections, order-insensitive
///
/// Returns |intersection| / |union| over the two sets, in [0, 1]. If either
/// collection is empty the score is 0.0: a missing suggestion or a missing
/// ground truth counts as zero agreement, not vacuous perfect agreement.
pub fn jaccard(suggested: &[String], expected: &[String]) -> f64 {
    if suggested.is_empty() || expected.is_empty() {
        return 0.0;
    }

    let suggested_set: HashSet<&str> = suggested.iter().map(String::as_str).collect();
    let expected_set: HashSet<&str> = expected.iter().map(String::as_str).collect();

    let intersection = suggested_set.intersection(&expected_set).count();
    let union = suggested_set.union(&expected_set).count();

    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_identical_sets_score_one() {
        let a = tags(&["work", "coding"]);
        assert_eq!(jaccard(&a, &a), 1.0);
    }

    #[test]
    fn test_symmetry() {
        let a = tags(&["work", "coding"]);
        let b = tags(&["work", "meeting", "design"]);
        assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    }

    #[test]
    fn test_partial_overlap() {
        let suggested = tags(&["work", "coding"]);
        let expected = tags(&["work", "coding", "bugfix"]);
        let score = jaccard(&suggested, &expected);
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_sets_score_zero() {
        let a = tags(&["personal", "break"]);
        let b = tags(&["work", "coding"]);
        assert_eq!(jaccard(&a, &b), 0.0);
    }

    #[test]
    fn test_empty_set_policy() {
        let nonempty = tags(&["work"]);
        assert_eq!(jaccard(&[], &nonempty), 0.0);
        assert_eq!(jaccard(&nonempty, &[]), 0.0);
        assert_eq!(jaccard(&[], &[]), 0.0);
    }

    #[test]
    fn test_duplicates_collapse() {
        let suggested = tags(&["work", "work", "coding"]);
        let expected = tags(&["work", "coding"]);
        assert_eq!(jaccard(&suggested, &expected), 1.0);
    }
}
