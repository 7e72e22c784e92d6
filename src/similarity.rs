use serde::Serialize;
use strum::AsRefStr;

/// Similarity percentage above which a catalog entry counts as a near duplicate.
/// An entry qualifies only when its score is strictly greater than this.
pub const SIMILARITY_THRESHOLD: f64 = 80.0;

/// Outcome of checking one candidate identifier against the catalog.
///
/// Both match lists are advisory: the caller decides (with human
/// confirmation) whether to insert anyway. Nothing here blocks anything.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimilarityVerdict {
    /// True if the candidate is a 3- or 4-character numeric identifier and
    /// at least one catalog entry parses to the same integer.
    pub is_numeric_duplicate: bool,
    /// Catalog entries equal to the candidate in numeric value.
    pub conflicting_numeric_matches: Vec<String>,
    /// Catalog entries scoring above the threshold, excluding entries whose
    /// raw string is identical to the candidate.
    pub similar_matches: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CheckStatus {
    Clear,
    NumericDuplicate,
    SimilarFound,
}

impl SimilarityVerdict {
    pub fn is_clear(&self) -> bool {
        !self.is_numeric_duplicate && self.similar_matches.is_empty()
    }

    /// Summary status for reporting. Numeric duplicates take precedence over
    /// fuzzy matches since they are the stronger signal.
    pub fn status(&self) -> CheckStatus {
        if self.is_numeric_duplicate {
            CheckStatus::NumericDuplicate
        } else if !self.similar_matches.is_empty() {
            CheckStatus::SimilarFound
        } else {
            CheckStatus::Clear
        }
    }
}

/// Classify a candidate design identifier against the existing catalog.
///
/// Pure and infallible: malformed input degrades to empty match lists.
/// The catalog is a read-only snapshot owned by the caller.
pub fn evaluate(candidate: &str, catalog: &[String]) -> SimilarityVerdict {
    evaluate_with_threshold(candidate, catalog, SIMILARITY_THRESHOLD)
}

pub fn evaluate_with_threshold(
    candidate: &str,
    catalog: &[String],
    threshold: f64,
) -> SimilarityVerdict {
    let mut verdict = SimilarityVerdict::default();

    // Numeric pass. Only 3- or 4-character identifiers participate; the
    // guard is on the trimmed string length, not the digit count of the
    // parsed value ("007" is length 3 and parses to 7).
    let trimmed = candidate.trim();
    if let Ok(design_number) = trimmed.parse::<i64>() {
        if trimmed.len() == 3 || trimmed.len() == 4 {
            for entry in catalog {
                if entry.trim().parse::<i64>() == Ok(design_number) {
                    verdict.conflicting_numeric_matches.push(entry.clone());
                }
            }
            verdict.is_numeric_duplicate = !verdict.conflicting_numeric_matches.is_empty();
        }
    }

    // Fuzzy pass. The identical-string exclusion compares RAW strings while
    // the score is computed case-insensitively, so an entry differing from
    // the candidate only in case scores 100 and still appears here. That is
    // intentional; do not fold before comparing.
    for entry in catalog {
        if entry == candidate {
            continue;
        }
        if similarity(entry, candidate) > threshold {
            verdict.similar_matches.push(entry.clone());
        }
    }

    verdict
}

/// Case-insensitive similarity between two identifiers, as a percentage.
/// 100 means identical after upper-casing, 0 means nothing in common.
/// Two empty strings score 0 rather than dividing by zero.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_uppercase().chars().collect();
    let b: Vec<char> = b.to_uppercase().chars().collect();
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 0.0;
    }

    let distance = edit_distance_chars(&a, &b);
    (max_len - distance) as f64 / max_len as f64 * 100.0
}

/// Levenshtein distance between two strings: the minimum number of
/// single-character insertions, deletions, and substitutions needed to
/// transform one into the other. Case-sensitive; callers wanting a
/// case-insensitive distance fold first.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance_chars(&a, &b)
}

fn edit_distance_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for i in 0..=a.len() {
        matrix[i][0] = i;
    }
    for j in 0..=b.len() {
        matrix[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a.len()][b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("same", "same"), 0);
        assert_eq!(edit_distance("ROSEGOLD", "ROSGOLD"), 1);
    }

    #[test]
    fn test_edit_distance_symmetry() {
        for (a, b) in [
            ("kitten", "sitting"),
            ("ROSEGOLD", "ROSGOLD"),
            ("", "abc"),
            ("1010", "10100"),
        ] {
            assert_eq!(edit_distance(a, b), edit_distance(b, a));
        }
    }

    #[test]
    fn test_similarity_identity_scores_100() {
        assert_eq!(similarity("ROSEGOLD", "ROSEGOLD"), 100.0);
        assert_eq!(similarity("rosegold", "ROSEGOLD"), 100.0);
    }

    #[test]
    fn test_similarity_both_empty_is_zero() {
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn test_numeric_duplicate_exact() {
        let verdict = evaluate("101", &catalog(&["101", "205"]));
        assert!(verdict.is_numeric_duplicate);
        assert_eq!(verdict.conflicting_numeric_matches, vec!["101"]);
    }

    #[test]
    fn test_numeric_duplicate_matches_by_value_not_string() {
        // "007" has string length 3 and parses to 7, so "7" conflicts.
        let verdict = evaluate("007", &catalog(&["7", "700"]));
        assert!(verdict.is_numeric_duplicate);
        assert_eq!(verdict.conflicting_numeric_matches, vec!["7"]);
    }

    #[test]
    fn test_numeric_pass_length_guard() {
        let verdict = evaluate("1010", &catalog(&["1010"]));
        assert!(verdict.is_numeric_duplicate);

        // Five characters never activates the pass, whatever the value.
        let verdict = evaluate("10100", &catalog(&["10100"]));
        assert!(!verdict.is_numeric_duplicate);
        assert!(verdict.conflicting_numeric_matches.is_empty());
    }

    #[test]
    fn test_numeric_pass_ignores_non_numeric_candidate() {
        let verdict = evaluate("ROSE", &catalog(&["101", "205"]));
        assert!(!verdict.is_numeric_duplicate);
    }

    #[test]
    fn test_similar_match_above_threshold() {
        // One deletion out of eight characters: (8 - 1) / 8 * 100 = 87.5.
        let verdict = evaluate("ROSGOLD", &catalog(&["ROSEGOLD"]));
        assert_eq!(verdict.similar_matches, vec!["ROSEGOLD"]);
        assert_eq!(similarity("ROSEGOLD", "ROSGOLD"), 87.5);
    }

    #[test]
    fn test_dissimilar_entry_not_matched() {
        // Three substitutions out of eight: 62.5, below the threshold.
        let verdict = evaluate("XYZDEFGH", &catalog(&["ABCDEFGH"]));
        assert!(verdict.similar_matches.is_empty());
        assert_eq!(similarity("ABCDEFGH", "XYZDEFGH"), 62.5);
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly 80.0 does not qualify.
        assert_eq!(similarity("ABCDE", "ABCDX"), 80.0);
        let verdict = evaluate("ABCDX", &catalog(&["ABCDE"]));
        assert!(verdict.similar_matches.is_empty());
    }

    #[test]
    fn test_identical_raw_string_excluded() {
        let verdict = evaluate("ROSEGOLD", &catalog(&["ROSEGOLD"]));
        assert!(verdict.similar_matches.is_empty());
    }

    #[test]
    fn test_case_variant_is_listed_not_excluded() {
        // The exclusion compares raw strings, so a case-only variant scores
        // 100 and is reported as similar rather than identical.
        let verdict = evaluate("rosegold", &catalog(&["ROSEGOLD"]));
        assert_eq!(verdict.similar_matches, vec!["ROSEGOLD"]);
    }

    #[test]
    fn test_empty_catalog() {
        let verdict = evaluate("101", &[]);
        assert!(!verdict.is_numeric_duplicate);
        assert!(verdict.conflicting_numeric_matches.is_empty());
        assert!(verdict.similar_matches.is_empty());
        assert!(verdict.is_clear());
    }

    #[test]
    fn test_empty_catalog_entry_is_skipped() {
        // An empty entry against a non-empty candidate scores 0; an empty
        // candidate against an empty entry is the guarded max_len == 0 case.
        let verdict = evaluate("ROSE", &catalog(&[""]));
        assert!(verdict.similar_matches.is_empty());
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn test_custom_threshold() {
        let entries = catalog(&["ABCDEFGH"]);
        let verdict = evaluate_with_threshold("XYZDEFGH", &entries, 50.0);
        assert_eq!(verdict.similar_matches, vec!["ABCDEFGH"]);
    }

    #[test]
    fn test_status_precedence() {
        // Numeric duplicates outrank fuzzy matches in the summary status.
        let verdict = SimilarityVerdict {
            is_numeric_duplicate: true,
            conflicting_numeric_matches: vec!["101".to_string()],
            similar_matches: vec!["0101".to_string()],
        };
        assert_eq!(verdict.status(), CheckStatus::NumericDuplicate);

        let verdict = evaluate("ROSGOLD", &catalog(&["ROSEGOLD"]));
        assert_eq!(verdict.status(), CheckStatus::SimilarFound);

        let verdict = evaluate("ROSE", &[]);
        assert_eq!(verdict.status(), CheckStatus::Clear);
    }
}
