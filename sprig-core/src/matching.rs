use crate::branch::{Branch, BranchSet};
use regex::{Regex, RegexBuilder};

/// A compiled live-query pattern. The interactive query is treated as a
/// case-insensitive regular expression; compilation failure is an ordinary
/// result so half-typed patterns never tear down the session. The default
/// (empty) pattern matches everything.
#[derive(Debug, Clone, Default)]
pub struct Pattern {
    regex: Option<Regex>,
}

impl Pattern {
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.as_ref().is_none_or(|regex| regex.is_match(name))
    }
}

pub fn compile(pattern: &str) -> Result<Pattern, regex::Error> {
    if pattern.is_empty() {
        return Ok(Pattern::default());
    }
    let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
    Ok(Pattern { regex: Some(regex) })
}

/// Indices of every branch matching `pattern`, preserving catalog order.
/// An empty pattern matches everything.
pub fn filter(branches: &BranchSet, pattern: &Pattern) -> Vec<usize> {
    branches
        .iter()
        .enumerate()
        .filter(|(_, branch)| pattern.is_match(&branch.name))
        .map(|(idx, _)| idx)
        .collect()
}

/// One-shot pick for the non-interactive fast-switch path.
///
/// The pattern is a plain substring here, not a regex. Candidates are
/// compared lower-cased; the returned branch keeps its original casing.
/// Ranking: prefix matches first, then the name whose length is closest to
/// the pattern's, then lexicographic order on the lowered name so repeated
/// calls always pick the same branch.
pub fn best_match<'a>(branches: &'a BranchSet, pattern: &str) -> Option<&'a Branch> {
    let pattern = pattern.to_lowercase();

    branches
        .iter()
        .filter_map(|branch| {
            let lowered = branch.name.to_lowercase();
            lowered.contains(&pattern).then_some((branch, lowered))
        })
        .min_by(|(_, a), (_, b)| rank(a, &pattern).cmp(&rank(b, &pattern)).then(a.cmp(b)))
        .map(|(branch, _)| branch)
}

fn rank(lowered: &str, pattern: &str) -> (bool, usize) {
    (
        !lowered.starts_with(pattern),
        lowered.len().abs_diff(pattern.len()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BranchSet {
        BranchSet::from_parts(names.iter().map(ToString::to_string).collect(), Vec::new())
    }

    #[test]
    fn test_filter_empty_pattern_matches_everything() {
        let branches = set(&["main", "feature-x", "origin-only"]);
        let pattern = compile("").unwrap();
        assert_eq!(filter(&branches, &pattern), vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_case_insensitive_preserves_order() {
        let branches = set(&["Main", "feature-x", "MAINTENANCE"]);
        let pattern = compile("main").unwrap();
        assert_eq!(filter(&branches, &pattern), vec![0, 2]);
    }

    #[test]
    fn test_filter_regex_syntax() {
        let branches = set(&["release-1", "release-10", "hotfix"]);
        let pattern = compile("release-1$").unwrap();
        assert_eq!(filter(&branches, &pattern), vec![0]);
    }

    #[test]
    fn test_compile_rejects_malformed_pattern() {
        assert!(compile("release[").is_err());
        assert!(compile("(unclosed").is_err());
    }

    #[test]
    fn test_best_match_prefix_beats_substring() {
        let branches = set(&["feature-main", "main"]);
        let found = best_match(&branches, "mai").unwrap();
        assert_eq!(found.name, "main");
    }

    #[test]
    fn test_best_match_prefers_closest_length() {
        let branches = set(&["release-10", "release-1"]);
        let found = best_match(&branches, "release-1").unwrap();
        assert_eq!(found.name, "release-1");
    }

    #[test]
    fn test_best_match_length_distance_among_substring_matches() {
        // Neither starts with the pattern, so the tighter name wins.
        let branches = set(&["wip-develop-experiments", "my-develop"]);
        let found = best_match(&branches, "develop").unwrap();
        assert_eq!(found.name, "my-develop");
    }

    #[test]
    fn test_best_match_lexicographic_tiebreak() {
        let branches = set(&["feat-b", "feat-a"]);
        let found = best_match(&branches, "feat").unwrap();
        assert_eq!(found.name, "feat-a");
    }

    #[test]
    fn test_best_match_case_insensitive_keeps_original_casing() {
        let branches = set(&["Feature/Login"]);
        let found = best_match(&branches, "feature").unwrap();
        assert_eq!(found.name, "Feature/Login");
    }

    #[test]
    fn test_best_match_none_when_nothing_qualifies() {
        let branches = set(&["main", "dev"]);
        assert!(best_match(&branches, "nonexistent").is_none());
    }

    #[test]
    fn test_best_match_deterministic() {
        let branches = set(&["alpha", "alpine", "altair"]);
        let first = best_match(&branches, "al").unwrap().name.clone();
        for _ in 0..10 {
            assert_eq!(best_match(&branches, "al").unwrap().name, first);
        }
    }

    #[test]
    fn test_best_match_pattern_is_substring_not_regex() {
        // A regex would match "release-1" via the dot; substring must not.
        let branches = set(&["release-1"]);
        assert!(best_match(&branches, "release.1").is_none());
    }
}
