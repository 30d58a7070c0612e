//! Fuzzy matching for "did you mean" hints on unknown names.

use strsim::jaro_winkler;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Minimum similarity threshold for suggestions (0.0 to 1.0).
const MIN_SIMILARITY: f64 = 0.7;

/// Maximum number of suggestions to show.
const MAX_SUGGESTIONS: usize = 3;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Find candidates similar to `query`, best match first.
pub fn find_similar(query: &str, candidates: &[&str]) -> Vec<String> {
    let query = query.to_lowercase();
    let mut scored: Vec<(&str, f64)> = candidates
        .iter()
        .map(|candidate| (*candidate, jaro_winkler(&query, candidate)))
        .filter(|(_, score)| *score >= MIN_SIMILARITY)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Format suggestions in cargo-style. Returns None if there are none.
pub fn format_suggestions(suggestions: &[String]) -> Option<String> {
    match suggestions.len() {
        0 => None,
        1 => Some(format!("Did you mean `{}`?", suggestions[0])),
        _ => {
            let formatted: Vec<String> = suggestions.iter().map(|s| format!("`{}`", s)).collect();
            Some(format!("Did you mean one of: {}?", formatted.join(", ")))
        }
    }
}

/// Shorthand for [`find_similar`] followed by [`format_suggestions`].
pub fn suggest(query: &str, candidates: &[&str]) -> Option<String> {
    format_suggestions(&find_similar(query, candidates))
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_similar_typo() {
        let found = find_similar("cursr", &["claude", "cursor", "vscode", "generic"]);
        assert_eq!(found.first().map(String::as_str), Some("cursor"));
    }

    #[test]
    fn test_find_similar_no_match() {
        assert!(find_similar("zzzz", &["claude", "cursor"]).is_empty());
    }

    #[test]
    fn test_format_suggestions() {
        assert_eq!(format_suggestions(&[]), None);
        assert_eq!(
            format_suggestions(&["linux".to_string()]),
            Some("Did you mean `linux`?".to_string())
        );
        assert_eq!(
            format_suggestions(&["a".to_string(), "b".to_string()]),
            Some("Did you mean one of: `a`, `b`?".to_string())
        );
    }
}
