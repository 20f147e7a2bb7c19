//! Amenity autocomplete over the static vocabulary
//!
//! Suggestions are recomputed on every keystroke: case-insensitive substring
//! match over the vocabulary, minus tags already selected. An empty input
//! yields the full vocabulary minus selected tags (the recommended-tags
//! behavior). Order is always vocabulary display order, never relevance.

use serde::Deserialize;
use tracing::error;

/// Bundled JSON for the amenity vocabulary
pub const VOCABULARY_FIXTURE: &str = include_str!("../../fixtures/amenity_vocabulary.json");

/// The flat, ordered list of amenity names available as filter tags
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct AmenityVocabulary {
    names: Vec<String>,
}

impl AmenityVocabulary {
    /// Parse the bundled vocabulary resource
    ///
    /// A malformed resource degrades to an empty vocabulary for the session;
    /// the failure is logged, not propagated.
    pub fn bundled() -> Self {
        Self::from_json(VOCABULARY_FIXTURE)
    }

    /// Parse a vocabulary from raw JSON, degrading to empty on failure
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(vocabulary) => vocabulary,
            Err(e) => {
                error!("Error loading amenity vocabulary: {}", e);
                Self { names: Vec::new() }
            }
        }
    }

    /// Build a vocabulary from explicit names (tests)
    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    /// All amenity names in display order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of amenity names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The live suggestion list for the current input and selection
    ///
    /// A candidate contains `input` as a case-insensitive substring and is
    /// not already selected. An empty input matches everything.
    pub fn suggestions<'a>(&'a self, input: &str, selected: &[String]) -> Vec<&'a str> {
        let needle = input.to_lowercase();
        self.names
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .filter(|name| !selected.iter().any(|tag| tag == *name))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> AmenityVocabulary {
        AmenityVocabulary::from_names(vec![
            "尿布檯".to_string(),
            "哺乳室隔簾".to_string(),
            "獨立隔間室".to_string(),
            "親子休息室".to_string(),
            "Wi-Fi".to_string(),
        ])
    }

    #[test]
    fn test_substring_match() {
        let vocab = vocabulary();
        let candidates = vocab.suggestions("室", &[]);
        assert_eq!(candidates, vec!["哺乳室隔簾", "獨立隔間室", "親子休息室"]);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let vocab = vocabulary();
        assert_eq!(vocab.suggestions("wi-fi", &[]), vec!["Wi-Fi"]);
        assert_eq!(vocab.suggestions("WI-FI", &[]), vec!["Wi-Fi"]);
    }

    #[test]
    fn test_selected_tags_are_excluded() {
        let vocab = vocabulary();
        let selected = vec!["獨立隔間室".to_string()];
        let candidates = vocab.suggestions("室", &selected);
        assert_eq!(candidates, vec!["哺乳室隔簾", "親子休息室"]);
    }

    #[test]
    fn test_empty_input_recommends_everything_unselected() {
        let vocab = vocabulary();
        let selected = vec!["尿布檯".to_string()];
        let candidates = vocab.suggestions("", &selected);
        assert_eq!(candidates, vec!["哺乳室隔簾", "獨立隔間室", "親子休息室", "Wi-Fi"]);
    }

    #[test]
    fn test_order_is_vocabulary_order() {
        let vocab = vocabulary();
        // "隔" hits two entries; order must follow the vocabulary, not input
        assert_eq!(vocab.suggestions("隔", &[]), vec!["哺乳室隔簾", "獨立隔間室"]);
    }

    #[test]
    fn test_bundled_vocabulary_parses() {
        let vocab = AmenityVocabulary::bundled();
        assert!(!vocab.is_empty());
    }

    #[test]
    fn test_malformed_vocabulary_degrades_to_empty() {
        let vocab = AmenityVocabulary::from_json("{ not json");
        assert!(vocab.is_empty());
        assert!(vocab.suggestions("室", &[]).is_empty());
    }
}
