//! Free-text title search.

use crate::traits::Filter;
use data_loader::Movie;

/// Keeps movies whose title contains the search term, ignoring case.
///
/// ## Algorithm
/// The term is folded once up front; each title is folded and checked
/// for substring containment. Folding maps every character on its own,
/// with no locale or word-position rules, so both sides always fold the
/// same way.
/// Movies without a title never match a non-empty term.
pub struct TextMatchFilter {
    needle: Option<String>,
}

impl TextMatchFilter {
    /// Create a new TextMatchFilter. `None` and `""` both disable it.
    pub fn new(term: Option<&str>) -> Self {
        Self {
            needle: term.filter(|t| !t.is_empty()).map(fold_case),
        }
    }

    fn matches(needle: &str, movie: &Movie) -> bool {
        movie
            .title
            .as_deref()
            .is_some_and(|title| fold_case(title).contains(needle))
    }
}

/// Lowercase character by character.
///
/// `str::to_lowercase` maps a final capital sigma differently from a
/// medial one, which would let an exact-case term miss its own title.
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

impl Filter for TextMatchFilter {
    fn name(&self) -> &str {
        "TextMatchFilter"
    }

    fn apply<'a>(&self, candidates: Vec<&'a Movie>) -> Vec<&'a Movie> {
        let Some(needle) = self.needle.as_deref() else {
            return candidates;
        };

        candidates
            .into_iter()
            .filter(|movie| Self::matches(needle, movie))
            .collect()
    }
}
