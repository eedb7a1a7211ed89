//! Facet catalog: the enumerable choices a caller can filter on.

use std::collections::BTreeSet;

/// MPAA ratings offered as filter choices, in display order.
///
/// Fixed regardless of which ratings actually appear in the catalog.
pub const MPAA_RATINGS: [&str; 5] = ["G", "PG", "PG-13", "R", "NC-17"];

/// Read-only view over the rating and genre facets of a `Catalog`.
#[derive(Debug, Clone, Copy)]
pub struct Facets<'a> {
    genres: &'a BTreeSet<String>,
}

impl<'a> Facets<'a> {
    pub(crate) fn new(genres: &'a BTreeSet<String>) -> Self {
        Self { genres }
    }

    pub fn ratings(&self) -> &'static [&'static str] {
        &MPAA_RATINGS
    }

    /// Distinct genres seen at load time. Iteration is sorted, but callers
    /// should treat this as a set.
    pub fn genres(&self) -> &'a BTreeSet<String> {
        self.genres
    }
}
