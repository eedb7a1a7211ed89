//! Filter on categorical attributes (MPAA rating, genre).

use crate::traits::Filter;
use data_loader::Movie;
use std::collections::HashSet;

/// Which categorical field a `SetMembershipFilter` reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryField {
    MpaaRating,
    MajorGenre,
}

impl CategoryField {
    pub fn get(self, movie: &Movie) -> Option<&str> {
        match self {
            CategoryField::MpaaRating => movie.mpaa_rating.as_deref(),
            CategoryField::MajorGenre => movie.major_genre.as_deref(),
        }
    }
}

/// Keeps movies whose category value is one of the allowed values.
///
/// ## Algorithm
/// An empty allowed set disables the filter. Otherwise a movie passes
/// only if its field is present and appears in the set (exact,
/// case-sensitive comparison). A movie with no value for the field is
/// always excluded by a non-empty set.
pub struct SetMembershipFilter {
    field: CategoryField,
    allowed: HashSet<String>,
}

impl SetMembershipFilter {
    /// Create a new SetMembershipFilter.
    ///
    /// # Arguments
    /// * `field` - The category to read from each movie
    /// * `allowed` - Accepted values; empty means "no restriction"
    pub fn new<I, S>(field: CategoryField, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field,
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn mpaa_rating<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(CategoryField::MpaaRating, allowed)
    }

    pub fn genre<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(CategoryField::MajorGenre, allowed)
    }
}

impl Filter for SetMembershipFilter {
    fn name(&self) -> &str {
        match self.field {
            CategoryField::MpaaRating => "MpaaRatingFilter",
            CategoryField::MajorGenre => "GenreFilter",
        }
    }

    fn apply<'a>(&self, candidates: Vec<&'a Movie>) -> Vec<&'a Movie> {
        if self.allowed.is_empty() {
            return candidates;
        }

        candidates
            .into_iter()
            .filter(|movie| {
                self.field
                    .get(movie)
                    .is_some_and(|value| self.allowed.contains(value))
            })
            .collect()
    }
}
