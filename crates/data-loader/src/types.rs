//! Core domain types for the movie catalog.
//!
//! Every interpreted field is optional: a record with no MPAA rating is
//! different from one rated `""`, and a missing IMDB score is never zero.

use crate::facets::Facets;
use crate::parser::{lenient_score, lenient_text};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// Movie
// =============================================================================

/// A single movie record as loaded from the catalog source.
///
/// Only the five fields below are interpreted by the query engine. Any other
/// key in the source record is kept untouched in `extra` and written back
/// out when the movie is serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "Title", default, deserialize_with = "lenient_text")]
    pub title: Option<String>,

    #[serde(
        rename = "MajorGenre",
        alias = "Major Genre",
        default,
        deserialize_with = "lenient_text"
    )]
    pub major_genre: Option<String>,

    #[serde(
        rename = "MPAARating",
        alias = "MPAA Rating",
        default,
        deserialize_with = "lenient_text"
    )]
    pub mpaa_rating: Option<String>,

    /// IMDB user score, 0.0 - 10.0 in practice
    #[serde(
        rename = "IMDBRating",
        alias = "IMDB Rating",
        default,
        deserialize_with = "lenient_score"
    )]
    pub imdb_rating: Option<f64>,

    /// Rotten Tomatoes critic score, 0 - 100 in practice
    #[serde(
        rename = "RottenTomatoesRating",
        alias = "Rotten Tomatoes Rating",
        default,
        deserialize_with = "lenient_score"
    )]
    pub rotten_tomatoes_rating: Option<f64>,

    /// Passthrough fields (gross, budget, director, ...), never interpreted
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Movie {
    /// Create a movie with only a title set.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.major_genre = Some(genre.into());
        self
    }

    pub fn with_mpaa_rating(mut self, rating: impl Into<String>) -> Self {
        self.mpaa_rating = Some(rating.into());
        self
    }

    pub fn with_imdb_rating(mut self, rating: f64) -> Self {
        self.imdb_rating = Some(rating);
        self
    }

    pub fn with_rotten_tomatoes_rating(mut self, rating: f64) -> Self {
        self.rotten_tomatoes_rating = Some(rating);
        self
    }
}

// =============================================================================
// Catalog - the immutable record store
// =============================================================================

/// The full, ordered movie catalog plus the facets derived from it.
///
/// A `Catalog` is built once (see `index.rs`) and never mutated afterwards,
/// so it can be wrapped in an `Arc` and shared by any number of concurrent
/// queries without locking. Insertion order is the canonical order of every
/// result produced from it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) movies: Vec<Movie>,
    /// Distinct non-absent `major_genre` values
    pub(crate) genres: BTreeSet<String>,
}

impl Catalog {
    /// Every movie, in source order. This is the starting candidate set for
    /// every query.
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Genres observed in the catalog at load time.
    pub fn genres(&self) -> &BTreeSet<String> {
        &self.genres
    }

    /// Read-only view of the filter choices offered to callers.
    pub fn facets(&self) -> Facets<'_> {
        Facets::new(&self.genres)
    }
}
