//! Filter on numeric score ranges (IMDB, Rotten Tomatoes).

use crate::traits::Filter;
use data_loader::Movie;

/// Which score a `NumericRangeFilter` reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreField {
    Imdb,
    RottenTomatoes,
}

impl ScoreField {
    pub fn get(self, movie: &Movie) -> Option<f64> {
        match self {
            ScoreField::Imdb => movie.imdb_rating,
            ScoreField::RottenTomatoes => movie.rotten_tomatoes_rating,
        }
    }
}

/// An inclusive range with optional bounds.
///
/// `min > max` is not an error; such a range simply admits nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RatingRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn at_least(min: f64) -> Self {
        Self::new(Some(min), None)
    }

    pub fn at_most(max: f64) -> Self {
        Self::new(None, Some(max))
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self::new(Some(min), Some(max))
    }

    /// True when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Whether a (possibly absent) score falls inside this range.
    ///
    /// An absent score is only admitted by an unbounded range.
    pub fn admits(&self, value: Option<f64>) -> bool {
        match (self.min, self.max, value) {
            (None, None, _) => true,
            (_, _, None) => false,
            (Some(min), None, Some(v)) => v >= min,
            (None, Some(max), Some(v)) => v <= max,
            (Some(min), Some(max), Some(v)) => min <= v && v <= max,
        }
    }
}

/// Keeps movies whose score lies inside a range.
///
/// ## Algorithm
/// - no bounds: identity, nothing is dropped
/// - only `max`: keep `score <= max`
/// - only `min`: keep `score >= min`
/// - both: keep `min <= score <= max`
///
/// Movies with no score are dropped by any bounded range.
pub struct NumericRangeFilter {
    field: ScoreField,
    range: RatingRange,
}

impl NumericRangeFilter {
    /// Create a new NumericRangeFilter.
    pub fn new(field: ScoreField, range: RatingRange) -> Self {
        Self { field, range }
    }

    pub fn imdb(range: RatingRange) -> Self {
        Self::new(ScoreField::Imdb, range)
    }

    pub fn rotten_tomatoes(range: RatingRange) -> Self {
        Self::new(ScoreField::RottenTomatoes, range)
    }
}

impl Filter for NumericRangeFilter {
    fn name(&self) -> &str {
        match self.field {
            ScoreField::Imdb => "ImdbRatingFilter",
            ScoreField::RottenTomatoes => "RottenTomatoesRatingFilter",
        }
    }

    fn apply<'a>(&self, candidates: Vec<&'a Movie>) -> Vec<&'a Movie> {
        if self.range.is_unbounded() {
            return candidates;
        }

        candidates
            .into_iter()
            .filter(|movie| self.range.admits(self.field.get(movie)))
            .collect()
    }
}
