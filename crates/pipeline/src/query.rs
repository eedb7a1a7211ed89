//! Query composition: one search term plus optional filter criteria,
//! evaluated against a `Catalog`.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{NumericRangeFilter, RatingRange, SetMembershipFilter, TextMatchFilter};
use data_loader::{Catalog, Movie};
use rayon::prelude::*;
use std::time::Instant;
use tracing::debug;

/// A single search request.
///
/// Every criterion is optional. An absent term, an empty rating or genre
/// list, or an unbounded range means "do not filter on this attribute".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub term: Option<String>,
    pub mpaa_ratings: Vec<String>,
    pub genres: Vec<String>,
    pub imdb: RatingRange,
    pub rotten_tomatoes: RatingRange,
}

impl Query {
    /// A query with no criteria; it matches the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn with_mpaa_ratings<I, S>(mut self, ratings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mpaa_ratings = ratings.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_imdb(mut self, range: RatingRange) -> Self {
        self.imdb = range;
        self
    }

    pub fn with_rotten_tomatoes(mut self, range: RatingRange) -> Self {
        self.rotten_tomatoes = range;
        self
    }

    /// True when no criterion would drop anything.
    pub fn is_unfiltered(&self) -> bool {
        self.term.as_deref().is_none_or(str::is_empty)
            && self.mpaa_ratings.is_empty()
            && self.genres.is_empty()
            && self.imdb.is_unbounded()
            && self.rotten_tomatoes.is_unbounded()
    }

    /// Build the filter stages for this query.
    ///
    /// Stage order: title text, MPAA rating, genre, IMDB score,
    /// Rotten Tomatoes score. Every stage is a pure narrowing filter, so
    /// order only affects how much work later stages do.
    pub fn pipeline(&self) -> FilterPipeline {
        FilterPipeline::new()
            .add_filter(TextMatchFilter::new(self.term.as_deref()))
            .add_filter(SetMembershipFilter::mpaa_rating(self.mpaa_ratings.iter().cloned()))
            .add_filter(SetMembershipFilter::genre(self.genres.iter().cloned()))
            .add_filter(NumericRangeFilter::imdb(self.imdb))
            .add_filter(NumericRangeFilter::rotten_tomatoes(self.rotten_tomatoes))
    }
}

/// Evaluate a query against the catalog.
///
/// Returns matching movies in catalog order. This never fails: "no
/// matches" is an empty vector, including for inverted ranges and values
/// that appear nowhere in the catalog.
pub fn evaluate<'a>(catalog: &'a Catalog, query: &Query) -> Vec<&'a Movie> {
    let start = Instant::now();

    let candidates: Vec<&Movie> = catalog.all().iter().collect();
    let results = if query.is_unfiltered() {
        candidates
    } else {
        query.pipeline().apply(candidates)
    };

    debug!(
        "Query matched {} of {} movies in {:.2?}",
        results.len(),
        catalog.len(),
        start.elapsed()
    );
    results
}

/// Evaluate many independent queries in parallel.
///
/// `results[i]` answers `queries[i]`. The catalog is only read, so no
/// coordination between queries is needed.
pub fn evaluate_batch<'a>(catalog: &'a Catalog, queries: &[Query]) -> Vec<Vec<&'a Movie>> {
    queries
        .par_iter()
        .map(|query| evaluate(catalog, query))
        .collect()
}
