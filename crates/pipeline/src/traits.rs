//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! independently testable predicates to be chained over a candidate set.

use data_loader::Movie;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows one pipeline to serve concurrent queries
/// - Candidates are borrowed from the `Catalog`; filters only drop
///   references and never touch the movies themselves
/// - Relative order of the surviving candidates must be preserved
/// - There is no error path: every criterion, however odd, yields a
///   (possibly empty) candidate set
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// A filter whose criterion is absent or empty must return
    /// `candidates` unchanged.
    fn apply<'a>(&self, candidates: Vec<&'a Movie>) -> Vec<&'a Movie>;
}
