//! Query engine for the movie catalog.
//!
//! This crate provides:
//! - Filter trait and one implementation per attribute family
//! - FilterPipeline for composing filters
//! - Query and `evaluate` for running a search against a `Catalog`
//!
//! ## Architecture
//! A query threads the full catalog through a fixed sequence of stages:
//! 1. Title text match (case-insensitive substring)
//! 2. MPAA rating set membership
//! 3. Genre set membership
//! 4. IMDB score range
//! 5. Rotten Tomatoes score range
//!
//! A stage with no criterion passes its input through untouched. Results
//! keep catalog order; nothing is re-sorted or scored.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{evaluate, Query};
//! use pipeline::filters::RatingRange;
//!
//! let query = Query::new()
//!     .with_term("matrix")
//!     .with_mpaa_ratings(["R"])
//!     .with_imdb(RatingRange::at_least(7.0));
//!
//! for movie in evaluate(&catalog, &query) {
//!     println!("{:?}", movie.title);
//! }
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod query;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use query::{Query, evaluate, evaluate_batch};
pub use traits::Filter;
