//! Filter implementations for the query pipeline.
//!
//! One filter per attribute family. Each is a pure function over a
//! candidate sequence and can be composed into a FilterPipeline.

pub mod numeric_range;
pub mod set_membership;
pub mod text_match;

// Re-export for convenience
pub use numeric_range::{NumericRangeFilter, RatingRange, ScoreField};
pub use set_membership::{CategoryField, SetMembershipFilter};
pub use text_match::TextMatchFilter;
