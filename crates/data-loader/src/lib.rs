//! # Data Loader Crate
//!
//! This crate owns the movie catalog: loading it once, holding it
//! immutably, and deriving the facets callers filter on.
//!
//! ## Main Components
//!
//! - **types**: `Movie` and `Catalog`
//! - **parser**: decode the JSON record array, with lenient scalar coercion
//! - **index**: build a `Catalog` and its genre facet
//! - **facets**: fixed MPAA ratings and the read-only `Facets` view
//! - **error**: `DataLoadError`, the only error class in the system
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("movies.json"))?;
//!
//! println!("{} movies", catalog.len());
//! for genre in catalog.facets().genres() {
//!     println!("{}", genre);
//! }
//! ```

// Public modules
pub mod error;
pub mod facets;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use facets::{Facets, MPAA_RATINGS};
pub use types::{Catalog, Movie};
