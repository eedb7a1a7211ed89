//! Catalog construction.
//!
//! Loading happens once at startup:
//! 1. Decode the raw records (file, reader or string)
//! 2. Keep them in source order, no dedup or merging
//! 3. Scan once to build the genre facet

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::{Catalog, Movie};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::{debug, info};

impl Catalog {
    /// Load the catalog from a JSON file.
    ///
    /// This is the main entry point for the binary. A failure here is fatal:
    /// the process cannot serve queries without a catalog.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {}", path.display());

        let file = File::open(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => DataLoadError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => DataLoadError::IoError(err),
        })?;

        let movies = parser::parse_movies_reader(BufReader::new(file), &path.display().to_string())?;
        let catalog = Self::from_records(movies);

        info!(
            "Loaded {} movies across {} genres",
            catalog.len(),
            catalog.genres.len()
        );
        Ok(catalog)
    }

    /// Load the catalog from any reader producing a JSON array.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let movies = parser::parse_movies_reader(reader, "<reader>")?;
        Ok(Self::from_records(movies))
    }

    /// Load the catalog from an in-memory JSON string (embedded assets, tests).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let movies = parser::parse_movies_str(json, "<string>")?;
        Ok(Self::from_records(movies))
    }

    /// Build a catalog from already-decoded records.
    ///
    /// Order is preserved exactly as given.
    pub fn from_records(movies: Vec<Movie>) -> Self {
        let genres = build_genre_index(&movies);
        debug!(
            "Built genre facet with {} entries from {} movies",
            genres.len(),
            movies.len()
        );
        Self { movies, genres }
    }
}

/// Collect every distinct genre that is actually present.
fn build_genre_index(movies: &[Movie]) -> BTreeSet<String> {
    movies
        .iter()
        .filter_map(|movie| movie.major_genre.clone())
        .collect()
}
