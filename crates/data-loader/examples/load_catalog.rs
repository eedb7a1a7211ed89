use data_loader::Catalog;
use std::env;
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("movies.json"));

    println!("Loading movie catalog from {}...\n", path.display());

    let start = Instant::now();
    let catalog = Catalog::load_from_file(&path).expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let facets = catalog.facets();
    let rated = catalog
        .all()
        .iter()
        .filter(|m| m.mpaa_rating.is_some())
        .count();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", catalog.len());
    println!("With MPAA rating: {}", rated);
    println!("Genres: {}", facets.genres().len());
    println!(
        "\nPerformance: {:.0} movies/second",
        catalog.len() as f64 / elapsed.as_secs_f64()
    );
}
