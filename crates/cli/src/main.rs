use anyhow::{ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use data_loader::{Catalog, Movie};
use pipeline::filters::RatingRange;
use pipeline::{evaluate, evaluate_batch, Query};
use rand::Rng;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Movie Search - filtered queries over a movie catalog
#[derive(Parser)]
#[command(name = "movie-search")]
#[command(about = "Search a movie catalog by title, MPAA rating, genre and review scores", long_about = None)]
struct Cli {
    /// Path to the movie catalog (a JSON array of movie records)
    #[arg(short, long, default_value = "movies.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog. With no criteria, lists every movie
    Search {
        #[command(flatten)]
        criteria: SearchArgs,

        /// Print matches as a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the MPAA ratings and genres available as filter choices
    Facets,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of random queries to run
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of queries in flight at once
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

/// Search criteria, bound from command-line flags the same way a web form
/// would bind its fields. Omitted flags mean "do not filter on this".
#[derive(Args, Debug, Default)]
struct SearchArgs {
    /// Case-insensitive substring to look for in titles
    #[arg(long)]
    title: Option<String>,

    /// Accepted MPAA rating; repeat for several (e.g. --rating G --rating PG)
    #[arg(long = "rating", value_name = "RATING")]
    ratings: Vec<String>,

    /// Accepted major genre; repeat for several
    #[arg(long = "genre", value_name = "GENRE")]
    genres: Vec<String>,

    /// Minimum IMDB rating (inclusive)
    #[arg(long)]
    imdb_min: Option<f64>,

    /// Maximum IMDB rating (inclusive)
    #[arg(long)]
    imdb_max: Option<f64>,

    /// Minimum Rotten Tomatoes rating (inclusive)
    #[arg(long)]
    rt_min: Option<f64>,

    /// Maximum Rotten Tomatoes rating (inclusive)
    #[arg(long)]
    rt_max: Option<f64>,
}

impl SearchArgs {
    fn to_query(&self) -> Query {
        let mut query = Query::new()
            .with_mpaa_ratings(self.ratings.iter().cloned())
            .with_genres(self.genres.iter().cloned())
            .with_imdb(RatingRange::new(self.imdb_min, self.imdb_max))
            .with_rotten_tomatoes(RatingRange::new(self.rt_min, self.rt_max));
        if let Some(title) = &self.title {
            query = query.with_term(title.clone());
        }
        query
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // No catalog means nothing to serve: fail here, before any query runs
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_file(&cli.data).context("Failed to load movie catalog")?,
    );
    info!("Catalog ready in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search { criteria, json } => handle_search(&catalog, &criteria, json)?,
        Commands::Facets => handle_facets(&catalog),
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(catalog, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, criteria: &SearchArgs, json: bool) -> Result<()> {
    let query = criteria.to_query();
    let results = evaluate(catalog, &query);

    if json {
        let out = serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
        println!("{}", out);
        return Ok(());
    }

    if results.is_empty() {
        println!("{}", "No movies matched".yellow());
        return Ok(());
    }

    print_movies(&results);
    println!(
        "{} {} of {} movies",
        "✓".green(),
        results.len(),
        catalog.len()
    );
    Ok(())
}

/// Handle the 'facets' command
fn handle_facets(catalog: &Catalog) {
    let facets = catalog.facets();

    println!("{}", "MPAA ratings:".bold().blue());
    for rating in facets.ratings() {
        println!("  {} {}", "•".green(), rating);
    }

    println!("{}", "Genres:".bold().blue());
    for genre in facets.genres() {
        println!("  {} {}", "•".green(), genre);
    }
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    catalog: Arc<Catalog>,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    ensure!(requests > 0, "--requests must be at least 1");
    ensure!(concurrent > 0, "--concurrent must be at least 1");

    let queries = random_queries(&catalog, requests);

    // Concurrent single-query requests, all sharing one catalog
    let wall = Instant::now();
    let mut timings = Vec::with_capacity(requests);
    let mut matched = 0usize;
    for chunk in queries.chunks(concurrent) {
        let mut handles = Vec::with_capacity(chunk.len());
        for query in chunk {
            let catalog = Arc::clone(&catalog);
            let query = query.clone();
            handles.push(tokio::task::spawn_blocking(move || {
                let start = Instant::now();
                let count = evaluate(&catalog, &query).len();
                (start.elapsed(), count)
            }));
        }
        for handle in handles {
            let (elapsed, count) = handle.await?;
            timings.push(elapsed);
            matched += count;
        }
    }
    let total_time = wall.elapsed();

    // The same queries again as one data-parallel batch
    let batch_start = Instant::now();
    let batch_matched: usize = evaluate_batch(&catalog, &queries)
        .iter()
        .map(Vec::len)
        .sum();
    let batch_time = batch_start.elapsed();

    timings.sort();
    let avg_latency = average(&timings);
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Catalog size: {} movies", catalog.len());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(&timings, 0.50));
    println!("P95 latency: {:?}", percentile(&timings, 0.95));
    println!("P99 latency: {:?}", percentile(&timings, 0.99));
    println!("Throughput: {:.2} queries/second", throughput);
    println!("Average matches per query: {:.1}", matched as f64 / requests as f64);
    println!(
        "Batch pass: {:?} ({:.2} queries/second)",
        batch_time,
        requests as f64 / batch_time.as_secs_f64()
    );

    if batch_matched != matched {
        tracing::warn!(
            "Batch matched {} movies but concurrent run matched {}",
            batch_matched,
            matched
        );
    }
    Ok(())
}

/// Build random queries drawn from the catalog's own facets.
fn random_queries(catalog: &Catalog, count: usize) -> Vec<Query> {
    let mut rng = rand::rng();
    let ratings = catalog.facets().ratings();
    let genres: Vec<&String> = catalog.facets().genres().iter().collect();
    let terms = ["the", "man", "love", "star", "night", "a"];

    (0..count)
        .map(|_| {
            let mut query = Query::new();
            if rng.random_bool(0.3) {
                query = query.with_term(terms[rng.random_range(0..terms.len())]);
            }
            if rng.random_bool(0.5) {
                query = query.with_mpaa_ratings([ratings[rng.random_range(0..ratings.len())]]);
            }
            if !genres.is_empty() && rng.random_bool(0.5) {
                query = query.with_genres([genres[rng.random_range(0..genres.len())].clone()]);
            }
            if rng.random_bool(0.5) {
                let min = rng.random_range(0.0..9.0);
                query = query.with_imdb(RatingRange::between(min, min + rng.random_range(0.5..3.0)));
            }
            if rng.random_bool(0.3) {
                query = query.with_rotten_tomatoes(RatingRange::at_least(rng.random_range(0.0..100.0)));
            }
            query
        })
        .collect()
}

/// Mean of a non-empty slice, without narrowing the count to `u32`
fn average(timings: &[Duration]) -> Duration {
    timings.iter().sum::<Duration>().div_f64(timings.len() as f64)
}

/// Nearest-rank percentile of an already sorted, non-empty slice
fn percentile(sorted: &[Duration], p: f64) -> Duration {
    let rank = ((sorted.len() - 1) as f64 * p).round() as usize;
    sorted[rank.min(sorted.len() - 1)]
}

fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "-".to_string(), |s| format!("{}", s))
}

/// Helper function to format and print search results
fn print_movies(movies: &[&Movie]) {
    println!(
        "{}",
        format!(
            "{:<45} {:<20} {:<6} {:>5} {:>5}",
            "Title", "Genre", "MPAA", "IMDB", "RT"
        )
        .bold()
        .blue()
    );
    for movie in movies {
        println!(
            "{:<45} {:<20} {:<6} {:>5} {:>5}",
            movie.title.as_deref().unwrap_or("-"),
            movie.major_genre.as_deref().unwrap_or("-"),
            movie.mpaa_rating.as_deref().unwrap_or("-"),
            format_score(movie.imdb_rating),
            format_score(movie.rotten_tomatoes_rating),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_args_bind_into_query() {
        let cli = Cli::parse_from([
            "movie-search",
            "--data",
            "catalog.json",
            "search",
            "--title",
            "matrix",
            "--rating",
            "R",
            "--rating",
            "PG-13",
            "--imdb-min",
            "7.5",
            "--rt-max",
            "90",
        ]);
        assert_eq!(cli.data, PathBuf::from("catalog.json"));

        let Commands::Search { criteria, json } = cli.command else {
            panic!("expected search command");
        };
        assert!(!json);

        let query = criteria.to_query();
        assert_eq!(query.term.as_deref(), Some("matrix"));
        assert_eq!(query.mpaa_ratings, vec!["R", "PG-13"]);
        assert!(query.genres.is_empty());
        assert_eq!(query.imdb, RatingRange::at_least(7.5));
        assert_eq!(query.rotten_tomatoes, RatingRange::at_most(90.0));
    }

    #[test]
    fn test_empty_search_args_are_unfiltered() {
        assert!(SearchArgs::default().to_query().is_unfiltered());
    }

    #[test]
    fn test_random_queries_use_catalog_facets() {
        let catalog = Catalog::from_records(vec![Movie::titled("Cars").with_genre("Animation")]);
        let queries = random_queries(&catalog, 50);

        assert_eq!(queries.len(), 50);
        for query in &queries {
            assert!(query.genres.iter().all(|g| g == "Animation"));
            assert!(query.mpaa_ratings.len() <= 1);
        }
    }

    #[test]
    fn test_percentile() {
        let timings: Vec<Duration> = (1..=100).map(Duration::from_millis).collect();
        assert_eq!(percentile(&timings, 0.0), Duration::from_millis(1));
        assert_eq!(percentile(&timings, 0.5), Duration::from_millis(51));
        assert_eq!(percentile(&timings, 1.0), Duration::from_millis(100));
        assert_eq!(percentile(&[Duration::from_millis(7)], 0.99), Duration::from_millis(7));
    }

    #[test]
    fn test_average() {
        let timings = [Duration::from_millis(10), Duration::from_millis(30)];
        assert_eq!(average(&timings), Duration::from_millis(20));
        assert_eq!(average(&[Duration::from_secs(3)]), Duration::from_secs(3));
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(None), "-");
        assert_eq!(format_score(Some(8.6)), "8.6");
        assert_eq!(format_score(Some(82.0)), "82");
    }
}
