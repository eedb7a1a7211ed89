//! Integration tests for the query engine.
//!
//! These tests load a catalog the same way the binary does (from JSON)
//! and check end-to-end query behavior.

use data_loader::{Catalog, Movie};
use pipeline::filters::*;
use pipeline::{Filter, FilterPipeline, Query, evaluate};

fn create_test_catalog() -> Catalog {
    Catalog::from_json_str(
        r#"[
            {"Title": "Se7en", "MajorGenre": "Thriller", "MPAARating": "R", "IMDBRating": 8.6, "RottenTomatoesRating": 82},
            {"Title": "Cars", "MajorGenre": "Animation", "MPAARating": "G", "IMDBRating": 7.1, "RottenTomatoesRating": 74},
            {"Title": "The Matrix", "MajorGenre": "Action", "MPAARating": "R", "IMDBRating": 8.7, "RottenTomatoesRating": 86},
            {"Title": "The Matrix Revolutions", "MajorGenre": "Action", "MPAARating": "R", "IMDBRating": 6.5, "RottenTomatoesRating": 37},
            {"Title": "Toy Story", "MajorGenre": "Animation", "MPAARating": "G", "IMDBRating": 8.2, "RottenTomatoesRating": 100},
            {"Title": "Untitled Drama", "MajorGenre": "Drama"},
            {"Title": "Mystery Reel"},
            {"MajorGenre": "Comedy", "MPAARating": "PG-13", "IMDBRating": 5.0}
        ]"#,
    )
    .unwrap()
}

fn titles<'a>(movies: &[&'a Movie]) -> Vec<&'a str> {
    movies.iter().map(|m| m.title.as_deref().unwrap_or("<untitled>")).collect()
}

#[test]
fn test_empty_query_returns_catalog_in_order() {
    let catalog = create_test_catalog();
    let results = evaluate(&catalog, &Query::new());

    assert_eq!(results.len(), catalog.len());
    for (result, original) in results.iter().zip(catalog.all()) {
        assert!(std::ptr::eq(*result, original));
    }
}

#[test]
fn test_end_to_end_rating_filter() {
    let catalog = Catalog::from_records(vec![
        Movie::titled("Se7en")
            .with_genre("Thriller")
            .with_mpaa_rating("R")
            .with_imdb_rating(8.6)
            .with_rotten_tomatoes_rating(82.0),
        Movie::titled("Cars")
            .with_genre("Animation")
            .with_mpaa_rating("G")
            .with_imdb_rating(7.1)
            .with_rotten_tomatoes_rating(74.0),
    ]);

    let query = Query::new()
        .with_term("")
        .with_mpaa_ratings(["G"])
        .with_imdb(RatingRange::default())
        .with_rotten_tomatoes(RatingRange::default());
    assert_eq!(titles(&evaluate(&catalog, &query)), vec!["Cars"]);

    let query = Query::new().with_imdb(RatingRange::at_least(8.0));
    assert_eq!(titles(&evaluate(&catalog, &query)), vec!["Se7en"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let catalog = create_test_catalog();

    let lower = evaluate(&catalog, &Query::new().with_term("matrix"));
    let upper = evaluate(&catalog, &Query::new().with_term("MATRIX"));

    assert_eq!(titles(&lower), vec!["The Matrix", "The Matrix Revolutions"]);
    assert_eq!(lower, upper);
}

#[test]
fn test_set_filters_never_return_absent_values() {
    let catalog = create_test_catalog();
    let ratings = ["G", "PG", "PG-13", "R", "NC-17"];

    let results = evaluate(&catalog, &Query::new().with_mpaa_ratings(ratings));
    assert_eq!(results.len(), 6);
    for movie in &results {
        let rating = movie.mpaa_rating.as_deref().expect("rating must be present");
        assert!(ratings.contains(&rating));
    }

    let results = evaluate(&catalog, &Query::new().with_genres(["Drama", "Comedy"]));
    assert_eq!(titles(&results), vec!["Untitled Drama", "<untitled>"]);
}

#[test]
fn test_ranges_respect_bounds() {
    let catalog = create_test_catalog();

    let results = evaluate(&catalog, &Query::new().with_imdb(RatingRange::between(7.0, 8.6)));
    assert_eq!(titles(&results), vec!["Se7en", "Cars", "Toy Story"]);
    for movie in &results {
        let score = movie.imdb_rating.unwrap();
        assert!((7.0..=8.6).contains(&score));
    }

    let results = evaluate(
        &catalog,
        &Query::new().with_rotten_tomatoes(RatingRange::between(90.0, 50.0)),
    );
    assert!(results.is_empty());
}

#[test]
fn test_max_only_range_excludes_unscored() {
    let catalog = create_test_catalog();
    let results = evaluate(&catalog, &Query::new().with_imdb(RatingRange::at_most(6.5)));
    assert_eq!(titles(&results), vec!["The Matrix Revolutions", "<untitled>"]);
}

#[test]
fn test_filter_order_is_commutative() {
    let catalog = create_test_catalog();
    let candidates = || catalog.all().iter().collect::<Vec<&Movie>>();

    let genre_then_rating = FilterPipeline::new()
        .add_filter(SetMembershipFilter::genre(["Animation", "Action"]))
        .add_filter(SetMembershipFilter::mpaa_rating(["R"]))
        .add_filter(NumericRangeFilter::imdb(RatingRange::at_least(7.0)));
    let rating_then_genre = FilterPipeline::new()
        .add_filter(NumericRangeFilter::imdb(RatingRange::at_least(7.0)))
        .add_filter(SetMembershipFilter::mpaa_rating(["R"]))
        .add_filter(SetMembershipFilter::genre(["Animation", "Action"]));

    let a = genre_then_rating.apply(candidates());
    let b = rating_then_genre.apply(candidates());

    assert_eq!(titles(&a), vec!["The Matrix"]);
    assert_eq!(a, b);
}

#[test]
fn test_full_query_combines_all_criteria() {
    let catalog = create_test_catalog();

    let query = Query::new()
        .with_term("E")
        .with_mpaa_ratings(["G", "R"])
        .with_genres(["Animation", "Thriller"])
        .with_imdb(RatingRange::at_least(7.5))
        .with_rotten_tomatoes(RatingRange::at_most(90.0));

    assert_eq!(titles(&evaluate(&catalog, &query)), vec!["Se7en"]);
}

#[test]
fn test_unknown_criteria_yield_empty_not_error() {
    let catalog = create_test_catalog();

    assert!(evaluate(&catalog, &Query::new().with_genres(["Space Western"])).is_empty());
    assert!(evaluate(&catalog, &Query::new().with_term("zzzz")).is_empty());
    assert!(evaluate(&Catalog::default(), &Query::new().with_term("cars")).is_empty());
}

#[test]
fn test_individual_filters_match_pipeline() {
    let catalog = create_test_catalog();
    let candidates: Vec<&Movie> = catalog.all().iter().collect();

    let by_hand = TextMatchFilter::new(Some("the")).apply(candidates);
    let by_hand = SetMembershipFilter::mpaa_rating(["R"]).apply(by_hand);

    let composed = evaluate(
        &catalog,
        &Query::new().with_term("the").with_mpaa_ratings(["R"]),
    );
    assert_eq!(by_hand, composed);
}

#[test]
fn test_genre_facet_from_loaded_catalog() {
    let catalog = create_test_catalog();
    let genres: Vec<&str> = catalog.facets().genres().iter().map(String::as_str).collect();

    assert_eq!(genres, vec!["Action", "Animation", "Comedy", "Drama", "Thriller"]);
}
