// Integration tests for bookrec
use bookrec::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

fn write_snapshots(dir: &Path) {
    let axis = serde_json::json!([
        "Dune",
        "Emma",
        "The Silmarillion",
        "Dracula",
        "The Two Towers",
        "The Hobbit"
    ]);

    let books = serde_json::json!([
        {"Book-Title": "Dune", "Book-Author": "Frank Herbert", "Image-URL-M": "http://covers/dune.jpg"},
        {"Book-Title": "Emma", "Book-Author": "Jane Austen", "Image-URL-M": "http://covers/emma.jpg"},
        {"Book-Title": "The Silmarillion", "Book-Author": "J.R.R. Tolkien", "Image-URL-M": "http://covers/silmarillion.jpg"},
        {"Book-Title": "Dracula", "Book-Author": "Bram Stoker", "Image-URL-M": "http://covers/dracula.jpg"},
        {"Book-Title": "The Two Towers", "Book-Author": "J.R.R. Tolkien", "Image-URL-M": "http://covers/towers.jpg"},
        {"Book-Title": "The Two Towers", "Book-Author": "J.R.R. Tolkien", "Image-URL-M": "http://covers/towers-reprint.jpg"},
        {"Book-Title": "The Hobbit", "Book-Author": "J.R.R. Tolkien", "Image-URL-M": "http://covers/hobbit.jpg"}
    ]);

    // Row 5 is "The Hobbit": Two Towers 0.9 > Silmarillion 0.85 >
    // Dune 0.2 > Dracula 0.1 > Emma 0.05.
    let similarity = serde_json::json!([
        [1.0, 0.0, 0.0, 0.0, 0.0, 0.2],
        [0.0, 1.0, 0.0, 0.0, 0.0, 0.05],
        [0.0, 0.0, 1.0, 0.0, 0.0, 0.85],
        [0.0, 0.0, 0.0, 1.0, 0.0, 0.1],
        [0.0, 0.0, 0.0, 0.0, 1.0, 0.9],
        [0.2, 0.05, 0.85, 0.1, 0.9, 1.0]
    ]);

    let popular = serde_json::json!([
        {"Book-Title": "The Hobbit", "Book-Author": "J.R.R. Tolkien",
         "Image-URL-M": "http://covers/hobbit.jpg", "Num-Ratings": 2387, "Avg-Rating": 4.7}
    ]);

    std::fs::write(dir.join("pivot.json"), axis.to_string()).unwrap();
    std::fs::write(dir.join("books.json"), books.to_string()).unwrap();
    std::fs::write(dir.join("similarity.json"), similarity.to_string()).unwrap();
    std::fs::write(dir.join("popular.json"), popular.to_string()).unwrap();
}

#[test]
fn loads_snapshots_and_ranks_neighbors() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshots(dir.path());

    let store = CatalogStore::load(dir.path()).unwrap();
    let catalog = store.catalog();

    let rec = recommend(&catalog, "The Hobbit", Mode::Book);
    assert!(!rec.is_fallback());

    let titles: Vec<&str> = rec.books().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["The Two Towers", "The Silmarillion", "Dune", "Dracula"]
    );
    // The query itself is never recommended.
    assert!(!titles.contains(&"The Hobbit"));
    // Duplicate editions resolve to the first table row.
    assert_eq!(rec.books()[0].image_url, "http://covers/towers.jpg");
}

#[test]
fn unknown_title_gets_a_full_fallback_sample() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshots(dir.path());
    let catalog = CatalogStore::load(dir.path()).unwrap().catalog();

    for _ in 0..10 {
        let rec = recommend(&catalog, "No Such Title", Mode::Book);
        assert!(rec.is_fallback());
        assert_eq!(rec.books().len(), MAX_RESULTS);

        let mut titles: Vec<&str> = rec.books().iter().map(|b| b.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), MAX_RESULTS);
    }
}

#[test]
fn author_matching_ignores_case() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshots(dir.path());
    let catalog = CatalogStore::load(dir.path()).unwrap().catalog();

    let mut rng_a = StdRng::seed_from_u64(11);
    let mut rng_b = StdRng::seed_from_u64(11);
    let lower = recommend_with(&catalog, "tolkien", Mode::Author, &mut rng_a);
    let upper = recommend_with(&catalog, "TOLKIEN", Mode::Author, &mut rng_b);

    assert_eq!(lower, upper);
    assert!(!lower.is_fallback());
}

#[test]
fn genre_mode_matches_on_titles() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshots(dir.path());
    let catalog = CatalogStore::load(dir.path()).unwrap().catalog();

    let rec = recommend(&catalog, "the ", Mode::Genre);
    assert!(!rec.is_fallback());
    for book in rec.books() {
        assert!(book.title.to_lowercase().contains("the "));
    }
}

#[test]
fn popular_table_survives_load_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshots(dir.path());
    let catalog = CatalogStore::load(dir.path()).unwrap().catalog();

    assert_eq!(catalog.popular().len(), 1);
    assert_eq!(catalog.popular()[0]["Num-Ratings"], 2387);
    assert_eq!(catalog.popular()[0]["Avg-Rating"], 4.7);
}

#[test]
fn incomplete_data_directory_refuses_to_load() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshots(dir.path());
    std::fs::remove_file(dir.path().join("similarity.json")).unwrap();

    let err = CatalogStore::load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::DataUnavailable(_)));
}
