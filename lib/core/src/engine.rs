//! Recommendation selection.
//!
//! Maps a query string and a mode onto at most [`MAX_RESULTS`] book
//! records. A query that resolves produces a ranked (book mode) or matched
//! (author/genre mode) result; a query that does not resolve, for any
//! reason, produces a random sample instead. The engine never returns an
//! error to the caller.

use crate::{BookRecord, Catalog};
use ahash::AHashSet;
use rand::prelude::*;
use serde::Deserialize;
use std::cmp::Ordering;

/// Upper bound on returned records per request.
pub const MAX_RESULTS: usize = 4;

/// What a query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Exact title lookup on the pivot axis, ranked by similarity.
    Book,
    /// Case-insensitive substring match on the author field.
    Author,
    /// Case-insensitive substring match on the title field.
    Genre,
}

/// Outcome of a recommendation query.
///
/// `Fallback` stands in for every unresolvable query (title not on the
/// axis, no substring match, malformed data mid-ranking). Callers treat
/// both variants as success; the split exists so tests and logs can tell
/// a ranked answer from a substituted one.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    Found(Vec<BookRecord>),
    Fallback(Vec<BookRecord>),
}

impl Recommendation {
    #[inline]
    #[must_use]
    pub fn into_books(self) -> Vec<BookRecord> {
        match self {
            Recommendation::Found(books) | Recommendation::Fallback(books) => books,
        }
    }

    #[inline]
    #[must_use]
    pub fn books(&self) -> &[BookRecord] {
        match self {
            Recommendation::Found(books) | Recommendation::Fallback(books) => books,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Recommendation::Fallback(_))
    }
}

/// Recommend books for `query` using the thread RNG for any sampling.
#[must_use]
pub fn recommend(catalog: &Catalog, query: &str, mode: Mode) -> Recommendation {
    recommend_with(catalog, query, mode, &mut rand::rng())
}

/// Same as [`recommend`], with an injected RNG for deterministic tests.
pub fn recommend_with<R: Rng + ?Sized>(
    catalog: &Catalog,
    query: &str,
    mode: Mode,
    rng: &mut R,
) -> Recommendation {
    let matched = match mode {
        Mode::Book => {
            return match rank_similar(catalog, query) {
                Some(books) => Recommendation::Found(books),
                None => Recommendation::Fallback(sample_catalog(catalog, rng)),
            };
        }
        Mode::Author => match_substring(catalog, query, |record| &record.author),
        Mode::Genre => match_substring(catalog, query, |record| &record.title),
    };

    if matched.is_empty() {
        Recommendation::Fallback(sample_catalog(catalog, rng))
    } else {
        let picked = matched
            .choose_multiple(rng, MAX_RESULTS)
            .map(|record| (*record).clone())
            .collect();
        Recommendation::Found(picked)
    }
}

/// Rank the similarity row for an exact axis title.
///
/// Returns `None` for anything that prevents a ranked answer: title not on
/// the axis, row out of matrix range, or a neighbor title with no metadata
/// record. The caller substitutes the fallback sample for all of those.
fn rank_similar(catalog: &Catalog, query: &str) -> Option<Vec<BookRecord>> {
    let position = catalog.axis_position(query)?;
    let row = catalog.similarity().row(position)?;

    let mut scored: Vec<(usize, f32)> = row.iter().copied().enumerate().collect();
    // Stable sort: ties keep original column order. NaN compares equal.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut seen = AHashSet::with_capacity(MAX_RESULTS);
    let mut books = Vec::with_capacity(MAX_RESULTS);
    // The top ranked entry is the query itself (self-similarity); the next
    // MAX_RESULTS columns are the neighbors. Deduplicating by title may
    // leave fewer than MAX_RESULTS entries; that is accepted, no backfill.
    for (column, _score) in scored.into_iter().skip(1).take(MAX_RESULTS) {
        let title = catalog.axis_title(column)?;
        let record = catalog.first_record(title)?;
        if seen.insert(record.title.as_str()) {
            books.push(record.clone());
        }
    }
    Some(books)
}

/// Records whose `field` contains `query`, case-insensitively, deduplicated
/// by title in first-occurrence order.
fn match_substring<'a, F>(catalog: &'a Catalog, query: &str, field: F) -> Vec<&'a BookRecord>
where
    F: Fn(&BookRecord) -> &str,
{
    let needle = query.to_lowercase();
    let mut seen = AHashSet::new();
    let mut matched = Vec::new();
    for record in catalog.books() {
        if field(record).to_lowercase().contains(&needle) && seen.insert(record.title.as_str()) {
            matched.push(record);
        }
    }
    matched
}

/// Sample up to [`MAX_RESULTS`] distinct-title records from the whole
/// table, without replacement, clamped when fewer exist.
fn sample_catalog<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Vec<BookRecord> {
    catalog
        .distinct_books()
        .choose_multiple(rng, MAX_RESULTS)
        .cloned()
        .collect()
}
