use crate::{BookRecord, Error, Result, SimilarityMatrix};
use ahash::AHashMap;

/// The process-wide read-only recommendation context.
///
/// Holds the four structures loaded at startup: the pivot axis (ordered
/// unique titles aligning the similarity matrix), the book metadata table,
/// the similarity matrix itself, and the popular-books table served
/// verbatim. Built once, validated, then shared by reference with every
/// request; nothing here is ever mutated.
#[derive(Debug)]
pub struct Catalog {
    axis: Vec<String>,
    axis_index: AHashMap<String, usize>,
    books: Vec<BookRecord>,
    first_by_title: AHashMap<String, usize>,
    distinct_books: Vec<BookRecord>,
    similarity: SimilarityMatrix,
    popular: Vec<serde_json::Value>,
}

impl Catalog {
    /// Assemble and validate a catalog.
    ///
    /// Fails when the axis and matrix disagree on N or when the axis
    /// carries a duplicate title; both mean the snapshots are malformed
    /// and the process must not serve.
    pub fn new(
        axis: Vec<String>,
        books: Vec<BookRecord>,
        similarity: SimilarityMatrix,
        popular: Vec<serde_json::Value>,
    ) -> Result<Self> {
        if axis.len() != similarity.dim() {
            return Err(Error::AxisMismatch {
                titles: axis.len(),
                rows: similarity.dim(),
            });
        }

        let mut axis_index = AHashMap::with_capacity(axis.len());
        for (position, title) in axis.iter().enumerate() {
            if axis_index.insert(title.clone(), position).is_some() {
                return Err(Error::DuplicateAxisTitle(title.clone()));
            }
        }

        // First record per title wins; table order is the tie-break.
        let mut first_by_title = AHashMap::with_capacity(books.len());
        let mut distinct_books = Vec::new();
        for (row, record) in books.iter().enumerate() {
            if !first_by_title.contains_key(&record.title) {
                first_by_title.insert(record.title.clone(), row);
                distinct_books.push(record.clone());
            }
        }

        Ok(Self {
            axis,
            axis_index,
            books,
            first_by_title,
            distinct_books,
            similarity,
            popular,
        })
    }

    #[inline]
    #[must_use]
    pub fn axis(&self) -> &[String] {
        &self.axis
    }

    /// Position of an exact title on the pivot axis.
    #[inline]
    #[must_use]
    pub fn axis_position(&self, title: &str) -> Option<usize> {
        self.axis_index.get(title).copied()
    }

    #[inline]
    #[must_use]
    pub fn axis_title(&self, position: usize) -> Option<&str> {
        self.axis.get(position).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    /// One record per title, in table order. The pool the fallback sampler
    /// draws from, so a sample never repeats a title.
    #[inline]
    #[must_use]
    pub fn distinct_books(&self) -> &[BookRecord] {
        &self.distinct_books
    }

    /// First metadata record bearing `title`, if any.
    #[inline]
    #[must_use]
    pub fn first_record(&self, title: &str) -> Option<&BookRecord> {
        self.first_by_title
            .get(title)
            .and_then(|&row| self.books.get(row))
    }

    #[inline]
    #[must_use]
    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    #[inline]
    #[must_use]
    pub fn popular(&self) -> &[serde_json::Value] {
        &self.popular
    }

    /// Axis titles with no metadata record. Lookups landing on one of these
    /// fall back to sampling at query time; the store warns about them once
    /// at load.
    #[must_use]
    pub fn unindexed_axis_titles(&self) -> usize {
        self.axis
            .iter()
            .filter(|title| !self.first_by_title.contains_key(*title))
            .count()
    }
}
