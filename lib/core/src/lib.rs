//! # bookrec Core
//!
//! Core library for the bookrec recommendation service.
//!
//! This crate provides the read-only data model and the selection logic:
//!
//! - [`BookRecord`] - One row of the book metadata table
//! - [`SimilarityMatrix`] - Dense precomputed similarity scores
//! - [`Catalog`] - The immutable process-wide recommendation context
//! - [`engine`] - Query-to-recommendation selection with random fallback
//!
//! ## Example
//!
//! ```rust
//! use bookrec_core::{engine, BookRecord, Catalog, Mode, SimilarityMatrix};
//!
//! let axis = vec!["A".to_string(), "B".to_string()];
//! let books = vec![
//!     BookRecord::new("A", "Author A", "http://covers/a.jpg"),
//!     BookRecord::new("B", "Author B", "http://covers/b.jpg"),
//! ];
//! let matrix = SimilarityMatrix::from_rows(vec![
//!     vec![1.0, 0.4],
//!     vec![0.4, 1.0],
//! ]).unwrap();
//! let catalog = Catalog::new(axis, books, matrix, Vec::new()).unwrap();
//!
//! let rec = engine::recommend(&catalog, "A", Mode::Book);
//! assert_eq!(rec.books()[0].title, "B");
//! ```

pub mod book;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod matrix;

pub use book::BookRecord;
pub use catalog::Catalog;
pub use engine::{recommend, recommend_with, Mode, Recommendation, MAX_RESULTS};
pub use error::{Error, Result};
pub use matrix::SimilarityMatrix;
