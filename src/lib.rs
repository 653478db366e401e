//! # bookrec
//!
//! A book recommendation service backed by precomputed
//! collaborative-filtering snapshots.
//!
//! bookrec loads four read-only snapshots at startup (pivot axis, book
//! metadata table, dense similarity matrix, popular table) and serves
//! ranked or sampled recommendations over a small REST API. Every query
//! produces a response: queries that cannot be resolved fall back to a
//! random sample instead of an error.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! bookrec --data-dir ./data --http-port 8000
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use bookrec::prelude::*;
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
//! let rec = recommend(&catalog, "A", Mode::Book);
//! assert!(!rec.is_fallback());
//! ```
//!
//! ## Crate Structure
//!
//! - `bookrec-core` - Catalog, similarity matrix, recommendation engine
//! - `bookrec-storage` - Snapshot loading and startup validation
//! - `bookrec-api` - REST endpoints and the embedded frontend page

// Re-export core types
pub use bookrec_core::{
    recommend, recommend_with, BookRecord, Catalog, Error, Mode, Recommendation, Result,
    SimilarityMatrix, MAX_RESULTS,
};

// Re-export storage
pub use bookrec_storage::{CatalogStore, SnapshotLoader};

// Re-export API
pub use bookrec_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        recommend, recommend_with, BookRecord, Catalog, CatalogStore, Error, Mode, Recommendation,
        RestApi, Result, SimilarityMatrix, MAX_RESULTS,
    };
}
