//! # bookrec Storage
//!
//! Startup loading for the bookrec recommendation service.
//!
//! The offline pipeline exports four JSON snapshots into a data directory:
//! `pivot.json` (the axis title list), `books.json` (the metadata table),
//! `similarity.json` (the dense matrix as row arrays) and `popular.json`
//! (the popular table, arbitrary columns). [`CatalogStore::load`] reads
//! them, validates them into a [`bookrec_core::Catalog`], and fails fatally
//! on any missing or malformed input; there is no partial service.

pub mod snapshot;
pub mod store;

pub use snapshot::{CatalogSnapshot, SnapshotLoader};
pub use store::CatalogStore;
