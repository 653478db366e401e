use bookrec_core::{BookRecord, Error, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const PIVOT_FILE: &str = "pivot.json";
pub const BOOKS_FILE: &str = "books.json";
pub const SIMILARITY_FILE: &str = "similarity.json";
pub const POPULAR_FILE: &str = "popular.json";

/// Raw contents of the four snapshot files, before catalog validation.
///
/// The snapshots are produced by the offline pipeline; this crate only
/// reads them. `popular` rows keep whatever columns the pipeline wrote,
/// since that table is served verbatim.
#[derive(Debug)]
pub struct CatalogSnapshot {
    pub axis: Vec<String>,
    pub books: Vec<BookRecord>,
    pub similarity: Vec<Vec<f32>>,
    pub popular: Vec<serde_json::Value>,
}

/// Reads the snapshot files out of a data directory.
pub struct SnapshotLoader {
    data_dir: PathBuf,
}

impl SnapshotLoader {
    #[must_use]
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Load all four snapshots. Any missing or unparseable file is fatal.
    pub fn load(&self) -> Result<CatalogSnapshot> {
        Ok(CatalogSnapshot {
            axis: self.read_json(PIVOT_FILE)?,
            books: self.read_json(BOOKS_FILE)?,
            similarity: self.read_json(SIMILARITY_FILE)?,
            popular: self.read_json(POPULAR_FILE)?,
        })
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.data_dir.join(name);
        let file = File::open(&path)
            .map_err(|e| Error::DataUnavailable(format!("{}: {}", path.display(), e)))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::DataUnavailable(format!("{}: {}", path.display(), e)))
    }
}
