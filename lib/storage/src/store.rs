use crate::snapshot::SnapshotLoader;
use bookrec_core::{Catalog, Result, SimilarityMatrix};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Loads the catalog once at startup and hands it out read-only.
///
/// There is no write path: the snapshots come from the offline pipeline
/// and the process either loads all of them or refuses to serve.
#[derive(Debug)]
pub struct CatalogStore {
    catalog: Arc<Catalog>,
    data_dir: PathBuf,
}

impl CatalogStore {
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        let snapshot = SnapshotLoader::new(&data_dir).load()?;
        let similarity = SimilarityMatrix::from_rows(snapshot.similarity)?;
        let catalog = Catalog::new(snapshot.axis, snapshot.books, similarity, snapshot.popular)?;

        let unindexed = catalog.unindexed_axis_titles();
        if unindexed > 0 {
            eprintln!(
                "Warning: {unindexed} axis titles have no metadata record; \
                 lookups for them fall back to sampling"
            );
        }

        Ok(Self {
            catalog: Arc::new(catalog),
            data_dir,
        })
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.clone()
    }

    #[inline]
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookrec_core::Error;

    fn seed_dir(dir: &Path) {
        std::fs::write(dir.join(crate::snapshot::PIVOT_FILE), r#"["A", "B"]"#).unwrap();
        std::fs::write(
            dir.join(crate::snapshot::BOOKS_FILE),
            r#"[
                {"Book-Title": "A", "Book-Author": "x", "Image-URL-M": "http://a"},
                {"Book-Title": "B", "Book-Author": "y", "Image-URL-M": "http://b"}
            ]"#,
        )
        .unwrap();
        std::fs::write(
            dir.join(crate::snapshot::SIMILARITY_FILE),
            "[[1.0, 0.5], [0.5, 1.0]]",
        )
        .unwrap();
        std::fs::write(dir.join(crate::snapshot::POPULAR_FILE), "[]").unwrap();
    }

    #[test]
    fn loads_and_shares_catalog() {
        let dir = tempfile::tempdir().unwrap();
        seed_dir(dir.path());

        let store = CatalogStore::load(dir.path()).unwrap();
        let catalog = store.catalog();
        assert_eq!(catalog.axis().len(), 2);
        assert_eq!(catalog.books().len(), 2);
        assert_eq!(store.data_dir(), dir.path());

        // Both handles see the same immutable catalog.
        let again = store.catalog();
        assert!(Arc::ptr_eq(&catalog, &again));
    }

    #[test]
    fn axis_matrix_mismatch_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        seed_dir(dir.path());
        std::fs::write(dir.path().join(crate::snapshot::SIMILARITY_FILE), "[[1.0]]").unwrap();

        let err = CatalogStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::AxisMismatch { titles: 2, rows: 1 }));
    }
}
