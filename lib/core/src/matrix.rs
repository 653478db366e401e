use crate::{Error, Result};

/// Dense N x N similarity matrix, aligned row-for-row with the pivot axis.
///
/// Stored flattened with row-stride indexing. Entry (i, j) is the similarity
/// between axis title i and axis title j; the diagonal is self-similarity.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    data: Vec<f32>,
    dim: usize,
}

impl SimilarityMatrix {
    /// Build from row vectors, validating that every row has N columns.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);
        for (row, columns) in rows.into_iter().enumerate() {
            if columns.len() != dim {
                return Err(Error::RaggedMatrix {
                    row,
                    len: columns.len(),
                    expected: dim,
                });
            }
            data.extend(columns);
        }
        Ok(Self { data, dim })
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Similarity row for axis position `i`, or `None` when out of range.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[f32]> {
        if i < self.dim {
            Some(&self.data[i * self.dim..(i + 1) * self.dim])
        } else {
            None
        }
    }

    /// Single score at (i, j).
    #[inline]
    #[must_use]
    pub fn score(&self, i: usize, j: usize) -> Option<f32> {
        self.row(i).and_then(|row| row.get(j).copied())
    }
}
