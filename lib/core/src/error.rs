use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    #[error("pivot axis has {titles} titles but similarity matrix has {rows} rows")]
    AxisMismatch { titles: usize, rows: usize },

    #[error("similarity matrix is not square: row {row} has {len} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("duplicate axis title: {0}")]
    DuplicateAxisTitle(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}
