use thiserror::Error;

/// Errors that can be raised from this library.
///
/// Missing data is never an error: an absent source, an empty result and a
/// NULL cell are all represented as values, not failures.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("column {col} does not hold a value of type {expected}")]
    CellType { col: usize, expected: &'static str },

    #[error("row source failed: {0}")]
    Source(String),

    #[cfg(feature = "src_rusqlite")]
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}
