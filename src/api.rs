//! Traits through which the fetcher consumes a result set.
//!
//! The important traits are:
//! - [RowSource], a sequential cursor over rows,
//! - [ReadTy], typed access to one column of the current row.

use crate::errors::FetchError;

/// A sequential cursor over the rows of an already-executed query.
///
/// A source starts positioned before its first row. It is consumed by a
/// single terminal operation of [crate::RowFetcher], which calls
/// [RowSource::release] exactly once before returning.
pub trait RowSource {
    /// Number of rows in the result set.
    fn row_count(&self) -> usize;

    /// Move to the next row. Returns `false` once the source is exhausted.
    fn advance(&mut self) -> Result<bool, FetchError>;

    /// Move to the first row. Returns `false` if there are no rows.
    fn position_first(&mut self) -> Result<bool, FetchError>;

    /// Close the underlying resources. Must tolerate repeated calls.
    fn release(&mut self);
}

/// Typed access to a column of the row the source is currently positioned on.
///
/// `Ok(None)` means the cell holds no meaningful data (SQL NULL). That is
/// distinct from [FetchError::CellType], which is raised for a cell of an
/// incompatible type.
pub trait ReadTy<T>: RowSource {
    fn read(&self, col: usize) -> Result<Option<T>, FetchError>;
}
