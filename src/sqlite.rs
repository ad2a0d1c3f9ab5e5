//! Provides a [RowSource] for [rusqlite crate](https://docs.rs/rusqlite).

use rusqlite::types::Value;

use crate::api::{ReadTy, RowSource};
use crate::errors::FetchError;

/// Result set of a SQLite query, buffered in memory.
///
/// `rusqlite` rows are forward-only, but [RowSource::position_first] needs to
/// rewind, so all rows are drained into a buffer up front.
pub struct SqliteRowSet {
    rows: Vec<Vec<Value>>,
    pos: Option<usize>,
}

impl SqliteRowSet {
    /// Execute the prepared statement and buffer its full result.
    pub fn query(stmt: &mut rusqlite::Statement) -> Result<Self, FetchError> {
        let column_count = stmt.column_count();
        let mut rows_iter = stmt.query([])?;

        let mut rows = Vec::new();
        while let Some(row_ref) = rows_iter.next()? {
            let mut row = Vec::with_capacity(column_count);
            for col_index in 0..column_count {
                row.push(row_ref.get::<_, Value>(col_index)?);
            }
            rows.push(row);
        }
        log::debug!("buffered {} rows", rows.len());

        Ok(SqliteRowSet { rows, pos: None })
    }

    fn cell(&self, col: usize) -> Result<&Value, FetchError> {
        let row = self
            .pos
            .and_then(|pos| self.rows.get(pos))
            .ok_or_else(|| FetchError::Source("source is not positioned on a row".into()))?;
        row.get(col)
            .ok_or_else(|| FetchError::Source(format!("result has no column {}", col)))
    }
}

impl RowSource for SqliteRowSet {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn advance(&mut self) -> Result<bool, FetchError> {
        let next = match self.pos {
            None => 0,
            Some(pos) => pos + 1,
        };
        self.pos = Some(next);
        Ok(next < self.rows.len())
    }

    fn position_first(&mut self) -> Result<bool, FetchError> {
        self.pos = Some(0);
        Ok(!self.rows.is_empty())
    }

    fn release(&mut self) {
        self.rows = Vec::new();
        self.pos = None;
    }
}

impl ReadTy<bool> for SqliteRowSet {
    fn read(&self, col: usize) -> Result<Option<bool>, FetchError> {
        match self.cell(col)? {
            Value::Null => Ok(None),
            Value::Integer(v) => Ok(Some(*v != 0)),
            _ => Err(FetchError::CellType {
                col,
                expected: "bool",
            }),
        }
    }
}

impl ReadTy<i64> for SqliteRowSet {
    fn read(&self, col: usize) -> Result<Option<i64>, FetchError> {
        match self.cell(col)? {
            Value::Null => Ok(None),
            Value::Integer(v) => Ok(Some(*v)),
            _ => Err(FetchError::CellType {
                col,
                expected: "i64",
            }),
        }
    }
}

impl ReadTy<f64> for SqliteRowSet {
    fn read(&self, col: usize) -> Result<Option<f64>, FetchError> {
        match self.cell(col)? {
            Value::Null => Ok(None),
            Value::Real(v) => Ok(Some(*v)),
            Value::Integer(v) => Ok(Some(*v as f64)),
            _ => Err(FetchError::CellType {
                col,
                expected: "f64",
            }),
        }
    }
}

impl ReadTy<String> for SqliteRowSet {
    fn read(&self, col: usize) -> Result<Option<String>, FetchError> {
        match self.cell(col)? {
            Value::Null => Ok(None),
            Value::Text(v) => Ok(Some(v.clone())),
            _ => Err(FetchError::CellType {
                col,
                expected: "String",
            }),
        }
    }
}

impl ReadTy<Vec<u8>> for SqliteRowSet {
    fn read(&self, col: usize) -> Result<Option<Vec<u8>>, FetchError> {
        match self.cell(col)? {
            Value::Null => Ok(None),
            Value::Blob(v) => Ok(Some(v.clone())),
            _ => Err(FetchError::CellType {
                col,
                expected: "Vec<u8>",
            }),
        }
    }
}
