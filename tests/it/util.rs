use std::cell::Cell;
use std::rc::Rc;

use row_fetch::api::{ReadTy, RowSource};
use row_fetch::FetchError;

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A single-column cell of the in-memory source.
pub enum Datum {
    Int(i64),
    Text(&'static str),
    Null,
}

/// In-memory stand-in for a database cursor.
///
/// Counts release calls through a shared handle, so tests can assert the
/// close-exactly-once contract. The reported row count can be set apart from
/// the actual rows, mirroring a cursor that only reports its size.
pub struct MemorySource {
    rows: Vec<Datum>,
    reported_count: usize,
    pos: Option<usize>,
    releases: Rc<Cell<usize>>,
}

impl MemorySource {
    pub fn new(rows: Vec<Datum>) -> (Self, Rc<Cell<usize>>) {
        let count = rows.len();
        Self::reporting(rows, count)
    }

    pub fn reporting(rows: Vec<Datum>, reported_count: usize) -> (Self, Rc<Cell<usize>>) {
        let releases = Rc::new(Cell::new(0));
        let source = MemorySource {
            rows,
            reported_count,
            pos: None,
            releases: releases.clone(),
        };
        (source, releases)
    }

    fn datum(&self, col: usize) -> Result<&Datum, FetchError> {
        if col != 0 {
            return Err(FetchError::Source(format!("no column {}", col)));
        }
        self.pos
            .and_then(|pos| self.rows.get(pos))
            .ok_or_else(|| FetchError::Source("not positioned on a row".into()))
    }
}

impl RowSource for MemorySource {
    fn row_count(&self) -> usize {
        self.reported_count
    }

    fn advance(&mut self) -> Result<bool, FetchError> {
        let next = self.pos.map_or(0, |pos| pos + 1);
        self.pos = Some(next);
        Ok(next < self.rows.len())
    }

    fn position_first(&mut self) -> Result<bool, FetchError> {
        self.pos = Some(0);
        Ok(!self.rows.is_empty())
    }

    fn release(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

impl ReadTy<String> for MemorySource {
    fn read(&self, col: usize) -> Result<Option<String>, FetchError> {
        match self.datum(col)? {
            Datum::Null => Ok(None),
            Datum::Text(v) => Ok(Some((*v).to_string())),
            Datum::Int(_) => Err(FetchError::CellType {
                col,
                expected: "String",
            }),
        }
    }
}

impl ReadTy<i64> for MemorySource {
    fn read(&self, col: usize) -> Result<Option<i64>, FetchError> {
        match self.datum(col)? {
            Datum::Null => Ok(None),
            Datum::Int(v) => Ok(Some(*v)),
            Datum::Text(_) => Err(FetchError::CellType {
                col,
                expected: "i64",
            }),
        }
    }
}
