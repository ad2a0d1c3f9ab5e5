//! Fetches rows of a database result set into standard collections.
//!
//! [RowFetcher] wraps a cursor over an already-executed query (anything
//! implementing [api::RowSource]) and materializes it into a list, a set, a
//! caller-supplied collection, a single optional value or a row count, using
//! a per-row converter function. The source is released exactly once per
//! terminal operation, on every exit path.
//!
//! Capabilities:
//! - **Absent sources**: "no result set at all" is a normal input, yielding
//!   empty results instead of errors.
//! - **NULL handling**: converted values are `Option<T>`; NULL rows can be
//!   kept or skipped ([RowFetcher::skip_nulls]).
//! - **Single values**: [RowFetcher::to_value] tells "no row" apart from
//!   "a row holding NULL" via a two-level `Option`.
//! - **SQLite**: a ready-made source for `rusqlite` statements, behind the
//!   `src_rusqlite` feature.
//!
//! Example with an in-memory source:
//! ```
//! use row_fetch::api::RowSource;
//! use row_fetch::{FetchError, RowFetcher};
//!
//! struct Names {
//!     names: Vec<&'static str>,
//!     pos: Option<usize>,
//! }
//!
//! impl RowSource for Names {
//!     fn row_count(&self) -> usize {
//!         self.names.len()
//!     }
//!     fn advance(&mut self) -> Result<bool, FetchError> {
//!         let next = self.pos.map_or(0, |pos| pos + 1);
//!         self.pos = Some(next);
//!         Ok(next < self.names.len())
//!     }
//!     fn position_first(&mut self) -> Result<bool, FetchError> {
//!         self.pos = Some(0);
//!         Ok(!self.names.is_empty())
//!     }
//!     fn release(&mut self) {}
//! }
//!
//! # fn main() -> Result<(), FetchError> {
//! let source = Names { names: vec!["a", "b"], pos: None };
//!
//! let names = RowFetcher::of(Some(source))
//!     .to_list(|s: &Names| Ok(s.pos.and_then(|p| s.names.get(p)).map(|n| n.to_string())))?;
//!
//! assert_eq!(names, vec![Some("a".to_string()), Some("b".to_string())]);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod convert;
mod errors;
mod fetcher;

#[cfg(feature = "src_rusqlite")]
pub mod sqlite;

pub use errors::FetchError;
pub use fetcher::RowFetcher;

use crate::api::RowSource;

/// Wrap a source, convert every row and release it, in one call.
pub fn fetch_all<S, T, F>(source: Option<S>, convert: F) -> Result<Vec<Option<T>>, FetchError>
where
    S: RowSource,
    F: FnMut(&S) -> Result<Option<T>, FetchError>,
{
    log::debug!("fetching all rows");
    RowFetcher::of(source).to_list(convert)
}
