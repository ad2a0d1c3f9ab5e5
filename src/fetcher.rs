use std::collections::HashSet;
use std::hash::Hash;
use std::iter;
use std::ops::{Deref, DerefMut};

use crate::api::RowSource;
use crate::errors::FetchError;

/// Adapts a [RowSource] into standard collection shapes.
///
/// A fetcher is built from an optional source, so "no result set at all" is a
/// first-class state rather than a null check at every call site. Each
/// terminal operation consumes the fetcher, traverses the source once and
/// releases it before returning, on every exit path.
///
/// Converted values are `Option<T>`: `None` stands for a row whose data could
/// not produce a value (a NULL cell at the source). [RowFetcher::to_value]
/// layers a second `Option` on top to keep "no row existed" apart from "a row
/// existed but held NULL".
pub struct RowFetcher<S: RowSource> {
    source: Option<S>,
    skip_nulls: bool,
}

impl<S: RowSource> RowFetcher<S> {
    /// Wrap a source without touching it. `None` stands for no result set.
    pub fn of(source: Option<S>) -> Self {
        RowFetcher {
            source,
            skip_nulls: false,
        }
    }

    /// Omit rows whose converted value is `None` from list, set and
    /// collection results.
    ///
    /// Does not affect [RowFetcher::to_value] or [RowFetcher::count].
    pub fn skip_nulls(mut self) -> Self {
        self.skip_nulls = true;
        self
    }

    /// Convert every row and collect the results in source row order.
    pub fn to_list<T, F>(self, convert: F) -> Result<Vec<Option<T>>, FetchError>
    where
        F: FnMut(&S) -> Result<Option<T>, FetchError>,
    {
        self.to_collection(convert, Vec::new())
    }

    /// Convert every row and collect the results into a set. Duplicate
    /// converted values collapse.
    pub fn to_set<T, F>(self, convert: F) -> Result<HashSet<Option<T>>, FetchError>
    where
        T: Eq + Hash,
        F: FnMut(&S) -> Result<Option<T>, FetchError>,
    {
        self.to_collection(convert, HashSet::new())
    }

    /// Convert every row into the caller-supplied collection and return it.
    pub fn to_collection<T, C, F>(self, mut convert: F, mut target: C) -> Result<C, FetchError>
    where
        C: Extend<Option<T>>,
        F: FnMut(&S) -> Result<Option<T>, FetchError>,
    {
        let source = match self.source {
            Some(source) => source,
            None => return Ok(target),
        };
        let mut source = Released::new(source);
        if source.row_count() == 0 {
            return Ok(target);
        }

        log::debug!("reading rows");
        while source.advance()? {
            let value = convert(&source)?;
            if self.skip_nulls && value.is_none() {
                continue;
            }
            target.extend(iter::once(value));
        }
        Ok(target)
    }

    /// Convert the first row only.
    ///
    /// Distinguishes three outcomes: `None` when the source is absent or has
    /// no first row, `Some(None)` when the first row converts to NULL, and
    /// `Some(Some(v))` when it converts to a value. Not affected by
    /// [RowFetcher::skip_nulls].
    pub fn to_value<T, F>(self, mut convert: F) -> Result<Option<Option<T>>, FetchError>
    where
        F: FnMut(&S) -> Result<Option<T>, FetchError>,
    {
        let source = match self.source {
            Some(source) => source,
            None => return Ok(None),
        };
        let mut source = Released::new(source);
        if !source.position_first()? {
            return Ok(None);
        }

        log::debug!("reading first row");
        let value = convert(&source)?;
        Ok(Some(value))
    }

    /// The source's reported row count, or 0 for an absent source.
    pub fn count(self) -> Result<usize, FetchError> {
        let source = match self.source {
            Some(source) => source,
            None => return Ok(0),
        };
        let source = Released::new(source);
        Ok(source.row_count())
    }
}

/// Releases the wrapped source when dropped, so every exit path of a terminal
/// operation closes it exactly once, including error propagation via `?`.
struct Released<S: RowSource>(S);

impl<S: RowSource> Released<S> {
    fn new(source: S) -> Self {
        Released(source)
    }
}

impl<S: RowSource> Drop for Released<S> {
    fn drop(&mut self) {
        log::debug!("releasing source");
        self.0.release();
    }
}

impl<S: RowSource> Deref for Released<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.0
    }
}

impl<S: RowSource> DerefMut for Released<S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.0
    }
}
