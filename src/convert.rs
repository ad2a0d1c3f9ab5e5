//! Ready-made per-column converters.
//!
//! A converter is any `FnMut(&S) -> Result<Option<T>, FetchError>` taking a
//! source positioned on a row and producing a value, or `None` for a NULL
//! cell. The functions here cover the common case of reading a single column;
//! anything richer (multiple columns, computed values) is a plain closure at
//! the call site.

use crate::api::ReadTy;
use crate::errors::FetchError;

/// Converter reading column `col` as `T`.
pub fn column<S, T>(col: usize) -> impl FnMut(&S) -> Result<Option<T>, FetchError>
where
    S: ReadTy<T>,
{
    move |source| source.read(col)
}

macro_rules! named_column {
    ($($name:ident => $t:ty,)+) => {
        $(
            #[doc = concat!("Converter reading column `col` as `", stringify!($t), "`.")]
            pub fn $name<S: ReadTy<$t>>(col: usize) -> impl FnMut(&S) -> Result<Option<$t>, FetchError> {
                column::<S, $t>(col)
            }
        )+
    };
}

named_column!(
    boolean => bool,
    integer => i64,
    real => f64,
    string => String,
    blob => Vec<u8>,
);
