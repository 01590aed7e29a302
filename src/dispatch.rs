//! Runtime-typed entry points over caller-supplied buffers
//!
//! Each function normalizes its buffers to host order in place, then runs
//! the matching generic routine from [`crate::convert`] for the buffer's
//! element type. Only the eight fixed-width integer types are accepted.

use crate::convert;
use crate::error::{JaggedError, Result};
use crate::types::{ArrayViewMut, DType, IndexType};

/// Bind `$T` to the Rust type of an integer `DType` and evaluate `$body`
macro_rules! with_index_type {
    ($dtype:expr, $T:ident => $body:expr) => {
        match $dtype {
            DType::U8 => {
                type $T = u8;
                $body
            }
            DType::I8 => {
                type $T = i8;
                $body
            }
            DType::U16 => {
                type $T = u16;
                $body
            }
            DType::I16 => {
                type $T = i16;
                $body
            }
            DType::U32 => {
                type $T = u32;
                $body
            }
            DType::I32 => {
                type $T = i32;
                $body
            }
            DType::U64 => {
                type $T = u64;
                $body
            }
            DType::I64 => {
                type $T = i64;
                $body
            }
            dtype @ (DType::F32 | DType::F64) => Err(JaggedError::UnsupportedType { dtype }),
        }
    };
}

fn native_values<T: IndexType>(view: &mut ArrayViewMut<'_>) -> Result<Vec<T>> {
    view.make_native()?;
    view.as_view().to_vec::<T>()
}

/// Normalize `view` and widen every element to `i64`
pub(crate) fn index_values(
    name: &'static str,
    view: &mut ArrayViewMut<'_>,
) -> Result<Vec<i64>> {
    with_index_type!(view.dtype(), T => convert::to_i64(name, &native_values::<T>(view)?))
}

/// See [`convert::counts_to_offsets`]
pub fn counts_to_offsets(counts: &mut ArrayViewMut<'_>) -> Result<Vec<i64>> {
    with_index_type!(counts.dtype(), T => {
        convert::counts_to_offsets(&native_values::<T>(counts)?)
    })
}

/// See [`convert::offsets_to_parents`]
pub fn offsets_to_parents(offsets: &mut ArrayViewMut<'_>) -> Result<Vec<i64>> {
    with_index_type!(offsets.dtype(), T => {
        convert::offsets_to_parents(&native_values::<T>(offsets)?)
    })
}

/// See [`convert::starts_stops_to_parents`]
///
/// `starts` and `stops` may have different element types.
pub fn starts_stops_to_parents(
    starts: &mut ArrayViewMut<'_>,
    stops: &mut ArrayViewMut<'_>,
) -> Result<Vec<i64>> {
    let starts = index_values("starts", starts)?;
    let stops = index_values("stops", stops)?;
    convert::starts_stops_to_parents(&starts, &stops)
}

/// See [`convert::parents_to_starts_stops`]
pub fn parents_to_starts_stops(
    parents: &mut ArrayViewMut<'_>,
    length: Option<i64>,
) -> Result<(Vec<i64>, Vec<i64>)> {
    with_index_type!(parents.dtype(), T => {
        Ok(convert::parents_to_starts_stops(&native_values::<T>(parents)?, length))
    })
}

/// See [`convert::uniques_to_offsets_parents`]
pub fn uniques_to_offsets_parents(
    uniques: &mut ArrayViewMut<'_>,
) -> Result<(Vec<i64>, Vec<i64>)> {
    with_index_type!(uniques.dtype(), T => {
        Ok(convert::uniques_to_offsets_parents(&native_values::<T>(uniques)?))
    })
}
