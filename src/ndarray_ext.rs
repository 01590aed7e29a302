//! ndarray integration for jagged buffers
//!
//! This module provides conversions between jagged's [`Array`] and
//! ndarray's arrays, and exposes rows of a [`JaggedArray`] as `Array1`.
//!
//! Enable with the `ndarray` feature flag.

use crate::error::JaggedError;
use crate::jagged::JaggedArray;
use crate::types::{Array, DType, Element};
use ndarray::{Array1, ArrayD, IxDyn};

/// Error type for ndarray conversions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NdarrayError {
    /// DType mismatch between expected and actual
    DTypeMismatch { expected: DType, actual: DType },
    /// Shape doesn't match element count
    ShapeMismatch { shape: Vec<u64>, len: usize },
    /// Array is not in standard (contiguous row-major) layout
    NotContiguous,
    /// Failure reading the jagged buffer
    Jagged(JaggedError),
}

impl std::fmt::Display for NdarrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NdarrayError::DTypeMismatch { expected, actual } => {
                write!(
                    f,
                    "DType mismatch: expected {:?}, got {:?}",
                    expected, actual
                )
            }
            NdarrayError::ShapeMismatch { shape, len } => {
                write!(f, "Shape {:?} doesn't match {} elements", shape, len)
            }
            NdarrayError::NotContiguous => {
                write!(
                    f,
                    "Array is not contiguous; call .as_standard_layout().into_owned() first"
                )
            }
            NdarrayError::Jagged(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for NdarrayError {}

impl From<JaggedError> for NdarrayError {
    fn from(e: JaggedError) -> Self {
        match e {
            JaggedError::DTypeMismatch { expected, actual } => {
                NdarrayError::DTypeMismatch { expected, actual }
            }
            other => NdarrayError::Jagged(other),
        }
    }
}

// =============================================================================
// From ndarray to jagged
// =============================================================================

impl Array {
    /// Create an Array from an ndarray ArrayD
    ///
    /// Returns error if not contiguous. Use
    /// `.as_standard_layout().into_owned()` to make non-contiguous arrays
    /// contiguous.
    pub fn from_ndarray<T: Element>(arr: ArrayD<T>) -> Result<Self, NdarrayError> {
        let shape: Vec<u64> = arr.shape().iter().map(|&d| d as u64).collect();
        let values = arr.as_slice().ok_or(NdarrayError::NotContiguous)?;
        Ok(Array::new(
            T::DTYPE,
            shape,
            bytemuck::cast_slice::<T, u8>(values).to_vec(),
        ))
    }
}

// =============================================================================
// From jagged to ndarray (owned)
// =============================================================================

impl Array {
    /// Convert to an ndarray ArrayD, honoring stride and byte order
    pub fn to_ndarray<T: Element>(&self) -> Result<ArrayD<T>, NdarrayError> {
        let shape: Vec<usize> = self.shape.iter().map(|&d| d as usize).collect();
        let elements: Vec<T> = self.to_vec()?;
        let len = elements.len();

        ArrayD::from_shape_vec(IxDyn(&shape), elements).map_err(|_| {
            NdarrayError::ShapeMismatch {
                shape: self.shape.clone(),
                len,
            }
        })
    }
}

impl JaggedArray {
    /// Row `index` as a one-dimensional ndarray
    pub fn row_ndarray<T: Element>(&self, index: i64) -> Result<Array1<T>, NdarrayError> {
        Ok(Array1::from_vec(self.get_as(index)?))
    }
}
