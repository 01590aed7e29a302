//! jagged - Ragged arrays over flat numeric buffers
//!
//! A jagged array is a sequence of variable-length rows stored as one flat
//! content buffer plus per-row `starts`/`stops` bounds. The same grouping can
//! also be written as *offsets* or *parents*; the [`convert`] module moves
//! between the three encodings.
//!
//! # Features
//!
//! - Index buffers of any fixed-width integer type, in either byte order,
//!   with arbitrary element stride
//! - In-place byte-order normalization of caller buffers
//! - Offsets / parents / starts-stops / counts / runs conversions
//! - Row access, iteration and bracketed rendering
//!
//! # Example
//!
//! ```rust
//! use jagged::{Array, JaggedArray};
//!
//! let content = Array::from_slice(&[10i64, 20, 30, 40, 50]);
//! let jagged = JaggedArray::from_offsets(&[0i64, 2, 4, 5], content).unwrap();
//!
//! assert_eq!(jagged.get_as::<i64>(-1).unwrap(), vec![50]);
//! assert_eq!(jagged.render().unwrap(), "[[10 20] [30 40] [50]]");
//! ```

pub mod access;
pub mod convert;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod jagged;
mod normalize;
pub mod types;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

// Re-export common types at crate root
pub use access::Rows;
pub use error::{ErrorKind, JaggedError, Result};
pub use format::NOT_IMPLEMENTED;
pub use jagged::JaggedArray;
pub use types::{
    Array, ArrayView, ArrayViewMut, Content, ContentType, DType, Element, Endian, IndexType, Table,
};

#[cfg(feature = "ndarray")]
pub use ndarray_ext::NdarrayError;
