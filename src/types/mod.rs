//! Core types for jagged arrays

mod array;
mod content;
mod dtype;
mod element;

pub use array::{Array, ArrayView, ArrayViewMut};
pub use content::{Content, ContentType, Table};
pub use dtype::{DType, Endian};
pub use element::{Element, IndexType};
