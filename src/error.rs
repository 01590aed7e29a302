//! Error types for jagged

use crate::types::{ContentType, DType};
use std::error::Error;
use std::fmt;

/// Broad category of a [`JaggedError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input values, wrong content variant, bad buffer layout
    InvalidArgument,
    /// Element type that cannot be normalized or used as an index buffer
    UnsupportedType,
    /// Buffers with too few or mismatched dimensions
    DomainError,
    /// Row index or row bounds outside the valid range
    OutOfRange,
}

/// Jagged-specific error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JaggedError {
    /// Element type is not one of the fixed-width integer kinds
    UnsupportedType { dtype: DType },
    /// Requested element type does not match the buffer's
    DTypeMismatch { expected: DType, actual: DType },
    /// Stride is smaller than the element width
    InvalidStride { stride: usize, element_size: usize },
    /// Byte buffer does not cover every strided slot
    BufferTooSmall { required: usize, actual: usize },
    /// Element count of a shape does not fit in `usize`
    ShapeOverflow { shape: Vec<u64> },
    /// An index buffer holds a negative value
    NegativeValue {
        name: &'static str,
        index: usize,
        value: i64,
    },
    /// An index buffer holds a value above `i64::MAX`
    ValueTooLarge {
        name: &'static str,
        index: usize,
        value: u64,
    },
    /// Running total of counts exceeds `i64::MAX`
    OffsetOverflow { index: usize },
    /// Offsets need at least one element
    EmptyOffsets,
    /// Offsets must be non-decreasing
    DecreasingOffsets {
        index: usize,
        previous: i64,
        value: i64,
    },
    /// A converter was given more starts than stops
    LengthMismatch { starts: usize, stops: usize },
    /// Content accessed through the wrong variant
    WrongContentType {
        expected: ContentType,
        actual: ContentType,
    },
    /// Content variant that has no implementation
    UnsupportedContent(ContentType),
    /// Index buffer with zero dimensions
    MissingDimension { name: &'static str },
    /// Starts and stops differ in dimensionality
    DimensionMismatch { starts: usize, stops: usize },
    /// Row index outside `[-len, len)`
    IndexOutOfRange { index: i64, len: usize },
    /// More starts than stops
    StartsLongerThanStops { starts: usize, stops: usize },
    /// Row range reaches past the end of content
    ContentOutOfBounds { start: i64, stop: i64, len: usize },
    /// Row with `stop < start`
    StopBeforeStart { row: usize, start: i64, stop: i64 },
}

impl JaggedError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            JaggedError::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            JaggedError::DTypeMismatch { .. }
            | JaggedError::InvalidStride { .. }
            | JaggedError::BufferTooSmall { .. }
            | JaggedError::ShapeOverflow { .. }
            | JaggedError::NegativeValue { .. }
            | JaggedError::ValueTooLarge { .. }
            | JaggedError::OffsetOverflow { .. }
            | JaggedError::EmptyOffsets
            | JaggedError::DecreasingOffsets { .. }
            | JaggedError::LengthMismatch { .. }
            | JaggedError::WrongContentType { .. }
            | JaggedError::UnsupportedContent(_) => ErrorKind::InvalidArgument,
            JaggedError::MissingDimension { .. } | JaggedError::DimensionMismatch { .. } => {
                ErrorKind::DomainError
            }
            JaggedError::IndexOutOfRange { .. }
            | JaggedError::StartsLongerThanStops { .. }
            | JaggedError::ContentOutOfBounds { .. }
            | JaggedError::StopBeforeStart { .. } => ErrorKind::OutOfRange,
        }
    }
}

impl fmt::Display for JaggedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JaggedError::UnsupportedType { dtype } => {
                write!(f, "Byteswap is not supported for {:?}", dtype)
            }
            JaggedError::DTypeMismatch { expected, actual } => {
                write!(f, "DType mismatch: expected {:?}, got {:?}", expected, actual)
            }
            JaggedError::InvalidStride {
                stride,
                element_size,
            } => write!(
                f,
                "Stride {} is smaller than the element size {}",
                stride, element_size
            ),
            JaggedError::BufferTooSmall { required, actual } => write!(
                f,
                "Buffer too small: need {} bytes, got {}",
                required, actual
            ),
            JaggedError::NegativeValue { name, index, value } => write!(
                f,
                "{} must have all non-negative values: see index [{}] ({})",
                name, index, value
            ),
            JaggedError::ShapeOverflow { shape } => {
                write!(f, "Shape {:?} has too many elements", shape)
            }
            JaggedError::ValueTooLarge { name, index, value } => write!(
                f,
                "{} must have all values within the int64 range: see index [{}] ({})",
                name, index, value
            ),
            JaggedError::OffsetOverflow { index } => write!(
                f,
                "offsets overflow int64 at counts[{}]",
                index
            ),
            JaggedError::EmptyOffsets => write!(f, "offsets must have at least one element"),
            JaggedError::DecreasingOffsets {
                index,
                previous,
                value,
            } => write!(
                f,
                "offsets must be non-decreasing: offsets[{}] = {} follows {}",
                index, value, previous
            ),
            JaggedError::LengthMismatch { starts, stops } => write!(
                f,
                "starts (length {}) must not be longer than stops (length {})",
                starts, stops
            ),
            JaggedError::WrongContentType { expected, actual } => write!(
                f,
                "JaggedArray must be of '{}' content type, is '{}'",
                expected.name(),
                actual.name()
            ),
            JaggedError::UnsupportedContent(content_type) => {
                write!(f, "'{}' content is not supported", content_type.name())
            }
            JaggedError::MissingDimension { name } => {
                write!(f, "{} must have at least 1 dimension", name)
            }
            JaggedError::DimensionMismatch { starts, stops } => write!(
                f,
                "starts and stops must have the same dimensionality ({} vs {})",
                starts, stops
            ),
            JaggedError::IndexOutOfRange { index, len } => write!(
                f,
                "index {} must specify a location within the JaggedArray of length {}",
                index, len
            ),
            JaggedError::StartsLongerThanStops { starts, stops } => write!(
                f,
                "starts (length {}) must have the same or shorter length than stops (length {})",
                starts, stops
            ),
            JaggedError::ContentOutOfBounds { start, stop, len } => write!(
                f,
                "starts and stops [{}, {}) are not within the bounds of content of length {}",
                start, stop, len
            ),
            JaggedError::StopBeforeStart { row, start, stop } => write!(
                f,
                "stops must be greater than or equal to starts: row {} has [{}, {})",
                row, start, stop
            ),
        }
    }
}

impl Error for JaggedError {}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, JaggedError>;
