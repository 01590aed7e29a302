//! Random access and iteration over the rows of a jagged array

use crate::error::{JaggedError, Result};
use crate::jagged::JaggedArray;
use crate::types::{Array, ArrayView, Content, DType, Element};
use std::iter::FusedIterator;

/// View of `content[start..stop]`, checking that the row fits
pub(crate) fn row_view<'a>(
    content: &ArrayView<'a>,
    row: usize,
    start: i64,
    stop: i64,
) -> Result<ArrayView<'a>> {
    let len = content.len();
    if start < 0 || stop < 0 || start as usize > len || stop as usize > len {
        return Err(JaggedError::ContentOutOfBounds { start, stop, len });
    }
    if stop < start {
        return Err(JaggedError::StopBeforeStart { row, start, stop });
    }
    Ok(content.slice(start as usize, stop as usize))
}

/// Flat content that rows can be sliced from directly
pub(crate) fn dense_content(content: &Content) -> Result<Option<ArrayView<'_>>> {
    let Content::Array(array) = content else {
        return Ok(None);
    };
    let view = array.view()?;
    Ok((view.ndim() == 1 && view.is_contiguous()).then_some(view))
}

impl JaggedArray {
    /// Copy of row `index`; negative indices count from the end
    ///
    /// Only one-dimensional, densely packed array content is sliced. Any
    /// other content yields an empty array.
    pub fn get(&self, index: i64) -> Result<Array> {
        let len = self.len();
        let resolved = if index < 0 { index + len as i64 } else { index };

        self.check_row_lengths()?;
        if resolved < 0 || resolved >= len as i64 {
            return Err(JaggedError::IndexOutOfRange { index, len });
        }
        self.check_dimensions()?;

        let row = resolved as usize;
        match dense_content(self.content())? {
            Some(content) => {
                let slice = row_view(&content, row, self.starts()[row], self.stops()[row])?;
                Ok(slice.to_owned())
            }
            None => Ok(Array::empty(DType::I64)),
        }
    }

    /// Row `index` decoded as `T`
    pub fn get_as<T: Element>(&self, index: i64) -> Result<Vec<T>> {
        self.get(index)?.to_vec()
    }

    /// Rows in index order
    pub fn iter(&self) -> Rows<'_> {
        Rows {
            array: self,
            cursor: 0,
        }
    }
}

/// Single-pass cursor over the rows of a [`JaggedArray`]
///
/// Each step yields the result of [`JaggedArray::get`] for the next row.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    array: &'a JaggedArray,
    cursor: usize,
}

impl Iterator for Rows<'_> {
    type Item = Result<Array>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.array.len() {
            return None;
        }
        let row = self.array.get(self.cursor as i64);
        self.cursor += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl FusedIterator for Rows<'_> {}

impl<'a> IntoIterator for &'a JaggedArray {
    type Item = Result<Array>;
    type IntoIter = Rows<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
