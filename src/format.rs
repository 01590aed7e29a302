//! Bracketed text rendering of jagged arrays

use crate::access::{dense_content, row_view};
use crate::error::Result;
use crate::jagged::JaggedArray;
use crate::types::{ArrayView, DType, Element};

/// Rendered in place of content that has no text form
pub const NOT_IMPLEMENTED: &str = "-Error: print function is not yet implemented for this type-";

fn join<T: Element>(row: &ArrayView<'_>) -> Result<String> {
    let items: Vec<String> = row.to_vec::<T>()?.iter().map(|v| v.to_string()).collect();
    Ok(items.join(" "))
}

fn join_row(row: &ArrayView<'_>) -> Result<String> {
    match row.dtype() {
        DType::U8 => join::<u8>(row),
        DType::I8 => join::<i8>(row),
        DType::U16 => join::<u16>(row),
        DType::I16 => join::<i16>(row),
        DType::U32 => join::<u32>(row),
        DType::I32 => join::<i32>(row),
        DType::U64 => join::<u64>(row),
        DType::I64 => join::<i64>(row),
        DType::F32 => join::<f32>(row),
        DType::F64 => join::<f64>(row),
    }
}

impl JaggedArray {
    /// Render as `[[a b] [c] []]`
    ///
    /// Every row is checked before anything is returned. Content other than
    /// a one-dimensional, densely packed array renders as
    /// [`NOT_IMPLEMENTED`].
    pub fn render(&self) -> Result<String> {
        let Some(content) = dense_content(self.content())? else {
            return Ok(NOT_IMPLEMENTED.to_string());
        };
        self.check_row_lengths()?;
        self.check_dimensions()?;

        let mut rows = Vec::with_capacity(self.len());
        for (row, (&start, &stop)) in self.starts().iter().zip(self.stops()).enumerate() {
            let slice = row_view(&content, row, start, stop)?;
            rows.push(format!("[{}]", join_row(&slice)?));
        }
        Ok(format!("[{}]", rows.join(" ")))
    }

    /// Render as `<JaggedArray [[a b] [c]]>`
    pub fn repr(&self) -> Result<String> {
        Ok(format!("<JaggedArray {}>", self.render()?))
    }
}
