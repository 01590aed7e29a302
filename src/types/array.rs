//! Numeric buffers and strided views over them

use super::{DType, Element, Endian};
use crate::error::{JaggedError, Result};

/// Owned numeric buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    pub dtype: DType,
    pub shape: Vec<u64>,
    /// Byte distance between consecutive logical elements
    pub stride: usize,
    pub endian: Endian,
    pub data: Vec<u8>,
}

impl Array {
    /// Densely packed buffer in host byte order
    pub fn new(dtype: DType, shape: Vec<u64>, data: Vec<u8>) -> Self {
        Self {
            dtype,
            shape,
            stride: dtype.element_size(),
            endian: Endian::NATIVE,
            data,
        }
    }

    /// One-dimensional buffer holding a copy of `values`
    pub fn from_slice<T: Element>(values: &[T]) -> Self {
        Array::new(
            T::DTYPE,
            vec![values.len() as u64],
            bytemuck::cast_slice::<T, u8>(values).to_vec(),
        )
    }

    /// One-dimensional buffer with no elements
    pub fn empty(dtype: DType) -> Self {
        Array::new(dtype, vec![0], Vec::new())
    }

    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    pub fn with_endian(mut self, endian: Endian) -> Self {
        self.endian = endian;
        self
    }

    /// Total number of elements, saturating at `u64::MAX`
    pub fn num_elements(&self) -> u64 {
        self.shape.iter().fold(1u64, |n, &d| n.saturating_mul(d))
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn view(&self) -> Result<ArrayView<'_>> {
        ArrayView::new(
            self.dtype,
            self.shape.clone(),
            self.stride,
            self.endian,
            &self.data,
        )
    }

    pub fn view_mut(&mut self) -> Result<ArrayViewMut<'_>> {
        ArrayViewMut::new(
            self.dtype,
            self.shape.clone(),
            self.stride,
            self.endian,
            &mut self.data,
        )
    }

    /// Byte-swap the elements to host order in place
    pub fn make_native(&mut self) -> Result<()> {
        self.view_mut()?.make_native()?;
        self.endian = Endian::NATIVE;
        Ok(())
    }

    /// Decode all elements in logical order
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>> {
        self.view()?.to_vec()
    }
}

/// Validate a strided layout and return its element count
fn check_layout(dtype: DType, shape: &[u64], stride: usize, available: usize) -> Result<usize> {
    let element_size = dtype.element_size();
    if stride < element_size {
        return Err(JaggedError::InvalidStride {
            stride,
            element_size,
        });
    }

    let count = shape
        .iter()
        .try_fold(1u64, |n, &d| n.checked_mul(d))
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| JaggedError::ShapeOverflow {
            shape: shape.to_vec(),
        })?;
    let required = match count {
        0 => 0,
        n => (n - 1).saturating_mul(stride).saturating_add(element_size),
    };
    if available < required {
        return Err(JaggedError::BufferTooSmall {
            required,
            actual: available,
        });
    }
    Ok(count)
}

/// Read-only strided view over a caller-supplied byte buffer
#[derive(Debug, Clone)]
pub struct ArrayView<'a> {
    dtype: DType,
    shape: Vec<u64>,
    len: usize,
    stride: usize,
    endian: Endian,
    data: &'a [u8],
}

impl<'a> ArrayView<'a> {
    pub fn new(
        dtype: DType,
        shape: Vec<u64>,
        stride: usize,
        endian: Endian,
        data: &'a [u8],
    ) -> Result<Self> {
        let len = check_layout(dtype, &shape, stride, data.len())?;
        Ok(Self {
            dtype,
            shape,
            len,
            stride,
            endian,
            data,
        })
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn shape(&self) -> &[u64] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Number of logical elements
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements are packed without gaps
    pub fn is_contiguous(&self) -> bool {
        self.stride == self.dtype.element_size()
    }

    pub(crate) fn slot(&self, index: usize) -> &'a [u8] {
        let start = index * self.stride;
        &self.data[start..start + self.dtype.element_size()]
    }

    /// Decode the element at `index`
    pub fn get<T: Element>(&self, index: usize) -> Result<T> {
        self.check_dtype::<T>()?;
        if index >= self.len() {
            return Err(JaggedError::IndexOutOfRange {
                index: index as i64,
                len: self.len(),
            });
        }
        Ok(T::read_endian(self.slot(index), self.endian))
    }

    /// Decode all elements in logical order
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>> {
        self.check_dtype::<T>()?;
        Ok((0..self.len())
            .map(|i| T::read_endian(self.slot(i), self.endian))
            .collect())
    }

    /// One-dimensional view of the elements in `[start, stop)`
    ///
    /// Callers check `start <= stop <= len`.
    pub(crate) fn slice(&self, start: usize, stop: usize) -> ArrayView<'a> {
        let data = if start == stop {
            &self.data[..0]
        } else {
            &self.data[start * self.stride..]
        };
        ArrayView {
            dtype: self.dtype,
            shape: vec![(stop - start) as u64],
            len: stop - start,
            stride: self.stride,
            endian: self.endian,
            data,
        }
    }

    /// Copy into a densely packed owned buffer, keeping the byte order
    pub fn to_owned(&self) -> Array {
        let mut data = Vec::with_capacity(self.len() * self.dtype.element_size());
        for i in 0..self.len() {
            data.extend_from_slice(self.slot(i));
        }
        Array::new(self.dtype, self.shape.clone(), data).with_endian(self.endian)
    }

    fn check_dtype<T: Element>(&self) -> Result<()> {
        if T::DTYPE != self.dtype {
            return Err(JaggedError::DTypeMismatch {
                expected: T::DTYPE,
                actual: self.dtype,
            });
        }
        Ok(())
    }
}

/// Writable strided view over a caller-supplied byte buffer
#[derive(Debug)]
pub struct ArrayViewMut<'a> {
    pub(crate) dtype: DType,
    pub(crate) shape: Vec<u64>,
    pub(crate) len: usize,
    pub(crate) stride: usize,
    pub(crate) endian: Endian,
    pub(crate) data: &'a mut [u8],
}

impl<'a> ArrayViewMut<'a> {
    pub fn new(
        dtype: DType,
        shape: Vec<u64>,
        stride: usize,
        endian: Endian,
        data: &'a mut [u8],
    ) -> Result<Self> {
        let len = check_layout(dtype, &shape, stride, data.len())?;
        Ok(Self {
            dtype,
            shape,
            len,
            stride,
            endian,
            data,
        })
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut [u8] {
        let start = index * self.stride;
        &mut self.data[start..start + self.dtype.element_size()]
    }

    /// Reborrow as a read-only view
    pub fn as_view(&self) -> ArrayView<'_> {
        ArrayView {
            dtype: self.dtype,
            shape: self.shape.clone(),
            len: self.len,
            stride: self.stride,
            endian: self.endian,
            data: &*self.data,
        }
    }
}

impl<'a> From<ArrayView<'a>> for Array {
    fn from(view: ArrayView<'a>) -> Self {
        view.to_owned()
    }
}
