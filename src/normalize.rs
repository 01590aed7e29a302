//! Byte-order normalization of numeric buffers

use crate::error::{JaggedError, Result};
use crate::types::{ArrayViewMut, DType, Element, Endian};
use byteorder::NativeEndian;
use tracing::debug;

impl ArrayViewMut<'_> {
    /// Byte-swap every element to host order in place
    ///
    /// Only the first `element_size` bytes of each strided slot are rewritten.
    /// A buffer already in host order is left untouched whatever its type;
    /// a swapped floating-point buffer is rejected.
    pub fn make_native(&mut self) -> Result<()> {
        if self.endian.is_native() {
            return Ok(());
        }

        match self.dtype {
            DType::U8 | DType::I8 => {}
            DType::U16 | DType::I16 => self.swap_slots::<u16>(),
            DType::U32 | DType::I32 => self.swap_slots::<u32>(),
            DType::U64 | DType::I64 => self.swap_slots::<u64>(),
            dtype @ (DType::F32 | DType::F64) => {
                return Err(JaggedError::UnsupportedType { dtype });
            }
        }

        debug!(
            dtype = ?self.dtype,
            len = self.len(),
            stride = self.stride,
            "byte-swapped buffer to native order"
        );
        self.endian = Endian::NATIVE;
        Ok(())
    }

    fn swap_slots<T: Element>(&mut self) {
        let endian = self.endian;
        for i in 0..self.len() {
            let slot = self.slot_mut(i);
            let value = T::read_endian(slot, endian);
            T::write::<NativeEndian>(slot, value);
        }
    }
}
