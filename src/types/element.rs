//! Scalar element traits

use super::{DType, Endian};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use bytemuck::Pod;
use num_traits::{AsPrimitive, PrimInt};
use std::fmt;

/// Trait for types that can be stored in a jagged buffer
pub trait Element: Pod + PartialEq + fmt::Debug + fmt::Display + 'static {
    const DTYPE: DType;

    fn read<B: ByteOrder>(bytes: &[u8]) -> Self;

    fn write<B: ByteOrder>(bytes: &mut [u8], value: Self);

    /// Decode one element stored in `endian` order
    fn read_endian(bytes: &[u8], endian: Endian) -> Self {
        match endian {
            Endian::Little => Self::read::<LittleEndian>(bytes),
            Endian::Big => Self::read::<BigEndian>(bytes),
        }
    }
}

/// The closed set of fixed-width integers accepted as index buffers
pub trait IndexType: Element + PrimInt + AsPrimitive<i64> {}

impl Element for u8 {
    const DTYPE: DType = DType::U8;

    fn read<B: ByteOrder>(bytes: &[u8]) -> Self {
        bytes[0]
    }

    fn write<B: ByteOrder>(bytes: &mut [u8], value: Self) {
        bytes[0] = value;
    }
}

impl Element for i8 {
    const DTYPE: DType = DType::I8;

    fn read<B: ByteOrder>(bytes: &[u8]) -> Self {
        bytes[0] as i8
    }

    fn write<B: ByteOrder>(bytes: &mut [u8], value: Self) {
        bytes[0] = value as u8;
    }
}

macro_rules! impl_element {
    ($t:ty, $dtype:ident, $read:ident, $write:ident) => {
        impl Element for $t {
            const DTYPE: DType = DType::$dtype;

            fn read<B: ByteOrder>(bytes: &[u8]) -> Self {
                B::$read(bytes)
            }

            fn write<B: ByteOrder>(bytes: &mut [u8], value: Self) {
                B::$write(bytes, value)
            }
        }
    };
}

impl_element!(u16, U16, read_u16, write_u16);
impl_element!(i16, I16, read_i16, write_i16);
impl_element!(u32, U32, read_u32, write_u32);
impl_element!(i32, I32, read_i32, write_i32);
impl_element!(u64, U64, read_u64, write_u64);
impl_element!(i64, I64, read_i64, write_i64);
impl_element!(f32, F32, read_f32, write_f32);
impl_element!(f64, F64, read_f64, write_f64);

impl IndexType for u8 {}
impl IndexType for i8 {}
impl IndexType for u16 {}
impl IndexType for i16 {}
impl IndexType for u32 {}
impl IndexType for i32 {}
impl IndexType for u64 {}
impl IndexType for i64 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_both_orders() {
        let bytes = [0x00, 0x00, 0x00, 0x01];
        assert_eq!(u32::read_endian(&bytes, Endian::Big), 1);
        assert_eq!(u32::read_endian(&bytes, Endian::Little), 0x0100_0000);
    }

    #[test]
    fn signed_single_byte() {
        let mut bytes = [0u8; 1];
        i8::write::<LittleEndian>(&mut bytes, -2);
        assert_eq!(bytes[0], 0xFE);
        assert_eq!(i8::read_endian(&bytes, Endian::Big), -2);
    }
}
