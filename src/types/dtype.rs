//! Element types and byte order of numeric buffers

/// Element type of a numeric buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl DType {
    /// Size in bytes of a single element
    pub fn element_size(self) -> usize {
        match self {
            DType::U8 | DType::I8 => 1,
            DType::U16 | DType::I16 => 2,
            DType::U32 | DType::I32 | DType::F32 => 4,
            DType::U64 | DType::I64 | DType::F64 => 8,
        }
    }
}

/// Byte order of the elements stored in a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    /// Byte order of the host
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endian = Endian::Little;
    /// Byte order of the host
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endian = Endian::Big;

    /// The opposite of the host order
    pub const SWAPPED: Endian = match Endian::NATIVE {
        Endian::Little => Endian::Big,
        Endian::Big => Endian::Little,
    };

    pub fn is_native(self) -> bool {
        self == Endian::NATIVE
    }
}
