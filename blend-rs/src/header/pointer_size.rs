/// The pointer width declared by the file header.
///
/// The block framer always reads 8-byte address fields; this value is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSize {
    /// `_`: written by a 32-bit build.
    Bits32,
    /// `-`: written by a 64-bit build.
    Bits64,
    /// Unknown or unsupported flag, stores the raw byte value.
    Unknown(u8),
}

impl PointerSize {
    /// The width of a pointer in bytes, if the flag is recognized.
    pub fn byte_width(self) -> Option<usize> {
        match self {
            PointerSize::Bits32 => Some(4),
            PointerSize::Bits64 => Some(8),
            PointerSize::Unknown(_) => None,
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, PointerSize::Unknown(_))
    }
}

impl From<u8> for PointerSize {
    fn from(byte: u8) -> Self {
        match byte {
            b'_' => PointerSize::Bits32,
            b'-' => PointerSize::Bits64,
            other => PointerSize::Unknown(other),
        }
    }
}

impl std::fmt::Display for PointerSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointerSize::Bits32 => write!(f, "32bit"),
            PointerSize::Bits64 => write!(f, "64bit"),
            PointerSize::Unknown(byte) => write!(f, "Undefined ({byte:#04x})"),
        }
    }
}
