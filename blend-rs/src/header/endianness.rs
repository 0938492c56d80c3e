/// The byte order declared by the file header.
///
/// Decoding is always little-endian; this value is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// `v`
    Little,
    /// `V`
    Big,
    /// Unknown or unsupported flag, stores the raw byte value.
    Unknown(u8),
}

impl Endianness {
    pub fn is_known(self) -> bool {
        !matches!(self, Endianness::Unknown(_))
    }
}

impl From<u8> for Endianness {
    fn from(byte: u8) -> Self {
        match byte {
            b'v' => Endianness::Little,
            b'V' => Endianness::Big,
            other => Endianness::Unknown(other),
        }
    }
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endianness::Little => write!(f, "Little endian"),
            Endianness::Big => write!(f, "Big endian"),
            Endianness::Unknown(byte) => write!(f, "Undefined ({byte:#04x})"),
        }
    }
}
