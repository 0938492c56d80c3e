/// The 4-byte code identifying what a block holds.
///
/// ID blocks use two-letter codes padded with zeros (e.g. `OB\0\0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockCode(pub [u8; 4]);

impl BlockCode {
    /// Terminates the block stream.
    pub const ENDB: Self = Self(*b"ENDB");
    /// Holds the SDNA type catalog.
    pub const DNA1: Self = Self(*b"DNA1");
    pub const GLOB: Self = Self(*b"GLOB");
    pub const REND: Self = Self(*b"REND");
    pub const TEST: Self = Self(*b"TEST");
    pub const DATA: Self = Self(*b"DATA");

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// The code as text with zero padding removed, or `None` if it is not printable ASCII.
    pub fn as_str(&self) -> Option<&str> {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(self.0.len());
        let (text, padding) = self.0.split_at(end);
        if text.is_empty()
            || !text.iter().all(|b| b.is_ascii_graphic() || *b == b' ')
            || padding.iter().any(|&b| b != 0)
        {
            return None;
        }
        std::str::from_utf8(text).ok()
    }
}

impl From<[u8; 4]> for BlockCode {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl std::fmt::Display for BlockCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_str() {
            Some(text) => write!(f, "{text}"),
            None => write!(f, "0x{}", hex::encode(self.0)),
        }
    }
}
