use crate::block::BlockCode;
use crate::error::BlendError;
use crate::ext::io_ext::ReadExt;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;

/// The fixed 24-byte record in front of every block payload.
///
/// The address field is always read as 8 bytes, whatever pointer width the file header declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    /// Identifies the block's semantics.
    pub code: BlockCode,
    /// Length in bytes of the payload that follows this header.
    pub size: u32,
    /// Memory address the block had when the file was saved. Opaque.
    pub old_memory_address: u64,
    /// Index into the SDNA structure table describing the payload.
    pub sdna_index: u32,
    /// Number of structures stored in the payload.
    pub count: u32,
}

impl BlockHeader {
    /// Size of the header on disk, in bytes.
    pub const SIZE: usize = 24;

    pub fn read<R: Read + ?Sized>(reader: &mut R) -> Result<Self, BlendError> {
        Ok(Self {
            code: BlockCode(reader.read_bytes::<4>()?),
            size: reader.read_u32::<LittleEndian>()?,
            old_memory_address: reader.read_u64::<LittleEndian>()?,
            sdna_index: reader.read_u32::<LittleEndian>()?,
            count: reader.read_u32::<LittleEndian>()?,
        })
    }

    pub fn is_end(&self) -> bool {
        self.code == BlockCode::ENDB
    }
}

impl std::fmt::Display for BlockHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "File Block Header:")?;
        writeln!(f, "    Code: {} {:?}", self.code, self.code.0)?;
        writeln!(f, "    Size: {}", self.size)?;
        writeln!(f, "    OldMemoryAddress: {:#X}", self.old_memory_address)?;
        writeln!(f, "    SDNAIndex: {}", self.sdna_index)?;
        writeln!(f, "    Count: {}", self.count)
    }
}
