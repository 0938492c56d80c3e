use crate::block::BlockHeader;
use crate::sdna::Sdna;

/// The decoded payload of a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockData {
    /// The payload was skipped without being read.
    Opaque,
    /// The payload is the SDNA type catalog.
    Catalog(Sdna),
}

/// One framed unit of the file: its header and what was made of its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub data: BlockData,
}

impl Block {
    pub fn new(header: BlockHeader, data: BlockData) -> Self {
        Self { header, data }
    }

    /// The catalog carried by this block, if any.
    pub fn sdna(&self) -> Option<&Sdna> {
        match &self.data {
            BlockData::Catalog(sdna) => Some(sdna),
            BlockData::Opaque => None,
        }
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header)?;
        match &self.data {
            BlockData::Opaque => writeln!(f, "FileBlockData: (skipped)"),
            BlockData::Catalog(sdna) => write!(f, "{sdna}"),
        }
    }
}
