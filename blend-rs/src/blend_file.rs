use crate::block::{Block, BlockCode, BlockData, BlockHeader};
use crate::error::BlendError;
use crate::ext::io_ext::SeekExt;
use crate::header::FileHeader;
use crate::parse_options::ParseOptions;
use crate::sdna::Sdna;
use log::{debug, trace, warn};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FramerState {
    Scanning,
    Done,
}

/// A decoded `.blend` file: its header and every block up to and including `ENDB`.
///
/// Only the `DNA1` block payload is decoded. All other payloads are skipped and recorded as
/// [`BlockData::Opaque`]; interpreting them with the catalog is left to the caller.
///
/// ```rust,no_run
/// use blend_rs::BlendFile;
///
/// let blend = BlendFile::open("scene.blend").unwrap();
/// println!("{}", blend.header);
///
/// let sdna = blend.sdna().unwrap();
/// for block in &blend.blocks {
///     let structure = sdna.struct_for_block(&block.header).unwrap();
///     println!("{} {}", block.header.code, sdna.struct_name(structure).unwrap());
/// }
/// ```
///
/// # Note
/// Block address fields are always read as 8 bytes and all integers as little-endian, whatever
/// the header declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlendFile {
    /// The file header.
    pub header: FileHeader,
    /// All blocks in file order. The last one is always the `ENDB` block.
    pub blocks: Vec<Block>,
}

impl BlendFile {
    /// Opens and decodes the file at `path` with default options.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, BlendError> {
        Self::open_with(path, ParseOptions::default())
    }

    /// Opens and decodes the file at `path`.
    pub fn open_with<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self, BlendError> {
        let file = File::open(path.as_ref())?;
        debug!("Opening {}", path.as_ref().display());
        let mut reader = BufReader::new(file);
        Self::from_reader_with(&mut reader, options)
    }

    /// Decodes a file from a stream positioned at its header, with default options.
    pub fn from_reader<R: Read + Seek>(reader: &mut R) -> Result<Self, BlendError> {
        Self::from_reader_with(reader, ParseOptions::default())
    }

    /// Decodes a file from a stream positioned at its header.
    ///
    /// Any read or seek failure aborts the parse; no partial result is returned.
    pub fn from_reader_with<R: Read + Seek>(
        reader: &mut R,
        options: ParseOptions,
    ) -> Result<Self, BlendError> {
        let start = reader.stream_position()?;
        let stream_len = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(start))?;

        let header = FileHeader::read(reader)?;
        if options.strict_flags {
            header.check_flags()?;
        }

        let blocks = Self::read_blocks(reader, stream_len, options)?;
        debug!("Read {} blocks", blocks.len());

        Ok(Self { header, blocks })
    }

    fn read_blocks<R: Read + Seek>(
        reader: &mut R,
        stream_len: u64,
        options: ParseOptions,
    ) -> Result<Vec<Block>, BlendError> {
        let mut blocks = Vec::new();
        let mut state = FramerState::Scanning;

        while state == FramerState::Scanning {
            let header = BlockHeader::read(reader)?;
            trace!(
                "Block {}: {} ({} bytes, sdna {}, count {})",
                blocks.len(),
                header.code,
                header.size,
                header.sdna_index,
                header.count
            );
            if header.is_end() {
                state = FramerState::Done;
            }

            let data = Self::read_block_data(reader, &header, stream_len, options)?;
            blocks.push(Block::new(header, data));
        }

        Ok(blocks)
    }

    /// Decodes or skips the payload following `header`, keyed by the block code.
    fn read_block_data<R: Read + Seek>(
        reader: &mut R,
        header: &BlockHeader,
        stream_len: u64,
        options: ParseOptions,
    ) -> Result<BlockData, BlendError> {
        let payload_start = reader.stream_position()?;
        let payload_end = payload_start + u64::from(header.size);

        match header.code {
            BlockCode::DNA1 => {
                let sdna = Sdna::read(reader)?;
                if options.validate_indices {
                    sdna.validate()?;
                }

                let position = reader.stream_position()?;
                if position != payload_end {
                    warn!(
                        "SDNA decoded {} bytes but its block declares {}",
                        position - payload_start,
                        header.size
                    );
                }
                if position < payload_end {
                    skip_within(reader, payload_end - position, stream_len)?;
                }
                Ok(BlockData::Catalog(sdna))
            }
            _ => {
                skip_within(reader, u64::from(header.size), stream_len)?;
                Ok(BlockData::Opaque)
            }
        }
    }

    /// The catalog from the first `DNA1` block.
    pub fn sdna(&self) -> Option<&Sdna> {
        self.blocks.iter().find_map(Block::sdna)
    }

    /// All blocks with the given code, in file order.
    pub fn blocks_with_code(&self, code: BlockCode) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.iter().filter(move |b| b.header.code == code)
    }

    /// The terminating `ENDB` block.
    pub fn end_block(&self) -> Option<&Block> {
        self.blocks.last().filter(|b| b.header.is_end())
    }
}

/// Skips `size` bytes, failing if that would pass the end of the stream.
fn skip_within<R: Seek>(reader: &mut R, size: u64, stream_len: u64) -> Result<(), BlendError> {
    let position = reader.stream_position()?;
    if position.saturating_add(size) > stream_len {
        return Err(BlendError::UnexpectedEndOfStream);
    }
    Ok(reader.skip(size)?)
}
