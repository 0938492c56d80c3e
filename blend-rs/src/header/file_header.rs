use crate::error::BlendError;
use crate::ext::io_ext::ReadExt;
use crate::header::{Endianness, PointerSize, Version};
use byteorder::ReadBytesExt;
use log::{debug, warn};
use std::io::Read;

/// The identifier every `.blend` file starts with.
pub const BLEND_MAGIC: &[u8; 7] = b"BLENDER";

/// The fixed 12-byte header at the start of a `.blend` file.
///
/// ```text
/// [7 bytes] "BLENDER"
/// [1 byte ] pointer width, '_' or '-'
/// [1 byte ] endianness, 'v' or 'V'
/// [3 bytes] version digits, e.g. "281"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub identifier: [u8; 7],
    pub pointer_size: PointerSize,
    pub endianness: Endianness,
    pub version: Version,
}

impl FileHeader {
    /// Size of the header on disk, in bytes.
    pub const SIZE: usize = 12;

    /// Reads the header and checks the magic identifier.
    ///
    /// Unrecognized flag bytes do not fail here; they decode as `Unknown`.
    pub fn read<R: Read + ?Sized>(reader: &mut R) -> Result<Self, BlendError> {
        let identifier = reader.read_bytes::<7>()?;
        if &identifier != BLEND_MAGIC {
            return Err(BlendError::InvalidMagic {
                context: "file header",
                expected: BLEND_MAGIC.to_vec(),
                found: identifier.to_vec(),
            });
        }

        let header = Self {
            identifier,
            pointer_size: PointerSize::from(reader.read_u8()?),
            endianness: Endianness::from(reader.read_u8()?),
            version: Version::new(reader.read_bytes::<3>()?),
        };

        if !header.pointer_size.is_known() {
            warn!("Unrecognized pointer width flag: {}", header.pointer_size);
        }
        if !header.endianness.is_known() {
            warn!("Unrecognized endianness flag: {}", header.endianness);
        }
        debug!(
            "File header: pointer size {}, {}, version {}",
            header.pointer_size, header.endianness, header.version
        );

        Ok(header)
    }

    /// Fails with `UnrecognizedFlag` if either flag byte is outside the known set.
    pub fn check_flags(&self) -> Result<(), BlendError> {
        if let PointerSize::Unknown(value) = self.pointer_size {
            return Err(BlendError::UnrecognizedFlag {
                flag: "pointer width",
                value,
            });
        }
        if let Endianness::Unknown(value) = self.endianness {
            return Err(BlendError::UnrecognizedFlag {
                flag: "endianness",
                value,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for FileHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Header:")?;
        writeln!(f, "    Identifier: {}", String::from_utf8_lossy(&self.identifier))?;
        writeln!(f, "    PointerSize: {}", self.pointer_size)?;
        writeln!(f, "    Endianness: {}", self.endianness)?;
        writeln!(f, "    VersionNumber: {}", self.version)
    }
}
