use byteorder::{LittleEndian, ReadBytesExt};
use std::io;
use std::io::Read;
use std::io::Seek;

/// Extra read helpers used by the block and catalog decoders.
pub(crate) trait ReadExt: Read {
    /// Reads a fixed-size byte array.
    fn read_bytes<const N: usize>(&mut self) -> io::Result<[u8; N]>;

    /// Reads a single null-terminated string.
    fn read_cstring(&mut self) -> io::Result<String>;

    /// Reads `count` consecutive null-terminated strings.
    fn read_cstrings(&mut self, count: usize) -> io::Result<Vec<String>>;

    /// Reads `count` little-endian `u16` values.
    fn read_u16_array(&mut self, count: usize) -> io::Result<Vec<u16>>;
}

impl<T> ReadExt for T
where
    T: Read + ?Sized,
{
    fn read_bytes<const N: usize>(&mut self) -> io::Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    fn read_cstring(&mut self) -> io::Result<String> {
        let mut bytes = Vec::new();
        loop {
            match self.read_u8()? {
                0 => break,
                byte => bytes.push(byte),
            }
        }
        Ok(match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        })
    }

    fn read_cstrings(&mut self, count: usize) -> io::Result<Vec<String>> {
        let mut strings = Vec::with_capacity(count.min(4096));
        for _ in 0..count {
            strings.push(self.read_cstring()?);
        }
        Ok(strings)
    }

    fn read_u16_array(&mut self, count: usize) -> io::Result<Vec<u16>> {
        let mut result: Vec<u16> = Vec::new();

        result
            .try_reserve_exact(count)
            .map_err(|e| io::Error::new(io::ErrorKind::OutOfMemory, e))?;
        result.resize(count, 0);

        self.read_u16_into::<LittleEndian>(&mut result)?;

        Ok(result)
    }
}

/// Utility methods for working with seekable streams.
pub(crate) trait SeekExt: Seek {
    /// Skips over the given number of bytes from the current position.
    ///
    /// Uses `seek_relative`, so a `BufReader` keeps its buffer when the target is inside it.
    fn skip<P: Copy + 'static>(&mut self, size: P) -> io::Result<()>
    where
        u64: TryFrom<P>;

    /// Moves forward to the next 4-byte boundary of the stream offset.
    ///
    /// Advances by `4 - (offset % 4)` when misaligned and does nothing when aligned.
    fn align4(&mut self) -> io::Result<u64>;
}

impl<T> SeekExt for T
where
    T: Seek + ?Sized,
{
    fn skip<P: Copy + 'static>(&mut self, size: P) -> io::Result<()>
    where
        u64: TryFrom<P>,
    {
        let size = u64::try_from(size).map_err(|_| io::Error::from(io::ErrorKind::InvalidData))?;
        let size = i64::try_from(size).map_err(|_| io::Error::from(io::ErrorKind::InvalidData))?;

        self.seek_relative(size)
    }

    fn align4(&mut self) -> io::Result<u64> {
        let offset = self.stream_position()?;
        let trim = offset % 4;
        if trim == 0 {
            return Ok(offset);
        }
        self.seek_relative((4 - trim) as i64)?;
        Ok(offset + (4 - trim))
    }
}
