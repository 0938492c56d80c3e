use std::io;

/// Represents all possible errors that can occur while reading a `.blend` file.
///
/// Any I/O level failure aborts the whole parse. Block boundaries cannot be trusted once a
/// length field has been misread, so there is no partial result.
#[derive(Debug)]
pub enum BlendError {
    /// A magic identifier (file header or catalog tag) did not match the expected literal.
    InvalidMagic {
        /// Which identifier was being checked.
        context: &'static str,
        /// The literal that was expected.
        expected: Vec<u8>,
        /// The bytes actually read.
        found: Vec<u8>,
    },
    /// The stream ended before a fixed-size field, counted table or block payload was complete.
    UnexpectedEndOfStream,
    /// A pointer-width or endianness flag byte is outside the known set.
    ///
    /// Only raised when strict flag checking is enabled; otherwise the flag decodes as unknown.
    UnrecognizedFlag {
        /// The name of the flag.
        flag: &'static str,
        /// The raw byte value.
        value: u8,
    },
    /// A type, name or structure index does not point into its catalog table.
    IndexOutOfRange {
        /// The table being indexed.
        table: &'static str,
        /// The offending index.
        index: usize,
        /// The length of the table.
        len: usize,
    },
    /// The data is structurally inconsistent.
    InvalidData(String),
    /// Any other I/O error from the underlying stream.
    Io(io::Error),
}

impl std::fmt::Display for BlendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlendError::InvalidMagic {
                context,
                expected,
                found,
            } => write!(
                f,
                "Invalid {context} magic: expected {:?}, found {:?}",
                String::from_utf8_lossy(expected),
                String::from_utf8_lossy(found)
            ),
            BlendError::UnexpectedEndOfStream => write!(f, "Unexpected end of stream"),
            BlendError::UnrecognizedFlag { flag, value } => {
                write!(f, "Unrecognized {flag} flag: {value:#04x}")
            }
            BlendError::IndexOutOfRange { table, index, len } => {
                write!(f, "Index {index} out of range for {table} table of length {len}")
            }
            BlendError::InvalidData(err) => write!(f, "Invalid data: {err}"),
            BlendError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for BlendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlendError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Short reads become `UnexpectedEndOfStream`; everything else is kept as `Io`.
impl From<io::Error> for BlendError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::UnexpectedEof => BlendError::UnexpectedEndOfStream,
            _ => BlendError::Io(error),
        }
    }
}
