mod endianness;
mod file_header;
mod pointer_size;
mod version;

pub use endianness::Endianness;
pub use file_header::{FileHeader, BLEND_MAGIC};
pub use pointer_size::PointerSize;
pub use version::Version;
