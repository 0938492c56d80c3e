//! # blend-rs
//!
//! `blend-rs` is a pure Rust reader for Blender's `.blend` container format.
//! It walks the block stream of a file and decodes the SDNA type catalog that describes
//! the layout of every structure stored in it.
//!
//! ## Features
//! - Read the file header (pointer width, endianness, version)
//! - Frame every block up to the `ENDB` sentinel without buffering payloads
//! - Decode the `DNA1` block into name, type, type size and structure tables
//! - Resolve a block's structure definition from its SDNA index
//!
//! ## Usage
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! blend-rs = "0.1"
//! ```
//!
//! ### Example: Listing Blocks
//! ```rust,no_run
//! use blend_rs::{BlendFile, ParseOptions};
//!
//! let options = ParseOptions::new().with_validate_indices(true);
//! let blend = BlendFile::open_with("path/to/scene.blend", options).unwrap();
//! let sdna = blend.sdna().unwrap();
//!
//! for block in &blend.blocks {
//!     let structure = sdna.struct_for_block(&block.header).unwrap();
//!     println!(
//!         "{}: {} x {}",
//!         block.header.code,
//!         sdna.struct_name(structure).unwrap(),
//!         block.header.count
//!     );
//! }
//! ```

pub mod blend_file;
pub mod block;
pub mod error;
mod ext;
pub mod header;
pub mod parse_options;
pub mod sdna;

pub use blend_file::BlendFile;
pub use block::{Block, BlockCode, BlockData, BlockHeader};
pub use error::BlendError;
pub use header::{Endianness, FileHeader, PointerSize, Version, BLEND_MAGIC};
pub use parse_options::ParseOptions;
pub use sdna::{ResolvedField, Sdna, SdnaField, SdnaStruct, SDNA_MAGIC};
