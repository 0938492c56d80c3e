#[allow(clippy::module_inception)]
mod block;
mod block_code;
mod block_header;

pub use block::{Block, BlockData};
pub use block_code::BlockCode;
pub use block_header::BlockHeader;
