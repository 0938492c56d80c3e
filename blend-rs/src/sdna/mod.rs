#[allow(clippy::module_inception)]
mod sdna;
mod sdna_struct;

pub use sdna::{Sdna, SDNA_MAGIC};
pub use sdna_struct::{ResolvedField, SdnaField, SdnaStruct};
