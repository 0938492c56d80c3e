use crate::block::BlockHeader;
use crate::error::BlendError;
use crate::ext::io_ext::{ReadExt, SeekExt};
use crate::sdna::{ResolvedField, SdnaField, SdnaStruct};
use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, trace};
use std::io::{Read, Seek};

/// Identifier at the start of a `DNA1` block payload.
pub const SDNA_MAGIC: &[u8; 4] = b"SDNA";
const NAME_TAG: &[u8; 4] = b"NAME";
const TYPE_TAG: &[u8; 4] = b"TYPE";
const TLEN_TAG: &[u8; 4] = b"TLEN";
const STRC_TAG: &[u8; 4] = b"STRC";

/// The SDNA type catalog ("structure DNA") of a `.blend` file.
///
/// Describes the layout of every structure the writing program knew about. Other blocks are
/// interpreted by looking up their `sdna_index` in [`Sdna::structures`].
///
/// Indices inside [`SdnaStruct`] and [`SdnaField`] are not checked when the catalog is decoded.
/// Use the lookup methods, which return [`BlendError::IndexOutOfRange`], or call
/// [`Sdna::validate`] once up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sdna {
    /// Field names, e.g. `*next`, `co[3]`.
    pub names: Vec<String>,
    /// Type names, e.g. `int`, `Object`.
    pub types: Vec<String>,
    /// Size in bytes of each entry in `types`.
    pub type_sizes: Vec<u16>,
    /// Structure definitions.
    pub structures: Vec<SdnaStruct>,
}

impl Sdna {
    /// Decodes a catalog from a reader positioned at the start of a `DNA1` payload.
    ///
    /// # Layout
    /// ```text
    /// "SDNA"
    /// "NAME" u32 count, count null-terminated strings, pad to 4
    /// "TYPE" u32 count, count null-terminated strings, pad to 4
    /// "TLEN" u16 per type, pad to 4
    /// "STRC" u32 count, per structure: u16 type, u16 field count, (u16 type, u16 name) per field
    /// ```
    ///
    /// Padding is computed from the absolute stream offset.
    pub fn read<R: Read + Seek + ?Sized>(reader: &mut R) -> Result<Self, BlendError> {
        expect_tag(reader, SDNA_MAGIC, "SDNA")?;

        expect_tag(reader, NAME_TAG, "SDNA name table")?;
        let name_count = reader.read_u32::<LittleEndian>()?;
        let names = reader.read_cstrings(name_count as usize)?;
        reader.align4()?;
        trace!("SDNA names: {}", names.len());

        expect_tag(reader, TYPE_TAG, "SDNA type table")?;
        let type_count = reader.read_u32::<LittleEndian>()?;
        let types = reader.read_cstrings(type_count as usize)?;
        reader.align4()?;
        trace!("SDNA types: {}", types.len());

        // One length per type; the table has no count of its own.
        expect_tag(reader, TLEN_TAG, "SDNA type length table")?;
        let type_sizes = reader.read_u16_array(type_count as usize)?;
        reader.align4()?;

        expect_tag(reader, STRC_TAG, "SDNA structure table")?;
        let struct_count = reader.read_u32::<LittleEndian>()?;
        let mut structures = Vec::with_capacity((struct_count as usize).min(4096));
        for _ in 0..struct_count {
            structures.push(Self::read_struct(reader)?);
        }

        debug!(
            "Decoded SDNA: {} names, {} types, {} structures",
            names.len(),
            types.len(),
            structures.len()
        );

        Ok(Self {
            names,
            types,
            type_sizes,
            structures,
        })
    }

    fn read_struct<R: Read + ?Sized>(reader: &mut R) -> Result<SdnaStruct, BlendError> {
        let type_index = reader.read_u16::<LittleEndian>()?;
        let field_count = reader.read_u16::<LittleEndian>()?;
        let mut fields = Vec::with_capacity(field_count as usize);
        for _ in 0..field_count {
            fields.push(SdnaField {
                type_index: reader.read_u16::<LittleEndian>()?,
                name_index: reader.read_u16::<LittleEndian>()?,
            });
        }
        Ok(SdnaStruct { type_index, fields })
    }

    /// Returns the field name at `index`.
    pub fn name(&self, index: usize) -> Result<&str, BlendError> {
        lookup(&self.names, index, "name").map(String::as_str)
    }

    /// Returns the type name at `index`.
    pub fn type_name(&self, index: usize) -> Result<&str, BlendError> {
        lookup(&self.types, index, "type").map(String::as_str)
    }

    /// Returns the size in bytes of the type at `index`.
    pub fn type_size(&self, index: usize) -> Result<u16, BlendError> {
        lookup(&self.type_sizes, index, "type size").copied()
    }

    /// Returns the structure definition at `index`.
    pub fn structure(&self, index: usize) -> Result<&SdnaStruct, BlendError> {
        lookup(&self.structures, index, "structure")
    }

    /// Returns the structure definition describing a block's payload.
    pub fn struct_for_block(&self, header: &BlockHeader) -> Result<&SdnaStruct, BlendError> {
        self.structure(header.sdna_index as usize)
    }

    /// Finds a structure by its type name, returning its index and definition.
    pub fn find_struct(&self, type_name: &str) -> Option<(usize, &SdnaStruct)> {
        self.structures.iter().enumerate().find(|(_, s)| {
            self.types
                .get(s.type_index as usize)
                .is_some_and(|name| name == type_name)
        })
    }

    /// Returns the type name of a structure.
    pub fn struct_name(&self, structure: &SdnaStruct) -> Result<&str, BlendError> {
        self.type_name(structure.type_index as usize)
    }

    /// Looks up the type name, type size and field name of every field of a structure.
    pub fn resolve_fields<'a>(
        &'a self,
        structure: &SdnaStruct,
    ) -> Result<Vec<ResolvedField<'a>>, BlendError> {
        structure
            .fields
            .iter()
            .map(|field| self.resolve_field(field))
            .collect()
    }

    pub fn resolve_field(&self, field: &SdnaField) -> Result<ResolvedField<'_>, BlendError> {
        let type_index = field.type_index as usize;
        Ok(ResolvedField {
            type_name: self.type_name(type_index)?,
            type_size: self.type_size(type_index)?,
            name: self.name(field.name_index as usize)?,
        })
    }

    /// Checks every cross-reference in the catalog.
    ///
    /// Fails with `InvalidData` if the type and type size tables differ in length, and with
    /// `IndexOutOfRange` for the first structure or field index that points outside its table.
    pub fn validate(&self) -> Result<(), BlendError> {
        if self.type_sizes.len() != self.types.len() {
            return Err(BlendError::InvalidData(format!(
                "{} type sizes for {} types",
                self.type_sizes.len(),
                self.types.len()
            )));
        }
        for structure in &self.structures {
            self.type_name(structure.type_index as usize)?;
            for field in &structure.fields {
                self.type_name(field.type_index as usize)?;
                self.name(field.name_index as usize)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Sdna {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Structures:")?;
        for (i, structure) in self.structures.iter().enumerate() {
            let index = structure.type_index as usize;
            match (self.type_name(index), self.type_size(index)) {
                (Ok(name), Ok(size)) => writeln!(f, "    Type {i} : {name} {size} byte")?,
                _ => writeln!(f, "    Type {i} : <invalid type {index}>")?,
            }
            for (j, field) in structure.fields.iter().enumerate() {
                let type_name = self
                    .type_name(field.type_index as usize)
                    .unwrap_or("<invalid type>");
                let name = self
                    .name(field.name_index as usize)
                    .unwrap_or("<invalid name>");
                writeln!(f, "        Field {j} : {type_name} {name}")?;
            }
        }
        Ok(())
    }
}

fn expect_tag<R: Read + ?Sized>(
    reader: &mut R,
    expected: &[u8; 4],
    context: &'static str,
) -> Result<(), BlendError> {
    let found = reader.read_bytes::<4>()?;
    if &found != expected {
        return Err(BlendError::InvalidMagic {
            context,
            expected: expected.to_vec(),
            found: found.to_vec(),
        });
    }
    Ok(())
}

fn lookup<'a, T>(table: &'a [T], index: usize, name: &'static str) -> Result<&'a T, BlendError> {
    table.get(index).ok_or(BlendError::IndexOutOfRange {
        table: name,
        index,
        len: table.len(),
    })
}
