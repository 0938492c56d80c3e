#![allow(dead_code)]

//! Builders for synthetic `.blend` streams.

use blend_rs::BlockHeader;

/// Assembles a `.blend` file byte by byte.
pub struct BlendBuilder {
    bytes: Vec<u8>,
}

impl BlendBuilder {
    /// A 64-bit, little-endian, version 2.81 header.
    pub fn new() -> Self {
        Self::with_header(b'-', b'v', *b"281")
    }

    pub fn with_header(pointer_size: u8, endianness: u8, version: [u8; 3]) -> Self {
        let mut bytes = b"BLENDER".to_vec();
        bytes.push(pointer_size);
        bytes.push(endianness);
        bytes.extend_from_slice(&version);
        Self { bytes }
    }

    /// Appends a block whose header declares `payload.len()` bytes.
    pub fn block(self, code: &[u8; 4], payload: &[u8], sdna_index: u32, count: u32) -> Self {
        let size = payload.len() as u32;
        self.block_with_size(code, size, payload, 0x7f00_dead_beef, sdna_index, count)
    }

    /// Appends a block with an explicit declared size, which may disagree with the payload.
    pub fn block_with_size(
        mut self,
        code: &[u8; 4],
        size: u32,
        payload: &[u8],
        address: u64,
        sdna_index: u32,
        count: u32,
    ) -> Self {
        self.bytes.extend_from_slice(code);
        self.bytes.extend_from_slice(&size.to_le_bytes());
        self.bytes.extend_from_slice(&address.to_le_bytes());
        self.bytes.extend_from_slice(&sdna_index.to_le_bytes());
        self.bytes.extend_from_slice(&count.to_le_bytes());
        self.bytes.extend_from_slice(payload);
        self
    }

    /// Appends a `DNA1` block, padding its tables relative to the absolute file offset.
    pub fn sdna_block(self, sdna: &SdnaBuilder) -> Self {
        let payload = sdna.build(self.bytes.len() + BlockHeader::SIZE);
        self.block(b"DNA1", &payload, 0, 1)
    }

    /// Appends the `ENDB` sentinel and returns the bytes.
    pub fn end(self) -> Vec<u8> {
        self.block(b"ENDB", &[], 0, 0).into_bytes()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Assembles an SDNA catalog payload.
#[derive(Default)]
pub struct SdnaBuilder {
    pub names: Vec<String>,
    pub types: Vec<(String, u16)>,
    pub structs: Vec<(u16, Vec<(u16, u16)>)>,
    /// Filler written into alignment gaps.
    pub pad_byte: u8,
}

impl SdnaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.names.push(name.to_string());
        self
    }

    pub fn type_(mut self, name: &str, size: u16) -> Self {
        self.types.push((name.to_string(), size));
        self
    }

    pub fn structure(mut self, type_index: u16, fields: &[(u16, u16)]) -> Self {
        self.structs.push((type_index, fields.to_vec()));
        self
    }

    pub fn pad_byte(mut self, pad_byte: u8) -> Self {
        self.pad_byte = pad_byte;
        self
    }

    /// The single-structure catalog `{ int x; }`.
    pub fn minimal() -> Self {
        Self::new()
            .name("x")
            .type_("int", 4)
            .structure(0, &[(0, 0)])
    }

    /// Encodes the payload as if it started at absolute stream offset `base`.
    pub fn build(&self, base: usize) -> Vec<u8> {
        let mut out = b"SDNA".to_vec();

        out.extend_from_slice(b"NAME");
        out.extend_from_slice(&(self.names.len() as u32).to_le_bytes());
        for name in &self.names {
            out.extend_from_slice(name.as_bytes());
            out.push(0);
        }
        self.pad(&mut out, base);

        out.extend_from_slice(b"TYPE");
        out.extend_from_slice(&(self.types.len() as u32).to_le_bytes());
        for (name, _) in &self.types {
            out.extend_from_slice(name.as_bytes());
            out.push(0);
        }
        self.pad(&mut out, base);

        out.extend_from_slice(b"TLEN");
        for (_, size) in &self.types {
            out.extend_from_slice(&size.to_le_bytes());
        }
        self.pad(&mut out, base);

        out.extend_from_slice(b"STRC");
        out.extend_from_slice(&(self.structs.len() as u32).to_le_bytes());
        for (type_index, fields) in &self.structs {
            out.extend_from_slice(&type_index.to_le_bytes());
            out.extend_from_slice(&(fields.len() as u16).to_le_bytes());
            for (field_type, field_name) in fields {
                out.extend_from_slice(&field_type.to_le_bytes());
                out.extend_from_slice(&field_name.to_le_bytes());
            }
        }
        out
    }

    fn pad(&self, out: &mut Vec<u8>, base: usize) {
        while (base + out.len()) % 4 != 0 {
            out.push(self.pad_byte);
        }
    }
}
