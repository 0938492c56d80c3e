mod support;

use blend_rs::{
    BlendError, BlendFile, Endianness, FileHeader, ParseOptions, PointerSize, Version,
};
use std::io::Cursor;
use support::BlendBuilder;

#[test]
fn decodes_64bit_little_endian_281() {
    let mut cursor = Cursor::new(b"BLENDER-v281".to_vec());
    let header = FileHeader::read(&mut cursor).unwrap();

    assert_eq!(header.pointer_size, PointerSize::Bits64);
    assert_eq!(header.endianness, Endianness::Little);
    assert_eq!(header.version.major(), '2');
    assert_eq!(header.version.minor(), "81");
    assert_eq!(header.version.to_string(), "2.81");
    assert_eq!(cursor.position(), FileHeader::SIZE as u64);
}

#[test]
fn decodes_32bit_big_endian() {
    let mut cursor = Cursor::new(b"BLENDER_V249".to_vec());
    let header = FileHeader::read(&mut cursor).unwrap();

    assert_eq!(header.pointer_size, PointerSize::Bits32);
    assert_eq!(header.pointer_size.byte_width(), Some(4));
    assert_eq!(header.endianness, Endianness::Big);
    assert_eq!(header.version.to_string(), "2.49");
}

#[test]
fn rejects_wrong_magic() {
    let mut cursor = Cursor::new(b"BLENDIR-v281".to_vec());
    match FileHeader::read(&mut cursor) {
        Err(BlendError::InvalidMagic { found, .. }) => assert_eq!(found, b"BLENDIR"),
        other => panic!("expected InvalidMagic, got {other:?}"),
    }
}

#[test]
fn truncated_header_is_end_of_stream() {
    let mut cursor = Cursor::new(b"BLENDER-v2".to_vec());
    assert!(matches!(
        FileHeader::read(&mut cursor),
        Err(BlendError::UnexpectedEndOfStream)
    ));
}

#[test]
fn unknown_flags_decode_as_unknown() {
    let bytes = BlendBuilder::with_header(b'?', b'x', *b"300").end();
    let blend = BlendFile::from_reader(&mut Cursor::new(bytes)).unwrap();

    assert_eq!(blend.header.pointer_size, PointerSize::Unknown(b'?'));
    assert_eq!(blend.header.endianness, Endianness::Unknown(b'x'));
    assert_eq!(blend.header.pointer_size.byte_width(), None);
    assert_eq!(blend.blocks.len(), 1);
}

#[test]
fn strict_flags_reject_unknown_pointer_width() {
    let bytes = BlendBuilder::with_header(b'?', b'v', *b"281").end();
    let options = ParseOptions::new().with_strict_flags(true);

    match BlendFile::from_reader_with(&mut Cursor::new(bytes), options) {
        Err(BlendError::UnrecognizedFlag { flag, value }) => {
            assert_eq!(flag, "pointer width");
            assert_eq!(value, b'?');
        }
        other => panic!("expected UnrecognizedFlag, got {other:?}"),
    }
}

#[test]
fn strict_flags_reject_unknown_endianness() {
    let bytes = BlendBuilder::with_header(b'-', b'x', *b"281").end();
    let options = ParseOptions::new().with_strict_flags(true);

    assert!(matches!(
        BlendFile::from_reader_with(&mut Cursor::new(bytes), options),
        Err(BlendError::UnrecognizedFlag { value: b'x', .. })
    ));
}

#[test]
fn strict_flags_accept_known_flags() {
    let bytes = BlendBuilder::new().end();
    let options = ParseOptions::new().with_strict_flags(true);
    assert!(BlendFile::from_reader_with(&mut Cursor::new(bytes), options).is_ok());
}

#[test]
fn header_display_matches_flags() {
    let mut cursor = Cursor::new(b"BLENDER-v281".to_vec());
    let text = FileHeader::read(&mut cursor).unwrap().to_string();

    assert!(text.contains("Identifier: BLENDER"));
    assert!(text.contains("PointerSize: 64bit"));
    assert!(text.contains("Endianness: Little endian"));
    assert!(text.contains("VersionNumber: 2.81"));
}

#[test]
fn version_digits_map_bytes_to_chars_uniformly() {
    let version = Version::new([0xE9, b'8', 0xE9]);
    assert_eq!(version.major(), 'é');
    assert_eq!(version.minor(), "8é");
    assert_eq!(version.to_string(), "é.8é");
}
