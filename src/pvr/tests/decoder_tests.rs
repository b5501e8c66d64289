//! Tests for pixel decoding

use std::io::{Cursor, Seek, SeekFrom};

use super::test_utils::{raw_texture, HeaderFields};
use crate::decoder::{
    decode_pixels, expand_nibble, Nibble, PixelDecoder, PixelDecoderFactory, Rgba4444Decoder,
    Rgba8888Decoder,
};
use crate::pvr::constants::header;
use crate::pvr::errors::AtlasError;
use crate::pvr::header::PixelFormat;
use crate::pvr::reader::HeaderParser;

fn decode(fields: &HeaderFields, pixels: &[u8]) -> Result<crate::decoder::PixelBuffer, AtlasError> {
    let mut cursor = Cursor::new(raw_texture(fields, pixels));
    let parsed = HeaderParser::parse(&mut cursor)?;
    decode_pixels(&mut cursor, &parsed)
}

#[test]
fn test_rgba8888_is_byte_identity() {
    let decoder = Rgba8888Decoder;
    assert_eq!(decoder.decode_pixel(&[10, 20, 30, 40]), [10, 20, 30, 40]);
    assert_eq!(decoder.bytes_per_pixel(), 4);
}

#[test]
fn test_rgba4444_nibble_layout() {
    let decoder = Rgba4444Decoder;
    // byte1 = 0x34 holds R (high) and G (low); byte0 = 0x12 holds B and A
    assert_eq!(decoder.decode_pixel(&[0x12, 0x34]), [51, 68, 17, 34]);
    assert_eq!(decoder.bytes_per_pixel(), 2);
}

#[test]
fn test_rgba4444_extremes() {
    let decoder = Rgba4444Decoder;
    assert_eq!(decoder.decode_pixel(&[0x00, 0x00]), [0, 0, 0, 0]);
    assert_eq!(decoder.decode_pixel(&[0xFF, 0xFF]), [255, 255, 255, 255]);
    assert_eq!(decoder.decode_pixel(&[0x0F, 0xF0]), [255, 0, 0, 255]);
}

#[test]
fn test_expand_nibble() {
    assert_eq!(expand_nibble(0xA5, Nibble::High), 170);
    assert_eq!(expand_nibble(0xA5, Nibble::Low), 85);
    assert_eq!(expand_nibble(0x0F, Nibble::Low), 255);
}

#[test]
fn test_factory_selects_decoder_by_format() {
    assert_eq!(PixelDecoderFactory::create_decoder(PixelFormat::Rgba8888).bytes_per_pixel(), 4);
    assert_eq!(PixelDecoderFactory::create_decoder(PixelFormat::Rgba4444).bytes_per_pixel(), 2);
    assert_eq!(PixelDecoderFactory::create_decoder(PixelFormat::Rgba4444).name(), "RGBA4444");
}

#[test]
fn test_decode_rgba8888_atlas_row_major() {
    let pixels = [
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, //
        13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    ];
    let atlas = decode(&HeaderFields::rgba8888(3, 2), &pixels).unwrap();

    assert_eq!(atlas.width(), 3);
    assert_eq!(atlas.height(), 2);
    assert_eq!(atlas.as_bytes(), &pixels[..]);
    assert_eq!(atlas.pixel(2, 0), Some([9, 10, 11, 12]));
    assert_eq!(atlas.pixel(0, 1), Some([13, 14, 15, 16]));
}

#[test]
fn test_decode_rgba4444_atlas() {
    let atlas = decode(&HeaderFields::rgba4444(2, 1), &[0x12, 0x34, 0xFF, 0x00]).unwrap();

    assert_eq!(atlas.pixel(0, 0), Some([51, 68, 17, 34]));
    assert_eq!(atlas.pixel(1, 0), Some([0, 0, 255, 255]));
}

#[test]
fn test_decode_after_metadata() {
    let fields = HeaderFields { metadata_size: 5, ..HeaderFields::rgba8888(1, 1) };
    let atlas = decode(&fields, &[9, 8, 7, 6]).unwrap();
    assert_eq!(atlas.pixel(0, 0), Some([9, 8, 7, 6]));
}

#[test]
fn test_short_pixel_region_is_truncated() {
    match decode(&HeaderFields::rgba8888(2, 2), &[0u8; 15]) {
        Err(AtlasError::TruncatedData { needed, available }) => {
            assert_eq!(needed, header::SIZE + 16);
            assert_eq!(available, header::SIZE + 15);
        },
        other => panic!("expected TruncatedData, got {:?}", other),
    }
}

#[test]
fn test_short_rgba4444_region_is_truncated() {
    match decode(&HeaderFields::rgba4444(3, 1), &[0u8; 5]) {
        Err(AtlasError::TruncatedData { needed, available }) => {
            assert_eq!(needed, header::SIZE + 6);
            assert_eq!(available, header::SIZE + 5);
        },
        other => panic!("expected TruncatedData, got {:?}", other),
    }
}

#[test]
fn test_zero_sized_atlas_decodes_empty() {
    let atlas = decode(&HeaderFields::rgba8888(0, 0), &[]).unwrap();
    assert!(atlas.is_empty());
    assert_eq!(atlas.len(), 0);
}

#[test]
fn test_trailing_bytes_are_left_unread() {
    let mut cursor = Cursor::new(raw_texture(&HeaderFields::rgba8888(1, 1), &[1, 2, 3, 4, 0xEE, 0xEE]));
    let parsed = HeaderParser::parse(&mut cursor).unwrap();
    let atlas = decode_pixels(&mut cursor, &parsed).unwrap();

    assert_eq!(atlas.pixel(0, 0), Some([1, 2, 3, 4]));
    assert_eq!(cursor.stream_position().unwrap(), header::SIZE + 4);
    assert_eq!(cursor.seek(SeekFrom::End(0)).unwrap(), header::SIZE + 6);
}
