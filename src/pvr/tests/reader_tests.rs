//! Tests for the texture header parser

use std::io::{Cursor, Seek};

use super::test_utils::{raw_texture, HeaderFields, BITS_4444, RGBA_CHANNELS};
use crate::pvr::constants::{fields as names, header};
use crate::pvr::errors::AtlasError;
use crate::pvr::header::PixelFormat;
use crate::pvr::reader::{format_string, HeaderParser};

fn parse(fields: &HeaderFields, tail: &[u8]) -> (Result<crate::pvr::TextureHeader, AtlasError>, u64) {
    let mut cursor = Cursor::new(raw_texture(fields, tail));
    let result = HeaderParser::parse(&mut cursor);
    let position = cursor.stream_position().unwrap();
    (result, position)
}

fn expect_format_error(fields: &HeaderFields, expected_field: &str) {
    match parse(fields, &[0u8; 64]).0 {
        Err(AtlasError::FormatError { field, .. }) => assert_eq!(field, expected_field),
        other => panic!("expected FormatError for {}, got {:?}", expected_field, other),
    }
}

#[test]
fn test_parse_valid_rgba8888_header() {
    let (result, position) = parse(&HeaderFields::rgba8888(4, 2), &[0u8; 32]);
    let parsed = result.unwrap();

    assert_eq!(parsed.pixel_format, PixelFormat::Rgba8888);
    assert_eq!(parsed.width, 4);
    assert_eq!(parsed.height, 2);
    assert_eq!(parsed.metadata_size, 0);
    assert_eq!(position, header::SIZE);
}

#[test]
fn test_parse_valid_rgba4444_header() {
    let (result, _) = parse(&HeaderFields::rgba4444(2, 2), &[0u8; 8]);
    assert_eq!(result.unwrap().pixel_format, PixelFormat::Rgba4444);
}

#[test]
fn test_height_is_read_before_width() {
    let fields = HeaderFields { height: 3, width: 5, ..Default::default() };
    let (result, _) = parse(&fields, &[]);
    let parsed = result.unwrap();

    assert_eq!(parsed.width, 5);
    assert_eq!(parsed.height, 3);
}

#[test]
fn test_metadata_is_skipped() {
    let fields = HeaderFields { metadata_size: 7, ..Default::default() };
    let (result, position) = parse(&fields, &[1, 2, 3, 4]);

    assert_eq!(result.unwrap().pixel_data_offset(), header::SIZE + 7);
    assert_eq!(position, header::SIZE + 7);
}

#[test]
fn test_each_fixed_field_is_enforced() {
    let cases: Vec<(HeaderFields, &str)> = vec![
        (HeaderFields { version: 0x1234_5678, ..Default::default() }, names::VERSION),
        (HeaderFields { flags: 0, ..Default::default() }, names::FLAGS),
        (HeaderFields { format_channels: 0, ..Default::default() }, names::FORMAT_CHANNELS),
        (HeaderFields { color_space: 1, ..Default::default() }, names::COLOR_SPACE),
        (HeaderFields { channel_type: 2, ..Default::default() }, names::CHANNEL_TYPE),
        (HeaderFields { depth: 2, ..Default::default() }, names::DEPTH),
        (HeaderFields { num_surfaces: 6, ..Default::default() }, names::NUM_SURFACES),
        (HeaderFields { num_faces: 6, ..Default::default() }, names::NUM_FACES),
        (HeaderFields { mip_map_count: 4, ..Default::default() }, names::MIP_MAP_COUNT),
    ];

    for (fields, name) in cases {
        expect_format_error(&fields, name);
    }
}

#[test]
fn test_unsupported_format_string_is_rejected() {
    let fields = HeaderFields {
        format_bitness: u32::from_le_bytes([5, 5, 5, 1]),
        ..Default::default()
    };

    match parse(&fields, &[0u8; 16]).0 {
        Err(AtlasError::FormatError { field, actual, expected }) => {
            assert_eq!(field, names::PIXEL_FORMAT);
            assert_eq!(actual, "rgba5551");
            assert!(expected.contains("rgba8888"));
            assert!(expected.contains("rgba4444"));
        },
        other => panic!("expected FormatError, got {:?}", other),
    }
}

#[test]
fn test_channel_order_must_be_rgba() {
    let fields = HeaderFields {
        format_channels: u32::from_le_bytes(*b"bgra"),
        format_bitness: BITS_4444,
        ..Default::default()
    };
    expect_format_error(&fields, names::PIXEL_FORMAT);
}

#[test]
fn test_format_error_precedes_later_field_errors() {
    let fields = HeaderFields {
        format_bitness: u32::from_le_bytes([5, 6, 5, 0]),
        depth: 9,
        ..Default::default()
    };
    expect_format_error(&fields, names::PIXEL_FORMAT);
}

#[test]
fn test_byte_swapped_version_is_reported() {
    let fields = HeaderFields { version: header::VERSION.swap_bytes(), ..Default::default() };

    match parse(&fields, &[0u8; 4]).0 {
        Err(AtlasError::FormatError { field, actual, .. }) => {
            assert_eq!(field, names::VERSION);
            assert!(actual.contains("big-endian"), "actual was {}", actual);
        },
        other => panic!("expected FormatError, got {:?}", other),
    }
}

#[test]
fn test_short_header_is_truncated() {
    let bytes = HeaderFields::default().to_bytes()[..20].to_vec();
    let mut cursor = Cursor::new(bytes);

    match HeaderParser::parse(&mut cursor) {
        Err(AtlasError::TruncatedData { needed, available }) => {
            assert_eq!(needed, header::SIZE);
            assert_eq!(available, 20);
        },
        other => panic!("expected TruncatedData, got {:?}", other),
    }
}

#[test]
fn test_metadata_past_end_is_truncated() {
    let fields = HeaderFields { metadata_size: 100, ..Default::default() };
    let mut bytes = fields.to_bytes();
    bytes.extend_from_slice(&[0u8; 10]);
    let mut cursor = Cursor::new(bytes);

    match HeaderParser::parse(&mut cursor) {
        Err(AtlasError::TruncatedData { needed, available }) => {
            assert_eq!(needed, header::SIZE + 100);
            assert_eq!(available, header::SIZE + 10);
        },
        other => panic!("expected TruncatedData, got {:?}", other),
    }
}

#[test]
fn test_format_string_concatenates_channels_and_bit_counts() {
    assert_eq!(format_string(RGBA_CHANNELS, u32::from_le_bytes([8, 8, 8, 8])), "rgba8888");
    assert_eq!(format_string(RGBA_CHANNELS, BITS_4444), "rgba4444");
    assert_eq!(format_string(RGBA_CHANNELS, u32::from_le_bytes([16, 16, 16, 16])), "rgba16161616");
    assert_eq!(format_string(u32::from_le_bytes(*b"rgb\0"), u32::from_le_bytes([5, 6, 5, 0])), "rgb\u{0}5650");
}
