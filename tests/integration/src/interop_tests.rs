//! Interop Tests - Byte Order Agreement
//!
//! These tests check images against independent references:
//! - shift-and-mask encoders for both byte orders
//! - fixed images as a peer with a different native order would send them
//! - mismatched orders between encoder and decoder
//! - corrupted string payloads

mod common;

use flatcodec::{
    read_f32_ordered, read_i16, read_i32_ordered, read_string_ordered, read_u16_ordered,
    read_u32, write_bytes_ordered, write_f32_ordered, write_i16, write_i16_ordered,
    write_i32_ordered, write_string_ordered, write_u32, write_u32_ordered, ByteOrder, Codec,
    CodecError,
};

use common::*;

fn shift_le(v: u32) -> [u8; 4] {
    [v as u8, (v >> 8) as u8, (v >> 16) as u8, (v >> 24) as u8]
}

fn shift_be(v: u32) -> [u8; 4] {
    [(v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8, v as u8]
}

#[test]
fn test_spec_example_layouts() {
    let mut buf = [0u8; 4];
    write_i32_ordered(&mut buf, 0, 0x12345678, ByteOrder::Little);
    assert_eq!(buf, [0x78, 0x56, 0x34, 0x12]);
    write_i32_ordered(&mut buf, 0, 0x12345678, ByteOrder::Big);
    assert_eq!(buf, [0x12, 0x34, 0x56, 0x78]);
}

#[test]
fn test_against_shift_and_mask_reference() {
    let mut buf = [0u8; 4];
    let mut state = 0x9E37_79B9u32;
    for _ in 0..1000 {
        // xorshift
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;

        write_u32_ordered(&mut buf, 0, state, ByteOrder::Little);
        assert_eq!(buf, shift_le(state));
        write_u32_ordered(&mut buf, 0, state, ByteOrder::Big);
        assert_eq!(buf, shift_be(state));

        write_f32_ordered(&mut buf, 0, f32::from_bits(state), ByteOrder::Big);
        assert_eq!(buf, shift_be(state));
        assert_eq!(read_f32_ordered(&buf, 0, ByteOrder::Big).0.to_bits(), state);
    }
}

#[test]
fn test_native_forms_follow_host() {
    let native = ByteOrder::native();
    let mut a = [0u8; 4];
    let mut b = [0u8; 4];

    write_u32(&mut a, 0, 0xA1B2C3D4);
    write_u32_ordered(&mut b, 0, 0xA1B2C3D4, native);
    assert_eq!(a, b);
    assert_eq!(read_u32(&a, 0), (0xA1B2C3D4, 4));

    write_i16(&mut a, 0, -300);
    write_i16_ordered(&mut b, 0, -300, native);
    assert_eq!(a[..2], b[..2]);
    assert_eq!(read_i16(&a, 0), (-300, 2));
}

#[test]
fn test_decode_fixed_peer_images() {
    // int32 -2, u16 0x0102, string "hi", float 2.0 as a big-endian peer writes them
    let big = [
        0xFF, 0xFF, 0xFF, 0xFE, 0x01, 0x02, 0x00, 0x00, 0x00, 0x02, b'h', b'i', 0x40, 0x00, 0x00,
        0x00,
    ];
    // and the same fields from a little-endian peer
    let little = [
        0xFE, 0xFF, 0xFF, 0xFF, 0x02, 0x01, 0x02, 0x00, 0x00, 0x00, b'h', b'i', 0x00, 0x00, 0x00,
        0x40,
    ];

    for (image, order) in [(&big, ByteOrder::Big), (&little, ByteOrder::Little)] {
        let mut pos = 0;
        let (a, n) = read_i32_ordered(image, pos, order);
        pos += n;
        let (b, n) = read_u16_ordered(image, pos, order);
        pos += n;
        let (c, n) = read_string_ordered(image, pos, order).unwrap();
        pos += n;
        let (d, n) = read_f32_ordered(image, pos, order);
        pos += n;

        assert_eq!((a, b, c.as_str(), d), (-2, 0x0102, "hi", 2.0));
        assert_eq!(pos, image.len());
    }
}

#[test]
fn test_mismatched_order_swaps_bytes() {
    let mut buf = [0u8; 4];
    write_i32_ordered(&mut buf, 0, 0x12345678, ByteOrder::Big);
    let (value, _) = read_i32_ordered(&buf, 0, ByteOrder::Little);
    assert_eq!(value, 0x78563412);
    assert_eq!(value.swap_bytes(), 0x12345678);
}

#[test]
fn test_mismatched_order_breaks_length_prefix() {
    let mut buf = [0u8; 12];
    write_string_ordered(&mut buf, 0, "abcdefgh", ByteOrder::Big).unwrap();

    // 8 read as little-endian is 0x08000000, far past the buffer
    let result = std::panic::catch_unwind(|| read_string_ordered(&buf, 0, ByteOrder::Little));
    assert!(result.is_err());
}

#[test]
fn test_corrupted_string_is_reported() {
    init_tracing();

    let ctx = Codec::big_endian();
    let reading = Reading {
        sensor_id: 5,
        label: "valid".to_string(),
        value: 0.5,
    };
    let mut buf = vec![0u8; reading.encoded_len()];
    reading.encode(&mut buf, 0, &ctx).unwrap();

    // lone continuation byte in the label
    buf[8] = 0x80;
    let err = Reading::decode(&buf, 0, &ctx).unwrap_err();
    assert!(matches!(err, CodecError::InvalidUtf8(_)));
    assert!(err.to_string().contains("invalid UTF-8"));
}

#[test]
fn test_overlong_encoding_is_rejected() {
    let mut buf = [0u8; 6];
    // overlong encoding of '/'
    write_bytes_ordered(&mut buf, 0, &[0xC0, 0xAF], ByteOrder::Little).unwrap();
    assert!(matches!(
        read_string_ordered(&buf, 0, ByteOrder::Little),
        Err(CodecError::InvalidUtf8(_))
    ));
}
