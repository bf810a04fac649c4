//! Tests for the endian-explicit word helpers and `ct_eq`.

use crate::bytes::{
    ct_eq, load_be24, load_be32, load_be64, load_le32, load_le64, store_be24, store_be32,
    store_be64, store_le32, store_le64,
};

#[test]
fn le32_round_trips() {
    let mut buf = [0u8; 4];
    store_le32(&mut buf, 0x0102_0304);
    assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);
    assert_eq!(load_le32(&buf), 0x0102_0304);
}

#[test]
fn be32_round_trips() {
    let mut buf = [0u8; 4];
    store_be32(&mut buf, 0x0102_0304);
    assert_eq!(buf, [0x01, 0x02, 0x03, 0x04]);
    assert_eq!(load_be32(&buf), 0x0102_0304);
}

#[test]
fn le64_round_trips() {
    let mut buf = [0u8; 8];
    store_le64(&mut buf, 0x0102_0304_0506_0708);
    assert_eq!(load_le64(&buf), 0x0102_0304_0506_0708);
}

#[test]
fn be64_round_trips() {
    let mut buf = [0u8; 8];
    store_be64(&mut buf, 0x0102_0304_0506_0708);
    assert_eq!(load_be64(&buf), 0x0102_0304_0506_0708);
}

#[test]
fn be24_round_trips() {
    let mut buf = [0u8; 3];
    store_be24(&mut buf, 0x00ab_cdef);
    assert_eq!(buf, [0xab, 0xcd, 0xef]);
    assert_eq!(load_be24(&buf), 0x00ab_cdef);
}

#[test]
fn ct_eq_matches_equal_buffers() {
    assert_eq!(ct_eq(b"same length", b"same length"), 0);
}

#[test]
fn ct_eq_flags_any_differing_byte() {
    for i in 0..8 {
        let a = [0u8; 8];
        let mut b = [0u8; 8];
        b[i] = 1;
        assert_ne!(ct_eq(&a, &b), 0, "byte {i} differing went undetected");
    }
}

#[test]
#[should_panic(expected = "equal-length")]
fn ct_eq_rejects_mismatched_lengths() {
    ct_eq(&[0u8; 4], &[0u8; 5]);
}
