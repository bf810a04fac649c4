//! Tests for `MaskedWord`'s share arithmetic.

use crate::{masking::MaskedWord, random::InsecureXorshift64};

#[test]
fn encode_decode_round_trips() {
    let mut rng = InsecureXorshift64::new(1);
    for value in [0u32, 1, 0xffff_ffff, 0x1234_5678, 0xdead_beef] {
        let masked: MaskedWord<3> = MaskedWord::encode(value, &mut rng);
        assert_eq!(masked.decode(), value);
    }
}

#[test]
fn xor_is_linear_over_decode() {
    let mut rng = InsecureXorshift64::new(2);
    let a: MaskedWord<4> = MaskedWord::encode(0x1111_1111, &mut rng);
    let b: MaskedWord<4> = MaskedWord::encode(0x2222_2222, &mut rng);
    assert_eq!(a.xor(b).decode(), 0x1111_1111 ^ 0x2222_2222);
}

#[test]
fn xor_const_folds_in_a_public_value() {
    let mut rng = InsecureXorshift64::new(3);
    let a: MaskedWord<2> = MaskedWord::encode(0x0000_00ff, &mut rng);
    assert_eq!(a.xor_const(0xff00_0000).decode(), 0xff00_00ff);
}

#[test]
fn not_complements_the_decoded_value() {
    let mut rng = InsecureXorshift64::new(4);
    let a: MaskedWord<5> = MaskedWord::encode(0x0f0f_0f0f, &mut rng);
    assert_eq!(a.not().decode(), !0x0f0f_0f0f_u32);
}

#[test]
fn rotations_and_shifts_match_plain_arithmetic() {
    let mut rng = InsecureXorshift64::new(5);
    let a: MaskedWord<3> = MaskedWord::encode(0x8000_0001, &mut rng);
    assert_eq!(a.rotate_left(1).decode(), 0x8000_0001u32.rotate_left(1));
    assert_eq!(a.rotate_right(4).decode(), 0x8000_0001u32.rotate_right(4));
    assert_eq!(a.shift_left(3).decode(), 0x8000_0001u32 << 3);
}

#[test]
fn and_gadget_matches_plain_and_for_every_share_count() {
    let mut rng = InsecureXorshift64::new(6);
    for x in [0u32, 0xaaaa_aaaa, 0x1234_5678, 0xffff_ffff] {
        for y in [0u32, 0x5555_5555, 0x0f0f_0f0f, 0xffff_ffff] {
            let mx: MaskedWord<2> = MaskedWord::encode(x, &mut rng);
            let my: MaskedWord<2> = MaskedWord::encode(y, &mut rng);
            assert_eq!(mx.and(my, &mut rng).decode(), x & y);
        }
    }
}

#[test]
fn and_gadget_holds_for_higher_share_counts() {
    let mut rng = InsecureXorshift64::new(7);
    let x: MaskedWord<6> = MaskedWord::encode(0xc0ffee00, &mut rng);
    let y: MaskedWord<6> = MaskedWord::encode(0x00ee11c0, &mut rng);
    assert_eq!(x.and(y, &mut rng).decode(), 0xc0ffee00 & 0x00ee11c0);
}

#[test]
fn swap_exchanges_two_masked_words() {
    let mut rng = InsecureXorshift64::new(8);
    let mut a: MaskedWord<2> = MaskedWord::encode(1, &mut rng);
    let mut b: MaskedWord<2> = MaskedWord::encode(2, &mut rng);
    MaskedWord::swap(&mut a, &mut b);
    assert_eq!(a.decode(), 2);
    assert_eq!(b.decode(), 1);
}

/// The RNG actually has to be consulted for every share past the first:
/// encoding the same value twice from a generator that never repeats its
/// output must not produce the same share tuple twice.
#[test]
fn encoding_draws_fresh_randomness_for_every_share() {
    let mut rng = InsecureXorshift64::new(9);
    let first: MaskedWord<4> = MaskedWord::encode(0x4242_4242, &mut rng);
    let second: MaskedWord<4> = MaskedWord::encode(0x4242_4242, &mut rng);
    assert_ne!(first.shares(), second.shares());
}
