//! Grain-128AEAD, wrapping the `crate::stream::grain128::Grain128` core in
//! the DER-length-prefixed associated-data framing spec.md §4.F's
//! Grain-128AEAD specifics describe, ported from
//! `src/individual/Grain-128AEAD/grain128.c`: the DER length prefix is
//! authenticated before the associated data itself, and a ciphertext
//! shorter than the tag is rejected outright rather than producing an
//! empty plaintext.

use crate::error::{AeadError, TagMismatch};

pub const KEY_SIZE: usize = 16;
pub const NONCE_SIZE: usize = 12;
pub const TAG_SIZE: usize = 8;

/// DER-encodes `adlen` the way the reference's `grain128_encode_adlen` does:
/// short-form for lengths under 0x80, otherwise a length-of-length byte
/// (`0x81`..`0x84`) followed by 1-4 big-endian length bytes.
fn encode_adlen(adlen: u64) -> Vec<u8> {
    if adlen < 0x80 {
        vec![adlen as u8]
    } else if adlen < 0x100 {
        vec![0x81, adlen as u8]
    } else if adlen < 0x1_0000 {
        vec![0x82, (adlen >> 8) as u8, adlen as u8]
    } else if adlen < 0x100_0000 {
        vec![0x83, (adlen >> 16) as u8, (adlen >> 8) as u8, adlen as u8]
    } else {
        vec![
            0x84,
            (adlen >> 24) as u8,
            (adlen >> 16) as u8,
            (adlen >> 8) as u8,
            adlen as u8,
        ]
    }
}

/// Encrypts `plaintext`, authenticating `ad`, returning `ciphertext ++ tag`.
/// Rejects `ad` of 2^32 bytes or more with [`AeadError::InputTooLong`], the
/// point past which the DER length prefix would need a 6th byte.
pub fn encrypt(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ad: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, AeadError> {
    if ad.len() as u64 >= 0x1_0000_0000 {
        return Err(AeadError::InputTooLong);
    }

    let mut state = crate::stream::grain128::Grain128::setup(key, nonce);
    state.authenticate(&encode_adlen(ad.len() as u64));
    state.authenticate(ad);

    let mut ciphertext = vec![0u8; plaintext.len()];
    state.encrypt(&mut ciphertext, plaintext);

    let mut out = ciphertext;
    out.extend_from_slice(&state.compute_tag());
    Ok(out)
}

/// Decrypts `input` (`ciphertext ++ tag`), verifying `ad`. Rejects inputs
/// shorter than [`TAG_SIZE`] with [`AeadError::ShortCiphertext`] before
/// running the cipher at all, matching the reference's `clen < TAG_SIZE`
/// check.
pub fn decrypt(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ad: &[u8],
    input: &[u8],
) -> Result<Vec<u8>, AeadError> {
    if input.len() < TAG_SIZE {
        return Err(AeadError::ShortCiphertext);
    }
    if ad.len() as u64 >= 0x1_0000_0000 {
        return Err(AeadError::InputTooLong);
    }

    let (ct, provided_tag) = input.split_at(input.len() - TAG_SIZE);
    let mut state = crate::stream::grain128::Grain128::setup(key, nonce);
    state.authenticate(&encode_adlen(ad.len() as u64));
    state.authenticate(ad);

    let mut plaintext = vec![0u8; ct.len()];
    state.decrypt(&mut plaintext, ct);

    let tag = state.compute_tag();
    if crate::bytes::ct_eq(&tag, provided_tag) == 0 {
        Ok(plaintext)
    } else {
        Err(TagMismatch.into())
    }
}
