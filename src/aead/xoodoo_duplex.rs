//! A generic sponge-duplex AEAD over the Xoodoo permutation
//! (`crate::permutation::xoodoo`), built from spec.md §4.F's own prose
//! skeleton rather than Xoodyak's bit-exact Cyclist mode: this crate's
//! `original_source/` pack has no reference C for Xoodyak's AEAD framing
//! (only the ARM-assembly Xoodoo permutation generator), so duplicating
//! Cyclist's exact rate/absorb/squeeze split here would be inventing, not
//! learning, a KAT this crate can't check itself against. See DESIGN.md.
//!
//! Rate = plane 0 (16 bytes); capacity = planes 1 and 2 (32 bytes). The
//! key is absorbed into plane 1 at init and folded back in at
//! finalization, the same "re-key at the boundaries" shape
//! `crate::aead::ascon` uses for its two capacity lanes.

use crate::{
    bytes::{load_be32, store_be32},
    error::{AeadError, TagMismatch},
    permutation::xoodoo::{self, State},
};

pub const KEY_SIZE: usize = 16;
pub const NONCE_SIZE: usize = 16;
pub const TAG_SIZE: usize = 16;
const RATE: usize = 16;

fn load_plane(bytes: &[u8]) -> [u32; 4] {
    std::array::from_fn(|i| load_be32(&bytes[i * 4..i * 4 + 4]))
}

fn store_plane(plane: [u32; 4]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for (i, word) in plane.iter().enumerate() {
        store_be32(&mut out[i * 4..i * 4 + 4], *word);
    }
    out
}

fn xor_plane(plane: &mut [u32; 4], bytes: &[u8]) {
    for (word, chunk) in plane.iter_mut().zip(bytes.chunks(4)) {
        let mut buf = [0u8; 4];
        buf[..chunk.len()].copy_from_slice(chunk);
        *word ^= u32::from_be_bytes(buf);
    }
}

fn init(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE]) -> (State, [u32; 4]) {
    let key_plane = load_plane(key);
    let mut state: State = [[0; 4], key_plane, [0; 4]];
    state[0] = load_plane(nonce);
    xoodoo::permute(&mut state);
    state[2] = key_plane;
    xoodoo::permute(&mut state);
    (state, key_plane)
}

fn pad_partial(block: &[u8]) -> [u32; 4] {
    let mut buf = [0u8; RATE];
    buf[..block.len()].copy_from_slice(block);
    buf[block.len()] = 0x80;
    load_plane(&buf)
}

fn absorb_ad(state: &mut State, ad: &[u8]) {
    let mut chunks = ad.chunks_exact(RATE);
    for block in &mut chunks {
        xor_plane(&mut state[0], block);
        xoodoo::permute(state);
    }
    let mut rate = state[0];
    let pad = pad_partial(chunks.remainder());
    for i in 0..4 {
        rate[i] ^= pad[i];
    }
    state[0] = rate;
    xoodoo::permute(state);
    state[2][3] ^= 1; // domain separation: associated-data phase complete
}

fn finalize(mut state: State, key_plane: [u32; 4]) -> [u8; TAG_SIZE] {
    for i in 0..4 {
        state[2][i] ^= key_plane[i];
    }
    xoodoo::permute(&mut state);
    store_plane(state[2])
}

/// Encrypts `plaintext`, authenticating `ad`, returning `ciphertext ++ tag`.
pub fn encrypt(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ad: &[u8],
    plaintext: &[u8],
) -> Vec<u8> {
    let (mut state, key_plane) = init(key, nonce);
    absorb_ad(&mut state, ad);

    let mut out = Vec::with_capacity(plaintext.len() + TAG_SIZE);
    let mut chunks = plaintext.chunks_exact(RATE);
    for block in &mut chunks {
        let mut rate = state[0];
        xor_plane(&mut rate, block);
        state[0] = rate;
        out.extend_from_slice(&store_plane(rate));
        xoodoo::permute(&mut state);
    }
    let tail = chunks.remainder();
    if !tail.is_empty() || plaintext.is_empty() {
        let pad = pad_partial(tail);
        let mut rate = state[0];
        for i in 0..4 {
            rate[i] ^= pad[i];
        }
        state[0] = rate;
        out.extend_from_slice(&store_plane(rate)[..tail.len()]);
    }

    out.extend_from_slice(&finalize(state, key_plane));
    out
}

/// Decrypts `input` (`ciphertext ++ tag`), verifying `ad`. Rejects inputs
/// shorter than [`TAG_SIZE`] with [`AeadError::ShortCiphertext`] before
/// touching the permutation.
pub fn decrypt(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ad: &[u8],
    input: &[u8],
) -> Result<Vec<u8>, AeadError> {
    if input.len() < TAG_SIZE {
        return Err(AeadError::ShortCiphertext);
    }
    let (ct, provided_tag) = input.split_at(input.len() - TAG_SIZE);
    let (mut state, key_plane) = init(key, nonce);
    absorb_ad(&mut state, ad);

    let mut out = Vec::with_capacity(ct.len());
    let mut chunks = ct.chunks_exact(RATE);
    for block in &mut chunks {
        let ct_plane = load_plane(block);
        let mut pt_bytes = [0u8; RATE];
        for i in 0..4 {
            let p = state[0][i] ^ ct_plane[i];
            pt_bytes[i * 4..i * 4 + 4].copy_from_slice(&p.to_be_bytes());
        }
        state[0] = ct_plane;
        out.extend_from_slice(&pt_bytes);
        xoodoo::permute(&mut state);
    }
    let tail = chunks.remainder();
    if !tail.is_empty() || ct.is_empty() {
        let mut rate_bytes = store_plane(state[0]);
        for (i, &b) in tail.iter().enumerate() {
            out.push(b ^ rate_bytes[i]);
            rate_bytes[i] = b;
        }
        rate_bytes[tail.len()] ^= 0x80;
        state[0] = load_plane(&rate_bytes);
    }

    let tag = finalize(state, key_plane);
    if crate::bytes::ct_eq(&tag, provided_tag) == 0 {
        Ok(out)
    } else {
        Err(TagMismatch.into())
    }
}
