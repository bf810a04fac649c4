//! A generic sponge-duplex AEAD over the (unmasked) GIMLI-24 permutation
//! (`crate::permutation::gimli`), built from spec.md §4.F's own prose
//! skeleton, the same way `crate::aead::xoodoo_duplex` and
//! `crate::aead::ascon` are: this crate's `original_source/` pack has no
//! reference C for a GIMLI AEAD layer either (only the ARM-assembly
//! permutation generator and the masked Gimli RNG), so this is this
//! crate's own instantiation of the documented duplex shape, not a port of
//! a specific KAT.
//!
//! This module exists primarily so `crate::masked::gimli` has an unmasked
//! twin built from the *identical* state layout and framing: spec.md §8's
//! "masked vs unmasked equivalence" testable property needs one, and
//! sharing the framing here (rather than inventing a second one for the
//! test alone) is what makes that comparison meaningful instead of
//! coincidental. Rate = the first four words of the 3x4 state; capacity =
//! the other eight, with the key re-absorbed into words 4..8 at init and
//! finalization, mirroring `crate::masked::gimli`'s masked counterpart
//! word-for-word.

use crate::{
    bytes::{load_be32, store_be32},
    error::{AeadError, TagMismatch},
    permutation::gimli::{self, State},
};

pub const KEY_SIZE: usize = 16;
pub const NONCE_SIZE: usize = 16;
pub const TAG_SIZE: usize = 16;
const RATE: usize = 16;

fn load_words(bytes: &[u8]) -> [u32; 4] {
    std::array::from_fn(|i| load_be32(&bytes[i * 4..i * 4 + 4]))
}

fn store_words(words: [u32; 4]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for (i, word) in words.iter().enumerate() {
        store_be32(&mut out[i * 4..i * 4 + 4], *word);
    }
    out
}

fn init(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE]) -> (State, [u32; 4]) {
    let key_words = load_words(key);
    let nonce_words = load_words(nonce);
    let mut state: State = std::array::from_fn(|i| {
        if i < 4 {
            nonce_words[i]
        } else if i < 8 {
            key_words[i - 4]
        } else {
            0
        }
    });
    gimli::permute(&mut state);

    for i in 0..4 {
        state[4 + i] ^= key_words[i];
    }
    gimli::permute(&mut state);

    (state, key_words)
}

fn pad_partial(block: &[u8]) -> [u32; 4] {
    let mut buf = [0u8; RATE];
    buf[..block.len()].copy_from_slice(block);
    buf[block.len()] = 0x80;
    load_words(&buf)
}

fn absorb_ad(state: &mut State, ad: &[u8]) {
    let mut chunks = ad.chunks_exact(RATE);
    for block in &mut chunks {
        let words = load_words(block);
        for i in 0..4 {
            state[i] ^= words[i];
        }
        gimli::permute(state);
    }
    let pad = pad_partial(chunks.remainder());
    for i in 0..4 {
        state[i] ^= pad[i];
    }
    gimli::permute(state);
    state[8] ^= 1; // domain separation: associated-data phase complete
}

fn finalize(mut state: State, key_words: &[u32; 4]) -> [u8; TAG_SIZE] {
    for i in 0..4 {
        state[4 + i] ^= key_words[i];
    }
    gimli::permute(&mut state);
    store_words([state[4], state[5], state[6], state[7]])
}

/// Encrypts `plaintext`, authenticating `ad`, returning `ciphertext ++ tag`.
pub fn encrypt(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ad: &[u8],
    plaintext: &[u8],
) -> Vec<u8> {
    let (mut state, key_words) = init(key, nonce);
    absorb_ad(&mut state, ad);

    let mut out = Vec::with_capacity(plaintext.len() + TAG_SIZE);
    let mut chunks = plaintext.chunks_exact(RATE);
    for block in &mut chunks {
        let words = load_words(block);
        for i in 0..4 {
            state[i] ^= words[i];
        }
        out.extend_from_slice(&store_words([state[0], state[1], state[2], state[3]]));
        gimli::permute(&mut state);
    }
    let tail = chunks.remainder();
    if !tail.is_empty() || plaintext.is_empty() {
        let pad = pad_partial(tail);
        for i in 0..4 {
            state[i] ^= pad[i];
        }
        out.extend_from_slice(&store_words([state[0], state[1], state[2], state[3]])[..tail.len()]);
    }

    out.extend_from_slice(&finalize(state, &key_words));
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
    let (mut state, key_words) = init(key, nonce);
    absorb_ad(&mut state, ad);

    let mut out = Vec::with_capacity(ct.len());
    let mut chunks = ct.chunks_exact(RATE);
    for block in &mut chunks {
        let ct_words = load_words(block);
        for i in 0..4 {
            out.extend_from_slice(&(state[i] ^ ct_words[i]).to_be_bytes());
            state[i] = ct_words[i];
        }
        gimli::permute(&mut state);
    }
    let tail = chunks.remainder();
    if !tail.is_empty() || ct.is_empty() {
        let mut rate_bytes = store_words([state[0], state[1], state[2], state[3]]);
        for (i, &b) in tail.iter().enumerate() {
            out.push(b ^ rate_bytes[i]);
            rate_bytes[i] = b;
        }
        rate_bytes[tail.len()] ^= 0x80;
        let words = load_words(&rate_bytes);
        state[0..4].copy_from_slice(&words);
    }

    let tag = finalize(state, &key_words);
    if crate::bytes::ct_eq(&tag, provided_tag) == 0 {
        Ok(out)
    } else {
        Err(TagMismatch.into())
    }
}
