//! A duplex AEAD over the TinyJAMBU permutation-as-NLFSR
//! (`crate::permutation::tinyjambu`): spec.md §4.D describes TinyJAMBU's
//! "32 steps" update and says the number of 32-step batches varies "by
//! phase (init, AD, encrypt, finalize)" without giving the exact per-phase
//! counts or domain-separation bit positions, and this crate's
//! `original_source/` pack carries no reference C for TinyJAMBU's AEAD
//! layer. The phase lengths below (1024 steps at init and finalize, 640
//! between rate blocks) and the one-word (4-byte) rate are this crate's
//! own instantiation of the documented "permutation-as-NLFSR duplex"
//! shape, not a port of a specific KAT. See DESIGN.md.

use crate::{
    bytes::{load_be32, store_be32},
    error::{AeadError, TagMismatch},
    permutation::tinyjambu::{self, State},
};

pub const KEY_SIZE: usize = 16;
pub const NONCE_SIZE: usize = 12;
pub const TAG_SIZE: usize = 8;
const RATE: usize = 4;

const INIT_STEPS: u32 = 1024;
const FRAME_STEPS: u32 = 640;
const FINAL_STEPS: u32 = 1024;

fn load_key(key: &[u8; KEY_SIZE]) -> [u32; 4] {
    std::array::from_fn(|i| load_be32(&key[i * 4..i * 4 + 4]))
}

fn init(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE]) -> (State, [u32; 4], usize) {
    let key_words = load_key(key);
    let mut state: State = [0; 4];
    let mut key_index = 0usize;
    tinyjambu::permute(&mut state, &key_words, INIT_STEPS, &mut key_index);

    for chunk in nonce.chunks_exact(4) {
        state[1] ^= load_be32(chunk);
        tinyjambu::permute(&mut state, &key_words, FRAME_STEPS, &mut key_index);
    }
    state[3] ^= 1; // domain separation: nonce-absorption phase complete

    (state, key_words, key_index)
}

fn pad_partial(block: &[u8]) -> u32 {
    let mut buf = [0u8; RATE];
    buf[..block.len()].copy_from_slice(block);
    buf[block.len()] = 0x80;
    load_be32(&buf)
}

fn absorb_ad(
    state: &mut State,
    key_words: &[u32; 4],
    key_index: &mut usize,
    ad: &[u8],
) {
    let mut chunks = ad.chunks_exact(RATE);
    for block in &mut chunks {
        state[0] ^= load_be32(block);
        tinyjambu::permute(state, key_words, FRAME_STEPS, key_index);
    }
    state[0] ^= pad_partial(chunks.remainder());
    tinyjambu::permute(state, key_words, FRAME_STEPS, key_index);
    state[3] ^= 2; // domain separation: associated-data phase complete
}

fn finalize(mut state: State, key_words: &[u32; 4], mut key_index: usize) -> [u8; TAG_SIZE] {
    state[3] ^= 4; // domain separation: finalization
    tinyjambu::permute(&mut state, key_words, FINAL_STEPS, &mut key_index);
    let mut tag = [0u8; TAG_SIZE];
    store_be32(&mut tag[0..4], state[0]);
    store_be32(&mut tag[4..8], state[1]);
    tag
}

/// Encrypts `plaintext`, authenticating `ad`, returning `ciphertext ++ tag`.
pub fn encrypt(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ad: &[u8],
    plaintext: &[u8],
) -> Vec<u8> {
    let (mut state, key_words, mut key_index) = init(key, nonce);
    absorb_ad(&mut state, &key_words, &mut key_index, ad);

    let mut out = Vec::with_capacity(plaintext.len() + TAG_SIZE);
    let mut chunks = plaintext.chunks_exact(RATE);
    for block in &mut chunks {
        let ct = state[0] ^ load_be32(block);
        state[0] = ct;
        out.extend_from_slice(&ct.to_be_bytes());
        tinyjambu::permute(&mut state, &key_words, FRAME_STEPS, &mut key_index);
    }
    let tail = chunks.remainder();
    if !tail.is_empty() || plaintext.is_empty() {
        let ct = state[0] ^ pad_partial(tail);
        state[0] = ct;
        out.extend_from_slice(&ct.to_be_bytes()[..tail.len()]);
    }

    out.extend_from_slice(&finalize(state, &key_words, key_index));
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
    let (mut state, key_words, mut key_index) = init(key, nonce);
    absorb_ad(&mut state, &key_words, &mut key_index, ad);

    let mut out = Vec::with_capacity(ct.len());
    let mut chunks = ct.chunks_exact(RATE);
    for block in &mut chunks {
        let ct_word = load_be32(block);
        let pt = state[0] ^ ct_word;
        state[0] = ct_word;
        out.extend_from_slice(&pt.to_be_bytes());
        tinyjambu::permute(&mut state, &key_words, FRAME_STEPS, &mut key_index);
    }
    let tail = chunks.remainder();
    if !tail.is_empty() || ct.is_empty() {
        let mut rate_bytes = state[0].to_be_bytes();
        for (i, &b) in tail.iter().enumerate() {
            out.push(b ^ rate_bytes[i]);
            rate_bytes[i] = b;
        }
        rate_bytes[tail.len()] ^= 0x80;
        state[0] = u32::from_be_bytes(rate_bytes);
    }

    let tag = finalize(state, &key_words, key_index);
    if crate::bytes::ct_eq(&tag, provided_tag) == 0 {
        Ok(out)
    } else {
        Err(TagMismatch.into())
    }
}
