//! SPIX, a sLiSCP-light-256 duplex AEAD (spec.md §4.F's SPIX specifics),
//! ported bit-for-bit against the reference's documented rate-byte
//! offsets, round counts, and key re-absorption schedule
//! (`src/individual/SPIX/spix.c`): an 8-byte rate split across two
//! 4-byte halves at fixed offsets `{8,9,10,11,24,25,26,27}` of the
//! 32-byte sLiSCP-light-256 state, 18-round permutations at key
//! absorption and 9-round permutations between rate blocks, and two
//! domain-separation bytes (`0x01` for associated data, `0x02` for the
//! payload) XORed into the state's last byte.

use crate::{
    bytes::{load_be32, store_be32},
    error::{AeadError, TagMismatch},
    permutation::sliscp_light,
};

pub const KEY_SIZE: usize = 16;
pub const NONCE_SIZE: usize = 16;
pub const TAG_SIZE: usize = 16;
const RATE: usize = 8;
const STATE_SIZE: usize = 32;

/// Byte offsets of the two 4-byte rate halves within the 32-byte state.
const RATE_POSN: [usize; 8] = [8, 9, 10, 11, 24, 25, 26, 27];

fn permute_bytes(state: &mut [u8; STATE_SIZE], rounds: usize) {
    let mut words: sliscp_light::State = std::array::from_fn(|i| load_be32(&state[i * 4..i * 4 + 4]));
    sliscp_light::permute(&mut words, rounds);
    for (i, word) in words.iter().enumerate() {
        store_be32(&mut state[i * 4..i * 4 + 4], *word);
    }
}

fn xor_rate_halves(state: &mut [u8; STATE_SIZE], a: &[u8], b: &[u8]) {
    for (s, x) in state[8..12].iter_mut().zip(a) {
        *s ^= x;
    }
    for (s, x) in state[24..28].iter_mut().zip(b) {
        *s ^= x;
    }
}

fn init(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], ad: &[u8]) -> [u8; STATE_SIZE] {
    let mut state = [0u8; STATE_SIZE];
    state[0..8].copy_from_slice(&nonce[0..8]);
    state[8..16].copy_from_slice(&key[0..8]);
    state[16..24].copy_from_slice(&nonce[8..16]);
    state[24..32].copy_from_slice(&key[8..16]);
    permute_bytes(&mut state, 18);

    xor_rate_halves(&mut state, &key[0..4], &key[4..8]);
    permute_bytes(&mut state, 18);
    xor_rate_halves(&mut state, &key[8..12], &key[12..16]);
    permute_bytes(&mut state, 18);

    if !ad.is_empty() {
        let mut chunks = ad.chunks_exact(RATE);
        for block in &mut chunks {
            xor_rate_halves(&mut state, &block[0..4], &block[4..8]);
            state[STATE_SIZE - 1] ^= 0x01;
            permute_bytes(&mut state, 9);
        }
        let tail = chunks.remainder();
        let temp = tail.len();
        state[RATE_POSN[temp]] ^= 0x80;
        state[STATE_SIZE - 1] ^= 0x01;
        for i in (0..temp).rev() {
            state[RATE_POSN[i]] ^= tail[i];
        }
        permute_bytes(&mut state, 9);
    }

    state
}

fn finalize(state: &mut [u8; STATE_SIZE], key: &[u8; KEY_SIZE]) -> [u8; TAG_SIZE] {
    xor_rate_halves(state, &key[0..4], &key[4..8]);
    permute_bytes(state, 18);
    xor_rate_halves(state, &key[8..12], &key[12..16]);
    permute_bytes(state, 18);

    let mut tag = [0u8; TAG_SIZE];
    tag[0..8].copy_from_slice(&state[8..16]);
    tag[8..16].copy_from_slice(&state[24..32]);
    tag
}

/// Encrypts `plaintext`, authenticating `ad`, returning `ciphertext ++ tag`.
pub fn encrypt(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ad: &[u8],
    plaintext: &[u8],
) -> Vec<u8> {
    let mut state = init(key, nonce, ad);

    let mut out = Vec::with_capacity(plaintext.len() + TAG_SIZE);
    let mut chunks = plaintext.chunks_exact(RATE);
    for block in &mut chunks {
        xor_rate_halves(&mut state, &block[0..4], &block[4..8]);
        out.extend_from_slice(&state[8..12]);
        out.extend_from_slice(&state[24..28]);
        state[STATE_SIZE - 1] ^= 0x02;
        permute_bytes(&mut state, 9);
    }
    let tail = chunks.remainder();
    let temp = tail.len();
    state[RATE_POSN[temp]] ^= 0x80;
    state[STATE_SIZE - 1] ^= 0x02;
    let mut tail_out = vec![0u8; temp];
    for i in 0..temp {
        state[RATE_POSN[i]] ^= tail[i];
        tail_out[i] = state[RATE_POSN[i]];
    }
    out.extend_from_slice(&tail_out);
    permute_bytes(&mut state, 9);

    out.extend_from_slice(&finalize(&mut state, key));
    out
}

/// Decrypts `input` (`ciphertext ++ tag`), verifying `ad`. Rejects inputs
/// shorter than [`TAG_SIZE`] with [`AeadError::ShortCiphertext`] before
/// running the permutation at all, matching the reference's
/// `clen < SPIX_TAG_SIZE` check.
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
    let mut state = init(key, nonce, ad);

    let mut out = Vec::with_capacity(ct.len());
    let mut chunks = ct.chunks_exact(RATE);
    for block in &mut chunks {
        for (i, s) in state[8..12].iter_mut().enumerate() {
            out.push(*s ^ block[i]);
            *s = block[i];
        }
        for (i, s) in state[24..28].iter_mut().enumerate() {
            out.push(*s ^ block[4 + i]);
            *s = block[4 + i];
        }
        state[STATE_SIZE - 1] ^= 0x02;
        permute_bytes(&mut state, 9);
    }
    let tail = chunks.remainder();
    let temp = tail.len();
    state[RATE_POSN[temp]] ^= 0x80;
    state[STATE_SIZE - 1] ^= 0x02;
    let mut tail_out = vec![0u8; temp];
    for i in (0..temp).rev() {
        let cbyte = tail[i];
        tail_out[i] = cbyte ^ state[RATE_POSN[i]];
        state[RATE_POSN[i]] = cbyte;
    }
    out.extend_from_slice(&tail_out);
    permute_bytes(&mut state, 9);

    let tag = finalize(&mut state, key);
    if crate::bytes::ct_eq(&tag, provided_tag) == 0 {
        Ok(out)
    } else {
        Err(TagMismatch.into())
    }
}
