//! A masked GIMLI-24 permutation and the duplex AEAD built over it,
//! share-for-share the same construction as `crate::permutation::gimli`
//! and `crate::aead`'s generic duplex skeleton, but carrying every word as a
//! [`MaskedWord`] so the 384-bit state is never reassembled into plain
//! `u32`s except at [`MaskedWord::encode`]/[`MaskedWord::decode`] boundaries.
//!
//! GIMLI's SP-box has one non-linear term per lane that is an AND
//! (`(y & z) << 2`, `(x & y) << 3`) and handled directly by
//! [`MaskedWord::and`]; the third, `(x | z) << 1`, is an OR, rewritten via
//! De Morgan's law (`a | b = !(!a & !b)`) as two `not`s around one more
//! `and`, since the masking layer only implements a multiplication gadget
//! for AND.

use crate::masking::MaskedWord;
use crate::random::Csprng;

const ROUNDS: u32 = 24;

/// The masked 384-bit GIMLI state: 12 masked 32-bit words in the same
/// row-major 3x4 layout as `crate::permutation::gimli::State`.
pub type State<const SHARES: usize> = [MaskedWord<SHARES>; 12];

fn masked_or<const S: usize>(a: MaskedWord<S>, b: MaskedWord<S>, rng: &mut impl Csprng) -> MaskedWord<S> {
    a.not().and(b.not(), rng).not()
}

fn sp_box<const S: usize>(state: &mut State<S>, rng: &mut impl Csprng) {
    for col in 0..4 {
        let x = state[col].rotate_left(24);
        let y = state[col + 4].rotate_left(9);
        let z = state[col + 8];
        state[col + 8] = x.xor(z.shift_left(1)).xor(y.and(z, rng).shift_left(2));
        state[col + 4] = y.xor(x).xor(masked_or(x, z, rng).shift_left(1));
        state[col] = z.xor(y).xor(x.and(y, rng).shift_left(3));
    }
}

/// Runs the full 24-round masked GIMLI permutation.
pub fn permute<const S: usize>(state: &mut State<S>, rng: &mut impl Csprng) {
    for round in (1..=ROUNDS).rev() {
        sp_box(state, rng);
        if round % 4 == 0 {
            state.swap(0, 1);
            state.swap(2, 3);
            state[0] = state[0].xor_const(0x9e37_7900 ^ round);
        }
        if round % 4 == 2 {
            state.swap(0, 2);
            state.swap(1, 3);
        }
    }
}

pub const KEY_SIZE: usize = 16;
pub const NONCE_SIZE: usize = 16;
pub const TAG_SIZE: usize = 16;
const RATE: usize = 16;

fn load_words(bytes: &[u8]) -> [u32; 4] {
    std::array::from_fn(|i| crate::bytes::load_be32(&bytes[i * 4..i * 4 + 4]))
}

fn encode_words<const S: usize>(words: [u32; 4], rng: &mut impl Csprng) -> [MaskedWord<S>; 4] {
    words.map(|w| MaskedWord::encode(w, rng))
}

/// A fresh masked zero word, built without exposing a public constructor on
/// [`MaskedWord`] itself: every share of `x.xor(x)` cancels to zero
/// regardless of what `x` held, so this needs no randomness of its own.
fn masked_zero<const S: usize>(any: MaskedWord<S>) -> MaskedWord<S> {
    any.xor(any)
}

fn init<const S: usize>(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    rng: &mut impl Csprng,
) -> (State<S>, [MaskedWord<S>; 4]) {
    let key_words = encode_words::<S>(load_words(key), rng);
    let nonce_words = encode_words::<S>(load_words(nonce), rng);
    let zero = masked_zero(key_words[0]);

    let mut state: State<S> = std::array::from_fn(|i| {
        if i < 4 {
            nonce_words[i]
        } else if i < 8 {
            key_words[i - 4]
        } else {
            zero
        }
    });
    permute(&mut state, rng);

    for i in 0..4 {
        state[4 + i] = state[4 + i].xor(key_words[i]);
    }
    permute(&mut state, rng);

    (state, key_words)
}

fn pad_partial<const S: usize>(block: &[u8], zero: MaskedWord<S>) -> [MaskedWord<S>; 4] {
    let mut buf = [0u8; RATE];
    buf[..block.len()].copy_from_slice(block);
    buf[block.len()] = 0x80;
    load_words(&buf).map(|w| zero.xor_const(w))
}

fn absorb_ad<const S: usize>(state: &mut State<S>, rng: &mut impl Csprng, ad: &[u8]) {
    let zero = masked_zero(state[0]);
    let mut chunks = ad.chunks_exact(RATE);
    for block in &mut chunks {
        let words = load_words(block);
        for i in 0..4 {
            state[i] = state[i].xor_const(words[i]);
        }
        permute(state, rng);
    }
    let pad = pad_partial(chunks.remainder(), zero);
    for i in 0..4 {
        state[i] = state[i].xor(pad[i]);
    }
    permute(state, rng);
    state[8] = state[8].xor_const(1); // domain separation: associated-data phase complete
}

fn finalize<const S: usize>(
    mut state: State<S>,
    key_words: &[MaskedWord<S>; 4],
    rng: &mut impl Csprng,
) -> [u8; TAG_SIZE] {
    for i in 0..4 {
        state[4 + i] = state[4 + i].xor(key_words[i]);
    }
    permute(&mut state, rng);

    let mut tag = [0u8; TAG_SIZE];
    for i in 0..4 {
        crate::bytes::store_be32(&mut tag[i * 4..i * 4 + 4], state[4 + i].decode());
    }
    tag
}

/// Encrypts `plaintext`, authenticating `ad`, returning `ciphertext ++ tag`.
/// Plaintext and ciphertext are public values, so they enter and leave the
/// masked rate through [`MaskedWord::xor_const`] and [`MaskedWord::decode`];
/// only the permutation's internal state stays masked throughout.
pub fn encrypt<const S: usize>(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ad: &[u8],
    plaintext: &[u8],
    rng: &mut impl Csprng,
) -> Vec<u8> {
    let (mut state, key_words) = init::<S>(key, nonce, rng);
    absorb_ad(&mut state, rng, ad);

    let mut out = Vec::with_capacity(plaintext.len() + TAG_SIZE);
    let mut chunks = plaintext.chunks_exact(RATE);
    for block in &mut chunks {
        let words = load_words(block);
        for i in 0..4 {
            state[i] = state[i].xor_const(words[i]);
            out.extend_from_slice(&state[i].decode().to_be_bytes());
        }
        permute(&mut state, rng);
    }
    let tail = chunks.remainder();
    if !tail.is_empty() || plaintext.is_empty() {
        let zero = masked_zero(state[0]);
        let pad = pad_partial(tail, zero);
        let mut tail_out = Vec::with_capacity(tail.len());
        for i in 0..4 {
            state[i] = state[i].xor(pad[i]);
            tail_out.extend_from_slice(&state[i].decode().to_be_bytes());
        }
        out.extend_from_slice(&tail_out[..tail.len()]);
    }

    out.extend_from_slice(&finalize(state, &key_words, rng));
    out
}

/// Decrypts `input` (`ciphertext ++ tag`), verifying `ad`. Rejects inputs
/// shorter than [`TAG_SIZE`] with [`crate::error::AeadError::ShortCiphertext`]
/// before touching the permutation.
pub fn decrypt<const S: usize>(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ad: &[u8],
    input: &[u8],
    rng: &mut impl Csprng,
) -> Result<Vec<u8>, crate::error::AeadError> {
    if input.len() < TAG_SIZE {
        return Err(crate::error::AeadError::ShortCiphertext);
    }
    let (ct, provided_tag) = input.split_at(input.len() - TAG_SIZE);
    let (mut state, key_words) = init::<S>(key, nonce, rng);
    absorb_ad(&mut state, rng, ad);

    let mut out = Vec::with_capacity(ct.len());
    let mut chunks = ct.chunks_exact(RATE);
    for block in &mut chunks {
        let ct_words = load_words(block);
        for i in 0..4 {
            out.extend_from_slice(&(state[i].decode() ^ ct_words[i]).to_be_bytes());
            state[i] = masked_zero(state[i]).xor_const(ct_words[i]);
        }
        permute(&mut state, rng);
    }
    let tail = chunks.remainder();
    if !tail.is_empty() || ct.is_empty() {
        let mut rate_bytes = [0u8; RATE];
        for i in 0..4 {
            crate::bytes::store_be32(&mut rate_bytes[i * 4..i * 4 + 4], state[i].decode());
        }
        for (i, &b) in tail.iter().enumerate() {
            out.push(b ^ rate_bytes[i]);
            rate_bytes[i] = b;
        }
        rate_bytes[tail.len()] ^= 0x80;
        let words = load_words(&rate_bytes);
        for i in 0..4 {
            state[i] = masked_zero(state[i]).xor_const(words[i]);
        }
    }

    let tag = finalize(state, &key_words, rng);
    if crate::bytes::ct_eq(&tag, provided_tag) == 0 {
        Ok(out)
    } else {
        Err(crate::error::TagMismatch.into())
    }
}
