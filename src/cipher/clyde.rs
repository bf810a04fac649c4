//! Clyde-128, a 128-bit tweakable block cipher with an on-the-fly tweakey
//! schedule (spec.md §4.D): 6 steps of 2 rounds each, an AND-based S-box,
//! an 8-rotation-and-XOR L-box, and a tweakey that updates every step by
//! `(t0, t1, t2, t3) -> (t2 ^ t0, t3 ^ t1, t0, t1)`. Ported from the
//! (unmasked) control flow of `clyde128_encrypt_masked` /
//! `clyde128_decrypt_masked` in
//! `src/individual/Spook_masked/internal-spook-m.c`, with every masked AND
//! gadget replaced by a plain bitwise AND — this crate's masked exemplar is
//! Gimli (`crate::masked::gimli`), not Clyde, so Clyde is implemented here
//! only in its ordinary, unmasked form.

use crate::cipher::{BlockCipher, BlockDecrypt, BlockEncrypt};

const STEPS: usize = 6;

/// Six steps of 8 single-bit round-constant values each, one bit added to
/// each of the four state words across the step's two rounds.
const ROUND_CONSTANTS: [[u8; 8]; STEPS] = [
    [1, 0, 0, 0, 0, 1, 0, 0],
    [0, 0, 1, 0, 0, 0, 0, 1],
    [1, 1, 0, 0, 0, 1, 1, 0],
    [0, 0, 1, 1, 1, 1, 0, 1],
    [1, 0, 1, 0, 0, 1, 0, 1],
    [1, 1, 1, 0, 0, 1, 1, 1],
];

/// Clyde-128's 128-bit state and tweak, each as four 32-bit words.
pub type Block = [u32; 4];
/// A tweak value, the same shape as the state.
pub type Tweak = [u32; 4];

fn sbox(s0: u32, s1: u32, s2: u32, s3: u32) -> (u32, u32, u32, u32) {
    let c = s2 ^ (s0 & s1);
    let d = s1 ^ (s3 & s0);
    let new_s2 = s3 ^ (c & d);
    let new_s3 = s0 ^ (c & s3);
    let new_s0 = d;
    let new_s1 = c;
    (new_s0, new_s1, new_s2, new_s3)
}

fn inv_sbox(s0: u32, s1: u32, s2: u32, s3: u32) -> (u32, u32, u32, u32) {
    let d = s2 ^ (s0 & s1);
    let a = s3 ^ (s1 & d);
    let b = s0 ^ (d & a);
    let new_s2 = s1 ^ (a & b);
    (a, b, new_s2, d)
}

/// The L-box, applied once to `(s0, s1)` and once to `(s2, s3)` per round.
fn lbox(x: u32, y: u32) -> (u32, u32) {
    let mut c = x ^ x.rotate_right(12);
    let mut d = y ^ y.rotate_right(12);
    c ^= c.rotate_right(3);
    d ^= d.rotate_right(3);
    let mut x = c ^ x.rotate_left(15);
    let mut y = d ^ y.rotate_left(15);
    c = x ^ x.rotate_left(1);
    d = y ^ y.rotate_left(1);
    x ^= d.rotate_left(6);
    y ^= c.rotate_left(7);
    x ^= c.rotate_right(15);
    y ^= d.rotate_right(15);
    (x, y)
}

fn inv_lbox(x: u32, y: u32) -> (u32, u32) {
    let a0 = x ^ x.rotate_left(7);
    let b0 = y ^ y.rotate_left(7);
    let mut x = x ^ a0.rotate_left(1);
    let mut y = y ^ b0.rotate_left(1);
    x ^= a0.rotate_left(12);
    y ^= b0.rotate_left(12);
    let a1 = x ^ x.rotate_left(1);
    let b1 = y ^ y.rotate_left(1);
    x ^= b1.rotate_left(6);
    y ^= a1.rotate_left(7);
    let a2 = a1 ^ x.rotate_left(15);
    let b2 = b1 ^ y.rotate_left(15);
    (a2.rotate_right(16), b2.rotate_right(16))
}

fn add_round_constants(state: &mut Block, rc: &[u8; 4]) {
    for (word, &bit) in state.iter_mut().zip(rc) {
        *word ^= bit as u32;
    }
}

fn update_tweakey(tweak: Tweak) -> Tweak {
    let [t0, t1, t2, t3] = tweak;
    [t2 ^ t0, t3 ^ t1, t0, t1]
}

fn add_tweakey(state: &mut Block, key: &Block, tweak: &Tweak) {
    for i in 0..4 {
        state[i] ^= key[i] ^ tweak[i];
    }
}

/// Clyde-128 as a tweakable block cipher.
#[derive(Debug, Default)]
pub struct Clyde128;

impl BlockEncrypt for Clyde128 {
    type EncryptionBlock = Block;
    type EncryptionKey = (Block, Tweak);

    fn encrypt(&self, data: Block, (key, tweak): (Block, Tweak)) -> Block {
        let mut state = data;
        let mut tweak = tweak;
        add_tweakey(&mut state, &key, &tweak);

        for rc in &ROUND_CONSTANTS {
            let (s0, s1, s2, s3) = sbox(state[0], state[1], state[2], state[3]);
            let (s0, s1) = lbox(s0, s1);
            let (s2, s3) = lbox(s2, s3);
            state = [s0, s1, s2, s3];
            add_round_constants(&mut state, &rc[0..4].try_into().expect("4 constants"));

            let (s0, s1, s2, s3) = sbox(state[0], state[1], state[2], state[3]);
            let (s0, s1) = lbox(s0, s1);
            let (s2, s3) = lbox(s2, s3);
            state = [s0, s1, s2, s3];
            add_round_constants(&mut state, &rc[4..8].try_into().expect("4 constants"));

            tweak = update_tweakey(tweak);
            add_tweakey(&mut state, &key, &tweak);
        }

        state
    }
}

impl BlockDecrypt for Clyde128 {
    type DecryptionBlock = Block;
    type DecryptionKey = (Block, Tweak);

    fn decrypt(&self, data: Block, (key, tweak): (Block, Tweak)) -> Block {
        let mut state = data;

        let mut tweaks = [tweak; STEPS + 1];
        for i in 0..STEPS {
            tweaks[i + 1] = update_tweakey(tweaks[i]);
        }

        for step in (0..STEPS).rev() {
            let rc = &ROUND_CONSTANTS[step];
            add_tweakey(&mut state, &key, &tweaks[step + 1]);

            add_round_constants(&mut state, &rc[4..8].try_into().expect("4 constants"));
            let (s0, s1) = inv_lbox(state[0], state[1]);
            let (s2, s3) = inv_lbox(state[2], state[3]);
            let (s0, s1, s2, s3) = inv_sbox(s0, s1, s2, s3);
            state = [s0, s1, s2, s3];

            add_round_constants(&mut state, &rc[0..4].try_into().expect("4 constants"));
            let (s0, s1) = inv_lbox(state[0], state[1]);
            let (s2, s3) = inv_lbox(state[2], state[3]);
            let (s0, s1, s2, s3) = inv_sbox(s0, s1, s2, s3);
            state = [s0, s1, s2, s3];
        }

        add_tweakey(&mut state, &key, &tweaks[0]);
        state
    }
}

impl BlockCipher for Clyde128 {
    type Block = Block;
    type Key = (Block, Tweak);
}
