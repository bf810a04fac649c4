//! SPECK-64/128, a Feistel-ish ARX block cipher (spec.md §4.D): a 64-bit
//! block as two 32-bit words, a 128-bit key as four 32-bit words, 27
//! rounds. Ported from the round and key-schedule structure in
//! `src/genarm/speck_arm_cortex_m3.c`'s `gen_encrypt_speck64`, which
//! generates (rather than hand-writes) the ARM assembly but documents the
//! per-round data flow in its `printf` comments:
//!
//! ```text
//! x = (rightRotate8(x) + y) ^ s;
//! y = leftRotate3(y) ^ x;
//! l = (s + rightRotate8(l)) ^ round;
//! s = leftRotate3(s) ^ l;
//! ```
//!
//! `s` is the running round key, seeded from the first key word; `l` is a
//! 3-word circular buffer seeded from the other three key words (`m - 1`
//! words for an `m`-word key), matching SPECK's general key schedule for
//! `m = 4`. spec.md §0 assigns SPECK the "vanilla ARX block cipher" slot
//! that would otherwise go to CHAM, which this crate drops for lack of a
//! reference-code grounding (see DESIGN.md).

use crate::cipher::{BlockCipher, BlockDecrypt, BlockEncrypt};

const ROUNDS: usize = 27;

/// SPECK-64/128's 64-bit block: two 32-bit words, `[y, x]` in the ARM
/// source's register naming (`y` is loaded first, from offset 0).
pub type Block = [u32; 2];
/// The 128-bit key, as four 32-bit words.
pub type Key = [u32; 4];

fn key_schedule(key: Key) -> [u32; ROUNDS] {
    let mut l = [key[1], key[2], key[3]];
    let mut s = key[0];
    let mut round_keys = [0u32; ROUNDS];
    round_keys[0] = s;
    for i in 0..(ROUNDS - 1) {
        let l_new = s.wrapping_add(l[i % 3].rotate_right(8)) ^ (i as u32);
        s = s.rotate_left(3) ^ l_new;
        l[i % 3] = l_new;
        round_keys[i + 1] = s;
    }
    round_keys
}

/// SPECK-64/128 as a block cipher.
#[derive(Debug, Default)]
pub struct Speck64_128;

impl BlockEncrypt for Speck64_128 {
    type EncryptionBlock = Block;
    type EncryptionKey = Key;

    fn encrypt(&self, data: Block, key: Key) -> Block {
        let round_keys = key_schedule(key);
        let [mut y, mut x] = data;
        for &s in &round_keys {
            x = x.rotate_right(8).wrapping_add(y) ^ s;
            y = y.rotate_left(3) ^ x;
        }
        [y, x]
    }
}

impl BlockDecrypt for Speck64_128 {
    type DecryptionBlock = Block;
    type DecryptionKey = Key;

    fn decrypt(&self, data: Block, key: Key) -> Block {
        let round_keys = key_schedule(key);
        let [mut y, mut x] = data;
        for &s in round_keys.iter().rev() {
            y = (y ^ x).rotate_right(3);
            x = (x ^ s).wrapping_sub(y).rotate_left(8);
        }
        [y, x]
    }
}

impl BlockCipher for Speck64_128 {
    type Block = Block;
    type Key = Key;
}
