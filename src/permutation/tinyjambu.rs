//! TinyJAMBU-128's permutation-as-NLFSR (spec.md §4.D): a 128-bit state as
//! four 32-bit words, updated 32 bits at a time by folding a nonlinear
//! extraction of the state with one word of the key, then rotating the
//! four words. Ported from the batched-32-steps formula in
//! `src/genarm/tinyjambu_arm_cortex_m3.c` (`tinyjambu_steps_32`), which
//! computes what the bit-serial specification describes as 32 individual
//! one-bit steps in a single word operation.

use docext::docext;

/// The 128-bit TinyJAMBU state: four 32-bit words.
pub type State = [u32; 4];

/// Applies one batch of 32 steps, folding in `key_word`, and rotates the
/// state by one word (the bit-serial step's net effect after 32
/// applications):
/// $$s_0' = s_0 \oplus (s_1 \gg 15) \oplus (s_2 \ll 17) \oplus (s_2 \gg 27)
/// \oplus (s_3 \ll 5) \oplus \lnot\big((s_2 \gg 6 \oplus s_3 \ll 26) \land
/// (s_2 \gg 21 \oplus s_3 \ll 11)\big) \oplus k$$
/// followed by the word rotation $(s_0, s_1, s_2, s_3) \to (s_1, s_2, s_3, s_0')$.
#[docext]
fn steps_32(state: &mut State, key_word: u32) {
    let [s0, s1, s2, s3] = *state;
    let t1 = s1 >> 15;
    let t2 = (s2 >> 6) ^ (s3 << 26);
    let t3 = (s2 >> 21) ^ (s3 << 11);
    let t4 = s2 >> 27;
    let new_s0 = s0 ^ t1 ^ (s2 << 17) ^ t4 ^ (s3 << 5) ^ !(t2 & t3) ^ key_word;
    *state = [s1, s2, s3, new_s0];
}

/// Runs `steps` steps of the TinyJAMBU permutation (`steps` must be a
/// multiple of 32; every phase in spec.md §4.D's schedule — init, AD,
/// encrypt, finalize — uses a fixed multiple of 1024). `key` supplies the
/// per-batch key word, cycling through its words in order; `key_index`
/// threads the cycle position across calls so AEAD framing can interleave
/// permutation calls from different phases without losing key-schedule
/// alignment.
pub fn permute(state: &mut State, key: &[u32], steps: u32, key_index: &mut usize) {
    debug_assert_eq!(steps % 32, 0);
    for _ in 0..(steps / 32) {
        steps_32(state, key[*key_index % key.len()]);
        *key_index += 1;
    }
}
