//! ChaCha20-based DRBG, grounded on the reference `aead-random.c` used by
//! every masked submission in this family (Gimli-masked, GIFT-COFB-masked):
//! a 16-word ChaCha state, 20 rounds per block, re-keyed every
//! [`MAX_BLOCKS`] blocks or on explicit [`ChaChaDrbg::finish`] to destroy
//! the ability to recover prior output (forward secrecy, spec.md §4.C).

use super::Entropy;

/// Re-key after this many 64-byte blocks have been produced since the last
/// re-key, matching the reference's `AEAD_PRNG_MAX_BLOCKS`.
const MAX_BLOCKS: u16 = 256;

const CHACHA_CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// A ChaCha20 DRBG: 16 words of state (4 constants, 8 words of key, 2 words
/// of nonce/counter-adjacent material, 2 words reserved, 1 block counter —
/// laid out exactly as the ChaCha20 specification's 4x4 matrix), an output
/// buffer, and bookkeeping for when the next re-key is due.
pub struct ChaChaDrbg {
    state: [u32; 16],
    output: [u32; 16],
    posn: usize,
    blocks_since_rekey: u16,
}

impl ChaChaDrbg {
    /// Starting state: the ChaCha20 constants followed by zeroes. This is
    /// never used as-is to generate output — [`ChaChaDrbg::reseed_from`] is
    /// always called before the first [`ChaChaDrbg::next_u32`] by
    /// [`crate::random::MaskingRng::new`].
    pub fn new() -> Self {
        let mut state = [0u32; 16];
        state[..4].copy_from_slice(&CHACHA_CONSTANTS);
        ChaChaDrbg { state, output: [0; 16], posn: 16, blocks_since_rekey: 0 }
    }

    /// Mixes fresh entropy into the key/nonce region of the state (words
    /// 4..14), leaving the constants and the block counter alone.
    pub fn reseed_from(&mut self, entropy: &mut impl Entropy) {
        let mut buf = [0u8; 40];
        entropy.fill(&mut buf);
        for (word, chunk) in self.state[4..14].iter_mut().zip(buf.chunks_exact(4)) {
            *word ^= u32::from_le_bytes(chunk.try_into().expect("4-byte chunk"));
        }
        self.posn = 16;
        self.blocks_since_rekey = 0;
    }

    fn core(&self) -> [u32; 16] {
        let mut x = self.state;
        for _ in 0..10 {
            quarter_round(&mut x, 0, 4, 8, 12);
            quarter_round(&mut x, 1, 5, 9, 13);
            quarter_round(&mut x, 2, 6, 10, 14);
            quarter_round(&mut x, 3, 7, 11, 15);
            quarter_round(&mut x, 0, 5, 10, 15);
            quarter_round(&mut x, 1, 6, 11, 12);
            quarter_round(&mut x, 2, 7, 8, 13);
            quarter_round(&mut x, 3, 4, 9, 14);
        }
        for (out, input) in x.iter_mut().zip(self.state) {
            *out = out.wrapping_add(input);
        }
        x
    }

    fn generate_block(&mut self) {
        self.state[15] = self.state[15].wrapping_add(1);
        self.output = self.core();
        self.posn = 0;
    }

    /// Generates one block and splices its first 384 bits over the
    /// key/nonce region (words 4..16), destroying any way to recompute
    /// state prior to this call. Resets the block counter so the next
    /// `MAX_BLOCKS` worth of output triggers another re-key.
    pub fn finish(&mut self) {
        self.state[15] = self.state[15].wrapping_add(1);
        let out = self.core();
        self.state[4..16].copy_from_slice(&out[..12]);
        self.posn = 16;
        self.blocks_since_rekey = 0;
    }

    pub fn next_u32(&mut self) -> u32 {
        if self.posn < 16 {
            let word = self.output[self.posn];
            self.posn += 1;
            return word;
        }
        self.blocks_since_rekey += 1;
        if self.blocks_since_rekey >= MAX_BLOCKS {
            self.finish();
        }
        self.generate_block();
        let word = self.output[0];
        self.posn = 1;
        word
    }
}

impl Default for ChaChaDrbg {
    fn default() -> Self {
        Self::new()
    }
}

fn quarter_round(x: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    x[a] = x[a].wrapping_add(x[b]);
    x[d] = (x[d] ^ x[a]).rotate_left(16);
    x[c] = x[c].wrapping_add(x[d]);
    x[b] = (x[b] ^ x[c]).rotate_left(12);
    x[a] = x[a].wrapping_add(x[b]);
    x[d] = (x[d] ^ x[a]).rotate_left(8);
    x[c] = x[c].wrapping_add(x[d]);
    x[b] = (x[b] ^ x[c]).rotate_left(7);
}
