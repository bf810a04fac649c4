//! The explicit tier-3 fallback spec.md §4.C requires be "clearly marked
//! insecure, test-only": a seeded xorshift64 generator. [`MaskingRng`]
//! (`super::MaskingRng`) never constructs this on its own; it exists only
//! so tests that need a deterministic, fast, reproducible stream of mask
//! randomness (without touching OS entropy) have a named, honest type to
//! reach for instead of quietly weakening [`super::ChaChaDrbg`].

use super::Csprng;

/// A xorshift64 generator. **Not cryptographically secure** — it has no
/// forward secrecy, a short period relative to a real DRBG, and a
/// state-recovery attack after observing a handful of outputs. Suitable
/// only for deterministic tests.
pub struct InsecureXorshift64 {
    state: u64,
}

impl InsecureXorshift64 {
    /// Seeds the generator. `seed` is forced non-zero (xorshift64's fixed
    /// point) by OR-ing in a constant, so `InsecureXorshift64::new(0)` still
    /// produces output instead of returning zero forever.
    pub fn new(seed: u64) -> Self {
        InsecureXorshift64 { state: seed | 1 }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl Csprng for InsecureXorshift64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// No external entropy source backs this generator; reseeding re-mixes
    /// the current state instead of pulling in fresh randomness.
    fn reseed(&mut self) {
        self.state ^= self.next_u64();
    }

    /// There is nothing to destroy forward-secrecy-wise in a generator with
    /// no entropy input, but the call is honored by advancing the state once
    /// so behavior matches a real DRBG's "output changes after finish".
    fn finish(&mut self) {
        self.next_u64();
    }
}
