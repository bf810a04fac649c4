//! d-share Boolean masking of 32-bit words.
//!
//! Every masked AEAD in this crate ([`crate::masked`]) is built from the
//! handful of operations here: [`MaskedWord::encode`]/[`MaskedWord::decode`]
//! move a value in and out of its masked representation, [`MaskedWord::xor`]
//! and friends are linear and share-wise, and [`MaskedWord::and`] is the
//! ISW multiplication gadget that is the only place fresh randomness enters
//! a masked computation. `SHARES` is a build-time constant (spec.md §4.B
//! allows 2..=6); this crate never instantiates [`MaskedWord`] outside that
//! range, but does not enforce it with a `where` clause because Rust has no
//! stable way to bound a const generic to a set of literals.

use crate::random::Csprng;
use docext::docext;

/// A 32-bit value split into `SHARES` shares that XOR together to the
/// logical value.
///
/// Share order carries no meaning: any permutation of the tuple represents
/// the same value. Nothing in this type lets a caller read an individual
/// share back out except [`MaskedWord::shares`], which exists for the RNG
/// freshness test in `test::masking` and must not be used anywhere a real
/// masked AEAD would be deployed unmasked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskedWord<const SHARES: usize> {
    shares: [u32; SHARES],
}

impl<const SHARES: usize> MaskedWord<SHARES> {
    /// Splits `value` into `SHARES` shares: the last `SHARES - 1` are drawn
    /// fresh from `rng`, and the first is set so that all shares XOR back
    /// to `value`.
    pub fn encode(value: u32, rng: &mut impl Csprng) -> Self {
        let mut shares = [0u32; SHARES];
        let mut acc = value;
        for share in shares.iter_mut().skip(1) {
            *share = rng.next_u32();
            acc ^= *share;
        }
        shares[0] = acc;
        MaskedWord { shares }
    }

    /// Recombines every share back into the logical value.
    pub fn decode(self) -> u32 {
        self.shares.iter().fold(0, |acc, s| acc ^ s)
    }

    /// The raw shares. Only meaningful for tests that check the RNG is
    /// actually producing fresh randomness (spec.md §9): reading this in
    /// production code would be exactly the side channel masking exists to
    /// prevent.
    pub fn shares(&self) -> &[u32; SHARES] {
        &self.shares
    }

    fn from_shares(shares: [u32; SHARES]) -> Self {
        MaskedWord { shares }
    }

    /// Share-wise XOR: linear, so it needs no randomness.
    pub fn xor(self, other: Self) -> Self {
        let mut shares = self.shares;
        for (s, o) in shares.iter_mut().zip(other.shares) {
            *s ^= o;
        }
        Self::from_shares(shares)
    }

    /// XORs a public constant into the first share only.
    ///
    /// A public constant is not secret-shared, so there is nothing to
    /// distribute: folding it into any one share (by convention, the first)
    /// preserves $\mathrm{decode}(x) \oplus c = \mathrm{decode}(\mathrm{xor\_const}(x, c))$.
    #[docext]
    pub fn xor_const(self, c: u32) -> Self {
        let mut shares = self.shares;
        shares[0] ^= c;
        Self::from_shares(shares)
    }

    /// Complements one share. `not(x)` decodes to `!decode(x)` because
    /// flipping one share flips the XOR of all of them exactly once.
    pub fn not(self) -> Self {
        let mut shares = self.shares;
        shares[0] = !shares[0];
        Self::from_shares(shares)
    }

    /// Rotates every share left by `amount` bits. Linear in the same sense
    /// as `xor`: rotation distributes over XOR bit-by-bit.
    pub fn rotate_left(self, amount: u32) -> Self {
        let mut shares = self.shares;
        for s in shares.iter_mut() {
            *s = s.rotate_left(amount);
        }
        Self::from_shares(shares)
    }

    /// Rotates every share right by `amount` bits.
    pub fn rotate_right(self, amount: u32) -> Self {
        let mut shares = self.shares;
        for s in shares.iter_mut() {
            *s = s.rotate_right(amount);
        }
        Self::from_shares(shares)
    }

    /// Shifts every share left by `amount` bits, share-wise.
    pub fn shift_left(self, amount: u32) -> Self {
        let mut shares = self.shares;
        for s in shares.iter_mut() {
            *s <<= amount;
        }
        Self::from_shares(shares)
    }

    /// Exchanges two masked words. Exists as a named operation (rather than
    /// leaving callers to `mem::swap`) because several masked permutations
    /// (Clyde-128's S-box in particular) describe their data flow in terms
    /// of an explicit swap step.
    pub fn swap(a: &mut Self, b: &mut Self) {
        std::mem::swap(a, b);
    }

    /// The ISW multiplication gadget.
    ///
    /// For every pair $i < j$ a fresh random word $r$ masks the cross term
    /// $(x_i \land y_j) \oplus (x_j \land y_i)$: $z_i$ accumulates $r$,
    /// $z_j$ accumulates $r \oplus (x_i \land y_j) \oplus (x_j \land y_i)$,
    /// so that
    /// $$z_i = (x_i \land y_i) \oplus \bigoplus_{j \ne i} r_{ij}$$
    /// where $r_{ij}$ is the random word drawn for pair $(i, j)$. This is
    /// the one non-linear, randomness-consuming operation in the masked
    /// instruction set; every masked S-box in [`crate::masked`] is built
    /// from one or more calls to this gadget.
    #[docext]
    pub fn and(self, other: Self, rng: &mut impl Csprng) -> Self {
        let x = self.shares;
        let y = other.shares;
        let mut z: [u32; SHARES] = std::array::from_fn(|i| x[i] & y[i]);
        for i in 0..SHARES {
            for j in (i + 1)..SHARES {
                let r = rng.next_u32();
                z[i] ^= r;
                z[j] ^= r ^ (x[i] & y[j]) ^ (x[j] & y[i]);
            }
        }
        Self::from_shares(z)
    }
}
