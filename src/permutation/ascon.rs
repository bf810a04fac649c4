//! ASCON and GASCON's 320-bit permutation (spec.md §4.D): five 64-bit
//! lanes, a round constant XORed into lane 2, the canonical 5-bit S-box
//! applied bitwise across the five lanes, and a per-lane linear layer of
//! two rotate-XORs. GASCON differs from ASCON only in three of the ten
//! rotation amounts in the linear layer.
//!
//! spec.md §9 notes that a bit-sliced 32-bit implementation (each lane held
//! as even/odd 32-bit halves) and a native 64-bit implementation are
//! equally compliant; this crate uses native `u64` lanes and
//! [`u64::rotate_right`], since nothing here runs on a target where that is
//! not the efficient choice.

use docext::docext;

/// The 320-bit ASCON/GASCON state: five 64-bit lanes.
pub type State = [u64; 5];

/// Round constants for the full 12-round schedule,
/// $RC(r) = ((0x0F - r) \ll 4) \mathbin{|} r$.
/// A `p_rounds`-round permutation uses the *last* `p_rounds` entries of this
/// table, matching the reference's "pa"/"pb"/"pc" convention (p12 starts at
/// round 0, p8 at round 4, p6 at round 6).
#[docext]
const ROUND_CONSTANTS: [u64; 12] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
];

/// Per-lane $(a, b)$ rotation pairs for the linear layer:
/// $x_i \mathrel{\oplus}= \mathrm{ror}(x_i, a) \oplus \mathrm{ror}(x_i, b)$.
#[docext]
const ASCON_ROTATIONS: [(u32, u32); 5] = [(19, 28), (61, 39), (1, 6), (10, 17), (7, 41)];

/// GASCON's rotation pairs: identical to ASCON except lanes 1 and 4.
const GASCON_ROTATIONS: [(u32, u32); 5] = [(19, 28), (61, 38), (1, 6), (10, 17), (7, 40)];

fn sbox(state: &mut State) {
    let [x0, x1, x2, x3, x4] = *state;
    let x0 = x0 ^ x4;
    let x4 = x4 ^ x3;
    let x2 = x2 ^ x1;
    let t0 = !x0 & x1;
    let t1 = !x1 & x2;
    let t2 = !x2 & x3;
    let t3 = !x3 & x4;
    let t4 = !x4 & x0;
    let x0 = x0 ^ t1;
    let x1 = x1 ^ t2;
    let x2 = x2 ^ t3;
    let x3 = x3 ^ t4;
    let x4 = x4 ^ t0;
    let x1 = x1 ^ x0;
    let x0 = x0 ^ x4;
    let x3 = x3 ^ x2;
    let x2 = !x2;
    *state = [x0, x1, x2, x3, x4];
}

fn linear_layer(state: &mut State, rotations: &[(u32, u32); 5]) {
    for (lane, &(a, b)) in state.iter_mut().zip(rotations) {
        *lane ^= lane.rotate_right(a) ^ lane.rotate_right(b);
    }
}

fn permute(state: &mut State, rounds: usize, rotations: &[(u32, u32); 5]) {
    debug_assert!(rounds <= ROUND_CONSTANTS.len());
    let start = ROUND_CONSTANTS.len() - rounds;
    for &rc in &ROUND_CONSTANTS[start..] {
        state[2] ^= rc;
        sbox(state);
        linear_layer(state, rotations);
    }
}

/// Runs `rounds` rounds (6, 8, or 12, per the AEAD variant in use) of the
/// ASCON permutation.
pub fn ascon_permute(state: &mut State, rounds: usize) {
    permute(state, rounds, &ASCON_ROTATIONS);
}

/// Runs `rounds` rounds of the GASCON permutation.
pub fn gascon_permute(state: &mut State, rounds: usize) {
    permute(state, rounds, &GASCON_ROTATIONS);
}
