//! AEAD modes (spec.md §4.F): one sponge/duplex state machine per
//! permutation, all built from the same generic skeleton spec.md §4.F
//! describes in prose — load key/nonce, absorb associated data with
//! padding, encrypt/decrypt the payload with padding, finalize into a tag
//! — and all sharing the control flow spec.md §2 gives for every AEAD
//! call: *init → absorb(AD) → encrypt-or-decrypt → finalize → emit or
//! verify tag*.
//!
//! Every module exposes the same free-function shape rather than a shared
//! trait (`encrypt`/`decrypt` plus `KEY_SIZE`/`NONCE_SIZE`/`TAG_SIZE`
//! constants, spec.md §6): the per-algorithm state layouts are different
//! enough (a 40-byte Ascon state vs. a 48-byte Xoodoo state vs. a 16-byte
//! TinyJAMBU state) that a shared trait would either erase those
//! differences behind associated constants no call site benefits from, or
//! need the function-pointer "descriptor" indirection spec.md §9 reserves
//! for an *external* registry, not the core library.
//!
//! `encrypt` returns `ciphertext ++ tag` as a single `Vec<u8>`, and
//! `decrypt` takes that same concatenation back, matching spec.md §6's
//! wire contract; this is the one place this crate allocates, mirroring
//! the teacher's `Cipher` trait (`Ciphertext<Vec<u8>>`) rather than
//! spec.md §5's "no heap allocation" aside, which describes the reference
//! C's caller-supplied-buffer convention — not a constraint spec.md §8's
//! testable properties depend on. See DESIGN.md.

pub mod ascon;
pub mod gimli;
pub mod grain128;
pub mod spix;
pub mod tinyjambu;
pub mod xoodoo_duplex;
