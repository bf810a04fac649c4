//! Literate implementations of NIST Lightweight Cryptography finalists:
//! sponge/duplex permutations, keyed block and stream ciphers built from
//! them, the AEAD constructions that wrap those primitives, and a masked
//! variant of one of them for side-channel resistance.
//!
//! The module layout mirrors the layering spec.md §2 describes:
//! [`bytes`] and [`error`] are the shared foundation every other module is
//! built on; [`permutation`], [`cipher`], and [`stream`] are the keyless or
//! keyed primitives themselves; [`aead`] wraps those primitives into
//! authenticated encryption; [`masking`] and [`masked`] add d-share Boolean
//! masking on top of one of them; [`random`] supplies the CSPRNG the masking
//! layer needs.


pub mod aead;
pub mod bytes;
pub mod cipher;
pub mod error;
pub mod masked;
pub mod masking;
pub mod permutation;
pub mod random;
pub mod stream;

pub use {
    bytes::Bytes,
    cipher::{BlockCipher, BlockDecrypt, BlockEncrypt, Clyde128, Pyjamask128, Speck64_128},
    error::{AeadError, InputTooLong, ShortCiphertext, TagMismatch},
    masking::MaskedWord,
    random::{Csprng, Entropy, MaskingRng},
};
