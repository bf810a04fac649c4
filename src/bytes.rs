//! Endian-explicit word access, fixed-width rotation helpers, and buffer XOR.
//!
//! Every permutation, block cipher, and AEAD mode in this crate is built on
//! top of these few primitives. None of them allocate, and none of them
//! branch on secret data: [`ct_eq`] in particular is the one function in this
//! module whose *timing* is part of its contract, not just its result.

/// A fixed-size byte array.
pub trait Bytes:
    'static
    + for<'a> TryFrom<&'a [u8], Error = std::array::TryFromSliceError>
    + AsRef<[u8]>
    + AsMut<[u8]>
    + Clone
    + Copy
    + Sized
    + IntoIterator<Item = u8>
    + std::fmt::Debug
{
}

impl<const N: usize> Bytes for [u8; N] {}

/// Load a little-endian 32-bit word from the first 4 bytes of `buf`.
pub fn load_le32(buf: &[u8]) -> u32 {
    u32::from_le_bytes(buf[..4].try_into().expect("buf must have at least 4 bytes"))
}

/// Store a little-endian 32-bit word into the first 4 bytes of `buf`.
pub fn store_le32(buf: &mut [u8], word: u32) {
    buf[..4].copy_from_slice(&word.to_le_bytes());
}

/// Load a big-endian 32-bit word from the first 4 bytes of `buf`.
pub fn load_be32(buf: &[u8]) -> u32 {
    u32::from_be_bytes(buf[..4].try_into().expect("buf must have at least 4 bytes"))
}

/// Store a big-endian 32-bit word into the first 4 bytes of `buf`.
pub fn store_be32(buf: &mut [u8], word: u32) {
    buf[..4].copy_from_slice(&word.to_be_bytes());
}

/// Load a little-endian 64-bit word from the first 8 bytes of `buf`.
pub fn load_le64(buf: &[u8]) -> u64 {
    u64::from_le_bytes(buf[..8].try_into().expect("buf must have at least 8 bytes"))
}

/// Store a little-endian 64-bit word into the first 8 bytes of `buf`.
pub fn store_le64(buf: &mut [u8], word: u64) {
    buf[..8].copy_from_slice(&word.to_le_bytes());
}

/// Load a big-endian 64-bit word from the first 8 bytes of `buf`.
pub fn load_be64(buf: &[u8]) -> u64 {
    u64::from_be_bytes(buf[..8].try_into().expect("buf must have at least 8 bytes"))
}

/// Store a big-endian 64-bit word into the first 8 bytes of `buf`.
pub fn store_be64(buf: &mut [u8], word: u64) {
    buf[..8].copy_from_slice(&word.to_be_bytes());
}

/// Load a big-endian 24-bit word from the first 3 bytes of `buf`, as used by
/// sLiSCP-light-192's 24-bit sub-blocks.
pub fn load_be24(buf: &[u8]) -> u32 {
    (u32::from(buf[0]) << 16) | (u32::from(buf[1]) << 8) | u32::from(buf[2])
}

/// Store the low 24 bits of `word` as a big-endian 3-byte sequence.
pub fn store_be24(buf: &mut [u8], word: u32) {
    buf[0] = (word >> 16) as u8;
    buf[1] = (word >> 8) as u8;
    buf[2] = word as u8;
}

/// XOR `src` into `dst` byte-wise.
///
/// Only `dst.len().min(src.len())` bytes are touched, so this is safe to use
/// for the final partial block of a sponge-duplex absorption. `dst` and
/// `src` may alias in any fashion, including being the same slice, because
/// every byte is read before it is written.
pub fn xor_into(dst: &mut [u8], src: &[u8]) {
    dst.iter_mut().zip(src).for_each(|(d, s)| *d ^= s);
}

/// Constant-time comparison of two equal-length byte buffers.
///
/// Returns `0` if `a == b`, and a non-zero value otherwise. Every byte pair
/// is compared and folded into the same accumulator regardless of whether an
/// earlier pair already differed, so the number of instructions executed
/// does not depend on where (or whether) `a` and `b` first diverge. This is
/// the primitive every AEAD's tag verification is built on (see
/// [`crate::error`]).
///
/// # Panics
///
/// Panics if `a.len() != b.len()`. Lengths are not secret in any AEAD
/// contract in this crate (they travel on the wire as part of the
/// ciphertext framing), so this is not a side channel.
pub fn ct_eq(a: &[u8], b: &[u8]) -> u8 {
    assert_eq!(a.len(), b.len(), "ct_eq requires equal-length buffers");
    let mut acc = 0u8;
    for (x, y) in a.iter().zip(b) {
        acc |= x ^ y;
    }
    acc
}
