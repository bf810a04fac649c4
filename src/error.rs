//! Failure kinds shared by every AEAD in this crate.
//!
//! This mirrors the way `BlockSizeTooSmall` is reported in
//! `cipher::block::modes::ctr`: a small marker struct per failure, with a
//! hand-written [`std::fmt::Display`], and nothing that needs a derive
//! crate. An AEAD decrypt has exactly three ways to fail (see spec §7); none
//! of them are programmer errors, so none of them panic.

use std::fmt;

/// Decryption found that the computed tag did not match the provided tag.
///
/// The plaintext buffer contents are **not defined** when this error is
/// returned; every AEAD in this crate takes care not to let tag-mismatching
/// plaintext reach the caller in the first place, but callers must not rely
/// on any contents of the value that accompanied this error, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMismatch;

impl fmt::Display for TagMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("authentication tag did not match")
    }
}

impl std::error::Error for TagMismatch {}

/// The ciphertext passed to `decrypt` was shorter than `TAG_SIZE`, so it
/// cannot possibly contain both a (possibly empty) payload and a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortCiphertext;

impl fmt::Display for ShortCiphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ciphertext is shorter than the tag size")
    }
}

impl std::error::Error for ShortCiphertext {}

/// The associated data was too long to be length-encoded by the AEAD's
/// framing. Only Grain-128AEAD's DER length prefix imposes this bound
/// (associated data of 2^32 bytes or more).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputTooLong;

impl fmt::Display for InputTooLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("input is too long to be length-encoded by this AEAD")
    }
}

impl std::error::Error for InputTooLong {}

/// The union of every way a `decrypt` call in this crate can fail.
///
/// Individual AEAD modules return the narrower, concrete error type
/// directly (e.g. [`TagMismatch`] alone for an AEAD with no length bound);
/// this enum exists for call sites that want to handle any AEAD uniformly,
/// matching the "descriptor" indirection point spec §9 allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AeadError {
    TagMismatch,
    ShortCiphertext,
    InputTooLong,
}

impl fmt::Display for AeadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AeadError::TagMismatch => TagMismatch.fmt(f),
            AeadError::ShortCiphertext => ShortCiphertext.fmt(f),
            AeadError::InputTooLong => InputTooLong.fmt(f),
        }
    }
}

impl std::error::Error for AeadError {}

impl From<TagMismatch> for AeadError {
    fn from(_: TagMismatch) -> Self {
        AeadError::TagMismatch
    }
}

impl From<ShortCiphertext> for AeadError {
    fn from(_: ShortCiphertext) -> Self {
        AeadError::ShortCiphertext
    }
}

impl From<InputTooLong> for AeadError {
    fn from(_: InputTooLong) -> Self {
        AeadError::InputTooLong
    }
}
