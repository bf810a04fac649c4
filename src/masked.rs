//! Masked AEAD: the same sponge-duplex shape as [`crate::aead`], but built
//! over [`crate::masking::MaskedWord`] shares instead of plain words, so the
//! internal permutation state never exists unmasked for the lifetime of a
//! call (spec.md §4.B, §4.G). The key enters the construction the same way
//! the unmasked AEADs re-key their capacity at init and finalization; the
//! difference is every linear step below operates share-wise and every
//! nonlinear step spends fresh randomness through [`crate::masking::MaskedWord::and`].

pub mod gimli;
