//! Stream ciphers with a built-in authentication accumulator (spec.md
//! §4.D's Grain-128 entry): unlike [`crate::permutation`], these keep
//! state across a whole message and expose an explicit
//! `setup`/`authenticate`/`encrypt`/`compute_tag` lifecycle rather than a
//! single pure round function, because Grain-128's authentication side
//! channel folds in one bit at a time as the keystream is generated.

pub mod grain128;
