//! Stateless permutation cores (spec.md §4.D).
//!
//! Every permutation here is a pure function over a fixed-size state array
//! plus a round count — there is no key, no schedule, and nothing stateful
//! to carry between calls, matching spec.md's "Each permutation is a pure
//! function over its state plus a round range." These are the building
//! blocks [`crate::aead`] and [`crate::masked`] wrap with sponge/duplex
//! framing; used alone they have no authentication or secrecy properties.

pub mod ascon;
pub mod gimli;
pub mod sliscp_light;
pub mod tinyjambu;
pub mod xoodoo;
