//! OS entropy sourcing, std-only (spec.md §4.C's priority list collapsed to
//! what's reachable without an external `getrandom` dependency, per
//! SPEC_FULL.md §1): read `/dev/urandom` where present, else fall back to a
//! coarse clock-derived mix. This is used only to seed and periodically
//! reseed [`super::ChaChaDrbg`], never as the masking stream directly.

use super::Entropy;
use std::fs::File;
use std::io::Read as _;
use std::time::{SystemTime, UNIX_EPOCH};

/// Reads from `/dev/urandom` when available, falling back to a coarse
/// clock-derived mix when it is not (e.g. non-Unix targets, or a sandboxed
/// environment with no `/dev` node).
#[derive(Default)]
pub struct SystemEntropy;

impl Entropy for SystemEntropy {
    fn fill(&mut self, buf: &mut [u8]) {
        if fill_from_urandom(buf) {
            return;
        }
        fill_from_clock(buf);
    }
}

#[cfg(unix)]
fn fill_from_urandom(buf: &mut [u8]) -> bool {
    match File::open("/dev/urandom") {
        Ok(mut file) => file.read_exact(buf).is_ok(),
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn fill_from_urandom(_buf: &mut [u8]) -> bool {
    false
}

/// Last-resort entropy: not uniformly random, and explicitly documented as
/// such (spec.md §4.C requires this tier be marked insecure). It mixes the
/// current time's nanosecond component with a simple counter-stepped
/// splitmix-style round so repeated calls in the same process don't return
/// identical bytes even when the clock hasn't visibly advanced.
fn fill_from_clock(buf: &mut [u8]) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let mut state = nanos ^ 0x9E37_79B9_7F4A_7C15;
    for chunk in buf.chunks_mut(8) {
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        let bytes = z.to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
}
