//! This module implements the Keccak sponge.
//! The hashers of this crate are built by stacking its pieces bottom-up:
//!
//! - [`state::LaneState`] is the 1600-bit state, 25 lanes of 64 bits packed and unpacked in little-endian order;
//! - [`keccak`] applies the Keccak-f\[1600\] permutation to it;
//! - [`padding`] computes the domain-separated multi-rate padding (`pad10*1`) of the last block;
//! - [`sponge`] absorbs rate-sized blocks and squeezes an output stream.
//!
//! The sponge is generic over the [`Permutation`] trait, but this crate ships a single implementation of it.

/// The Keccak-f\[1600\] permutation.
pub mod keccak;
/// Multi-rate padding with domain separation.
pub mod padding;
/// Absorb and squeeze phases.
pub mod sponge;
/// The lane state.
pub mod state;

pub use padding::DomainSuffix;
pub use sponge::{Sponge, SpongeParams, SqueezeReader};
pub use state::LaneState;

use zeroize::Zeroize;

/// The state of a cryptographic sponge, together with its permutation.
///
/// For implementors:
///
/// - The [`std::default::Default`] implementation *MUST* initialize the state to zero.
/// - Bytes are exchanged with the *first* `rate` bytes of the state; the sponge never reads
///   nor writes the remaining capacity bytes.
/// - [`Permutation::xor_in`] and [`Permutation::extract`] address the state as a
///   sequence of [`Permutation::WIDTH`] bytes, independently of the platform's endianness.
///
/// **HAZARD**: Don't implement this trait unless you know what you are doing.
pub trait Permutation: Zeroize + Default + Clone {
    /// Width of the state in bytes.
    const WIDTH: usize;

    /// XOR `input` into the leading `input.len()` bytes of the state.
    fn xor_in(&mut self, input: &[u8]);

    /// Copy `output.len()` bytes of the state, starting at `offset`, into `output`.
    fn extract(&self, offset: usize, output: &mut [u8]);

    /// Permute the state.
    fn permute(&mut self);
}
