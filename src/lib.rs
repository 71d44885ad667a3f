//!
//! The Keccak-f\[1600\] sponge, with SHA-3, legacy Keccak digests and extendable output.
//!
//! # Overview
//!
//! The crate provides incremental hashing contexts ([`Hasher`]) for:
//!
//! - SHA-3 as standardized in FIPS 202, with outputs of 224, 256, 384 or 512 bits;
//! - the Keccak submission that preceded it (different padding, same permutation), with the same output sizes;
//! - a legacy extendable-output mode, producing outputs of any length.
//!
//! ```
//! use keccak_sponge::Hasher;
//!
//! let mut hasher = Hasher::sha3(256).unwrap();
//! hasher.update(b"a").update(b"bc");
//! assert_eq!(hasher.digest(), keccak_sponge::sha3_256(b"abc"));
//! assert_eq!(hasher.name(), "sha3_256");
//! assert_eq!(hasher.digest_size(), 32);
//! ```
//!
//! Digests are computed on a copy of the context, which stays open for further input.
//! Use [`Hasher::copy`] to fork a context:
//!
//! ```
//! use keccak_sponge::Hasher;
//!
//! let mut prefix = Hasher::keccak(512).unwrap();
//! prefix.update("common prefix, ");
//! let mut left = prefix.copy();
//! let mut right = prefix.copy();
//! left.update("left");
//! right.update("right");
//! assert_ne!(left.digest(), right.digest());
//! ```
//!
//! # Extendable output
//!
//! The extendable-output mode uses the Keccak padding and a capacity of 1024 bits (rate 576),
//! whatever the output length. **It is not SHAKE128 nor SHAKE256**, and it is incompatible with both.
//! Squeezing is prefix-consistent:
//!
//! ```
//! use keccak_sponge::Hasher;
//!
//! let hasher = Hasher::new_with(keccak_sponge::HashParams::EXTENDABLE_LEGACY, "abc");
//! let long = hasher.squeeze(128);
//! assert_eq!(&long[..32], &hasher.squeeze(32)[..]);
//!
//! let mut reader = hasher.finalize_xof();
//! assert_eq!(reader.squeeze_vec(100), &long[..100]);
//! assert_eq!(reader.squeeze_vec(28), &long[100..]);
//! ```
//!
//! # Integration
//!
//! The [`digests`] module wraps the hashers into the [`digest`] traits.
//! No block size is exposed: the sponge rate is advisory and must not be used for HMAC.
//!
//! The lower layers (lane state, permutation, padding and sponge) are in [`hash`].
//! State and buffered input are wiped with [`zeroize`] when dropped.

/// Hashers implementing the [`digest`] traits.
pub mod digests;
/// Error types.
mod errors;
/// The Keccak sponge, bottom-up.
pub mod hash;
/// The incremental hashing context.
mod hasher;
/// Hash variants and sponge parameters.
mod params;

pub use errors::{HashError, HashResult};
pub use hash::{DomainSuffix, SqueezeReader};
pub use hasher::{
    keccak_224, keccak_256, keccak_384, keccak_512, sha3_224, sha3_256, sha3_384, sha3_512, Hasher,
};
pub use params::{Flavor, HashParams};
