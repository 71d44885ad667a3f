//! Hashers typed for the [`digest`] traits.
//!
//! ```
//! use digest::Digest;
//! use keccak_sponge::digests::Sha3_256;
//!
//! let digest = Sha3_256::digest(b"abc");
//! assert_eq!(
//!     hex::encode(digest),
//!     "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
//! );
//! ```
//!
//! None of them implements [`digest::core_api::BlockSizeUser`]:
//! the sponge rate is not a block size for HMAC.
use digest::consts::{U28, U32, U48, U64};
use digest::{
    ExtendableOutput, FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset,
    Update,
};

use crate::errors::HashResult;
use crate::hash::SqueezeReader;
use crate::hasher::Hasher;
use crate::params::HashParams;

macro_rules! fixed_digest {
    ($name:ident, $params:expr, $size:ty, $doc:literal) => {
        #[doc = $doc]
        #[allow(non_camel_case_types)]
        #[derive(Clone, Debug)]
        pub struct $name(Hasher);

        impl Default for $name {
            fn default() -> Self {
                Self(Hasher::new($params))
            }
        }

        impl HashMarker for $name {}

        impl OutputSizeUser for $name {
            type OutputSize = $size;
        }

        impl Update for $name {
            fn update(&mut self, data: &[u8]) {
                self.0.update(data);
            }
        }

        impl FixedOutput for $name {
            fn finalize_into(self, out: &mut Output<Self>) {
                self.0.finalize_xof().squeeze(&mut out[..]);
            }
        }

        impl Reset for $name {
            fn reset(&mut self) {
                self.0.reset();
            }
        }

        impl FixedOutputReset for $name {
            fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
                self.0.squeeze_into(&mut out[..]);
                self.0.reset();
            }
        }
    };
}

fixed_digest!(Sha3_224, HashParams::SHA3_224, U28, "SHA3-224 (FIPS 202).");
fixed_digest!(Sha3_256, HashParams::SHA3_256, U32, "SHA3-256 (FIPS 202).");
fixed_digest!(Sha3_384, HashParams::SHA3_384, U48, "SHA3-384 (FIPS 202).");
fixed_digest!(Sha3_512, HashParams::SHA3_512, U64, "SHA3-512 (FIPS 202).");
fixed_digest!(Keccak224, HashParams::KECCAK_224, U28, "Keccak-224, with the pre-standard padding.");
fixed_digest!(Keccak256, HashParams::KECCAK_256, U32, "Keccak-256, with the pre-standard padding.");
fixed_digest!(Keccak384, HashParams::KECCAK_384, U48, "Keccak-384, with the pre-standard padding.");
fixed_digest!(Keccak512, HashParams::KECCAK_512, U64, "Keccak-512, with the pre-standard padding.");

/// The legacy Keccak extendable output, with capacity 1024 by default.
///
/// **This is not SHAKE.**
#[derive(Clone, Debug)]
pub struct KeccakXof(Hasher);

impl KeccakXof {
    /// Extendable output with a custom capacity, see [`HashParams::extendable_with_capacity`].
    pub fn with_capacity(capacity_bits: usize) -> HashResult<Self> {
        HashParams::extendable_with_capacity(capacity_bits).map(|params| Self(Hasher::new(params)))
    }
}

impl Default for KeccakXof {
    fn default() -> Self {
        Self(Hasher::extendable())
    }
}

impl HashMarker for KeccakXof {}

impl Update for KeccakXof {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }
}

impl ExtendableOutput for KeccakXof {
    type Reader = SqueezeReader;

    fn finalize_xof(self) -> Self::Reader {
        self.0.finalize_xof()
    }
}

impl Reset for KeccakXof {
    fn reset(&mut self) {
        self.0.reset();
    }
}
