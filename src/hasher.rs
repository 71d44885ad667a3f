use core::mem;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{HashError, HashResult};
use crate::hash::{Sponge, SqueezeReader};
use crate::params::{Flavor, HashParams};

/// An incremental hashing context.
///
/// Input is fed with [`Hasher::update`], in chunks of any size.
/// [`Hasher::digest`] and [`Hasher::squeeze`] work on a copy of the context:
/// they can be called any number of times, interleaved with further updates,
/// and the original context stays open.
///
/// ```
/// use keccak_sponge::Hasher;
///
/// let mut hasher = Hasher::sha3(256).unwrap();
/// hasher.update("ab");
/// let partial = hasher.hexdigest();
/// hasher.update("c");
/// assert_ne!(partial, hasher.hexdigest());
/// assert_eq!(
///     hasher.hexdigest(),
///     "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
/// );
/// ```
///
/// The permutation state and the buffered input are wiped when the context is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Hasher {
    #[zeroize(skip)]
    params: HashParams,
    sponge: Sponge,
}

impl Hasher {
    pub fn new(params: HashParams) -> Self {
        log::trace!(
            "new {} context (rate: {}, capacity: {})",
            params.name(),
            params.rate_bits(),
            params.capacity_bits()
        );
        Self {
            params,
            sponge: Sponge::new(params.sponge()),
        }
    }

    /// A new context that has already absorbed `data`.
    pub fn new_with(params: HashParams, data: impl AsRef<[u8]>) -> Self {
        let mut hasher = Self::new(params);
        hasher.update(data);
        hasher
    }

    /// SHA-3 (FIPS 202) with an output of `output_bits` ∈ {224, 256, 384, 512}.
    pub fn sha3(output_bits: usize) -> HashResult<Self> {
        HashParams::new(Flavor::Sha3, output_bits).map(Self::new)
    }

    /// Keccak with an output of `output_bits` ∈ {224, 256, 384, 512},
    /// or [`HashParams::EXTENDABLE`] for extendable output.
    pub fn keccak(output_bits: usize) -> HashResult<Self> {
        HashParams::new(Flavor::Keccak, output_bits).map(Self::new)
    }

    /// The legacy Keccak extendable-output mode, with capacity 1024.
    ///
    /// **This is not SHAKE.**
    pub fn extendable() -> Self {
        Self::new(HashParams::EXTENDABLE_LEGACY)
    }

    pub fn params(&self) -> &HashParams {
        &self.params
    }

    pub fn name(&self) -> String {
        self.params.name()
    }

    /// Length in bytes of [`Hasher::digest`].
    pub fn digest_size(&self) -> usize {
        self.params.digest_size()
    }

    /// The sponge rate.
    ///
    /// Advisory only: it is not a block size suitable for HMAC.
    pub fn rate_bits(&self) -> usize {
        self.params.rate_bits()
    }

    pub fn capacity_bits(&self) -> usize {
        self.params.capacity_bits()
    }

    /// Absorb `data`. Empty input is a no-op.
    pub fn update(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        self.sponge.absorb(data.as_ref());
        self
    }

    /// An independent context with the same parameters, state and buffered input.
    pub fn copy(&self) -> Self {
        log::trace!("copy {} context", self.params.name());
        self.clone()
    }

    /// The digest of everything absorbed so far, [`Hasher::digest_size`] bytes long.
    pub fn digest(&self) -> Vec<u8> {
        self.squeeze(self.digest_size())
    }

    /// Write the digest into `output`, which must be exactly [`Hasher::digest_size`] bytes long.
    pub fn digest_into(&self, output: &mut [u8]) -> HashResult<()> {
        if output.len() != self.digest_size() {
            return Err(HashError::invalid(format!(
                "{} produces {} bytes, the output buffer holds {}",
                self.params.name(),
                self.digest_size(),
                output.len()
            )));
        }
        self.squeeze_into(output);
        Ok(())
    }

    /// The digest as lowercase hexadecimal.
    pub fn hexdigest(&self) -> String {
        hex::encode(self.digest())
    }

    /// The first `len` bytes of the sponge output.
    ///
    /// On fixed-size contexts, the first [`Hasher::digest_size`] bytes are the digest.
    pub fn squeeze(&self, len: usize) -> Vec<u8> {
        let mut output = vec![0u8; len];
        self.squeeze_into(&mut output);
        output
    }

    /// Fill `output` with the first `output.len()` bytes of the sponge output.
    pub fn squeeze_into(&self, output: &mut [u8]) {
        self.finalized().squeeze(output);
    }

    pub fn squeeze_hex(&self, len: usize) -> String {
        hex::encode(self.squeeze(len))
    }

    /// Finish absorbing and return the output stream.
    ///
    /// Unlike [`Hasher::squeeze`], successive reads continue where the previous one stopped.
    pub fn finalize_xof(mut self) -> SqueezeReader {
        let sponge = mem::replace(&mut self.sponge, Sponge::new(self.params.sponge()));
        log::trace!("finalize {} context", self.params.name());
        sponge.finalize(self.params.flavor().suffix())
    }

    /// Forget all input, as if the context had just been created.
    pub fn reset(&mut self) {
        // the old sponge is wiped on drop.
        self.sponge = Sponge::new(self.params.sponge());
    }

    fn finalized(&self) -> SqueezeReader {
        self.sponge.clone().finalize(self.params.flavor().suffix())
    }
}

impl ::core::fmt::Debug for Hasher {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_struct("Hasher")
            .field("name", &self.params.name())
            .field("sponge", &self.sponge)
            .finish()
    }
}

fn oneshot<const N: usize>(params: HashParams, data: &[u8]) -> [u8; N] {
    debug_assert_eq!(N, params.digest_size());
    let mut output = [0u8; N];
    Hasher::new_with(params, data).finalize_xof().squeeze(&mut output);
    output
}

macro_rules! oneshot_fn {
    ($name:ident, $params:expr, $len:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name(data: impl AsRef<[u8]>) -> [u8; $len] {
            oneshot($params, data.as_ref())
        }
    };
}

oneshot_fn!(sha3_224, HashParams::SHA3_224, 28, "SHA3-224 of `data`.");
oneshot_fn!(sha3_256, HashParams::SHA3_256, 32, "SHA3-256 of `data`.");
oneshot_fn!(sha3_384, HashParams::SHA3_384, 48, "SHA3-384 of `data`.");
oneshot_fn!(sha3_512, HashParams::SHA3_512, 64, "SHA3-512 of `data`.");
oneshot_fn!(keccak_224, HashParams::KECCAK_224, 28, "Keccak-224 of `data`.");
oneshot_fn!(keccak_256, HashParams::KECCAK_256, 32, "Keccak-256 of `data`.");
oneshot_fn!(keccak_384, HashParams::KECCAK_384, 48, "Keccak-384 of `data`.");
oneshot_fn!(keccak_512, HashParams::KECCAK_512, 64, "Keccak-512 of `data`.");
