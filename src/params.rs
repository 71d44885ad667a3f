use crate::errors::{HashError, HashResult};
use crate::hash::{DomainSuffix, SpongeParams};

/// The padding convention, which separates hash families sharing the Keccak permutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// SHA-3 as standardized in FIPS 202.
    Sha3,
    /// The Keccak submission (version 3), as used before FIPS 202.
    Keccak,
}

impl Flavor {
    pub fn suffix(self) -> DomainSuffix {
        match self {
            Self::Sha3 => DomainSuffix::SHA3,
            Self::Keccak => DomainSuffix::KECCAK,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Self::Sha3 => "sha3",
            Self::Keccak => "keccak",
        }
    }
}

/// The parameters of a hasher: padding flavor, output size, rate and capacity.
///
/// Fixed-size outputs use a capacity of twice the output size:
///
/// | output | rate | capacity |
/// |--------|------|----------|
/// | 224    | 1152 | 448      |
/// | 256    | 1088 | 512      |
/// | 384    | 832  | 768      |
/// | 512    | 576  | 1024     |
///
/// Extendable output follows the pre-standard Keccak module it replaces:
/// Keccak padding and, by default, a capacity of 1024 bits (rate 576),
/// whatever the output length.
/// **This is not SHAKE**: the output is incompatible with SHAKE128 and SHAKE256.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HashParams {
    flavor: Flavor,
    output_bits: usize,
    sponge: SpongeParams,
}

impl HashParams {
    /// Output size selecting extendable output.
    pub const EXTENDABLE: usize = 0;
    /// Supported fixed output sizes, in bits.
    pub const OUTPUT_SIZES: [usize; 4] = [224, 256, 384, 512];
    /// Default capacity of the extendable-output mode.
    pub const LEGACY_XOF_CAPACITY: usize = 1024;
    /// Number of bytes returned by `digest()` in extendable-output mode.
    pub const XOF_DIGEST_SIZE: usize = 512;

    pub const SHA3_224: Self = Self::fixed(Flavor::Sha3, 224);
    pub const SHA3_256: Self = Self::fixed(Flavor::Sha3, 256);
    pub const SHA3_384: Self = Self::fixed(Flavor::Sha3, 384);
    pub const SHA3_512: Self = Self::fixed(Flavor::Sha3, 512);
    pub const KECCAK_224: Self = Self::fixed(Flavor::Keccak, 224);
    pub const KECCAK_256: Self = Self::fixed(Flavor::Keccak, 256);
    pub const KECCAK_384: Self = Self::fixed(Flavor::Keccak, 384);
    pub const KECCAK_512: Self = Self::fixed(Flavor::Keccak, 512);
    pub const EXTENDABLE_LEGACY: Self = Self {
        flavor: Flavor::Keccak,
        output_bits: Self::EXTENDABLE,
        sponge: SpongeParams::for_output(Self::LEGACY_XOF_CAPACITY / 2),
    };

    const fn fixed(flavor: Flavor, output_bits: usize) -> Self {
        Self {
            flavor,
            output_bits,
            sponge: SpongeParams::for_output(output_bits),
        }
    }

    /// Parameters for `output_bits` ∈ {224, 256, 384, 512},
    /// or [`HashParams::EXTENDABLE`] for extendable output.
    ///
    /// Extendable output exists only with [`Flavor::Keccak`] padding:
    /// asking for it with [`Flavor::Sha3`] is an error rather than a silent fallback.
    pub fn new(flavor: Flavor, output_bits: usize) -> HashResult<Self> {
        match (flavor, output_bits) {
            (Flavor::Keccak, Self::EXTENDABLE) => Ok(Self::EXTENDABLE_LEGACY),
            (Flavor::Sha3, Self::EXTENDABLE) => Err(HashError::invalid(
                "extendable output requires Keccak padding; SHAKE is not provided",
            )),
            (_, 224 | 256 | 384 | 512) => Ok(Self::fixed(flavor, output_bits)),
            _ => Err(HashError::invalid(format!(
                "output size must be one of 0, 224, 256, 384 or 512 bits, got {output_bits}"
            ))),
        }
    }

    /// Extendable output with a caller-chosen capacity.
    ///
    /// The Keccak submission's own default, `Keccak[]`, has a capacity of 576 bits.
    pub fn extendable_with_capacity(capacity_bits: usize) -> HashResult<Self> {
        Ok(Self {
            flavor: Flavor::Keccak,
            output_bits: Self::EXTENDABLE,
            sponge: SpongeParams::from_capacity(capacity_bits)?,
        })
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn sponge(&self) -> SpongeParams {
        self.sponge
    }

    pub fn is_extendable(&self) -> bool {
        self.output_bits == Self::EXTENDABLE
    }

    /// The output size in bits, zero for extendable output.
    pub fn output_bits(&self) -> usize {
        self.output_bits
    }

    /// Number of bytes returned by `digest()`.
    pub fn digest_size(&self) -> usize {
        if self.is_extendable() {
            Self::XOF_DIGEST_SIZE
        } else {
            self.output_bits / 8
        }
    }

    /// A name such as `sha3_256`, `keccak_512`, or `keccak_0` for extendable output.
    pub fn name(&self) -> String {
        format!("{}_{}", self.flavor.prefix(), self.output_bits)
    }

    pub fn rate_bits(&self) -> usize {
        self.sponge.rate_bits()
    }

    pub fn capacity_bits(&self) -> usize {
        self.sponge.capacity_bits()
    }
}
