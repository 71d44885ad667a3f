//! Multi-rate padding with domain separation.
//!
//! The message is followed by the domain-separation suffix bits, then by `pad10*1`:
//! a `1` bit, as many `0` bits as needed, and a final `1` bit in the last bit of the block.
//! Bits are numbered least-significant first within each byte.
//!
//! The suffix and the first `1` of the padding are encoded together as a *delimited suffix* byte:
//! the suffix bits followed by a single `1` bit. For instance:
//!
//! ```text
//! Keccak (no suffix)   -> 0b0000_0001 = 0x01
//! SHA-3  (suffix 01)   -> 0b0000_0110 = 0x06
//! ```
//!
//! Padding is never elided: a message whose length is a multiple of the rate
//! gets a whole block of padding.
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::state::WIDTH;
use crate::errors::{HashError, HashResult};

/// Domain-separation suffix bits, delimited by the first bit of `pad10*1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DomainSuffix(u8);

impl DomainSuffix {
    /// The Keccak submission (version 3): no suffix.
    pub const KECCAK: Self = Self(0x01);
    /// SHA-3 (FIPS 202): suffix `01`.
    pub const SHA3: Self = Self(0x06);

    /// A custom delimited suffix.
    ///
    /// The byte must contain the delimiting `1` bit, hence cannot be zero.
    pub fn new(delimited: u8) -> HashResult<Self> {
        if delimited == 0 {
            return Err(HashError::invalid(
                "the delimited suffix must contain the delimiter bit",
            ));
        }
        Ok(Self(delimited))
    }

    pub fn byte(self) -> u8 {
        self.0
    }
}

/// The last one or two blocks of a padded message.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PaddedTail {
    bytes: [u8; 2 * WIDTH],
    rate: usize,
    blocks: usize,
}

impl PaddedTail {
    /// Number of blocks to absorb, either 1 or 2.
    pub fn block_count(&self) -> usize {
        self.blocks
    }

    /// The blocks to absorb, each exactly `rate` bytes long.
    pub fn blocks(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes[..self.blocks * self.rate].chunks_exact(self.rate)
    }
}

/// Pad the unabsorbed `tail` of a message for a sponge of `rate` bytes.
///
/// `tail` must be strictly shorter than a block.
/// The padding needs two blocks only when the delimiter bit of the suffix
/// falls on the very last bit of the block, leaving no room for the final `1`.
pub fn pad(tail: &[u8], rate: usize, suffix: DomainSuffix) -> PaddedTail {
    assert!(0 < rate && rate <= WIDTH, "rate out of range");
    assert!(tail.len() < rate, "the tail must be shorter than a block");

    let mut padded = PaddedTail {
        bytes: [0u8; 2 * WIDTH],
        rate,
        blocks: 1,
    };
    padded.bytes[..tail.len()].copy_from_slice(tail);
    padded.bytes[tail.len()] ^= suffix.byte();
    if suffix.byte() & 0x80 != 0 && tail.len() == rate - 1 {
        padded.blocks = 2;
    }
    padded.bytes[padded.blocks * rate - 1] ^= 0x80;
    padded
}
