use core::mem;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::padding::{pad, DomainSuffix};
use super::state::{LaneState, WIDTH};
use super::Permutation;
use crate::errors::{HashError, HashResult};

/// The rate/capacity split of the 1600-bit state.
///
/// The rate is the number of bits exchanged with the outside world per permutation call;
/// the remaining capacity bits are never read nor written directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpongeParams {
    rate_bits: usize,
}

impl SpongeParams {
    /// Width of the state in bits.
    pub const STATE_BITS: usize = 8 * WIDTH;

    /// Rate and capacity must add up to the state width,
    /// and the rate must be a positive number of whole lanes.
    pub(crate) fn new(rate_bits: usize, capacity_bits: usize) -> HashResult<Self> {
        if rate_bits + capacity_bits != Self::STATE_BITS {
            return Err(HashError::internal(format!(
                "rate ({rate_bits}) and capacity ({capacity_bits}) do not add up to {}",
                Self::STATE_BITS
            )));
        }
        if rate_bits == 0 || rate_bits % 64 != 0 {
            return Err(HashError::internal(format!(
                "rate ({rate_bits}) is not a positive multiple of 64"
            )));
        }
        Ok(Self { rate_bits })
    }

    /// Derive the rate from the requested capacity.
    ///
    /// The capacity must be a multiple of 64 bits in `[64, 1600)`.
    pub fn from_capacity(capacity_bits: usize) -> HashResult<Self> {
        if capacity_bits == 0 || capacity_bits >= Self::STATE_BITS || capacity_bits % 64 != 0 {
            return Err(HashError::invalid(format!(
                "capacity must be a multiple of 64 in [64, {}), got {capacity_bits}",
                Self::STATE_BITS
            )));
        }
        Self::new(Self::STATE_BITS - capacity_bits, capacity_bits)
    }

    /// Parameters for a fixed output size, with capacity twice the output size.
    pub(crate) const fn for_output(output_bits: usize) -> Self {
        Self {
            rate_bits: Self::STATE_BITS - 2 * output_bits,
        }
    }

    pub const fn rate_bits(&self) -> usize {
        self.rate_bits
    }

    pub const fn rate_bytes(&self) -> usize {
        self.rate_bits / 8
    }

    pub const fn capacity_bits(&self) -> usize {
        Self::STATE_BITS - self.rate_bits
    }
}

/// XOR a block of exactly `rate` bytes into the state, then permute it.
pub fn absorb_block<P: Permutation>(state: &mut P, block: &[u8], rate: usize) {
    assert_eq!(block.len(), rate, "absorbed blocks must be rate-sized");
    state.xor_in(block);
    state.permute();
}

/// Squeeze `output.len()` bytes out of a state that has absorbed its padding.
///
/// The state is permuted between blocks, and only if more output is requested.
pub fn squeeze<P: Permutation>(state: &mut P, output: &mut [u8], rate: usize) {
    let mut chunks = output.chunks_mut(rate).peekable();
    while let Some(chunk) = chunks.next() {
        state.extract(0, chunk);
        if chunks.peek().is_some() {
            state.permute();
        }
    }
}

/// A sponge in its absorbing phase.
///
/// Input is buffered until a whole block of `rate` bytes is available,
/// so that the pending buffer never holds a full block between two calls.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sponge<P: Permutation = LaneState> {
    state: P,
    rate: usize,
    pending: [u8; WIDTH],
    pending_len: usize,
}

impl<P: Permutation> Sponge<P> {
    pub fn new(params: SpongeParams) -> Self {
        let rate = params.rate_bytes();
        assert!(0 < rate && rate <= P::WIDTH && rate <= WIDTH);
        Self {
            state: P::default(),
            rate,
            pending: [0u8; WIDTH],
            pending_len: 0,
        }
    }

    /// Rate in bytes.
    pub fn rate(&self) -> usize {
        self.rate
    }

    /// Bytes received but not yet absorbed into the state.
    pub fn pending(&self) -> &[u8] {
        &self.pending[..self.pending_len]
    }

    /// Absorb `input`, permuting once per completed block.
    pub fn absorb(&mut self, mut input: &[u8]) -> &mut Self {
        if self.pending_len > 0 {
            let chunk_len = usize::min(input.len(), self.rate - self.pending_len);
            let (chunk, rest) = input.split_at(chunk_len);
            self.pending[self.pending_len..self.pending_len + chunk_len].copy_from_slice(chunk);
            self.pending_len += chunk_len;
            input = rest;

            if self.pending_len < self.rate {
                return self;
            }
            absorb_block(&mut self.state, &self.pending[..self.rate], self.rate);
            self.pending_len = 0;
        }

        let mut blocks = input.chunks_exact(self.rate);
        for block in &mut blocks {
            absorb_block(&mut self.state, block, self.rate);
        }
        let rest = blocks.remainder();
        self.pending[..rest.len()].copy_from_slice(rest);
        self.pending_len = rest.len();

        debug_assert!(self.pending_len < self.rate);
        self
    }

    /// Pad the pending bytes, absorb the padding and switch to the squeezing phase.
    pub fn finalize(mut self, suffix: DomainSuffix) -> SqueezeReader<P> {
        let padded = pad(self.pending(), self.rate, suffix);
        for block in padded.blocks() {
            absorb_block(&mut self.state, block, self.rate);
        }
        // `self` is wiped on drop, leaving only the reader with the state.
        SqueezeReader::new(mem::take(&mut self.state), self.rate)
    }
}

/// A sponge in its squeezing phase, producing an unbounded output stream.
///
/// Successive calls to [`SqueezeReader::squeeze`] continue the stream:
/// squeezing 3 bytes then 5 bytes yields the same bytes as squeezing 8 at once.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SqueezeReader<P: Permutation = LaneState> {
    state: P,
    rate: usize,
    offset: usize,
}

impl<P: Permutation> SqueezeReader<P> {
    fn new(state: P, rate: usize) -> Self {
        Self {
            state,
            rate,
            offset: 0,
        }
    }

    /// Fill `output` with the next bytes of the stream.
    pub fn squeeze(&mut self, mut output: &mut [u8]) -> &mut Self {
        while !output.is_empty() {
            if self.offset == self.rate {
                self.state.permute();
                self.offset = 0;
            }
            let chunk_len = usize::min(output.len(), self.rate - self.offset);
            let (chunk, rest) = output.split_at_mut(chunk_len);
            self.state.extract(self.offset, chunk);
            self.offset += chunk_len;
            output = rest;
        }
        self
    }

    /// Squeeze the next `len` bytes of the stream into a new vector.
    pub fn squeeze_vec(&mut self, len: usize) -> Vec<u8> {
        let mut output = vec![0u8; len];
        self.squeeze(&mut output);
        output
    }
}

impl<P: Permutation> digest::XofReader for SqueezeReader<P> {
    fn read(&mut self, buffer: &mut [u8]) {
        self.squeeze(buffer);
    }
}

impl<P: Permutation> ::core::fmt::Debug for Sponge<P> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        // Ensure that neither the state nor the pending input is accidentally logged.
        f.debug_struct("Sponge")
            .field("rate", &self.rate)
            .field("pending_len", &self.pending_len)
            .finish_non_exhaustive()
    }
}

impl<P: Permutation> ::core::fmt::Debug for SqueezeReader<P> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_struct("SqueezeReader")
            .field("rate", &self.rate)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, RngCore, SeedableRng};

    /// The same state, permuted by the RustCrypto implementation of Keccak-f[1600].
    #[derive(Clone, Default, Zeroize)]
    struct ReferenceState([u64; 25]);

    impl Permutation for ReferenceState {
        const WIDTH: usize = 200;

        fn xor_in(&mut self, input: &[u8]) {
            for (i, byte) in input.iter().enumerate() {
                self.0[i / 8] ^= (*byte as u64) << (8 * (i % 8));
            }
        }

        fn extract(&self, offset: usize, output: &mut [u8]) {
            for (i, byte) in output.iter_mut().enumerate() {
                let pos = offset + i;
                *byte = self.0[pos / 8].to_le_bytes()[pos % 8];
            }
        }

        fn permute(&mut self) {
            keccak::f1600(&mut self.0);
        }
    }

    const SHA3_256: SpongeParams = SpongeParams::for_output(256);

    #[test]
    fn test_params() {
        for (bits, rate) in [(224, 1152), (256, 1088), (384, 832), (512, 576)] {
            let params = SpongeParams::for_output(bits);
            assert_eq!(params.rate_bits(), rate);
            assert_eq!(params.capacity_bits(), 2 * bits);
            assert_eq!(params, SpongeParams::from_capacity(2 * bits).unwrap());
        }
        assert_eq!(SpongeParams::from_capacity(1024).unwrap().rate_bytes(), 72);
    }

    #[test]
    fn test_invalid_params() {
        for capacity in [0, 100, 1600, 1664] {
            assert!(matches!(
                SpongeParams::from_capacity(capacity),
                Err(HashError::InvalidParameter(_))
            ));
        }
        assert!(matches!(
            SpongeParams::new(1088, 511),
            Err(HashError::InternalError(_))
        ));
        assert!(matches!(
            SpongeParams::new(0, 1600),
            Err(HashError::InternalError(_))
        ));
    }

    /// SHA3-256("abc"), driven by hand through the sponge primitives.
    #[test]
    fn test_absorb_and_squeeze_primitives() {
        let rate = SHA3_256.rate_bytes();
        let mut state = LaneState::default();
        let padded = pad(b"abc", rate, DomainSuffix::SHA3);
        for block in padded.blocks() {
            absorb_block(&mut state, block, rate);
        }
        let mut digest = [0u8; 32];
        squeeze(&mut state, &mut digest, rate);
        assert_eq!(
            hex::encode(digest),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
    }

    #[test]
    #[should_panic]
    fn test_short_block_panics() {
        absorb_block(&mut LaneState::default(), &[0u8; 10], 136);
    }

    /// One-shot squeezing and streaming squeezing agree, across block boundaries.
    #[test]
    fn test_streaming_squeeze() {
        let rate = SHA3_256.rate_bytes();
        let mut sponge = Sponge::<LaneState>::new(SHA3_256);
        sponge.absorb(b"yellow submarine");
        let mut reader = sponge.finalize(DomainSuffix::KECCAK);
        let mut control = reader.clone();

        let mut expected = vec![0u8; 3 * rate + 5];
        let mut state = control.state.clone();
        squeeze(&mut state, &mut expected, rate);
        assert_eq!(control.squeeze_vec(expected.len()), expected);

        let mut streamed = Vec::new();
        for len in [1, 7, rate - 8, rate, 2, rate + 3] {
            streamed.extend(reader.squeeze_vec(len));
        }
        assert_eq!(streamed.len(), expected.len());
        assert_eq!(streamed, expected);
    }

    #[test]
    fn test_squeeze_permutes_lazily() {
        let rate = SHA3_256.rate_bytes();
        let mut reader = Sponge::<LaneState>::new(SHA3_256).finalize(DomainSuffix::SHA3);
        let before = reader.state.clone();
        reader.squeeze(&mut vec![0u8; rate]);
        assert!(reader.state == before, "no permutation for a single block");
        reader.squeeze(&mut [0u8; 1]);
        assert!(reader.state != before);
    }

    #[test]
    fn test_buffering_is_invisible() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let rate = SHA3_256.rate_bytes();
        let mut message = vec![0u8; 5 * rate + 17];
        rng.fill_bytes(&mut message);

        let mut whole = Sponge::<LaneState>::new(SHA3_256);
        whole.absorb(&message);
        assert_eq!(whole.pending(), &message[5 * rate..]);

        let mut pieces = Sponge::<LaneState>::new(SHA3_256);
        let mut rest = &message[..];
        while !rest.is_empty() {
            let (chunk, tail) = rest.split_at(rng.gen_range(0..=rest.len().min(2 * rate)));
            pieces.absorb(chunk);
            assert!(pieces.pending().len() < rate);
            rest = tail;
        }
        assert_eq!(pieces.pending(), whole.pending());
        assert!(pieces.state == whole.state);
    }

    #[test]
    fn test_empty_absorb_is_a_noop() {
        let mut sponge = Sponge::<LaneState>::new(SHA3_256);
        sponge.absorb(b"abc").absorb(&[]);
        assert_eq!(sponge.pending(), b"abc");
        assert!(sponge.state == LaneState::default());
    }

    /// The generic driver gives the same output over both permutations.
    #[test]
    fn test_matches_reference_permutation() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for capacity in [448, 512, 768, 1024, 576] {
            let params = SpongeParams::from_capacity(capacity).unwrap();
            for _ in 0..8 {
                let mut message = vec![0u8; rng.gen_range(0..600)];
                rng.fill_bytes(&mut message);

                let mut ours = Sponge::<LaneState>::new(params);
                let mut reference = Sponge::<ReferenceState>::new(params);
                ours.absorb(&message);
                reference.absorb(&message);
                let ours = ours.finalize(DomainSuffix::SHA3).squeeze_vec(300);
                let reference = reference.finalize(DomainSuffix::SHA3).squeeze_vec(300);
                assert_eq!(ours, reference);
            }
        }
    }

    #[test]
    fn test_debug_hides_pending_input() {
        let mut sponge = Sponge::<LaneState>::new(SHA3_256);
        sponge.absorb(b"very secret");
        let printed = format!("{sponge:?}");
        assert!(printed.contains("pending_len: 11"));
        assert!(!printed.contains("118, 101, 114, 121"));
    }
}
