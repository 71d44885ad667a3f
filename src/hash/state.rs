use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of lanes in the state.
pub const LANES: usize = 25;
/// Width of the state in bytes.
pub const WIDTH: usize = LANES * 8;

/// The 1600-bit Keccak state.
///
/// Lanes are 64-bit words indexed by `(x, y)` with `x, y ∈ [0, 5)`,
/// stored at position `x + 5 * y`.
/// Viewed as bytes, lane `i` covers bytes `8 * i .. 8 * i + 8` in little-endian order.
/// The conversion is explicit, so the byte view is the same on every platform.
///
/// The state is wiped when dropped.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct LaneState {
    lanes: [u64; LANES],
}

impl LaneState {
    /// Build a state from raw lanes.
    pub fn from_lanes(lanes: [u64; LANES]) -> Self {
        Self { lanes }
    }

    /// The lane at column `x` and row `y`.
    #[inline]
    pub fn lane(&self, x: usize, y: usize) -> u64 {
        assert!(x < 5 && y < 5);
        self.lanes[x + 5 * y]
    }

    pub fn lanes(&self) -> &[u64; LANES] {
        &self.lanes
    }

    pub(crate) fn lanes_mut(&mut self) -> &mut [u64; LANES] {
        &mut self.lanes
    }

    /// XOR `input` into the leading bytes of the state.
    ///
    /// A trailing chunk shorter than a lane is XORed into the low-order bytes of its lane.
    pub fn xor_bytes(&mut self, input: &[u8]) {
        assert!(input.len() <= WIDTH, "input exceeds the state width");
        for (lane, chunk) in self.lanes.iter_mut().zip(input.chunks(8)) {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            *lane ^= u64::from_le_bytes(word);
        }
    }

    /// Write the bytes `offset .. offset + output.len()` of the state into `output`.
    pub fn extract_bytes(&self, offset: usize, output: &mut [u8]) {
        assert!(offset + output.len() <= WIDTH, "read past the state width");
        for (pos, byte) in (offset..).zip(output.iter_mut()) {
            *byte = (self.lanes[pos / 8] >> (8 * (pos % 8))) as u8;
        }
    }
}

impl ::core::fmt::Debug for LaneState {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        // the state is secret material, never print it.
        f.write_str("LaneState { .. }")
    }
}
