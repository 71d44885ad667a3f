//! The Keccak-f\[1600\] permutation.
//!
//! Each of the 24 rounds applies, in order:
//! θ (column parity diffusion), ρ (lane rotations), π (lane transposition),
//! χ (the only non-linear step, along rows) and ι (round constant into lane `(0, 0)`).
//!
//! Lanes are indexed `x + 5 * y`, as in [`LaneState`].
use zeroize::Zeroize;

use super::state::{LaneState, LANES, WIDTH};
use super::Permutation;

/// Number of rounds of Keccak-f\[1600\].
pub const ROUNDS: usize = 24;

/// Round constants, XORed into lane `(0, 0)` by ι.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rotation offsets of ρ, indexed `x + 5 * y`.
pub const RHO_OFFSETS: [u32; LANES] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14,
];

/// Apply Keccak-f\[1600\] to `lanes` in place.
pub fn keccak_f1600(lanes: &mut [u64; LANES]) {
    let mut parity = [0u64; 5];
    let mut scratch = [0u64; LANES];
    for rc in ROUND_CONSTANTS {
        round(lanes, &mut parity, &mut scratch, rc);
    }
    // scratch holds a rotated copy of the last intermediate state.
    parity.zeroize();
    scratch.zeroize();
}

#[inline(always)]
fn round(a: &mut [u64; LANES], c: &mut [u64; 5], b: &mut [u64; LANES], rc: u64) {
    // θ
    for x in 0..5 {
        c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            a[x + 5 * y] ^= d;
        }
    }

    // ρ and π: the lane at (x, y) is rotated and moved to (y, 2x + 3y).
    for y in 0..5 {
        for x in 0..5 {
            b[y + 5 * ((2 * x + 3 * y) % 5)] = a[x + 5 * y].rotate_left(RHO_OFFSETS[x + 5 * y]);
        }
    }

    // χ
    for y in 0..5 {
        for x in 0..5 {
            a[x + 5 * y] = b[x + 5 * y] ^ (!b[(x + 1) % 5 + 5 * y] & b[(x + 2) % 5 + 5 * y]);
        }
    }

    // ι
    a[0] ^= rc;
}

impl Permutation for LaneState {
    const WIDTH: usize = WIDTH;

    fn xor_in(&mut self, input: &[u8]) {
        self.xor_bytes(input);
    }

    fn extract(&self, offset: usize, output: &mut [u8]) {
        self.extract_bytes(offset, output);
    }

    fn permute(&mut self) {
        keccak_f1600(self.lanes_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    /// Keccak-f[1600] applied once to the all-zero state.
    const ZERO_ONCE: [u64; LANES] = [
        0xf1258f7940e1dde7,
        0x84d5ccf933c0478a,
        0xd598261ea65aa9ee,
        0xbd1547306f80494d,
        0x8b284e056253d057,
        0xff97a42d7f8e6fd4,
        0x90fee5a0a44647c4,
        0x8c5bda0cd6192e76,
        0xad30a6f71b19059c,
        0x30935ab7d08ffc64,
        0xeb5aa93f2317d635,
        0xa9a6e6260d712103,
        0x81a57c16dbcf555f,
        0x43b831cd0347c826,
        0x01f22f1a11a5569f,
        0x05e5635a21d9ae61,
        0x64befef28cc970f2,
        0x613670957bc46611,
        0xb87c5a554fd00ecb,
        0x8c3ee88a1ccf32c8,
        0x940c7922ae3a2614,
        0x1841f924a2c509e4,
        0x16f53526e70465c2,
        0x75f644e97f30a13b,
        0xeaf1ff7b5ceca249,
    ];

    /// Keccak-f[1600] applied twice to the all-zero state.
    const ZERO_TWICE: [u64; LANES] = [
        0x2d5c954df96ecb3c,
        0x6a332cd07057b56d,
        0x093d8d1270d76b6c,
        0x8a20d9b25569d094,
        0x4f9c4f99e5e7f156,
        0xf957b9a2da65fb38,
        0x85773dae1275af0d,
        0xfaf4f247c3d810f7,
        0x1f1b9ee6f79a8759,
        0xe4fecc0fee98b425,
        0x68ce61b6b9ce68a1,
        0xdeea66c4ba8f974f,
        0x33c43d836eafb1f5,
        0xe00654042719dbd9,
        0x7cf8a9f009831265,
        0xfd5449a6bf174743,
        0x97ddad33d8994b40,
        0x48ead5fc5d0be774,
        0xe3b8c8ee55b7b03c,
        0x91a0226e649e42e9,
        0x900e3129e7badd7b,
        0x202a9ec5faa3cce8,
        0x5b3402464e1c3db6,
        0x609f4e62a44c1059,
        0x20d06cd26a8fbf5c,
    ];

    #[test]
    fn test_zero_state_known_answers() {
        let mut lanes = [0u64; LANES];
        keccak_f1600(&mut lanes);
        assert_eq!(lanes, ZERO_ONCE);
        keccak_f1600(&mut lanes);
        assert_eq!(lanes, ZERO_TWICE);
    }

    /// The round constants are the output of the LFSR x^8 + x^6 + x^5 + x^4 + 1,
    /// with bit `j` of round `i` placed at position `2^j - 1`.
    #[test]
    fn test_round_constants_from_lfsr() {
        let mut lfsr = 1u8;
        let mut next_bit = || {
            let bit = lfsr & 1;
            lfsr = if lfsr & 0x80 != 0 {
                (lfsr << 1) ^ 0x71
            } else {
                lfsr << 1
            };
            bit as u64
        };

        for expected in ROUND_CONSTANTS {
            let mut rc = 0u64;
            for j in 0..7 {
                rc |= next_bit() << ((1 << j) - 1);
            }
            assert_eq!(rc, expected);
        }
    }

    /// Walking (x, y) -> (y, 2x + 3y) from (1, 0),
    /// the t-th lane visited is rotated by (t + 1)(t + 2) / 2.
    #[test]
    fn test_rotation_offsets_from_walk() {
        let mut expected = [0u32; LANES];
        let (mut x, mut y) = (1, 0);
        for t in 0..24 {
            expected[x + 5 * y] = (((t + 1) * (t + 2) / 2) % 64) as u32;
            (x, y) = (y, (2 * x + 3 * y) % 5);
        }
        assert_eq!(RHO_OFFSETS, expected);
    }

    #[test]
    fn test_matches_reference_permutation() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x6b65_6363_616b);
        for _ in 0..64 {
            let mut ours: [u64; LANES] = rng.gen();
            let mut reference = ours;
            keccak_f1600(&mut ours);
            keccak::f1600(&mut reference);
            assert_eq!(ours, reference);
        }
    }

    #[test]
    fn test_permute_through_trait() {
        let mut state = LaneState::default();
        state.permute();
        assert_eq!(state.lanes(), &ZERO_ONCE);

        let mut first = [0u8; 8];
        state.extract(0, &mut first);
        assert_eq!(u64::from_le_bytes(first), ZERO_ONCE[0]);
    }
}
