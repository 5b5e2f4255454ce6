//! KECCAK-f[1600] permutation.
//!
//! Theta and chi follow the (x, y) indexed formulation of FIPS 202, while rho
//! and pi are fused into a single walk over the lanes, as done by the
//! [readable and compact] implementation of the Keccak Team.
//!
//! [readable and compact]: https://github.com/XKCP/XKCP/blob/716f007dd73ef28d357b8162173646be574ad1b7/Standalone/CompactFIPS202/C/Keccak-readable-and-compact.c
#![allow(non_snake_case)]
use std::ops::{Index, IndexMut};

// NOTE: References to Sections, Algorithms, Tables, etc. refer to the
// FIPS 202 standard (https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf)
// if not otherwise specified.

/// Number of rounds of KECCAK-f[1600].
const ROUNDS: usize = 24;

/// Number of [`Lane`]s in the [`State`].
pub(crate) const LANES: usize = 25;

/// Number of bytes in a [`Lane`].
pub(crate) const LANE_BYTES: usize = 8;

/// Number of bytes in the serialized [`State`].
pub const STATE_BYTES: usize = LANES * LANE_BYTES;

/// Lane of the [`State`] array containing w = 64 bits.
pub(crate) type Lane = u64;

/// State array A of KECCAK-f[1600]. Contains 1600 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct State([Lane; LANES]);

/// Compute a [`Lane`] index in [`State`].
#[inline(always)]
fn idx(x: usize, y: usize) -> usize {
    // % ops are optimized out
    (x % 5) + 5 * (y % 5)
}

impl Index<(usize, usize)> for State {
    type Output = Lane;

    #[inline(always)]
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.0[idx(x, y)]
    }
}

impl IndexMut<(usize, usize)> for State {
    #[inline(always)]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        &mut self.0[idx(x, y)]
    }
}

impl State {
    pub(crate) fn new() -> Self {
        Self([0; LANES])
    }

    /// XOR `lane` into the lane with linear index `i` (`x + 5 * y`).
    #[inline(always)]
    pub(crate) fn xor_lane(&mut self, i: usize, lane: Lane) {
        self.0[i] ^= lane;
    }

    /// Serialize all lanes, each in little-endian byte order.
    pub(crate) fn to_le_bytes(&self) -> [u8; STATE_BYTES] {
        let mut bytes = [0; STATE_BYTES];
        for (chunk, lane) in bytes.chunks_exact_mut(LANE_BYTES).zip(self.0) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
        bytes
    }

    /// 3.3 Algorithm 7: KECCAK-p[b, nr](S)
    ///
    /// Not the generic algorithm, but specialized to `b = 1600` and `nr = 24`.
    /// See Section 3.4 of FIPS 202.
    pub(crate) fn keccakf_1600_permute(&mut self) {
        for round in 0..ROUNDS {
            theta(self);
            rho_pi(self);
            chi(self);
            iota(self, round);
        }
    }
}

/// 3.2.1 Algorithm 1: θ(A)
fn theta(A: &mut State) {
    // We have 5 * 64 columns, whose parity bits we can store in 5 lanes
    let mut C: [Lane; 5] = Default::default();
    for (x, Cx) in C.iter_mut().enumerate() {
        *Cx = A[(x, 0)] ^ A[(x, 1)] ^ A[(x, 2)] ^ A[(x, 3)] ^ A[(x, 4)];
    }

    for x in 0..5 {
        // (x + 4) % 5 is equivalent to (x - 1) % 5 in FIPS 202
        let D = C[(x + 4) % 5] ^ C[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            A[(x, y)] ^= D;
        }
    }
}

/// Rotation offsets of [`rho_pi`], in the order in which the lanes are
/// visited. Same values as Table 2, reordered along the π walk.
const KECCAK_RHO_OFFSETS: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Destination lane (linear index) of each step of the π walk, starting from
/// lane (1, 0).
const KECCAK_PI_LANES: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// 3.2.2 Algorithm 2: ρ(A) and 3.2.3 Algorithm 3: π(A), fused.
///
/// π is a single cycle over the 24 lanes other than (0, 0), which in turn is
/// not rotated by ρ. Walking that cycle lets us move and rotate every lane
/// carrying only one temporary.
fn rho_pi(A: &mut State) {
    let mut current = A.0[1];
    for (&lane, &offset) in KECCAK_PI_LANES.iter().zip(&KECCAK_RHO_OFFSETS) {
        let next = A.0[lane];
        A.0[lane] = current.rotate_left(offset);
        current = next;
    }
}

/// 3.2.4 Algorithm 4: χ(A)
///
/// Quote from 3.2.4:
/// > The effect of χ is to XOR each bit with a non-linear function of two other
/// > bits in its row
fn chi(A: &mut State) {
    let mut C: [Lane; 5] = Default::default();

    for y in 0..5 {
        for (x, Cx) in C.iter_mut().enumerate() {
            *Cx = A[(x, y)] ^ (!A[(x + 1, y)] & A[(x + 2, y)]);
        }
        for (x, Cx) in C.into_iter().enumerate() {
            A[(x, y)] = Cx;
        }
    }
}

/// Round-constants applied to the (0, 0) lane in the [`iota`] step.
/// Table taken from:
/// https://github.com/XKCP/XKCP/blob/716f007dd73ef28d357b8162173646be574ad1b7/lib/low/KeccakP-1600/ref-64bits/KeccakP-1600-reference.c#L109-L135
const KECCAK_ROUND_CONSTANTS: [Lane; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// 3.2.5 Algorithm 6: ι(A, ir)
fn iota(A: &mut State, round: usize) {
    A[(0, 0)] ^= KECCAK_ROUND_CONSTANTS[round];
}
