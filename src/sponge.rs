//! KECCAK Sponge construction with incremental API.
//!
//! Input is absorbed lane by lane. Bytes that do not yet fill a lane are kept
//! in an accumulator until a later call completes it, so a message split at
//! arbitrary points is absorbed exactly like the unsplit message.
use std::mem;

use crate::permute::{LANE_BYTES, LANES, Lane, STATE_BYTES, State};

/// Absorb bytes into the Keccakf[1600] state.
#[derive(Clone, Debug)]
pub(crate) struct AbsorbState {
    state: State,
    rate_words: usize,
    /// Lane of the rate the next complete lane is XORed into.
    word_index: usize,
    /// Number of bytes held in `saved_lane`, always `< LANE_BYTES`.
    byte_index: usize,
    saved_lane: Lane,
}

impl AbsorbState {
    /// Zeroed state reserving `capacity_words` lanes as capacity.
    ///
    /// Callers validate the capacity, see
    /// [`SpongeParams`](crate::SpongeParams).
    pub(crate) fn new(capacity_words: usize) -> Self {
        debug_assert!((1..LANES).contains(&capacity_words));
        Self {
            state: State::new(),
            rate_words: LANES - capacity_words,
            word_index: 0,
            byte_index: 0,
            saved_lane: 0,
        }
    }

    pub(crate) fn absorb(&mut self, mut msg: &[u8]) {
        // first, we complete a lane left partial by a previous call
        if self.byte_index > 0 {
            let partial_lane_len = (LANE_BYTES - self.byte_index).min(msg.len());
            let (first_msg, rest_msg) = msg.split_at(partial_lane_len);
            self.save_bytes(first_msg);
            if self.byte_index < LANE_BYTES {
                // the message did not suffice to fill the lane
                debug_assert!(rest_msg.is_empty());
                return;
            }
            let lane = mem::take(&mut self.saved_lane);
            self.byte_index = 0;
            self.commit_lane(lane);
            msg = rest_msg;
        }

        let (lanes, rest) = msg.as_chunks::<LANE_BYTES>();
        for lane in lanes {
            self.commit_lane(Lane::from_le_bytes(*lane));
        }
        self.save_bytes(rest);
    }

    /// Add domain separator and padding and turn into [`SqueezeState`].
    ///
    /// Note that this performs no permute! Contrary to FIPS 202, we define
    /// the squeezing phase to start with a permutation (instead of ending
    /// the absorption with a permutation).
    pub(crate) fn into_squeeze(mut self, delimited_suffix: u8) -> SqueezeState {
        let suffix = Lane::from(delimited_suffix) << (8 * self.byte_index);
        self.state.xor_lane(self.word_index, self.saved_lane ^ suffix);
        self.state.xor_lane(self.rate_words - 1, 1 << 63);
        SqueezeState::new(self.state, self.rate_words * LANE_BYTES)
    }

    /// Accumulate up to the remaining bytes of a lane in `saved_lane`.
    fn save_bytes(&mut self, bytes: &[u8]) {
        debug_assert!(self.byte_index + bytes.len() <= LANE_BYTES);
        for &byte in bytes {
            self.saved_lane |= Lane::from(byte) << (8 * self.byte_index);
            self.byte_index += 1;
        }
    }

    /// XOR a complete lane into the rate, permuting once the rate is full.
    fn commit_lane(&mut self, lane: Lane) {
        self.state.xor_lane(self.word_index, lane);
        self.word_index += 1;
        if self.word_index == self.rate_words {
            self.state.keccakf_1600_permute();
            self.word_index = 0;
        }
    }
}

/// Squeeze bytes from the Keccakf[1600] state.
#[derive(Clone, Debug)]
pub(crate) struct SqueezeState {
    state: State,
    rate_bytes: usize,
    /// Read position in `block`. Zero means the next read needs a fresh block.
    pos: usize,
    /// Little-endian serialization of `state` after the last permutation.
    block: [u8; STATE_BYTES],
}

impl SqueezeState {
    fn new(state: State, rate_bytes: usize) -> Self {
        Self {
            state,
            rate_bytes,
            pos: 0,
            block: [0; STATE_BYTES],
        }
    }

    pub(crate) fn squeeze(&mut self, mut output: &mut [u8]) {
        while !output.is_empty() {
            if self.pos == 0 {
                self.next_block();
            }
            let partial_block_len = (self.rate_bytes - self.pos).min(output.len());
            let (first_output, rest_output) = output.split_at_mut(partial_block_len);
            first_output.copy_from_slice(&self.block[self.pos..self.pos + partial_block_len]);
            self.pos = (self.pos + partial_block_len) % self.rate_bytes;
            output = rest_output;
        }
    }

    /// The complete serialized state after the first squeezing permutation,
    /// capacity lanes included.
    pub(crate) fn into_block(mut self) -> [u8; STATE_BYTES] {
        debug_assert_eq!(0, self.pos);
        self.next_block();
        self.block
    }

    fn next_block(&mut self) {
        self.state.keccakf_1600_permute();
        self.block = self.state.to_le_bytes();
    }
}
