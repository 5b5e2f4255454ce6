//! Named SHA-3 and SHAKE instances and their sponge parameters.
use std::{fmt, str::FromStr};

use crate::{
    error::{Error, Result},
    permute::{LANE_BYTES, LANES},
};

/// Domain separation bits `01` of SHA-3 followed by the first 1 bit of the
/// pad10*1 padding.
pub const SHA3_SUFFIX: u8 = 0b110;

/// Domain separation bits `1111` of SHAKE followed by the first 1 bit of the
/// pad10*1 padding.
pub const SHAKE_SUFFIX: u8 = 0b11111;

/// The six instances of KECCAK[c] standardized in FIPS 202.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Shake128,
    Shake256,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Sha3_224,
        Variant::Sha3_256,
        Variant::Sha3_384,
        Variant::Sha3_512,
        Variant::Shake128,
        Variant::Shake256,
    ];

    /// Number of 64-bit lanes reserved as capacity.
    pub const fn capacity_words(self) -> usize {
        match self {
            Variant::Sha3_224 => 7,
            Variant::Sha3_256 | Variant::Shake256 => 8,
            Variant::Sha3_384 => 12,
            Variant::Sha3_512 => 16,
            Variant::Shake128 => 4,
        }
    }

    pub const fn rate_words(self) -> usize {
        LANES - self.capacity_words()
    }

    pub const fn rate_bytes(self) -> usize {
        self.rate_words() * LANE_BYTES
    }

    /// Delimited suffix XORed into the state right after the message.
    pub const fn suffix(self) -> u8 {
        if self.is_xof() { SHAKE_SUFFIX } else { SHA3_SUFFIX }
    }

    /// Digest length in bytes, `None` for the extendable-output functions.
    pub const fn output_len(self) -> Option<usize> {
        match self {
            Variant::Sha3_224 => Some(28),
            Variant::Sha3_256 => Some(32),
            Variant::Sha3_384 => Some(48),
            Variant::Sha3_512 => Some(64),
            Variant::Shake128 | Variant::Shake256 => None,
        }
    }

    pub const fn is_xof(self) -> bool {
        matches!(self, Variant::Shake128 | Variant::Shake256)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Sha3_224 => "SHA3-224",
            Variant::Sha3_256 => "SHA3-256",
            Variant::Sha3_384 => "SHA3-384",
            Variant::Sha3_512 => "SHA3-512",
            Variant::Shake128 => "SHAKE128",
            Variant::Shake256 => "SHAKE256",
        }
    }

    pub const fn params(self) -> SpongeParams {
        SpongeParams {
            capacity_words: self.capacity_words(),
            suffix: self.suffix(),
            output_len: self.output_len(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    /// Accepts the FIPS 202 names in any case, with `-`, `_` or nothing
    /// between family and size, e.g. `SHA3-256`, `sha3_256` or `shake128`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let variant = match normalized.as_str() {
            "sha3224" => Variant::Sha3_224,
            "sha3256" => Variant::Sha3_256,
            "sha3384" => Variant::Sha3_384,
            "sha3512" => Variant::Sha3_512,
            "shake128" => Variant::Shake128,
            "shake256" => Variant::Shake256,
            _ => return Err(Error::InvalidInput(format!("unknown variant `{s}`"))),
        };
        Ok(variant)
    }
}

/// Parameters of a KECCAK sponge: capacity, delimited suffix and output
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpongeParams {
    capacity_words: usize,
    suffix: u8,
    output_len: Option<usize>,
}

impl SpongeParams {
    /// Parameters with a directly chosen capacity, for KECCAK instances other
    /// than the six named [`Variant`]s. The output length is chosen by the
    /// caller at finalization.
    ///
    /// `capacity_words` must leave at least one rate lane and reserve at least
    /// one capacity lane. The highest set bit of `suffix` is the first bit of
    /// the padding, and it must lie below bit 7 so it can not coincide with
    /// the last padding bit.
    pub fn custom(capacity_words: usize, suffix: u8) -> Result<Self> {
        if !(1..LANES).contains(&capacity_words) {
            return Err(Error::InvalidInput(format!(
                "capacity of {capacity_words} lanes is outside 1..={}",
                LANES - 1
            )));
        }
        if !(0x01..0x80).contains(&suffix) {
            return Err(Error::InvalidInput(format!(
                "delimited suffix {suffix:#04x} is outside 0x01..=0x7f"
            )));
        }
        Ok(Self {
            capacity_words,
            suffix,
            output_len: None,
        })
    }

    pub const fn capacity_words(&self) -> usize {
        self.capacity_words
    }

    pub const fn rate_words(&self) -> usize {
        LANES - self.capacity_words
    }

    pub const fn rate_bytes(&self) -> usize {
        self.rate_words() * LANE_BYTES
    }

    pub const fn suffix(&self) -> u8 {
        self.suffix
    }

    /// Fixed digest length, `None` if the output length is caller-chosen.
    pub const fn output_len(&self) -> Option<usize> {
        self.output_len
    }

    /// Check a destination buffer length against a fixed digest length.
    pub(crate) fn check_output_len(&self, actual: usize) -> Result<()> {
        match self.output_len {
            Some(expected) if expected != actual => Err(Error::InvalidOutput { expected, actual }),
            _ => Ok(()),
        }
    }
}

impl From<Variant> for SpongeParams {
    fn from(variant: Variant) -> Self {
        variant.params()
    }
}

/// How output beyond the first block is produced by extendable-output
/// instances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SqueezeMode {
    /// FIPS 202 squeezing: after each rate block, permute and continue.
    #[default]
    Iterative,
    /// Serialize the whole 1600-bit state once and read from it. Requests up
    /// to [`STATE_BYTES`](crate::STATE_BYTES) bytes are served and bytes past
    /// the rate come from the capacity lanes. Only useful for compatibility
    /// with engines that behave this way.
    SingleBlock,
}
