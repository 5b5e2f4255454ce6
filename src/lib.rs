//! SHA-3 Hash Functions and Extendable-Output Functions
//!
//! This crate provides portable, pure Rust implementations of the SHA-3
//! hashing functions and the SHAKE extendable-output functions standardized in
//! [FIPS 202], built on one incremental KECCAK sponge.
//!
//! Three layers of API are offered:
//! - one-shot functions such as [`sha3_256`] and [`shake128`] for messages
//!   that are completely in memory,
//! - the typed incremental [`Hasher`] and [`Shake`] (e.g. [`Sha3_256`],
//!   [`Shake128`]) whose `finalize` consumes the hasher,
//! - the [`Context`] whose [`Variant`] is chosen at runtime, reporting misuse
//!   through [`Error`].
//!
//! # Limitations
//!
//! No effort is made to guard against side channels, and there is no
//! hardware-accelerated permutation. Messages are byte-oriented; inputs whose
//! length is not a multiple of 8 bits are not supported.
//!
//! # Example Usage
//! ```
//! # use keccak_sponge::{sha3_256, Sha3_256};
//! #
//! let message = b"your input bytes";
//! let hash: [u8; 32] = sha3_256(message);
//! let expected = "414d4b6d11a92aaeeebe35f9374942f563848d345631bf5537407252dca6b378";
//! assert_eq!(expected, hex::encode(hash));
//!
//! let mut hasher = Sha3_256::new();
//! hasher.update(b"your input ");
//! hasher.update(b"bytes");
//! assert_eq!(hash, hasher.finalize());
//! ```
//!
//! [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf

mod context;
mod error;
mod hasher;
mod permute;
mod sponge;
mod variant;

pub use crate::{
    context::Context,
    error::{Error, Result},
    hasher::{
        HashSize, Hasher, Out224, Out256, Out384, Out512, Output, Sha3_224, Sha3_256, Sha3_384,
        Sha3_512, Shake, Shake128, Shake256, XofReader, XofSize, Xof128, Xof256,
    },
    permute::STATE_BYTES,
    variant::{SHA3_SUFFIX, SHAKE_SUFFIX, SpongeParams, SqueezeMode, Variant},
};

/// SHA-3 Hash with 224 bits (28 bytes) output.
pub fn sha3_224(message: &[u8]) -> [u8; 28] {
    one_shot::<Out224>(message)
}

/// SHA-3 Hash with 256 bits (32 bytes) output.
pub fn sha3_256(message: &[u8]) -> [u8; 32] {
    one_shot::<Out256>(message)
}

/// SHA-3 Hash with 384 bits (48 bytes) output.
pub fn sha3_384(message: &[u8]) -> [u8; 48] {
    one_shot::<Out384>(message)
}

/// SHA-3 Hash with 512 bits (64 bytes) output.
pub fn sha3_512(message: &[u8]) -> [u8; 64] {
    one_shot::<Out512>(message)
}

/// SHAKE128 of `message`, filling all of `output`.
pub fn shake128(message: &[u8], output: &mut [u8]) {
    let mut shake = Shake128::new();
    shake.update(message);
    shake.finalize_xof().squeeze(output);
}

/// SHAKE256 of `message`, filling all of `output`.
pub fn shake256(message: &[u8], output: &mut [u8]) {
    let mut shake = Shake256::new();
    shake.update(message);
    shake.finalize_xof().squeeze(output);
}

fn one_shot<S: HashSize>(message: &[u8]) -> S::Output {
    let mut hasher = Hasher::<S>::new();
    hasher.update(message);
    hasher.finalize()
}

/// Hash `message` with the runtime-selected `variant`.
///
/// `output_len` must equal the digest length of fixed-output variants.
pub fn hash(variant: Variant, message: &[u8], output_len: usize) -> Result<Vec<u8>> {
    let mut output = vec![0; output_len];
    hash_into(variant, message, &mut output)?;
    Ok(output)
}

/// Hash `message` with the runtime-selected `variant` into `output`.
///
/// A buffer of the wrong length is reported as [`Error::InvalidOutput`], a
/// failure of any later step as [`Error::GenericFailure`].
pub fn hash_into(variant: Variant, message: &[u8], output: &mut [u8]) -> Result<()> {
    variant.params().check_output_len(output.len())?;
    let mut context = Context::new(variant);
    context
        .absorb(message)
        .and_then(|()| context.finalize(output))
        .map_err(|err| Error::GenericFailure(format!("{variant}: {err}")))
}
