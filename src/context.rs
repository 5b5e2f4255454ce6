//! Hash context whose variant is chosen at runtime.
//!
//! [`Context`] follows an init / absorb / finalize discipline for callers that
//! only learn which function to compute at runtime, e.g. from a protocol
//! header. Misuse is reported through [`Error`] instead of being ruled out by
//! the type system as with [`Hasher`](crate::Hasher) and
//! [`Shake`](crate::Shake).
use std::{io, mem};

use log::{debug, trace, warn};

use crate::{
    error::{Error, Result},
    permute::STATE_BYTES,
    sponge::AbsorbState,
    variant::{SpongeParams, SqueezeMode, Variant},
};

#[derive(Clone, Debug)]
enum Phase {
    Absorbing(AbsorbState),
    Finalized,
}

#[derive(Clone, Debug)]
pub struct Context {
    params: SpongeParams,
    variant: Option<Variant>,
    squeeze_mode: SqueezeMode,
    phase: Phase,
}

impl Context {
    pub fn new(variant: Variant) -> Self {
        let mut context = Self::with_params(variant.params());
        context.variant = Some(variant);
        context
    }

    /// Context for a KECCAK instance with directly chosen parameters.
    pub fn with_params(params: SpongeParams) -> Self {
        debug!(
            "initializing sponge with capacity {} and rate {} lanes",
            params.capacity_words(),
            params.rate_words()
        );
        Self {
            params,
            variant: None,
            squeeze_mode: SqueezeMode::default(),
            phase: Phase::Absorbing(AbsorbState::new(params.capacity_words())),
        }
    }

    pub fn with_squeeze_mode(mut self, squeeze_mode: SqueezeMode) -> Self {
        self.squeeze_mode = squeeze_mode;
        self
    }

    /// The named variant, `None` for contexts created from custom parameters.
    pub fn variant(&self) -> Option<Variant> {
        self.variant
    }

    pub fn params(&self) -> SpongeParams {
        self.params
    }

    pub fn squeeze_mode(&self) -> SqueezeMode {
        self.squeeze_mode
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self.phase, Phase::Finalized)
    }

    pub fn absorb(&mut self, msg: &[u8]) -> Result<()> {
        match &mut self.phase {
            Phase::Absorbing(state) => {
                trace!("absorbing {} bytes", msg.len());
                state.absorb(msg);
                Ok(())
            }
            Phase::Finalized => Err(Error::already_finalized()),
        }
    }

    /// Pad the absorbed message and write the output to `output`.
    ///
    /// For fixed-output variants `output` must have exactly the digest
    /// length. In [`SqueezeMode::SingleBlock`] at most [`STATE_BYTES`] bytes
    /// can be produced. Buffer errors leave the context untouched, so the
    /// call can be retried with a correct buffer.
    pub fn finalize(&mut self, output: &mut [u8]) -> Result<()> {
        if self.is_finalized() {
            return Err(Error::already_finalized());
        }
        self.params.check_output_len(output.len())?;
        if self.squeeze_mode == SqueezeMode::SingleBlock && output.len() > STATE_BYTES {
            return Err(Error::InvalidOutput {
                expected: STATE_BYTES,
                actual: output.len(),
            });
        }

        let Phase::Absorbing(state) = mem::replace(&mut self.phase, Phase::Finalized) else {
            return Err(Error::already_finalized());
        };
        let mut squeeze = state.into_squeeze(self.params.suffix());
        match self.squeeze_mode {
            SqueezeMode::Iterative => squeeze.squeeze(output),
            SqueezeMode::SingleBlock => {
                if output.len() > self.params.rate_bytes() {
                    warn!(
                        "single-block output of {} bytes extends past the rate of {} bytes",
                        output.len(),
                        self.params.rate_bytes()
                    );
                }
                let block = squeeze.into_block();
                output.copy_from_slice(&block[..output.len()]);
            }
        }
        debug!("finalized sponge, produced {} bytes", output.len());
        Ok(())
    }

    /// [`finalize`](Self::finalize) into a newly allocated buffer of `len`
    /// bytes.
    pub fn finalize_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut output = vec![0; len];
        self.finalize(&mut output)?;
        Ok(output)
    }

    /// Discard all absorbed input and start over with the same parameters.
    pub fn reset(&mut self) {
        debug!("resetting sponge");
        self.phase = Phase::Absorbing(AbsorbState::new(self.params.capacity_words()));
    }
}

impl io::Write for Context {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.absorb(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_use_after_finalize() {
        let mut context = Context::new(Variant::Sha3_224);
        context.absorb(b"message").unwrap();
        let digest = context.finalize_vec(28).unwrap();
        assert!(context.is_finalized());
        assert!(matches!(
            context.absorb(b"more"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            context.finalize_vec(28),
            Err(Error::InvalidInput(_))
        ));

        context.reset();
        assert!(!context.is_finalized());
        context.absorb(b"message").unwrap();
        assert_eq!(digest, context.finalize_vec(28).unwrap());
    }

    #[test]
    fn wrong_buffer_keeps_context_usable() {
        let mut context = Context::new(Variant::Sha3_256);
        context.absorb(b"abc").unwrap();
        assert_eq!(
            Err(Error::InvalidOutput {
                expected: 32,
                actual: 64
            }),
            context.finalize_vec(64)
        );
        assert!(!context.is_finalized());
        assert_eq!(
            libcrux_sha3::sha256(b"abc")[..],
            context.finalize_vec(32).unwrap()[..]
        );
    }

    #[test]
    fn single_block_mode_is_bounded() {
        let mut context =
            Context::new(Variant::Shake128).with_squeeze_mode(SqueezeMode::SingleBlock);
        assert!(matches!(
            context.finalize_vec(STATE_BYTES + 1),
            Err(Error::InvalidOutput { .. })
        ));
        let block = context.finalize_vec(STATE_BYTES).unwrap();
        assert_eq!(libcrux_sha3::shake128::<168>(b"")[..], block[..168]);
    }

    #[test]
    fn custom_params() {
        // SHA3-256 parameters expressed directly
        let params = SpongeParams::custom(8, crate::SHA3_SUFFIX).unwrap();
        let mut context = Context::with_params(params);
        assert_eq!(None, context.variant());
        context.absorb(b"abc").unwrap();
        // no fixed length, so a prefix can be requested
        let out = context.finalize_vec(16).unwrap();
        assert_eq!(libcrux_sha3::sha256(b"abc")[..16], out[..]);
    }
}
