use std::{io, marker::PhantomData};

use crate::{
    error::Result,
    permute::STATE_BYTES,
    sponge::{AbsorbState, SqueezeState},
    variant::Variant,
};

/// Incremental SHA-3 hash with a fixed output size.
#[derive(Clone, Debug)]
pub struct Hasher<S: HashSize> {
    state: AbsorbState,
    _size: PhantomData<S>,
}

/// Marker type for 224-bit output.
#[derive(Clone, Copy, Debug)]
pub struct Out224;
/// Marker type for 256-bit output.
#[derive(Clone, Copy, Debug)]
pub struct Out256;
/// Marker type for 384-bit output.
#[derive(Clone, Copy, Debug)]
pub struct Out384;
/// Marker type for 512-bit output.
#[derive(Clone, Copy, Debug)]
pub struct Out512;

/// SHA-3 [`Hasher`] with 224-bit output.
pub type Sha3_224 = Hasher<Out224>;
/// SHA-3 [`Hasher`] with 256-bit output.
pub type Sha3_256 = Hasher<Out256>;
/// SHA-3 [`Hasher`] with 384-bit output.
pub type Sha3_384 = Hasher<Out384>;
/// SHA-3 [`Hasher`] with 512-bit output.
pub type Sha3_512 = Hasher<Out512>;

impl<S: HashSize> Hasher<S> {
    pub fn new() -> Self {
        Hasher {
            state: AbsorbState::new(S::VARIANT.capacity_words()),
            _size: PhantomData,
        }
    }

    pub fn update(&mut self, msg: &[u8]) {
        self.state.absorb(msg);
    }

    pub fn finalize(self) -> S::Output {
        let mut output = S::Output::default();
        let mut squeeze = self.state.into_squeeze(S::VARIANT.suffix());
        squeeze.squeeze(output.as_mut());
        output
    }

    /// Write the digest to `output`, which must have exactly the digest
    /// length.
    pub fn finalize_into(self, output: &mut [u8]) -> Result<()> {
        S::VARIANT.params().check_output_len(output.len())?;
        let mut squeeze = self.state.into_squeeze(S::VARIANT.suffix());
        squeeze.squeeze(output);
        Ok(())
    }
}

impl<S: HashSize> Default for Hasher<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: HashSize> io::Write for Hasher<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Incremental SHAKE extendable-output function.
#[derive(Clone, Debug)]
pub struct Shake<S: XofSize> {
    state: AbsorbState,
    _size: PhantomData<S>,
}

/// Marker type for the 128-bit security strength of SHAKE128.
#[derive(Clone, Copy, Debug)]
pub struct Xof128;
/// Marker type for the 256-bit security strength of SHAKE256.
#[derive(Clone, Copy, Debug)]
pub struct Xof256;

/// SHAKE128 [`Shake`] instance.
pub type Shake128 = Shake<Xof128>;
/// SHAKE256 [`Shake`] instance.
pub type Shake256 = Shake<Xof256>;

impl<S: XofSize> Shake<S> {
    pub fn new() -> Self {
        Shake {
            state: AbsorbState::new(S::VARIANT.capacity_words()),
            _size: PhantomData,
        }
    }

    pub fn update(&mut self, msg: &[u8]) {
        self.state.absorb(msg);
    }

    /// Pad the message and return a reader for an unbounded output stream.
    pub fn finalize_xof(self) -> XofReader {
        XofReader {
            state: self.state.into_squeeze(S::VARIANT.suffix()),
        }
    }

    /// The full 1600-bit state after the padding permutation, serialized
    /// little-endian.
    ///
    /// The leading rate bytes equal the standard output; the remaining bytes
    /// expose capacity lanes and are not SHAKE output. Use
    /// [`finalize_xof`](Self::finalize_xof) unless interoperating with
    /// engines that return this block.
    pub fn finalize_block(self) -> [u8; STATE_BYTES] {
        self.state.into_squeeze(S::VARIANT.suffix()).into_block()
    }
}

impl<S: XofSize> Default for Shake<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: XofSize> io::Write for Shake<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Output stream of a finalized [`Shake`].
///
/// Consecutive calls to [`squeeze`](Self::squeeze) continue the stream, so
/// reading 10 and then 20 bytes yields the same bytes as reading 30 at once.
#[derive(Clone, Debug)]
pub struct XofReader {
    state: SqueezeState,
}

impl XofReader {
    pub fn squeeze(&mut self, output: &mut [u8]) {
        self.state.squeeze(output);
    }
}

impl io::Read for XofReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.squeeze(buf);
        Ok(buf.len())
    }
}

#[allow(private_bounds)]
pub trait HashSize: Params {
    type Output: Output;
}

#[allow(private_bounds)]
pub trait XofSize: Params {}

trait Params {
    const VARIANT: Variant;
}

impl HashSize for Out224 {
    type Output = [u8; 28];
}

impl Params for Out224 {
    const VARIANT: Variant = Variant::Sha3_224;
}

impl HashSize for Out256 {
    type Output = [u8; 32];
}

impl Params for Out256 {
    const VARIANT: Variant = Variant::Sha3_256;
}

impl HashSize for Out384 {
    type Output = [u8; 48];
}

impl Params for Out384 {
    const VARIANT: Variant = Variant::Sha3_384;
}

impl HashSize for Out512 {
    type Output = [u8; 64];
}

impl Params for Out512 {
    const VARIANT: Variant = Variant::Sha3_512;
}

impl XofSize for Xof128 {}

impl Params for Xof128 {
    const VARIANT: Variant = Variant::Shake128;
}

impl XofSize for Xof256 {}

impl Params for Xof256 {
    const VARIANT: Variant = Variant::Shake256;
}

// The normal Default trait is not implemented for arrays with len > 32, so we
// define this helper trait
pub trait Output: AsMut<[u8]> + private::Sealed {
    fn default() -> Self;
}

impl<const N: usize> Output for [u8; N] {
    fn default() -> Self {
        [0; N]
    }
}

mod private {
    impl<const N: usize> Sealed for [u8; N] {}

    pub trait Sealed {}
}

#[cfg(test)]
mod tests {
    use std::io::{self, Read, Write};

    use super::{Sha3_256, Sha3_512, Shake128, Shake256};
    use crate::Error;

    #[test]
    fn finalize_into_rejects_wrong_length() {
        let mut out = [0; 31];
        assert_eq!(
            Err(Error::InvalidOutput {
                expected: 32,
                actual: 31
            }),
            Sha3_256::new().finalize_into(&mut out)
        );
        let mut out = [0; 64];
        Sha3_512::new().finalize_into(&mut out).unwrap();
        assert_eq!(Sha3_512::new().finalize(), out);
    }

    #[test]
    fn write_and_copy() {
        let msg = vec![0xa5; 1000];
        let mut hasher = Sha3_256::new();
        io::copy(&mut &msg[..], &mut hasher).unwrap();
        assert_eq!(libcrux_sha3::sha256(&msg), hasher.finalize());

        let mut shake = Shake256::new();
        shake.write_all(&msg).unwrap();
        let mut out = [0; 64];
        shake.finalize_xof().read_exact(&mut out).unwrap();
        assert_eq!(libcrux_sha3::shake256::<64>(&msg), out);
    }

    #[test]
    fn fork_midstream() {
        let mut hasher = Shake128::new();
        hasher.update(b"common prefix ");
        let mut fork = hasher.clone();
        hasher.update(b"left");
        fork.update(b"right");

        let mut left = [0; 32];
        let mut right = [0; 32];
        hasher.finalize_xof().squeeze(&mut left);
        fork.finalize_xof().squeeze(&mut right);
        assert_eq!(libcrux_sha3::shake128::<32>(b"common prefix left"), left);
        assert_eq!(libcrux_sha3::shake128::<32>(b"common prefix right"), right);
    }
}
