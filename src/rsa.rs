//! RSA signature verification specialized for the fixed public exponent
//! 65537.
use crate::error::{Result, UintError};
use crate::limb::Limb;
use crate::reduce::{mul_mod_with, HintProvider, NativeHint};
use crate::uint::FixedUint;

/// The fixed public exponent, `2^16 + 1`
pub const PUBLIC_EXPONENT: u64 = 65537;

/// Squarings covering the `2^16` part of the exponent
const SQUARINGS: usize = 16;

/// Check that `signature^65537 mod modulus` equals `message`.
///
/// A wrong signature is the expected, recoverable failure and surfaces as
/// [`UintError::SignatureMismatch`]. A [`UintError::Verification`] instead
/// means a reduction hint was bad, which is a broken invariant rather than
/// a verification outcome.
pub fn verify<L: Limb, const LIMBS: usize>(
    message: &FixedUint<L, LIMBS>,
    signature: &FixedUint<L, LIMBS>,
    modulus: &FixedUint<L, LIMBS>,
) -> Result<()> {
    verify_with(message, signature, modulus, &NativeHint)
}

/// Like [`verify`], threading a caller-supplied reduction [`HintProvider`]
/// through all 17 modular multiplies.
///
/// Since `65537 = 2^16 + 1`, the exponentiation is 16 modular squarings
/// followed by one modular multiply by the signature; no generic
/// exponent-bit loop is needed.
pub fn verify_with<L: Limb, const LIMBS: usize, H: HintProvider>(
    message: &FixedUint<L, LIMBS>,
    signature: &FixedUint<L, LIMBS>,
    modulus: &FixedUint<L, LIMBS>,
    provider: &H,
) -> Result<()> {
    let mut acc = *signature;
    for _ in 0..SQUARINGS {
        acc = mul_mod_with(&acc, &acc, modulus, provider)?;
    }
    acc = mul_mod_with(&acc, signature, modulus, provider)?;

    if acc == *message {
        return Ok(());
    }
    Err(UintError::SignatureMismatch)
}
