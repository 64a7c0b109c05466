//! Prove-then-check modular reduction.
//!
//! Long division is never implemented here. A [`HintProvider`] computes a
//! candidate `(quotient, remainder)` pair over native big integers — fast,
//! untrusted — and the reducer verifies the identity `a*b - q*m == r` with
//! nothing but the core wrapping primitives — slow side done cheaply. A hint
//! that fails the check is a broken invariant, surfaced loudly as
//! [`UintError::Verification`] so it can never be mistaken for an ordinary
//! arithmetic outcome.
use num_bigint::BigUint;
use num_traits::One;

use crate::error::{Result, UintError};
use crate::limb::Limb;
use crate::uint::FixedUint;

/// External oracle producing the reduction witness.
///
/// Contract: given native `a`, `b` and non-zero `m`, return `(q, r)` with
/// `r < m` and `(a * b) mod 2^width = q * m + r`. The product is truncated
/// to `width` bits *before* the division, matching
/// [`FixedUint::wrapping_mul`]. Implementations are trusted to be correct,
/// not merely consistent; the reducer checks them anyway.
pub trait HintProvider {
    fn mul_div_rem(
        &self,
        a: &BigUint,
        b: &BigUint,
        m: &BigUint,
        width: usize,
    ) -> (BigUint, BigUint);
}

/// Default provider backed by native arbitrary-precision arithmetic
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeHint;

impl HintProvider for NativeHint {
    fn mul_div_rem(
        &self,
        a: &BigUint,
        b: &BigUint,
        m: &BigUint,
        width: usize,
    ) -> (BigUint, BigUint) {
        let mask = (BigUint::one() << width) - 1u32;
        let product = (a * b) & mask;
        (&product / m, &product % m)
    }
}

/// Compute `(a * b) mod 2^BITS mod m` with the default [`NativeHint`].
pub fn mul_mod<L: Limb, const LIMBS: usize>(
    a: &FixedUint<L, LIMBS>,
    b: &FixedUint<L, LIMBS>,
    m: &FixedUint<L, LIMBS>,
) -> Result<FixedUint<L, LIMBS>> {
    mul_mod_with(a, b, m, &NativeHint)
}

/// Compute `(a * b) mod 2^BITS mod m`, taking the reduction witness from
/// `provider` and verifying it before returning.
///
/// `m` must be non-zero; a zero modulus is a precondition violation and
/// panics.
pub fn mul_mod_with<L: Limb, const LIMBS: usize, H: HintProvider>(
    a: &FixedUint<L, LIMBS>,
    b: &FixedUint<L, LIMBS>,
    m: &FixedUint<L, LIMBS>,
    provider: &H,
) -> Result<FixedUint<L, LIMBS>> {
    assert!(!m.is_zero(), "modulus must be non-zero");

    let (q, r) = provider.mul_div_rem(
        &a.to_biguint(),
        &b.to_biguint(),
        &m.to_biguint(),
        FixedUint::<L, LIMBS>::BITS,
    );
    // A witness that does not even fit the fixed width can never satisfy
    // the identity; reject it on the same path as any other bad hint.
    let q = FixedUint::<L, LIMBS>::from_biguint(&q)
        .map_err(|_| UintError::Verification("quotient hint out of range"))?;
    let r = FixedUint::<L, LIMBS>::from_biguint(&r)
        .map_err(|_| UintError::Verification("remainder hint out of range"))?;

    if r >= *m {
        return Err(UintError::Verification("remainder not below modulus"));
    }
    let product = a.wrapping_mul(b);
    let q_times_m = q.wrapping_mul(m);
    if product.wrapping_sub(&q_times_m) != r {
        return Err(UintError::Verification("a*b - q*m != r"));
    }
    Ok(r)
}
