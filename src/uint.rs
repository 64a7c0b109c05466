//! Fixed-width unsigned integers represented as little-endian limb vectors.
//!
//! A `FixedUint<L, LIMBS>` holds the value
//! `sum(limbs[i] * 2^(L::BITS * i) for i in 0..LIMBS)`; every arithmetic
//! operation is a pure function of its operands, returns a fresh value, and
//! wraps at `2^(L::BITS * LIMBS)`. Overflow is discarded, never flagged.
use core::cmp::Ordering;
use core::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{Result, UintError};
use crate::limb::Limb;

/// A `LIMBS * L::BITS`-bit unsigned integer. `limbs[0]` is least significant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedUint<L: Limb, const LIMBS: usize> {
    limbs: [L; LIMBS],
}

impl<L: Limb, const LIMBS: usize> Default for FixedUint<L, LIMBS> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<L: Limb, const LIMBS: usize> FixedUint<L, LIMBS> {
    /// Total width in bits
    pub const BITS: usize = L::BITS * LIMBS;

    pub fn zero() -> Self {
        return Self {
            limbs: [L::ZERO; LIMBS],
        };
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|limb| *limb == L::ZERO)
    }

    pub fn from_limbs(limbs: [L; LIMBS]) -> Self {
        return Self { limbs };
    }

    pub fn limbs(&self) -> &[L; LIMBS] {
        &self.limbs
    }

    pub fn from_u64(value: u64) -> Self {
        let mut limbs = [L::ZERO; LIMBS];
        let mut rest = value;
        for limb in limbs.iter_mut() {
            *limb = L::from_u64(rest);
            rest = if L::BITS >= 64 { 0 } else { rest >> L::BITS };
            if rest == 0 {
                break;
            }
        }
        return Self { limbs };
    }

    /// Parse a big-endian hex string. The literal `0x` prefix is required;
    /// the remaining digits are split into groups of `L::HEX_DIGITS` from
    /// the least-significant end and each group is parsed as one limb.
    /// Missing high-order groups are zero, so `"0x"` alone parses as zero.
    ///
    /// More significant digits than the fixed width holds is a hard
    /// `Format` error; the input is never silently truncated.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix("0x")
            .ok_or(UintError::Format("missing 0x prefix"))?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(UintError::Format("invalid hex digit"));
        }
        if digits.len() > LIMBS * L::HEX_DIGITS {
            return Err(UintError::Format("more digits than the width holds"));
        }

        let mut limbs = [L::ZERO; LIMBS];
        let mut end = digits.len();
        let mut index = 0;
        while end > 0 {
            let start = end.saturating_sub(L::HEX_DIGITS);
            limbs[index] = L::from_hex(&digits[start..end])
                .ok_or(UintError::Format("invalid hex digit"))?;
            index += 1;
            end = start;
        }
        Ok(Self { limbs })
    }

    /// Convert from a native big integer, masking and shifting `L::BITS`
    /// per limb. Inputs outside `[0, 2^BITS)` are a `Range` error.
    pub fn from_bigint(value: &BigInt) -> Result<Self> {
        if value.sign() == Sign::Minus {
            return Err(UintError::Range);
        }
        Self::from_biguint(value.magnitude())
    }

    pub fn from_biguint(value: &BigUint) -> Result<Self> {
        if value.bits() > Self::BITS as u64 {
            return Err(UintError::Range);
        }
        let mask = (BigUint::one() << L::BITS) - 1u32;
        let mut rest = value.clone();
        let mut limbs = [L::ZERO; LIMBS];
        for limb in limbs.iter_mut() {
            *limb = L::from_u64((&rest & &mask).to_u64().unwrap_or(0));
            rest >>= L::BITS;
        }
        Ok(Self { limbs })
    }

    pub fn to_biguint(&self) -> BigUint {
        let mut acc = BigUint::zero();
        for limb in self.limbs.iter().rev() {
            acc = (acc << L::BITS) | BigUint::from(limb.to_u64());
        }
        return acc;
    }

    /// Zero-padded big-endian hex render, without the `0x` prefix.
    /// `from_hex("0x".to_owned() + &x.to_hex())` reconstructs `x`.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(LIMBS * L::HEX_DIGITS);
        for limb in self.limbs.iter().rev() {
            out.push_str(&format!("{:0width$x}", limb, width = L::HEX_DIGITS));
        }
        return out;
    }

    /// Compute `(self - rhs) mod 2^BITS`. Never fails: the final borrow is
    /// discarded, so subtracting a larger value wraps around.
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        let mut limbs = [L::ZERO; LIMBS];
        let mut borrow = false;
        for i in 0..LIMBS {
            let (diff, next_borrow) = self.limbs[i].sbb(rhs.limbs[i], borrow);
            limbs[i] = diff;
            borrow = next_borrow;
        }
        return Self { limbs };
    }

    /// Compute `(self * rhs) mod 2^BITS` by schoolbook convolution. For
    /// each limb `j` of `rhs` the carry flows along increasing `i`,
    /// accumulating into `limbs[i + j]`; the carry out of the top limb is
    /// the truncation point and is discarded.
    pub fn wrapping_mul(&self, rhs: &Self) -> Self {
        let mut limbs = [L::ZERO; LIMBS];
        for j in 0..LIMBS {
            let mut carry = L::ZERO;
            for i in 0..(LIMBS - j) {
                let (lo, hi) = self.limbs[i].mac(rhs.limbs[j], limbs[i + j], carry);
                limbs[i + j] = lo;
                carry = hi;
            }
        }
        return Self { limbs };
    }
}

impl<L: Limb, const LIMBS: usize> Ord for FixedUint<L, LIMBS> {
    /// Numeric order: compare from the most significant limb down. The
    /// derived array order would compare the least significant limb first.
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..LIMBS).rev() {
            match self.limbs[i].cmp(&other.limbs[i]) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl<L: Limb, const LIMBS: usize> PartialOrd for FixedUint<L, LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<L: Limb, const LIMBS: usize> fmt::Display for FixedUint<L, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{U2048, U2048x32};
    use crypto_bigint::U2048 as RefU2048;
    use rand::Rng;

    fn random_u2048(rng: &mut impl Rng) -> U2048 {
        let mut limbs = [0u64; crate::LIMBS_64];
        for limb in limbs.iter_mut() {
            *limb = rng.gen();
        }
        U2048::from_limbs(limbs)
    }

    fn as_ref_uint(x: &U2048) -> RefU2048 {
        RefU2048::from_be_hex(&x.to_hex())
    }

    fn wrap_mask() -> BigUint {
        (BigUint::one() << 2048) - 1u32
    }

    #[test]
    fn test_from_hex_requires_prefix() {
        assert_eq!(
            U2048::from_hex("ff"),
            Err(UintError::Format("missing 0x prefix"))
        );
        assert_eq!(U2048::from_hex("0x").unwrap(), U2048::zero());
    }

    #[test]
    fn test_from_hex_rejects_bad_digits() {
        assert!(matches!(
            U2048::from_hex("0x12g4"),
            Err(UintError::Format(_))
        ));
        assert!(matches!(
            U2048::from_hex("0x12é4"),
            Err(UintError::Format(_))
        ));
    }

    #[test]
    fn test_from_hex_rejects_excess_width() {
        // 513 digits: one more than 2048 bits hold
        let too_long = format!("0x1{}", "0".repeat(512));
        assert_eq!(
            U2048::from_hex(&too_long),
            Err(UintError::Format("more digits than the width holds"))
        );
        // exactly 512 digits is fine
        let max_width = format!("0x{}", "f".repeat(512));
        assert!(U2048::from_hex(&max_width).is_ok());
    }

    #[test]
    fn test_from_hex_partial_group() {
        // groups are split from the least-significant end, so a short
        // leading group lands in the high part of limb 1
        let x = U2048::from_hex("0x1FFFFFFFFFFFFFFFF").unwrap();
        assert_eq!(x.limbs()[0], u64::MAX);
        assert_eq!(x.limbs()[1], 1);
        assert_eq!(x.limbs()[2], 0);
    }

    #[test]
    fn test_hex_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let x = random_u2048(&mut rng);
            let rendered = format!("0x{}", x.to_hex());
            assert_eq!(U2048::from_hex(&rendered).unwrap(), x);
        }
    }

    #[test]
    fn test_native_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let x = random_u2048(&mut rng);
            let native = BigInt::from(x.to_biguint());
            assert_eq!(U2048::from_bigint(&native).unwrap(), x);
        }
    }

    #[test]
    fn test_from_bigint_rejects_out_of_range() {
        assert_eq!(U2048::from_bigint(&BigInt::from(-1)), Err(UintError::Range));
        let too_big = BigInt::from(1u8) << 2048;
        assert_eq!(U2048::from_bigint(&too_big), Err(UintError::Range));
        let max = (BigInt::from(1u8) << 2048) - 1;
        assert!(U2048::from_bigint(&max).is_ok());
    }

    #[test]
    fn test_sub_zero_is_identity() {
        let mut rng = rand::thread_rng();
        for _ in 0..16 {
            let a = random_u2048(&mut rng);
            assert_eq!(a.wrapping_sub(&U2048::zero()), a);
        }
    }

    #[test]
    fn test_sub_known_vector() {
        let a = U2048::from_hex("0xFFFFFFFFFFFFFFFFBBBBBBBBBBBBBBBB").unwrap();
        let b = U2048::from_hex("0xCCCCCCCCCCCCCCCCAAAAAAAAAAAAAAAA").unwrap();
        let expected = U2048::from_hex("0x33333333333333331111111111111111").unwrap();
        assert_eq!(a.wrapping_sub(&b), expected);
    }

    #[test]
    fn test_sub_wraps_on_underflow() {
        let b = U2048::from_hex("0xAAAAAAAAAAAAAAAA").unwrap();
        let diff = U2048::zero().wrapping_sub(&b);
        assert_eq!(diff.limbs()[0], 0x5555555555555556);
        for i in 1..crate::LIMBS_64 {
            assert_eq!(diff.limbs()[i], u64::MAX);
        }
    }

    #[test]
    fn test_sub_wraps_on_underflow_32bit_limbs() {
        let b = U2048x32::from_hex("0xAAAAAAAAAAAAAAAA").unwrap();
        let diff = U2048x32::zero().wrapping_sub(&b);
        assert_eq!(diff.limbs()[0], 0x55555556);
        assert_eq!(diff.limbs()[1], 0x55555555);
        for i in 2..crate::LIMBS_32 {
            assert_eq!(diff.limbs()[i], u32::MAX);
        }
    }

    #[test]
    fn test_sub_matches_native() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let a = random_u2048(&mut rng);
            let b = random_u2048(&mut rng);
            let expected = if a.to_biguint() >= b.to_biguint() {
                a.to_biguint() - b.to_biguint()
            } else {
                (BigUint::one() << 2048) + a.to_biguint() - b.to_biguint()
            };
            assert_eq!(a.wrapping_sub(&b).to_biguint(), expected);
        }
    }

    #[test]
    fn test_mul_known_vector() {
        let a = U2048::from_hex("0xFFFFFFFFFFFFFFFFAAAAAAAAAAAAAAAA").unwrap();
        let b = U2048::from_hex("0xEEEEEEEEEEEEEEEEBBBBBBBBBBBBBBBB").unwrap();
        let expected = U2048::from_hex(
            "0xEEEEEEEEEEEEEEEE6C16C16C16C16C157777777777777777D82D82D82D82D82E",
        )
        .unwrap();
        assert_eq!(a.wrapping_mul(&b), expected);
    }

    #[test]
    fn test_mul_known_vector_32bit_limbs() {
        let a = U2048x32::from_hex("0xFFFFFFFFFFFFFFFFAAAAAAAAAAAAAAAA").unwrap();
        let b = U2048x32::from_hex("0xEEEEEEEEEEEEEEEEBBBBBBBBBBBBBBBB").unwrap();
        let expected = U2048x32::from_hex(
            "0xEEEEEEEEEEEEEEEE6C16C16C16C16C157777777777777777D82D82D82D82D82E",
        )
        .unwrap();
        assert_eq!(a.wrapping_mul(&b), expected);
    }

    #[test]
    fn test_mul_truncates_like_native() {
        let mut rng = rand::thread_rng();
        for _ in 0..16 {
            let a = random_u2048(&mut rng);
            let b = random_u2048(&mut rng);
            let expected = (a.to_biguint() * b.to_biguint()) & wrap_mask();
            assert_eq!(a.wrapping_mul(&b).to_biguint(), expected);
        }
    }

    #[test]
    fn test_wrapping_ops_match_reference_impl() {
        // differential check against crypto-bigint's U2048
        let mut rng = rand::thread_rng();
        for _ in 0..16 {
            let a = random_u2048(&mut rng);
            let b = random_u2048(&mut rng);
            let (ra, rb) = (as_ref_uint(&a), as_ref_uint(&b));
            assert_eq!(as_ref_uint(&a.wrapping_sub(&b)), ra.wrapping_sub(&rb));
            assert_eq!(as_ref_uint(&a.wrapping_mul(&b)), ra.wrapping_mul(&rb));
        }
    }

    #[test]
    fn test_ordering_is_numeric() {
        let small = U2048::from_hex("0xFFFFFFFFFFFFFFFF").unwrap();
        let large = U2048::from_hex("0x10000000000000000").unwrap();
        assert!(small < large);
        assert!(large > small);
        assert_eq!(small.cmp(&small), Ordering::Equal);
    }

    #[test]
    fn test_display_is_padded_hex() {
        let one = U2048::from_u64(1);
        let rendered = one.to_string();
        assert_eq!(rendered.len(), 2 + 512);
        assert!(rendered.starts_with("0x000"));
        assert!(rendered.ends_with('1'));
    }
}
