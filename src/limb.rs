//! Limb abstraction collapsing the 32-bit and 64-bit word variants into one
//! generic design. Each limb type names the double-width domain its carries
//! and borrows are computed in (`u64` for 32-bit limbs, `u128` for 64-bit
//! limbs), so no intermediate ever leaves the representable range.
use core::fmt;
use core::hash::Hash;

pub trait Limb:
    Copy + Default + Eq + Ord + Hash + fmt::Debug + fmt::LowerHex + Send + Sync + 'static
{
    /// Bit width of one limb
    const BITS: usize;

    /// Hex digits needed to render one limb
    const HEX_DIGITS: usize;

    const ZERO: Self;
    const MAX: Self;

    /// Multiply-accumulate: `self * rhs + acc + carry`, split into its low
    /// and high halves. The worst case is
    /// `(2^BITS - 1)^2 + 2 * (2^BITS - 1) = 2^(2*BITS) - 1`, which the
    /// double-width domain holds exactly.
    fn mac(self, rhs: Self, acc: Self, carry: Self) -> (Self, Self);

    /// Borrowing subtraction: `self - rhs - borrow`, wrapping at `2^BITS`.
    /// The subtrahend is extended into the double-width domain first so no
    /// negative intermediate is ever formed.
    fn sbb(self, rhs: Self, borrow: bool) -> (Self, bool);

    /// Keep the low `BITS` bits of `value`
    fn from_u64(value: u64) -> Self;

    fn to_u64(self) -> u64;

    /// Parse one group of at most `HEX_DIGITS` hex characters
    fn from_hex(group: &str) -> Option<Self>;
}

impl Limb for u64 {
    const BITS: usize = 64;
    const HEX_DIGITS: usize = 16;
    const ZERO: Self = 0;
    const MAX: Self = u64::MAX;

    fn mac(self, rhs: Self, acc: Self, carry: Self) -> (Self, Self) {
        let wide = self as u128 * rhs as u128 + acc as u128 + carry as u128;
        (wide as u64, (wide >> 64) as u64)
    }

    fn sbb(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let minuend = self as u128;
        let subtrahend = rhs as u128 + borrow as u128;
        if minuend < subtrahend {
            ((minuend + (1u128 << 64) - subtrahend) as u64, true)
        } else {
            ((minuend - subtrahend) as u64, false)
        }
    }

    fn from_u64(value: u64) -> Self {
        value
    }

    fn to_u64(self) -> u64 {
        self
    }

    fn from_hex(group: &str) -> Option<Self> {
        u64::from_str_radix(group, 16).ok()
    }
}

impl Limb for u32 {
    const BITS: usize = 32;
    const HEX_DIGITS: usize = 8;
    const ZERO: Self = 0;
    const MAX: Self = u32::MAX;

    fn mac(self, rhs: Self, acc: Self, carry: Self) -> (Self, Self) {
        let wide = self as u64 * rhs as u64 + acc as u64 + carry as u64;
        (wide as u32, (wide >> 32) as u32)
    }

    fn sbb(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let minuend = self as u64;
        let subtrahend = rhs as u64 + borrow as u64;
        if minuend < subtrahend {
            ((minuend + (1u64 << 32) - subtrahend) as u32, true)
        } else {
            ((minuend - subtrahend) as u32, false)
        }
    }

    fn from_u64(value: u64) -> Self {
        value as u32
    }

    fn to_u64(self) -> u64 {
        self as u64
    }

    fn from_hex(group: &str) -> Option<Self> {
        u32::from_str_radix(group, 16).ok()
    }
}
