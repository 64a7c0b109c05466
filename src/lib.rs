//! Fixed-width 2048-bit unsigned arithmetic and RSA-65537 signature
//! verification.
//!
//! The integer core is a little-endian limb vector with wraparound
//! subtraction and truncating schoolbook multiplication; modular reduction
//! is built on top of it as a prove-then-check step (an untrusted hint
//! provider computes the quotient and remainder, the core verifies the
//! identity `a*b - q*m == r`), and RSA verification is 16 modular squarings
//! plus one modular multiply for the fixed exponent `65537 = 2^16 + 1`.
//!
//! Every operation is a pure function over value-type operands; there is no
//! global state, no I/O, and nothing to synchronize.

/// Total width in bits of every fixed-width integer in this crate
pub const TOTAL_BITS: usize = 2048;

/// Limb counts for the two supported limb widths
pub const LIMBS_64: usize = TOTAL_BITS / 64;
pub const LIMBS_32: usize = TOTAL_BITS / 32;

pub mod error;
pub mod limb;
pub mod reduce;
pub mod rsa;
pub mod uint;

pub use error::{Result, UintError};
pub use limb::Limb;
pub use reduce::{mul_mod, mul_mod_with, HintProvider, NativeHint};
pub use uint::FixedUint;

/// Use the same fixed-width integer type everywhere
pub type U2048 = FixedUint<u64, LIMBS_64>;

/// The same width carved into 32-bit limbs
#[allow(non_camel_case_types)]
pub type U2048x32 = FixedUint<u32, LIMBS_32>;
