//! Error taxonomy for construction, reduction, and signature checks
use thiserror::Error;

pub type Result<T> = core::result::Result<T, UintError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UintError {
    /// Malformed hex input; construction is rejected, never coerced
    #[error("malformed hex string: {0}")]
    Format(&'static str),

    /// Native integer outside the representable unsigned range
    #[error("native integer outside the representable unsigned range")]
    Range,

    /// The reduction identity `a*b - q*m == r` did not hold, so the hint
    /// provider is buggy or malicious. Treat as a broken invariant, not a
    /// normal error path.
    #[error("reduction hint failed verification: {0}")]
    Verification(&'static str),

    /// The signature does not verify; an expected, recoverable outcome
    #[error("signature does not verify against the message")]
    SignatureMismatch,
}
