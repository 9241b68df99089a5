//! Error types.

use num_bigint::BigUint;

/// Alias for [`core::result::Result`] with the `textbook-rsa` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Brute-force batch is too small.
    #[error("batch size must be greater than or equal to {min}, got {actual}")]
    InvalidBatchSize {
        /// Smallest accepted batch size.
        min: usize,
        /// Batch size that was requested.
        actual: usize,
    },

    /// Random draw landed one past the end of the candidate list.
    #[error("random index {index} out of range for {len} candidates")]
    IndexOutOfRange {
        /// Drawn index.
        index: usize,
        /// Number of candidates that were available.
        len: usize,
    },

    /// Operands of a modular inverse share a factor.
    #[error("modular inverse undefined")]
    ModularInverseUndefined,

    /// Division by a zero greatest common factor.
    #[error("division by zero")]
    DivisionByZero,

    /// Invalid prime value.
    #[error("invalid prime value")]
    InvalidPrime,

    /// Invalid modulus.
    #[error("invalid modulus")]
    InvalidModulus,

    /// Exponent does not fit the naive power computation.
    #[error("exponent too large")]
    ExponentTooLarge,

    /// Decrypted value is not a Unicode scalar value.
    #[error("decrypted value {0} is not a valid code point")]
    InvalidCodePoint(BigUint),

    /// Cipher text could not be parsed.
    #[error("parse error: {reason}")]
    ParseError {
        /// Description of the failure.
        reason: String,
    },
}
