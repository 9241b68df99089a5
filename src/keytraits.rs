//! Traits related to the key components

use num_bigint::BigUint;

/// Components shared by public and private RSA keys.
pub trait KeyParts {
    /// Returns the modulus of the key.
    fn n(&self) -> &BigUint;

    /// Returns the exponent of the key, `e` for public keys and `d` for
    /// private keys.
    fn exponent(&self) -> &BigUint;
}
