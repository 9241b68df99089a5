//! Textbook RSA on a single integer unit.

use num_bigint::BigUint;
use num_traits::{pow, ToPrimitive, Zero};

use crate::errors::{Error, Result};
use crate::keytraits::KeyParts;

/// ⚠️ Raw RSA encryption of `m` with the public key. No padding is performed.
#[inline]
pub fn rsa_encrypt<K: KeyParts + ?Sized>(key: &K, m: &BigUint) -> Result<BigUint> {
    naive_pow_mod(m, key.exponent(), key.n())
}

/// ⚠️ Raw RSA decryption of `c` with the private key. No padding, no
/// blinding, and `c` is not checked against the modulus.
#[inline]
pub fn rsa_decrypt<K: KeyParts + ?Sized>(key: &K, c: &BigUint) -> Result<BigUint> {
    naive_pow_mod(c, key.exponent(), key.n())
}

/// Computes the full power `base^exponent` and only then reduces it mod `n`.
fn naive_pow_mod(base: &BigUint, exponent: &BigUint, n: &BigUint) -> Result<BigUint> {
    if n.is_zero() {
        return Err(Error::InvalidModulus);
    }

    let exponent = exponent.to_usize().ok_or(Error::ExponentTooLarge)?;
    Ok(pow(base.clone(), exponent) % n)
}
