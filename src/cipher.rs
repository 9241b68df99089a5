//! Character-wise textbook RSA over the space-separated decimal wire form.
//!
//! Each `char` of the plaintext is one cipher unit. Units are only recovered
//! when the code point is below the modulus.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::algorithms::rsa::{rsa_decrypt, rsa_encrypt};
use crate::errors::{Error, Result};
use crate::keytraits::KeyParts;

/// Encrypts every code point of `text` with `key` and joins the units as
/// decimal numbers separated by a single space.
pub fn encrypt<K: KeyParts + ?Sized>(text: &str, key: &K) -> Result<String> {
    let units = text
        .chars()
        .map(|c| rsa_encrypt(key, &BigUint::from(u32::from(c))).map(|unit| unit.to_string()))
        .collect::<Result<Vec<_>>>()?;

    Ok(units.join(" "))
}

/// Decrypts whitespace-separated decimal units with `key`, one `char` each.
pub fn decrypt<K: KeyParts + ?Sized>(cipher_text: &str, key: &K) -> Result<String> {
    cipher_text
        .split_whitespace()
        .map(|token| {
            let c: BigUint = token.parse().map_err(|_| Error::ParseError {
                reason: format!("invalid cipher unit {:?}", token),
            })?;
            let m = rsa_decrypt(key, &c)?;

            m.to_u32()
                .and_then(char::from_u32)
                .ok_or(Error::InvalidCodePoint(m))
        })
        .collect()
}
