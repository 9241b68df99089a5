//! Generate the prime components and exponents of a textbook RSA key pair

use log::debug;
use num_bigint::BigUint;
use num_traits::One;
use rand::Rng;

use crate::{
    errors::Result,
    key::{Key, KeyPair},
    math::{carmichael, generate_coprime, mod_inverse},
    prime_rand::{pick_inclusive, random_prime},
};

/// Generates a key pair from two primes drawn with [`random_prime`]: `p` from
/// the primes up to `low`, `q` from the primes up to `high`.
///
/// Degenerate draws are not retried. The sentinel `1` for either prime fails
/// with [`Error::DivisionByZero`](crate::Error::DivisionByZero), an
/// exponent sharing a factor with `λ` fails with
/// [`Error::ModularInverseUndefined`](crate::Error::ModularInverseUndefined),
/// and `p == q` yields a pair that does not round trip.
///
/// The search is linear in `high`, so keep the bounds in the hundreds.
pub fn rsa_key<R: Rng>(rng: &mut R, low: &BigUint, high: &BigUint) -> Result<KeyPair> {
    let p = random_prime(rng, &BigUint::one(), low)?;
    let q = random_prime(rng, low, high)?;

    key_pair_from_primes(rng, &p, &q)
}

/// Builds a key pair over `n = p * q`, drawing `e` from the integers coprime to
/// `λ = carmichael(p, q)` and setting `d = e⁻¹ mod λ`.
pub fn key_pair_from_primes<R: Rng>(rng: &mut R, p: &BigUint, q: &BigUint) -> Result<KeyPair> {
    let n = p * q;
    let lambda = carmichael(p, q)?;
    debug!("p = {}, q = {}, n = {}, lambda = {}", p, q, n, lambda);

    let e = pick_inclusive(rng, generate_coprime(&lambda, &lambda))?;
    let d = mod_inverse(&e, &lambda)?;

    Ok(KeyPair::new(Key::public(n.clone(), e), Key::private(n, d)))
}
