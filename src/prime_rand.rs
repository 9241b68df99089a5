//! Generation of random primes.

use log::info;
use num_bigint::BigUint;
use num_traits::One;
use rand::Rng;

use crate::errors::{Error, Result};
use crate::prime::next_prime_to;

/// A generic trait for drawing random primes from a random source.
///
/// *Warning*: the draw walks every prime up to the bound and may return the
/// non-prime sentinel `1`. It is meant for small teaching keys only.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use textbook_rsa::{BigUint, RandPrime};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let high = BigUint::from(50u32);
/// if let Ok(p) = rng.random_prime(&BigUint::from(1u32), &high) {
///     assert!(p <= BigUint::from(53u32));
/// }
/// ```
pub trait RandPrime {
    /// Draws an element of `1, 2, 3, 5, …, next_prime_to(high)`.
    fn random_prime(&mut self, low: &BigUint, high: &BigUint) -> Result<BigUint>;
}

impl<R: Rng> RandPrime for R {
    fn random_prime(&mut self, low: &BigUint, high: &BigUint) -> Result<BigUint> {
        random_prime(self, low, high)
    }
}

/// Draws a prime by listing every prime from the sentinel `1` up to the first
/// one above `high`, then picking one with [`pick_inclusive`].
///
/// `_low` does not bound the list; the sentinel `1` and every prime below
/// `_low` stay possible results.
pub fn random_prime<R: Rng>(rng: &mut R, _low: &BigUint, high: &BigUint) -> Result<BigUint> {
    let mut last = BigUint::one();
    let mut primes = vec![last.clone()];

    while &last <= high {
        last = next_prime_to(&last);
        info!("Generating primes... {}/{}", last, high);
        primes.push(last.clone());
    }

    pick_inclusive(rng, primes)
}

/// Picks `candidates[i]` for `i` drawn uniformly from `0..=len`.
///
/// The range is one wider than the list: drawing `len` is reported as
/// [`Error::IndexOutOfRange`] and never clamped.
pub fn pick_inclusive<R: Rng>(rng: &mut R, mut candidates: Vec<BigUint>) -> Result<BigUint> {
    let len = candidates.len();
    let index = rng.gen_range(0..=len);

    if index < len {
        Ok(candidates.swap_remove(index))
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}
