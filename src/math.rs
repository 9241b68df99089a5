//! Greatest common factor, Carmichael value, coprime search and modular inverse.

use core::mem;

use log::info;
use num_bigint::Sign::Plus;
use num_bigint::{BigInt, BigUint, ToBigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::errors::{Error, Result};

/// Greatest common factor of `a` and `b`, found by counting down from
/// `min(a, b)` until a value divides both.
///
/// Returns `1` when nothing larger is shared. When either input is zero the
/// countdown never starts and `0` is returned.
pub fn gcf(a: &BigUint, b: &BigUint) -> BigUint {
    let one = BigUint::one();
    let mut x = core::cmp::min(a, b).clone();

    while x > one {
        if a.is_multiple_of(&x) && b.is_multiple_of(&x) {
            break;
        }
        x -= &one;
    }

    x
}

/// Least common multiple, `a * b / gcf(a, b)`.
pub fn lcm(a: &BigUint, b: &BigUint) -> Result<BigUint> {
    let divisor = gcf(a, b);
    if divisor.is_zero() {
        return Err(Error::DivisionByZero);
    }

    Ok((a * b) / divisor)
}

/// Carmichael value `λ = lcm(p - 1, q - 1)` of the primes behind a modulus.
pub fn carmichael(p: &BigUint, q: &BigUint) -> Result<BigUint> {
    if p.is_zero() || q.is_zero() {
        return Err(Error::InvalidPrime);
    }

    let one = BigUint::one();
    lcm(&(p - &one), &(q - &one))
}

/// Reports whether `a` and `b` share no factor other than `1`.
pub fn is_coprime(a: &BigUint, b: &BigUint) -> bool {
    gcf(a, b).is_one()
}

/// Returns the smallest integer strictly greater than `num` that is coprime
/// to `reference`.
pub fn next_coprime_to(num: &BigUint, reference: &BigUint) -> BigUint {
    let one = BigUint::one();
    let mut candidate = num + &one;

    while !is_coprime(&candidate, reference) {
        candidate += &one;
    }

    candidate
}

/// Lists the integers coprime to `reference` up to the first one above `max`.
///
/// The list starts at `2` whether or not `2` is coprime to `reference`.
pub fn generate_coprime(max: &BigUint, reference: &BigUint) -> Vec<BigUint> {
    let mut last = BigUint::from(2u32);
    let mut coprimes = vec![last.clone()];

    while &last <= max {
        last = next_coprime_to(&last, reference);
        info!("Generating co-primes... {}/{}", last, max);
        coprimes.push(last.clone());
    }

    coprimes
}

/// Modular inverse of `a` modulo `m` by the iterative extended Euclidean
/// algorithm.
///
/// `mod_inverse(a, 1)` is `0`. The operands must be coprime; otherwise the
/// remainder sequence reaches zero before `a` drops to one and
/// [`Error::ModularInverseUndefined`] is returned.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    if m.is_one() {
        return Ok(BigUint::zero());
    }
    if m.is_zero() {
        return Err(Error::ModularInverseUndefined);
    }

    let m0 = BigInt::from_biguint(Plus, m.clone());
    let one = BigInt::one();

    let mut a = BigInt::from_biguint(Plus, a.clone());
    let mut m = m0.clone();
    let mut x = BigInt::one();
    let mut y = BigInt::zero();

    while a > one {
        if m.is_zero() {
            return Err(Error::ModularInverseUndefined);
        }

        let q = &a / &m;
        let r = &a % &m;
        a = mem::replace(&mut m, r);

        let next_y = &x - &q * &y;
        x = mem::replace(&mut y, next_y);
    }

    if x.is_negative() {
        x += &m0;
    }

    x.to_biguint().ok_or(Error::ModularInverseUndefined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_gcf() {
        assert_eq!(gcf(&big(12), &big(18)), big(6));
        assert_eq!(gcf(&big(7), &big(13)), big(1));
        assert_eq!(gcf(&big(30), &big(9436)), big(2));
        assert_eq!(gcf(&big(0), &big(5)), big(0));

        for a in 1..60u64 {
            for b in 1..60u64 {
                let g = gcf(&big(a), &big(b));
                assert!(big(a).is_multiple_of(&g) && big(b).is_multiple_of(&g));
                assert_eq!(g, big(a).gcd(&big(b)), "gcf({}, {})", a, b);
            }
        }
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(&big(4), &big(6)).unwrap(), big(12));
        assert_eq!(lcm(&big(60), &big(52)).unwrap(), big(780));
        assert_eq!(lcm(&big(0), &big(12)), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_carmichael() {
        assert_eq!(carmichael(&big(13), &big(23)).unwrap(), big(132));
        assert_eq!(carmichael(&big(61), &big(53)).unwrap(), big(780));
        assert_eq!(carmichael(&big(31), &big(9437)).unwrap(), big(141_540));

        let primes = [2u64, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
        for &p in &primes {
            for &q in &primes {
                let expected = big(p - 1).lcm(&big(q - 1));
                assert_eq!(carmichael(&big(p), &big(q)).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_carmichael_degenerate() {
        // The sentinel `1` has no predecessor with a usable gcf.
        assert_eq!(carmichael(&big(1), &big(23)), Err(Error::DivisionByZero));
        assert_eq!(carmichael(&big(0), &big(23)), Err(Error::InvalidPrime));
    }

    #[test]
    fn test_coprime() {
        assert!(is_coprime(&big(17), &big(3120)));
        assert!(!is_coprime(&big(2), &big(3120)));
        assert_eq!(next_coprime_to(&big(2), &big(12)), big(5));
        assert_eq!(next_coprime_to(&big(11), &big(12)), big(13));
    }

    #[test]
    fn test_generate_coprime() {
        let coprimes: Vec<u64> = generate_coprime(&big(12), &big(12))
            .iter()
            .map(|c| c.to_u64().unwrap())
            .collect();
        assert_eq!(coprimes, vec![2, 5, 7, 11, 13]);

        let coprimes = generate_coprime(&big(1), &big(12));
        assert_eq!(coprimes, vec![big(2)]);
    }

    #[test]
    fn test_mod_inverse() {
        assert_eq!(mod_inverse(&big(17), &big(3120)).unwrap(), big(2753));
        assert_eq!(mod_inverse(&big(3), &big(11)).unwrap(), big(4));
        assert_eq!(mod_inverse(&big(32_807), &big(141_540)).unwrap(), big(13_163));

        // exhaustive tests for small numbers
        for n in 2..100u64 {
            let modulus = big(n);
            for x in 1..n {
                let element = big(x);
                if !element.gcd(&modulus).is_one() {
                    continue;
                }

                let inverse = mod_inverse(&element, &modulus).unwrap();
                let cmp = (&inverse * &element) % &modulus;
                assert!(
                    cmp.is_one(),
                    "mod_inverse({}, {})*{}%{}={}, not 1",
                    &element,
                    &modulus,
                    &element,
                    &modulus,
                    &cmp
                );
            }
        }
    }

    #[test]
    fn test_mod_inverse_modulus_one() {
        for a in 0..20u64 {
            assert_eq!(mod_inverse(&big(a), &big(1)).unwrap(), big(0));
        }
    }

    #[test]
    fn test_mod_inverse_undefined() {
        assert_eq!(
            mod_inverse(&big(2), &big(4)),
            Err(Error::ModularInverseUndefined)
        );
        assert_eq!(
            mod_inverse(&big(2), &big(780)),
            Err(Error::ModularInverseUndefined)
        );
        assert_eq!(
            mod_inverse(&big(3), &big(0)),
            Err(Error::ModularInverseUndefined)
        );
    }
}
