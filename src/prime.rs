//! Trial-division primality.
//!
//! Every routine here walks the integers one by one. Cost is linear in the
//! input, so keep the inputs small.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

/// Returns every positive divisor of `num`, ascending, by testing each
/// integer in `1..=num`. `factor(0)` is empty.
pub fn factor(num: &BigUint) -> Vec<BigUint> {
    let one = BigUint::one();
    let mut factors = Vec::new();
    let mut i = one.clone();

    while &i <= num {
        if num.is_multiple_of(&i) {
            factors.push(i.clone());
        }
        i += &one;
    }

    factors
}

/// Reports whether `num` is prime, i.e. its only divisors are `1` and itself.
pub fn is_prime(num: &BigUint) -> bool {
    if num <= &BigUint::one() {
        return false;
    }

    let factors = factor(num);
    factors.len() == 2 && factors[0].is_one() && &factors[1] == num
}

/// Returns the smallest prime strictly greater than `num`.
pub fn next_prime_to(num: &BigUint) -> BigUint {
    let one = BigUint::one();
    let mut candidate = num + &one;

    while !is_prime(&candidate) {
        candidate += &one;
    }

    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;

    fn sieve(limit: usize) -> Vec<bool> {
        let mut is_prime = vec![true; limit + 1];
        is_prime[0] = false;
        is_prime[1] = false;
        let mut i = 2;
        while i * i <= limit {
            if is_prime[i] {
                let mut j = i * i;
                while j <= limit {
                    is_prime[j] = false;
                    j += i;
                }
            }
            i += 1;
        }
        is_prime
    }

    #[test]
    fn test_factor() {
        let factors: Vec<u64> = factor(&BigUint::from(292_547u32))
            .iter()
            .map(|f| f.to_u64().unwrap())
            .collect();
        assert_eq!(factors, vec![1, 31, 9437, 292_547]);

        let factors: Vec<u64> = factor(&BigUint::from(12u32))
            .iter()
            .map(|f| f.to_u64().unwrap())
            .collect();
        assert_eq!(factors, vec![1, 2, 3, 4, 6, 12]);

        assert_eq!(factor(&BigUint::one()), vec![BigUint::one()]);
        assert!(factor(&BigUint::from(0u32)).is_empty());
    }

    #[test]
    fn test_is_prime_matches_sieve() {
        let expected = sieve(1000);
        for (n, &prime) in expected.iter().enumerate() {
            assert_eq!(
                is_prime(&BigUint::from(n as u64)),
                prime,
                "is_prime({}) disagrees with the sieve",
                n
            );
        }
    }

    #[test]
    fn test_next_prime_to() {
        let primes = sieve(1100);
        for n in 0..1000usize {
            let expected = (n + 1..).find(|&c| primes[c]).unwrap();
            assert_eq!(
                next_prime_to(&BigUint::from(n as u64)),
                BigUint::from(expected as u64),
                "next_prime_to({})",
                n
            );
        }
    }
}
