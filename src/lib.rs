#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Layout
//!
//! - [`prime`], [`math`] and [`prime_rand`]: the number-theory kernel, all of
//!   it trial division and linear search.
//! - [`rsa_key`]: key pair generation from two drawn primes.
//! - [`encrypt`] / [`decrypt`]: one cipher unit per `char`, in the
//!   space-separated decimal wire form.
//! - [`key_check`]: round trip of [`KEY_CHECK_PLAINTEXT`] through a pair.
//! - [`key_bruteforce`]: exhaustive search for a private exponent.
//!
//! Long-running searches report progress through the [`log`] facade:
//! `Generating primes... {value}/{bound}` and
//! `Generating co-primes... {value}/{bound}` at `info`, brute-force
//! candidates at `debug`.
//!
//! ## Key generation
//!
//! ```
//! use rand::SeedableRng;
//! use textbook_rsa::{rsa_key, BigUint};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(3);
//!
//! // Draws fail on the sentinel or the out-of-range index; try a few times.
//! for _ in 0..32 {
//!     if let Ok(pair) = rsa_key(&mut rng, &BigUint::from(20u32), &BigUint::from(60u32)) {
//!         println!("{} {}", pair.public(), pair.private());
//!         break;
//!     }
//! }
//! ```

pub use num_bigint::BigUint;

mod algorithms;
mod bruteforce;
mod check;
mod cipher;
pub mod errors;
mod key;
mod keytraits;
pub mod math;
pub mod prime;
pub mod prime_rand;

pub use crate::{
    algorithms::generate::{key_pair_from_primes, rsa_key},
    algorithms::rsa::{rsa_decrypt, rsa_encrypt},
    bruteforce::{key_bruteforce, key_bruteforce_bounded, MIN_BATCH_SIZE},
    check::{key_check, KEY_CHECK_PLAINTEXT},
    cipher::{decrypt, encrypt},
    errors::{Error, Result},
    key::{Key, KeyPair, KeyRole},
    keytraits::KeyParts,
    prime_rand::RandPrime,
};
