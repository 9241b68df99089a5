//! Recovery of a private exponent by exhaustive search.
//!
//! Candidates are probed in batches starting from a cursor. Each batch covers
//! `batch_size - 1` exponents and the cursor then advances by `batch_size`, so
//! every `batch_size`-th exponent is never probed.

use log::{debug, log_enabled, Level};
use num_bigint::BigUint;

use crate::check::{key_check, KEY_CHECK_PLAINTEXT};
use crate::cipher::{decrypt, encrypt};
use crate::errors::{Error, Result};
use crate::key::Key;
use crate::keytraits::KeyParts;

/// Smallest batch size accepted by [`key_bruteforce`].
pub const MIN_BATCH_SIZE: usize = 5;

/// Searches for the private exponent matching `public`, starting at `start`.
///
/// Returns the first batch hit as `(private, n, d)`. There is no upper bound:
/// if no exponent matches, this never returns. See
/// [`key_bruteforce_bounded`] for a search that gives up.
pub fn key_bruteforce(start: &BigUint, batch_size: usize, public: &Key) -> Result<Key> {
    check_batch_size(batch_size)?;

    let step = BigUint::from(batch_size as u64);
    let mut cursor = start.clone();
    loop {
        if let Some(d) = probe_batch(&cursor, batch_size, public) {
            return Ok(Key::private_for(public, d));
        }
        cursor += &step;
    }
}

/// Same search as [`key_bruteforce`], abandoned with `Ok(None)` once the
/// cursor passes `limit`.
pub fn key_bruteforce_bounded(
    start: &BigUint,
    batch_size: usize,
    public: &Key,
    limit: &BigUint,
) -> Result<Option<Key>> {
    check_batch_size(batch_size)?;

    let step = BigUint::from(batch_size as u64);
    let mut cursor = start.clone();
    while &cursor <= limit {
        if let Some(d) = probe_batch(&cursor, batch_size, public) {
            return Ok(Some(Key::private_for(public, d)));
        }
        cursor += &step;
    }

    Ok(None)
}

fn check_batch_size(batch_size: usize) -> Result<()> {
    if batch_size < MIN_BATCH_SIZE {
        return Err(Error::InvalidBatchSize {
            min: MIN_BATCH_SIZE,
            actual: batch_size,
        });
    }
    Ok(())
}

/// Probes `cursor .. cursor + batch_size - 1` and returns the first exponent
/// that passes [`key_check`]. Every candidate in the batch is probed.
fn probe_batch(cursor: &BigUint, batch_size: usize, public: &Key) -> Option<BigUint> {
    let probe = if log_enabled!(Level::Debug) {
        encrypt(KEY_CHECK_PLAINTEXT, public).ok()
    } else {
        None
    };

    let hits: Vec<bool> = (0..batch_size - 1)
        .map(|offset| {
            let candidate = Key::private_for(public, cursor + BigUint::from(offset as u64));
            if let Some(cipher_text) = &probe {
                log_candidate(cipher_text, &candidate);
            }
            key_check(public, &candidate)
        })
        .collect();

    hits.iter()
        .position(|&hit| hit)
        .map(|index| cursor + BigUint::from(index as u64))
}

/// Logs what `candidate` makes of the probe. Failed decryptions are dropped.
fn log_candidate(cipher_text: &str, candidate: &Key) {
    if let Ok(plain_text) = decrypt(cipher_text, candidate) {
        debug!("{}: {}", candidate.exponent(), plain_text);
    }
}
