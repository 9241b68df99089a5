//! Key pair validation.

use crate::cipher::{decrypt, encrypt};
use crate::keytraits::KeyParts;

/// Phrase encrypted and decrypted by [`key_check`].
pub const KEY_CHECK_PLAINTEXT: &str = "Hello, world!";

/// Reports whether `private` decrypts what `public` encrypts, using
/// [`KEY_CHECK_PLAINTEXT`] as the probe.
///
/// A cipher error on either side counts as a mismatch.
pub fn key_check<P, S>(public: &P, private: &S) -> bool
where
    P: KeyParts + ?Sized,
    S: KeyParts + ?Sized,
{
    encrypt(KEY_CHECK_PLAINTEXT, public)
        .and_then(|cipher_text| decrypt(&cipher_text, private))
        .map_or(false, |plain_text| plain_text == KEY_CHECK_PLAINTEXT)
}
