use core::fmt;

use num_bigint::BigUint;

use crate::keytraits::KeyParts;

/// Which half of a key pair a [`Key`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    /// Encrypting half, carries `e`.
    Public,
    /// Decrypting half, carries `d`.
    Private,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::Public => f.write_str("public"),
            KeyRole::Private => f.write_str("private"),
        }
    }
}

/// A textbook RSA key: a role, the modulus `n` and one exponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    role: KeyRole,
    n: BigUint,
    exponent: BigUint,
}

impl Key {
    /// Creates a public key `(n, e)`.
    pub fn public(n: BigUint, e: BigUint) -> Self {
        Key {
            role: KeyRole::Public,
            n,
            exponent: e,
        }
    }

    /// Creates a private key `(n, d)`.
    pub fn private(n: BigUint, d: BigUint) -> Self {
        Key {
            role: KeyRole::Private,
            n,
            exponent: d,
        }
    }

    /// Creates the private key with exponent `d` over the modulus of `public`.
    pub fn private_for(public: &impl KeyParts, d: BigUint) -> Self {
        Key::private(public.n().clone(), d)
    }

    /// Returns the role of the key.
    pub fn role(&self) -> KeyRole {
        self.role
    }
}

impl KeyParts for Key {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn exponent(&self) -> &BigUint {
        &self.exponent
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.role, self.n, self.exponent)
    }
}

/// A public and a private key over the same modulus.
///
/// The pair is not validated on construction; see [`crate::key_check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    public: Key,
    private: Key,
}

impl KeyPair {
    /// Pairs `public` with `private`.
    pub fn new(public: Key, private: Key) -> Self {
        KeyPair { public, private }
    }

    /// Returns the public key.
    pub fn public(&self) -> &Key {
        &self.public
    }

    /// Returns the private key.
    pub fn private(&self) -> &Key {
        &self.private
    }

    /// Splits the pair into `(public, private)`.
    pub fn into_parts(self) -> (Key, Key) {
        (self.public, self.private)
    }
}
