//! Useful algorithms related to RSA.

pub mod generate;
pub mod rsa;
