//! Generates a small key pair, then repeats the reference run: round trip
//! with fixed keys, key check, and recovery of the private exponent.
//!
//! `RUST_LOG=info` shows the prime and coprime search, `RUST_LOG=debug`
//! every brute-force candidate.

use textbook_rsa::{decrypt, encrypt, key_bruteforce, key_check, rsa_key, BigUint, Key};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let mut rng = rand::thread_rng();

    match rsa_key(&mut rng, &BigUint::from(50u32), &BigUint::from(200u32)) {
        Ok(pair) => {
            println!("generated {} {}", pair.public(), pair.private());
            println!("key check: {}", key_check(pair.public(), pair.private()));
        }
        Err(err) => println!("key generation failed: {}", err),
    }

    let n = BigUint::from(292_547u32);
    let public = Key::public(n.clone(), BigUint::from(32_807u32));
    let private = Key::private(n, BigUint::from(13_163u32));

    let cipher_text = encrypt("Hello, world", &public)?;
    println!("{}", cipher_text);
    println!("{}", decrypt(&cipher_text, &private)?);
    println!("{}", key_check(&public, &private));

    println!("{}", key_bruteforce(&BigUint::from(13_000u32), 5, &public)?);

    Ok(())
}
