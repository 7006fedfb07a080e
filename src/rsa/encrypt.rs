// RSA Encryption
// Per-byte randomized padding followed by modular exponentiation

use rand::Rng;

use super::arith::pow_mod;
use super::keygen::RsaPublicKey;
use super::padding::pad_byte;

/// Encrypt bytes using an RSA public key
/// Returns one ciphertext integer per plaintext byte, in input order
///
/// Each byte is combined with a freshly drawn random pad byte before
/// exponentiation, so encrypting the same plaintext twice yields a
/// different ciphertext sequence.
pub fn encrypt_bytes(plaintext: &[u8], public_key: &RsaPublicKey, rng: &mut impl Rng) -> Vec<u64> {
    let mut res = Vec::with_capacity(plaintext.len());
    for &p in plaintext {
        let r: u8 = rng.gen();
        let t = pad_byte(p, r);
        res.push(pow_mod(t as u64, public_key.e, public_key.n));
    }
    res
}

/// Encrypt a string using an RSA public key
pub fn encrypt_string(plaintext: &str, public_key: &RsaPublicKey, rng: &mut impl Rng) -> Vec<u64> {
    encrypt_bytes(plaintext.as_bytes(), public_key, rng)
}
