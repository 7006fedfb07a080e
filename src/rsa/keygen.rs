// RSA Key Generation
// Derives a public/private key pair from two small random primes

use rand::Rng;

use super::arith::{gcd, mod_inverse};
use super::error::RsaError;
use super::prime::generate_prime;

/// Primes for p and q are drawn from this range: both fit a 16-bit
/// integer and their product fits a 32-bit integer.
pub const PRIME_MIN: u64 = 100;
pub const PRIME_MAX: u64 = 10_000;

/// RSA Public Key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: u64, // Modulus
    pub e: u64, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: u64, // Modulus (same as public)
    pub d: u64, // Private exponent
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone, Copy)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

impl RsaPublicKey {
    /// Encrypt a message using this public key
    /// Returns one ciphertext integer per plaintext byte
    pub fn encrypt(&self, plaintext: &[u8], rng: &mut impl Rng) -> Vec<u64> {
        super::encrypt::encrypt_bytes(plaintext, self, rng)
    }
}

impl RsaPrivateKey {
    /// Decrypt a ciphertext using this private key
    /// Returns plaintext as bytes
    pub fn decrypt(&self, ciphertext: &[u64]) -> Vec<u8> {
        super::decrypt::decrypt_bytes(ciphertext, self)
    }
}

/// Generate an RSA key pair
///
/// The two keys are only ever produced together, from the same pair of
/// primes; neither can be reconstructed from the other afterwards.
pub fn generate_keypair(rng: &mut impl Rng) -> Result<RsaKeyPair, RsaError> {
    loop {
        // Step 1: generate two distinct primes p and q
        let p = generate_prime(PRIME_MIN, PRIME_MAX, rng).map_err(|_| {
            RsaError::KeyGenerationFailed {
                role: "p",
                min: PRIME_MIN,
                max: PRIME_MAX,
            }
        })?;
        let q = loop {
            let q = generate_prime(PRIME_MIN, PRIME_MAX, rng).map_err(|_| {
                RsaError::KeyGenerationFailed {
                    role: "q",
                    min: PRIME_MIN,
                    max: PRIME_MAX,
                }
            })?;
            if q != p {
                break q;
            }
        };

        // Step 2: modulus and totient
        let n = p * q;
        let phi = (p - 1) * (q - 1);

        // The padded message block occupies 16 bits, so exponentiation
        // only round-trips when the modulus exceeds u16::MAX. Small
        // products are discarded and generation restarts.
        if n <= u16::MAX as u64 {
            continue;
        }

        // Step 3: public exponent e, a prime in (n/3, phi] coprime to phi.
        // A prime e can still divide phi, so the gcd is checked explicitly
        // and e is re-drawn on a collision.
        let e = loop {
            let e = generate_prime(n / 3 + 1, phi, rng).map_err(|_| {
                RsaError::KeyGenerationFailed {
                    role: "public exponent",
                    min: n / 3 + 1,
                    max: phi,
                }
            })?;
            if gcd(e, phi) == 1 {
                break e;
            }
        };

        // Step 4: private exponent d = e^(-1) mod phi.
        // The gcd check above guarantees the inverse exists.
        let d = match mod_inverse(e, phi) {
            Some(d) => d,
            None => continue,
        };

        return Ok(RsaKeyPair {
            public_key: RsaPublicKey { n, e },
            private_key: RsaPrivateKey { n, d },
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::arith::pow_mod;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_keys_share_modulus() {
        let mut rng = StdRng::seed_from_u64(42);
        let keypair = generate_keypair(&mut rng).unwrap();

        assert_eq!(keypair.public_key.n, keypair.private_key.n);
        assert!(keypair.public_key.n > u16::MAX as u64);
        assert!(keypair.public_key.n <= PRIME_MAX * PRIME_MAX);
    }

    #[test]
    fn test_exponents_invert_each_other() {
        let mut rng = StdRng::seed_from_u64(1);
        let keypair = generate_keypair(&mut rng).unwrap();
        let RsaPublicKey { n, e } = keypair.public_key;
        let d = keypair.private_key.d;

        for t in [0u64, 1, 2, 255, 4242, u16::MAX as u64] {
            let c = pow_mod(t, e, n);
            assert_eq!(pow_mod(c, d, n), t, "t = {} did not round-trip", t);
        }
    }

    #[test]
    fn test_repeated_generation_succeeds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..3 {
            assert!(generate_keypair(&mut rng).is_ok());
        }
    }
}
