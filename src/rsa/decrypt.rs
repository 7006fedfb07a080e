// RSA Decryption
// Inverse of the per-byte codec: exponentiate, then strip the padding

use super::arith::pow_mod;
use super::error::RsaError;
use super::keygen::RsaPrivateKey;
use super::padding::unpad_byte;

/// Decrypt ciphertext integers using an RSA private key
/// Returns plaintext as bytes, one per ciphertext integer
///
/// There is no error path here: a ciphertext integer outside the expected
/// range decodes to a garbage byte rather than a detected failure.
pub fn decrypt_bytes(ciphertext: &[u64], private_key: &RsaPrivateKey) -> Vec<u8> {
    ciphertext
        .iter()
        .map(|&c| {
            let t = pow_mod(c, private_key.d, private_key.n);
            unpad_byte(t as u16)
        })
        .collect()
}

/// Decrypt ciphertext to a string
/// Fails if the decrypted bytes are not valid UTF-8
pub fn decrypt_to_string(
    ciphertext: &[u64],
    private_key: &RsaPrivateKey,
) -> Result<String, RsaError> {
    let plaintext = decrypt_bytes(ciphertext, private_key);
    Ok(String::from_utf8(plaintext)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::encrypt::encrypt_bytes;
    use crate::rsa::keygen::RsaPublicKey;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // p = 257, q = 263
    const PUBLIC: RsaPublicKey = RsaPublicKey { n: 67591, e: 60457 };
    const PRIVATE: RsaPrivateKey = RsaPrivateKey { n: 67591, d: 62489 };

    #[test]
    fn test_decrypt_round_trip() {
        let mut rng = StdRng::seed_from_u64(20);
        let message = b"Hello, RSA!";

        let ciphertext = encrypt_bytes(message, &PUBLIC, &mut rng);
        assert_eq!(decrypt_bytes(&ciphertext, &PRIVATE), message);
    }

    #[test]
    fn test_decrypt_to_string() {
        let mut rng = StdRng::seed_from_u64(21);
        let message = "Test message for RSA decryption";

        let ciphertext = encrypt_bytes(message.as_bytes(), &PUBLIC, &mut rng);
        let decrypted = decrypt_to_string(&ciphertext, &PRIVATE).unwrap();

        assert_eq!(message, decrypted);
    }

    #[test]
    fn test_non_utf8_plaintext_is_rejected_by_string_wrapper() {
        let mut rng = StdRng::seed_from_u64(22);
        // valid round trip at the byte level, but not valid UTF-8
        let message = [0xff, 0xfe];

        let ciphertext = encrypt_bytes(&message, &PUBLIC, &mut rng);
        assert_eq!(decrypt_bytes(&ciphertext, &PRIVATE), message);

        let err = decrypt_to_string(&ciphertext, &PRIVATE).unwrap_err();
        assert!(matches!(err, RsaError::InvalidUtf8(_)));
    }

    #[test]
    fn test_out_of_range_ciphertext_yields_garbage_not_panic() {
        // larger than any value encrypt can emit
        let bytes = decrypt_bytes(&[PRIVATE.n + 1, u32::MAX as u64], &PRIVATE);
        assert_eq!(bytes.len(), 2);
    }

    #[test]
    fn test_decrypt_preserves_byte_order() {
        let mut rng = StdRng::seed_from_u64(23);
        let message = b"abcdef";

        let mut ciphertext = encrypt_bytes(message, &PUBLIC, &mut rng);
        ciphertext.reverse();

        let mut reversed = decrypt_bytes(&ciphertext, &PRIVATE);
        reversed.reverse();
        assert_eq!(reversed, message);
    }
}
