// RSA Error Types
// Every failure is surfaced as a value; the library never panics on a
// degenerate input

use thiserror::Error;

/// Errors that can occur during key generation and decryption
#[derive(Debug, Error)]
pub enum RsaError {
    /// The requested range contains no prime number
    #[error("no prime number in range [{min}, {max}]")]
    PrimeNotFound { min: u64, max: u64 },

    /// Prime selection failed while deriving a key pair
    #[error("key generation failed: no prime for {role} in [{min}, {max}]")]
    KeyGenerationFailed {
        role: &'static str,
        min: u64,
        max: u64,
    },

    /// Decrypted bytes do not form a valid UTF-8 string
    #[error("decrypted bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
