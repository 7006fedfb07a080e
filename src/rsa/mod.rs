// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod arith;
pub mod error;
pub mod prime;
pub mod keygen;
pub mod encrypt;
pub mod decrypt;
pub mod padding;

pub use error::RsaError;
pub use keygen::{generate_keypair, RsaKeyPair, RsaPublicKey, RsaPrivateKey};
pub use encrypt::{encrypt_bytes, encrypt_string};
pub use decrypt::{decrypt_bytes, decrypt_to_string};
pub use prime::generate_prime;
