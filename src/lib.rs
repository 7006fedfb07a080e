// Toy RSA library
// Key generation, randomized padding and the per-byte codec, built on
// native 64-bit integer arithmetic

pub mod rsa;

pub use rsa::{
    decrypt_bytes, decrypt_to_string, encrypt_bytes, encrypt_string, generate_keypair, RsaError,
    RsaKeyPair, RsaPrivateKey, RsaPublicKey,
};
