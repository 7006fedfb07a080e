// Demonstration driver
// Generates a key pair, encrypts a sample string, decrypts it back and
// reports whether the round trip matched

use std::process;

use anyhow::{bail, Context, Result};
use rand::thread_rng;

use rsa_demo::rsa::{decrypt_to_string, encrypt_string, generate_keypair};

const SAMPLE_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
     sed do eiusmod tempor incididunt ut labore et dolore magna aliqua";

fn run() -> Result<()> {
    let mut rng = thread_rng();

    let keypair = generate_keypair(&mut rng).context("failed to generate key pair")?;
    println!(
        "Private key: {:?}, public key: {:?}",
        keypair.private_key, keypair.public_key
    );

    let ciphertext = encrypt_string(SAMPLE_TEXT, &keypair.public_key, &mut rng);
    let decrypted = decrypt_to_string(&ciphertext, &keypair.private_key)
        .context("failed to decrypt ciphertext")?;
    println!("Decrypted plaintext: {}", decrypted);

    if decrypted != SAMPLE_TEXT {
        bail!("decrypted plaintext does not match the original");
    }
    println!("It works!");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error running demo: {:#}", e);
        process::exit(1);
    }
}
