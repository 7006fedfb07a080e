// RSA Modular Arithmetic
// Modular exponentiation and extended Euclid on native integers

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
///
/// The modulus must fit 32 bits so that intermediate products never
/// overflow a u64.
pub fn pow_mod(base: u64, exp: u64, modulus: u64) -> u64 {
    debug_assert!(modulus > 0);
    debug_assert!(modulus <= u32::MAX as u64);

    if modulus == 1 {
        return 0;
    }

    let mut result = 1u64;
    let mut base = base % modulus;
    let mut exp = exp;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }

    result
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut a, mut b) = (a, b);
    let (mut x, mut last_x) = (0i64, 1i64);
    let (mut y, mut last_y) = (1i64, 0i64);

    while b != 0 {
        let q = a / b;
        let r = a % b;
        a = b;
        b = r;

        let next_x = last_x - q * x;
        last_x = x;
        x = next_x;

        let next_y = last_y - q * y;
        last_y = y;
        y = next_y;
    }

    (a, last_x, last_y)
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if inverse doesn't exist
pub fn mod_inverse(a: u64, m: u64) -> Option<u64> {
    let (gcd, x, _) = extended_gcd(a as i64, m as i64);

    if gcd != 1 {
        // Inverse doesn't exist
        return None;
    }

    Some(x.rem_euclid(m as i64) as u64)
}

/// Greatest common divisor
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
