// Prime Generation
// Sieve of Eratosthenes with a random starting point inside the range

use rand::Rng;

use super::error::RsaError;

/// Build an "is composite" sieve covering [0, max]
/// 0 and 1 are marked composite explicitly
fn composite_sieve(max: usize) -> Vec<bool> {
    let mut sieve = vec![false; max + 1];
    sieve[0] = true;
    if max >= 1 {
        sieve[1] = true;
    }

    for i in 2..=max / 2 + 1 {
        if sieve[i] {
            continue;
        }
        let mut j = i * 2;
        while j <= max {
            sieve[j] = true;
            j += i;
        }
    }

    sieve
}

/// Generate a random prime within [min, max]
///
/// Picks a uniformly random point in the range and probes outward in both
/// directions, so results cluster near the random seed instead of near the
/// start of the range. Memory use is O(max), which is acceptable at the
/// toy key sizes this crate targets.
///
/// Fails with `PrimeNotFound` when the range is empty or contains no prime.
pub fn generate_prime(min: u64, max: u64, rng: &mut impl Rng) -> Result<u64, RsaError> {
    if min == 0 || min > max {
        return Err(RsaError::PrimeNotFound { min, max });
    }

    let sieve = composite_sieve(max as usize);

    let x = rng.gen_range(min..=max);
    let mut i = 0u64;
    loop {
        let up = x + i;
        let down = x.checked_sub(i);

        let up_in_range = up <= max;
        let down_in_range = matches!(down, Some(d) if d >= min);
        if !up_in_range && !down_in_range {
            // search exhausted both directions
            return Err(RsaError::PrimeNotFound { min, max });
        }

        if up_in_range && !sieve[up as usize] {
            return Ok(up);
        }
        if let Some(d) = down {
            if d >= min && !sieve[d as usize] {
                return Ok(d);
            }
        }

        i += 1;
    }
}
