// Prime Source
// Enumerates the small primes that key pairs are drawn from

/// Trial division: `k` is prime when no integer in [2, floor(sqrt(k))] divides it.
pub fn is_prime_trial_division(k: u64) -> bool {
    if k < 2 {
        return false;
    }

    let mut divisor = 2u64;
    while divisor <= k / divisor {
        if k % divisor == 0 {
            return false;
        }
        divisor += 1;
    }

    true
}

/// Every prime in [2, bound), ascending.
///
/// A bound of 2 or less has no candidates and yields an empty list; whether
/// that list is large enough for key generation is decided by the caller.
pub fn generate_primes(bound: u64) -> Vec<u64> {
    (2..bound).filter(|&k| is_prime_trial_division(k)).collect()
}
