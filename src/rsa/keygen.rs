// RSA Key Generation
// Derives (e, n, d) from two distinct small primes

use num_bigint::RandBigInt;
use num_traits::{One, Zero};
use rand::Rng;

use super::bigint::{extended_gcd, from_u64, mod_inverse, RsaBigInt};
use super::primes::is_prime_trial_division;
use crate::error::{Error, Result};
use crate::util::config::ProtocolConfig;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPublicKey {
    pub n: RsaBigInt, // Modulus
    pub e: RsaBigInt, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPrivateKey {
    pub n: RsaBigInt, // Modulus (same as public)
    pub d: RsaBigInt, // Private exponent
    pub p: RsaBigInt, // First prime factor
    pub q: RsaBigInt, // Second prime factor
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

impl RsaPublicKey {
    /// Encrypt one block: m^e mod n
    pub fn encrypt(&self, m: &RsaBigInt) -> Result<RsaBigInt> {
        super::encrypt::encrypt_block(m, self)
    }

    /// Undo a signature made with the matching private key: s^e mod n
    pub fn recover(&self, signature: &RsaBigInt) -> RsaBigInt {
        super::decrypt::recover_signed_block(signature, self)
    }
}

impl RsaPrivateKey {
    /// φ(n) = (p-1)(q-1)
    pub fn totient(&self) -> RsaBigInt {
        (&self.p - 1u8) * (&self.q - 1u8)
    }

    /// Decrypt one block: c^d mod n
    pub fn decrypt(&self, c: &RsaBigInt) -> Result<RsaBigInt> {
        super::decrypt::decrypt_block(c, self)
    }

    /// Sign one block: m^d mod n
    pub fn sign(&self, m: &RsaBigInt) -> Result<RsaBigInt> {
        super::encrypt::sign_block(m, self)
    }
}

impl RsaKeyPair {
    /// Build a key pair from chosen primes and public exponent.
    ///
    /// Fails when either factor is not prime, when `p == q`, or when `e`
    /// has no inverse modulo the totient.
    pub fn from_primes(p: u64, q: u64, e: u64) -> Result<RsaKeyPair> {
        for factor in [p, q] {
            if !is_prime_trial_division(factor) {
                return Err(Error::InvalidConfig(format!("{} is not prime", factor)));
            }
        }
        if p == q {
            return Err(Error::InvalidConfig(format!("p and q must differ, both are {}", p)));
        }

        let p = from_u64(p);
        let q = from_u64(q);
        let e = from_u64(e);
        let phi_n = (&p - 1u8) * (&q - 1u8);

        let d = mod_inverse(&e, &phi_n).ok_or_else(|| Error::NoModularInverse {
            value: e.clone(),
            modulus: phi_n.clone(),
        })?;

        Ok(assemble(p, q, e, d))
    }

    pub fn modulus(&self) -> &RsaBigInt {
        &self.public_key.n
    }
}

fn assemble(p: RsaBigInt, q: RsaBigInt, e: RsaBigInt, d: RsaBigInt) -> RsaKeyPair {
    let n = &p * &q;
    RsaKeyPair {
        public_key: RsaPublicKey { n: n.clone(), e },
        private_key: RsaPrivateKey { n, d, p, q },
    }
}

/// Generate a fresh key pair from `primes`.
///
/// Both factors are drawn from indices at or above `config.min_prime_index`.
/// The public exponent is sampled from [2, φ] until the extended Euclidean
/// algorithm reports gcd 1 together with a positive coefficient for `e`,
/// which becomes `d`. Sampling stops after `config.max_exponent_attempts`.
pub fn get_keys<R: Rng + ?Sized>(
    primes: &[u64],
    config: &ProtocolConfig,
    rng: &mut R,
) -> Result<RsaKeyPair> {
    let (p, q) = choose_two_primes(primes, config, rng)?;
    let p = from_u64(p);
    let q = from_u64(q);
    let (e, d) = generate_e_and_d(&p, &q, config.max_exponent_attempts, rng)?;

    Ok(assemble(p, q, e, d))
}

/// Pick two distinct primes, redrawing the second index until it differs from the first.
fn choose_two_primes<R: Rng + ?Sized>(
    primes: &[u64],
    config: &ProtocolConfig,
    rng: &mut R,
) -> Result<(u64, u64)> {
    let min_index = config.min_prime_index;
    if primes.len() < min_index.saturating_add(2) {
        return Err(Error::PrimalityRange {
            bound: config.prime_bound,
            available: primes.len(),
            min_index,
        });
    }

    let p_idx = rng.gen_range(min_index..primes.len());
    let mut q_idx = rng.gen_range(min_index..primes.len());
    while q_idx == p_idx {
        q_idx = rng.gen_range(min_index..primes.len());
    }

    Ok((primes[p_idx], primes[q_idx]))
}

fn generate_e_and_d<R: Rng + ?Sized>(
    p: &RsaBigInt,
    q: &RsaBigInt,
    max_attempts: u32,
    rng: &mut R,
) -> Result<(RsaBigInt, RsaBigInt)> {
    let totient = (p - 1u8) * (q - 1u8);
    let lower = from_u64(2);
    let upper = &totient + 1u8;

    if lower < upper {
        for _ in 0..max_attempts {
            let e = rng.gen_biguint_range(&lower, &upper);
            let (gcd, coeff_e, _) = extended_gcd(&e, &totient);
            if !gcd.is_one() {
                continue;
            }
            // Negative coefficients convert to None and are resampled.
            if let Some(d) = coeff_e.to_biguint().filter(|d| !d.is_zero()) {
                return Ok((e, d));
            }
        }
    }

    Err(Error::KeyGenerationRetryExhausted {
        totient,
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::primes::generate_primes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn default_primes() -> Vec<u64> {
        generate_primes(1000)
    }

    #[test]
    fn test_key_generation() {
        let mut rng = StdRng::seed_from_u64(1);
        let keypair = get_keys(&default_primes(), &ProtocolConfig::default(), &mut rng).unwrap();

        assert!(keypair.public_key.n > from_u64(0));
        assert!(keypair.private_key.d > from_u64(0));
        assert_eq!(keypair.public_key.n, keypair.private_key.n);
        assert_eq!(keypair.modulus(), &keypair.public_key.n);
    }

    #[test]
    fn test_key_properties() {
        let primes = default_primes();
        let config = ProtocolConfig::default();
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..200 {
            let keypair = get_keys(&primes, &config, &mut rng).unwrap();
            let private_key = &keypair.private_key;

            // Verify n = p * q with distinct factors above the minimum index
            assert_ne!(private_key.p, private_key.q);
            assert!(private_key.p >= from_u64(73));
            assert!(private_key.q >= from_u64(73));
            assert_eq!(private_key.n, &private_key.p * &private_key.q);

            // Verify e * d ≡ 1 (mod φ(n)) and 2 <= e <= φ(n)
            let phi_n = private_key.totient();
            let e = &keypair.public_key.e;
            assert!(e >= &from_u64(2) && e <= &phi_n);
            assert_eq!((e * &private_key.d) % &phi_n, from_u64(1));
        }
    }

    #[test]
    fn test_key_encrypt_decrypt() {
        let primes = default_primes();
        let config = ProtocolConfig::default();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            let keypair = get_keys(&primes, &config, &mut rng).unwrap();
            let n = keypair.modulus().clone();
            for _ in 0..25 {
                let m = rng.gen_biguint_below(&n);
                let c = keypair.public_key.encrypt(&m).unwrap();
                assert!(c < n);
                assert_eq!(keypair.private_key.decrypt(&c).unwrap(), m);
            }
        }
    }

    #[test]
    fn test_same_seed_same_keys() {
        let primes = default_primes();
        let config = ProtocolConfig::default();

        let first = get_keys(&primes, &config, &mut StdRng::seed_from_u64(9)).unwrap();
        let second = get_keys(&primes, &config, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(first.public_key, second.public_key);
        assert_eq!(first.private_key, second.private_key);
    }

    #[test]
    fn test_primality_range_error() {
        let primes = generate_primes(80); // 22 primes, only indices 20 and 21 qualify
        let config = ProtocolConfig::default();
        let mut rng = StdRng::seed_from_u64(4);
        assert!(get_keys(&primes, &config, &mut rng).is_ok());

        let primes = generate_primes(75); // 21 primes
        let result = get_keys(&primes, &config, &mut rng);
        assert!(matches!(
            result,
            Err(Error::PrimalityRange { available: 21, min_index: 20, .. })
        ));
    }

    #[test]
    fn test_retry_exhausted() {
        // p = 2, q = 3 leaves φ = 2, and e = 2 is never coprime to it
        let primes = generate_primes(4);
        let config = ProtocolConfig::default()
            .with_prime_bound(4)
            .with_min_prime_index(0)
            .with_max_exponent_attempts(50);
        let mut rng = StdRng::seed_from_u64(5);

        match get_keys(&primes, &config, &mut rng) {
            Err(Error::KeyGenerationRetryExhausted { totient, attempts }) => {
                assert_eq!(totient, from_u64(2));
                assert_eq!(attempts, 50);
            }
            other => panic!("expected retry exhaustion, got {:?}", other),
        }
    }

    #[test]
    fn test_from_primes_textbook() {
        let keypair = RsaKeyPair::from_primes(61, 53, 17).unwrap();
        assert_eq!(keypair.public_key.n, from_u64(3233));
        assert_eq!(keypair.private_key.d, from_u64(2753));

        let c = keypair.public_key.encrypt(&from_u64(65)).unwrap();
        assert_eq!(c, from_u64(2790));
        assert_eq!(keypair.private_key.decrypt(&c).unwrap(), from_u64(65));
    }

    #[test]
    fn test_from_primes_rejects_bad_input() {
        assert!(matches!(
            RsaKeyPair::from_primes(61, 61, 17),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            RsaKeyPair::from_primes(60, 53, 17),
            Err(Error::InvalidConfig(_))
        ));
        // φ(3233) = 3120 shares the factor 3 with e
        assert!(matches!(
            RsaKeyPair::from_primes(61, 53, 3),
            Err(Error::NoModularInverse { .. })
        ));
    }
}
