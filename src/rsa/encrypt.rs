// RSA Encryption Implementation
// Raw textbook RSA on a single block, no padding

use super::bigint::{mod_pow, RsaBigInt};
use super::keygen::{RsaPrivateKey, RsaPublicKey};
use crate::error::{Error, Result};

/// A block must be strictly below the modulus to survive exponentiation.
pub(crate) fn check_block(value: &RsaBigInt, modulus: &RsaBigInt) -> Result<()> {
    if value >= modulus {
        return Err(Error::UnrepresentableBlock {
            value: value.clone(),
            modulus: modulus.clone(),
        });
    }
    Ok(())
}

/// Encrypt a block under the recipient's public key: c = m^e mod n
pub fn encrypt_block(m: &RsaBigInt, public_key: &RsaPublicKey) -> Result<RsaBigInt> {
    check_block(m, &public_key.n)?;
    Ok(mod_pow(m, &public_key.e, &public_key.n))
}

/// Sign a block with the sender's private key: s = m^d mod n
pub fn sign_block(m: &RsaBigInt, private_key: &RsaPrivateKey) -> Result<RsaBigInt> {
    check_block(m, &private_key.n)?;
    Ok(mod_pow(m, &private_key.d, &private_key.n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::keygen::RsaKeyPair;

    #[test]
    fn test_encrypt_block() {
        let keypair = RsaKeyPair::from_primes(61, 53, 17).unwrap();
        let c = encrypt_block(&from_u64(65), &keypair.public_key).unwrap();
        assert_eq!(c, from_u64(2790));
    }

    #[test]
    fn test_encrypt_too_large() {
        let keypair = RsaKeyPair::from_primes(61, 53, 17).unwrap();
        let result = encrypt_block(&from_u64(3233), &keypair.public_key);
        assert!(matches!(result, Err(Error::UnrepresentableBlock { .. })));
    }

    #[test]
    fn test_sign_block() {
        let keypair = RsaKeyPair::from_primes(61, 53, 17).unwrap();
        let signature = sign_block(&from_u64(65), &keypair.private_key).unwrap();
        assert_eq!(mod_pow(&signature, &from_u64(17), &from_u64(3233)), from_u64(65));
    }

    #[test]
    fn test_sign_too_large() {
        let keypair = RsaKeyPair::from_primes(61, 53, 17).unwrap();
        assert!(sign_block(&from_u64(5000), &keypair.private_key).is_err());
    }
}
