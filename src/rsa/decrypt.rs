// RSA Decryption Implementation
// Inverse operations: private-key decryption and public-key signature recovery

use super::bigint::{mod_pow, RsaBigInt};
use super::encrypt::check_block;
use super::keygen::{RsaPrivateKey, RsaPublicKey};
use crate::error::Result;

/// Decrypt a ciphertext block with the recipient's private key: m = c^d mod n
pub fn decrypt_block(c: &RsaBigInt, private_key: &RsaPrivateKey) -> Result<RsaBigInt> {
    check_block(c, &private_key.n)?;
    Ok(mod_pow(c, &private_key.d, &private_key.n))
}

/// Recover the signed value with the sender's public key: s^e mod n
///
/// Never fails. A signature made under a different key still yields some
/// residue; deciding whether it is the expected token is the verifier's job.
pub fn recover_signed_block(signature: &RsaBigInt, public_key: &RsaPublicKey) -> RsaBigInt {
    mod_pow(signature, &public_key.e, &public_key.n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::keygen::RsaKeyPair;

    #[test]
    fn test_decrypt_block() {
        let keypair = RsaKeyPair::from_primes(61, 53, 17).unwrap();
        let m = decrypt_block(&from_u64(2790), &keypair.private_key).unwrap();
        assert_eq!(m, from_u64(65));
    }

    #[test]
    fn test_decrypt_out_of_range() {
        let keypair = RsaKeyPair::from_primes(61, 53, 17).unwrap();
        let result = decrypt_block(&from_u64(4000), &keypair.private_key);
        assert!(matches!(result, Err(Error::UnrepresentableBlock { .. })));
    }

    #[test]
    fn test_roundtrip_every_block() {
        let keypair = RsaKeyPair::from_primes(61, 53, 17).unwrap();
        for m in 0..3233u64 {
            let c = keypair.public_key.encrypt(&from_u64(m)).unwrap();
            assert_eq!(keypair.private_key.decrypt(&c).unwrap(), from_u64(m));
        }
    }

    #[test]
    fn test_recover_signed_block() {
        let keypair = RsaKeyPair::from_primes(61, 53, 17).unwrap();
        let signature = keypair.private_key.sign(&from_u64(65)).unwrap();
        assert_eq!(recover_signed_block(&signature, &keypair.public_key), from_u64(65));
        assert_eq!(keypair.public_key.recover(&signature), from_u64(65));
    }

    #[test]
    fn test_recover_with_wrong_key() {
        let signer = RsaKeyPair::from_primes(61, 53, 17).unwrap();
        let other = RsaKeyPair::from_primes(89, 97, 5).unwrap();
        let signature = signer.private_key.sign(&from_u64(65)).unwrap();
        assert_ne!(other.public_key.recover(&signature), from_u64(65));
    }
}
