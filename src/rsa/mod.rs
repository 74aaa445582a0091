// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod codec;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod primes;

pub use bigint::{extended_gcd, mod_inverse, mod_pow, RsaBigInt};
pub use codec::{char_to_number, encode_message, number_to_char};
pub use decrypt::{decrypt_block, recover_signed_block};
pub use encrypt::{encrypt_block, sign_block};
pub use keygen::{get_keys, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
pub use primes::generate_primes;
