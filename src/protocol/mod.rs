// Message Protocol
// Per-character encrypt-and-sign on the sender side, verify-and-decrypt on the receiver side

pub mod block;

pub use block::SealedBlock;

use rand::Rng;

use crate::error::{Error, Result};
use crate::rsa::{
    char_to_number, decrypt_block, encode_message, encrypt_block, generate_primes, get_keys,
    number_to_char, recover_signed_block, sign_block, RsaBigInt, RsaKeyPair, RsaPrivateKey,
    RsaPublicKey,
};
use crate::util::config::ProtocolConfig;

/// Sender side of one block.
///
/// `m` is encrypted under the recipient's public key and `identity_token`
/// is signed with the sender's private key.
pub fn seal_block(
    m: &RsaBigInt,
    identity_token: &RsaBigInt,
    sender: &RsaPrivateKey,
    recipient: &RsaPublicKey,
) -> Result<SealedBlock> {
    let ciphertext = encrypt_block(m, recipient)?;
    let signature = sign_block(identity_token, sender)?;
    Ok(SealedBlock {
        ciphertext,
        signature,
    })
}

/// Accept the signature only if it recovers to exactly `identity` under the
/// sender's public key. A residue that is not valid text counts as a mismatch.
pub fn verify_signature(signature: &RsaBigInt, identity: char, sender: &RsaPublicKey) -> Result<()> {
    let recovered = recover_signed_block(signature, sender);
    match number_to_char(&recovered) {
        Ok(token) if token == identity => Ok(()),
        _ => Err(Error::SignatureVerification),
    }
}

/// Receiver side of one block. Nothing is decrypted unless the signature verifies.
pub fn open_block(
    block: &SealedBlock,
    identity: char,
    sender: &RsaPublicKey,
    recipient: &RsaPrivateKey,
) -> Result<char> {
    verify_signature(&block.signature, identity, sender)?;
    let plain = decrypt_block(&block.ciphertext, recipient)?;
    number_to_char(&plain)
}

/// Everything observed during one message: the public blocks in order and
/// the receiver's reassembled plaintext.
#[derive(Debug, Clone)]
pub struct Transmission {
    pub blocks: Vec<SealedBlock>,
    pub decoded: String,
}

/// Drives a message from sender to receiver, one character per block, with
/// fresh key pairs for both parties on every block.
#[derive(Debug, Clone)]
pub struct Protocol {
    config: ProtocolConfig,
    primes: Vec<u64>,
}

impl Protocol {
    pub fn new(config: ProtocolConfig) -> Result<Self> {
        config.validate()?;

        let primes = generate_primes(config.prime_bound);
        if primes.len() < config.min_prime_index.saturating_add(2) {
            return Err(Error::PrimalityRange {
                bound: config.prime_bound,
                available: primes.len(),
                min_index: config.min_prime_index,
            });
        }

        Ok(Self { config, primes })
    }

    pub fn config(&self) -> &ProtocolConfig {
        &self.config
    }

    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    pub fn generate_keys<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RsaKeyPair> {
        get_keys(&self.primes, &self.config, rng)
    }

    /// Send `message` and return what crossed the wire plus what the receiver decoded.
    ///
    /// The first failing block aborts the whole message; the error carries
    /// the block's index.
    pub fn transmit<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> Result<Transmission> {
        let identity_token = char_to_number(self.config.sender_identity);
        let blocks = encode_message(message);

        let mut transmission = Transmission {
            blocks: Vec::with_capacity(blocks.len()),
            decoded: String::with_capacity(message.len()),
        };

        for (index, m) in blocks.iter().enumerate() {
            let (block, character) = self
                .transmit_block(m, &identity_token, rng)
                .map_err(|e| Error::at_block(index, e))?;
            transmission.blocks.push(block);
            transmission.decoded.push(character);
        }

        Ok(transmission)
    }

    fn transmit_block<R: Rng + ?Sized>(
        &self,
        m: &RsaBigInt,
        identity_token: &RsaBigInt,
        rng: &mut R,
    ) -> Result<(SealedBlock, char)> {
        let alice = self.generate_keys(rng)?;
        let bob = self.generate_keys(rng)?;

        let block = seal_block(m, identity_token, &alice.private_key, &bob.public_key)?;
        let character = open_block(
            &block,
            self.config.sender_identity,
            &alice.public_key,
            &bob.private_key,
        )?;

        Ok((block, character))
    }
}
