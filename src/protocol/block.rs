// Sealed Block
// The (ciphertext, signature) pair that crosses the public boundary

use std::fmt;

use crate::rsa::RsaBigInt;

/// One transmitted block: the character encrypted for the recipient and
/// the sender's signature over its identity token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedBlock {
    pub ciphertext: RsaBigInt,
    pub signature: RsaBigInt,
}

impl SealedBlock {
    /// Big-endian hex of (ciphertext, signature)
    pub fn to_hex(&self) -> (String, String) {
        (
            hex::encode(self.ciphertext.to_bytes_be()),
            hex::encode(self.signature.to_bytes_be()),
        )
    }
}

impl fmt::Display for SealedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.ciphertext, self.signature)
    }
}
