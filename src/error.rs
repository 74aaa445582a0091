// Error Types
// Every failure the key generator, codec and protocol can report

use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "prime bound {bound} yields {available} primes, need at least two at index {min_index} or above"
    )]
    PrimalityRange {
        bound: u64,
        available: usize,
        min_index: usize,
    },

    #[error("no exponent coprime to totient {totient} found after {attempts} attempts")]
    KeyGenerationRetryExhausted { totient: BigUint, attempts: u32 },

    #[error("{value} has no inverse modulo {modulus}")]
    NoModularInverse { value: BigUint, modulus: BigUint },

    #[error("signature verification failed: recovered token does not match sender identity")]
    SignatureVerification,

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("block value {value} is not below modulus {modulus}")]
    UnrepresentableBlock { value: BigUint, modulus: BigUint },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("block {index}: {source}")]
    Block {
        index: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap a block-local failure with the position of the block in the message.
    pub fn at_block(index: usize, source: Error) -> Self {
        Error::Block {
            index,
            source: Box::new(source),
        }
    }

    /// The underlying failure with any block wrappers removed.
    pub fn root(&self) -> &Error {
        match self {
            Error::Block { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_unwraps_block() {
        let err = Error::at_block(3, Error::SignatureVerification);
        assert!(matches!(err.root(), Error::SignatureVerification));
        assert_eq!(
            err.to_string(),
            "block 3: signature verification failed: recovered token does not match sender identity"
        );
    }

    #[test]
    fn test_root_of_plain_error() {
        let err = Error::Decode("bad".to_string());
        assert!(matches!(err.root(), Error::Decode(_)));
    }
}
