// Protocol Configuration
// Prime range, key generation limits and the sender identity token

use crate::error::{Error, Result};

/// Default exclusive upper bound for candidate primes
pub const DEFAULT_PRIME_BOUND: u64 = 1000;

/// Primes below this index are never picked. The 21st prime is 73, so every
/// modulus is at least 73 * 79 and exceeds any single-byte character.
pub const DEFAULT_MIN_PRIME_INDEX: usize = 20;

pub const DEFAULT_MAX_EXPONENT_ATTEMPTS: u32 = 10_000;

/// Publicly known token the sender signs on every block
pub const DEFAULT_SENDER_IDENTITY: char = 'A';

/// Configuration for key generation and message transmission
#[derive(Clone, Debug, PartialEq)]
pub struct ProtocolConfig {
    pub prime_bound: u64,
    pub min_prime_index: usize,
    pub max_exponent_attempts: u32,
    pub sender_identity: char,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            prime_bound: DEFAULT_PRIME_BOUND,
            min_prime_index: DEFAULT_MIN_PRIME_INDEX,
            max_exponent_attempts: DEFAULT_MAX_EXPONENT_ATTEMPTS,
            sender_identity: DEFAULT_SENDER_IDENTITY,
        }
    }
}

impl ProtocolConfig {
    pub fn with_prime_bound(mut self, bound: u64) -> Self {
        self.prime_bound = bound;
        self
    }

    pub fn with_min_prime_index(mut self, index: usize) -> Self {
        self.min_prime_index = index;
        self
    }

    pub fn with_max_exponent_attempts(mut self, attempts: u32) -> Self {
        self.max_exponent_attempts = attempts;
        self
    }

    pub fn with_sender_identity(mut self, identity: char) -> Self {
        self.sender_identity = identity;
        self
    }

    /// Reject settings that can never produce a key pair.
    pub fn validate(&self) -> Result<()> {
        if self.prime_bound <= 2 {
            return Err(Error::InvalidConfig(format!(
                "prime bound must be greater than 2, got {}",
                self.prime_bound
            )));
        }
        if self.max_exponent_attempts == 0 {
            return Err(Error::InvalidConfig(
                "max exponent attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
