//! # toy_rsa
//!
//! Textbook RSA over small primes, one character per block.
//!
//! Every primitive is spelled out: trial-division prime listing, the
//! extended Euclidean modular inverse, square-and-multiply exponentiation,
//! key derivation, and a sign/verify exchange between two parties.
//! Moduli stay below one million, so none of this offers real secrecy.
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use toy_rsa::{Protocol, ProtocolConfig};
//!
//! let protocol = Protocol::new(ProtocolConfig::default()).unwrap();
//! let mut rng = StdRng::seed_from_u64(2024);
//! let transmission = protocol.transmit("HI", &mut rng).unwrap();
//! assert_eq!(transmission.decoded, "HI");
//! ```

pub mod error;
pub mod protocol;
pub mod rsa;
pub mod util;

pub use error::{Error, Result};
pub use protocol::{open_block, seal_block, verify_signature, Protocol, SealedBlock, Transmission};
pub use rsa::{RsaKeyPair, RsaPrivateKey, RsaPublicKey};
pub use util::config::ProtocolConfig;
