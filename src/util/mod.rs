// Utility Module
// Configuration shared by key generation and the protocol

pub mod config;

pub use config::ProtocolConfig;
