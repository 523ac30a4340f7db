//! Staking SDK - Rust client for the NFT staking program
//!
//! Thin wrappers for:
//! - Environment-derived client configuration
//! - PDA derivation matching the on-chain seeds
//! - Instruction building for every program operation
//! - Submitting transactions and returning confirmed signatures

pub mod client;
pub mod config;
pub mod instructions;
pub mod pda;

// Re-export key types
pub use client::StakingClient;
pub use config::Config;
