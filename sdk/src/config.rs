//! Client configuration, derived from the execution environment

use anyhow::{Context, Result};
use serde::Deserialize;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::Keypair;
use std::fs;

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";
const DEFAULT_KEYPAIR_PATH: &str = "~/.config/solana/id.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Solana RPC URL
    pub rpc_url: String,

    /// Path to the fee payer keypair file
    pub keypair_path: String,

    /// Commitment level for sends and confirmations
    #[serde(default = "default_commitment")]
    pub commitment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// Solana CLI conventions (localnet RPC, `~/.config/solana/id.json`)
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }

        let config = Config {
            rpc_url: std::env::var("STAKING_RPC_URL")
                .unwrap_or_else(|_| DEFAULT_RPC_URL.to_string()),
            keypair_path: std::env::var("STAKING_KEYPAIR")
                .unwrap_or_else(|_| DEFAULT_KEYPAIR_PATH.to_string()),
            commitment: std::env::var("STAKING_COMMITMENT")
                .unwrap_or_else(|_| default_commitment()),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        commitment_from_str(&self.commitment)
            .with_context(|| format!("invalid commitment level: {}", self.commitment))?;
        Ok(())
    }

    /// The configured commitment as a [`CommitmentConfig`]
    pub fn commitment_config(&self) -> CommitmentConfig {
        // validated at load time
        commitment_from_str(&self.commitment).unwrap_or_default()
    }

    /// Load the fee payer keypair from the configured path
    pub fn load_keypair(&self) -> Result<Keypair> {
        load_keypair_from_file(&self.keypair_path)
    }
}

fn default_commitment() -> String {
    "confirmed".to_string()
}

fn commitment_from_str(s: &str) -> Result<CommitmentConfig> {
    match s {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => anyhow::bail!("unknown commitment level: {other}"),
    }
}

/// Load a keypair from a Solana CLI style JSON byte-array file
pub fn load_keypair_from_file(path: &str) -> Result<Keypair> {
    let expanded = shellexpand::tilde(path);
    let contents = fs::read_to_string(expanded.as_ref())
        .with_context(|| format!("failed to read keypair file: {}", expanded))?;
    let bytes: Vec<u8> = serde_json::from_str(&contents)
        .with_context(|| format!("keypair file is not a JSON byte array: {}", expanded))?;
    Keypair::try_from(&bytes[..])
        .with_context(|| format!("keypair file does not hold a valid keypair: {}", expanded))
}
