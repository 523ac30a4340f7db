//! Command-line interface for the NFT staking program

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use solana_sdk::pubkey::Pubkey;
use staking_sdk::{Config, StakingClient};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "staking-cli")]
#[command(about = "A command-line interface for the NFT staking program")]
#[command(version = "0.1.0")]
struct Cli {
    /// RPC endpoint URL
    #[arg(long, env = "STAKING_RPC_URL")]
    rpc_url: Option<String>,

    /// Path to the fee payer keypair file
    #[arg(long, env = "STAKING_KEYPAIR")]
    keypair: Option<String>,

    /// Commitment level
    #[arg(long, value_enum, env = "STAKING_COMMITMENT", default_value_t = Commitment::Confirmed)]
    commitment: Commitment,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl Commitment {
    fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the global stats singleton (admin only)
    Init,
    /// Stake one NFT of the given mint
    Stake {
        /// Mint of the NFT to stake
        mint: Pubkey,
    },
    /// Unstake a previously staked NFT
    Unstake {
        /// Mint of the NFT to withdraw
        mint: Pubkey,
    },
    /// Fund the reward treasury (admin only)
    Fund {
        /// Lamports to move into the treasury
        amount: u64,
    },
    /// Withdraw lamports from the treasury (admin only)
    Refund {
        /// Lamports to pull back out
        amount: u64,
    },
    /// Open a reward round (admin only)
    Distribute {
        /// Sequential round identifier
        round_id: u32,
        /// Number of staked NFTs the treasury is split across
        nft_count: u32,
    },
    /// Claim one round's payout for a staked NFT
    Claim {
        /// Mint of the staked NFT
        mint: Pubkey,
        /// Round to claim
        round_id: u32,
    },
    /// Print the global staking stats
    ShowStats,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(rpc_url) = cli.rpc_url {
        config.rpc_url = rpc_url;
    }
    if let Some(keypair) = cli.keypair {
        config.keypair_path = keypair;
    }
    config.commitment = cli.commitment.as_str().to_string();

    let client = StakingClient::new(&config)?;
    info!("Using payer {} against {}", client.payer(), config.rpc_url);

    match cli.command {
        Commands::Init => {
            let signature = client.initialize().await?;
            println!("Transaction signature: {signature}");
        }
        Commands::Stake { mint } => {
            let signature = client.stake(mint).await?;
            println!("Transaction signature: {signature}");
        }
        Commands::Unstake { mint } => {
            let signature = client.unstake(mint).await?;
            println!("Transaction signature: {signature}");
        }
        Commands::Fund { amount } => {
            let signature = client.fund(amount).await?;
            println!("Transaction signature: {signature}");
        }
        Commands::Refund { amount } => {
            let signature = client.refund(amount).await?;
            println!("Transaction signature: {signature}");
        }
        Commands::Distribute { round_id, nft_count } => {
            let signature = client.distribute(round_id, nft_count).await?;
            println!("Transaction signature: {signature}");
        }
        Commands::Claim { mint, round_id } => {
            let signature = client.claim(mint, round_id).await?;
            println!("Transaction signature: {signature}");
        }
        Commands::ShowStats => {
            let stats = client.stats().await?;
            println!("staked_count: {}", stats.staked_count);
            println!("reward_lamports: {}", stats.reward_lamports);
        }
    }

    Ok(())
}
