//! RPC client for the staking program

use anchor_lang::AccountDeserialize;
use anyhow::{Context, Result};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;
use staking::state::{StakingStats, ADMIN_KEY};
use tracing::debug;

use crate::config::Config;
use crate::{instructions, pda};

/// Main client for interacting with the staking program
pub struct StakingClient {
    rpc: RpcClient,
    payer: Keypair,
}

impl StakingClient {
    /// Build a client from an environment-derived [`Config`]
    pub fn new(config: &Config) -> Result<Self> {
        let payer = config.load_keypair()?;
        let rpc = RpcClient::new_with_commitment(
            config.rpc_url.clone(),
            config.commitment_config(),
        );
        Ok(Self { rpc, payer })
    }

    /// The fee payer this client signs with
    pub fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    /// Create the global stats singleton; the payer must be the admin
    pub async fn initialize(&self) -> Result<Signature> {
        self.send(instructions::initialize(self.payer.pubkey()))
            .await
            .context("initialize failed")
    }

    /// Escrow one NFT of `mint` into the payer's pool
    pub async fn stake(&self, mint: Pubkey) -> Result<Signature> {
        self.send(instructions::stake(self.payer.pubkey(), mint))
            .await
            .context("stake failed")
    }

    /// Return a previously escrowed NFT of `mint` to the payer
    pub async fn unstake(&self, mint: Pubkey) -> Result<Signature> {
        self.send(instructions::unstake(self.payer.pubkey(), mint))
            .await
            .context("unstake failed")
    }

    /// Move `amount` lamports from the payer (admin) into the treasury
    pub async fn fund(&self, amount: u64) -> Result<Signature> {
        self.send(instructions::fund(self.payer.pubkey(), amount))
            .await
            .context("fund failed")
    }

    /// Pull `amount` lamports back out of the treasury to the payer (admin)
    pub async fn refund(&self, amount: u64) -> Result<Signature> {
        self.send(instructions::refund(self.payer.pubkey(), amount))
            .await
            .context("refund failed")
    }

    /// Open reward round `round_id` splitting the treasury across `nft_count` NFTs
    pub async fn distribute(&self, round_id: u32, nft_count: u32) -> Result<Signature> {
        self.send(instructions::distribute(
            self.payer.pubkey(),
            round_id,
            nft_count,
        ))
        .await
        .context("distribute failed")
    }

    /// Collect round `round_id`'s payout for the payer's deposit of `mint`
    pub async fn claim(&self, mint: Pubkey, round_id: u32) -> Result<Signature> {
        self.send(instructions::claim(
            self.payer.pubkey(),
            mint,
            ADMIN_KEY,
            round_id,
        ))
        .await
        .context("claim failed")
    }

    /// Fetch and decode the global stats account
    pub async fn stats(&self) -> Result<StakingStats> {
        let (stats, _) = pda::find_stats();
        let data = self
            .rpc
            .get_account_data(&stats)
            .await
            .context("stats account not found; was the program initialized?")?;
        StakingStats::try_deserialize(&mut data.as_slice())
            .context("stats account holds unexpected data")
    }

    async fn send(&self, instruction: Instruction) -> Result<Signature> {
        let blockhash = self
            .rpc
            .get_latest_blockhash()
            .await
            .context("failed to fetch a recent blockhash")?;

        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&self.payer.pubkey()),
            &[&self.payer],
            blockhash,
        );

        let signature = self
            .rpc
            .send_and_confirm_transaction(&transaction)
            .await
            .context("transaction was not confirmed")?;

        debug!("Confirmed transaction: {}", signature);
        Ok(signature)
    }
}
