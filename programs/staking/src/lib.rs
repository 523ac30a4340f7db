use anchor_lang::prelude::*;

declare_id!("3LnWTYwD16Dh4Ly6RZiJxSsMP8HWbKoGtZGi1MmJ9Dub");

pub mod error;
pub mod state;
pub mod instructions;

use instructions::*;

#[program]
pub mod staking {
    use super::*;

    /// Create the global stats singleton
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize::handler(ctx)
    }

    /// Escrow one NFT into the caller's pool
    pub fn stake(ctx: Context<Stake>) -> Result<()> {
        stake::handler(ctx)
    }

    /// Return a previously escrowed NFT to the caller
    pub fn unstake(ctx: Context<Unstake>) -> Result<()> {
        unstake::handler(ctx)
    }

    /// Move lamports from the admin into the reward treasury
    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        fund::handler(ctx, amount)
    }

    /// Pull lamports back out of the treasury
    pub fn refund(ctx: Context<Refund>, amount: u64) -> Result<()> {
        refund::handler(ctx, amount)
    }

    /// Open a reward round splitting the treasury across staked NFTs
    pub fn distribute(ctx: Context<Distribute>, round_id: u32, nft_count: u32) -> Result<()> {
        distribute::handler(ctx, round_id, nft_count)
    }

    /// Collect one round's payout for one deposit
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        claim::handler(ctx)
    }
}
