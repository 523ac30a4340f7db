use anchor_lang::prelude::*;

/// Seed for the global [`StakingStats`] singleton
pub const STATS_SEED: &[u8] = b"stats";
/// Seed prefix for per-user [`StakePool`] accounts
pub const POOL_SEED: &[u8] = b"pool";
/// Seed prefix for per-(user, mint) [`StakeDeposit`] accounts
pub const DEPOSIT_SEED: &[u8] = b"deposit";
/// Seed prefix for [`RewardRound`] accounts
pub const ROUND_SEED: &[u8] = b"round";
/// Seed for the program-owned lamport treasury
pub const TREASURY_SEED: &[u8] = b"treasury";

/// Length of the claim window opened by staking or by a successful claim
pub const CLAIM_WINDOW_SECONDS: u32 = 14 * 86_400;

/// The only key allowed to initialize, fund and open reward rounds
pub const ADMIN_KEY: Pubkey =
    anchor_lang::solana_program::pubkey!("GQXMX2RVvuppFs2owKysJsuS686vNZpBusdgynZV86LS");

/// Global counters for the staking program
#[account]
pub struct StakingStats {
    /// Number of NFTs currently held in custody across all pools
    pub staked_count: u32,
    /// Lamports in the treasury that the program has accounted for
    pub reward_lamports: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl StakingStats {
    pub const SIZE: usize = 8 + // discriminator
        4 + // staked_count
        8 + // reward_lamports
        1; // bump
}

/// Per-user custody record; the pool PDA is the authority over escrowed
/// token accounts
#[account]
pub struct StakePool {
    /// The staker this pool belongs to
    pub user: Pubkey,
    /// Number of NFTs this user currently has staked
    pub staked_count: u32,
    /// PDA bump seed
    pub bump: u8,
}

impl StakePool {
    pub const SIZE: usize = 8 + // discriminator
        32 + // user
        4 + // staked_count
        1; // bump
}

/// Per-(user, mint) deposit record
#[account]
pub struct StakeDeposit {
    /// The staker who escrowed the NFT
    pub user: Pubkey,
    /// Mint of the escrowed NFT
    pub mint: Pubkey,
    /// Start of the current claim window; set on stake, reset on each claim
    pub window_start: u32,
    /// First reward round this deposit has not claimed yet
    pub next_round: u32,
    /// PDA bump seed
    pub bump: u8,
}

impl StakeDeposit {
    pub const SIZE: usize = 8 + // discriminator
        32 + // user
        32 + // mint
        4 + // window_start
        4 + // next_round
        1; // bump

    /// Whether the claim window is still open at `now`
    pub fn claim_window_open(&self, now: u32) -> bool {
        match self.window_start.checked_add(CLAIM_WINDOW_SECONDS) {
            Some(deadline) => now <= deadline,
            None => false,
        }
    }
}

/// A reward distribution round opened by the admin
#[account]
pub struct RewardRound {
    /// Sequential round identifier
    pub round_id: u32,
    /// Unix time the round was opened
    pub opened_at: u32,
    /// Per-NFT payout for this round, in lamports
    pub reward_lamports: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl RewardRound {
    pub const SIZE: usize = 8 + // discriminator
        4 + // round_id
        4 + // opened_at
        8 + // reward_lamports
        1; // bump

    /// Per-NFT payout given the treasury balance at distribution time
    pub fn payout(treasury_lamports: u64, nft_count: u32) -> Option<u64> {
        if nft_count == 0 {
            return None;
        }
        Some(treasury_lamports / u64::from(nft_count))
    }
}
