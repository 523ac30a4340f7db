//! PDA derivation helpers mirroring the on-chain seeds

use anchor_lang::Id;
use anchor_spl::metadata::Metadata;
use solana_sdk::pubkey::Pubkey;
use staking::state::{DEPOSIT_SEED, POOL_SEED, ROUND_SEED, STATS_SEED, TREASURY_SEED};

/// The global stats singleton
pub fn find_stats() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STATS_SEED], &staking::ID)
}

/// A user's custody pool
pub fn find_pool(user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SEED, user.as_ref()], &staking::ID)
}

/// A (user, mint) deposit record
pub fn find_deposit(user: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[DEPOSIT_SEED, user.as_ref(), mint.as_ref()], &staking::ID)
}

/// A reward round opened by `admin`
pub fn find_round(admin: &Pubkey, round_id: u32) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ROUND_SEED, admin.as_ref(), round_id.to_le_bytes().as_ref()],
        &staking::ID,
    )
}

/// The program-owned lamport treasury
pub fn find_treasury() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY_SEED], &staking::ID)
}

/// The Metaplex metadata account for `mint`
pub fn find_metadata(mint: &Pubkey) -> (Pubkey, u8) {
    let metadata_program = Metadata::id();
    Pubkey::find_program_address(
        &[b"metadata", metadata_program.as_ref(), mint.as_ref()],
        &metadata_program,
    )
}
