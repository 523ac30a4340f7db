//! Instruction builders for every staking program operation

use anchor_lang::{Id, InstructionData, ToAccountMetas};
use anchor_spl::metadata::Metadata;
use anchor_spl::token::Token;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;
use spl_associated_token_account::get_associated_token_address;

use crate::pda;

/// Build the `initialize` instruction
pub fn initialize(admin: Pubkey) -> Instruction {
    let (stats, _) = pda::find_stats();

    Instruction {
        program_id: staking::ID,
        accounts: staking::accounts::Initialize {
            stats,
            admin,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: staking::instruction::Initialize {}.data(),
    }
}

/// Build the `stake` instruction; token accounts are the associated token
/// accounts of the user and the pool PDA
pub fn stake(user: Pubkey, mint: Pubkey) -> Instruction {
    let (stats, _) = pda::find_stats();
    let (pool, _) = pda::find_pool(&user);
    let (deposit, _) = pda::find_deposit(&user, &mint);
    let (metadata, _) = pda::find_metadata(&mint);

    Instruction {
        program_id: staking::ID,
        accounts: staking::accounts::Stake {
            stats,
            pool,
            deposit,
            user,
            mint,
            metadata,
            token_from: get_associated_token_address(&user, &mint),
            token_to: get_associated_token_address(&pool, &mint),
            token_program: Token::id(),
            metadata_program: Metadata::id(),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: staking::instruction::Stake {}.data(),
    }
}

/// Build the `unstake` instruction
pub fn unstake(user: Pubkey, mint: Pubkey) -> Instruction {
    let (stats, _) = pda::find_stats();
    let (pool, _) = pda::find_pool(&user);
    let (deposit, _) = pda::find_deposit(&user, &mint);

    Instruction {
        program_id: staking::ID,
        accounts: staking::accounts::Unstake {
            stats,
            pool,
            deposit,
            user,
            mint,
            token_from: get_associated_token_address(&pool, &mint),
            token_to: get_associated_token_address(&user, &mint),
            token_program: Token::id(),
        }
        .to_account_metas(None),
        data: staking::instruction::Unstake {}.data(),
    }
}

/// Build the `fund` instruction
pub fn fund(admin: Pubkey, amount: u64) -> Instruction {
    let (stats, _) = pda::find_stats();
    let (treasury, _) = pda::find_treasury();

    Instruction {
        program_id: staking::ID,
        accounts: staking::accounts::Fund {
            stats,
            treasury,
            admin,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: staking::instruction::Fund { amount }.data(),
    }
}

/// Build the `refund` instruction
pub fn refund(admin: Pubkey, amount: u64) -> Instruction {
    let (stats, _) = pda::find_stats();
    let (treasury, _) = pda::find_treasury();

    Instruction {
        program_id: staking::ID,
        accounts: staking::accounts::Refund {
            stats,
            treasury,
            admin,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: staking::instruction::Refund { amount }.data(),
    }
}

/// Build the `distribute` instruction
pub fn distribute(admin: Pubkey, round_id: u32, nft_count: u32) -> Instruction {
    let (stats, _) = pda::find_stats();
    let (round, _) = pda::find_round(&admin, round_id);

    Instruction {
        program_id: staking::ID,
        accounts: staking::accounts::Distribute {
            stats,
            round,
            admin,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: staking::instruction::Distribute { round_id, nft_count }.data(),
    }
}

/// Build the `claim` instruction for one deposit against one round
pub fn claim(user: Pubkey, mint: Pubkey, admin: Pubkey, round_id: u32) -> Instruction {
    let (stats, _) = pda::find_stats();
    let (treasury, _) = pda::find_treasury();
    let (deposit, _) = pda::find_deposit(&user, &mint);
    let (round, _) = pda::find_round(&admin, round_id);

    Instruction {
        program_id: staking::ID,
        accounts: staking::accounts::Claim {
            stats,
            treasury,
            user,
            deposit,
            round,
        }
        .to_account_metas(None),
        data: staking::instruction::Claim {}.data(),
    }
}
