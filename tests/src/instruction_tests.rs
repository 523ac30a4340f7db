// Tests for sdk instruction builders against the program's generated types

#[cfg(test)]
mod tests {
    use crate::utils::*;
    use anchor_lang::prelude::*;
    use anchor_lang::InstructionData;
    use staking::state::{DEPOSIT_SEED, POOL_SEED, ROUND_SEED, STATS_SEED, TREASURY_SEED};
    use staking_sdk::{instructions, pda};

    #[test]
    fn test_sdk_pdas_agree_with_program_seeds() {
        let ctx = TestContext::new();

        let (stats, _) = Pubkey::find_program_address(&[STATS_SEED], &staking::ID);
        assert_eq!(pda::find_stats().0, stats);

        let (pool, _) =
            Pubkey::find_program_address(&[POOL_SEED, ctx.user.as_ref()], &staking::ID);
        assert_eq!(pda::find_pool(&ctx.user).0, pool);

        let (deposit, _) = Pubkey::find_program_address(
            &[DEPOSIT_SEED, ctx.user.as_ref(), ctx.mint.as_ref()],
            &staking::ID,
        );
        assert_eq!(pda::find_deposit(&ctx.user, &ctx.mint).0, deposit);

        let (round, _) = Pubkey::find_program_address(
            &[ROUND_SEED, ctx.admin.as_ref(), 9u32.to_le_bytes().as_ref()],
            &staking::ID,
        );
        assert_eq!(pda::find_round(&ctx.admin, 9).0, round);

        let (treasury, _) = Pubkey::find_program_address(&[TREASURY_SEED], &staking::ID);
        assert_eq!(pda::find_treasury().0, treasury);
    }

    #[test]
    fn test_initialize_targets_program_with_admin_signer() {
        let ctx = TestContext::new();
        let ix = instructions::initialize(ctx.admin);

        assert_eq!(ix.program_id, staking::ID);
        assert_eq!(ix.accounts.len(), 3);

        // stats PDA gets created, admin signs and pays
        assert_eq!(ix.accounts[0].pubkey, pda::find_stats().0);
        assert!(ix.accounts[0].is_writable);
        assert!(!ix.accounts[0].is_signer);

        assert_eq!(ix.accounts[1].pubkey, ctx.admin);
        assert!(ix.accounts[1].is_signer);
        assert!(ix.accounts[1].is_writable);
    }

    #[test]
    fn test_instruction_data_carries_discriminator() {
        let init_data = staking::instruction::Initialize {}.data();
        assert_eq!(init_data.len(), 8);

        // Discriminators are stable and distinct per instruction
        let stake_data = staking::instruction::Stake {}.data();
        let claim_data = staking::instruction::Claim {}.data();
        assert_eq!(init_data, staking::instruction::Initialize {}.data());
        assert_ne!(init_data, stake_data);
        assert_ne!(stake_data, claim_data);
    }

    #[test]
    fn test_fund_data_encodes_amount() {
        let data = staking::instruction::Fund { amount: 42_000 }.data();
        assert_eq!(data.len(), 8 + 8);
        assert_eq!(&data[8..], 42_000u64.to_le_bytes().as_ref());
    }

    #[test]
    fn test_distribute_data_encodes_round_and_count() {
        let data = staking::instruction::Distribute {
            round_id: 3,
            nft_count: 120,
        }
        .data();
        assert_eq!(data.len(), 8 + 4 + 4);
        assert_eq!(&data[8..12], 3u32.to_le_bytes().as_ref());
        assert_eq!(&data[12..16], 120u32.to_le_bytes().as_ref());
    }

    #[test]
    fn test_stake_routes_token_accounts_to_pool_custody() {
        let ctx = TestContext::new();
        let ix = instructions::stake(ctx.user, ctx.mint);

        assert_eq!(ix.program_id, staking::ID);

        let (pool, _) = pda::find_pool(&ctx.user);
        let user_ata = spl_associated_token_account_address(&ctx.user, &ctx.mint);
        let pool_ata = spl_associated_token_account_address(&pool, &ctx.mint);

        let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
        assert!(keys.contains(&user_ata));
        assert!(keys.contains(&pool_ata));
        assert!(keys.contains(&pda::find_deposit(&ctx.user, &ctx.mint).0));
    }

    #[test]
    fn test_claim_references_the_requested_round() {
        let ctx = TestContext::new();
        let ix = instructions::claim(ctx.user, ctx.mint, ctx.admin, 5);

        let (round, _) = pda::find_round(&ctx.admin, 5);
        let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
        assert!(keys.contains(&round));
        assert!(keys.contains(&pda::find_treasury().0));
    }

    // Independent mirror of the associated-token-account derivation
    fn spl_associated_token_account_address(wallet: &Pubkey, mint: &Pubkey) -> Pubkey {
        let token_program = anchor_spl_token_id();
        Pubkey::find_program_address(
            &[wallet.as_ref(), token_program.as_ref(), mint.as_ref()],
            &spl_associated_token_program_id(),
        )
        .0
    }

    fn anchor_spl_token_id() -> Pubkey {
        // SPL Token program
        use std::str::FromStr;
        Pubkey::from_str("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA").unwrap()
    }

    fn spl_associated_token_program_id() -> Pubkey {
        // SPL Associated Token Account program
        use std::str::FromStr;
        Pubkey::from_str("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL").unwrap()
    }
}
