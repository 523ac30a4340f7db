use anchor_lang::prelude::*;
use anchor_spl::metadata::{Metadata, MetadataAccount};
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::error::StakingError;
use crate::state::*;

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(mut, seeds = [STATS_SEED], bump = stats.bump)]
    pub stats: Account<'info, StakingStats>,

    #[account(
        init_if_needed,
        payer = user,
        space = StakePool::SIZE,
        seeds = [POOL_SEED, user.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, StakePool>,

    #[account(
        init_if_needed,
        payer = user,
        space = StakeDeposit::SIZE,
        seeds = [DEPOSIT_SEED, user.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub deposit: Account<'info, StakeDeposit>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub mint: Account<'info, Mint>,

    /// Metaplex metadata for the staked mint; existence under the canonical
    /// seeds proves the mint carries metadata
    #[account(
        seeds = [b"metadata", metadata_program.key().as_ref(), mint.key().as_ref()],
        bump,
        seeds::program = metadata_program.key(),
        constraint = metadata.mint == mint.key() @ StakingError::InvalidMetadata
    )]
    pub metadata: Account<'info, MetadataAccount>,

    #[account(
        mut,
        constraint = token_from.mint == mint.key(),
        constraint = token_from.owner == user.key(),
        constraint = token_from.amount == 1
    )]
    pub token_from: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = token_to.mint == mint.key(),
        constraint = token_to.owner == pool.key()
    )]
    pub token_to: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Stake>) -> Result<()> {
    let clock = Clock::get()?;

    // Move the NFT into custody before touching any counters
    let cpi_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.token_from.to_account_info(),
            to: ctx.accounts.token_to.to_account_info(),
            authority: ctx.accounts.user.to_account_info(),
        },
    );
    token::transfer(cpi_ctx, 1)?;

    let stats = &mut ctx.accounts.stats;
    stats.staked_count = stats
        .staked_count
        .checked_add(1)
        .ok_or(StakingError::ArithmeticOverflow)?;

    let pool = &mut ctx.accounts.pool;
    pool.user = ctx.accounts.user.key();
    pool.staked_count = pool
        .staked_count
        .checked_add(1)
        .ok_or(StakingError::ArithmeticOverflow)?;
    pool.bump = ctx.bumps.pool;

    let deposit = &mut ctx.accounts.deposit;
    deposit.user = ctx.accounts.user.key();
    deposit.mint = ctx.accounts.mint.key();
    deposit.window_start = clock.unix_timestamp as u32;
    deposit.next_round = 0;
    deposit.bump = ctx.bumps.deposit;

    msg!(
        "Staked mint {} for user {}",
        deposit.mint,
        deposit.user
    );

    Ok(())
}
