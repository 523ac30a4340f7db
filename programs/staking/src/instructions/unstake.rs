use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::error::StakingError;
use crate::state::*;

#[derive(Accounts)]
pub struct Unstake<'info> {
    #[account(mut, seeds = [STATS_SEED], bump = stats.bump)]
    pub stats: Account<'info, StakingStats>,

    #[account(
        mut,
        seeds = [POOL_SEED, user.key().as_ref()],
        bump = pool.bump,
        constraint = pool.user == user.key()
    )]
    pub pool: Account<'info, StakePool>,

    #[account(
        mut,
        seeds = [DEPOSIT_SEED, user.key().as_ref(), mint.key().as_ref()],
        bump = deposit.bump,
        constraint = deposit.user == user.key(),
        constraint = deposit.mint == mint.key()
    )]
    pub deposit: Account<'info, StakeDeposit>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = token_from.mint == mint.key(),
        constraint = token_from.owner == pool.key(),
        constraint = token_from.amount == 1
    )]
    pub token_from: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = token_to.mint == mint.key(),
        constraint = token_to.owner == user.key()
    )]
    pub token_to: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Unstake>) -> Result<()> {
    let user_key = ctx.accounts.user.key();
    let pool_seeds = &[POOL_SEED, user_key.as_ref(), &[ctx.accounts.pool.bump]];
    let pool_signer = &[&pool_seeds[..]];

    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.token_from.to_account_info(),
            to: ctx.accounts.token_to.to_account_info(),
            authority: ctx.accounts.pool.to_account_info(),
        },
        pool_signer,
    );
    token::transfer(cpi_ctx, 1)?;

    let stats = &mut ctx.accounts.stats;
    stats.staked_count = stats
        .staked_count
        .checked_sub(1)
        .ok_or(StakingError::NothingStaked)?;

    let pool = &mut ctx.accounts.pool;
    pool.staked_count = pool
        .staked_count
        .checked_sub(1)
        .ok_or(StakingError::NothingStaked)?;

    msg!("Unstaked mint {} for user {}", ctx.accounts.mint.key(), user_key);

    Ok(())
}
