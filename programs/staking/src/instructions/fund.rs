use anchor_lang::prelude::*;
use crate::error::StakingError;
use crate::state::*;

#[derive(Accounts)]
pub struct Fund<'info> {
    #[account(mut, seeds = [STATS_SEED], bump = stats.bump)]
    pub stats: Account<'info, StakingStats>,

    /// CHECK: data-less lamport vault owned by this program
    #[account(
        init_if_needed,
        payer = admin,
        space = 0,
        seeds = [TREASURY_SEED],
        bump
    )]
    pub treasury: UncheckedAccount<'info>,

    #[account(mut, constraint = admin.key() == ADMIN_KEY @ StakingError::UnauthorizedAdmin)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Fund>, amount: u64) -> Result<()> {
    if amount == 0 {
        return Err(StakingError::InvalidAmount.into());
    }

    let transfer_ix = anchor_lang::solana_program::system_instruction::transfer(
        ctx.accounts.admin.key,
        ctx.accounts.treasury.key,
        amount,
    );
    anchor_lang::solana_program::program::invoke(
        &transfer_ix,
        &[
            ctx.accounts.admin.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
        ],
    )?;

    let stats = &mut ctx.accounts.stats;
    stats.reward_lamports = stats
        .reward_lamports
        .checked_add(amount)
        .ok_or(StakingError::ArithmeticOverflow)?;

    msg!("Funded treasury with {} lamports", amount);

    Ok(())
}
