use anchor_lang::prelude::*;
use crate::error::StakingError;
use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = StakingStats::SIZE,
        seeds = [STATS_SEED],
        bump
    )]
    pub stats: Account<'info, StakingStats>,

    #[account(mut, constraint = admin.key() == ADMIN_KEY @ StakingError::UnauthorizedAdmin)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let stats = &mut ctx.accounts.stats;

    stats.staked_count = 0;
    stats.reward_lamports = 0;
    stats.bump = ctx.bumps.stats;

    msg!("Staking stats initialized at: {}", stats.key());

    Ok(())
}
