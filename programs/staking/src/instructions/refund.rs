use anchor_lang::prelude::*;
use crate::error::StakingError;
use crate::state::*;

#[derive(Accounts)]
pub struct Refund<'info> {
    #[account(mut, seeds = [STATS_SEED], bump = stats.bump)]
    pub stats: Account<'info, StakingStats>,

    /// CHECK: data-less lamport vault owned by this program
    #[account(mut, seeds = [TREASURY_SEED], bump)]
    pub treasury: UncheckedAccount<'info>,

    #[account(mut, constraint = admin.key() == ADMIN_KEY @ StakingError::UnauthorizedAdmin)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Refund>, amount: u64) -> Result<()> {
    if amount == 0 {
        return Err(StakingError::InvalidAmount.into());
    }

    let stats = &mut ctx.accounts.stats;
    stats.reward_lamports = stats
        .reward_lamports
        .checked_sub(amount)
        .ok_or(StakingError::InsufficientTreasury)?;

    // The treasury is program-owned, so lamports move by direct arithmetic
    let treasury_info = ctx.accounts.treasury.to_account_info();
    let remaining = treasury_info
        .lamports()
        .checked_sub(amount)
        .ok_or(StakingError::InsufficientTreasury)?;
    **treasury_info.try_borrow_mut_lamports()? = remaining;

    let admin_info = ctx.accounts.admin.to_account_info();
    let returned = admin_info
        .lamports()
        .checked_add(amount)
        .ok_or(StakingError::ArithmeticOverflow)?;
    **admin_info.try_borrow_mut_lamports()? = returned;

    msg!("Refunded {} lamports to admin", amount);

    Ok(())
}
