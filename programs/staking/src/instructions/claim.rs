use anchor_lang::prelude::*;
use crate::error::StakingError;
use crate::state::*;

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut, seeds = [STATS_SEED], bump = stats.bump)]
    pub stats: Account<'info, StakingStats>,

    /// CHECK: data-less lamport vault owned by this program
    #[account(mut, seeds = [TREASURY_SEED], bump)]
    pub treasury: UncheckedAccount<'info>,

    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [DEPOSIT_SEED, user.key().as_ref(), deposit.mint.as_ref()],
        bump = deposit.bump,
        constraint = deposit.user == user.key()
    )]
    pub deposit: Account<'info, StakeDeposit>,

    pub round: Account<'info, RewardRound>,
}

pub fn handler(ctx: Context<Claim>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp as u32;

    let deposit = &mut ctx.accounts.deposit;
    let round = &ctx.accounts.round;

    require!(deposit.claim_window_open(now), StakingError::ClaimWindowExpired);
    require!(
        deposit.next_round == round.round_id,
        StakingError::RoundAlreadyClaimed
    );

    let amount = round.reward_lamports;
    let stats = &mut ctx.accounts.stats;
    stats.reward_lamports = stats
        .reward_lamports
        .checked_sub(amount)
        .ok_or(StakingError::InsufficientTreasury)?;

    let treasury_info = ctx.accounts.treasury.to_account_info();
    let remaining = treasury_info
        .lamports()
        .checked_sub(amount)
        .ok_or(StakingError::InsufficientTreasury)?;
    **treasury_info.try_borrow_mut_lamports()? = remaining;

    let user_info = ctx.accounts.user.to_account_info();
    let credited = user_info
        .lamports()
        .checked_add(amount)
        .ok_or(StakingError::ArithmeticOverflow)?;
    **user_info.try_borrow_mut_lamports()? = credited;

    deposit.next_round = deposit
        .next_round
        .checked_add(1)
        .ok_or(StakingError::ArithmeticOverflow)?;
    deposit.window_start = now;

    msg!(
        "Claimed {} lamports for round {} by {}",
        amount,
        round.round_id,
        deposit.user
    );

    Ok(())
}
