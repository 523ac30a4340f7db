use anchor_lang::prelude::*;
use crate::error::StakingError;
use crate::state::*;

#[derive(Accounts)]
#[instruction(round_id: u32)]
pub struct Distribute<'info> {
    #[account(seeds = [STATS_SEED], bump = stats.bump)]
    pub stats: Account<'info, StakingStats>,

    #[account(
        init,
        payer = admin,
        space = RewardRound::SIZE,
        seeds = [ROUND_SEED, admin.key().as_ref(), round_id.to_le_bytes().as_ref()],
        bump
    )]
    pub round: Account<'info, RewardRound>,

    #[account(mut, constraint = admin.key() == ADMIN_KEY @ StakingError::UnauthorizedAdmin)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Distribute>, round_id: u32, nft_count: u32) -> Result<()> {
    let clock = Clock::get()?;
    let stats = &ctx.accounts.stats;

    let reward = RewardRound::payout(stats.reward_lamports, nft_count)
        .ok_or(StakingError::EmptyRound)?;

    let round = &mut ctx.accounts.round;
    round.round_id = round_id;
    round.opened_at = clock.unix_timestamp as u32;
    round.reward_lamports = reward;
    round.bump = ctx.bumps.round;

    msg!(
        "Reward round {} opened: {} lamports per NFT across {} NFTs",
        round.round_id,
        round.reward_lamports,
        nft_count
    );

    Ok(())
}
