use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    #[msg("The signer is not the staking admin")]
    UnauthorizedAdmin,
    #[msg("The metadata account does not belong to the staked mint")]
    InvalidMetadata,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Arithmetic operation overflowed")]
    ArithmeticOverflow,
    #[msg("The treasury does not hold enough lamports")]
    InsufficientTreasury,
    #[msg("The claim window for this deposit has expired")]
    ClaimWindowExpired,
    #[msg("This deposit has already claimed the given round")]
    RoundAlreadyClaimed,
    #[msg("A reward round must cover at least one staked NFT")]
    EmptyRound,
    #[msg("There is nothing staked to withdraw")]
    NothingStaked,
}
