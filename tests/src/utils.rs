// Common utilities for staking program tests
use anchor_lang::prelude::*;

/// Common test setup
pub struct TestContext {
    pub admin: Pubkey,
    pub user: Pubkey,
    pub mint: Pubkey,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            admin: Pubkey::new_unique(),
            user: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
        }
    }
}

/// Generate a deterministic test public key from a seed string
pub fn generate_test_pubkey(seed: &str) -> Pubkey {
    use anchor_lang::solana_program::hash::Hasher;
    let mut hasher = Hasher::default();
    hasher.hash(seed.as_bytes());
    Pubkey::new_from_array(hasher.result().to_bytes())
}
