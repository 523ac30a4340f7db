// Rust integration tests for the staking program
pub mod utils;
pub mod state_tests;
pub mod instruction_tests;
pub mod transaction_tests;
