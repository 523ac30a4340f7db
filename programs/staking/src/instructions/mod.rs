pub mod initialize;
pub mod stake;
pub mod unstake;
pub mod fund;
pub mod refund;
pub mod distribute;
pub mod claim;

pub use initialize::*;
pub use stake::*;
pub use unstake::*;
pub use fund::*;
pub use refund::*;
pub use distribute::*;
pub use claim::*;
