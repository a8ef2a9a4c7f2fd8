// =============================================================================
// STATE MODULE
// =============================================================================
// Account structures for the staking rewards program.
//

// Usage: `use crate::state::{Pool, ProtocolConfig, UserStake};`

mod config;
mod pool;
mod user_stake;

pub use config::*;
pub use pool::*;
pub use user_stake::*;
