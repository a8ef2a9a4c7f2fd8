// =============================================================================
// INSTRUCTIONS MODULE
// =============================================================================
// Handlers for every instruction of the staking rewards program.
//

pub mod cancel_pool;
pub mod claim;
pub mod create_pool;
pub mod initialize;
pub mod query;
pub mod stake;
pub mod unstake;
pub mod update_config;

// Account structs (Initialize, CreatePool, Stake, ...) live in lib.rs for
// Anchor's IDL generation. Only handlers are defined here.
