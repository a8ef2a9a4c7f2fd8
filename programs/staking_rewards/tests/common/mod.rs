//! Shared helpers for staking_rewards LiteSVM tests.
#![allow(dead_code)]

pub mod instructions;
pub mod mock_accounts;
pub mod pda;
pub mod setup;

pub use instructions::*;
pub use mock_accounts::*;
pub use pda::*;
pub use setup::*;
