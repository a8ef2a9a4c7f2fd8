//! PDA derivation helpers.

use solana_sdk::pubkey::Pubkey;
use staking_rewards::constants::{
    CONFIG_SEED, POOL_SEED, REWARD_VAULT_SEED, STAKING_VAULT_SEED, USER_STAKE_SEED,
};

pub fn find_config_pda() -> Pubkey {
    Pubkey::find_program_address(&[CONFIG_SEED], &staking_rewards::ID).0
}

pub fn find_pool_pda(pool_id: u64) -> Pubkey {
    Pubkey::find_program_address(&[POOL_SEED, &pool_id.to_le_bytes()], &staking_rewards::ID).0
}

pub fn find_user_stake_pda(pool: &Pubkey, user: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[USER_STAKE_SEED, pool.as_ref(), user.as_ref()],
        &staking_rewards::ID,
    )
    .0
}

pub fn find_staking_vault_pda(pool: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[STAKING_VAULT_SEED, pool.as_ref()], &staking_rewards::ID).0
}

pub fn find_reward_vault_pda(pool: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[REWARD_VAULT_SEED, pool.as_ref()], &staking_rewards::ID).0
}
