use anchor_lang::prelude::*;

use crate::constants::USER_STAKE_SEED;
use crate::errors::ErrorCode;
use crate::ledger::{self, RewardQuote};
use crate::state::{Pool, UserStake};
use crate::views::{self, PoolSummary};
use crate::{current_timestamp, ClaimableRewardView, QueryPools};

// =============================================================================
// VIEW INSTRUCTIONS
// =============================================================================
// Read-only. Meant to be simulated; results come back as return data.
//
// Range queries take the records for [from, to) as remaining accounts:
//   get_pools:             pool(from), pool(from + 1), ...
//   get_engaged_pools,
//   get_claimable_rewards: pool(from), user_stake(from), pool(from + 1), ...
// A user_stake slot must hold the derived PDA even when the record does not
// exist yet.
//

/// Deserialize the pool expected at `id`.
fn load_pool(info: &AccountInfo, id: u64) -> Result<Pool> {
    require!(!info.data_is_empty(), ErrorCode::PoolNotFound);
    require_keys_eq!(*info.owner, crate::ID, ErrorCode::InvalidQueryAccounts);
    let data = info.try_borrow_data()?;
    let pool = Pool::try_deserialize(&mut &data[..])
        .map_err(|_| error!(ErrorCode::InvalidQueryAccounts))?;
    require!(pool.id == id, ErrorCode::InvalidQueryAccounts);
    Ok(pool)
}

/// Deserialize the user's record for `pool_key`, or None if never created.
fn load_user_stake(info: &AccountInfo, pool_key: &Pubkey, user: &Pubkey) -> Result<Option<UserStake>> {
    let (expected, _) = Pubkey::find_program_address(
        &[USER_STAKE_SEED, pool_key.as_ref(), user.as_ref()],
        &crate::ID,
    );
    require_keys_eq!(*info.key, expected, ErrorCode::InvalidQueryAccounts);

    if *info.owner != crate::ID || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    UserStake::try_deserialize(&mut &data[..])
        .map(Some)
        .map_err(|_| error!(ErrorCode::InvalidQueryAccounts))
}

/// Walk (pool, user_stake) pairs for [from, to).
fn load_user_range(
    accounts: &[AccountInfo],
    user: &Pubkey,
    from: u64,
    to: u64,
) -> Result<Vec<(Pool, Option<UserStake>)>> {
    let expected_len = (to - from)
        .checked_mul(2)
        .ok_or(ErrorCode::ArithmeticOverflow)?;
    require!(
        accounts.len() as u64 == expected_len,
        ErrorCode::InvalidQueryAccounts
    );

    accounts
        .chunks_exact(2)
        .zip(from..to)
        .map(|(pair, id)| {
            let pool = load_pool(&pair[0], id)?;
            let user_stake = load_user_stake(&pair[1], pair[0].key, user)?;
            Ok((pool, user_stake))
        })
        .collect()
}

/// Claimable reward for one user in one pool. Zero if the user never staked.
pub fn claimable_reward(ctx: Context<ClaimableRewardView>, _user: Pubkey) -> Result<RewardQuote> {
    let now = current_timestamp()?;
    match ctx.accounts.user_stake.as_deref() {
        Some(user_stake) => ledger::claimable(
            &ctx.accounts.pool,
            user_stake,
            now,
            ctx.accounts.config.claim_fee_bps,
        ),
        None => Ok(RewardQuote::default()),
    }
}

/// Summaries of pools [from, to).
pub fn get_pools(ctx: Context<QueryPools>, from: u64, to: u64) -> Result<Vec<PoolSummary>> {
    views::validate_range(from, to, ctx.accounts.config.pool_count)?;
    require!(
        ctx.remaining_accounts.len() as u64 == to - from,
        ErrorCode::InvalidQueryAccounts
    );

    let now = current_timestamp()?;
    ctx.remaining_accounts
        .iter()
        .zip(from..to)
        .map(|(info, id)| views::summarize(&load_pool(info, id)?, now))
        .collect()
}

/// Ids in [from, to) where `user` holds a stake record.
pub fn get_engaged_pools(
    ctx: Context<QueryPools>,
    user: Pubkey,
    from: u64,
    to: u64,
) -> Result<Vec<u64>> {
    views::validate_range(from, to, ctx.accounts.config.pool_count)?;
    let range = load_user_range(ctx.remaining_accounts, &user, from, to)?;

    Ok(range
        .into_iter()
        .filter(|(_, user_stake)| user_stake.is_some())
        .map(|(pool, _)| pool.id)
        .collect())
}

/// Claimable reward per pool for [from, to), in id order.
pub fn get_claimable_rewards(
    ctx: Context<QueryPools>,
    user: Pubkey,
    from: u64,
    to: u64,
) -> Result<Vec<RewardQuote>> {
    views::validate_range(from, to, ctx.accounts.config.pool_count)?;
    let range = load_user_range(ctx.remaining_accounts, &user, from, to)?;

    let now = current_timestamp()?;
    let claim_fee_bps = ctx.accounts.config.claim_fee_bps;
    range
        .iter()
        .map(|(pool, user_stake)| match user_stake {
            Some(user_stake) => ledger::claimable(pool, user_stake, now, claim_fee_bps),
            None => Ok(RewardQuote::default()),
        })
        .collect()
}
