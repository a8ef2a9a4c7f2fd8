use anchor_lang::prelude::*;

use crate::constants::MIN_STAKE_AMOUNT;
use crate::errors::ErrorCode;
use crate::fees::{self, FeeSplit};
use crate::state::{Pool, UserStake};

// =============================================================================
// LEDGER OPERATIONS
// =============================================================================
// Pure state transitions behind every instruction. Each one takes the current
// time explicitly and works on plain Pool / UserStake values; the instruction
// handlers run them on copies, move tokens, and only then commit the copies.
//
// Order inside every operation:
//   1. validate
//   2. bring the pool accumulator current
//   3. settle the caller's pending reward (split into net + fee)
//   4. change the stake
//

/// Reward owed to a user, as reported by the read-only query.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewardQuote {
    pub claimable_net: u64,
    pub fee_portion: u64,
    pub lifetime_claimed_net: u64,
    pub lifetime_fee_portion: u64,
}

/// Settle the user against the pool's current accumulator and book the
/// payout in the pool's running totals.
///
/// Each user's accrual is floored at both ends of a settlement, so a single
/// settlement can exceed the user's exact share by one unit. The payout is
/// capped at what is left in the reward vault, which keeps
/// `total_claimed + total_fees + refunded_amount <= reward_amount`.
pub fn settle(pool: &mut Pool, user: &mut UserStake, claim_fee_bps: u16) -> Result<FeeSplit> {
    let budget = pool.remaining_budget()?;
    let split = user.settle(pool.acc_reward_per_share, claim_fee_bps, budget)?;
    pool.total_claimed = pool
        .total_claimed
        .checked_add(split.net)
        .ok_or(ErrorCode::ArithmeticOverflow)?;
    pool.total_fees = pool
        .total_fees
        .checked_add(split.fee)
        .ok_or(ErrorCode::ArithmeticOverflow)?;
    Ok(split)
}

/// Deposit `amount` into the pool. Returns the auto-claimed reward of an
/// existing stake.
pub fn stake(
    pool: &mut Pool,
    user: &mut UserStake,
    amount: u64,
    now: u64,
    claim_fee_bps: u16,
) -> Result<FeeSplit> {
    require!(!pool.is_cancelled(), ErrorCode::PoolCancelled);
    require!(amount >= MIN_STAKE_AMOUNT, ErrorCode::InvalidAmount);
    if let Some(end) = pool.end_time()? {
        require!(now < end, ErrorCode::PoolFinished);
    }

    pool.update_rewards(now)?;

    let settled = if user.staked_amount > 0 {
        settle(pool, user, claim_fee_bps)?
    } else {
        FeeSplit::default()
    };

    if user.staked_amount == 0 {
        pool.active_staker_count = pool
            .active_staker_count
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
    }
    if !pool.has_started() {
        pool.start(now);
    }

    pool.total_staked = pool
        .total_staked
        .checked_add(amount)
        .ok_or(ErrorCode::ArithmeticOverflow)?;
    user.apply_deposit(amount, pool.acc_reward_per_share)?;
    Ok(settled)
}

/// Withdraw `amount` of principal. Allowed in every pool state.
/// Returns the reward settled on the way out.
pub fn unstake(
    pool: &mut Pool,
    user: &mut UserStake,
    amount: u64,
    now: u64,
    claim_fee_bps: u16,
) -> Result<FeeSplit> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(amount <= user.staked_amount, ErrorCode::InsufficientStake);

    pool.update_rewards(now)?;
    let settled = settle(pool, user, claim_fee_bps)?;

    pool.total_staked = pool
        .total_staked
        .checked_sub(amount)
        .ok_or(ErrorCode::ArithmeticOverflow)?;
    user.apply_withdrawal(amount, pool.acc_reward_per_share)?;
    if user.staked_amount == 0 {
        pool.active_staker_count = pool
            .active_staker_count
            .checked_sub(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
    }
    Ok(settled)
}

/// Settle the user's pending reward. Nothing pending is not an error.
pub fn claim(
    pool: &mut Pool,
    user: &mut UserStake,
    now: u64,
    claim_fee_bps: u16,
) -> Result<FeeSplit> {
    pool.update_rewards(now)?;
    settle(pool, user, claim_fee_bps)
}

/// Cancel the pool and return the budget that was never earned.
///
/// The refund is everything not emitted during active (staked) time: the
/// unelapsed part of the window, all idle time, and the rate truncation dust.
/// It never exceeds what is left in the reward vault.
pub fn cancel(pool: &mut Pool, caller: &Pubkey, now: u64) -> Result<u64> {
    require_keys_eq!(*caller, pool.creator, ErrorCode::Unauthorized);
    require!(!pool.is_cancelled(), ErrorCode::PoolAlreadyCancelled);

    pool.update_rewards(now)?;

    let leftover = pool
        .reward_amount
        .checked_sub(pool.earned_by_active_time()?)
        .ok_or(ErrorCode::ArithmeticOverflow)?
        .min(pool.remaining_budget()?);
    pool.cancelled_at = now;
    pool.refunded_amount = leftover;
    Ok(leftover)
}

/// Reward the user could claim at `now`, without touching stored state.
pub fn claimable(
    pool: &Pool,
    user: &UserStake,
    now: u64,
    claim_fee_bps: u16,
) -> Result<RewardQuote> {
    let mut projected = pool.clone();
    projected.update_rewards(now)?;
    let pending = user
        .pending_reward(projected.acc_reward_per_share)?
        .min(projected.remaining_budget()?);
    let split = fees::split_claim(pending, claim_fee_bps)?;
    Ok(RewardQuote {
        claimable_net: split.net,
        fee_portion: split.fee,
        lifetime_claimed_net: user.claimed_total,
        lifetime_fee_portion: user.fee_total,
    })
}
