use anchor_lang::prelude::*;

use crate::constants::MAX_QUERY_RANGE;
use crate::errors::ErrorCode;
use crate::state::{Pool, PoolStatus};

// =============================================================================
// READ-ONLY QUERIES
// =============================================================================
// Shapes returned by the view instructions, and the range check they share.
// Ranges are half-open [from, to) over pool ids.
//

/// Snapshot of one pool as seen at `now`.
///
/// Built from stored state. An idle pool whose stored end has passed reports
/// `Finished`, matching `stake`, which checks the stored end before bringing
/// the accumulator current. The next update on such a pool books the idle
/// span and can move `end_time` later again.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PoolSummary {
    pub id: u64,
    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub creator: Pubkey,
    pub status: PoolStatus,
    pub reward_amount: u64,
    pub reward_duration: u64,
    pub reward_rate: u64,
    /// Budget lost to rate truncation; never emitted, refunded on cancel.
    pub reward_dust: u64,
    pub reward_started_at: u64,
    /// 0 before the first stake.
    pub end_time: u64,
    pub cancelled_at: u64,
    pub total_staked: u64,
    pub active_staker_count: u64,
    pub total_skipped_duration: u64,
    pub total_claimed: u64,
    pub total_fees: u64,
    pub refunded_amount: u64,
}

/// Reject empty, inverted, out-of-bounds or oversized ranges.
/// Never clamps: a bad range is the caller's bug.
pub fn validate_range(from: u64, to: u64, len: u64) -> Result<()> {
    require!(from < to, ErrorCode::InvalidPagination);
    require!(to <= len, ErrorCode::InvalidPagination);
    require!(to - from <= MAX_QUERY_RANGE, ErrorCode::InvalidPagination);
    Ok(())
}

/// Summarise a pool. Stored state only; the accumulator is not projected,
/// so `status` agrees with what `stake` would accept at `now`.
pub fn summarize(pool: &Pool, now: u64) -> Result<PoolSummary> {
    Ok(PoolSummary {
        id: pool.id,
        staking_mint: pool.staking_mint,
        reward_mint: pool.reward_mint,
        creator: pool.creator,
        status: pool.status(now)?,
        reward_amount: pool.reward_amount,
        reward_duration: pool.reward_duration,
        reward_rate: pool.reward_rate(),
        reward_dust: pool.reward_dust(),
        reward_started_at: pool.reward_started_at,
        end_time: pool.end_time()?.unwrap_or(0),
        cancelled_at: pool.cancelled_at,
        total_staked: pool.total_staked,
        active_staker_count: pool.active_staker_count,
        total_skipped_duration: pool.total_skipped_duration,
        total_claimed: pool.total_claimed,
        total_fees: pool.total_fees,
        refunded_amount: pool.refunded_amount,
    })
}
