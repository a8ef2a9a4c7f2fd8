use anchor_lang::prelude::*;

use crate::constants::PRECISION;
use crate::errors::ErrorCode;

// =============================================================================
// POOL ACCOUNT
// =============================================================================
// One Pool per create_pool call. It owns the escrowed reward budget (held in the
// reward vault) and the staked principal (held in the staking vault), and
// carries the accumulator that turns elapsed time into reward-per-share.
//
// Lifecycle:
//   Created (reward_started_at == 0)
//     -> Active (first stake starts the window)
//     <-> Idle (total_staked == 0; idle spans extend the window)
//     -> Cancelled (creator, terminal) | Finished (now >= end, terminal)
//

/// Lifecycle stage of a pool at a given instant.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolStatus {
    /// Budget escrowed, nobody has staked yet.
    Created,
    /// Window running with stake present.
    Active,
    /// Window running with no stake; elapsed time is being skipped.
    Idle,
    /// Window has ended.
    Finished,
    /// Creator cancelled the pool.
    Cancelled,
}

/// A single reward pool.
/// PDA derived with seeds: ["pool", id.to_le_bytes()]
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Pool {
    /// Sequential pool id, assigned from ProtocolConfig.pool_count.
    pub id: u64,

    /// Mint users stake.
    pub staking_mint: Pubkey,

    /// Mint the budget is paid out in.
    pub reward_mint: Pubkey,

    /// Wallet that funded the pool; the only one allowed to cancel it.
    pub creator: Pubkey,

    // =========================================================================
    // EMISSION SCHEDULE
    // =========================================================================
    /// Total budget escrowed at creation, in reward-token base units.
    pub reward_amount: u64,

    /// Length of the emission window in seconds, excluding idle time.
    pub reward_duration: u64,

    /// Unix timestamp of the first-ever stake. 0 = not started.
    pub reward_started_at: u64,

    /// Unix timestamp of cancellation. 0 = not cancelled.
    pub cancelled_at: u64,

    // =========================================================================
    // ACCUMULATOR
    // =========================================================================
    /// Sum of all user stakes.
    pub total_staked: u64,

    /// Number of users with a non-zero stake.
    pub active_staker_count: u64,

    /// Timestamp the accumulator was last brought current.
    pub last_reward_updated_at: u64,

    /// Reward earned per unit of stake since inception, scaled by PRECISION.
    pub acc_reward_per_share: u128,

    /// Seconds with zero total stake; added to the end of the window.
    pub total_skipped_duration: u64,

    // =========================================================================
    // STATISTICS
    // =========================================================================
    /// Net rewards paid to stakers.
    pub total_claimed: u64,

    /// Claim fees paid to the protocol beneficiary.
    pub total_fees: u64,

    /// Budget returned to the creator on cancellation.
    pub refunded_amount: u64,

    /// PDA bump seed (pool signs vault transfers).
    pub bump: u8,

    /// Staking vault PDA bump.
    pub staking_vault_bump: u8,

    /// Reward vault PDA bump.
    pub reward_vault_bump: u8,
}

impl Pool {
    pub const SIZE: usize = 8 + // discriminator
        8 +   // id
        32 +  // staking_mint
        32 +  // reward_mint
        32 +  // creator
        8 +   // reward_amount
        8 +   // reward_duration
        8 +   // reward_started_at
        8 +   // cancelled_at
        8 +   // total_staked
        8 +   // active_staker_count
        8 +   // last_reward_updated_at
        16 +  // acc_reward_per_share (u128)
        8 +   // total_skipped_duration
        8 +   // total_claimed
        8 +   // total_fees
        8 +   // refunded_amount
        1 +   // bump
        1 +   // staking_vault_bump
        1; // reward_vault_bump

    pub fn has_started(&self) -> bool {
        self.reward_started_at != 0
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled_at != 0
    }

    /// Reward emitted per second while stake is present. Truncating division;
    /// the remainder is reported by [`Pool::reward_dust`].
    pub fn reward_rate(&self) -> u64 {
        self.reward_amount
            .checked_div(self.reward_duration)
            .unwrap_or(0)
    }

    /// Budget that can never be emitted because of rate truncation.
    pub fn reward_dust(&self) -> u64 {
        self.reward_amount - self.reward_rate() * self.reward_duration
    }

    /// End of the emission window, pushed back by every idle second and
    /// pulled in to the cancellation time once cancelled.
    /// Returns None before the first stake.
    pub fn end_time(&self) -> Result<Option<u64>> {
        if !self.has_started() {
            return Ok(None);
        }
        let natural_end = self
            .reward_started_at
            .checked_add(self.reward_duration)
            .and_then(|t| t.checked_add(self.total_skipped_duration))
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        if self.is_cancelled() {
            Ok(Some(natural_end.min(self.cancelled_at)))
        } else {
            Ok(Some(natural_end))
        }
    }

    pub fn status(&self, now: u64) -> Result<PoolStatus> {
        if self.is_cancelled() {
            return Ok(PoolStatus::Cancelled);
        }
        match self.end_time()? {
            None => Ok(PoolStatus::Created),
            Some(end) if now >= end => Ok(PoolStatus::Finished),
            Some(_) if self.total_staked == 0 => Ok(PoolStatus::Idle),
            Some(_) => Ok(PoolStatus::Active),
        }
    }

    /// Start the emission window. Called on the first-ever stake only.
    pub fn start(&mut self, now: u64) {
        self.reward_started_at = now;
        self.last_reward_updated_at = now;
    }

    /// Bring the accumulator current to `now`.
    ///
    /// Time with stake present raises `acc_reward_per_share` by
    /// `elapsed * rate * PRECISION / total_staked`. Time with no stake is
    /// recorded in `total_skipped_duration`, which moves the window end back
    /// by the same amount. Idle time is never paid out and never shortens the
    /// schedule.
    pub fn update_rewards(&mut self, now: u64) -> Result<()> {
        let end = match self.end_time()? {
            Some(end) => end,
            None => return Ok(()),
        };
        let capped = now.min(end);
        if capped <= self.last_reward_updated_at {
            return Ok(());
        }
        let elapsed = capped - self.last_reward_updated_at;

        if self.total_staked == 0 {
            self.total_skipped_duration = self
                .total_skipped_duration
                .checked_add(elapsed)
                .ok_or(ErrorCode::ArithmeticOverflow)?;
        } else {
            let delta = (elapsed as u128)
                .checked_mul(self.reward_rate() as u128)
                .and_then(|v| v.checked_mul(PRECISION))
                .ok_or(ErrorCode::ArithmeticOverflow)?
                / self.total_staked as u128;
            self.acc_reward_per_share = self
                .acc_reward_per_share
                .checked_add(delta)
                .ok_or(ErrorCode::ArithmeticOverflow)?;
        }

        self.last_reward_updated_at = capped;
        Ok(())
    }

    /// Seconds of the window that have emitted rewards so far, i.e. time since
    /// start minus idle time, capped at the scheduled duration.
    /// Only meaningful right after `update_rewards`.
    pub fn active_elapsed(&self) -> Result<u64> {
        if !self.has_started() {
            return Ok(0);
        }
        let elapsed = self
            .last_reward_updated_at
            .checked_sub(self.reward_started_at)
            .and_then(|t| t.checked_sub(self.total_skipped_duration))
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(elapsed.min(self.reward_duration))
    }

    /// Budget still held in the reward vault: escrow minus everything paid
    /// to stakers, paid in fees, or refunded.
    pub fn remaining_budget(&self) -> Result<u64> {
        self.reward_amount
            .checked_sub(self.total_claimed)
            .and_then(|v| v.checked_sub(self.total_fees))
            .and_then(|v| v.checked_sub(self.refunded_amount))
            .ok_or_else(|| ErrorCode::ArithmeticOverflow.into())
    }

    /// Budget emitted so far at the truncated rate.
    pub fn earned_by_active_time(&self) -> Result<u64> {
        self.reward_rate()
            .checked_mul(self.active_elapsed()?)
            .ok_or_else(|| ErrorCode::ArithmeticOverflow.into())
    }
}
