use anchor_lang::prelude::*;

use crate::constants::PRECISION;
use crate::errors::ErrorCode;
use crate::fees::{self, FeeSplit};

// =============================================================================
// USER STAKE
// =============================================================================
// One record per (pool, user). Created on the first stake and never closed,
// so lifetime claim/fee totals survive a full unstake.
//
// reward_debt is the user's share of the accumulator at their last
// settlement, in reward-token units:
//   pending = staked_amount * acc_reward_per_share / PRECISION - reward_debt
//

/// Per-user stake in one pool.
/// PDA derived with seeds: ["user_stake", pool.key(), owner.key()]
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct UserStake {
    /// Wallet that owns this stake.
    pub owner: Pubkey,

    /// Pool this record belongs to.
    pub pool_id: u64,

    /// Staked principal, in staking-token base units.
    pub staked_amount: u64,

    /// Accrued reward already accounted for at the last settlement.
    pub reward_debt: u128,

    /// Lifetime reward received, net of fees.
    pub claimed_total: u64,

    /// Lifetime claim fees paid on this user's rewards.
    pub fee_total: u64,

    /// PDA bump seed.
    pub bump: u8,
}

impl UserStake {
    pub const SIZE: usize = 8 + // discriminator
        32 +  // owner
        8 +   // pool_id
        8 +   // staked_amount
        16 +  // reward_debt (u128)
        8 +   // claimed_total
        8 +   // fee_total
        1; // bump

    /// `floor(staked_amount * acc / PRECISION)`.
    ///
    /// The accumulator is split into whole and fractional units so neither
    /// product can leave u128 for any u64 stake.
    pub fn accrued(&self, acc_reward_per_share: u128) -> Result<u128> {
        let staked = self.staked_amount as u128;
        let whole = staked
            .checked_mul(acc_reward_per_share / PRECISION)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        let frac = staked
            .checked_mul(acc_reward_per_share % PRECISION)
            .ok_or(ErrorCode::ArithmeticOverflow)?
            / PRECISION;
        whole
            .checked_add(frac)
            .ok_or_else(|| ErrorCode::ArithmeticOverflow.into())
    }

    /// Reward earned since the last settlement, before fees.
    pub fn pending_reward(&self, acc_reward_per_share: u128) -> Result<u64> {
        let pending = self
            .accrued(acc_reward_per_share)?
            .checked_sub(self.reward_debt)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        u64::try_from(pending).map_err(|_| ErrorCode::ArithmeticOverflow.into())
    }

    /// Settle pending reward: advance the baseline, book net and fee.
    /// The gross payout never exceeds `budget`; any excess from per-user
    /// rounding is dropped. The caller transfers the returned split.
    pub fn settle(
        &mut self,
        acc_reward_per_share: u128,
        claim_fee_bps: u16,
        budget: u64,
    ) -> Result<FeeSplit> {
        let pending = self.pending_reward(acc_reward_per_share)?.min(budget);
        let split = fees::split_claim(pending, claim_fee_bps)?;

        self.reward_debt = self.accrued(acc_reward_per_share)?;
        self.claimed_total = self
            .claimed_total
            .checked_add(split.net)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.fee_total = self
            .fee_total
            .checked_add(split.fee)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(split)
    }

    /// Add principal and move the baseline to the new stake size.
    /// Settle first; anything unsettled is forfeited.
    pub fn apply_deposit(&mut self, amount: u64, acc_reward_per_share: u128) -> Result<()> {
        self.staked_amount = self
            .staked_amount
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.reward_debt = self.accrued(acc_reward_per_share)?;
        Ok(())
    }

    /// Remove principal and move the baseline to the new stake size.
    pub fn apply_withdrawal(&mut self, amount: u64, acc_reward_per_share: u128) -> Result<()> {
        self.staked_amount = self
            .staked_amount
            .checked_sub(amount)
            .ok_or(ErrorCode::InsufficientStake)?;
        self.reward_debt = self.accrued(acc_reward_per_share)?;
        Ok(())
    }
}
