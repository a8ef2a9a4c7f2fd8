use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, MAX_CLAIM_FEE_BPS};
use crate::errors::ErrorCode;

// =============================================================================
// CLAIM FEE SPLITTING
// =============================================================================
// Every settlement diverts claim_fee_bps of the pending reward to the protocol
// beneficiary. The rest goes to the staker.
//

/// Result of splitting a settled reward between staker and protocol.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeSplit {
    /// Paid to the staker.
    pub net: u64,
    /// Paid to the protocol beneficiary.
    pub fee: u64,
}

impl FeeSplit {
    pub fn gross(&self) -> u64 {
        self.net + self.fee
    }

    pub fn is_empty(&self) -> bool {
        self.net == 0 && self.fee == 0
    }
}

pub fn validate_claim_fee_bps(claim_fee_bps: u16) -> Result<()> {
    require!(claim_fee_bps <= MAX_CLAIM_FEE_BPS, ErrorCode::FeeTooHigh);
    Ok(())
}

/// Split `pending` into `(net, fee)` with `fee = pending * bps / 10_000`,
/// rounded down in the staker's favour.
pub fn split_claim(pending: u64, claim_fee_bps: u16) -> Result<FeeSplit> {
    validate_claim_fee_bps(claim_fee_bps)?;
    let fee = (pending as u128)
        .checked_mul(claim_fee_bps as u128)
        .ok_or(ErrorCode::ArithmeticOverflow)?
        / BPS_DENOMINATOR as u128;
    // fee <= pending because bps <= 10_000
    let fee = fee as u64;
    Ok(FeeSplit {
        net: pending - fee,
        fee,
    })
}
