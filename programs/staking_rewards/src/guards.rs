use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ErrorCode;

// =============================================================================
// SAFETY GUARDS
// =============================================================================
// Checks that run before the program trusts an input or a token movement.
//

/// Validate the parameters of a new pool.
pub fn validate_pool_params(
    staking_mint: &Pubkey,
    reward_mint: &Pubkey,
    reward_amount: u64,
    reward_duration: u64,
) -> Result<()> {
    require!(
        *staking_mint != Pubkey::default() && *reward_mint != Pubkey::default(),
        ErrorCode::InvalidToken
    );
    require!(
        reward_amount > 0 && reward_amount <= MAX_SAFE_REWARD_AMOUNT,
        ErrorCode::InvalidAmount
    );
    require!(
        (MIN_REWARD_DURATION..=MAX_REWARD_DURATION).contains(&reward_duration),
        ErrorCode::InvalidDuration
    );
    Ok(())
}

/// The flat creation fee must be paid exactly. No partial payment, no change.
pub fn validate_creation_fee(offered: u64, configured: u64) -> Result<()> {
    require!(offered == configured, ErrorCode::InvalidCreationFee);
    Ok(())
}

/// Reject an inbound transfer unless the vault grew by exactly `amount`.
///
/// Fee-on-transfer mints deliver less than requested, rebasing mints can move
/// the balance either way, and a frozen or blacklisted source may deliver
/// nothing. Call with the vault balance read before the transfer and the
/// balance after reloading the account.
pub fn verify_inbound_transfer(balance_before: u64, balance_after: u64, amount: u64) -> Result<()> {
    let expected = balance_before
        .checked_add(amount)
        .ok_or(ErrorCode::ArithmeticOverflow)?;
    require!(
        balance_after == expected,
        ErrorCode::TokenHasTransferFeesOrRebasing
    );
    Ok(())
}
