use anchor_lang::prelude::*;

// =============================================================================
// ERROR CODES
// =============================================================================

#[error_code]
pub enum ErrorCode {
    // =========================================================================
    // AUTHORIZATION ERRORS
    // =========================================================================
    /// Caller is not the config authority or the pool creator
    #[msg("Unauthorized")]
    Unauthorized,

    // =========================================================================
    // INPUT VALIDATION ERRORS
    // =========================================================================
    /// Staking or reward mint is the default (zero) key
    #[msg("Invalid token")]
    InvalidToken,

    /// Amount is zero, below the minimum stake, or above the safe reward bound
    #[msg("Invalid amount")]
    InvalidAmount,

    /// Reward duration outside [MIN_REWARD_DURATION, MAX_REWARD_DURATION]
    #[msg("Invalid reward duration")]
    InvalidDuration,

    /// Creation fee argument does not match the configured fee exactly
    #[msg("Creation fee does not match the configured fee")]
    InvalidCreationFee,

    /// Claim fee cannot exceed 20% (2000 basis points)
    #[msg("Fee too high (max 20%)")]
    FeeTooHigh,

    /// Protocol beneficiary cannot be the default (zero) key
    #[msg("Invalid beneficiary")]
    InvalidBeneficiary,

    /// Token account mint doesn't match the pool's mint
    #[msg("Invalid token mint")]
    InvalidMint,

    /// Token account owner doesn't match expected
    #[msg("Invalid token account owner")]
    InvalidOwner,

    /// Query range is empty, inverted, past the end, or wider than MAX_QUERY_RANGE
    #[msg("Invalid pagination range")]
    InvalidPagination,

    /// Remaining accounts don't line up with the requested query range
    #[msg("Query accounts don't match the requested range")]
    InvalidQueryAccounts,

    // =========================================================================
    // POOL STATE ERRORS
    // =========================================================================
    /// Pool does not exist
    #[msg("Pool not found")]
    PoolNotFound,

    /// Pool was cancelled by its creator - no new stakes
    #[msg("Pool is cancelled")]
    PoolCancelled,

    /// cancel_pool called twice
    #[msg("Pool is already cancelled")]
    PoolAlreadyCancelled,

    /// Reward window has ended - no new stakes
    #[msg("Pool reward window has finished")]
    PoolFinished,

    // =========================================================================
    // BALANCE ERRORS
    // =========================================================================
    /// Unstake amount exceeds the caller's stake
    #[msg("Insufficient stake")]
    InsufficientStake,

    // =========================================================================
    // SAFETY ERRORS
    // =========================================================================
    /// Vault balance moved by something other than the requested amount
    #[msg("Token has transfer fees or is rebasing")]
    TokenHasTransferFeesOrRebasing,

    /// Checked arithmetic failed
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
