// =============================================================================
// FIXED-POINT ACCOUNTING
// =============================================================================
// acc_reward_per_share is stored scaled by PRECISION so that per-share
// rewards smaller than one base unit are not lost between updates.
//

/// Scale of `Pool::acc_reward_per_share` (1e18).
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// Basis-point denominator (10_000 = 100%)
pub const BPS_DENOMINATOR: u64 = 10_000;

// =============================================================================
// POOL PARAMETER BOUNDS
// =============================================================================

/// Smallest accepted stake deposit, in staking-token base units.
pub const MIN_STAKE_AMOUNT: u64 = 1;

/// Shortest reward window a pool may be created with (1 hour)
pub const MIN_REWARD_DURATION: u64 = 3_600;

/// Longest reward window a pool may be created with (5 years)
pub const MAX_REWARD_DURATION: u64 = 5 * 365 * 86_400;

/// Largest reward budget whose scaled accumulator cannot overflow `u128`.
///
/// Every update computes `elapsed * rate * PRECISION`, which is at most
/// `reward_amount * PRECISION`, and over the full window the accumulator grows
/// by at most `reward_amount * PRECISION / MIN_STAKE_AMOUNT`. Both stay in
/// range as long as `reward_amount * PRECISION` does. Clamped to `u64::MAX`
/// because token amounts are `u64`.
pub const MAX_SAFE_REWARD_AMOUNT: u64 = {
    let bound = u128::MAX / PRECISION;
    if bound > u64::MAX as u128 {
        u64::MAX
    } else {
        bound as u64
    }
};

// =============================================================================
// FEE LIMITS
// =============================================================================

/// Maximum claim fee in basis points (2000 = 20%)
pub const MAX_CLAIM_FEE_BPS: u16 = 2_000;

// =============================================================================
// QUERY LIMITS
// =============================================================================

/// Hard ceiling on the number of entries a single paginated query may scan.
pub const MAX_QUERY_RANGE: u64 = 1_000;

// =============================================================================
// PDA SEEDS
// =============================================================================

/// Seed for the protocol configuration account (singleton)
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed prefix for pool accounts: ["pool", pool_id.to_le_bytes()]
pub const POOL_SEED: &[u8] = b"pool";

/// Seed prefix for per-user stake records: ["user_stake", pool, owner]
pub const USER_STAKE_SEED: &[u8] = b"user_stake";

/// Seed prefix for the vault holding staked principal: ["staking_vault", pool]
pub const STAKING_VAULT_SEED: &[u8] = b"staking_vault";

/// Seed prefix for the vault holding the escrowed budget: ["reward_vault", pool]
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";
