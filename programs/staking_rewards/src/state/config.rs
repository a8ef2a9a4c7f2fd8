use anchor_lang::prelude::*;

// =============================================================================
// PROTOCOL CONFIG ACCOUNT
// =============================================================================
// Singleton holding admin-controlled parameters and the pool id counter.
// Pools read it; only the authority writes it.
//

/// Protocol-wide configuration.
/// PDA derived with seeds: ["config"]
#[account]
#[derive(Default, Debug)]
pub struct ProtocolConfig {
    /// Admin authority that can update fees and the beneficiary.
    pub authority: Pubkey,

    /// Receives creation fees (lamports) and claim fees (reward tokens).
    pub protocol_beneficiary: Pubkey,

    /// Flat fee in lamports charged on create_pool. 0 = free.
    pub creation_fee: u64,

    /// Cut of every reward settlement, in basis points.
    /// Max allowed is MAX_CLAIM_FEE_BPS (2000 = 20%).
    pub claim_fee_bps: u16,

    /// Number of pools created so far; also the id of the next pool.
    pub pool_count: u64,

    /// PDA bump seed.
    pub bump: u8,
}

impl ProtocolConfig {
    pub const SIZE: usize = 8 + // discriminator
        32 +  // authority
        32 +  // protocol_beneficiary
        8 +   // creation_fee
        2 +   // claim_fee_bps
        8 +   // pool_count
        1; // bump
}
