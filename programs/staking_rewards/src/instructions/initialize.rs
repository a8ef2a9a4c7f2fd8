use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::fees;
use crate::{ConfigInitialized, Initialize};

// =============================================================================
// INITIALIZE INSTRUCTION HANDLER
// =============================================================================
// Creates the ProtocolConfig singleton. The signer becomes the authority.
//

/// Initialize the protocol configuration.
///
/// # Arguments
/// * `ctx` - The validated accounts context
/// * `protocol_beneficiary` - Receives creation fees and claim fees
/// * `creation_fee` - Flat lamport fee charged on create_pool (0 = free)
/// * `claim_fee_bps` - Cut of every reward settlement in basis points (max 2000)
pub fn handler(
    ctx: Context<Initialize>,
    protocol_beneficiary: Pubkey,
    creation_fee: u64,
    claim_fee_bps: u16,
) -> Result<()> {
    require!(
        protocol_beneficiary != Pubkey::default(),
        ErrorCode::InvalidBeneficiary
    );
    fees::validate_claim_fee_bps(claim_fee_bps)?;

    let config = &mut ctx.accounts.config;
    config.bump = ctx.bumps.config;
    config.authority = ctx.accounts.authority.key();
    config.protocol_beneficiary = protocol_beneficiary;
    config.creation_fee = creation_fee;
    config.claim_fee_bps = claim_fee_bps;
    config.pool_count = 0;

    msg!("Staking rewards protocol initialized");
    msg!("Authority: {}", config.authority);
    msg!("Beneficiary: {}", config.protocol_beneficiary);
    msg!("Creation fee: {} lamports", config.creation_fee);
    msg!("Claim fee: {} bps", config.claim_fee_bps);

    emit!(ConfigInitialized {
        authority: config.authority,
        protocol_beneficiary,
        creation_fee,
        claim_fee_bps,
    });

    Ok(())
}
