use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::fees;
use crate::{ConfigUpdated, UpdateConfig};

// =============================================================================
// ADMIN CONFIGURATION
// =============================================================================
// Authority-gated setters. The has_one constraint on UpdateConfig rejects any
// other signer before these run. Changes apply to every pool from the next
// instruction on; already-settled rewards are unaffected.
//

fn emit_updated(ctx: &Context<UpdateConfig>) {
    let config = &ctx.accounts.config;
    emit!(ConfigUpdated {
        authority: config.authority,
        protocol_beneficiary: config.protocol_beneficiary,
        creation_fee: config.creation_fee,
        claim_fee_bps: config.claim_fee_bps,
    });
}

pub fn set_protocol_beneficiary(ctx: Context<UpdateConfig>, beneficiary: Pubkey) -> Result<()> {
    require!(beneficiary != Pubkey::default(), ErrorCode::InvalidBeneficiary);
    ctx.accounts.config.protocol_beneficiary = beneficiary;
    msg!("Beneficiary set to {}", beneficiary);
    emit_updated(&ctx);
    Ok(())
}

pub fn set_creation_fee(ctx: Context<UpdateConfig>, creation_fee: u64) -> Result<()> {
    ctx.accounts.config.creation_fee = creation_fee;
    msg!("Creation fee set to {} lamports", creation_fee);
    emit_updated(&ctx);
    Ok(())
}

pub fn set_claim_fee_bps(ctx: Context<UpdateConfig>, claim_fee_bps: u16) -> Result<()> {
    fees::validate_claim_fee_bps(claim_fee_bps)?;
    ctx.accounts.config.claim_fee_bps = claim_fee_bps;
    msg!("Claim fee set to {} bps", claim_fee_bps);
    emit_updated(&ctx);
    Ok(())
}

pub fn transfer_authority(ctx: Context<UpdateConfig>, new_authority: Pubkey) -> Result<()> {
    require!(new_authority != Pubkey::default(), ErrorCode::Unauthorized);
    ctx.accounts.config.authority = new_authority;
    msg!("Authority transferred to {}", new_authority);
    emit_updated(&ctx);
    Ok(())
}
