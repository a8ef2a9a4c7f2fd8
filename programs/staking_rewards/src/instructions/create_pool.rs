use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::guards;
use crate::errors::ErrorCode;
use crate::state::Pool;
use crate::{deposit_into_vault, CreatePool, PoolCreated};

// =============================================================================
// CREATE POOL INSTRUCTION HANDLER
// =============================================================================
// Anyone may open a pool. The creator pays the flat creation fee in lamports
// and escrows the whole reward budget up front. Emission does not begin until
// the first stake.
//

/// Create a new staking pool and return its id.
///
/// # Arguments
/// * `reward_amount` - Total reward budget, escrowed now
/// * `reward_duration` - Emission window in seconds, not counting idle time
/// * `creation_fee` - Must equal the configured fee exactly
pub fn handler(
    ctx: Context<CreatePool>,
    reward_amount: u64,
    reward_duration: u64,
    creation_fee: u64,
) -> Result<u64> {
    let staking_mint = ctx.accounts.staking_mint.key();
    let reward_mint = ctx.accounts.reward_mint.key();

    guards::validate_pool_params(&staking_mint, &reward_mint, reward_amount, reward_duration)?;
    guards::validate_creation_fee(creation_fee, ctx.accounts.config.creation_fee)?;

    // Creation fee goes straight to the beneficiary
    if creation_fee > 0 {
        let fee_ctx = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.creator.to_account_info(),
                to: ctx.accounts.protocol_beneficiary.to_account_info(),
            },
        );
        system_program::transfer(fee_ctx, creation_fee)?;
    }

    // Escrow the reward budget; the vault must grow by exactly reward_amount
    deposit_into_vault(
        &ctx.accounts.creator_reward_account,
        &mut ctx.accounts.reward_vault,
        &ctx.accounts.reward_mint,
        &ctx.accounts.creator,
        &ctx.accounts.reward_token_program,
        reward_amount,
    )?;

    let pool_id = ctx.accounts.config.pool_count;
    let creator = ctx.accounts.creator.key();

    ctx.accounts.pool.set_inner(Pool {
        id: pool_id,
        staking_mint,
        reward_mint,
        creator,
        reward_amount,
        reward_duration,
        bump: ctx.bumps.pool,
        staking_vault_bump: ctx.bumps.staking_vault,
        reward_vault_bump: ctx.bumps.reward_vault,
        ..Pool::default()
    });

    let config = &mut ctx.accounts.config;
    config.pool_count = config
        .pool_count
        .checked_add(1)
        .ok_or(ErrorCode::ArithmeticOverflow)?;

    msg!("Pool {} created by {}", pool_id, creator);
    msg!("Stake: {}, reward: {}", staking_mint, reward_mint);
    msg!(
        "Budget: {} over {}s (rate {}/s)",
        reward_amount,
        reward_duration,
        ctx.accounts.pool.reward_rate()
    );

    emit!(PoolCreated {
        pool_id,
        creator,
        staking_mint,
        reward_mint,
        reward_amount,
        reward_duration,
        creation_fee,
    });

    Ok(pool_id)
}
