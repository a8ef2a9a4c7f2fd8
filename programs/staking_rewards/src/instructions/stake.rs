use anchor_lang::prelude::*;

use crate::ledger;
use crate::state::{Pool, UserStake};
use crate::{current_timestamp, deposit_into_vault, pay_out_settlement, Stake, Staked};

// =============================================================================
// STAKE INSTRUCTION HANDLER
// =============================================================================
// Deposits staking tokens. An existing stake is settled first, so pending
// reward is paid out (minus the claim fee) in the same instruction. The first
// stake into a pool starts its reward window.
//

pub fn handler(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let now = current_timestamp()?;
    let claim_fee_bps = ctx.accounts.config.claim_fee_bps;
    let owner = ctx.accounts.user.key();

    let mut pool = Pool::clone(&ctx.accounts.pool);
    let mut user_stake = UserStake::clone(&ctx.accounts.user_stake);

    // Fresh record from init_if_needed
    if user_stake.owner == Pubkey::default() {
        user_stake.owner = owner;
        user_stake.pool_id = pool.id;
        user_stake.bump = ctx.bumps.user_stake;
    }

    let settled = ledger::stake(&mut pool, &mut user_stake, amount, now, claim_fee_bps)?;

    deposit_into_vault(
        &ctx.accounts.user_staking_account,
        &mut ctx.accounts.staking_vault,
        &ctx.accounts.staking_mint,
        &ctx.accounts.user,
        &ctx.accounts.staking_token_program,
        amount,
    )?;

    pay_out_settlement(
        settled,
        &ctx.accounts.pool,
        &ctx.accounts.reward_vault,
        &ctx.accounts.user_reward_account,
        ctx.accounts.beneficiary_reward_account.as_deref(),
        &ctx.accounts.reward_mint,
        &ctx.accounts.reward_token_program,
    )?;

    let pool_id = pool.id;
    let staked_amount = user_stake.staked_amount;
    let total_staked = pool.total_staked;
    ctx.accounts.pool.set_inner(pool);
    ctx.accounts.user_stake.set_inner(user_stake);

    msg!("User {} staked {} in pool {}", owner, amount, pool_id);
    if !settled.is_empty() {
        msg!("Auto-claimed {} (fee {})", settled.net, settled.fee);
    }

    emit!(Staked {
        pool_id,
        user: owner,
        amount,
        staked_amount,
        total_staked,
        reward_paid: settled.net,
        fee_paid: settled.fee,
    });

    Ok(())
}
