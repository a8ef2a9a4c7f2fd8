use anchor_lang::prelude::*;

use crate::ledger;
use crate::state::{Pool, UserStake};
use crate::{current_timestamp, pay_out_settlement, withdraw_from_vault, Unstake, Unstaked};

// =============================================================================
// UNSTAKE INSTRUCTION HANDLER
// =============================================================================
// Withdraws principal and settles pending reward. Works in every pool state,
// cancelled and finished included, so principal is never locked.
//

pub fn handler(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    let now = current_timestamp()?;
    let claim_fee_bps = ctx.accounts.config.claim_fee_bps;
    let owner = ctx.accounts.user.key();

    let mut pool = Pool::clone(&ctx.accounts.pool);
    let mut user_stake = UserStake::clone(&ctx.accounts.user_stake);

    let settled = ledger::unstake(&mut pool, &mut user_stake, amount, now, claim_fee_bps)?;

    withdraw_from_vault(
        &ctx.accounts.pool,
        &ctx.accounts.staking_vault,
        &ctx.accounts.user_staking_account,
        &ctx.accounts.staking_mint,
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

    msg!("User {} unstaked {} from pool {}", owner, amount, pool_id);
    if !settled.is_empty() {
        msg!("Claimed {} (fee {})", settled.net, settled.fee);
    }

    emit!(Unstaked {
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
