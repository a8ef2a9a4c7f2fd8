use anchor_lang::prelude::*;

use crate::ledger;
use crate::state::{Pool, UserStake};
use crate::{current_timestamp, pay_out_settlement, Claim, RewardClaimed};

// =============================================================================
// CLAIM INSTRUCTION HANDLER
// =============================================================================
// Pays out pending reward. Nothing pending is a successful no-op, including
// for a wallet that never staked and so has no UserStake record.
//

pub fn handler(ctx: Context<Claim>) -> Result<()> {
    let now = current_timestamp()?;
    let claim_fee_bps = ctx.accounts.config.claim_fee_bps;
    let owner = ctx.accounts.user.key();

    let Some(stored) = ctx.accounts.user_stake.as_deref() else {
        msg!("Nothing to claim in pool {}", ctx.accounts.pool.id);
        return Ok(());
    };

    let mut pool = Pool::clone(&ctx.accounts.pool);
    let mut user_stake = UserStake::clone(stored);

    let settled = ledger::claim(&mut pool, &mut user_stake, now, claim_fee_bps)?;

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
    ctx.accounts.pool.set_inner(pool);
    if let Some(stored) = ctx.accounts.user_stake.as_mut() {
        stored.set_inner(user_stake);
    }

    if settled.is_empty() {
        msg!("Nothing to claim in pool {}", pool_id);
        return Ok(());
    }

    msg!(
        "User {} claimed {} from pool {} (fee {})",
        owner,
        settled.net,
        pool_id,
        settled.fee
    );

    emit!(RewardClaimed {
        pool_id,
        user: owner,
        amount: settled.net,
        fee: settled.fee,
    });

    Ok(())
}
