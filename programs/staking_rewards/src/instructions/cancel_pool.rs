use anchor_lang::prelude::*;

use crate::ledger;
use crate::state::Pool;
use crate::{current_timestamp, withdraw_from_vault, CancelPool, PoolCancelled};

// =============================================================================
// CANCEL POOL INSTRUCTION HANDLER
// =============================================================================
// Creator-only. Freezes emission at the current time and refunds every reward
// unit that was not emitted during staked time. Rewards already earned stay
// in the vault for stakers to claim.
//

pub fn handler(ctx: Context<CancelPool>) -> Result<()> {
    let now = current_timestamp()?;
    let caller = ctx.accounts.creator.key();

    let mut pool = Pool::clone(&ctx.accounts.pool);
    let refund = ledger::cancel(&mut pool, &caller, now)?;

    withdraw_from_vault(
        &ctx.accounts.pool,
        &ctx.accounts.reward_vault,
        &ctx.accounts.creator_reward_account,
        &ctx.accounts.reward_mint,
        &ctx.accounts.reward_token_program,
        refund,
    )?;

    let pool_id = pool.id;
    ctx.accounts.pool.set_inner(pool);

    msg!("Pool {} cancelled at {}", pool_id, now);
    msg!("Refunded {} to creator", refund);

    emit!(PoolCancelled {
        pool_id,
        creator: caller,
        cancelled_at: now,
        refunded_amount: refund,
    });

    Ok(())
}
