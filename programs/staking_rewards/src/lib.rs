use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================
// These modules organize our code into logical components.
//

/// Constants module: precision, bounds, PDA seeds
pub mod constants;

/// Error codes returned by our program
pub mod errors;

/// Claim fee splitting
pub mod fees;

/// Input and token-movement guards
pub mod guards;

/// Instruction handlers: initialize, create_pool, stake, unstake, claim, etc.
pub mod instructions;

/// Pure reward-accounting operations over Pool and UserStake
pub mod ledger;

/// Account state structures: ProtocolConfig, Pool, UserStake
pub mod state;

/// Read-only query shapes
pub mod views;

// Re-export errors for easier access
pub use errors::ErrorCode;

use constants::*;
use fees::FeeSplit;
use ledger::RewardQuote;
use state::{Pool, ProtocolConfig, UserStake};
use views::PoolSummary;

// =============================================================================
// PROGRAM ID
// =============================================================================

declare_id!("G89vi6j7k7Aij9fXvR14dF7yM1GLT6bFUwJY32d5eXUr");

// Staking Rewards - fixed-budget reward pools
//
// A creator escrows a reward budget against a staking token. The budget is
// streamed to stakers pro rata over a fixed window of staked time:
// - Emission starts with the first stake
// - Time with nobody staked extends the window instead of burning rewards
// - The creator can cancel and recover whatever was not yet earned
// - Every reward payout carries a protocol claim fee
//

// =============================================================================
// TOKEN MOVEMENT HELPERS
// =============================================================================
// Shared by the handlers in instructions/. Vault payouts are signed by the
// pool PDA: ["pool", id LE, bump].

/// Current cluster time as unsigned unix seconds.
pub fn current_timestamp() -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    u64::try_from(now).map_err(|_| error!(ErrorCode::ArithmeticOverflow))
}

/// Move tokens from a user-owned account into a pool vault and check the
/// vault grew by exactly `amount`.
///
/// # Arguments
/// * `from` - Source token account, owned by `authority`
/// * `vault` - Destination pool vault (reloaded after the CPI)
/// * `mint` - Token mint, for `transfer_checked`
/// * `authority` - Signer owning `from`
/// * `token_program` - SPL Token or Token-2022
/// * `amount` - Amount to transfer
pub fn deposit_into_vault<'info>(
    from: &InterfaceAccount<'info, TokenAccount>,
    vault: &mut InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    authority: &Signer<'info>,
    token_program: &Interface<'info, TokenInterface>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let balance_before = vault.amount;

    let transfer_ctx = CpiContext::new(
        token_program.to_account_info(),
        TransferChecked {
            from: from.to_account_info(),
            mint: mint.to_account_info(),
            to: vault.to_account_info(),
            authority: authority.to_account_info(),
        },
    );
    token_interface::transfer_checked(transfer_ctx, amount, mint.decimals)?;

    vault.reload()?;
    guards::verify_inbound_transfer(balance_before, vault.amount, amount)
}

/// Move tokens out of a pool vault, signed by the pool PDA.
pub fn withdraw_from_vault<'info>(
    pool: &Account<'info, Pool>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    to: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    token_program: &Interface<'info, TokenInterface>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let pool_id = pool.id.to_le_bytes();
    let pool_seeds = &[POOL_SEED, pool_id.as_ref(), &[pool.bump]];
    let signer_seeds = &[&pool_seeds[..]];

    let transfer_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        TransferChecked {
            from: vault.to_account_info(),
            mint: mint.to_account_info(),
            to: to.to_account_info(),
            authority: pool.to_account_info(),
        },
        signer_seeds,
    );
    token_interface::transfer_checked(transfer_ctx, amount, mint.decimals)?;

    msg!("Transferred {} tokens out of pool {} vault", amount, pool.id);
    Ok(())
}

/// Pay a settled reward: net to the user, fee to the protocol beneficiary.
/// The beneficiary account may be omitted only when there is no fee.
pub fn pay_out_settlement<'info>(
    split: FeeSplit,
    pool: &Account<'info, Pool>,
    reward_vault: &InterfaceAccount<'info, TokenAccount>,
    user_reward_account: &InterfaceAccount<'info, TokenAccount>,
    beneficiary_reward_account: Option<&InterfaceAccount<'info, TokenAccount>>,
    reward_mint: &InterfaceAccount<'info, Mint>,
    token_program: &Interface<'info, TokenInterface>,
) -> Result<()> {
    withdraw_from_vault(
        pool,
        reward_vault,
        user_reward_account,
        reward_mint,
        token_program,
        split.net,
    )?;

    if split.fee > 0 {
        let beneficiary =
            beneficiary_reward_account.ok_or(ErrorCode::InvalidBeneficiary)?;
        withdraw_from_vault(
            pool,
            reward_vault,
            beneficiary,
            reward_mint,
            token_program,
            split.fee,
        )?;
    }
    Ok(())
}

#[program]
pub mod staking_rewards {
    use super::*;
    use crate::instructions;

    // =========================================================================
    // PROTOCOL ADMINISTRATION
    // =========================================================================

    /// Create the ProtocolConfig singleton. The signer becomes the authority.
    ///
    /// # Arguments
    /// * `protocol_beneficiary` - Receives creation and claim fees
    /// * `creation_fee` - Flat lamport fee for create_pool
    /// * `claim_fee_bps` - Fee on reward payouts in basis points (max 2000)
    pub fn initialize(
        ctx: Context<Initialize>,
        protocol_beneficiary: Pubkey,
        creation_fee: u64,
        claim_fee_bps: u16,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, protocol_beneficiary, creation_fee, claim_fee_bps)
    }

    pub fn set_protocol_beneficiary(ctx: Context<UpdateConfig>, beneficiary: Pubkey) -> Result<()> {
        instructions::update_config::set_protocol_beneficiary(ctx, beneficiary)
    }

    pub fn set_creation_fee(ctx: Context<UpdateConfig>, creation_fee: u64) -> Result<()> {
        instructions::update_config::set_creation_fee(ctx, creation_fee)
    }

    pub fn set_claim_fee_bps(ctx: Context<UpdateConfig>, claim_fee_bps: u16) -> Result<()> {
        instructions::update_config::set_claim_fee_bps(ctx, claim_fee_bps)
    }

    /// Hand the authority to another key. Takes effect immediately.
    pub fn transfer_authority(ctx: Context<UpdateConfig>, new_authority: Pubkey) -> Result<()> {
        instructions::update_config::transfer_authority(ctx, new_authority)
    }

    // =========================================================================
    // POOL LIFECYCLE
    // =========================================================================

    /// Open a pool and escrow its reward budget. Returns the new pool id.
    ///
    /// # Arguments
    /// * `reward_amount` - Total reward budget
    /// * `reward_duration` - Seconds of staked time over which it is emitted
    /// * `creation_fee` - Must equal ProtocolConfig.creation_fee
    pub fn create_pool(
        ctx: Context<CreatePool>,
        reward_amount: u64,
        reward_duration: u64,
        creation_fee: u64,
    ) -> Result<u64> {
        instructions::create_pool::handler(ctx, reward_amount, reward_duration, creation_fee)
    }

    /// Stop emission and refund the unearned budget to the creator.
    pub fn cancel_pool(ctx: Context<CancelPool>) -> Result<()> {
        instructions::cancel_pool::handler(ctx)
    }

    // =========================================================================
    // STAKING
    // =========================================================================

    /// Deposit staking tokens; pending reward on an existing stake is paid out.
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::handler(ctx, amount)
    }

    /// Withdraw staking tokens and pending reward.
    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake::handler(ctx, amount)
    }

    /// Withdraw pending reward only.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::handler(ctx)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================
    // Simulate these; results are returned as instruction return data.

    pub fn claimable_reward(ctx: Context<ClaimableRewardView>, user: Pubkey) -> Result<RewardQuote> {
        instructions::query::claimable_reward(ctx, user)
    }

    /// Pool summaries for ids [from, to). Pass the pools as remaining accounts.
    pub fn get_pools(ctx: Context<QueryPools>, from: u64, to: u64) -> Result<Vec<PoolSummary>> {
        instructions::query::get_pools(ctx, from, to)
    }

    /// Ids in [from, to) where `user` has a stake record.
    /// Pass (pool, user_stake PDA) pairs as remaining accounts.
    pub fn get_engaged_pools(
        ctx: Context<QueryPools>,
        user: Pubkey,
        from: u64,
        to: u64,
    ) -> Result<Vec<u64>> {
        instructions::query::get_engaged_pools(ctx, user, from, to)
    }

    /// Claimable reward of `user` for each pool in [from, to).
    /// Pass (pool, user_stake PDA) pairs as remaining accounts.
    pub fn get_claimable_rewards(
        ctx: Context<QueryPools>,
        user: Pubkey,
        from: u64,
        to: u64,
    ) -> Result<Vec<RewardQuote>> {
        instructions::query::get_claimable_rewards(ctx, user, from, to)
    }
}

// =============================================================================
// ACCOUNT STRUCTS
// =============================================================================

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Pays for the config account and becomes its authority.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Protocol config singleton.
    /// PDA derived from seeds: ["config"]
    #[account(
        init,
        payer = authority,
        space = ProtocolConfig::SIZE,
        seeds = [CONFIG_SEED],
        bump,
    )]
    pub config: Account<'info, ProtocolConfig>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ ErrorCode::Unauthorized,
    )]
    pub config: Account<'info, ProtocolConfig>,
}

#[derive(Accounts)]
pub struct CreatePool<'info> {
    // =========================================================================
    // PAYER & CONFIG
    // =========================================================================
    /// Pool creator. Pays rent, the creation fee and the reward budget.
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Supplies the next pool id and the creation fee.
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, ProtocolConfig>>,

    // =========================================================================
    // POOL ACCOUNT (PDA)
    // =========================================================================
    /// PDA derived from seeds: ["pool", pool_count as u64 LE]
    #[account(
        init,
        payer = creator,
        space = Pool::SIZE,
        seeds = [POOL_SEED, &config.pool_count.to_le_bytes()],
        bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    // =========================================================================
    // TOKEN MINTS
    // =========================================================================
    #[account(mint::token_program = staking_token_program)]
    pub staking_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mint::token_program = reward_token_program)]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    // =========================================================================
    // POOL VAULTS (PDAs)
    // =========================================================================
    // Token accounts owned by the Pool PDA.
    //
    /// Holds staked principal.
    /// PDA seeds: ["staking_vault", pool]
    #[account(
        init,
        payer = creator,
        seeds = [STAKING_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = pool,
        token::token_program = staking_token_program,
    )]
    pub staking_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Holds the reward budget.
    /// PDA seeds: ["reward_vault", pool]
    #[account(
        init,
        payer = creator,
        seeds = [REWARD_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = pool,
        token::token_program = reward_token_program,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    // =========================================================================
    // FUNDING
    // =========================================================================
    /// Creator's reward token account; source of the budget.
    #[account(
        mut,
        constraint = creator_reward_account.mint == reward_mint.key() @ ErrorCode::InvalidMint,
        constraint = creator_reward_account.owner == creator.key() @ ErrorCode::InvalidOwner,
    )]
    pub creator_reward_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the creation fee in lamports.
    #[account(
        mut,
        address = config.protocol_beneficiary @ ErrorCode::InvalidBeneficiary,
    )]
    pub protocol_beneficiary: SystemAccount<'info>,

    // =========================================================================
    // PROGRAMS
    // =========================================================================
    pub staking_token_program: Interface<'info, TokenInterface>,
    pub reward_token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct CancelPool<'info> {
    /// Must be the pool creator; checked against Pool.creator.
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, &pool.id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        address = pool.reward_mint @ ErrorCode::InvalidMint,
        mint::token_program = reward_token_program,
    )]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED, pool.key().as_ref()],
        bump = pool.reward_vault_bump,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the refund.
    #[account(
        mut,
        constraint = creator_reward_account.mint == pool.reward_mint @ ErrorCode::InvalidMint,
        constraint = creator_reward_account.owner == creator.key() @ ErrorCode::InvalidOwner,
    )]
    pub creator_reward_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub reward_token_program: Interface<'info, TokenInterface>,
}

#[derive(Accounts)]
pub struct Stake<'info> {
    // =========================================================================
    // USER & STATE
    // =========================================================================
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Box<Account<'info, ProtocolConfig>>,

    #[account(
        mut,
        seeds = [POOL_SEED, &pool.id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// Created on the first stake into this pool.
    /// PDA seeds: ["user_stake", pool, user]
    #[account(
        init_if_needed,
        payer = user,
        space = UserStake::SIZE,
        seeds = [USER_STAKE_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump,
    )]
    pub user_stake: Box<Account<'info, UserStake>>,

    // =========================================================================
    // TOKEN MINTS
    // =========================================================================
    #[account(
        address = pool.staking_mint @ ErrorCode::InvalidMint,
        mint::token_program = staking_token_program,
    )]
    pub staking_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        address = pool.reward_mint @ ErrorCode::InvalidMint,
        mint::token_program = reward_token_program,
    )]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    // =========================================================================
    // POOL VAULTS
    // =========================================================================
    #[account(
        mut,
        seeds = [STAKING_VAULT_SEED, pool.key().as_ref()],
        bump = pool.staking_vault_bump,
    )]
    pub staking_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED, pool.key().as_ref()],
        bump = pool.reward_vault_bump,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    // =========================================================================
    // TOKEN ACCOUNTS
    // =========================================================================
    /// Source of the staked tokens.
    #[account(
        mut,
        constraint = user_staking_account.mint == pool.staking_mint @ ErrorCode::InvalidMint,
        constraint = user_staking_account.owner == user.key() @ ErrorCode::InvalidOwner,
    )]
    pub user_staking_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives auto-claimed reward.
    #[account(
        mut,
        constraint = user_reward_account.mint == pool.reward_mint @ ErrorCode::InvalidMint,
        constraint = user_reward_account.owner == user.key() @ ErrorCode::InvalidOwner,
    )]
    pub user_reward_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the claim fee. Required whenever a fee is due.
    #[account(
        mut,
        constraint = beneficiary_reward_account.mint == pool.reward_mint @ ErrorCode::InvalidMint,
        constraint = beneficiary_reward_account.owner == config.protocol_beneficiary @ ErrorCode::InvalidBeneficiary,
    )]
    pub beneficiary_reward_account: Option<Box<InterfaceAccount<'info, TokenAccount>>>,

    // =========================================================================
    // PROGRAMS
    // =========================================================================
    pub staking_token_program: Interface<'info, TokenInterface>,
    pub reward_token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Unstake<'info> {
    pub user: Signer<'info>,

    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Box<Account<'info, ProtocolConfig>>,

    #[account(
        mut,
        seeds = [POOL_SEED, &pool.id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        seeds = [USER_STAKE_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump = user_stake.bump,
        constraint = user_stake.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_stake: Box<Account<'info, UserStake>>,

    #[account(
        address = pool.staking_mint @ ErrorCode::InvalidMint,
        mint::token_program = staking_token_program,
    )]
    pub staking_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        address = pool.reward_mint @ ErrorCode::InvalidMint,
        mint::token_program = reward_token_program,
    )]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        seeds = [STAKING_VAULT_SEED, pool.key().as_ref()],
        bump = pool.staking_vault_bump,
    )]
    pub staking_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED, pool.key().as_ref()],
        bump = pool.reward_vault_bump,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the withdrawn principal.
    #[account(
        mut,
        constraint = user_staking_account.mint == pool.staking_mint @ ErrorCode::InvalidMint,
        constraint = user_staking_account.owner == user.key() @ ErrorCode::InvalidOwner,
    )]
    pub user_staking_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = user_reward_account.mint == pool.reward_mint @ ErrorCode::InvalidMint,
        constraint = user_reward_account.owner == user.key() @ ErrorCode::InvalidOwner,
    )]
    pub user_reward_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = beneficiary_reward_account.mint == pool.reward_mint @ ErrorCode::InvalidMint,
        constraint = beneficiary_reward_account.owner == config.protocol_beneficiary @ ErrorCode::InvalidBeneficiary,
    )]
    pub beneficiary_reward_account: Option<Box<InterfaceAccount<'info, TokenAccount>>>,

    pub staking_token_program: Interface<'info, TokenInterface>,
    pub reward_token_program: Interface<'info, TokenInterface>,
}

#[derive(Accounts)]
pub struct Claim<'info> {
    pub user: Signer<'info>,

    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Box<Account<'info, ProtocolConfig>>,

    #[account(
        mut,
        seeds = [POOL_SEED, &pool.id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// Omit if the user never staked in this pool; the claim is then a no-op.
    #[account(
        mut,
        seeds = [USER_STAKE_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump = user_stake.bump,
        constraint = user_stake.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_stake: Option<Box<Account<'info, UserStake>>>,

    #[account(
        address = pool.reward_mint @ ErrorCode::InvalidMint,
        mint::token_program = reward_token_program,
    )]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED, pool.key().as_ref()],
        bump = pool.reward_vault_bump,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = user_reward_account.mint == pool.reward_mint @ ErrorCode::InvalidMint,
        constraint = user_reward_account.owner == user.key() @ ErrorCode::InvalidOwner,
    )]
    pub user_reward_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = beneficiary_reward_account.mint == pool.reward_mint @ ErrorCode::InvalidMint,
        constraint = beneficiary_reward_account.owner == config.protocol_beneficiary @ ErrorCode::InvalidBeneficiary,
    )]
    pub beneficiary_reward_account: Option<Box<InterfaceAccount<'info, TokenAccount>>>,

    pub reward_token_program: Interface<'info, TokenInterface>,
}

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct ClaimableRewardView<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, ProtocolConfig>,

    #[account(
        seeds = [POOL_SEED, &pool.id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    /// Omit if the user never staked in this pool.
    #[account(
        seeds = [USER_STAKE_SEED, pool.key().as_ref(), user.as_ref()],
        bump = user_stake.bump,
    )]
    pub user_stake: Option<Account<'info, UserStake>>,
}

/// Range queries read their records from remaining accounts.
#[derive(Accounts)]
pub struct QueryPools<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, ProtocolConfig>,
}

// =============================================================================
// EVENTS
// =============================================================================

#[event]
pub struct ConfigInitialized {
    pub authority: Pubkey,
    pub protocol_beneficiary: Pubkey,
    pub creation_fee: u64,
    pub claim_fee_bps: u16,
}

/// Emitted after any admin setter; carries the full new config.
#[event]
pub struct ConfigUpdated {
    pub authority: Pubkey,
    pub protocol_beneficiary: Pubkey,
    pub creation_fee: u64,
    pub claim_fee_bps: u16,
}

#[event]
pub struct PoolCreated {
    pub pool_id: u64,
    pub creator: Pubkey,
    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_amount: u64,
    pub reward_duration: u64,
    pub creation_fee: u64,
}

#[event]
pub struct PoolCancelled {
    pub pool_id: u64,
    pub creator: Pubkey,
    pub cancelled_at: u64,
    pub refunded_amount: u64,
}

#[event]
pub struct Staked {
    pub pool_id: u64,
    pub user: Pubkey,
    pub amount: u64,
    /// User's stake after the deposit.
    pub staked_amount: u64,
    pub total_staked: u64,
    /// Auto-claimed reward, net of fee.
    pub reward_paid: u64,
    pub fee_paid: u64,
}

#[event]
pub struct Unstaked {
    pub pool_id: u64,
    pub user: Pubkey,
    pub amount: u64,
    pub staked_amount: u64,
    pub total_staked: u64,
    pub reward_paid: u64,
    pub fee_paid: u64,
}

#[event]
pub struct RewardClaimed {
    pub pool_id: u64,
    pub user: Pubkey,
    /// Net of fee.
    pub amount: u64,
    pub fee: u64,
}
