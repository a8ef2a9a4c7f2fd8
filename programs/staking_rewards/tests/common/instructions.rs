//! Instruction builders and transaction helpers.
//!
//! Account lists and instruction data come from the program's own Anchor
//! client types, so they track the `#[derive(Accounts)]` structs.

use anchor_lang::{InstructionData, ToAccountMetas};
use litesvm::LiteSVM;
use solana_sdk::instruction::{Instruction, InstructionError};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::system_program;
use solana_sdk::transaction::{Transaction, TransactionError};
use staking_rewards::{accounts, instruction, ErrorCode};

use super::pda::*;

pub type TxResult = Result<(), TransactionError>;

/// Send `instructions` in one transaction and expire the blockhash so an
/// identical transaction can be sent again.
pub fn send_all(
    svm: &mut LiteSVM,
    instructions: &[Instruction],
    payer: &Keypair,
    signers: &[&Keypair],
) -> TxResult {
    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    let result = svm
        .send_transaction(tx)
        .map(|_| ())
        .map_err(|failed| failed.err);
    svm.expire_blockhash();
    result
}

pub fn send(svm: &mut LiteSVM, ix: Instruction, signer: &Keypair) -> TxResult {
    send_all(svm, &[ix], signer, &[signer])
}

/// Assert the transaction failed with the program's `expected` error.
pub fn assert_program_error(result: TxResult, expected: ErrorCode) {
    let code = u32::from(expected);
    match result {
        Err(TransactionError::InstructionError(_, InstructionError::Custom(actual))) => {
            assert_eq!(actual, code, "wrong program error")
        }
        other => panic!("expected program error {code}, got {other:?}"),
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Addresses of one pool and its token side.
#[derive(Clone, Copy)]
pub struct PoolAccounts {
    pub id: u64,
    pub pool: Pubkey,
    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub staking_vault: Pubkey,
    pub reward_vault: Pubkey,
    pub staking_token_program: Pubkey,
    pub reward_token_program: Pubkey,
}

impl PoolAccounts {
    pub fn new(
        id: u64,
        staking_mint: Pubkey,
        reward_mint: Pubkey,
        staking_token_program: Pubkey,
        reward_token_program: Pubkey,
    ) -> Self {
        let pool = find_pool_pda(id);
        Self {
            id,
            pool,
            staking_mint,
            reward_mint,
            staking_vault: find_staking_vault_pda(&pool),
            reward_vault: find_reward_vault_pda(&pool),
            staking_token_program,
            reward_token_program,
        }
    }

    /// Pool whose mints are both classic SPL Token.
    pub fn classic(id: u64, staking_mint: Pubkey, reward_mint: Pubkey) -> Self {
        Self::new(
            id,
            staking_mint,
            reward_mint,
            anchor_spl::token::ID,
            anchor_spl::token::ID,
        )
    }
}

/// A staker's wallet and token accounts for one pool.
pub struct StakerAccounts<'a> {
    pub user: &'a Keypair,
    pub staking_account: Pubkey,
    pub reward_account: Pubkey,
    pub beneficiary_reward_account: Option<Pubkey>,
}

// ============================================================================
// Admin
// ============================================================================

pub fn initialize(
    svm: &mut LiteSVM,
    authority: &Keypair,
    protocol_beneficiary: Pubkey,
    creation_fee: u64,
    claim_fee_bps: u16,
) -> TxResult {
    let ix = Instruction {
        program_id: staking_rewards::ID,
        accounts: accounts::Initialize {
            authority: authority.pubkey(),
            config: find_config_pda(),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: instruction::Initialize {
            protocol_beneficiary,
            creation_fee,
            claim_fee_bps,
        }
        .data(),
    };
    send(svm, ix, authority)
}

pub fn set_claim_fee_bps(svm: &mut LiteSVM, authority: &Keypair, claim_fee_bps: u16) -> TxResult {
    let ix = Instruction {
        program_id: staking_rewards::ID,
        accounts: accounts::UpdateConfig {
            authority: authority.pubkey(),
            config: find_config_pda(),
        }
        .to_account_metas(None),
        data: instruction::SetClaimFeeBps { claim_fee_bps }.data(),
    };
    send(svm, ix, authority)
}

// ============================================================================
// Pool lifecycle
// ============================================================================

pub fn create_pool(
    svm: &mut LiteSVM,
    creator: &Keypair,
    pool: &PoolAccounts,
    creator_reward_account: Pubkey,
    protocol_beneficiary: Pubkey,
    reward_amount: u64,
    reward_duration: u64,
    creation_fee: u64,
) -> TxResult {
    let ix = Instruction {
        program_id: staking_rewards::ID,
        accounts: accounts::CreatePool {
            creator: creator.pubkey(),
            config: find_config_pda(),
            pool: pool.pool,
            staking_mint: pool.staking_mint,
            reward_mint: pool.reward_mint,
            staking_vault: pool.staking_vault,
            reward_vault: pool.reward_vault,
            creator_reward_account,
            protocol_beneficiary,
            staking_token_program: pool.staking_token_program,
            reward_token_program: pool.reward_token_program,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: instruction::CreatePool {
            reward_amount,
            reward_duration,
            creation_fee,
        }
        .data(),
    };
    send(svm, ix, creator)
}

pub fn cancel_pool(
    svm: &mut LiteSVM,
    creator: &Keypair,
    pool: &PoolAccounts,
    creator_reward_account: Pubkey,
) -> TxResult {
    let ix = Instruction {
        program_id: staking_rewards::ID,
        accounts: accounts::CancelPool {
            creator: creator.pubkey(),
            pool: pool.pool,
            reward_mint: pool.reward_mint,
            reward_vault: pool.reward_vault,
            creator_reward_account,
            reward_token_program: pool.reward_token_program,
        }
        .to_account_metas(None),
        data: instruction::CancelPool {}.data(),
    };
    send(svm, ix, creator)
}

// ============================================================================
// Staking
// ============================================================================

pub fn stake(
    svm: &mut LiteSVM,
    pool: &PoolAccounts,
    staker: &StakerAccounts,
    amount: u64,
) -> TxResult {
    let user = staker.user.pubkey();
    let ix = Instruction {
        program_id: staking_rewards::ID,
        accounts: accounts::Stake {
            user,
            config: find_config_pda(),
            pool: pool.pool,
            user_stake: find_user_stake_pda(&pool.pool, &user),
            staking_mint: pool.staking_mint,
            reward_mint: pool.reward_mint,
            staking_vault: pool.staking_vault,
            reward_vault: pool.reward_vault,
            user_staking_account: staker.staking_account,
            user_reward_account: staker.reward_account,
            beneficiary_reward_account: staker.beneficiary_reward_account,
            staking_token_program: pool.staking_token_program,
            reward_token_program: pool.reward_token_program,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: instruction::Stake { amount }.data(),
    };
    send(svm, ix, staker.user)
}

pub fn unstake(
    svm: &mut LiteSVM,
    pool: &PoolAccounts,
    staker: &StakerAccounts,
    amount: u64,
) -> TxResult {
    let user = staker.user.pubkey();
    let ix = Instruction {
        program_id: staking_rewards::ID,
        accounts: accounts::Unstake {
            user,
            config: find_config_pda(),
            pool: pool.pool,
            user_stake: find_user_stake_pda(&pool.pool, &user),
            staking_mint: pool.staking_mint,
            reward_mint: pool.reward_mint,
            staking_vault: pool.staking_vault,
            reward_vault: pool.reward_vault,
            user_staking_account: staker.staking_account,
            user_reward_account: staker.reward_account,
            beneficiary_reward_account: staker.beneficiary_reward_account,
            staking_token_program: pool.staking_token_program,
            reward_token_program: pool.reward_token_program,
        }
        .to_account_metas(None),
        data: instruction::Unstake { amount }.data(),
    };
    send(svm, ix, staker.user)
}

/// Claim pending reward. With `with_stake_record` false the UserStake slot is
/// left empty, as a wallet that never staked would send it.
pub fn claim(
    svm: &mut LiteSVM,
    pool: &PoolAccounts,
    staker: &StakerAccounts,
    with_stake_record: bool,
) -> TxResult {
    let user = staker.user.pubkey();
    let user_stake = with_stake_record.then(|| find_user_stake_pda(&pool.pool, &user));
    let ix = Instruction {
        program_id: staking_rewards::ID,
        accounts: accounts::Claim {
            user,
            config: find_config_pda(),
            pool: pool.pool,
            user_stake,
            reward_mint: pool.reward_mint,
            reward_vault: pool.reward_vault,
            user_reward_account: staker.reward_account,
            beneficiary_reward_account: staker.beneficiary_reward_account,
            reward_token_program: pool.reward_token_program,
        }
        .to_account_metas(None),
        data: instruction::Claim {}.data(),
    };
    send(svm, ix, staker.user)
}
