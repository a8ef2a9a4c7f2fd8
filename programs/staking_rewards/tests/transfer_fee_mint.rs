//! Fee-on-transfer reward tokens are refused at pool creation.

mod common;

use common::*;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use staking_rewards::ErrorCode;

const CREATION_FEE: u64 = 1_000_000;
const BUDGET: u64 = 10_000;
const DURATION: u64 = 10_000;

#[test]
fn create_pool_with_transfer_fee_reward_mint_reverts_and_escrows_nothing() {
    let Some(mut svm) = start_svm() else { return };
    let protocol = init_protocol(&mut svm, CREATION_FEE, 0);
    let beneficiary = protocol.beneficiary.pubkey();

    let creator = Keypair::new();
    svm.airdrop(&creator.pubkey(), 10_000_000_000).unwrap();

    // 1% withheld on every transfer: the vault would receive 9_900
    let (fee_mint, creator_reward_account) =
        create_transfer_fee_mint_and_account(&mut svm, &creator, &creator.pubkey(), 100, BUDGET);
    let staking_mint = create_mock_mint(&mut svm, 6);
    let pool = PoolAccounts::new(
        0,
        staking_mint,
        fee_mint,
        anchor_spl::token::ID,
        anchor_spl::token_2022::ID,
    );

    let beneficiary_before = get_lamports(&svm, &beneficiary);
    let result = create_pool(
        &mut svm,
        &creator,
        &pool,
        creator_reward_account,
        beneficiary,
        BUDGET,
        DURATION,
        CREATION_FEE,
    );
    assert_program_error(result, ErrorCode::TokenHasTransferFeesOrRebasing);

    // Whole instruction rolled back: no pool, no vaults, no fee, tokens untouched
    assert_eq!(get_token_balance(&svm, &creator_reward_account), BUDGET);
    assert_eq!(get_lamports(&svm, &beneficiary), beneficiary_before);
    assert!(account_is_absent(&svm, &pool.pool));
    assert!(account_is_absent(&svm, &pool.reward_vault));
    assert!(account_is_absent(&svm, &pool.staking_vault));

    // The id was not consumed: a well-behaved pool still gets id 0
    let reward_mint = create_mock_mint(&mut svm, 6);
    let classic_reward_account =
        create_mock_token_account(&mut svm, &reward_mint, &creator.pubkey(), BUDGET);
    let classic = PoolAccounts::classic(0, staking_mint, reward_mint);
    assert_eq!(classic.pool, pool.pool);
    create_pool(
        &mut svm,
        &creator,
        &classic,
        classic_reward_account,
        beneficiary,
        BUDGET,
        DURATION,
        CREATION_FEE,
    )
    .expect("create_pool with a plain mint should succeed");
    assert_eq!(get_token_balance(&svm, &classic.reward_vault), BUDGET);
}
