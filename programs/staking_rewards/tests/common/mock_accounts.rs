//! Token account fixtures.
//!
//! Classic SPL mints and token accounts are written straight into the SVM as
//! raw account data. The Token-2022 transfer-fee mint goes through the real
//! token program so its extension layout is exact.

use anchor_spl::token_2022::spl_token_2022;
use anchor_spl::token_2022::spl_token_2022::extension::transfer_fee;
use anchor_spl::token_2022::spl_token_2022::extension::ExtensionType;
use litesvm::LiteSVM;
use solana_sdk::account::Account;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::system_instruction;

use super::instructions::send_all;

/// Create an initialized SPL Token mint (82-byte layout).
pub fn create_mock_mint(svm: &mut LiteSVM, decimals: u8) -> Pubkey {
    let mint = Pubkey::new_unique();

    let mut data = vec![0u8; 82];
    // mint_authority: COption tag Some, key left zeroed
    data[0] = 1;
    data[44] = decimals;
    // is_initialized
    data[45] = 1;

    let account = Account {
        lamports: 1_000_000_000,
        data,
        owner: anchor_spl::token::ID,
        executable: false,
        rent_epoch: 0,
    };
    svm.set_account(mint, account).unwrap();

    mint
}

/// Create an initialized SPL Token account (165-byte layout) holding `amount`.
pub fn create_mock_token_account(
    svm: &mut LiteSVM,
    mint: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Pubkey {
    let address = Pubkey::new_unique();

    let mut data = vec![0u8; 165];
    data[0..32].copy_from_slice(mint.as_ref());
    data[32..64].copy_from_slice(owner.as_ref());
    data[64..72].copy_from_slice(&amount.to_le_bytes());
    // state: Initialized
    data[108] = 1;

    let account = Account {
        lamports: 1_000_000_000,
        data,
        owner: anchor_spl::token::ID,
        executable: false,
        rent_epoch: 0,
    };
    svm.set_account(address, account).unwrap();

    address
}

/// Create a Token-2022 mint charging `fee_bps` on every transfer, plus a
/// token account for `holder` funded with `amount`. Returns (mint, account).
pub fn create_transfer_fee_mint_and_account(
    svm: &mut LiteSVM,
    payer: &Keypair,
    holder: &Pubkey,
    fee_bps: u16,
    amount: u64,
) -> (Pubkey, Pubkey) {
    let program = spl_token_2022::ID;
    let mint = Keypair::new();
    let account = Keypair::new();

    let mint_len = ExtensionType::try_calculate_account_len::<spl_token_2022::state::Mint>(&[
        ExtensionType::TransferFeeConfig,
    ])
    .unwrap();
    let account_len = ExtensionType::try_calculate_account_len::<
        spl_token_2022::state::Account,
    >(&[ExtensionType::TransferFeeAmount])
    .unwrap();

    let instructions = vec![
        system_instruction::create_account(
            &payer.pubkey(),
            &mint.pubkey(),
            svm.minimum_balance_for_rent_exemption(mint_len),
            mint_len as u64,
            &program,
        ),
        transfer_fee::instruction::initialize_transfer_fee_config(
            &program,
            &mint.pubkey(),
            None,
            None,
            fee_bps,
            u64::MAX,
        )
        .unwrap(),
        spl_token_2022::instruction::initialize_mint2(
            &program,
            &mint.pubkey(),
            &payer.pubkey(),
            None,
            6,
        )
        .unwrap(),
        system_instruction::create_account(
            &payer.pubkey(),
            &account.pubkey(),
            svm.minimum_balance_for_rent_exemption(account_len),
            account_len as u64,
            &program,
        ),
        spl_token_2022::instruction::initialize_account3(
            &program,
            &account.pubkey(),
            &mint.pubkey(),
            holder,
        )
        .unwrap(),
        spl_token_2022::instruction::mint_to(
            &program,
            &mint.pubkey(),
            &account.pubkey(),
            &payer.pubkey(),
            &[],
            amount,
        )
        .unwrap(),
    ];

    send_all(svm, &instructions, payer, &[payer, &mint, &account])
        .expect("transfer-fee mint setup should succeed");

    (mint.pubkey(), account.pubkey())
}

/// Token amount of a classic or Token-2022 account.
pub fn get_token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    let account = svm
        .get_account(token_account)
        .expect("token account should exist");
    u64::from_le_bytes(account.data[64..72].try_into().unwrap())
}

pub fn get_lamports(svm: &LiteSVM, address: &Pubkey) -> u64 {
    svm.get_account(address).map_or(0, |account| account.lamports)
}

/// True when nothing lives at `address` (never created, or rolled back).
pub fn account_is_absent(svm: &LiteSVM, address: &Pubkey) -> bool {
    svm.get_account(address)
        .map_or(true, |account| account.lamports == 0 && account.data.is_empty())
}
