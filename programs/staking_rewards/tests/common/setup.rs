//! Program deployment, clock and protocol setup helpers.

use litesvm::LiteSVM;
use solana_sdk::clock::Clock;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

use super::instructions::initialize;

/// Cluster time every test starts at. A zero timestamp would read as
/// "emission never started".
pub const T0: i64 = 1_700_000_000;

const PROGRAM_SO: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../target/deploy/staking_rewards.so"
);

/// Boot a LiteSVM with the program deployed and the clock at `T0`.
///
/// Returns None (and the calling test passes vacuously) when the program has
/// not been built with `anchor build` yet.
pub fn start_svm() -> Option<LiteSVM> {
    let program = match std::fs::read(PROGRAM_SO) {
        Ok(bytes) => bytes,
        Err(_) => {
            eprintln!("skipping: {PROGRAM_SO} not found, run `anchor build` first");
            return None;
        }
    };

    let mut svm = LiteSVM::new();
    let _ = svm.add_program(staking_rewards::ID, &program);
    set_time(&mut svm, T0);
    Some(svm)
}

/// Move the cluster clock to `unix_timestamp`.
pub fn set_time(svm: &mut LiteSVM, unix_timestamp: i64) {
    let mut clock = svm.get_sysvar::<Clock>();
    clock.unix_timestamp = unix_timestamp;
    svm.set_sysvar(&clock);
}

/// Authority and fee beneficiary of an initialized protocol.
pub struct Protocol {
    pub authority: Keypair,
    pub beneficiary: Keypair,
}

/// Fund an authority and a beneficiary, then initialize the config.
pub fn init_protocol(svm: &mut LiteSVM, creation_fee: u64, claim_fee_bps: u16) -> Protocol {
    let authority = Keypair::new();
    let beneficiary = Keypair::new();
    svm.airdrop(&authority.pubkey(), 10_000_000_000).unwrap();
    svm.airdrop(&beneficiary.pubkey(), 1_000_000_000).unwrap();

    initialize(
        svm,
        &authority,
        beneficiary.pubkey(),
        creation_fee,
        claim_fee_bps,
    )
    .expect("initialize should succeed");

    Protocol {
        authority,
        beneficiary,
    }
}
