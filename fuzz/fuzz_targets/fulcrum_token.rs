#![no_main]

use arbitrary::Arbitrary;
use fulcrum_token::{FulcrumTokenContract, FulcrumTokenContractClient, Pool, MAX_SUPPLY};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    Address, Env,
};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    AddAdmin { by: u8, who: u8 },
    SetMilestone { by: u8, timestamp: u64 },
    DeclareSuccess { by: u8 },
    MintPool { by: u8, pool: u8 },
    Advance { seconds: u32 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(FulcrumTokenContract, ());
    let client = FulcrumTokenContractClient::new(&env, &contract_id);

    let mut users = vec![Address::generate(&env)];
    for _ in 0..4 {
        users.push(Address::generate(&env));
    }
    client.initialize(&users[0]);

    let mut now = 0u64;
    for action in actions {
        match action {
            FuzzAction::AddAdmin { by, who } => {
                let by = &users[by as usize % users.len()];
                let who = &users[who as usize % users.len()];
                let _ = client.try_add_admin(by, who);
            }
            FuzzAction::SetMilestone { by, timestamp } => {
                let by = &users[by as usize % users.len()];
                let _ = client.try_set_milestone(by, &timestamp);
            }
            FuzzAction::DeclareSuccess { by } => {
                let by = &users[by as usize % users.len()];
                let _ = client.try_declare_success(by);
            }
            FuzzAction::MintPool { by, pool } => {
                let by = &users[by as usize % users.len()];
                let pool = Pool::ALL[pool as usize % Pool::ALL.len()];
                let _ = client.try_mint_pool(by, &pool);
            }
            FuzzAction::Advance { seconds } => {
                now = now.saturating_add(seconds as u64);
                env.ledger().set_timestamp(now);
            }
        }

        // The ceiling and the ledger must agree after every call.
        let issued = client.total_issued();
        assert!(issued <= MAX_SUPPLY);
        assert_eq!(client.total_supply(), issued);
        assert_eq!(client.remaining_headroom(), MAX_SUPPLY - issued);
        let balances: i128 = users.iter().map(|u| client.balance_of(u)).sum();
        assert_eq!(balances, issued);
    }
});
