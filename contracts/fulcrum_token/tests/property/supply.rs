#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for supply conservation across the vesting schedule.
//!
//! Invariants tested:
//! - `total_issued == GENESIS_SUPPLY + sum(minted pool amounts)` after every call
//! - `total_issued <= MAX_SUPPLY` always
//! - A pool mints iff its delay has elapsed, regardless of mint order
//! - Once every pool is minted, `total_issued == MAX_SUPPLY` exactly

use fulcrum_token::{
    ContractError, FulcrumTokenContract, FulcrumTokenContractClient, Pool, PoolStatus, DAY,
    GENESIS_SUPPLY, MAX_SUPPLY,
};
use proptest::prelude::*;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::{Address, Env};

const NOW: u64 = 1_700_000_000;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Deploys the token, sets the milestone a week out and declares success.
fn setup() -> (Env, FulcrumTokenContractClient<'static>, Address, u64) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(NOW);

    let contract_id = env.register(FulcrumTokenContract, ());
    let client = FulcrumTokenContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    let milestone = NOW + 7 * DAY;
    client.set_milestone(&admin, &milestone);
    client.declare_success(&admin);

    (env, client, admin, milestone)
}

/// Recomputes what should have been issued from the pool table.
fn expected_issued(client: &FulcrumTokenContractClient) -> i128 {
    let minted: i128 = client
        .get_pools()
        .iter()
        .filter(|info| matches!(info.status, PoolStatus::Minted(_)))
        .map(|info| info.amount)
        .sum();
    GENESIS_SUPPLY + minted
}

fn pool_order() -> impl Strategy<Value = Vec<Pool>> {
    Just(Pool::ALL.to_vec()).prop_shuffle()
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Minting in any order at any time keeps the counter equal to genesis
    /// plus the minted pools, and never exceeds the ceiling.
    #[test]
    fn prop_supply_conserved(order in pool_order(), elapsed in 0u64..=800 * DAY) {
        let (env, client, admin, milestone) = setup();
        env.ledger().set_timestamp(milestone + elapsed);

        for pool in order {
            let result = client.try_mint_pool(&admin, &pool);
            prop_assert_eq!(result.is_ok(), pool.delay() <= elapsed);

            let issued = client.total_issued();
            prop_assert_eq!(issued, expected_issued(&client));
            prop_assert_eq!(client.total_supply(), issued);
            prop_assert!(issued <= MAX_SUPPLY);
            prop_assert_eq!(client.remaining_headroom(), MAX_SUPPLY - issued);
        }
    }

    /// However the schedule is walked, finishing it lands on `MAX_SUPPLY`.
    #[test]
    fn prop_full_schedule_reaches_max_supply(
        order in pool_order(),
        first_pass in 0u64..=730 * DAY,
    ) {
        let (env, client, admin, milestone) = setup();

        env.ledger().set_timestamp(milestone + first_pass);
        for pool in order.iter() {
            let _ = client.try_mint_pool(&admin, pool);
        }

        env.ledger().set_timestamp(milestone + 730 * DAY);
        for pool in order.iter() {
            let _ = client.try_mint_pool(&admin, pool);
        }

        prop_assert_eq!(client.total_issued(), MAX_SUPPLY);
        prop_assert_eq!(client.balance_of(&admin), MAX_SUPPLY);
        prop_assert_eq!(client.remaining_headroom(), 0);
    }

    /// A pool never pays out twice, however many times it is retried.
    #[test]
    fn prop_pool_mints_exactly_once(pool_idx in 0usize..6, retries in 1usize..5) {
        let (env, client, admin, milestone) = setup();
        env.ledger().set_timestamp(milestone + 730 * DAY);
        let pool = Pool::ALL[pool_idx];

        prop_assert_eq!(client.mint_pool(&admin, &pool), pool.amount());
        let issued = client.total_issued();

        for _ in 0..retries {
            prop_assert!(matches!(
                client.try_mint_pool(&admin, &pool),
                Err(Ok(ContractError::AlreadyMinted))
            ));
        }
        prop_assert_eq!(client.total_issued(), issued);
        prop_assert_eq!(client.balance_of(&admin), issued);
    }
}
