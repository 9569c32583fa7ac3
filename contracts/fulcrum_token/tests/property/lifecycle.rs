#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for the one-shot lifecycle transitions.
//!
//! Invariants tested:
//! - `set_milestone(t)` with `t <= now` always fails with `NotFuture`
//! - `set_milestone` succeeds at most once; later calls fail with `AlreadySet`
//!   and never change the stored timestamp
//! - `declare_success` is sticky and fails with `AlreadyDeclared` on repeat

use fulcrum_token::{ContractError, FulcrumTokenContract, FulcrumTokenContractClient};
use proptest::prelude::*;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::{Address, Env};

const NOW: u64 = 1_700_000_000;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn setup() -> (Env, FulcrumTokenContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(NOW);

    let contract_id = env.register(FulcrumTokenContract, ());
    let client = FulcrumTokenContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, client, admin)
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    /// Any timestamp at or before the current ledger time is rejected.
    #[test]
    fn prop_milestone_must_be_future(timestamp in 0u64..=NOW) {
        let (_env, client, admin) = setup();

        match client.try_set_milestone(&admin, &timestamp) {
            Err(Ok(e)) => prop_assert_eq!(e, ContractError::NotFuture),
            _ => prop_assert!(false, "Expected NotFuture error"),
        }
        prop_assert_eq!(client.get_milestone(), None);
    }

    /// Any strictly future timestamp is accepted exactly once.
    #[test]
    fn prop_milestone_set_once(
        first in (NOW + 1)..=u64::MAX,
        second in any::<u64>(),
        advance in 0u64..=10_000_000u64,
    ) {
        let (env, client, admin) = setup();

        client.set_milestone(&admin, &first);
        prop_assert_eq!(client.get_milestone(), Some(first));

        env.ledger().set_timestamp(NOW + advance);
        match client.try_set_milestone(&admin, &second) {
            Err(Ok(e)) => prop_assert_eq!(e, ContractError::AlreadySet),
            _ => prop_assert!(false, "Expected AlreadySet error"),
        }
        prop_assert_eq!(client.get_milestone(), Some(first));
    }

    /// Once declared, success stays declared and cannot be declared again,
    /// by the same or any other administrator.
    #[test]
    fn prop_success_is_sticky(extra_admins in 0usize..4, advance in 0u64..=100_000_000u64) {
        let (env, client, admin) = setup();

        let mut admins = vec![admin.clone()];
        for _ in 0..extra_admins {
            let next = Address::generate(&env);
            client.add_admin(&admin, &next);
            admins.push(next);
        }

        client.declare_success(&admin);
        env.ledger().set_timestamp(NOW + advance);

        for caller in admins.iter() {
            match client.try_declare_success(caller) {
                Err(Ok(e)) => prop_assert_eq!(e, ContractError::AlreadyDeclared),
                _ => prop_assert!(false, "Expected AlreadyDeclared error"),
            }
            prop_assert!(client.is_successful());
        }
    }
}
