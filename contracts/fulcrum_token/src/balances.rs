//! Minimal fungible ledger: per-account balances and the running supply.
//!
//! Transfers and allowances are out of scope; the issuance ledger is the only
//! writer and it only ever credits.

use common::admin_registry::{TTL_EXTEND_TO, TTL_THRESHOLD};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

const BALANCE: Symbol = symbol_short!("BAL");
const SUPPLY: Symbol = symbol_short!("SUPPLY");

fn balance_key(account: &Address) -> (Symbol, Address) {
    (BALANCE, account.clone())
}

/// Increase `recipient`'s balance and the total supply by `amount`.
///
/// Overflow is ruled out upstream by the `MAX_SUPPLY` check in
/// [`crate::issuance::issue`].
pub fn credit(env: &Env, recipient: &Address, amount: i128) {
    let key = balance_key(recipient);
    let prev: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    env.storage()
        .persistent()
        .set(&key, &prev.saturating_add(amount));
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

    let supply = total_supply(env).saturating_add(amount);
    env.storage().instance().set(&SUPPLY, &supply);
}

pub fn balance(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&balance_key(account))
        .unwrap_or(0)
}

pub fn total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&SUPPLY).unwrap_or(0)
}
