//! Aggregate supply counter and the `MAX_SUPPLY` ceiling.
//!
//! [`issue`] is the only path by which supply grows: genesis at
//! initialization and each pool mint afterwards.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{balances, schedule::MAX_SUPPLY, ContractError};

const ISSUED: Symbol = symbol_short!("ISSUED");

pub fn total_issued(env: &Env) -> i128 {
    env.storage().instance().get(&ISSUED).unwrap_or(0)
}

pub fn remaining_headroom(env: &Env) -> i128 {
    MAX_SUPPLY - total_issued(env)
}

/// Raise the counter by `amount` and credit `recipient`.
///
/// Fails with `SupplyExceeded`, leaving state untouched, if the new total
/// would pass `MAX_SUPPLY`. Returns the new total on success. `amount` is
/// always a positive constant: genesis or a pool allocation.
pub fn issue(env: &Env, recipient: &Address, amount: i128) -> Result<i128, ContractError> {
    debug_assert!(amount > 0, "issued amount must be positive");

    let new_total = total_issued(env)
        .checked_add(amount)
        .filter(|total| *total <= MAX_SUPPLY)
        .ok_or(ContractError::SupplyExceeded)?;

    env.storage().instance().set(&ISSUED, &new_total);
    balances::credit(env, recipient, amount);

    Ok(new_total)
}
