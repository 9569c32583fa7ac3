//! The campaign-end milestone: a single timestamp, recorded once, from which
//! every vesting delay is measured.

use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

use crate::ContractError;

const MILESTONE: Symbol = symbol_short!("MILESTONE");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MilestoneState {
    Unset,
    Set(u64),
}

pub fn state(env: &Env) -> MilestoneState {
    env.storage()
        .instance()
        .get(&MILESTONE)
        .unwrap_or(MilestoneState::Unset)
}

pub fn get(env: &Env) -> Option<u64> {
    match state(env) {
        MilestoneState::Set(timestamp) => Some(timestamp),
        MilestoneState::Unset => None,
    }
}

/// Records the milestone. Fails with `AlreadySet` if one exists and with
/// `NotFuture` unless `timestamp` is strictly after the current ledger time.
pub fn set(env: &Env, timestamp: u64) -> Result<(), ContractError> {
    if let MilestoneState::Set(_) = state(env) {
        return Err(ContractError::AlreadySet);
    }
    if timestamp <= env.ledger().timestamp() {
        return Err(ContractError::NotFuture);
    }

    env.storage()
        .instance()
        .set(&MILESTONE, &MilestoneState::Set(timestamp));
    Ok(())
}

/// `true` iff a milestone exists and at least `delay` seconds have passed
/// since it. An unset milestone, or one whose unlock time overflows, is
/// never elapsed.
pub fn elapsed_since(env: &Env, delay: u64) -> bool {
    match get(env).and_then(|milestone| milestone.checked_add(delay)) {
        Some(unlock_at) => env.ledger().timestamp() >= unlock_at,
        None => false,
    }
}
