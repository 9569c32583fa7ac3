#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

use crate::schedule::Pool;

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped and genesis is credited.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub creator: Address,
    pub genesis_supply: i128,
    pub max_supply: i128,
    pub timestamp: u64,
}

/// Fired when the administrator set grows.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminAddedEvent {
    pub added_by: Address,
    pub admin: Address,
    pub timestamp: u64,
}

/// Fired when the campaign-end milestone is recorded.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneSetEvent {
    pub set_by: Address,
    pub milestone: u64,
    pub timestamp: u64,
}

/// Fired when the campaign is declared successful.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SuccessDeclaredEvent {
    pub declared_by: Address,
    pub timestamp: u64,
}

/// Fired when a vesting pool is minted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolMintedEvent {
    pub pool: Pool,
    pub recipient: Address,
    pub amount: i128,
    pub total_issued: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, creator: Address, genesis_supply: i128, max_supply: i128) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            creator,
            genesis_supply,
            max_supply,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_added(env: &Env, added_by: Address, admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_ADD"), admin.clone()),
        AdminAddedEvent {
            added_by,
            admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_milestone_set(env: &Env, set_by: Address, milestone: u64) {
    env.events().publish(
        (symbol_short!("MS_SET"),),
        MilestoneSetEvent {
            set_by,
            milestone,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_success_declared(env: &Env, declared_by: Address) {
    env.events().publish(
        (symbol_short!("SUCCESS"),),
        SuccessDeclaredEvent {
            declared_by,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_pool_minted(
    env: &Env,
    pool: Pool,
    recipient: Address,
    amount: i128,
    total_issued: i128,
) {
    env.events().publish(
        (symbol_short!("POOL_MINT"), recipient.clone()),
        PoolMintedEvent {
            pool,
            recipient,
            amount,
            total_issued,
            timestamp: env.ledger().timestamp(),
        },
    );
}
