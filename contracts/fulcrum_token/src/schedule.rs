//! The vesting schedule: six named pools, each with a fixed amount and an
//! unlock delay measured from the campaign-end milestone.
//!
//! Amounts are expressed in base units (18 decimals). The genesis allocation
//! plus every pool amount must add up to [`MAX_SUPPLY`] exactly; this is
//! checked at compile time below.

use common::admin_registry::{TTL_EXTEND_TO, TTL_THRESHOLD};
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

use crate::milestone;

// ── Supply constants ─────────────────────────────────────────────────────────

pub const DECIMALS: u32 = 18;
pub const UNIT: i128 = 1_000_000_000_000_000_000;
pub const DAY: u64 = 86_400;

/// Credited to the creator by `initialize`, outside the vesting pools.
pub const GENESIS_SUPPLY: i128 = 100_000_000 * UNIT;
/// Hard ceiling on everything ever issued.
pub const MAX_SUPPLY: i128 = 200_000_000 * UNIT;

const POOL_STATUS: Symbol = symbol_short!("POOL");

// ── Types ────────────────────────────────────────────────────────────────────

/// A named allocation of new supply.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Pool {
    CommunityRewards = 1,
    StrategicPartnershipsInitial = 2,
    Advisors = 3,
    Reserve = 4,
    Team = 5,
    StrategicPartnershipsDeferred = 6,
}

impl Pool {
    /// Every pool, in table order.
    pub const ALL: [Pool; 6] = [
        Pool::CommunityRewards,
        Pool::StrategicPartnershipsInitial,
        Pool::Advisors,
        Pool::Reserve,
        Pool::Team,
        Pool::StrategicPartnershipsDeferred,
    ];

    /// Fixed amount credited when this pool is minted.
    pub const fn amount(self) -> i128 {
        match self {
            Pool::CommunityRewards => 15_000_000 * UNIT,
            Pool::StrategicPartnershipsInitial => 10_000_000 * UNIT,
            Pool::Advisors => 8_000_000 * UNIT,
            Pool::Reserve => 17_000_000 * UNIT,
            Pool::Team => 40_000_000 * UNIT,
            Pool::StrategicPartnershipsDeferred => 10_000_000 * UNIT,
        }
    }

    /// Seconds after the milestone before this pool may be minted.
    /// Zero means "as soon as the campaign is declared successful".
    pub const fn delay(self) -> u64 {
        match self {
            Pool::CommunityRewards | Pool::StrategicPartnershipsInitial => 0,
            Pool::Advisors => 365 * DAY,
            Pool::Reserve => 548 * DAY,
            Pool::Team | Pool::StrategicPartnershipsDeferred => 730 * DAY,
        }
    }
}

const fn pools_total() -> i128 {
    let mut total = 0;
    let mut i = 0;
    while i < Pool::ALL.len() {
        total += Pool::ALL[i].amount();
        i += 1;
    }
    total
}

const _: () = assert!(GENESIS_SUPPLY + pools_total() == MAX_SUPPLY);

/// What was recorded when a pool was minted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintRecord {
    pub recipient: Address,
    pub amount: i128,
    pub minted_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PoolStatus {
    Unminted,
    Minted(MintRecord),
}

/// Static configuration and current status of one pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInfo {
    pub pool: Pool,
    pub amount: i128,
    pub delay: u64,
    pub status: PoolStatus,
}

// ── Storage ──────────────────────────────────────────────────────────────────

fn status_key(pool: Pool) -> (Symbol, Pool) {
    (POOL_STATUS, pool)
}

pub fn status(env: &Env, pool: Pool) -> PoolStatus {
    let key = status_key(pool);
    match env.storage().persistent().get(&key) {
        Some(status) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
            status
        }
        None => PoolStatus::Unminted,
    }
}

pub fn is_minted(env: &Env, pool: Pool) -> bool {
    matches!(status(env, pool), PoolStatus::Minted(_))
}

/// Records the pool as consumed. Callers must have already credited the
/// ledger; there is no way back to `Unminted`.
pub fn mark_minted(env: &Env, pool: Pool, record: MintRecord) {
    let key = status_key(pool);
    env.storage()
        .persistent()
        .set(&key, &PoolStatus::Minted(record));
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Queries ──────────────────────────────────────────────────────────────────

/// Time gate for `pool`. Zero-delay pools are unlocked even when no
/// milestone has been recorded.
pub fn is_unlocked(env: &Env, pool: Pool) -> bool {
    let delay = pool.delay();
    delay == 0 || milestone::elapsed_since(env, delay)
}

pub fn info(env: &Env, pool: Pool) -> PoolInfo {
    PoolInfo {
        pool,
        amount: pool.amount(),
        delay: pool.delay(),
        status: status(env, pool),
    }
}

pub fn all_info(env: &Env) -> Vec<PoolInfo> {
    let mut pools = Vec::new(env);
    for pool in Pool::ALL {
        pools.push_back(info(env, pool));
    }
    pools
}
