#![no_std]

pub mod balances;
pub mod events;
pub mod issuance;
pub mod milestone;
pub mod outcome;
pub mod schedule;

use common::admin_registry::{self, RegistryError, TTL_EXTEND_TO, TTL_THRESHOLD};
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, Env, String, Symbol, Vec,
};

pub use milestone::MilestoneState;
pub use outcome::CampaignOutcome;
pub use schedule::{
    MintRecord, Pool, PoolInfo, PoolStatus, DAY, DECIMALS, GENESIS_SUPPLY, MAX_SUPPLY, UNIT,
};

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const OWNER: Symbol = symbol_short!("OWNER");

const TOKEN_NAME: &str = "Fulcrum Token";
const TOKEN_SYMBOL: &str = "FULC";

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    AlreadySet = 4,
    NotFuture = 5,
    AlreadyDeclared = 6,
    CampaignNotSuccessful = 7,
    LockupNotElapsed = 8,
    AlreadyMinted = 9,
    SupplyExceeded = 10,
}

impl From<RegistryError> for ContractError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotAdmin => ContractError::Unauthorized,
        }
    }
}

// ── Public-facing types ──────────────────────────────────────────────────────

/// Everything the issuance state machine owns, in one value.
///
/// Returned by `get_state` so callers can compare state across calls.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IssuanceSnapshot {
    pub milestone: MilestoneState,
    pub outcome: CampaignOutcome,
    pub total_issued: i128,
    pub pools: Vec<PoolInfo>,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct FulcrumTokenContract;

#[contractimpl]
impl FulcrumTokenContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the token.
    ///
    /// `creator` becomes the first administrator and the owner, and is
    /// credited the genesis allocation.
    pub fn initialize(env: Env, creator: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        creator.require_auth();

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&OWNER, &creator);
        Self::extend_instance_ttl(&env);

        admin_registry::bootstrap(&env, &creator);
        issuance::issue(&env, &creator, GENESIS_SUPPLY)?;

        events::publish_initialized(&env, creator, GENESIS_SUPPLY, MAX_SUPPLY);

        Ok(())
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&OWNER)
            .ok_or(ContractError::NotInitialized)
    }

    // ── Metadata ─────────────────────────────────────────────────────────────

    pub fn name(env: Env) -> String {
        String::from_str(&env, TOKEN_NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, TOKEN_SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    // ── Administrators ───────────────────────────────────────────────────────

    /// Add `new_admin` to the administrator set.
    ///
    /// Adding an existing administrator succeeds without emitting an event.
    pub fn add_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        if admin_registry::add_admin(&env, &caller, &new_admin)? {
            events::publish_admin_added(&env, caller, new_admin);
        }

        Ok(())
    }

    pub fn is_admin(env: Env, identity: Address) -> bool {
        admin_registry::is_admin(&env, &identity)
    }

    pub fn get_admins(env: Env) -> Vec<Address> {
        admin_registry::list_admins(&env)
    }

    // ── Milestone ────────────────────────────────────────────────────────────

    /// Record the campaign-end milestone.
    ///
    /// Fails with `AlreadySet` on any second attempt and with `NotFuture`
    /// unless `timestamp` is strictly after the current ledger time.
    pub fn set_milestone(env: Env, caller: Address, timestamp: u64) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        milestone::set(&env, timestamp)?;

        events::publish_milestone_set(&env, caller, timestamp);

        Ok(())
    }

    pub fn get_milestone(env: Env) -> Option<u64> {
        milestone::get(&env)
    }

    /// Whether `delay` seconds have passed since the milestone. Always
    /// `false` while no milestone is recorded.
    pub fn has_elapsed(env: Env, delay: u64) -> bool {
        milestone::elapsed_since(&env, delay)
    }

    // ── Campaign outcome ─────────────────────────────────────────────────────

    pub fn declare_success(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        outcome::declare(&env)?;

        events::publish_success_declared(&env, caller);

        Ok(())
    }

    pub fn is_successful(env: Env) -> bool {
        outcome::is_successful(&env)
    }

    // ── Vesting pools ────────────────────────────────────────────────────────

    /// Mint `pool` to `caller`.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// `Unauthorized`, `CampaignNotSuccessful`, `LockupNotElapsed`,
    /// `AlreadyMinted`, `SupplyExceeded`. A failed call leaves the issuance
    /// state unchanged; only the instance TTL may have been extended.
    ///
    /// The caller, not a fixed treasury, receives the pool.
    pub fn mint_pool(env: Env, caller: Address, pool: Pool) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if !outcome::is_successful(&env) {
            return Err(ContractError::CampaignNotSuccessful);
        }
        if !schedule::is_unlocked(&env, pool) {
            return Err(ContractError::LockupNotElapsed);
        }
        if schedule::is_minted(&env, pool) {
            return Err(ContractError::AlreadyMinted);
        }

        let amount = pool.amount();
        let total_issued = issuance::issue(&env, &caller, amount)?;

        schedule::mark_minted(
            &env,
            pool,
            MintRecord {
                recipient: caller.clone(),
                amount,
                minted_at: env.ledger().timestamp(),
            },
        );

        events::publish_pool_minted(&env, pool, caller, amount, total_issued);

        Ok(amount)
    }

    pub fn get_pool(env: Env, pool: Pool) -> PoolInfo {
        schedule::info(&env, pool)
    }

    pub fn get_pools(env: Env) -> Vec<PoolInfo> {
        schedule::all_info(&env)
    }

    /// Whether the time gate for `pool` is open. Says nothing about the
    /// campaign outcome or whether the pool was already minted.
    pub fn is_unlocked(env: Env, pool: Pool) -> bool {
        schedule::is_unlocked(&env, pool)
    }

    // ── Supply ───────────────────────────────────────────────────────────────

    pub fn total_issued(env: Env) -> i128 {
        issuance::total_issued(&env)
    }

    pub fn remaining_headroom(env: Env) -> i128 {
        issuance::remaining_headroom(&env)
    }

    pub fn max_supply(_env: Env) -> i128 {
        MAX_SUPPLY
    }

    pub fn balance_of(env: Env, identity: Address) -> i128 {
        balances::balance(&env, &identity)
    }

    pub fn total_supply(env: Env) -> i128 {
        balances::total_supply(&env)
    }

    /// Full issuance state in a single read.
    pub fn get_state(env: Env) -> IssuanceSnapshot {
        IssuanceSnapshot {
            milestone: milestone::state(&env),
            outcome: outcome::get(&env),
            total_issued: issuance::total_issued(&env),
            pools: schedule::all_info(&env),
        }
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Self::extend_instance_ttl(env);
        Ok(())
    }

    /// Guard: revert if `caller` is not a registered administrator.
    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !admin_registry::is_admin(env, caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn extend_instance_ttl(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
