use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const ADMIN_PREFIX: Symbol = symbol_short!("ADMIN");
const ADMIN_LIST: Symbol = symbol_short!("ADM_LIST");

pub const TTL_THRESHOLD: u32 = 5184000;
pub const TTL_EXTEND_TO: u32 = 10368000;

/// Returned when a privileged registry operation is attempted by an
/// address that is not a member.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegistryError {
    NotAdmin,
}

// ── Storage Helpers ──────────────────────────────────────────────────────────

fn admin_key(admin: &Address) -> (Symbol, Address) {
    (ADMIN_PREFIX, admin.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Writes a membership entry and appends it to the tracked list.
/// Returns `false` if `admin` was already a member.
fn insert(env: &Env, admin: &Address) -> bool {
    if is_admin(env, admin) {
        return false;
    }

    let key = admin_key(admin);
    env.storage().persistent().set(&key, &true);
    extend_ttl(env, &key);

    let mut admins = list_admins(env);
    admins.push_back(admin.clone());
    env.storage().persistent().set(&ADMIN_LIST, &admins);
    true
}

// ── Core Functions ───────────────────────────────────────────────────────────

/// Seeds the registry with its first member during contract initialization.
/// Callers must make sure this runs only once.
pub fn bootstrap(env: &Env, admin: &Address) {
    insert(env, admin);
}

/// Returns `true` if `admin` is a registered administrator.
pub fn is_admin(env: &Env, admin: &Address) -> bool {
    let key = admin_key(admin);
    let member = env.storage().persistent().has(&key);
    if member {
        extend_ttl(env, &key);
    }
    member
}

/// Adds `target` to the registry on behalf of `caller`.
///
/// The caller must already be a member and must have been authenticated via
/// `require_auth()`. Adding an existing member is a no-op.
///
/// Returns `Ok(true)` if membership grew, `Ok(false)` if `target` was
/// already present.
pub fn add_admin(env: &Env, caller: &Address, target: &Address) -> Result<bool, RegistryError> {
    if !is_admin(env, caller) {
        return Err(RegistryError::NotAdmin);
    }
    Ok(insert(env, target))
}

/// Returns all administrators in the order they were added.
pub fn list_admins(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&ADMIN_LIST)
        .unwrap_or(Vec::new(env))
}
