//! Authorization Module for the Condo Governance contracts
//!
//! Every contract in the suite is administered by a single address and some of
//! them only accept writes from an explicit allow-list of caller addresses.
//! This crate owns the storage layout for both and the checks built on them.
//!
//! ## Features
//! - One-time administrator bootstrap and admin transfer
//! - Authorized-caller allow-list (grant, revoke, query)
//! - Identity verification combined with allow-list checks

#![no_std]

use soroban_sdk::{contracttype, Address, Env};

/// Lifetime of admin and allow-list entries (~10 years at ~5s per ledger).
pub const ACCESS_TTL_LEDGERS: u32 = 63_072_000;

/// Storage keys for access control
#[contracttype]
#[derive(Clone)]
pub enum AccessKey {
    /// Contract-level admin address
    ContractAdmin,
    /// Callers allowed to invoke mutating operations
    AuthorizedCaller(Address),
}

/// Authorization errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AuthError {
    NotInitialized,
    AlreadyInitialized,
    NotAuthorizedCaller,
}

/// Initialize contract admin (call once during contract initialization)
pub fn initialize_admin(env: &Env, admin: &Address) -> Result<(), AuthError> {
    if has_admin(env) {
        return Err(AuthError::AlreadyInitialized);
    }
    store_admin(env, admin);
    Ok(())
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().persistent().has(&AccessKey::ContractAdmin)
}

/// Get the contract admin address
pub fn get_admin(env: &Env) -> Result<Address, AuthError> {
    env.storage()
        .persistent()
        .get(&AccessKey::ContractAdmin)
        .ok_or(AuthError::NotInitialized)
}

/// Load the admin and require its signature on the current invocation.
pub fn require_admin(env: &Env) -> Result<Address, AuthError> {
    let admin = get_admin(env)?;
    admin.require_auth();
    Ok(admin)
}

/// Check that `address` is the admin without requiring its signature.
pub fn is_admin(env: &Env, address: &Address) -> bool {
    match get_admin(env) {
        Ok(admin) => admin == *address,
        Err(_) => false,
    }
}

/// Hand the admin role to another address (current admin signs)
pub fn transfer_admin(env: &Env, new_admin: &Address) -> Result<Address, AuthError> {
    let previous = require_admin(env)?;
    store_admin(env, new_admin);
    Ok(previous)
}

fn store_admin(env: &Env, admin: &Address) {
    env.storage().persistent().set(&AccessKey::ContractAdmin, admin);
    env.storage().persistent().extend_ttl(
        &AccessKey::ContractAdmin,
        ACCESS_TTL_LEDGERS,
        ACCESS_TTL_LEDGERS,
    );
}

// ── Authorized callers ──────────────────────────────────────────────────────

/// Add an address to the allow-list (admin only)
pub fn grant_caller(env: &Env, caller: &Address) -> Result<(), AuthError> {
    require_admin(env)?;

    let key = AccessKey::AuthorizedCaller(caller.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, ACCESS_TTL_LEDGERS, ACCESS_TTL_LEDGERS);
    Ok(())
}

/// Remove an address from the allow-list (admin only)
pub fn revoke_caller(env: &Env, caller: &Address) -> Result<(), AuthError> {
    require_admin(env)?;

    env.storage()
        .persistent()
        .remove(&AccessKey::AuthorizedCaller(caller.clone()));
    Ok(())
}

/// Check if an address is on the allow-list
pub fn is_authorized_caller(env: &Env, caller: &Address) -> bool {
    env.storage()
        .persistent()
        .get::<AccessKey, bool>(&AccessKey::AuthorizedCaller(caller.clone()))
        .unwrap_or(false)
}

/// Verify the caller's identity, then check the allow-list.
///
/// The list is read from storage on every call; entries may be revoked
/// between invocations.
pub fn require_authorized_caller(env: &Env, caller: &Address) -> Result<(), AuthError> {
    caller.require_auth();

    if is_authorized_caller(env, caller) {
        Ok(())
    } else {
        Err(AuthError::NotAuthorizedCaller)
    }
}
