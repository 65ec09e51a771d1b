//! # RBAC: Role-Based Access Control
//!
//! Manages the three capabilities used by the claimdrop contract:
//!
//! ```text
//! Owner (exactly one)
//!     ├── Authorized   (batch uploads, campaign creation, delegated claims)
//!     └── Blacklister  (blacklist, replace_address, remove_address)
//! ```
//!
//! The owner implicitly holds every capability; the other two are explicit
//! address sets managed by the owner.
//!
//! ## Storage layout
//!
//! - `RbacKey::Owner` → `Address` (Instance): the one and only owner.
//! - `RbacKey::PendingOwner` → `PendingOwnership` (Instance), see [`crate::ownership`].
//! - `RbacKey::AuthorizedList` → `Vec<Address>` (Instance): insertion-ordered, for paging.
//! - `RbacKey::Authorized(addr)` → `bool` (Persistent): O(1) membership.
//! - `RbacKey::Blacklister(addr)` → `bool` (Persistent).
//! - `RbacKey::Blacklisted(addr)` → `bool` (Persistent).
//!
//! ## Threat model notes
//!
//! - Only the owner can grant or revoke `Authorized` and `Blacklister`.
//! - The owner cannot be removed through role management; ownership moves
//!   only through the propose/accept flow in [`crate::ownership`].
//! - A blacklisted wallet is blocked from claiming, but it keeps any role it
//!   holds; the two sets are independent.

use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

use crate::events;
use crate::storage::{bump_instance, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use crate::types::PendingOwnership;
use crate::Error;

// ─────────────────────────────────────────────────────────
// Role enum used by the capability check
// ─────────────────────────────────────────────────────────

/// Capability required by a mutating entry point.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    /// Role administration, campaign closure, ownership hand-over.
    Owner,
    /// Allocation uploads, campaign creation, claiming on a wallet's behalf.
    Authorized,
    /// Blacklist mutation and allocation address maintenance.
    Blacklister,
}

// ─────────────────────────────────────────────────────────
// Storage keys
// ─────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RbacKey {
    Owner,
    PendingOwner,
    AuthorizedList,
    Authorized(Address),
    Blacklister(Address),
    Blacklisted(Address),
}

// ─────────────────────────────────────────────────────────
// Storage helpers (private)
// ─────────────────────────────────────────────────────────

fn read_flag(env: &Env, key: &RbacKey) -> bool {
    let flag: Option<bool> = env.storage().persistent().get(key);
    if flag.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    flag.unwrap_or(false)
}

/// Store `true` flags; remove the entry for `false` so revoked members cost no rent.
fn write_flag(env: &Env, key: &RbacKey, flag: bool) {
    if flag {
        env.storage().persistent().set(key, &true);
        env.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    } else {
        env.storage().persistent().remove(key);
    }
}

fn authorized_list(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&RbacKey::AuthorizedList)
        .unwrap_or(Vec::new(env))
}

/// Read the owner address, returning `None` before init.
pub fn get_owner(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&RbacKey::Owner)
}

/// Read the owner, panicking with `Error::NotInitialized` before init.
pub fn owner(env: &Env) -> Address {
    get_owner(env).unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub(crate) fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&RbacKey::Owner, owner);
}

pub(crate) fn get_pending(env: &Env) -> Option<PendingOwnership> {
    env.storage().instance().get(&RbacKey::PendingOwner)
}

pub(crate) fn set_pending(env: &Env, pending: &PendingOwnership) {
    env.storage().instance().set(&RbacKey::PendingOwner, pending);
}

pub(crate) fn clear_pending(env: &Env) {
    env.storage().instance().remove(&RbacKey::PendingOwner);
}

// ─────────────────────────────────────────────────────────
// Initialisation
// ─────────────────────────────────────────────────────────

/// Set the initial owner. Must be called exactly once (during contract
/// initialisation). Panics with `Error::AlreadyInitialized` if called again.
pub fn init_owner(env: &Env, owner: &Address) {
    if env.storage().instance().has(&RbacKey::Owner) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
    set_owner(env, owner);
    bump_instance(env);
}

// ─────────────────────────────────────────────────────────
// Role assignment
// ─────────────────────────────────────────────────────────

/// Grant or revoke `Authorized` for each of `wallets`.
///
/// - `caller` must be the owner.
/// - Idempotent: re-granting or re-revoking leaves membership unchanged and
///   emits nothing for that wallet.
pub fn manage_authorized(env: &Env, caller: &Address, wallets: &Vec<Address>, grant: bool) {
    require_role(env, caller, Role::Owner);

    let mut list = authorized_list(env);
    for wallet in wallets.iter() {
        let key = RbacKey::Authorized(wallet.clone());
        if read_flag(env, &key) == grant {
            continue;
        }
        write_flag(env, &key, grant);
        if grant {
            list.push_back(wallet.clone());
        } else if let Some(pos) = list.first_index_of(wallet.clone()) {
            list.remove(pos);
        }
        events::emit_authorized_updated(env, wallet, grant);
    }
    env.storage().instance().set(&RbacKey::AuthorizedList, &list);
}

/// Grant or revoke `Blacklister` for each of `wallets`. Owner only.
pub fn manage_blacklisters(env: &Env, caller: &Address, wallets: &Vec<Address>, grant: bool) {
    require_role(env, caller, Role::Owner);

    for wallet in wallets.iter() {
        let key = RbacKey::Blacklister(wallet.clone());
        if read_flag(env, &key) == grant {
            continue;
        }
        write_flag(env, &key, grant);
        events::emit_blacklister_updated(env, wallet, grant);
    }
}

/// Set the blacklist flag of `wallet`. Blacklister only.
///
/// Claims already settled stay settled; the flag only gates future claims.
pub fn set_blacklisted(env: &Env, caller: &Address, wallet: &Address, flag: bool) {
    require_role(env, caller, Role::Blacklister);
    write_flag(env, &RbacKey::Blacklisted(wallet.clone()), flag);
    events::emit_blacklist_updated(env, wallet.clone(), flag);
}

// ─────────────────────────────────────────────────────────
// Access guards (called from lib.rs handlers)
// ─────────────────────────────────────────────────────────

/// The single capability check every mutating entry point goes through.
/// Panics with `Error::NotAuthorized` when `address` lacks `role`.
pub fn require_role(env: &Env, address: &Address, role: Role) {
    if !has_role(env, address, role) {
        panic_with_error!(env, Error::NotAuthorized);
    }
}

/// Assert that `wallet` may claim. Panics with `Error::Blacklisted` otherwise.
pub fn require_not_blacklisted(env: &Env, wallet: &Address) {
    if is_blacklisted(env, wallet) {
        panic_with_error!(env, Error::Blacklisted);
    }
}

// ─────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────

/// Returns `true` if `address` holds `role`. The owner holds every role.
pub fn has_role(env: &Env, address: &Address, role: Role) -> bool {
    if get_owner(env).as_ref() == Some(address) {
        return true;
    }
    match role {
        Role::Owner => false,
        Role::Authorized => read_flag(env, &RbacKey::Authorized(address.clone())),
        Role::Blacklister => read_flag(env, &RbacKey::Blacklister(address.clone())),
    }
}

pub fn is_authorized(env: &Env, address: &Address) -> bool {
    has_role(env, address, Role::Authorized)
}

pub fn is_blacklisted(env: &Env, address: &Address) -> bool {
    read_flag(env, &RbacKey::Blacklisted(address.clone()))
}

/// Explicitly authorized wallets in grant order, with cursor paging.
///
/// `start_after` resumes after that wallet's position (from the beginning if
/// it is not in the list); `limit == 0` returns everything remaining.
pub fn authorized_wallets(env: &Env, start_after: Option<Address>, limit: u32) -> Vec<Address> {
    let list = authorized_list(env);
    let from = start_after
        .and_then(|cursor| list.first_index_of(cursor))
        .map(|pos| pos + 1)
        .unwrap_or(0);

    let mut page = Vec::new(env);
    for i in from..list.len() {
        if limit != 0 && page.len() >= limit {
            break;
        }
        if let Some(wallet) = list.get(i) {
            page.push_back(wallet);
        }
    }
    page
}
