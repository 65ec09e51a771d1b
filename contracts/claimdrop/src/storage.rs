//! # Storage
//!
//! Provides typed helpers over the two Soroban storage tiers used by the
//! claimdrop contract.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key               | Type       | Description                              |
//! |-------------------|------------|------------------------------------------|
//! | `Campaign`        | `Campaign` | The live campaign; absent = no campaign  |
//! | `AllocationCount` | `u32`      | Next allocation ledger index             |
//! | `ClaimCount`      | `u32`      | Next claim history index                 |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                        | Type              | Description                          |
//! |----------------------------|-------------------|--------------------------------------|
//! | `Allocation(idx)`          | `AllocationEntry` | One allocation ledger row            |
//! | `WalletAllocations(addr)`  | `Vec<u32>`        | Ascending ledger indices of `addr`   |
//! | `ClaimEvent(idx)`          | `ClaimEvent`      | One claim history row                |
//! | `WalletClaims(addr)`       | `Vec<u32>`        | Ascending history indices of `addr`  |
//! | `Claimed(addr)`            | `i128`            | Cumulative claimed total of `addr`   |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! ## Why one key per ledger row?
//!
//! The ledgers are unbounded. A single `Vec` entry would eventually exceed the
//! ledger entry size limit and make every upload rewrite the whole history.
//! Per-row keys keep writes proportional to the batch, and the per-wallet index
//! lists let sums and filtered queries touch only that wallet's rows. Rows
//! deleted by `remove_address` leave a gap; indices are never reused, so
//! insertion order stays the pagination order.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{AllocationEntry, Campaign, ClaimEvent};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// Campaign and ledger storage keys. Role keys live in [`crate::rbac`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// The live campaign (Instance).
    Campaign,
    /// Next free allocation index (Instance).
    AllocationCount,
    /// Next free claim history index (Instance).
    ClaimCount,
    /// Allocation row by index (Persistent).
    Allocation(u32),
    /// Indices of a wallet's allocation rows (Persistent).
    WalletAllocations(Address),
    /// Claim history row by index (Persistent).
    ClaimEvent(u32),
    /// Indices of a wallet's claim history rows (Persistent).
    WalletClaims(Address),
    /// Cumulative claimed total of a wallet (Persistent).
    Claimed(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
pub(crate) fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn load_campaign(env: &Env) -> Option<Campaign> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Campaign)
}

pub fn has_campaign(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Campaign)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    env.storage().instance().set(&DataKey::Campaign, campaign);
    bump_instance(env);
}

pub fn clear_campaign(env: &Env) {
    env.storage().instance().remove(&DataKey::Campaign);
}

/// Read and increment an instance counter, returning the index to use.
fn next_index(env: &Env, key: &DataKey) -> u32 {
    bump_instance(env);
    let current: u32 = env.storage().instance().get(key).unwrap_or(0);
    env.storage().instance().set(key, &(current + 1));
    current
}

pub fn allocation_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::AllocationCount)
        .unwrap_or(0)
}

pub fn claim_count(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::ClaimCount).unwrap_or(0)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn read_persistent<T>(env: &Env, key: &DataKey) -> Option<T>
where
    T: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        bump_persistent(env, key);
    }
    value
}

fn write_persistent<T>(env: &Env, key: &DataKey, value: &T)
where
    T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

// ─────────────────────────────────────────────────────────
// Allocation ledger rows
// ─────────────────────────────────────────────────────────

/// Append an allocation row and index it under its wallet. Returns its index.
pub fn push_allocation(env: &Env, entry: &AllocationEntry) -> u32 {
    let idx = next_index(env, &DataKey::AllocationCount);
    write_persistent(env, &DataKey::Allocation(idx), entry);

    let mut indices = wallet_allocations(env, &entry.wallet);
    indices.push_back(idx);
    set_wallet_allocations(env, &entry.wallet, &indices);
    idx
}

/// Read an allocation row; `None` for rows deleted by `remove_address`.
pub fn load_allocation(env: &Env, idx: u32) -> Option<AllocationEntry> {
    read_persistent(env, &DataKey::Allocation(idx))
}

pub fn save_allocation(env: &Env, idx: u32, entry: &AllocationEntry) {
    write_persistent(env, &DataKey::Allocation(idx), entry);
}

pub fn remove_allocation(env: &Env, idx: u32) {
    env.storage().persistent().remove(&DataKey::Allocation(idx));
}

pub fn wallet_allocations(env: &Env, wallet: &Address) -> Vec<u32> {
    read_persistent(env, &DataKey::WalletAllocations(wallet.clone())).unwrap_or(Vec::new(env))
}

pub fn set_wallet_allocations(env: &Env, wallet: &Address, indices: &Vec<u32>) {
    let key = DataKey::WalletAllocations(wallet.clone());
    if indices.is_empty() {
        env.storage().persistent().remove(&key);
    } else {
        write_persistent(env, &key, indices);
    }
}

// ─────────────────────────────────────────────────────────
// Claim history rows and totals
// ─────────────────────────────────────────────────────────

/// Append a claim history row and index it under its wallet. Returns its index.
pub fn push_claim_event(env: &Env, event: &ClaimEvent) -> u32 {
    let idx = next_index(env, &DataKey::ClaimCount);
    write_persistent(env, &DataKey::ClaimEvent(idx), event);

    let mut indices = wallet_claims(env, &event.wallet);
    indices.push_back(idx);
    set_wallet_claims(env, &event.wallet, &indices);
    idx
}

pub fn load_claim_event(env: &Env, idx: u32) -> Option<ClaimEvent> {
    read_persistent(env, &DataKey::ClaimEvent(idx))
}

pub fn save_claim_event(env: &Env, idx: u32, event: &ClaimEvent) {
    write_persistent(env, &DataKey::ClaimEvent(idx), event);
}

pub fn remove_claim_event(env: &Env, idx: u32) {
    env.storage().persistent().remove(&DataKey::ClaimEvent(idx));
}

pub fn wallet_claims(env: &Env, wallet: &Address) -> Vec<u32> {
    read_persistent(env, &DataKey::WalletClaims(wallet.clone())).unwrap_or(Vec::new(env))
}

pub fn set_wallet_claims(env: &Env, wallet: &Address, indices: &Vec<u32>) {
    let key = DataKey::WalletClaims(wallet.clone());
    if indices.is_empty() {
        env.storage().persistent().remove(&key);
    } else {
        write_persistent(env, &key, indices);
    }
}

pub fn claimed_total(env: &Env, wallet: &Address) -> i128 {
    read_persistent(env, &DataKey::Claimed(wallet.clone())).unwrap_or(0)
}

pub fn set_claimed_total(env: &Env, wallet: &Address, total: i128) {
    let key = DataKey::Claimed(wallet.clone());
    if total == 0 {
        env.storage().persistent().remove(&key);
    } else {
        write_persistent(env, &key, &total);
    }
}
