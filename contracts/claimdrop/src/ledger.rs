//! # Ledgers
//!
//! The append-only allocation ledger and claim history, plus the cursor
//! pagination shared by their queries.
//!
//! Allocations are not unique per wallet: every uploaded row is its own entry
//! and a wallet's entitlement is the sum of its rows, computed on demand from
//! the per-wallet index list rather than from a cached total.
//!
//! ## Paging
//!
//! Both `get_allocations` and `get_claim` take `(filter, start_after, limit)`:
//!
//! - `filter = None` walks the whole ledger; `Some(w)` only `w`'s rows,
//!   duplicates included, in insertion order.
//! - `start_after = Some(c)` resumes strictly after the last live row
//!   belonging to `c`. A cursor wallet with no live rows skips nothing.
//! - `limit = 0` returns every remaining row.
//!
//! Passing the last wallet of a page as the next cursor always moves forward,
//! so paging terminates even when wallets repeat. It is exact when every
//! wallet's rows fit in one page; later rows of a wallet that straddles a page
//! boundary are only reachable through the wallet filter.

use soroban_sdk::{panic_with_error, Address, Env, IntoVal, TryFromVal, Val, Vec};

use crate::storage;
use crate::types::{AllocationEntry, AllocationsResponse, ClaimEntry, ClaimEvent, ClaimsResponse};
use crate::Error;

// ─────────────────────────────────────────────────────────
// Paging helpers
// ─────────────────────────────────────────────────────────

/// Collect up to `limit` loaded rows from `scope` (or from `0..count` when
/// unscoped), skipping indices at or before `cursor` and deleted rows.
fn paginate<T, F>(
    env: &Env,
    count: u32,
    scope: Option<Vec<u32>>,
    cursor: Option<u32>,
    limit: u32,
    load: F,
) -> Vec<T>
where
    T: IntoVal<Env, Val> + TryFromVal<Env, Val>,
    F: Fn(u32) -> Option<T>,
{
    let mut page: Vec<T> = Vec::new(env);
    let mut visit = |idx: u32| -> bool {
        if limit != 0 && page.len() >= limit {
            return false;
        }
        if cursor.map_or(false, |c| idx <= c) {
            return true;
        }
        if let Some(row) = load(idx) {
            page.push_back(row);
        }
        true
    };

    match scope {
        Some(indices) => {
            for idx in indices.iter() {
                if !visit(idx) {
                    break;
                }
            }
        }
        None => {
            let from = cursor.map(|c| c + 1).unwrap_or(0);
            for idx in from..count {
                if !visit(idx) {
                    break;
                }
            }
        }
    }
    page
}

/// Merge two ascending index lists into one ascending list.
fn merge_indices(env: &Env, a: &Vec<u32>, b: &Vec<u32>) -> Vec<u32> {
    let mut merged = Vec::new(env);
    let (mut i, mut j) = (0u32, 0u32);
    while i < a.len() || j < b.len() {
        let next = match (a.get(i), b.get(j)) {
            (Some(x), Some(y)) if x <= y => {
                i += 1;
                x
            }
            (Some(x), None) => {
                i += 1;
                x
            }
            (_, Some(y)) => {
                j += 1;
                y
            }
            (None, None) => break,
        };
        merged.push_back(next);
    }
    merged
}

// ─────────────────────────────────────────────────────────
// Allocation ledger
// ─────────────────────────────────────────────────────────

/// Append every `(wallet, amount)` row in order and return the batch total.
///
/// Panics with `Error::InvalidArgument` on an empty batch or a non-positive
/// amount. The cumulative total is not checked against the campaign pool.
pub fn batch_upload(env: &Env, entries: &Vec<(Address, i128)>) -> i128 {
    if entries.is_empty() {
        panic_with_error!(env, Error::InvalidArgument);
    }

    let mut total: i128 = 0;
    for (_, amount) in entries.iter() {
        if amount <= 0 {
            panic_with_error!(env, Error::InvalidArgument);
        }
        total = total
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(env, Error::Overflow));
    }

    for (wallet, amount) in entries.iter() {
        storage::push_allocation(env, &AllocationEntry { wallet, amount });
    }
    total
}

/// Sum of every live allocation row of `wallet`.
pub fn allocated_total(env: &Env, wallet: &Address) -> i128 {
    let mut total: i128 = 0;
    for idx in storage::wallet_allocations(env, wallet).iter() {
        if let Some(entry) = storage::load_allocation(env, idx) {
            total = total
                .checked_add(entry.amount)
                .unwrap_or_else(|| panic_with_error!(env, Error::Overflow));
        }
    }
    total
}

pub fn get_allocations(
    env: &Env,
    address_filter: Option<Address>,
    start_after: Option<Address>,
    limit: u32,
) -> AllocationsResponse {
    let scope = address_filter.map(|w| storage::wallet_allocations(env, &w));
    let cursor = start_after.and_then(|w| storage::wallet_allocations(env, &w).last());

    let allocations = paginate(
        env,
        storage::allocation_count(env),
        scope,
        cursor,
        limit,
        |idx| storage::load_allocation(env, idx).map(|e| (e.wallet, e.amount)),
    );
    AllocationsResponse { allocations }
}

/// Move every allocation row, claim row and the claimed total of `old` onto `new`.
///
/// `new` may already hold rows; the index lists are merged so both ledgers keep
/// their insertion order. Panics with `Error::NotFound` if `old` has no
/// allocation rows and `Error::InvalidArgument` if `old == new`.
pub fn replace_address(env: &Env, old: &Address, new: &Address) {
    if old == new {
        panic_with_error!(env, Error::InvalidArgument);
    }
    let old_allocs = storage::wallet_allocations(env, old);
    if old_allocs.is_empty() {
        panic_with_error!(env, Error::NotFound);
    }

    for idx in old_allocs.iter() {
        if let Some(mut entry) = storage::load_allocation(env, idx) {
            entry.wallet = new.clone();
            storage::save_allocation(env, idx, &entry);
        }
    }
    let merged = merge_indices(env, &storage::wallet_allocations(env, new), &old_allocs);
    storage::set_wallet_allocations(env, new, &merged);
    storage::set_wallet_allocations(env, old, &Vec::new(env));

    let old_claims = storage::wallet_claims(env, old);
    for idx in old_claims.iter() {
        if let Some(mut event) = storage::load_claim_event(env, idx) {
            event.wallet = new.clone();
            storage::save_claim_event(env, idx, &event);
        }
    }
    let merged = merge_indices(env, &storage::wallet_claims(env, new), &old_claims);
    storage::set_wallet_claims(env, new, &merged);
    storage::set_wallet_claims(env, old, &Vec::new(env));

    let inherited = storage::claimed_total(env, new)
        .checked_add(storage::claimed_total(env, old))
        .unwrap_or_else(|| panic_with_error!(env, Error::Overflow));
    storage::set_claimed_total(env, new, inherited);
    storage::set_claimed_total(env, old, 0);
}

/// Delete every allocation row, claim row and the claimed total of `wallet`.
///
/// No tokens move: the forfeited share stays in the contract until the
/// campaign is closed. Panics with `Error::NotFound` if `wallet` has no
/// allocation rows.
pub fn remove_address(env: &Env, wallet: &Address) {
    let allocs = storage::wallet_allocations(env, wallet);
    if allocs.is_empty() {
        panic_with_error!(env, Error::NotFound);
    }
    for idx in allocs.iter() {
        storage::remove_allocation(env, idx);
    }
    storage::set_wallet_allocations(env, wallet, &Vec::new(env));

    for idx in storage::wallet_claims(env, wallet).iter() {
        storage::remove_claim_event(env, idx);
    }
    storage::set_wallet_claims(env, wallet, &Vec::new(env));
    storage::set_claimed_total(env, wallet, 0);
}

// ─────────────────────────────────────────────────────────
// Claim ledger
// ─────────────────────────────────────────────────────────

pub fn claimed_total(env: &Env, wallet: &Address) -> i128 {
    storage::claimed_total(env, wallet)
}

/// Add `amount` to the wallet's total and append a history row stamped `now`.
pub fn record_claim(env: &Env, wallet: &Address, amount: i128, now: u64) {
    let total = storage::claimed_total(env, wallet)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, Error::Overflow));
    storage::set_claimed_total(env, wallet, total);
    storage::push_claim_event(
        env,
        &ClaimEvent {
            wallet: wallet.clone(),
            amount,
            timestamp: now,
        },
    );
}

pub fn get_claims(
    env: &Env,
    address_filter: Option<Address>,
    start_after: Option<Address>,
    limit: u32,
) -> ClaimsResponse {
    let scope = address_filter.map(|w| storage::wallet_claims(env, &w));
    let cursor = start_after.and_then(|w| storage::wallet_claims(env, &w).last());

    let claimed = paginate(
        env,
        storage::claim_count(env),
        scope,
        cursor,
        limit,
        |idx| {
            storage::load_claim_event(env, idx).map(|e| {
                (
                    e.wallet,
                    ClaimEntry {
                        amount: e.amount,
                        timestamp: e.timestamp,
                    },
                )
            })
        },
    );
    ClaimsResponse { claimed }
}
