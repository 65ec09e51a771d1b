//! # Claimdrop Contract
//!
//! Campaign-based token vesting and claim ledger. The single Soroban contract
//! `ClaimDrop` custodies the reward pool of one active campaign, records
//! per-wallet allocations, computes vested entitlements and releases them on
//! demand.
//!
//! | Phase          | Entry Point(s)                                                   |
//! |----------------|------------------------------------------------------------------|
//! | Bootstrap      | [`ClaimDrop::init`]                                              |
//! | Role admin     | `manage_authorized_wallets`, `manage_blacklisters`, `blacklist_address` |
//! | Ownership      | `propose_ownership`, `accept_ownership`, `cancel_ownership_transfer` |
//! | Campaign       | [`ClaimDrop::manage_campaign`]                                   |
//! | Allocations    | `batch_upload`, `replace_address`, `remove_address`              |
//! | Claims         | [`ClaimDrop::claim`]                                             |
//! | Queries        | `get_campaign`, `get_allocations`, `get_claim`, `get_rewards`, `get_ownership`, ... |
//!
//! ## Architecture
//!
//! Authorization is delegated to [`rbac`] and [`ownership`], vesting math to
//! [`vesting`], ledger bookkeeping to [`ledger`] and the campaign lifecycle to
//! [`campaign`]. This file holds the public entry points: signature checks,
//! the capability gate, and dispatch.
//!
//! Every invocation is atomic. Any `panic_with_error!` rolls back all storage
//! writes and token transfers made during the call.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, Vec};

mod campaign;
pub mod events;
mod ledger;
mod ownership;
pub mod rbac;
mod storage;
mod types;
pub mod vesting;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use rbac::Role;
pub use types::{
    AllocationEntry, AllocationsResponse, Campaign, CampaignAction, CampaignParams, ClaimEntry,
    ClaimEvent, ClaimsResponse, Coin, Distribution, DistributionKind, OwnershipResponse,
    PendingOwnership, RewardsResponse, MAX_DISTRIBUTIONS, PERCENTAGE_SCALE,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotAuthorized = 1,
    Blacklisted = 2,
    NoCampaign = 3,
    CampaignAlreadyExists = 4,
    InvalidPercentages = 5,
    InvalidSchedule = 6,
    ExceedsClaimable = 7,
    TransferFailed = 8,
    Expired = 9,
    NotFound = 10,
    InvalidArgument = 11,
    AlreadyInitialized = 12,
    NotInitialized = 13,
    Overflow = 14,
}

#[contract]
pub struct ClaimDrop;

#[contractimpl]
impl ClaimDrop {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract and set the owner.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    pub fn init(env: Env, owner: Address) {
        owner.require_auth();
        rbac::init_owner(&env, &owner);
    }

    // ─────────────────────────────────────────────────────────
    // Campaign lifecycle
    // ─────────────────────────────────────────────────────────

    /// Create or close the campaign.
    ///
    /// - `CreateCampaign`: `caller` must be Authorized and funds the pool.
    /// - `CloseCampaign`: `caller` must be the owner and receives the remainder.
    pub fn manage_campaign(env: Env, caller: Address, action: CampaignAction) {
        caller.require_auth();
        match action {
            CampaignAction::CreateCampaign(params) => {
                rbac::require_role(&env, &caller, Role::Authorized);
                campaign::create(&env, &caller, params);
            }
            CampaignAction::CloseCampaign => {
                rbac::require_role(&env, &caller, Role::Owner);
                campaign::close(&env, &caller);
            }
        }
    }

    /// The live campaign, or `None` when no campaign exists.
    pub fn get_campaign(env: Env) -> Option<Campaign> {
        storage::load_campaign(&env)
    }

    /// Reward tokens currently held for the live campaign.
    pub fn get_reward_token_balance(env: Env) -> i128 {
        campaign::custody_balance(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Allocations
    // ─────────────────────────────────────────────────────────

    /// Append allocation rows. `caller` must be Authorized.
    pub fn batch_upload(env: Env, caller: Address, allocations: Vec<(Address, i128)>) {
        caller.require_auth();
        rbac::require_role(&env, &caller, Role::Authorized);
        let total = ledger::batch_upload(&env, &allocations);
        events::emit_allocations_uploaded(&env, caller, allocations.len(), total);
    }

    pub fn get_allocations(
        env: Env,
        address: Option<Address>,
        start_after: Option<Address>,
        limit: u32,
    ) -> AllocationsResponse {
        ledger::get_allocations(&env, address, start_after, limit)
    }

    /// Re-own every allocation and claim row of `old` to `new`. Blacklister only.
    pub fn replace_address(env: Env, caller: Address, old: Address, new: Address) {
        caller.require_auth();
        rbac::require_role(&env, &caller, Role::Blacklister);
        ledger::replace_address(&env, &old, &new);
        events::emit_replaced_address(&env, old, new);
    }

    /// Drop every allocation and claim row of `wallet`. Blacklister only.
    pub fn remove_address(env: Env, caller: Address, wallet: Address) {
        caller.require_auth();
        rbac::require_role(&env, &caller, Role::Blacklister);
        ledger::remove_address(&env, &wallet);
        events::emit_address_removed(&env, wallet);
    }

    // ─────────────────────────────────────────────────────────
    // Claims
    // ─────────────────────────────────────────────────────────

    /// Release `amount` of `wallet`'s vested tokens to `wallet`.
    ///
    /// `caller` is either the wallet itself or an Authorized operator claiming
    /// on its behalf.
    pub fn claim(env: Env, caller: Address, wallet: Address, amount: i128) {
        caller.require_auth();
        if caller != wallet {
            rbac::require_role(&env, &caller, Role::Authorized);
        }
        campaign::claim(&env, &wallet, amount);
    }

    pub fn get_claim(
        env: Env,
        address: Option<Address>,
        start_after: Option<Address>,
        limit: u32,
    ) -> ClaimsResponse {
        ledger::get_claims(&env, address, start_after, limit)
    }

    /// Allocated, claimed and currently claimable amounts of `wallet`.
    pub fn get_rewards(env: Env, wallet: Address) -> RewardsResponse {
        campaign::rewards(&env, &wallet)
    }

    // ─────────────────────────────────────────────────────────
    // Role management
    // ─────────────────────────────────────────────────────────

    /// Grant (`grant = true`) or revoke the Authorized role. Owner only.
    pub fn manage_authorized_wallets(env: Env, caller: Address, wallets: Vec<Address>, grant: bool) {
        caller.require_auth();
        rbac::manage_authorized(&env, &caller, &wallets, grant);
    }

    /// Grant or revoke the Blacklister role. Owner only.
    pub fn manage_blacklisters(env: Env, caller: Address, wallets: Vec<Address>, grant: bool) {
        caller.require_auth();
        rbac::manage_blacklisters(&env, &caller, &wallets, grant);
    }

    /// Set or clear the blacklist flag of `wallet`. Blacklister only.
    pub fn blacklist_address(env: Env, caller: Address, wallet: Address, flag: bool) {
        caller.require_auth();
        rbac::set_blacklisted(&env, &caller, &wallet, flag);
    }

    pub fn is_authorized(env: Env, address: Address) -> bool {
        rbac::is_authorized(&env, &address)
    }

    pub fn is_blacklisted(env: Env, address: Address) -> bool {
        rbac::is_blacklisted(&env, &address)
    }

    /// Return `true` if `address` holds `role`. The owner holds every role.
    pub fn has_role(env: Env, address: Address, role: Role) -> bool {
        rbac::has_role(&env, &address, role)
    }

    pub fn get_authorized_wallets(env: Env, start_after: Option<Address>, limit: u32) -> Vec<Address> {
        rbac::authorized_wallets(&env, start_after, limit)
    }

    // ─────────────────────────────────────────────────────────
    // Ownership
    // ─────────────────────────────────────────────────────────

    /// Propose `new_owner`. `expiry == 0` never lapses. Owner only.
    pub fn propose_ownership(env: Env, caller: Address, new_owner: Address, expiry: u64) {
        caller.require_auth();
        ownership::propose(&env, &caller, &new_owner, expiry);
    }

    /// Accept a pending proposal. `caller` must be the proposed owner.
    pub fn accept_ownership(env: Env, caller: Address) {
        caller.require_auth();
        ownership::accept(&env, &caller);
    }

    pub fn cancel_ownership_transfer(env: Env, caller: Address) {
        caller.require_auth();
        ownership::cancel(&env, &caller);
    }

    /// The ownership queries require `init`: before it there is no owner to
    /// report and they panic with `Error::NotInitialized`.
    pub fn owner(env: Env) -> Address {
        rbac::owner(&env)
    }

    /// `(owner, pending_owner, pending_expiry)`. Requires `init`.
    pub fn check_ownership(env: Env) -> (Address, Option<Address>, u64) {
        let snapshot = ownership::snapshot(&env);
        (snapshot.owner, snapshot.pending_owner, snapshot.pending_expiry)
    }

    /// Requires `init`, like [`ClaimDrop::owner`].
    pub fn get_ownership(env: Env) -> OwnershipResponse {
        ownership::snapshot(&env)
    }
}
