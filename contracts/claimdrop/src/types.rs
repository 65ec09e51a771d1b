//! # Types
//!
//! Shared data structures used across all modules of the claimdrop contract.
//!
//! ## Campaign as an optional singleton
//!
//! At most one [`Campaign`] is live at a time. It is stored under a single
//! instance key; the key being absent *is* the "no campaign" state, so the
//! stored struct carries no `exists` flag and the public API returns
//! `Option<Campaign>`.
//!
//! ```text
//! NoCampaign ──create_campaign──► CampaignActive
//!     ▲                                │
//!     └─────────close_campaign─────────┘
//! ```
//!
//! ## Percentages
//!
//! Distribution shares use a 1e6 scale: `1_000_000` is 100% of a wallet's
//! allocation. The shares of a campaign must sum to exactly
//! [`PERCENTAGE_SCALE`].

use soroban_sdk::{contracttype, Address, String, Vec};

/// 100% on the distribution percentage scale.
pub const PERCENTAGE_SCALE: u64 = 1_000_000;

/// Upper bound on schedules per campaign. Every claim iterates them.
pub const MAX_DISTRIBUTIONS: u32 = 10;

/// Release schedule flavour.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DistributionKind {
    /// Whole share releases at `max(start, cliff)`.
    LumpSum,
    /// Share releases linearly between `start` and `end`, nothing before the cliff.
    LinearVesting,
}

/// One release schedule covering `percentage` of every wallet's allocation.
///
/// For `LumpSum` the `end` field is unused and conventionally zero. A `cliff`
/// of zero means "no cliff".
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Distribution {
    pub kind: DistributionKind,
    pub percentage: u64,
    pub start: u64,
    pub end: u64,
    pub cliff: u64,
}

/// An amount of the reward token together with its display denomination.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Coin {
    pub denom: String,
    pub amount: i128,
}

/// Caller-supplied campaign definition, validated by `create_campaign`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignParams {
    pub name: String,
    pub description: String,
    pub type_label: String,
    pub reward_denom: String,
    /// SAC (or any SEP-41 token) contract holding the rewards.
    pub reward_token: Address,
    pub total_reward_amount: i128,
    pub distributions: Vec<Distribution>,
    pub start_time: u64,
    pub end_time: u64,
}

/// The live campaign, as stored and as returned by `get_campaign`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub name: String,
    pub description: String,
    pub type_label: String,
    pub total_reward: Coin,
    pub reward_token: Address,
    pub distributions: Vec<Distribution>,
    pub start_time: u64,
    pub end_time: u64,
    /// Address that funded the campaign.
    pub created_by: Address,
}

/// Argument of `manage_campaign`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CampaignAction {
    CreateCampaign(CampaignParams),
    CloseCampaign,
}

/// One row of the append-only allocation ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocationEntry {
    pub wallet: Address,
    pub amount: i128,
}

/// One row of the append-only claim history.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimEvent {
    pub wallet: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Claim history payload, keyed by wallet in [`ClaimsResponse`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimEntry {
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocationsResponse {
    pub allocations: Vec<(Address, i128)>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimsResponse {
    pub claimed: Vec<(Address, ClaimEntry)>,
}

/// Point-in-time view of a wallet's entitlement, computed on every call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsResponse {
    /// Sum of every allocation row for the wallet.
    pub allocated: i128,
    /// Cumulative amount already released.
    pub claimed: i128,
    /// Vested now and not yet claimed.
    pub claimable: i128,
}

/// An ownership hand-over waiting for the new owner's acceptance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingOwnership {
    pub new_owner: Address,
    /// Ledger timestamp after which the proposal lapses; `0` never lapses.
    pub expiry: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipResponse {
    pub owner: Address,
    pub pending_owner: Option<Address>,
    pub pending_expiry: u64,
}
