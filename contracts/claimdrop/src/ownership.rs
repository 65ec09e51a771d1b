//! # Ownership transfer
//!
//! Two-step hand-over of the owner role:
//!
//! ```text
//!            propose (owner)
//!   Stable ─────────────────► ProposalPending
//!     ▲                          │      │
//!     │   accept (pending owner) │      │ cancel (owner)
//!     └──────────────────────────┴──────┘
//! ```
//!
//! A proposal carries an expiry timestamp. `0` means the proposal never
//! lapses; otherwise acceptance after `expiry` fails with `Error::Expired`.
//! A new proposal simply replaces a pending one.

use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::events;
use crate::rbac::{self, Role};
use crate::types::{OwnershipResponse, PendingOwnership};
use crate::Error;

/// Start a hand-over to `new_owner`. Owner only.
pub fn propose(env: &Env, caller: &Address, new_owner: &Address, expiry: u64) {
    rbac::require_role(env, caller, Role::Owner);

    let owner = rbac::owner(env);
    if *new_owner == owner {
        panic_with_error!(env, Error::InvalidArgument);
    }
    if expiry != 0 && expiry <= env.ledger().timestamp() {
        panic_with_error!(env, Error::InvalidArgument);
    }

    rbac::set_pending(
        env,
        &PendingOwnership {
            new_owner: new_owner.clone(),
            expiry,
        },
    );
    events::emit_ownership_proposed(env, owner, new_owner.clone(), expiry);
}

/// Complete the hand-over. Only the proposed address may call this.
pub fn accept(env: &Env, caller: &Address) {
    let pending = match rbac::get_pending(env) {
        Some(p) if p.new_owner == *caller => p,
        _ => panic_with_error!(env, Error::NotAuthorized),
    };
    if pending.expiry != 0 && env.ledger().timestamp() > pending.expiry {
        panic_with_error!(env, Error::Expired);
    }

    let previous = rbac::owner(env);
    rbac::set_owner(env, caller);
    rbac::clear_pending(env);

    log!(env, "ownership transferred", previous, caller.clone());
    events::emit_ownership_transferred(env, previous, caller.clone());
}

/// Drop any pending proposal. Owner only; a no-op proposal-wise when none exists.
pub fn cancel(env: &Env, caller: &Address) {
    rbac::require_role(env, caller, Role::Owner);
    rbac::clear_pending(env);
    events::emit_ownership_cancelled(env, caller.clone());
}

pub fn snapshot(env: &Env) -> OwnershipResponse {
    let pending = rbac::get_pending(env);
    OwnershipResponse {
        owner: rbac::owner(env),
        pending_expiry: pending.as_ref().map(|p| p.expiry).unwrap_or(0),
        pending_owner: pending.map(|p| p.new_owner),
    }
}
