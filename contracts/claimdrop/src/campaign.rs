//! # Campaign
//!
//! Lifecycle of the single live campaign and the claim protocol that pays out
//! of its pool.
//!
//! The contract takes custody of the whole reward pool when the campaign is
//! created and returns whatever is left (unclaimed, forfeited by
//! `remove_address`, or never allocated) to the owner when it is closed. The
//! allocation and claim ledgers are not touched by either transition, so they
//! stay queryable after closure and carry over into the next campaign.

use soroban_sdk::{log, panic_with_error, token, Address, Env};

use crate::events;
use crate::ledger;
use crate::rbac;
use crate::storage;
use crate::types::{Campaign, CampaignParams, Coin, RewardsResponse};
use crate::vesting;
use crate::Error;

fn load_active(env: &Env) -> Campaign {
    storage::load_campaign(env).unwrap_or_else(|| panic_with_error!(env, Error::NoCampaign))
}

/// Move `amount` of `token` between two addresses, turning any failure of the
/// token contract into `Error::TransferFailed`.
fn transfer(env: &Env, token: &Address, from: &Address, to: &Address, amount: i128) {
    let client = token::Client::new(env, token);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => {}
        _ => panic_with_error!(env, Error::TransferFailed),
    }
}

/// Validate `params`, pull the reward pool from `funder` and store the campaign.
pub fn create(env: &Env, funder: &Address, params: CampaignParams) -> Campaign {
    if storage::has_campaign(env) {
        panic_with_error!(env, Error::CampaignAlreadyExists);
    }
    if params.total_reward_amount <= 0 {
        panic_with_error!(env, Error::InvalidArgument);
    }
    if params.start_time >= params.end_time {
        panic_with_error!(env, Error::InvalidSchedule);
    }
    if let Err(err) = vesting::validate_distributions(&params.distributions) {
        panic_with_error!(env, err);
    }

    let this = env.current_contract_address();
    transfer(
        env,
        &params.reward_token,
        funder,
        &this,
        params.total_reward_amount,
    );
    let custody = token::Client::new(env, &params.reward_token).balance(&this);
    if custody < params.total_reward_amount {
        panic_with_error!(env, Error::TransferFailed);
    }

    let campaign = Campaign {
        name: params.name,
        description: params.description,
        type_label: params.type_label,
        total_reward: Coin {
            denom: params.reward_denom,
            amount: params.total_reward_amount,
        },
        reward_token: params.reward_token,
        distributions: params.distributions,
        start_time: params.start_time,
        end_time: params.end_time,
        created_by: funder.clone(),
    };
    storage::save_campaign(env, &campaign);

    log!(env, "campaign created", campaign.total_reward.amount);
    events::emit_campaign_created(
        env,
        campaign.name.clone(),
        campaign.reward_token.clone(),
        campaign.total_reward.amount,
    );
    campaign
}

/// Return the remaining pool to `recipient` and forget the campaign.
/// Returns the amount sent back.
pub fn close(env: &Env, recipient: &Address) -> i128 {
    let campaign = load_active(env);

    let this = env.current_contract_address();
    let remaining = token::Client::new(env, &campaign.reward_token).balance(&this);
    if remaining > 0 {
        transfer(env, &campaign.reward_token, &this, recipient, remaining);
    }
    storage::clear_campaign(env);

    log!(env, "campaign closed", remaining);
    events::emit_campaign_closed(env, campaign.name, recipient.clone(), remaining);
    remaining
}

/// Vested-but-unclaimed amount of `wallet` under `campaign` at `now`.
///
/// Saturates at zero: a wallet that inherited claims through
/// `replace_address`, or claimed under an earlier campaign, can have claimed
/// more than the current schedule has vested.
fn claimable_under(env: &Env, campaign: &Campaign, wallet: &Address, now: u64) -> i128 {
    let allocated = ledger::allocated_total(env, wallet);
    let vested = vesting::total_vested(allocated, &campaign.distributions, now)
        .unwrap_or_else(|err| panic_with_error!(env, err));
    let claimed = ledger::claimed_total(env, wallet);
    vested.saturating_sub(claimed).max(0)
}

/// Release `amount` of vested tokens to `wallet`.
///
/// Checks run in a fixed order: blacklist, campaign presence, amount, then the
/// vesting bound. The ledger is written only after the transfer succeeded; a
/// failed transfer aborts the whole invocation.
pub fn claim(env: &Env, wallet: &Address, amount: i128) {
    rbac::require_not_blacklisted(env, wallet);
    let campaign = load_active(env);
    if amount <= 0 {
        panic_with_error!(env, Error::InvalidArgument);
    }

    let now = env.ledger().timestamp();
    if amount > claimable_under(env, &campaign, wallet, now) {
        panic_with_error!(env, Error::ExceedsClaimable);
    }

    transfer(
        env,
        &campaign.reward_token,
        &env.current_contract_address(),
        wallet,
        amount,
    );
    ledger::record_claim(env, wallet, amount, now);
    events::emit_claim(env, wallet.clone(), amount);
}

pub fn rewards(env: &Env, wallet: &Address) -> RewardsResponse {
    let claimable = match storage::load_campaign(env) {
        Some(campaign) => claimable_under(env, &campaign, wallet, env.ledger().timestamp()),
        None => 0,
    };
    RewardsResponse {
        allocated: ledger::allocated_total(env, wallet),
        claimed: ledger::claimed_total(env, wallet),
        claimable,
    }
}

/// Reward-token balance held by the contract for the live campaign, or 0.
pub fn custody_balance(env: &Env) -> i128 {
    match storage::load_campaign(env) {
        Some(campaign) => {
            token::Client::new(env, &campaign.reward_token).balance(&env.current_contract_address())
        }
        None => 0,
    }
}
