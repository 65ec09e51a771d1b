use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub name: String,
    pub reward_token: Address,
    pub total_reward_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignClosed {
    pub name: String,
    pub recipient: Address,
    pub returned_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claimed {
    pub wallet: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocationsUploaded {
    pub count: u32,
    pub total: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReplacedAddress {
    pub old: Address,
    pub new: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipProposed {
    pub owner: Address,
    pub pending_owner: Address,
    pub expiry: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

pub fn emit_campaign_created(env: &Env, name: String, reward_token: Address, total_reward_amount: i128) {
    let topics = (symbol_short!("created"), reward_token.clone());
    let data = CampaignCreated {
        name,
        reward_token,
        total_reward_amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_campaign_closed(env: &Env, name: String, recipient: Address, returned_amount: i128) {
    let topics = (symbol_short!("closed"), recipient.clone());
    let data = CampaignClosed {
        name,
        recipient,
        returned_amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_claim(env: &Env, wallet: Address, amount: i128) {
    let topics = (symbol_short!("claim"), wallet.clone());
    let data = Claimed { wallet, amount };
    env.events().publish(topics, data);
}

pub fn emit_allocations_uploaded(env: &Env, operator: Address, count: u32, total: i128) {
    let topics = (symbol_short!("uploaded"), operator);
    let data = AllocationsUploaded { count, total };
    env.events().publish(topics, data);
}

pub fn emit_replaced_address(env: &Env, old: Address, new: Address) {
    let topics = (symbol_short!("replaced"), old.clone());
    let data = ReplacedAddress { old, new };
    env.events().publish(topics, data);
}

pub fn emit_address_removed(env: &Env, wallet: Address) {
    env.events()
        .publish((symbol_short!("removed"), wallet.clone()), wallet);
}

pub fn emit_blacklist_updated(env: &Env, wallet: Address, blacklisted: bool) {
    env.events()
        .publish((symbol_short!("blacklst"), wallet), blacklisted);
}

pub fn emit_authorized_updated(env: &Env, wallet: Address, authorized: bool) {
    env.events()
        .publish((symbol_short!("auth_upd"), wallet), authorized);
}

pub fn emit_blacklister_updated(env: &Env, wallet: Address, granted: bool) {
    env.events()
        .publish((symbol_short!("blk_role"), wallet), granted);
}

pub fn emit_ownership_proposed(env: &Env, owner: Address, pending_owner: Address, expiry: u64) {
    let topics = (symbol_short!("own_prop"), owner.clone());
    let data = OwnershipProposed {
        owner,
        pending_owner,
        expiry,
    };
    env.events().publish(topics, data);
}

pub fn emit_ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
    let topics = (symbol_short!("own_xfer"), previous_owner.clone());
    let data = OwnershipTransferred {
        previous_owner,
        new_owner,
    };
    env.events().publish(topics, data);
}

pub fn emit_ownership_cancelled(env: &Env, owner: Address) {
    env.events()
        .publish((symbol_short!("own_canc"), owner.clone()), owner);
}
