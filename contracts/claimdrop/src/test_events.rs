extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    vec, Address, IntoVal, String, TryIntoVal,
};

use crate::events::{CampaignClosed, CampaignCreated, Claimed, ReplacedAddress};
use crate::test::{create_campaign, setup, DAY, GENESIS, TOTAL_REWARD};
use crate::CampaignAction;

#[test]
fn test_campaign_created_event() {
    let f = setup();
    create_campaign(&f, GENESIS + DAY);

    let all_events = f.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("created"), reward_token)
    assert_eq!(last_event.0, f.client.address);
    let expected_topics = vec![
        &f.env,
        symbol_short!("created").into_val(&f.env),
        f.token.address.into_val(&f.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignCreated = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        CampaignCreated {
            name: String::from_str(&f.env, "Test Campaign"),
            reward_token: f.token.address.clone(),
            total_reward_amount: TOTAL_REWARD,
        }
    );
}

#[test]
fn test_claim_event() {
    let f = setup();
    let start = GENESIS + DAY;
    create_campaign(&f, start);
    let user = Address::generate(&f.env);
    f.client
        .batch_upload(&f.owner, &vec![&f.env, (user.clone(), 10_000i128)]);
    f.env.ledger().set_timestamp(start);

    f.client.claim(&user, &user, &2_000);

    let all_events = f.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("claim"), wallet)
    assert_eq!(last_event.0, f.client.address);
    let expected_topics = vec![
        &f.env,
        symbol_short!("claim").into_val(&f.env),
        user.into_val(&f.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Claimed = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        Claimed {
            wallet: user.clone(),
            amount: 2_000,
        }
    );
}

#[test]
fn test_campaign_closed_event() {
    let f = setup();
    create_campaign(&f, GENESIS + DAY);
    f.client
        .manage_campaign(&f.owner, &CampaignAction::CloseCampaign);

    let all_events = f.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, f.client.address);
    let expected_topics = vec![
        &f.env,
        symbol_short!("closed").into_val(&f.env),
        f.owner.into_val(&f.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignClosed = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        CampaignClosed {
            name: String::from_str(&f.env, "Test Campaign"),
            recipient: f.owner.clone(),
            returned_amount: TOTAL_REWARD,
        }
    );
}

#[test]
fn test_replaced_address_event() {
    let f = setup();
    let old = Address::generate(&f.env);
    let new = Address::generate(&f.env);
    f.client
        .batch_upload(&f.owner, &vec![&f.env, (old.clone(), 10i128)]);

    f.client.replace_address(&f.owner, &old, &new);

    let all_events = f.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &f.env,
        symbol_short!("replaced").into_val(&f.env),
        old.into_val(&f.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ReplacedAddress = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(
        event_data,
        ReplacedAddress {
            old: old.clone(),
            new: new.clone(),
        }
    );
}

#[test]
fn test_address_removed_event() {
    let f = setup();
    let wallet = Address::generate(&f.env);
    f.client
        .batch_upload(&f.owner, &vec![&f.env, (wallet.clone(), 10i128)]);

    f.client.remove_address(&f.owner, &wallet);

    let all_events = f.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &f.env,
        symbol_short!("removed").into_val(&f.env),
        wallet.into_val(&f.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Address = last_event.2.try_into_val(&f.env).unwrap();
    assert_eq!(event_data, wallet);
}
