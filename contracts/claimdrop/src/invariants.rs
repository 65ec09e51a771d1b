
#![allow(dead_code)]

extern crate std;

use soroban_sdk::{Address, Vec};

use crate::types::{Distribution, RewardsResponse, PERCENTAGE_SCALE};

/// Distribution percentages of a live campaign sum to exactly 100%.
pub fn assert_percentages_sum(distributions: &Vec<Distribution>) {
    let sum: u64 = distributions.iter().map(|d| d.percentage).sum();
    assert_eq!(
        sum, PERCENTAGE_SCALE,
        "percentages sum to {} instead of {}",
        sum, PERCENTAGE_SCALE
    );
}

/// A wallet never holds more claimed than vested, and what is still claimable
/// is exactly the difference.
pub fn assert_claim_bound(rewards: &RewardsResponse, vested: i128) {
    assert!(
        rewards.claimed <= vested,
        "claimed {} exceeds vested {}",
        rewards.claimed,
        vested
    );
    assert_eq!(
        rewards.claimable,
        vested - rewards.claimed,
        "claimable {} != vested {} - claimed {}",
        rewards.claimable,
        vested,
        rewards.claimed
    );
}

/// Query totals are never negative.
pub fn assert_rewards_non_negative(rewards: &RewardsResponse) {
    assert!(rewards.allocated >= 0, "negative allocation {}", rewards.allocated);
    assert!(rewards.claimed >= 0, "negative claimed {}", rewards.claimed);
    assert!(rewards.claimable >= 0, "negative claimable {}", rewards.claimable);
}

/// Custody shrinks by exactly the amount paid out.
pub fn assert_payout(custody_before: i128, custody_after: i128, amount: i128) {
    assert_eq!(
        custody_after,
        custody_before - amount,
        "payout of {} moved custody from {} to {}",
        amount,
        custody_before,
        custody_after
    );
}

/// Concatenated pages reproduce the ledger exactly once, in order.
pub fn assert_pages_exact(pages: &[Vec<(Address, i128)>], expected: &Vec<(Address, i128)>) {
    let mut seen: u32 = 0;
    for page in pages {
        for row in page.iter() {
            assert!(seen < expected.len(), "pagination yielded extra row");
            assert_eq!(row, expected.get_unchecked(seen), "row {} out of order", seen);
            seen += 1;
        }
    }
    assert_eq!(seen, expected.len(), "pagination dropped rows");
}

/// Concatenated pages are an ordered subsequence of the ledger: no row is
/// repeated and no page reaches back before a previous one.
pub fn assert_pages_in_order(pages: &[Vec<(Address, i128)>], expected: &Vec<(Address, i128)>) {
    let mut next: u32 = 0;
    for page in pages {
        for row in page.iter() {
            while next < expected.len() && expected.get_unchecked(next) != row {
                next += 1;
            }
            assert!(next < expected.len(), "row out of ledger order");
            next += 1;
        }
    }
}
