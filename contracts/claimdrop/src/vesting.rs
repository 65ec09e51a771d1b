//! # Vesting
//!
//! Pure, storage-free computation of how much of an allocation has vested at a
//! given ledger timestamp.
//!
//! ```text
//! share = allocation * percentage / 1_000_000
//!
//! LumpSum        0 ─────────────┐ share
//!                               └──────────────►
//!                      max(start, cliff)
//!
//! LinearVesting  0 ──────┐            ┌──────── share
//!                        │   ╱‾‾‾‾‾‾‾‾
//!                        └──╱
//!              max(start, cliff)     end
//! ```
//!
//! Every division floors, and it is applied once per distribution share: a
//! wallet's total is the sum of floored per-schedule results, never the floor of
//! an aggregated ratio. This keeps the rounding reproducible off-chain.

use soroban_sdk::Vec;

use crate::types::{Distribution, DistributionKind, MAX_DISTRIBUTIONS, PERCENTAGE_SCALE};
use crate::Error;

/// Portion of `allocation` assigned to `dist`, floored.
pub fn share_of(allocation: i128, dist: &Distribution) -> Result<i128, Error> {
    allocation
        .checked_mul(dist.percentage as i128)
        .map(|v| v / PERCENTAGE_SCALE as i128)
        .ok_or(Error::Overflow)
}

/// Amount of `allocation` released by `dist` at `now`.
pub fn vested_amount(allocation: i128, dist: &Distribution, now: u64) -> Result<i128, Error> {
    let share = share_of(allocation, dist)?;
    let unlock = dist.start.max(dist.cliff);
    if now < unlock {
        return Ok(0);
    }

    match dist.kind {
        DistributionKind::LumpSum => Ok(share),
        DistributionKind::LinearVesting => {
            if now >= dist.end {
                return Ok(share);
            }
            // validate_distributions guarantees end > start.
            let elapsed = (now - dist.start) as i128;
            let duration = (dist.end - dist.start) as i128;
            share
                .checked_mul(elapsed)
                .map(|v| v / duration)
                .ok_or(Error::Overflow)
        }
    }
}

/// Sum of [`vested_amount`] over every schedule of the campaign.
pub fn total_vested(
    allocation: i128,
    distributions: &Vec<Distribution>,
    now: u64,
) -> Result<i128, Error> {
    let mut total: i128 = 0;
    for dist in distributions.iter() {
        let vested = vested_amount(allocation, &dist, now)?;
        total = total.checked_add(vested).ok_or(Error::Overflow)?;
    }
    Ok(total)
}

/// Check the schedule set of a new campaign.
///
/// - at most [`MAX_DISTRIBUTIONS`] entries,
/// - linear windows are non-empty (`end > start`) so the ratio never divides by zero,
/// - cliffs, when set, do not fall after the end of a linear window,
/// - percentages sum to exactly [`PERCENTAGE_SCALE`].
pub fn validate_distributions(distributions: &Vec<Distribution>) -> Result<(), Error> {
    if distributions.len() > MAX_DISTRIBUTIONS {
        return Err(Error::InvalidArgument);
    }

    let mut sum: u64 = 0;
    for dist in distributions.iter() {
        match dist.kind {
            DistributionKind::LumpSum => {
                if dist.end != 0 && dist.end < dist.start {
                    return Err(Error::InvalidSchedule);
                }
            }
            DistributionKind::LinearVesting => {
                if dist.end <= dist.start {
                    return Err(Error::InvalidSchedule);
                }
                if dist.cliff != 0 && dist.cliff > dist.end {
                    return Err(Error::InvalidSchedule);
                }
            }
        }
        sum = sum
            .checked_add(dist.percentage)
            .ok_or(Error::InvalidPercentages)?;
    }

    if sum != PERCENTAGE_SCALE {
        return Err(Error::InvalidPercentages);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use soroban_sdk::{vec, Env};

    const DAY: u64 = 86_400;

    fn lump(percentage: u64, start: u64) -> Distribution {
        Distribution {
            kind: DistributionKind::LumpSum,
            percentage,
            start,
            end: 0,
            cliff: 0,
        }
    }

    fn linear(percentage: u64, start: u64, end: u64, cliff: u64) -> Distribution {
        Distribution {
            kind: DistributionKind::LinearVesting,
            percentage,
            start,
            end,
            cliff,
        }
    }

    #[test]
    fn lump_sum_releases_whole_share_at_start() {
        let d = lump(200_000, 1_000);
        assert_eq!(vested_amount(10_000, &d, 999).unwrap(), 0);
        assert_eq!(vested_amount(10_000, &d, 1_000).unwrap(), 2_000);
        assert_eq!(vested_amount(10_000, &d, 9_999_999).unwrap(), 2_000);
    }

    #[test]
    fn lump_sum_honours_cliff() {
        let mut d = lump(1_000_000, 1_000);
        d.cliff = 5_000;
        assert_eq!(vested_amount(700, &d, 4_999).unwrap(), 0);
        assert_eq!(vested_amount(700, &d, 5_000).unwrap(), 700);
    }

    #[test]
    fn linear_is_proportional_and_floored() {
        let d = linear(800_000, 0, 30 * DAY, 0);
        assert_eq!(vested_amount(10_000, &d, 0).unwrap(), 0);
        assert_eq!(vested_amount(10_000, &d, 15 * DAY).unwrap(), 4_000);
        assert_eq!(vested_amount(10_000, &d, 10 * DAY).unwrap(), 2_666);
        assert_eq!(vested_amount(10_000, &d, 30 * DAY).unwrap(), 8_000);
        assert_eq!(vested_amount(10_000, &d, 31 * DAY).unwrap(), 8_000);
    }

    #[test]
    fn linear_cliff_holds_then_catches_up() {
        let d = linear(1_000_000, 0, 100, 25);
        assert_eq!(vested_amount(1_000, &d, 24).unwrap(), 0);
        // After the cliff the curve resumes from start, not from the cliff.
        assert_eq!(vested_amount(1_000, &d, 25).unwrap(), 250);
    }

    #[test]
    fn total_floors_per_distribution() {
        let env = Env::default();
        let dists = vec![
            &env,
            linear(500_000, 0, 3, 0),
            linear(500_000, 0, 3, 0),
        ];
        // Each half of 10 is 5; 5 * 1 / 3 = 1 per schedule. A pre-aggregated
        // ratio would give 10 * 1 / 3 = 3.
        assert_eq!(total_vested(10, &dists, 1).unwrap(), 2);
    }

    #[test]
    fn overflow_is_reported() {
        let d = linear(1_000_000, 0, 10, 0);
        assert_eq!(vested_amount(i128::MAX, &d, 5), Err(Error::Overflow));
    }

    #[test]
    fn validate_accepts_lump_plus_linear() {
        let env = Env::default();
        let dists = vec![&env, lump(200_000, 10), linear(800_000, 10, 10 + 30 * DAY, 0)];
        assert_eq!(validate_distributions(&dists), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_sums() {
        let env = Env::default();
        let short = vec![&env, lump(500_000, 10)];
        assert_eq!(validate_distributions(&short), Err(Error::InvalidPercentages));

        let over = vec![&env, lump(600_000, 10), lump(500_000, 10)];
        assert_eq!(validate_distributions(&over), Err(Error::InvalidPercentages));

        let empty: Vec<Distribution> = Vec::new(&env);
        assert_eq!(validate_distributions(&empty), Err(Error::InvalidPercentages));
    }

    #[test]
    fn validate_rejects_degenerate_windows() {
        let env = Env::default();
        let zero_len = vec![&env, linear(1_000_000, 50, 50, 0)];
        assert_eq!(validate_distributions(&zero_len), Err(Error::InvalidSchedule));

        let late_cliff = vec![&env, linear(1_000_000, 0, 50, 51)];
        assert_eq!(validate_distributions(&late_cliff), Err(Error::InvalidSchedule));

        let backwards_lump = vec![&env, Distribution { end: 5, ..lump(1_000_000, 10) }];
        assert_eq!(validate_distributions(&backwards_lump), Err(Error::InvalidSchedule));
    }

    #[test]
    fn validate_caps_distribution_count() {
        let env = Env::default();
        let mut dists = Vec::new(&env);
        for _ in 0..11 {
            dists.push_back(lump(1, 0));
        }
        assert_eq!(validate_distributions(&dists), Err(Error::InvalidArgument));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn linear_vesting_is_monotonic(
            allocation in 0i128..=1_000_000_000_000_000_000i128,
            percentage in 0u64..=1_000_000u64,
            start in 0u64..=1_000_000u64,
            len in 1u64..=10_000_000u64,
            t1 in 0u64..=20_000_000u64,
            dt in 0u64..=20_000_000u64,
        ) {
            let d = linear(percentage, start, start + len, 0);
            let a = vested_amount(allocation, &d, t1).unwrap();
            let b = vested_amount(allocation, &d, t1 + dt).unwrap();
            prop_assert!(a <= b);

            let share = share_of(allocation, &d).unwrap();
            prop_assert!(b <= share);
            prop_assert_eq!(vested_amount(allocation, &d, start + len).unwrap(), share);
            if start > 0 {
                prop_assert_eq!(vested_amount(allocation, &d, start - 1).unwrap(), 0);
            }
        }
    }
}
