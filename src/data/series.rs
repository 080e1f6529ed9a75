//! Synthetic daily series expanded from monthly aggregates.
//!
//! Each generator turns one month's statistic into `days` labelled points.
//! Subscriber ramps are deterministic; views and revenue draw uniform noise
//! from the caller's random source so a seeded `StdRng` reproduces a run.

use rand::Rng;

use crate::domain::{DailyPoint, MetricSeries, REVENUE_PER_MILLE};
use crate::error::MarketError;

/// Peak-to-peak view noise as a fraction of the daily mean (20%).
const VIEW_NOISE_SPREAD: f64 = 1.0 / 5.0;

/// Peak-to-peak revenue jitter in dollars (`[-1, 1)`).
const REVENUE_JITTER_SPREAD: f64 = 2.0;

fn day_label(prefix: &str, day_index: u32) -> String {
    format!("{prefix} D{}", day_index + 1)
}

fn ensure_days(days: u32, prefix: &str) -> Result<(), MarketError> {
    if days == 0 {
        return Err(MarketError::EmptyMonth(prefix.to_string()));
    }
    Ok(())
}

/// Subscriber counts rising linearly from `start` by `gain` over `days`.
///
/// `value[i] = start + floor(i * gain / days)`, computed in integers so the
/// ramp is exact. Non-decreasing whenever `gain >= 0`.
pub fn linear_ramp(days: u32, start: i64, gain: i64, prefix: &str) -> Result<MetricSeries, MarketError> {
    ensure_days(days, prefix)?;
    let d = i64::from(days);
    Ok((0..days)
        .map(|i| DailyPoint {
            label: day_label(prefix, i),
            value: (start + (i64::from(i) * gain).div_euclid(d)) as f64,
        })
        .collect())
}

/// Daily view estimates centred on `floor(total / days)`.
pub fn noisy_views<R: Rng + ?Sized>(
    rng: &mut R,
    days: u32,
    total_views: u64,
    prefix: &str,
) -> Result<MetricSeries, MarketError> {
    ensure_days(days, prefix)?;
    let mean = total_views as f64 / f64::from(days);
    let amplitude = mean * VIEW_NOISE_SPREAD;
    Ok((0..days)
        .map(|i| DailyPoint {
            label: day_label(prefix, i),
            value: mean.floor() + centred_unit(rng) * amplitude,
        })
        .collect())
}

/// Daily revenue estimates: `(total / days / 1000) * 0.15` plus `[-1, 1)` jitter.
pub fn noisy_revenue<R: Rng + ?Sized>(
    rng: &mut R,
    days: u32,
    total_views: u64,
    prefix: &str,
) -> Result<MetricSeries, MarketError> {
    ensure_days(days, prefix)?;
    let daily = total_views as f64 / f64::from(days) / 1000.0 * REVENUE_PER_MILLE;
    Ok((0..days)
        .map(|i| DailyPoint {
            label: day_label(prefix, i),
            value: daily + centred_unit(rng) * REVENUE_JITTER_SPREAD,
        })
        .collect())
}

/// Uniform draw in `[-0.5, 0.5)`.
fn centred_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.r#gen::<f64>() - 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn ramp_matches_integer_formula() {
        let s = linear_ramp(30, 1000, 300, "Jul").unwrap();
        assert_eq!(s.len(), 30);
        assert_eq!(s[0].value, 1000.0);
        assert_eq!(s[29].value, (1000 + 29 * 300 / 30) as f64);
        assert_eq!(s[0].label, "Jul D1");
        assert_eq!(s[29].label, "Jul D30");
    }

    #[test]
    fn ramp_handles_uneven_month_lengths() {
        let s = linear_ramp(31, 1_885_000, 40_000, "May").unwrap();
        assert_eq!(s.len(), 31);
        // floor(30 * 40000 / 31) = 38709
        assert_eq!(s[30].value, 1_923_709.0);
    }

    #[test]
    fn zero_days_fails_fast() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            linear_ramp(0, 0, 10, "Jan"),
            Err(MarketError::EmptyMonth("Jan".to_string()))
        );
        assert!(noisy_views(&mut rng, 0, 100, "Jan").is_err());
        assert!(noisy_revenue(&mut rng, 0, 100, "Jan").is_err());
    }

    #[test]
    fn views_stay_inside_noise_band() {
        let mut rng = StdRng::seed_from_u64(7);
        let total = 3_000_000;
        let s = noisy_views(&mut rng, 30, total, "Jul").unwrap();
        let mean = total as f64 / 30.0;
        for p in &s {
            assert!((p.value - mean).abs() <= mean * 0.1 + 1.0, "{} outside band", p.value);
        }
    }

    #[test]
    fn revenue_jitter_is_bounded() {
        let mut rng = StdRng::seed_from_u64(11);
        let s = noisy_revenue(&mut rng, 30, 3_000_000, "Jul").unwrap();
        // 100_000 views/day -> $15/day.
        for p in &s {
            assert!(p.value >= 14.0 && p.value < 16.0, "{}", p.value);
        }
    }

    #[test]
    fn same_seed_reproduces_noise() {
        let a = noisy_views(&mut StdRng::seed_from_u64(3), 30, 1_000_000, "Jun").unwrap();
        let b = noisy_views(&mut StdRng::seed_from_u64(3), 30, 1_000_000, "Jun").unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_ramp_non_decreasing(days in 1u32..62, start in 0i64..5_000_000, gain in 0i64..200_000) {
            let s = linear_ramp(days, start, gain, "M").unwrap();
            prop_assert_eq!(s.len(), days as usize);
            prop_assert!(s.windows(2).all(|w| w[0].value <= w[1].value));
            prop_assert!(s[days as usize - 1].value <= (start + gain) as f64);
        }

        #[test]
        fn prop_view_mean_within_noise_bound(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let total = 3_000_000u64;
            let s = noisy_views(&mut rng, 30, total, "Jul").unwrap();
            let avg = s.iter().map(|p| p.value).sum::<f64>() / s.len() as f64;
            let mean = total as f64 / 30.0;
            prop_assert!((avg - mean).abs() <= mean * 0.1 + 1.0);
        }

        #[test]
        fn prop_revenue_mean_within_jitter(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let s = noisy_revenue(&mut rng, 30, 3_000_000, "Jul").unwrap();
            let avg = s.iter().map(|p| p.value).sum::<f64>() / s.len() as f64;
            prop_assert!((avg - 15.0).abs() <= 1.0);
        }
    }
}
