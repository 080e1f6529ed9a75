//! Per-channel analytics assembly.
//!
//! A channel ships two kinds of raw tables:
//!
//! - twelve [`MonthStat`]s (subscriber gain + view total per month) from which
//!   the `1y` window is derived, reconstructing subscriber baselines backwards
//!   from the current total
//! - curated [`MonthSpec`]s for the `30d` and `90d` windows, which carry their
//!   own subscriber start values
//!
//! The curated windows are not required to agree with the `1y`
//! reconstruction; each window is built from its own table.

use rand::Rng;
use tracing::debug;

use crate::data::series::{linear_ramp, noisy_revenue, noisy_views};
use crate::domain::{AnalyticsWindow, ChannelAnalytics, DailyPoint};
use crate::error::MarketError;

/// Days per month used by the reference `1y` tables.
pub const YEARLY_MONTH_DAYS: u32 = 30;

/// One month of the yearly raw table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthStat {
    pub label: &'static str,
    pub days: u32,
    /// Net subscribers gained during the month.
    pub subscriber_gain: i64,
    /// Total views during the month.
    pub view_total: u64,
}

impl MonthStat {
    pub const fn new(label: &'static str, subscriber_gain: i64, view_total: u64) -> Self {
        Self {
            label,
            days: YEARLY_MONTH_DAYS,
            subscriber_gain,
            view_total,
        }
    }
}

/// One month of a curated window, with an explicit subscriber start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSpec {
    pub label: &'static str,
    pub days: u32,
    pub subscriber_start: i64,
    pub subscriber_gain: i64,
    pub view_total: u64,
}

impl MonthSpec {
    pub const fn new(
        label: &'static str,
        days: u32,
        subscriber_start: i64,
        subscriber_gain: i64,
        view_total: u64,
    ) -> Self {
        Self {
            label,
            days,
            subscriber_start,
            subscriber_gain,
            view_total,
        }
    }
}

/// All raw tables for one channel.
#[derive(Debug, Clone)]
pub struct AnalyticsSource {
    /// Subscriber total at the end of the newest yearly month.
    pub current_subscribers: i64,
    /// Chronological (oldest first).
    pub yearly: Vec<MonthStat>,
    pub last_30_days: Vec<MonthSpec>,
    pub last_90_days: Vec<MonthSpec>,
}

/// Walk the months newest -> oldest, subtracting each month's gain from the
/// running total. Returns the month start values in chronological order.
///
/// The running total is a local accumulator threaded through the fold, so
/// the result depends only on the arguments.
pub fn reconstruct_baselines(current_total: i64, months: &[MonthStat]) -> Result<Vec<i64>, MarketError> {
    let mut starts = months
        .iter()
        .rev()
        .try_fold(
            (current_total, Vec::with_capacity(months.len())),
            |(end, mut acc), month| {
                let start = end - month.subscriber_gain;
                if start < 0 {
                    return Err(MarketError::NegativeBaseline {
                        month: month.label.to_string(),
                        start,
                    });
                }
                acc.push(start);
                Ok((start, acc))
            },
        )?
        .1;
    starts.reverse();
    Ok(starts)
}

/// Build the `1y` window: one ramp per month from its reconstructed start,
/// plus per-month noisy views and revenue.
pub fn build_yearly<R: Rng + ?Sized>(
    rng: &mut R,
    current_total: i64,
    months: &[MonthStat],
) -> Result<AnalyticsWindow, MarketError> {
    let starts = reconstruct_baselines(current_total, months)?;

    let mut subscribers: Vec<DailyPoint> = Vec::new();
    for (month, start) in months.iter().zip(starts) {
        subscribers.extend(linear_ramp(month.days, start, month.subscriber_gain, month.label)?);
    }

    let mut views = Vec::new();
    for month in months {
        views.extend(noisy_views(rng, month.days, month.view_total, month.label)?);
    }
    let mut revenue = Vec::new();
    for month in months {
        revenue.extend(noisy_revenue(rng, month.days, month.view_total, month.label)?);
    }

    Ok(AnalyticsWindow {
        subscribers,
        views,
        revenue,
    })
}

/// Build a curated window by concatenating its months in order.
pub fn build_curated<R: Rng + ?Sized>(rng: &mut R, months: &[MonthSpec]) -> Result<AnalyticsWindow, MarketError> {
    let mut window = AnalyticsWindow::default();
    for month in months {
        window.subscribers.extend(linear_ramp(
            month.days,
            month.subscriber_start,
            month.subscriber_gain,
            month.label,
        )?);
    }
    for month in months {
        window.views.extend(noisy_views(rng, month.days, month.view_total, month.label)?);
    }
    for month in months {
        window.revenue.extend(noisy_revenue(rng, month.days, month.view_total, month.label)?);
    }
    Ok(window)
}

/// Build all three windows for one channel.
pub fn build_channel_analytics<R: Rng + ?Sized>(
    rng: &mut R,
    source: &AnalyticsSource,
) -> Result<ChannelAnalytics, MarketError> {
    let last_30_days = build_curated(rng, &source.last_30_days)?;
    let last_90_days = build_curated(rng, &source.last_90_days)?;
    let last_year = build_yearly(rng, source.current_subscribers, &source.yearly)?;

    debug!(
        points_30d = last_30_days.subscribers.len(),
        points_90d = last_90_days.subscribers.len(),
        points_1y = last_year.subscribers.len(),
        "built channel analytics"
    );

    Ok(ChannelAnalytics {
        last_30_days,
        last_90_days,
        last_year,
    })
}

/// Per-series statistics shown next to charts and in text reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub first: f64,
    pub last: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub total: f64,
}

impl SeriesSummary {
    pub fn from_points(points: &[DailyPoint]) -> Option<Self> {
        let first = points.first()?.value;
        let last = points.last()?.value;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut total = 0.0;
        for p in points {
            min = min.min(p.value);
            max = max.max(p.value);
            total += p.value;
        }
        Some(Self {
            first,
            last,
            min,
            max,
            mean: total / points.len() as f64,
            total,
        })
    }

    pub fn net_change(&self) -> f64 {
        self.last - self.first
    }
}
