//! Domain types used throughout the marketplace.
//!
//! This module defines:
//!
//! - view selectors (`Window`, `Metric`, `VideoKind`)
//! - synthetic analytics (`DailyPoint`, `AnalyticsWindow`, `ChannelAnalytics`)
//! - catalog records (`Channel`, `Seller`, `Video`, `ChannelVideos`)

pub mod types;

pub use types::*;
