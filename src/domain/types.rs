//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - rendered by the TUI and the text reports
//! - exported to JSON/CSV
//! - compared in tests without touching the terminal

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Catalog-wide channel identifier.
pub type ChannelId = u32;

/// Reporting period over which a metric series is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
pub enum Window {
    #[default]
    #[serde(rename = "30d")]
    #[value(name = "30d")]
    Days30,
    #[serde(rename = "90d")]
    #[value(name = "90d")]
    Days90,
    #[serde(rename = "1y")]
    #[value(name = "1y")]
    Year,
}

impl Window {
    pub const ALL: [Window; 3] = [Window::Days30, Window::Days90, Window::Year];

    pub fn key(self) -> &'static str {
        match self {
            Window::Days30 => "30d",
            Window::Days90 => "90d",
            Window::Year => "1y",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Window::Days30 => "Last 30 Days",
            Window::Days90 => "Last 90 Days",
            Window::Year => "Last Year",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Window::Days30 => Window::Days90,
            Window::Days90 => Window::Year,
            Window::Year => Window::Days30,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Window::Days30 => Window::Year,
            Window::Days90 => Window::Days30,
            Window::Year => Window::Days90,
        }
    }
}

/// One of the three charted metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Subscribers,
    Views,
    Revenue,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Subscribers, Metric::Views, Metric::Revenue];

    pub fn display_name(self) -> &'static str {
        match self {
            Metric::Subscribers => "Subscribers",
            Metric::Views => "Views",
            Metric::Revenue => "Revenue",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Metric::Subscribers => "subscribers",
            Metric::Views => "views",
            Metric::Revenue => "revenue",
        }
    }
}

/// Long-form uploads vs. shorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    Long,
    Shorts,
}

impl VideoKind {
    pub fn display_name(self) -> &'static str {
        match self {
            VideoKind::Long => "Long Videos",
            VideoKind::Shorts => "Shorts",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            VideoKind::Long => VideoKind::Shorts,
            VideoKind::Shorts => VideoKind::Long,
        }
    }
}

/// One sample of a daily series. `label` is `"<month> D<day>"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub label: String,
    pub value: f64,
}

/// Chronological daily samples for one metric.
pub type MetricSeries = Vec<DailyPoint>;

/// The three metric series of one reporting window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsWindow {
    pub subscribers: MetricSeries,
    pub views: MetricSeries,
    pub revenue: MetricSeries,
}

impl AnalyticsWindow {
    pub fn series(&self, metric: Metric) -> &[DailyPoint] {
        match metric {
            Metric::Subscribers => &self.subscribers,
            Metric::Views => &self.views,
            Metric::Revenue => &self.revenue,
        }
    }
}

/// Pre-built analytics for one channel, one entry per [`Window`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelAnalytics {
    #[serde(rename = "30d")]
    pub last_30_days: AnalyticsWindow,
    #[serde(rename = "90d")]
    pub last_90_days: AnalyticsWindow,
    #[serde(rename = "1y")]
    pub last_year: AnalyticsWindow,
}

impl ChannelAnalytics {
    pub fn window(&self, window: Window) -> &AnalyticsWindow {
        match window {
            Window::Days30 => &self.last_30_days,
            Window::Days90 => &self.last_90_days,
            Window::Year => &self.last_year,
        }
    }
}

/// Seller record embedded in a [`Channel`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

/// A channel listed for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    pub category: String,
    pub subscribers: u64,
    pub monthly_views: u64,
    pub monthly_revenue: u64,
    /// Asking price in USD.
    pub price: u64,
    pub banner_url: String,
    pub logo_url: String,
    pub channel_url: String,
    pub payment_link: String,
    pub seller: Seller,
    pub income_streams: Vec<String>,
    pub has_long_videos: bool,
    pub has_shorts: bool,
}

impl Channel {
    /// Video category shown when the detail page opens.
    pub fn default_video_kind(&self) -> VideoKind {
        if self.has_long_videos {
            VideoKind::Long
        } else {
            VideoKind::Shorts
        }
    }

    /// The long/shorts switch is only offered when both categories exist.
    pub fn offers_video_switch(&self) -> bool {
        self.has_long_videos && self.has_shorts
    }
}

/// CPM-style revenue estimate per 1000 views.
pub const REVENUE_PER_MILLE: f64 = 0.15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub views: u64,
    pub likes: u64,
    /// `round(views / 1000 * 0.15)`.
    pub revenue: u64,
    pub thumbnail_url: String,
}

impl Video {
    pub fn new(id: &str, title: &str, views: u64, likes: u64, thumbnail_url: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            views,
            likes,
            revenue: estimated_revenue(views),
            thumbnail_url: thumbnail_url.to_string(),
        }
    }
}

/// Rounded revenue estimate for a view count.
pub fn estimated_revenue(views: u64) -> u64 {
    (views as f64 / 1000.0 * REVENUE_PER_MILLE).round() as u64
}

/// Per-channel video lists; display order is source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelVideos {
    pub long: Vec<Video>,
    pub shorts: Vec<Video>,
}

impl ChannelVideos {
    pub fn list(&self, kind: VideoKind) -> &[Video] {
        match kind {
            VideoKind::Long => &self.long,
            VideoKind::Shorts => &self.shorts,
        }
    }
}
