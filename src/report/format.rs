//! Formatted terminal output for the non-interactive subcommands.
//!
//! We keep formatting code in one place so:
//! - the data/session code stays clean and testable
//! - output changes are localized (important for snapshot tests)

use crate::data::dataset::SeriesSummary;
use crate::domain::{AnalyticsWindow, Channel, Metric, Video, VideoKind, Window};
use crate::report::number::{format_compact, format_grouped, format_price};

/// Steps shown in the "How to Buy This Channel" panel.
pub const HOW_TO_BUY: [&str; 5] = [
    "Enter the email address where you wish to receive channel ownership.",
    "Click \"Pay Now\" to be redirected to our secure payment gateway.",
    "Complete the payment. Your funds are held in escrow.",
    "Channel transfer begins. This typically takes 1-2 hours (max 24 hours).",
    "Once you confirm ownership, funds are released to the seller.",
];

/// Dashboard listing: one block per channel.
pub fn format_catalog(channels: &[Channel]) -> String {
    let mut out = String::new();
    out.push_str("=== Channel Boosters - channels available for acquisition ===\n");

    for c in channels {
        out.push('\n');
        out.push_str(&format!("[{}] {} ({})\n", c.id, c.name, c.category));
        out.push_str(&format!("  Subscribers     {:>10}\n", format_compact(c.subscribers as f64)));
        out.push_str(&format!("  Monthly Views   {:>10}\n", format_compact(c.monthly_views as f64)));
        out.push_str(&format!(
            "  Monthly Revenue {:>10}\n",
            format!("${}", format_compact(c.monthly_revenue as f64))
        ));
        out.push_str(&format!("  Asking Price    {:>10}\n", format_price(c.price)));
        out.push_str(&format!("  Income          {}\n", c.income_streams.join(", ")));
        out.push_str(&format!("  Channel         {}\n", c.channel_url));
    }

    out
}

/// Per-metric summary of one analytics window.
pub fn format_window_summary(channel: &Channel, window: Window, data: &AnalyticsWindow) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== {} - {} ({}) ===\n",
        channel.name,
        window.display_name(),
        window.key()
    ));
    out.push_str(
        format!(
            "{:<12} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10}\n",
            "metric", "days", "first", "last", "min", "max", "total"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<12} {:-<6} {:-<10} {:-<10} {:-<10} {:-<10} {:-<10}\n",
            "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for metric in Metric::ALL {
        let series = data.series(metric);
        let Some(s) = SeriesSummary::from_points(series) else {
            out.push_str(&format!("{:<12} {:>6}\n", metric.key(), 0));
            continue;
        };
        // Subscribers are a level, not a flow; their total is meaningless.
        let total = match metric {
            Metric::Subscribers => "-".to_string(),
            _ => format_compact(s.total),
        };
        out.push_str(&format!(
            "{:<12} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10}\n",
            metric.key(),
            series.len(),
            format_compact(s.first),
            format_compact(s.last),
            format_compact(s.min),
            format_compact(s.max),
            total,
        ));
    }

    out
}

/// Video table (title, views, likes, revenue).
pub fn format_videos(channel: &Channel, kind: VideoKind, videos: &[Video]) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} - {} ===\n", channel.name, kind.display_name()));

    if videos.is_empty() {
        out.push_str("(no videos)\n");
        return out;
    }

    out.push_str(&format!("{:<48} {:>12} {:>10} {:>9}\n", "video", "views", "likes", "revenue"));
    out.push_str(&format!("{:-<48} {:-<12} {:-<10} {:-<9}\n", "", "", "", ""));
    for v in videos {
        out.push_str(&format!(
            "{:<48} {:>12} {:>10} {:>9}\n",
            truncate(&v.title, 48),
            format_grouped(v.views),
            format_grouped(v.likes),
            format_price(v.revenue),
        ));
    }

    out
}

/// Seller block and purchase instructions.
pub fn format_purchase_info(channel: &Channel) -> String {
    let mut out = String::new();
    out.push_str(&format!("Asking Price: {}\n", format_price(channel.price)));
    out.push_str("\nHow to Buy This Channel:\n");
    for (i, step) in HOW_TO_BUY.iter().enumerate() {
        out.push_str(&format!("  {}. {step}\n", i + 1));
    }
    out.push_str("\nSeller Information:\n");
    out.push_str(&format!("  {}\n", channel.seller.name));
    out.push_str(&format!("  ID: {}\n", channel.seller.id));
    out.push_str(&format!("  {}\n", channel.seller.email));
    out
}

/// Shorten `s` to at most `max` characters, ending with `.` when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Catalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog() -> Catalog {
        Catalog::reference(&mut StdRng::seed_from_u64(1)).unwrap()
    }

    #[test]
    fn catalog_listing_uses_compact_numbers() {
        let c = catalog();
        let txt = format_catalog(c.list_channels());
        assert!(txt.contains("[1] Kai Guy (Gaming)"));
        assert!(txt.contains("2.0M"));
        assert!(txt.contains("$3,500"));
        assert!(txt.contains("[2] Football Time (Sports)"));
        assert!(txt.contains("782.0K"));
        assert!(txt.contains("$1,800"));
    }

    #[test]
    fn window_summary_lists_each_metric() {
        let c = catalog();
        let ch = c.channel(1).unwrap();
        let data = c.analytics(1).unwrap().window(Window::Days30);
        let txt = format_window_summary(ch, Window::Days30, data);
        assert!(txt.starts_with("=== Kai Guy - Last 30 Days (30d) ===\n"));
        for key in ["subscribers", "views", "revenue"] {
            assert!(txt.lines().any(|l| l.starts_with(key)), "missing {key}");
        }
        // Ramp starts at the curated 1,970,000.
        assert!(txt.contains("2.0M"));
    }

    #[test]
    fn video_table_shows_revenue_in_dollars() {
        let c = catalog();
        let ch = c.channel(1).unwrap();
        let txt = format_videos(ch, VideoKind::Long, &c.videos(1).unwrap().long);
        let first_row = txt.lines().nth(3).unwrap();
        assert!(first_row.contains("63,000"));
        assert!(first_row.trim_end().ends_with("$9"));
    }

    #[test]
    fn empty_video_list_is_explicit() {
        let c = catalog();
        let ch = c.channel(2).unwrap();
        assert!(format_videos(ch, VideoKind::Long, &[]).contains("(no videos)"));
    }

    #[test]
    fn purchase_info_numbers_steps() {
        let c = catalog();
        let txt = format_purchase_info(c.channel(2).unwrap());
        assert!(txt.contains("  5. Once you confirm ownership"));
        assert!(txt.contains("ID: cb-4f8e2a9d-1b3c"));
    }

    #[test]
    fn truncate_marks_cut_strings() {
        assert_eq!(truncate("abcdef", 10), "abcdef");
        assert_eq!(truncate("abcdef", 4), "abc.");
    }
}
