//! Command-line parsing for the Channel Boosters marketplace.
//!
//! Argument parsing and command dispatch stay separate from the catalog and
//! session code.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::{ChannelId, Metric, VideoKind, Window};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "boosters", version, about = "Channel Boosters: browse and buy YouTube channels")]
pub struct Cli {
    /// Seed for the synthetic views/revenue series (overrides BOOSTERS_SEED).
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive marketplace.
    Tui,
    /// List every channel for sale.
    Catalog,
    /// Summarize one analytics window of a channel.
    Analytics(AnalyticsArgs),
    /// List a channel's videos.
    Videos(VideosArgs),
    /// Write one analytics window to disk.
    Export(ExportArgs),
    /// Plot a window previously written by `boosters export --format json`.
    Plot(PlotArgs),
    /// Validate the built-in catalog data.
    Check,
}

#[derive(Debug, Parser, Clone)]
pub struct AnalyticsArgs {
    /// Channel id (see `boosters catalog`).
    #[arg(short = 'c', long)]
    pub channel: ChannelId,

    /// Time window.
    #[arg(short = 'w', long, value_enum, default_value_t = Window::Days30)]
    pub window: Window,

    /// Render ASCII charts for each metric.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 90)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 16)]
    pub height: usize,
}

#[derive(Debug, Parser, Clone)]
pub struct VideosArgs {
    /// Channel id.
    #[arg(short = 'c', long)]
    pub channel: ChannelId,

    /// Video list; defaults to long videos when the channel has them.
    #[arg(short = 'k', long, value_enum)]
    pub kind: Option<VideoKind>,
}

#[derive(Debug, Parser, Clone)]
pub struct ExportArgs {
    /// Channel id.
    #[arg(short = 'c', long)]
    pub channel: ChannelId,

    /// Time window.
    #[arg(short = 'w', long, value_enum, default_value_t = Window::Days30)]
    pub window: Window,

    /// Output file.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub out: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,
}

#[derive(Debug, Parser, Clone)]
pub struct PlotArgs {
    /// Snapshot JSON file.
    #[arg(long, value_name = "JSON")]
    pub snapshot: PathBuf,

    /// Plot only this metric.
    #[arg(short = 'm', long, value_enum)]
    pub metric: Option<Metric>,

    /// Plot width (columns).
    #[arg(long, default_value_t = 90)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 16)]
    pub height: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytics_defaults_to_thirty_days() {
        let cli = Cli::parse_from(["boosters", "analytics", "--channel", "2"]);
        let Command::Analytics(args) = cli.command else {
            panic!("expected analytics");
        };
        assert_eq!(args.channel, 2);
        assert_eq!(args.window, Window::Days30);
        assert!(!args.plot);
    }

    #[test]
    fn window_accepts_short_keys() {
        let cli = Cli::parse_from(["boosters", "export", "-c", "1", "-w", "1y", "-o", "out.json", "--format", "json"]);
        let Command::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.window, Window::Year);
        assert_eq!(args.format, ExportFormat::Json);
        assert_eq!(args.out, PathBuf::from("out.json"));
    }

    #[test]
    fn seed_is_global() {
        let cli = Cli::parse_from(["boosters", "videos", "-c", "1", "--kind", "shorts", "--seed", "9"]);
        assert_eq!(cli.seed, Some(9));
        let Command::Videos(args) = cli.command else {
            panic!("expected videos");
        };
        assert_eq!(args.kind, Some(VideoKind::Shorts));
    }

    #[test]
    fn plot_reads_a_snapshot_path() {
        let cli = Cli::parse_from(["boosters", "plot", "--snapshot", "kg.json", "-m", "views"]);
        let Command::Plot(args) = cli.command else {
            panic!("expected plot");
        };
        assert_eq!(args.snapshot, PathBuf::from("kg.json"));
        assert_eq!(args.metric, Some(Metric::Views));
    }

    #[test]
    fn unknown_window_is_rejected() {
        assert!(Cli::try_parse_from(["boosters", "analytics", "-c", "1", "-w", "7d"]).is_err());
    }
}
