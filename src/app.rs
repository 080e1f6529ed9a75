//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads environment settings and starts logging
//! - builds the catalog (seeded or not)
//! - prints reports/plots or hands over to the TUI
//! - writes exports

use clap::Parser;
use tracing::info;

use crate::cli::{AnalyticsArgs, Command, ExportArgs, ExportFormat, PlotArgs, VideosArgs};
use crate::config::Settings;
use crate::domain::Metric;
use crate::error::AppError;
use crate::io::{WindowSnapshot, read_snapshot_json, write_snapshot_json, write_window_csv};

pub mod pipeline;

/// Entry point for the `boosters` binary.
pub fn run() -> Result<(), AppError> {
    // `boosters` and `boosters --seed 7` behave like `boosters tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let settings = Settings::from_env()?;
    let is_tui = matches!(cli.command, Command::Tui);
    if is_tui {
        crate::logging::init_file(&settings.log_filter, &settings.log_file)?;
    } else {
        crate::logging::init_stderr(&settings.log_filter)?;
    }

    let seed = cli.seed.or(settings.seed);

    match cli.command {
        Command::Tui => crate::tui::run(pipeline::load_catalog(seed)?, &settings),
        Command::Catalog => handle_catalog(seed),
        Command::Analytics(args) => handle_analytics(args, seed),
        Command::Videos(args) => handle_videos(args, seed),
        Command::Export(args) => handle_export(args, seed),
        Command::Plot(args) => handle_plot(args),
        Command::Check => handle_check(),
    }
}

fn handle_catalog(seed: Option<u64>) -> Result<(), AppError> {
    let loaded = pipeline::load_catalog(seed)?;
    println!("{}", crate::report::format_catalog(loaded.catalog.list_channels()));
    Ok(())
}

fn handle_analytics(args: AnalyticsArgs, seed: Option<u64>) -> Result<(), AppError> {
    let loaded = pipeline::load_catalog(seed)?;
    let channel = loaded.catalog.channel(args.channel)?;
    let data = loaded.catalog.analytics(args.channel)?.window(args.window);

    println!("{}", crate::report::format_window_summary(channel, args.window, data));
    println!("{}", crate::report::format_purchase_info(channel));

    if args.plot {
        for metric in Metric::ALL {
            let title = format!("{} - {}", metric.display_name(), args.window.display_name());
            let plot = crate::plot::render_series_plot(&title, data.series(metric), args.width, args.height);
            println!("{plot}");
        }
    }

    Ok(())
}

fn handle_videos(args: VideosArgs, seed: Option<u64>) -> Result<(), AppError> {
    let loaded = pipeline::load_catalog(seed)?;
    let channel = loaded.catalog.channel(args.channel)?;
    let kind = args.kind.unwrap_or_else(|| channel.default_video_kind());
    let videos = loaded.catalog.videos(args.channel)?.list(kind);

    println!("{}", crate::report::format_videos(channel, kind, videos));
    Ok(())
}

fn handle_export(args: ExportArgs, seed: Option<u64>) -> Result<(), AppError> {
    let loaded = pipeline::load_catalog(seed)?;
    let channel = loaded.catalog.channel(args.channel)?;
    let data = loaded.catalog.analytics(args.channel)?.window(args.window);

    match args.format {
        ExportFormat::Csv => write_window_csv(&args.out, channel, args.window, data)?,
        ExportFormat::Json => {
            let snapshot = WindowSnapshot::new(channel, args.window, data, loaded.seed);
            write_snapshot_json(&args.out, &snapshot)?;
        }
    }

    println!("Wrote {} {} to {}", channel.name, args.window.key(), args.out.display());
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let snapshot = read_snapshot_json(&args.snapshot)?;
    print!("{}", render_snapshot(&snapshot, args.metric, args.width, args.height));
    Ok(())
}

fn render_snapshot(snapshot: &WindowSnapshot, metric: Option<Metric>, width: usize, height: usize) -> String {
    let seed = snapshot.seed.map_or_else(|| "entropy".to_string(), |s| s.to_string());
    let mut out = format!(
        "=== {} - {} (generated {}, seed {seed}) ===\n",
        snapshot.channel,
        snapshot.window.display_name(),
        snapshot.generated_at.format("%Y-%m-%d %H:%M UTC"),
    );
    let metrics: Vec<Metric> = match metric {
        Some(m) => vec![m],
        None => Metric::ALL.to_vec(),
    };
    for m in metrics {
        out.push_str(&crate::plot::render_series_plot(
            m.display_name(),
            snapshot.data.series(m),
            width,
            height,
        ));
        out.push('\n');
    }
    out
}

fn handle_check() -> Result<(), AppError> {
    crate::data::validate_reference_data()?;
    let channels = crate::data::reference_entries().len();
    info!(channels, "reference data is consistent");
    println!("OK: {channels} channels, baselines non-negative, video lists consistent");
    Ok(())
}

/// Rewrite argv so `boosters` defaults to `boosters tui`.
///
/// Rules:
/// - `boosters`                        -> `boosters tui`
/// - `boosters --seed 7 ...`           -> `boosters tui --seed 7 ...`
/// - `boosters --help/--version/-h`    -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(
        arg1.as_str(),
        "tui" | "catalog" | "analytics" | "videos" | "export" | "plot" | "check"
    );
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_opens_tui() {
        assert_eq!(rewrite_args(args(&["boosters"])), args(&["boosters", "tui"]));
    }

    #[test]
    fn leading_flags_go_to_tui() {
        assert_eq!(
            rewrite_args(args(&["boosters", "--seed", "7"])),
            args(&["boosters", "tui", "--seed", "7"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        for argv in [
            args(&["boosters", "catalog"]),
            args(&["boosters", "analytics", "-c", "1"]),
            args(&["boosters", "check"]),
            args(&["boosters", "plot", "--snapshot", "ft.json"]),
            args(&["boosters", "--help"]),
            args(&["boosters", "-V"]),
        ] {
            assert_eq!(rewrite_args(argv.clone()), argv);
        }
    }

    #[test]
    fn exported_snapshot_renders_selected_metric() {
        let loaded = pipeline::load_catalog(Some(4)).unwrap();
        let channel = loaded.catalog.channel(2).unwrap();
        let data = loaded.catalog.analytics(2).unwrap().window(crate::domain::Window::Days30);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ft.json");
        write_snapshot_json(&path, &WindowSnapshot::new(channel, crate::domain::Window::Days30, data, loaded.seed))
            .unwrap();

        let snapshot = read_snapshot_json(&path).unwrap();
        let text = render_snapshot(&snapshot, Some(Metric::Revenue), 20, 5);
        assert!(text.starts_with("=== Football Time - Last 30 Days"));
        assert!(text.contains("seed 4"));
        assert!(text.contains("Revenue: Jul D1 .. Jul D30"));
        assert!(!text.contains("Views:"));

        let all = render_snapshot(&snapshot, None, 20, 5);
        assert!(all.contains("Subscribers:") && all.contains("Views:") && all.contains("Revenue:"));
    }

    #[test]
    fn rewritten_argv_parses() {
        let cli = crate::cli::Cli::parse_from(rewrite_args(args(&["boosters", "--seed", "3"])));
        assert!(matches!(cli.command, Command::Tui));
        assert_eq!(cli.seed, Some(3));
    }
}
