//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual checks of a metric series without launching the TUI
//! - deterministic output (helpful for golden tests)
//!
//! The series is drawn with `-`, steep jumps with `|`; the x-axis is the day index.

use crate::domain::DailyPoint;
use crate::report::number::format_compact;

/// Render one metric series as a `width` x `height` character plot.
pub fn render_series_plot(title: &str, points: &[DailyPoint], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let mut out = String::new();
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        out.push_str(&format!("{title}: (no data)\n"));
        return out;
    };

    let (data_min, data_max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.value), hi.max(p.value)));
    let (y_min, y_max) = if data_max > data_min {
        let pad = (data_max - data_min) * 0.05;
        (data_min - pad, data_max + pad)
    } else {
        (data_min - 1.0, data_max + 1.0)
    };

    let mut grid = vec![vec![' '; width]; height];
    let n = points.len();
    let mut prev: Option<(usize, usize)> = None;
    for (i, p) in points.iter().enumerate() {
        let cell = (column(i, n, width), row(p.value, y_min, y_max, height));
        trace(&mut grid, prev.unwrap_or(cell), cell);
        prev = Some(cell);
    }

    out.push_str(&format!(
        "{title}: {} .. {} | y=[{}, {}]\n",
        first.label,
        last.label,
        format_compact(data_min),
        format_compact(data_max),
    ));
    for line in grid {
        out.extend(line);
        out.push('\n');
    }
    out
}

fn column(i: usize, n: usize, width: usize) -> usize {
    if n < 2 {
        return 0;
    }
    i * (width - 1) / (n - 1)
}

/// Row 0 is the top of the plot.
fn row(value: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let u = ((value - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    ((1.0 - u) * (height - 1) as f64).round() as usize
}

/// Walk column by column from `from` to `to`, interpolating the row and
/// filling vertical jumps with `|`.
fn trace(grid: &mut [Vec<char>], from: (usize, usize), to: (usize, usize)) {
    let (x0, y0) = from;
    let (x1, y1) = to;
    let span = x1.saturating_sub(x0).max(1) as f64;
    let mut last_y = y0;
    for x in x0..=x1 {
        let t = (x - x0) as f64 / span;
        let y = (y0 as f64 + t * (y1 as f64 - y0 as f64)).round() as usize;
        let (lo, hi) = if y < last_y { (y, last_y) } else { (last_y, y) };
        for cells in grid.iter_mut().take(hi).skip(lo + 1) {
            if cells[x] == ' ' {
                cells[x] = '|';
            }
        }
        if let Some(cell) = grid.get_mut(y).and_then(|cells| cells.get_mut(x)) {
            *cell = '-';
        }
        last_y = y;
    }
}
