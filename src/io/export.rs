//! Export one analytics window to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::domain::{AnalyticsWindow, Channel, Window};
use crate::error::AppError;

/// Write the three series of `data` side by side, one row per day.
pub fn write_window_csv(path: &Path, channel: &Channel, window: Window, data: &AnalyticsWindow) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_window_rows(&mut file, channel, window, data)?;
    info!(path = %path.display(), rows = data.subscribers.len(), "wrote CSV export");
    Ok(())
}

fn write_window_rows(
    out: &mut impl Write,
    channel: &Channel,
    window: Window,
    data: &AnalyticsWindow,
) -> Result<(), AppError> {
    let n = data.subscribers.len();
    if data.views.len() != n || data.revenue.len() != n {
        return Err(AppError::new(4, "Metric series lengths differ; cannot export side by side."));
    }

    writeln!(out, "channel_id,window,day,label,subscribers,views,revenue")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for (i, ((s, v), r)) in data
        .subscribers
        .iter()
        .zip(&data.views)
        .zip(&data.revenue)
        .enumerate()
    {
        writeln!(
            out,
            "{},{},{},{},{:.0},{:.2},{:.4}",
            channel.id,
            window.key(),
            i + 1,
            s.label,
            s.value,
            v.value,
            r.value,
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Catalog;
    use crate::domain::DailyPoint;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn csv_has_one_row_per_day() {
        let catalog = Catalog::reference(&mut StdRng::seed_from_u64(3)).unwrap();
        let ch = catalog.channel(2).unwrap();
        let data = catalog.analytics(2).unwrap().window(Window::Days90);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ft_90d.csv");
        write_window_csv(&path, ch, Window::Days90, data).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + 91);
        assert_eq!(lines[0], "channel_id,window,day,label,subscribers,views,revenue");
        assert!(lines[1].starts_with("2,90d,1,May D1,770000,"));
        assert!(lines[91].starts_with("2,90d,91,Jul D30,"));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let point = DailyPoint {
            label: "Jul D1".to_string(),
            value: 1.0,
        };
        let data = AnalyticsWindow {
            subscribers: vec![point.clone(), point.clone()],
            views: vec![point.clone()],
            revenue: vec![point],
        };
        let catalog = Catalog::reference(&mut StdRng::seed_from_u64(3)).unwrap();
        let mut buf = Vec::new();
        let err = write_window_rows(&mut buf, catalog.channel(1).unwrap(), Window::Days30, &data).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
