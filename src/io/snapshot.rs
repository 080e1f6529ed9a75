//! Read/write analytics snapshot JSON files.
//!
//! A snapshot is the portable form of one channel window:
//! - channel identity and asking price
//! - window key, generation time and the seed used for the noisy series
//! - the three daily series

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{AnalyticsWindow, Channel, ChannelId, Window};
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    /// `None` when the run drew fresh entropy.
    pub seed: Option<u64>,
    pub channel_id: ChannelId,
    pub channel: String,
    pub price: u64,
    pub window: Window,
    #[serde(flatten)]
    pub data: AnalyticsWindow,
}

impl WindowSnapshot {
    pub fn new(channel: &Channel, window: Window, data: &AnalyticsWindow, seed: Option<u64>) -> Self {
        Self {
            tool: "boosters".to_string(),
            generated_at: Utc::now(),
            seed,
            channel_id: channel.id,
            channel: channel.name.clone(),
            price: channel.price,
            window,
            data: data.clone(),
        }
    }
}

/// Write a snapshot JSON file.
pub fn write_snapshot_json(path: &Path, snapshot: &WindowSnapshot) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create snapshot JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, snapshot)
        .map_err(|e| AppError::new(2, format!("Failed to write snapshot JSON: {e}")))?;

    info!(path = %path.display(), window = snapshot.window.key(), "wrote JSON snapshot");
    Ok(())
}

/// Read a snapshot JSON file.
pub fn read_snapshot_json(path: &Path) -> Result<WindowSnapshot, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open snapshot JSON '{}': {e}", path.display())))?;
    let snapshot: WindowSnapshot =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid snapshot JSON: {e}")))?;
    Ok(snapshot)
}
