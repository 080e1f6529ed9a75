//! Opening external links (channel pages, payment gateway).
//!
//! Opening is fire-and-forget: the opener process is spawned and never waited
//! on, and a failure to spawn is only logged.

use std::process::{Command, Stdio};

use tracing::{info, warn};

/// Something that can show a URL to the user outside the terminal.
pub trait LinkOpener {
    fn open(&mut self, url: &str);
}

/// Hands URLs to the platform opener (`xdg-open`, `open`, `cmd /C start`),
/// or to a configured command.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    command: Option<String>,
}

impl SystemOpener {
    /// `command` overrides the platform default (e.g. `firefox`).
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    fn build(&self, url: &str) -> Command {
        if let Some(cmd) = &self.command {
            let mut c = Command::new(cmd);
            c.arg(url);
            return c;
        }
        if cfg!(target_os = "macos") {
            let mut c = Command::new("open");
            c.arg(url);
            c
        } else if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", "", url]);
            c
        } else {
            let mut c = Command::new("xdg-open");
            c.arg(url);
            c
        }
    }
}

impl LinkOpener for SystemOpener {
    fn open(&mut self, url: &str) {
        let spawned = self
            .build(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(_) => info!(url, "opened link"),
            Err(err) => warn!(url, error = %err, "failed to open link"),
        }
    }
}

/// Keeps opened URLs in memory instead of launching anything.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    pub opened: Vec<String>,
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}
