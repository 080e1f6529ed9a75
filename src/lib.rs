//! `channel-boosters` library crate.
//!
//! The binary (`boosters`) is a thin wrapper around this library so that:
//!
//! - catalog, analytics and navigation logic is testable without a terminal
//! - the text subcommands and the TUI share one data path

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod plot;
pub mod report;
pub mod session;
pub mod tui;
