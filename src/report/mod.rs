//! Reporting utilities: number formatting and text renderings of the catalog.
//!
//! The TUI and the CLI subcommands share these so both surfaces show the same
//! figures.

pub mod format;
pub mod number;

pub use format::*;
pub use number::*;
