//! Terminal plotting outside the TUI.

pub mod ascii;

pub use ascii::render_series_plot;
