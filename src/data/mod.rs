//! Catalog data and synthetic analytics.
//!
//! - daily series generators (`series`)
//! - per-channel window assembly (`dataset`)
//! - the compiled-in channel listing (`catalog`)

pub mod catalog;
pub mod dataset;
pub mod series;

pub use catalog::*;
pub use dataset::*;
pub use series::*;
