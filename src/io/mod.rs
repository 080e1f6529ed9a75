//! Export helpers.
//!
//! - one analytics window as CSV (`export`)
//! - one analytics window as JSON (`snapshot`)

pub mod export;
pub mod snapshot;

pub use export::*;
pub use snapshot::*;
