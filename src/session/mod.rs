//! Navigation controller and its capabilities.
//!
//! - screen state machine and purchase gate (`navigator`)
//! - login capability (`auth`)
//! - external link opening (`opener`)

pub mod auth;
pub mod navigator;
pub mod opener;

pub use auth::*;
pub use navigator::*;
pub use opener::*;
