//! Core types for reachlog
//!
//! Domain records, status enums and the small parsing rules (timestamps,
//! cooldown ranges) shared by the storage, service and CLI crates.

pub mod constants;
mod cooldown;
pub mod env_config;
mod error;
mod status;
mod timestamp;
mod user;

pub use cooldown::*;
pub use error::*;
pub use status::*;
pub use timestamp::*;
pub use user::*;
