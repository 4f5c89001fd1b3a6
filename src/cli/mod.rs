//! CLI commands
//!
//! Command implementations for the `revu` binary.

mod auth;
mod review;
pub mod style;

pub use auth::run_auth;
pub use review::run_review;
