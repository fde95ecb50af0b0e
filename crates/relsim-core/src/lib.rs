//! relsim-core — configuration and fault injection for the relsim server.
//!
//! The server simulates a deployed application version. Everything that
//! varies between versions lives here:
//!
//! - **`config`** — resolves `AppConfig` from the process environment once at startup
//! - **`profile`** — the version → fault profile table
//! - **`fault`** — `FaultSource` randomness and the `FaultInjector` check

pub mod config;
pub mod error;
pub mod fault;
pub mod profile;

pub use config::AppConfig;
pub use error::{ConfigError, ConfigResult};
pub use fault::{FaultInjector, FaultSource, FixedSource, SeededSource, ThreadRngSource};
pub use profile::{FaultProfile, PROFILE_TABLE};
