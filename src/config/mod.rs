//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SdkConfig (validated, immutable)
//!     → handed to the manager client, poller and admin endpoint
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - This is the local SDK config; the remote topology lives in `store`

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::SdkConfig;
pub use schema::{AdminConfig, ManagerConfig, ObservabilityConfig, ReloadConfig};
