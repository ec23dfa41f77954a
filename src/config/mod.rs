//! # Configuration Port
//!
//! Access to scope-keyed configuration values, abstracted behind the
//! [`ConfigStore`] port so the timezone service never knows where settings
//! live.
//!
//! Two adapters ship with the crate:
//! - [`MemoryConfigStore`] — a plain map, for tests and for embedders that
//!   already hold their configuration in memory.
//! - [`EnvConfigStore`] — environment variables with dotenv loading, for
//!   processes configured the twelve-factor way.

pub mod env_store;
pub mod memory_store;
pub mod store;

pub use env_store::EnvConfigStore;
pub use memory_store::MemoryConfigStore;
pub use store::ConfigStore;

/// Default configuration path of the per-scope timezone setting.
pub const DEFAULT_TIMEZONE_PATH: &str = "general/locale/timezone";
