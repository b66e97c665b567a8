//! Resolves the Fashionaire API key and deployment mode from the environment
//! or a persistent key/value store.

pub mod config;
pub mod mode;
pub mod store;

pub use config::{Config, ConfigBuilder, KeySource, init_logger};
pub use mode::Mode;
pub use store::{EnvStore, FileStore, KeyValueStore, MemoryStore};
