pub mod cache;
pub mod config;

pub use cache::{Cache, CacheError};
pub use config::{Config, ConfigError};
