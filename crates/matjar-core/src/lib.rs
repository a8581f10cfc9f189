pub mod app_config;
pub mod config;
pub mod links;
pub mod lookup;
pub mod price;
pub mod products;
pub mod slug;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use lookup::{filter_suggestions, resolve, DEFAULT_SUGGESTION_LIMIT};
pub use products::Product;
pub use slug::{feed_slug, normalize, slugify};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
