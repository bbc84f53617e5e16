pub mod config;
pub mod error;
pub mod types;

pub use config::{load_config, FetchConfig, MedscoutConfig};
pub use error::ExtractError;
