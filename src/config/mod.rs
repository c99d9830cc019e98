pub mod loader;
pub mod types;

pub use loader::{ConfigError, API_URL_ENV};
pub use types::{ApiConfig, Config, UiConfig, DEFAULT_BASE_URL};
