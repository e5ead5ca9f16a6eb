pub mod toml_config;

pub use toml_config::{ApiConfig, AuthConfig, ClientConfig, DEFAULT_BASE_URL};
