use crate::utils::error::{Result, UntappdError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://api.untappd.com/v4/";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("untappd-rs/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// Either an application's client ID and secret, or a user access token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub access_token: Option<String>,
}

impl ClientConfig {
    pub fn with_client_credentials(client_id: &str, client_secret: &str) -> Self {
        Self {
            api: ApiConfig::default(),
            auth: AuthConfig {
                client_id: Some(client_id.to_string()),
                client_secret: Some(client_secret.to_string()),
                access_token: None,
            },
        }
    }

    pub fn with_access_token(access_token: &str) -> Self {
        Self {
            api: ApiConfig::default(),
            auth: AuthConfig {
                access_token: Some(access_token.to_string()),
                ..AuthConfig::default()
            },
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api.base_url = base_url.to_string();
        self
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UntappdError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| UntappdError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${UNTAPPD_CLIENT_ID})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UntappdError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.api.base_url)?;
        validation::validate_positive_number("api.timeout_seconds", self.api.timeout_seconds, 1)?;
        validation::validate_non_empty_string("api.user_agent", &self.api.user_agent)?;

        if let Some(token) = &self.auth.access_token {
            return validation::validate_non_empty_string("auth.access_token", token);
        }

        let client_id = validation::validate_required_field("auth.client_id", &self.auth.client_id)?;
        validation::validate_non_empty_string("auth.client_id", client_id)?;
        let client_secret =
            validation::validate_required_field("auth.client_secret", &self.auth.client_secret)?;
        validation::validate_non_empty_string("auth.client_secret", client_secret)?;

        Ok(())
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
