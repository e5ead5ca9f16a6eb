use crate::config::ClientConfig;
use crate::core::pagination::Query;
use crate::domain::ports::{Method, RawResponse, ResponseMeta, Transport};
use crate::utils::error::{Result, TransportError};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

/// [`Transport`] over HTTPS with reqwest. Adds the configured credentials to
/// every request.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    auth: Query,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = validate_url("api.base_url", &config.api.base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .user_agent(config.api.user_agent.as_str())
            .build()
            .map_err(TransportError::Http)?;

        let mut auth = Query::new();
        if let Some(token) = &config.auth.access_token {
            auth.set("access_token", token);
        } else {
            if let Some(client_id) = &config.auth.client_id {
                auth.set("client_id", client_id);
            }
            if let Some(client_secret) = &config.auth.client_secret {
                auth.set("client_secret", client_secret);
            }
        }

        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    /// Appends each `/`-separated part of `path` to the base URL as its own
    /// percent-encoded segment.
    fn endpoint(&self, path: &str) -> std::result::Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| TransportError::InvalidEndpoint {
                    base: self.base_url.to_string(),
                    path: path.to_string(),
                })?;
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|s| !s.is_empty()));
        }
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform(
        &self,
        method: Method,
        path: &str,
        query: &Query,
    ) -> std::result::Result<RawResponse, TransportError> {
        let url = self.endpoint(path)?;
        let params: Vec<(&str, &str)> = query.iter().chain(self.auth.iter()).collect();

        tracing::debug!("Sending {} request to {}", method.as_str(), url);
        let request = match method {
            Method::Get => self.client.get(url),
        };
        let response = request.query(&params).send().await?;

        let mut meta = ResponseMeta::new(response.status().as_u16());
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                meta.headers.insert(name.as_str().to_string(), value.to_string());
            }
        }

        let body = response.bytes().await?.to_vec();
        tracing::debug!("Received {} bytes with status {}", body.len(), meta.status);

        Ok(RawResponse { meta, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base_url: &str) -> HttpTransport {
        HttpTransport::new(&ClientConfig::with_access_token("tok").with_base_url(base_url)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let url = transport("https://api.untappd.com/v4/").endpoint("user/info/mdlayher").unwrap();
        assert_eq!(url.as_str(), "https://api.untappd.com/v4/user/info/mdlayher");

        let url = transport("https://api.untappd.com/v4").endpoint("brewery/info/549").unwrap();
        assert_eq!(url.as_str(), "https://api.untappd.com/v4/brewery/info/549");
    }

    #[test]
    fn test_endpoint_percent_encodes_segments() {
        let url = transport("https://api.untappd.com/v4/").endpoint("user/info/a b?c").unwrap();
        assert_eq!(url.as_str(), "https://api.untappd.com/v4/user/info/a%20b%3Fc");
    }

    #[test]
    fn test_access_token_replaces_client_credentials() {
        let mut config = ClientConfig::with_client_credentials("id", "secret");
        config.auth.access_token = Some("tok".to_string());
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.auth.get("access_token"), Some("tok"));
        assert_eq!(transport.auth.get("client_id"), None);
    }

    #[test]
    fn test_debug_hides_credentials() {
        let transport = HttpTransport::new(&ClientConfig::with_client_credentials("id", "secret")).unwrap();
        let rendered = format!("{:?}", transport);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("api.untappd.com"));
    }
}
