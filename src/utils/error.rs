use crate::domain::ports::ResponseMeta;
use thiserror::Error;

/// Failure raised by a transport before any response could be read.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Cannot build request URL from base {base} and path {path}")]
    InvalidEndpoint { base: String, path: String },

    #[error("Transport unavailable: {message}")]
    Unavailable { message: String },
}

/// Error detail from the `meta` block the API attaches to failed responses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiErrorDetail {
    pub code: Option<u16>,
    pub error_type: Option<String>,
    pub error_detail: Option<String>,
}

impl std::fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.error_type, &self.error_detail) {
            (Some(kind), Some(detail)) => write!(f, "{}: {}", kind, detail),
            (Some(kind), None) => write!(f, "{}", kind),
            (None, Some(detail)) => write!(f, "{}", detail),
            (None, None) => write!(f, "no error detail"),
        }
    }
}

#[derive(Error, Debug)]
pub enum UntappdError {
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error("API returned status {}: {}", .meta.status, describe_detail(.detail))]
    Api {
        meta: ResponseMeta,
        detail: Option<ApiErrorDetail>,
    },

    #[error("Decode error: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        meta: Option<ResponseMeta>,
    },

    #[error("limit must not be greater than {ceiling} (got {limit})")]
    LimitExceeded { limit: u32, ceiling: u32 },

    #[error("Invalid argument {field} = {value:?}: {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

impl UntappdError {
    /// Transport metadata collected before the failure, if any.
    pub fn meta(&self) -> Option<&ResponseMeta> {
        match self {
            UntappdError::Api { meta, .. } => Some(meta),
            UntappdError::Decode { meta, .. } => meta.as_ref(),
            _ => None,
        }
    }

    /// True for failures raised locally, before a request was issued.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            UntappdError::LimitExceeded { .. } | UntappdError::InvalidArgument { .. }
        )
    }
}

fn describe_detail(detail: &Option<ApiErrorDetail>) -> String {
    detail
        .as_ref()
        .map_or_else(|| "no error detail".to_string(), ToString::to_string)
}

pub type Result<T> = std::result::Result<T, UntappdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_exceeded_message_names_ceiling() {
        let err = UntappdError::LimitExceeded {
            limit: 26,
            ceiling: 25,
        };
        assert_eq!(err.to_string(), "limit must not be greater than 25 (got 26)");
        assert!(err.is_local());
        assert!(err.meta().is_none());
    }

    #[test]
    fn test_api_error_exposes_meta() {
        let err = UntappdError::Api {
            meta: ResponseMeta::new(500),
            detail: Some(ApiErrorDetail {
                code: Some(500),
                error_type: Some("invalid_param".to_string()),
                error_detail: Some("bad user".to_string()),
            }),
        };
        assert_eq!(err.meta().map(|m| m.status), Some(500));
        assert!(err.to_string().contains("invalid_param: bad user"));
        assert!(!err.is_local());
    }
}
