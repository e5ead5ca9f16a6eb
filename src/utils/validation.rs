use crate::utils::error::{Result, UntappdError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(UntappdError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(UntappdError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(UntappdError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(UntappdError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| UntappdError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UntappdError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks a caller-supplied value that becomes one segment of a request path.
pub fn validate_path_segment(field_name: &str, value: &str) -> Result<()> {
    let reason = if value.trim().is_empty() {
        "Value cannot be empty or whitespace-only"
    } else if value.contains('/') {
        "Value cannot contain '/'"
    } else {
        return Ok(());
    };
    Err(UntappdError::InvalidArgument {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://api.untappd.com/v4").is_ok());
        assert!(validate_url("api.base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("api.timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("api.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("id".to_string());
        assert_eq!(validate_required_field("auth.client_id", &present).unwrap(), "id");
        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("auth.client_id", &missing),
            Err(UntappdError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_path_segment() {
        assert!(validate_path_segment("username", "mdlayher").is_ok());
        assert!(validate_path_segment("username", "").is_err());
        assert!(validate_path_segment("username", " \t").is_err());
        assert!(validate_path_segment("username", "a/b").is_err());
    }
}
