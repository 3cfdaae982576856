use crate::utils::error::{ContactError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ContactError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ContactError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ContactError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ContactError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Same rule a browser applies to a `required` input: only the empty string
/// fails, whitespace counts as a value.
pub fn validate_required(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ContactError::Validation {
            field: field_name.to_string(),
            reason: "Please fill out this field.".to_string(),
        });
    }
    Ok(())
}

/// Loose `type="email"` check: one `@`, something on both sides, no whitespace.
pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    let invalid = |reason: &str| ContactError::Validation {
        field: field_name.to_string(),
        reason: reason.to_string(),
    };

    if value.chars().any(char::is_whitespace) {
        return Err(invalid("Email address cannot contain spaces."));
    }

    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            if domain.contains('@') {
                Err(invalid("A part following '@' should not contain the symbol '@'."))
            } else if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
                Err(invalid("'.' is used at a wrong position in the domain."))
            } else {
                Ok(())
            }
        }
        Some((_, domain)) if domain.is_empty() => {
            Err(invalid("Please enter a part following '@'."))
        }
        Some(_) => Err(invalid("Please enter a part followed by '@'.")),
        None => Err(invalid("Please include an '@' in the email address.")),
    }
}
