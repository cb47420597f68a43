use crate::utils::error::{EolError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A year is exactly four ASCII digits. The numeric value is not range-checked.
pub fn is_valid_year(input: &str) -> bool {
    input.len() == 4 && input.chars().all(|c| c.is_ascii_digit())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(EolError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    let url = Url::parse(url_str).map_err(|e| EolError::InvalidConfigValue {
        field: field_name.to_string(),
        value: url_str.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(EolError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            })
        }
    }

    if url.cannot_be_a_base() {
        return Err(EolError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot carry path segments".to_string(),
        });
    }

    Ok(url)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EolError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EolError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
