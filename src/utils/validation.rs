use crate::utils::error::{PickupError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Page locations may be served (`http`, `https`) or opened from disk (`file`).
pub fn validate_location(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(PickupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" | "file" => Ok(url),
            scheme => Err(PickupError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PickupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// A listing path is resolved against the page, so it must stay relative.
pub fn validate_relative_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if Url::parse(path).is_ok() || path.starts_with("//") {
        return Err(PickupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must be relative to the page location".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PickupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_element_id(field_name: &str, id: &str) -> Result<()> {
    validate_non_empty_string(field_name, id)?;
    if id.chars().any(char::is_whitespace) {
        return Err(PickupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: id.to_string(),
            reason: "Element ids cannot contain whitespace".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(PickupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PickupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_location() {
        assert!(validate_location("location", "https://shop.example/index.html").is_ok());
        assert!(validate_location("location", "http://localhost:5500/").is_ok());
        assert!(validate_location("location", "file:///srv/site/index.html").is_ok());
        assert!(validate_location("location", "").is_err());
        assert!(validate_location("location", "index.html").is_err());
        assert!(validate_location("location", "ftp://shop.example/").is_err());
    }

    #[test]
    fn test_validate_relative_path() {
        assert!(validate_relative_path("listing_path", "products.html").is_ok());
        assert!(validate_relative_path("listing_path", "shop/products.html").is_ok());
        assert!(validate_relative_path("listing_path", "").is_err());
        assert!(validate_relative_path("listing_path", "https://other.example/products.html").is_err());
        assert!(validate_relative_path("listing_path", "//other.example/products.html").is_err());
    }

    #[test]
    fn test_validate_element_id() {
        assert!(validate_element_id("container_id", "pickup-container").is_ok());
        assert!(validate_element_id("container_id", "pickup container").is_err());
        assert!(validate_element_id("container_id", "  ").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("count", 3, 1).is_ok());
        assert!(validate_positive_number("count", 0, 1).is_err());
    }
}
