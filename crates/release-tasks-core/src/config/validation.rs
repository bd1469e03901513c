//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_debian(config)?;
    validate_release_notes(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_debian(config: &Config) -> Result<()> {
    if let Some(product) = &config.debian.product {
        if product.is_empty() || product.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                field: "debian.product".to_string(),
                message: "must be a non-empty name without whitespace".to_string(),
            }
            .into());
        }
    }

    if config.debian.changelog.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "debian.changelog".to_string(),
            message: "path cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_release_notes(config: &Config) -> Result<()> {
    let class = &config.release_notes.marker_class;
    if class.is_empty() || class.contains(char::is_whitespace) {
        return Err(ConfigError::InvalidValue {
            field: "release_notes.marker_class".to_string(),
            message: "must be a single class name".to_string(),
        }
        .into());
    }

    let valid_flavors = ["commonmark", "gfm"];
    if !valid_flavors.contains(&config.release_notes.flavor.as_str()) {
        return Err(ConfigError::InvalidValue {
            field: "release_notes.flavor".to_string(),
            message: format!("must be one of: {}", valid_flavors.join(", ")),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_product_with_space() {
        let mut config = Config::default();
        config.debian.product = Some("my app".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_marker_class() {
        let mut config = Config::default();
        config.release_notes.marker_class = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_unknown_flavor() {
        let mut config = Config::default();
        config.release_notes.flavor = "asciidoc".to_string();
        assert!(validate_config(&config).is_err());
    }
}
